mod archive;
mod args;
mod context;
mod error;
mod layout;
mod result;
mod utils;

use args::Args;
use context::Context;
use layout::Layout;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    let Args { verbose } = Args::parse();

    let ctx = Context::current(verbose)?;
    let layout = Layout::default();

    cliclack::intro("plugin-pack")?;

    let spinner = cliclack::spinner();
    spinner.start(format!("Packaging {}...", layout.source_root.display()));
    let summary = match archive::create_zip(&ctx, &layout) {
        Ok(summary) => {
            spinner.stop(format!(
                "Packed {} entries ({} bytes)",
                summary.entries, summary.bytes
            ));
            summary
        }
        Err(e) => {
            spinner.error("Failed to create archive");
            return Err(e);
        }
    };

    cliclack::outro(format!("Archive created: {}", summary.path.display()))?;
    Ok(())
}
