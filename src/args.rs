use clap::{Arg, ArgAction, Command};

/// Command-line arguments for the packaging tool
#[derive(Debug)]
pub struct Args {
    /// Print each archive entry as it is written
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("plugin-pack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages the plugin addons directory and README into a zip archive")
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Print each archive entry as it is written")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
        }
    }
}
