use crate::context::Context;
use crate::error::Error;
use crate::layout::Layout;
use crate::result::Result;
use crate::utils;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, Seek, Write};
use std::path::{Path, PathBuf};
use time::OffsetDateTime;
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// Outcome of a packaging run
#[derive(Debug)]
pub struct Summary {
    /// Number of entries written, the readme included
    pub entries: usize,
    /// Total uncompressed size of all entries
    pub bytes: u64,
    /// Location of the finished archive
    pub path: PathBuf,
}

/// Package the source tree and the readme into the output zip.
///
/// Every file under the source root is stored at its path relative to the
/// base directory. The readme goes last, at the remap prefix joined with its
/// base name. Inputs are checked before the output file is touched.
pub fn create_zip(ctx: &Context, layout: &Layout) -> Result<Summary> {
    let source_dir = layout.source_dir(&ctx.base_dir);
    if !source_dir.is_dir() {
        return Err(Error::SourceNotFound(source_dir));
    }

    let readme_path = layout.readme_path(&ctx.base_dir);
    if !readme_path.is_file() {
        return Err(Error::ReadmeNotFound(readme_path));
    }
    let readme_entry = layout
        .readme_entry()
        .ok_or_else(|| Error::ReadmeNotFound(readme_path.clone()))?;
    let readme_name = utils::entry_name(&readme_entry)?;

    let output_path = layout.output_path(&ctx.base_dir);
    let file = File::create(&output_path)?;
    let mut builder = Builder::new(ctx, layout, file);

    for entry in WalkDir::new(&source_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();

        // symlinks count when they resolve to a file
        if !path.is_file() {
            continue;
        }

        let relative = path
            .strip_prefix(&ctx.base_dir)
            .map_err(|_| Error::custom(format!("{} is outside the base directory", path.display())))?;
        let name = utils::entry_name(relative)?;
        builder.add_file(path, name)?;
    }

    builder.add_file(&readme_path, readme_name)?;

    let (entries, bytes) = builder.finish()?;

    Ok(Summary {
        entries,
        bytes,
        path: output_path,
    })
}

/// Writes entries into a zip, refusing duplicate names.
///
/// Dropping the builder without calling [`Builder::finish`] still finalizes the
/// archive through `ZipWriter`'s drop.
struct Builder<'a, W: Write + Seek> {
    ctx: &'a Context,
    layout: &'a Layout,
    zip: ZipWriter<W>,
    names: HashSet<String>,
    bytes: u64,
}

impl<'a, W: Write + Seek> Builder<'a, W> {
    fn new(ctx: &'a Context, layout: &'a Layout, writer: W) -> Self {
        Self {
            ctx,
            layout,
            zip: ZipWriter::new(writer),
            names: HashSet::new(),
            bytes: 0,
        }
    }

    fn add_file(&mut self, path: &Path, name: String) -> Result<()> {
        if !self.names.insert(name.clone()) {
            return Err(Error::DuplicateEntry(name));
        }

        if self.ctx.verbose {
            println!("Adding {} as {}", path.display(), name);
        }

        let metadata = fs::metadata(path)?;
        let options = entry_options(self.layout, &metadata);

        self.zip.start_file(name, options)?;
        let mut f = File::open(path)?;
        self.bytes += io::copy(&mut f, &mut self.zip)?;

        Ok(())
    }

    fn finish(self) -> Result<(usize, u64)> {
        let mut out = self.zip.finish()?;
        out.flush()?;
        Ok((self.names.len(), self.bytes))
    }
}

fn entry_options(layout: &Layout, metadata: &fs::Metadata) -> SimpleFileOptions {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(layout.compression_level))
        .last_modified_time(modified_time(metadata));

    #[cfg(unix)]
    let options = {
        use std::os::unix::fs::PermissionsExt;
        options.unix_permissions(metadata.permissions().mode())
    };

    options
}

/// Source mtime as a zip timestamp, or the format's default when it cannot be
/// represented (zip timestamps start at 1980).
fn modified_time(metadata: &fs::Metadata) -> DateTime {
    metadata
        .modified()
        .ok()
        .map(OffsetDateTime::from)
        .and_then(|t| DateTime::try_from(t).ok())
        .unwrap_or_default()
}
