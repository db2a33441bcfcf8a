use std::path::{Path, PathBuf};

/// Directory whose contents are packaged, relative to the base directory
pub const SOURCE_ROOT: &str = "addons";

/// Standalone file added on top of the source tree
pub const README: &str = "README.md";

/// Directory inside the archive that receives the standalone file
pub const README_PREFIX: &str = "addons/fusion_compute";

/// Name of the produced archive
pub const OUTPUT: &str = "fusion-compute-plugin.zip";

/// Deflate level used for every entry
pub const COMPRESSION_LEVEL: i64 = 9;

/// Where the packaged files come from and where the archive goes.
///
/// Paths are relative to [`Context::base_dir`](crate::context::Context).
#[derive(Debug, Clone)]
pub struct Layout {
    pub source_root: PathBuf,
    pub readme: PathBuf,
    pub readme_prefix: PathBuf,
    pub output: PathBuf,
    pub compression_level: i64,
}

impl Layout {
    /// Archive path of the standalone file: the remap prefix joined with its base name.
    ///
    /// Returns `None` if the standalone path has no file name.
    pub fn readme_entry(&self) -> Option<PathBuf> {
        self.readme
            .file_name()
            .map(|name| self.readme_prefix.join(name))
    }

    pub fn source_dir(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.source_root)
    }

    pub fn readme_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.readme)
    }

    pub fn output_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.output)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from(SOURCE_ROOT),
            readme: PathBuf::from(README),
            readme_prefix: PathBuf::from(README_PREFIX),
            output: PathBuf::from(OUTPUT),
            compression_level: COMPRESSION_LEVEL,
        }
    }
}
