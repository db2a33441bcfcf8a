use crate::result::Result;
use std::path::PathBuf;

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (print every archive entry as it is written)
    pub verbose: bool,

    /// Directory the layout paths are resolved against
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, base_dir }
    }

    /// Context rooted at the process working directory
    pub fn current(verbose: bool) -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?, verbose))
    }
}
