use std::path::{Path, PathBuf};

/// Environment variable enabling verbose output
pub const VERBOSE_ENV: &str = "MAKEZIP_VERBOSE";

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show command execution details)
    pub verbose: bool,

    /// Submission directory (holds groupinfo.txt and the project subdirectories)
    pub base_dir: PathBuf,
}

impl Context {
    pub fn new(base_dir: PathBuf, verbose: bool) -> Self {
        Self { verbose, base_dir }
    }

    /// Context for the current working directory, verbosity taken from `MAKEZIP_VERBOSE`
    pub fn from_env() -> std::io::Result<Self> {
        let verbose = std::env::var(VERBOSE_ENV)
            .map(|v| !v.is_empty() && v != "0")
            .unwrap_or(false);
        Ok(Self::new(std::env::current_dir()?, verbose))
    }

    /// Resolve a path relative to the submission directory
    pub fn path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.base_dir.join(relative)
    }
}
