use std::path::PathBuf;
use thiserror::Error;

/// Printed when the group info file is missing.
pub const GROUP_INFO_HELP: &str = "Create that file with three lines:
Group: [your group number]
Full Name 1 (userid1)
Full Name 2 (userid2)

Without group (individual submission):
First line 'No group', second line your name (userid)";

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("{} not found\n{}", .0.display(), GROUP_INFO_HELP)]
    GroupInfoNotFound(PathBuf),

    #[error("{0}")]
    CommandFailed(String),

    #[error("Unable to parse {}: {error}", path.display())]
    InvalidManifest {
        path: PathBuf,
        error: toml::de::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}
