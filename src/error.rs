use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Unable to {action} {}: {error}", path.display())]
    Path {
        action: &'static str,
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Unable to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),

    #[error("Unable to scan for artifacts: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Unable to copy {} to {}: {error}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Unable to write archive {}: {error}", path.display())]
    Archive {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }

    /// Attach the failed action and its path to an I/O error
    pub fn path<P: Into<PathBuf>>(action: &'static str, path: P) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |error| Error::Path { action, path, error }
    }
}
