use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal error raised while loading an OBJ or MTL file.
///
/// Carries the offending file path and, for syntax errors, the 1-based
/// source line number. A returned error means the owning
/// [`WavefrontFile`](crate::wavefront::WavefrontFile) is only partially
/// populated and must be discarded by the caller.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {message}", .path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl ParseError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn syntax(path: &Path, line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    /// The file the error originated from.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Syntax { path, .. } => path,
        }
    }

    /// The 1-based source line for syntax errors, `None` for I/O errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Io { .. } => None,
            Self::Syntax { line, .. } => Some(*line),
        }
    }
}
