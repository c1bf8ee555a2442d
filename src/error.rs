//! Error taxonomy for figure generation and export.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while rendering or exporting a wireframe figure.
#[derive(Debug)]
pub enum RenderError {
    /// The output directory could not be created.
    CreateDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// An output file could not be written.
    WriteFile {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
    /// The PDF backend failed to assemble or serialize the document.
    Pdf(printpdf::errors::Error),
    /// An in-memory serialization buffer could not be finalized.
    Io(io::Error),
}

impl From<io::Error> for RenderError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<printpdf::errors::Error> for RenderError {
    fn from(err: printpdf::errors::Error) -> Self {
        Self::Pdf(err)
    }
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CreateDir { path, .. } => {
                write!(f, "Failed to create output directory {}", path.display())
            }
            Self::WriteFile { path, .. } => {
                write!(f, "Failed to write output file {}", path.display())
            }
            Self::Pdf(_) => write!(f, "Failed to render the PDF document"),
            Self::Io(_) => write!(f, "Failed to finalize the serialized document"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } | Self::WriteFile { source, .. } => Some(source),
            Self::Pdf(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}
