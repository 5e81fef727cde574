//! Errors that stop a render.
//!
//! Geometry never fails: degenerate cases are treated as "no hit". What can
//! fail is the glue around the core, and each failure maps to its own process
//! exit status.

use std::path::PathBuf;

/// Buffer whose allocation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Buffer {
    /// The output file name.
    Filename,
    /// The RGB frame.
    Frame,
}

impl std::fmt::Display for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Buffer::Filename => write!(f, "output file name"),
            Buffer::Frame => write!(f, "frame buffer"),
        }
    }
}

/// Failure of a render run.
#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    /// The output name given on the command line cannot be used.
    #[error("invalid output name `{name}`: {reason}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A buffer could not be allocated.
    #[error("failed to allocate {bytes} bytes for the {buffer}")]
    Allocation {
        /// Which buffer.
        buffer: Buffer,
        /// Requested size.
        bytes: usize,
    },

    /// The image could not be encoded or written.
    #[error("failed to save image to {}: {source}", .path.display())]
    Save {
        /// Destination path.
        path: PathBuf,
        /// Encoder or I/O error.
        #[source]
        source: image::ImageError,
    },
}

impl RenderError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            RenderError::InvalidName { .. } => 2,
            RenderError::Allocation { buffer: Buffer::Filename, .. } => 9,
            RenderError::Allocation { buffer: Buffer::Frame, .. } => 10,
            RenderError::Save { .. } => 1,
        }
    }
}
