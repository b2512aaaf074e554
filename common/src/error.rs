use std::{io, path::PathBuf};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to allocate a {width}x{height} canvas")]
    Allocation { width: u32, height: u32 },

    #[error("linear gradient needs at least 2 color stops, got {0}")]
    InvalidGradient(usize),

    #[error("failed to encode jpeg: {0}")]
    Encoding(String),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("font unavailable: {0}")]
    Font(String),
}
