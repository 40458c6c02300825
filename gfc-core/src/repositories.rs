// Low-level persistence access traits.

use std::io;

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Durable single-slot cache of the last map viewport.
pub trait ViewportRepo {
    /// Overwrites the slot unconditionally.
    fn save_last_viewport(&self, viewport: &Viewport) -> Result<()>;

    // Fails with `Error::NotFound` as long as nothing has been saved.
    fn load_last_viewport(&self) -> Result<Viewport>;
}
