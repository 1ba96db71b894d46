pub mod svg;

use thiserror::Error;

use crate::surface::Surface;

/// Writes a laid out surface somewhere.
pub trait Exporter {
    fn export_surface(&self, surface: &Surface) -> Result<(), Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
