//! Error types for Tether operations.
//!
//! This module provides the main error type [`TetherError`] which wraps
//! the error conditions that can occur while loading, laying out and
//! exporting a surface.

use std::io;

use thiserror::Error;

use tether_core::identifier::ElementId;
use tether_parser::error::InvalidAlignment;

use crate::{export, scene::SceneError};

/// The main error type for Tether operations.
///
/// # Diagnostic Variants
///
/// The `Alignment` variant carries the rejected rule together with the span
/// of the offending token, which can be used for rich error reporting.
#[derive(Debug, Error)]
pub enum TetherError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Scene format error: {0}")]
    SceneFormat(#[from] toml::de::Error),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Cannot align `{element}`: {err}")]
    Alignment {
        element: ElementId,
        err: InvalidAlignment,
    },

    #[error("Unknown element `{0}`")]
    UnknownElement(ElementId),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),
}

impl TetherError {
    /// Create a new `Alignment` error for `element`.
    pub fn new_alignment_error(element: ElementId, err: InvalidAlignment) -> Self {
        Self::Alignment { element, err }
    }
}
