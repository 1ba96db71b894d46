//! Tether - anchor-based layout for overlay surfaces.
//!
//! Elements are placed on a fixed-size surface either against the surface
//! itself (`"center"`, `"right"`, `"25%"`) or against another element
//! (`"leftOnRight"`, `"bottomOnTop"`). Scenes can be built in code through
//! the [`builder`] API or loaded from TOML, and rendered to SVG.

pub mod alignable;
pub mod builder;
pub mod config;
pub mod element;
pub mod scene;
pub mod surface;

mod error;
mod export;

pub use tether_core::{anchor, color, geometry, identifier};
pub use tether_parser::{
    Span,
    error::{ErrorCode, InvalidAlignment},
};

pub use error::TetherError;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use scene::SceneDefinition;
use surface::Surface;

/// Builder for loading and rendering Tether scenes.
///
/// # Examples
///
/// ```rust
/// use tether::{LayoutBuilder, config::AppConfig};
///
/// let source = r#"
///     width = 200
///     height = 100
///
///     [[elements]]
///     id = "panel"
///     kind = "rect"
///     width = 50
///     height = 20
///     align = { horizontal = "center", vertical = "center" }
/// "#;
///
/// let builder = LayoutBuilder::new(AppConfig::default());
/// let surface = builder.parse(source).expect("Failed to parse");
/// let svg = builder.render_svg(&surface).expect("Failed to render");
/// assert!(svg.contains("<rect"));
/// ```
#[derive(Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse a TOML scene and lay it out on a new surface.
    ///
    /// # Errors
    ///
    /// Returns `TetherError` for malformed TOML, structural scene problems and
    /// invalid pair alignments.
    pub fn parse(&self, source: &str) -> Result<Surface, TetherError> {
        info!("Parsing scene");
        let scene = SceneDefinition::from_toml(source)?;
        self.load(&scene)
    }

    /// Lay out an already parsed scene on a new surface.
    pub fn load(&self, scene: &SceneDefinition) -> Result<Surface, TetherError> {
        let surface = scene.build_surface(self.config.text())?;
        debug!(elements = surface.len(); "Scene laid out successfully");
        trace!(surface:?; "Laid out surface");
        Ok(surface)
    }

    /// Render a surface to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns `TetherError` if the configured background color is invalid
    /// or the surface cannot be rendered.
    pub fn render_svg(&self, surface: &Surface) -> Result<String, TetherError> {
        let doc = self.exporter("")?.render_surface(surface)?;
        info!("SVG rendered successfully");
        Ok(doc.to_string())
    }

    /// Render a surface and write it to `path`.
    pub fn export_svg(&self, surface: &Surface, path: &str) -> Result<(), TetherError> {
        info!(path; "Exporting surface");
        self.exporter(path)?.export_surface(surface)?;
        Ok(())
    }

    fn exporter(&self, path: &str) -> Result<export::svg::Svg, TetherError> {
        let background = self
            .config
            .style()
            .background_color()
            .map_err(TetherError::Config)?;
        Ok(export::svg::Svg::new(path).with_background(background))
    }
}
