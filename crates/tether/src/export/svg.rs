use std::{fs::File, io::Write};

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use tether_core::color::Color;

use crate::{
    element::RenderElement,
    export::{self, Exporter},
    surface::Surface,
};

/// SVG exporter for surfaces.
///
/// Elements are drawn in ascending z-index order, ties in insertion order,
/// on top of an optional background fill.
#[derive(Debug, Clone)]
pub struct Svg {
    file_name: String,
    background: Option<Color>,
}

impl Svg {
    pub fn new(file_name: &str) -> Self {
        Self {
            file_name: file_name.to_string(),
            background: None,
        }
    }

    pub fn with_background(mut self, background: Option<Color>) -> Self {
        self.background = background;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Render `surface` into an SVG document.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if the surface has no area.
    pub fn render_surface(&self, surface: &Surface) -> Result<Document, export::Error> {
        let (width, height) = (surface.width(), surface.height());
        if width <= 0 || height <= 0 {
            return Err(export::Error::Render(format!(
                "surface of size {width}x{height} has no area"
            )));
        }

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));

        if let Some(background) = &self.background {
            let bg = svg_element::Rectangle::new()
                .set("width", width)
                .set("height", height)
                .set("fill", background)
                .set("fill-opacity", background.alpha());
            doc = doc.add(bg);
        }

        for (id, element) in surface.elements_by_z_index() {
            debug!(id:% = id, kind = element.kind(), z_index = element.z_index(); "Rendering element");
            doc = doc.add(element.render());
        }

        Ok(doc)
    }

    /// Writes an SVG document to the configured file.
    pub fn write_document(&self, doc: Document) -> Result<(), export::Error> {
        info!(file_name = self.file_name; "Creating SVG file");
        let mut f = File::create(&self.file_name).inspect_err(|err| {
            error!(file_name = self.file_name, err:% = err; "Failed to create SVG file");
        })?;

        write!(f, "{doc}").inspect_err(|err| {
            error!(file_name = self.file_name, err:% = err; "Failed to write SVG content");
        })?;

        Ok(())
    }
}

impl Exporter for Svg {
    fn export_surface(&self, surface: &Surface) -> Result<(), export::Error> {
        let doc = self.render_surface(surface)?;
        debug!("SVG document rendered");

        self.write_document(doc)
    }
}
