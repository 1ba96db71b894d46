//! Builders for surface elements.
//!
//! A builder captures the parent size (and, for text, the glyph metrics) of
//! the surface it was created for. [`ElementBuilder::build`] returns a free
//! standing element; [`ElementBuilder::build_and_add`] also stores it on a
//! surface under the given id.
//!
//! # Example
//!
//! ```
//! # use tether::alignable::{Alignable, Bounded};
//! # use tether::builder::{ElementBuilder, RectBuilder};
//! # use tether::surface::Surface;
//! let mut surface = Surface::new(200, 100);
//! let panel = RectBuilder::for_surface(&surface)
//!     .with_size(50, 20)
//!     .build_and_add(&mut surface, "panel");
//!
//! let panel = surface.element_mut(panel).unwrap();
//! panel.align("center", 5, "top", 0);
//! assert_eq!(panel.scaled_left(), 80);
//! ```

use tether_core::{
    color::Color,
    geometry::{Point, Size},
    identifier::ElementId,
};

use crate::{
    config::TextMetrics,
    element::{Element, Rect, RenderElement, Text},
    surface::Surface,
};

/// Construction of a single kind of element.
pub trait ElementBuilder {
    type Element: RenderElement + Into<Element>;

    /// Build a new element from the current settings.
    fn build(&self) -> Self::Element;

    /// Build a new element and store it on `surface` as `id`, replacing any
    /// element already stored under that id.
    fn build_and_add(&self, surface: &mut Surface, id: impl Into<ElementId>) -> ElementId {
        let id = id.into();
        surface.re_add_element(id, self.build());
        id
    }
}

/// Builder for [`Rect`] elements.
#[derive(Debug, Clone)]
pub struct RectBuilder {
    position: Point,
    size: Size,
    scale: f32,
    color: Color,
    z_index: i32,
    parent: Size,
}

impl RectBuilder {
    pub fn new(parent: Size) -> Self {
        Self {
            position: Point::default(),
            size: Size::default(),
            scale: 1.0,
            color: Color::default(),
            z_index: 0,
            parent,
        }
    }

    pub fn for_surface(surface: &Surface) -> Self {
        Self::new(surface.size())
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    /// Set the size before scaling.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.size = Size::new(width, height);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

impl ElementBuilder for RectBuilder {
    type Element = Rect;

    fn build(&self) -> Rect {
        Rect::new(
            self.position,
            self.size,
            self.scale,
            self.color,
            self.z_index,
            self.parent,
        )
    }
}

/// Builder for [`Text`] elements.
#[derive(Debug, Clone)]
pub struct TextBuilder {
    position: Point,
    content: String,
    scale: f32,
    color: Color,
    shadow: bool,
    z_index: i32,
    metrics: TextMetrics,
    parent: Size,
}

impl TextBuilder {
    pub fn new(parent: Size, metrics: TextMetrics) -> Self {
        Self {
            position: Point::default(),
            content: String::new(),
            scale: 1.0,
            color: Color::default(),
            shadow: false,
            z_index: 0,
            metrics,
            parent,
        }
    }

    pub fn for_surface(surface: &Surface) -> Self {
        Self::new(surface.size(), surface.text_metrics())
    }

    pub fn with_text(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.position = Point::new(x, y);
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_shadow(mut self, shadow: bool) -> Self {
        self.shadow = shadow;
        self
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }
}

impl ElementBuilder for TextBuilder {
    type Element = Text;

    fn build(&self) -> Text {
        Text::new(
            self.position,
            self.content.clone(),
            self.scale,
            self.color,
            self.shadow,
            self.z_index,
            self.metrics,
            self.parent,
        )
    }
}
