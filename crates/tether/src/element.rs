//! Drawable elements placed on a [`Surface`](crate::surface::Surface).
//!
//! Every element stores an unscaled size plus a scale factor. Alignment and
//! rendering both work on the scaled box, `size * scale` truncated toward
//! zero.

use svg::{self, node::Text as SvgText, node::element as svg_element};

use tether_core::{
    color::Color,
    geometry::{Bounds, Point, Size},
};

use crate::{
    alignable::{Alignable, Bounded},
    config::TextMetrics,
};

/// A rendered SVG fragment.
pub type SvgNode = Box<dyn svg::Node>;

/// An element that can be drawn.
pub trait RenderElement: Alignable {
    /// Elements with a higher z-index are drawn on top.
    fn z_index(&self) -> i32;

    fn render(&self) -> SvgNode;
}

/// A filled rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    position: Point,
    size: Size,
    scale: f32,
    color: Color,
    z_index: i32,
    parent: Size,
}

impl Rect {
    pub(crate) fn new(
        position: Point,
        size: Size,
        scale: f32,
        color: Color,
        z_index: i32,
        parent: Size,
    ) -> Self {
        Self {
            position,
            size,
            scale,
            color,
            z_index,
            parent,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// The size before scaling.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn scaled_size(&self) -> Size {
        self.size.scale(self.scale)
    }
}

impl Bounded for Rect {
    fn scaled_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.scaled_size())
    }
}

impl Alignable for Rect {
    fn parent_size(&self) -> Size {
        self.parent
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.position = Point::new(x, y);
    }
}

impl RenderElement for Rect {
    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn render(&self) -> SvgNode {
        let bounds = self.scaled_bounds();
        let rect = svg_element::Rectangle::new()
            .set("x", bounds.left())
            .set("y", bounds.top())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("fill", self.color.to_string())
            .set("fill-opacity", self.color.alpha());
        Box::new(rect)
    }
}

/// A single line of monospace text.
///
/// The box is `chars * char_width` wide and `line_height` tall, both scaled.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    position: Point,
    content: String,
    scale: f32,
    color: Color,
    shadow: bool,
    z_index: i32,
    metrics: TextMetrics,
    parent: Size,
}

impl Text {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        position: Point,
        content: String,
        scale: f32,
        color: Color,
        shadow: bool,
        z_index: i32,
        metrics: TextMetrics,
        parent: Size,
    ) -> Self {
        Self {
            position,
            content,
            scale,
            color,
            shadow,
            z_index,
            metrics,
            parent,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn has_shadow(&self) -> bool {
        self.shadow
    }

    /// The size before scaling.
    pub fn size(&self) -> Size {
        let chars = i32::try_from(self.content.chars().count()).unwrap_or(i32::MAX);
        Size::new(
            chars.saturating_mul(self.metrics.char_width()),
            self.metrics.line_height(),
        )
    }

    pub fn scaled_size(&self) -> Size {
        self.size().scale(self.scale)
    }

    fn render_line(&self, left: i32, top: i32, color: Color) -> svg_element::Text {
        svg_element::Text::new("")
            .set("x", left)
            .set("y", top)
            .set("dominant-baseline", "hanging")
            .set("font-family", "monospace")
            .set("font-size", self.scaled_size().height())
            .set("textLength", self.scaled_size().width())
            .set("fill", color.to_string())
            .set("fill-opacity", color.alpha())
            .add(SvgText::new(self.content.as_str()))
    }
}

impl Bounded for Text {
    fn scaled_bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.position, self.scaled_size())
    }
}

impl Alignable for Text {
    fn parent_size(&self) -> Size {
        self.parent
    }

    fn move_to(&mut self, x: i32, y: i32) {
        self.position = Point::new(x, y);
    }
}

impl RenderElement for Text {
    fn z_index(&self) -> i32 {
        self.z_index
    }

    fn render(&self) -> SvgNode {
        let left = self.position.x();
        let top = self.position.y();
        let text = self.render_line(left, top, self.color);
        if !self.shadow {
            return Box::new(text);
        }

        // Shadow sits one scaled pixel down-right at a quarter of the brightness
        let offset = (self.scale.trunc() as i32).max(1);
        let shadow_color = shadow_of(self.color);
        let group = svg_element::Group::new()
            .add(self.render_line(
                left.saturating_add(offset),
                top.saturating_add(offset),
                shadow_color,
            ))
            .add(text);
        Box::new(group)
    }
}

fn shadow_of(color: Color) -> Color {
    Color::new("#3f3f3f")
        .map(|shadow| shadow.with_alpha(color.alpha()))
        .unwrap_or(color)
}

/// Any element a surface can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect(Rect),
    Text(Text),
}

impl Element {
    /// The name of this element's kind, as used in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect(_) => "rect",
            Self::Text(_) => "text",
        }
    }

    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Self::Rect(rect) => Some(rect),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Self::Text(text) => Some(text),
            Self::Rect(_) => None,
        }
    }

    pub(crate) fn set_parent_size(&mut self, parent: Size) {
        match self {
            Self::Rect(rect) => rect.parent = parent,
            Self::Text(text) => text.parent = parent,
        }
    }
}

impl Bounded for Element {
    fn scaled_bounds(&self) -> Bounds {
        match self {
            Self::Rect(rect) => rect.scaled_bounds(),
            Self::Text(text) => text.scaled_bounds(),
        }
    }
}

impl Alignable for Element {
    fn parent_size(&self) -> Size {
        match self {
            Self::Rect(rect) => rect.parent_size(),
            Self::Text(text) => text.parent_size(),
        }
    }

    fn move_to(&mut self, x: i32, y: i32) {
        match self {
            Self::Rect(rect) => rect.move_to(x, y),
            Self::Text(text) => text.move_to(x, y),
        }
    }
}

impl RenderElement for Element {
    fn z_index(&self) -> i32 {
        match self {
            Self::Rect(rect) => rect.z_index(),
            Self::Text(text) => text.z_index(),
        }
    }

    fn render(&self) -> SvgNode {
        match self {
            Self::Rect(rect) => rect.render(),
            Self::Text(text) => text.render(),
        }
    }
}

impl From<Rect> for Element {
    fn from(rect: Rect) -> Self {
        Self::Rect(rect)
    }
}

impl From<Text> for Element {
    fn from(text: Text) -> Self {
        Self::Text(text)
    }
}
