//! Declarative scenes.
//!
//! A scene describes a surface and its elements in TOML. Each element may
//! carry an `align` table; alignments against other elements are applied
//! after their targets, in dependency order.
//!
//! ```toml
//! width = 320
//! height = 240
//!
//! [[elements]]
//! id = "panel"
//! kind = "rect"
//! width = 120
//! height = 60
//! align = { horizontal = "center", vertical = "center" }
//!
//! [[elements]]
//! id = "title"
//! kind = "text"
//! text = "Paused"
//! align = { to = "panel", horizontal = "centerOnCenter", vertical = "bottomOnTop", vertical_offset = -2 }
//! ```

use std::collections::HashMap;

use log::{debug, trace};
use petgraph::{
    algo::toposort,
    graph::{DiGraph, NodeIndex},
};
use serde::Deserialize;
use thiserror::Error;

use tether_core::{color::Color, geometry::Bounds, identifier::ElementId};
use tether_parser::error::InvalidAlignment;

use crate::{
    alignable::{Alignable, Bounded},
    builder::{ElementBuilder, RectBuilder, TextBuilder},
    config::TextMetrics,
    element::Element,
    error::TetherError,
    surface::Surface,
};

/// Problems with the structure of a scene.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("element `{0}` is defined more than once")]
    DuplicateElement(String),

    #[error("element `{element}` is aligned to unknown element `{target}`")]
    UnknownTarget { element: String, target: String },

    #[error("element `{0}` is part of an alignment cycle")]
    AlignmentCycle(String),

    #[error("element `{element}` has an invalid color: {message}")]
    InvalidColor { element: String, message: String },

    #[error("element `{element}` has an invalid scale {scale}")]
    InvalidScale { element: String, scale: f32 },
}

/// A whole scene file.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneDefinition {
    width: i32,
    height: i32,
    #[serde(default)]
    elements: Vec<ElementDefinition>,
}

/// One `[[elements]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ElementDefinition {
    id: String,
    #[serde(flatten)]
    kind: ElementKind,
    #[serde(default)]
    x: i32,
    #[serde(default)]
    y: i32,
    #[serde(default = "default_scale")]
    scale: f32,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    z_index: i32,
    #[serde(default)]
    align: Option<AlignmentDefinition>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementKind {
    Rect {
        width: i32,
        height: i32,
    },
    Text {
        text: String,
        #[serde(default)]
        shadow: bool,
    },
}

/// The `align` table of an element.
///
/// Without `to`, rules are single anchors applied against the surface and
/// unrecognized rules are ignored. With `to`, rules are anchor pairs applied
/// against the named element and must be valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlignmentDefinition {
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    horizontal: Option<String>,
    #[serde(default)]
    horizontal_offset: i32,
    #[serde(default)]
    vertical: Option<String>,
    #[serde(default)]
    vertical_offset: i32,
}

fn default_scale() -> f32 {
    1.0
}

impl SceneDefinition {
    /// Parse a scene from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, TetherError> {
        let scene: Self = toml::from_str(source)?;
        trace!(elements = scene.elements.len(); "Scene parsed");
        Ok(scene)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn elements(&self) -> &[ElementDefinition] {
        &self.elements
    }

    /// Build every element and apply all alignments.
    ///
    /// # Errors
    ///
    /// Fails on duplicate ids, unknown or cyclic alignment targets, invalid
    /// colors or scales, and invalid pair rules.
    pub fn build_surface(&self, text_metrics: TextMetrics) -> Result<Surface, TetherError> {
        let mut surface = Surface::new(self.width, self.height).with_text_metrics(text_metrics);

        // Node indices match element indices
        let mut graph: DiGraph<usize, ()> = DiGraph::new();
        let mut nodes: HashMap<&str, NodeIndex> = HashMap::new();
        for (idx, definition) in self.elements.iter().enumerate() {
            let node = graph.add_node(idx);
            if nodes.insert(definition.id.as_str(), node).is_some() {
                return Err(SceneError::DuplicateElement(definition.id.clone()).into());
            }
            let element = definition.build(&surface)?;
            surface.re_add_element(ElementId::new(&definition.id), element);
        }

        for (idx, definition) in self.elements.iter().enumerate() {
            let Some(target) = definition.align_target() else {
                continue;
            };
            if target == definition.id {
                return Err(SceneError::AlignmentCycle(definition.id.clone()).into());
            }
            let target_node = nodes.get(target).ok_or_else(|| SceneError::UnknownTarget {
                element: definition.id.clone(),
                target: target.to_string(),
            })?;
            graph.add_edge(*target_node, NodeIndex::new(idx), ());
        }

        let order = toposort(&graph, None).map_err(|cycle| {
            SceneError::AlignmentCycle(self.elements[graph[cycle.node_id()]].id.clone())
        })?;

        for node in order {
            let definition = &self.elements[graph[node]];
            let Some(align) = &definition.align else {
                continue;
            };
            let id = ElementId::new(&definition.id);
            let target = definition
                .align_target()
                .and_then(|target| surface.element(ElementId::new(target)))
                .map(|target| target.scaled_bounds());
            let Some(element) = surface.element_mut(id) else {
                continue;
            };
            align
                .apply(element, target)
                .map_err(|err| TetherError::new_alignment_error(id, err))?;
            debug!(id = definition.id, bounds:% = element.scaled_bounds(); "Element aligned");
        }

        Ok(surface)
    }
}

impl ElementDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    fn align_target(&self) -> Option<&str> {
        self.align.as_ref().and_then(|align| align.to.as_deref())
    }

    fn build(&self, surface: &Surface) -> Result<Element, SceneError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(SceneError::InvalidScale {
                element: self.id.clone(),
                scale: self.scale,
            });
        }
        let color = self
            .color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| SceneError::InvalidColor {
                element: self.id.clone(),
                message: err.to_string(),
            })?
            .unwrap_or_default();

        let element = match &self.kind {
            ElementKind::Rect { width, height } => RectBuilder::for_surface(surface)
                .with_position(self.x, self.y)
                .with_size(*width, *height)
                .with_scale(self.scale)
                .with_color(color)
                .with_z_index(self.z_index)
                .build()
                .into(),
            ElementKind::Text { text, shadow } => TextBuilder::for_surface(surface)
                .with_text(text.as_str())
                .with_position(self.x, self.y)
                .with_scale(self.scale)
                .with_color(color)
                .with_shadow(*shadow)
                .with_z_index(self.z_index)
                .build()
                .into(),
        };
        Ok(element)
    }
}

impl AlignmentDefinition {
    /// Apply the rules against the surface, or against `target` if given.
    fn apply(&self, element: &mut Element, target: Option<Bounds>) -> Result<(), InvalidAlignment> {
        let horizontal = self.horizontal.as_deref();
        let vertical = self.vertical.as_deref();

        let Some(target) = target else {
            if let Some(rule) = horizontal {
                element.align_horizontally(rule, self.horizontal_offset);
            }
            if let Some(rule) = vertical {
                element.align_vertically(rule, self.vertical_offset);
            }
            return Ok(());
        };

        match (horizontal, vertical) {
            (Some(h), Some(v)) => {
                element.align_to(&target, h, self.horizontal_offset, v, self.vertical_offset)?;
            }
            (Some(h), None) => {
                element.align_horizontally_to(&target, h, self.horizontal_offset)?;
            }
            (None, Some(v)) => {
                element.align_vertically_to(&target, v, self.vertical_offset)?;
            }
            (None, None) => {}
        }
        Ok(())
    }
}
