//! The surface elements are laid out on.
//!
//! A [`Surface`] owns its elements in insertion order, keyed by
//! [`ElementId`]. Every element's parent span is the surface size.

use indexmap::IndexMap;
use log::{debug, trace};

use tether_core::{
    geometry::{Bounds, Size},
    identifier::ElementId,
};

use crate::{
    alignable::{Alignable, Bounded},
    config::TextMetrics,
    element::{Element, RenderElement},
    error::TetherError,
};

#[derive(Debug, Clone)]
pub struct Surface {
    size: Size,
    text_metrics: TextMetrics,
    elements: IndexMap<ElementId, Element>,
    next_anonymous: usize,
}

impl Surface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            text_metrics: TextMetrics::default(),
            elements: IndexMap::new(),
            next_anonymous: 0,
        }
    }

    pub fn with_text_metrics(mut self, text_metrics: TextMetrics) -> Self {
        self.text_metrics = text_metrics;
        self
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width()
    }

    pub fn height(&self) -> i32 {
        self.size.height()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(0, 0, self.width(), self.height())
    }

    pub fn text_metrics(&self) -> TextMetrics {
        self.text_metrics
    }

    /// Change the surface size. Elements keep their positions and must be
    /// re-aligned by the caller.
    pub fn resize(&mut self, width: i32, height: i32) {
        self.size = Size::new(width, height);
        for element in self.elements.values_mut() {
            element.set_parent_size(self.size);
        }
        debug!(width, height; "Surface resized");
    }

    /// Add an element under a fresh anonymous id.
    pub fn add_element(&mut self, element: impl Into<Element>) -> ElementId {
        let id = loop {
            let candidate = ElementId::from_anonymous(self.next_anonymous);
            self.next_anonymous += 1;
            if !self.elements.contains_key(&candidate) {
                break candidate;
            }
        };
        self.re_add_element(id, element);
        id
    }

    /// Store `element` under `id`.
    ///
    /// An existing element with the same id is replaced in place and
    /// returned; otherwise the element is appended.
    pub fn re_add_element(&mut self, id: ElementId, element: impl Into<Element>) -> Option<Element> {
        let mut element = element.into();
        element.set_parent_size(self.size);
        trace!(id:% = id, kind = element.kind(); "Adding element");
        self.elements.insert(id, element)
    }

    /// Remove the element stored under `id`, keeping the order of the rest.
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        self.elements.shift_remove(&id)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.get_mut(&id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().map(|(id, element)| (*id, element))
    }

    /// Elements in drawing order: ascending z-index, ties in insertion order.
    pub fn elements_by_z_index(&self) -> Vec<(ElementId, &Element)> {
        let mut elements: Vec<_> = self.iter().collect();
        elements.sort_by_key(|(_, element)| element.z_index());
        elements
    }

    /// Align the element `id` inside the surface.
    ///
    /// Unrecognized rules leave the element where it was.
    pub fn align_element(
        &mut self,
        id: ElementId,
        horizontal: &str,
        horizontal_offset: i32,
        vertical: &str,
        vertical_offset: i32,
    ) -> Result<Bounds, TetherError> {
        let element = self
            .element_mut(id)
            .ok_or(TetherError::UnknownElement(id))?;
        element.align(horizontal, horizontal_offset, vertical, vertical_offset);
        Ok(element.scaled_bounds())
    }

    /// Align the element `id` against the element `target` using pair rules.
    ///
    /// # Errors
    ///
    /// Fails if either element is missing or either rule is invalid. Nothing
    /// moves on failure.
    pub fn align_element_to(
        &mut self,
        id: ElementId,
        target: ElementId,
        horizontal: &str,
        horizontal_offset: i32,
        vertical: &str,
        vertical_offset: i32,
    ) -> Result<Bounds, TetherError> {
        let target_bounds = self
            .element(target)
            .map(Bounded::scaled_bounds)
            .ok_or(TetherError::UnknownElement(target))?;
        let element = self
            .element_mut(id)
            .ok_or(TetherError::UnknownElement(id))?;
        element
            .align_to(
                &target_bounds,
                horizontal,
                horizontal_offset,
                vertical,
                vertical_offset,
            )
            .map_err(|err| TetherError::new_alignment_error(id, err))?;
        Ok(element.scaled_bounds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{ElementBuilder, RectBuilder, TextBuilder};

    fn surface_with_boxes() -> Surface {
        let mut surface = Surface::new(320, 240);
        RectBuilder::for_surface(&surface)
            .with_size(40, 20)
            .with_position(10, 10)
            .build_and_add(&mut surface, "anchor");
        RectBuilder::for_surface(&surface)
            .with_size(10, 10)
            .build_and_add(&mut surface, "follower");
        surface
    }

    #[test]
    fn test_add_element_anonymous_ids() {
        let mut surface = Surface::new(100, 100);
        let rect = RectBuilder::for_surface(&surface).build();
        let first = surface.add_element(rect.clone());
        let second = surface.add_element(rect);
        assert_ne!(first, second);
        assert!(first.is_anonymous());
        assert_eq!(surface.len(), 2);
    }

    #[test]
    fn test_add_element_skips_taken_anonymous_id() {
        let mut surface = Surface::new(100, 100);
        let rect = RectBuilder::for_surface(&surface).build();
        surface.re_add_element(ElementId::from_anonymous(0), rect.clone());
        let id = surface.add_element(rect);
        assert_eq!(id, ElementId::from_anonymous(1));
    }

    #[test]
    fn test_re_add_keeps_position_in_order() {
        let mut surface = surface_with_boxes();
        let replaced = TextBuilder::for_surface(&surface)
            .with_text("x")
            .build_and_add(&mut surface, "anchor");

        let ids: Vec<_> = surface.iter().map(|(id, _)| id.to_string()).collect();
        assert_eq!(ids, ["anchor", "follower"]);
        assert_eq!(surface.element(replaced).unwrap().kind(), "text");
    }

    #[test]
    fn test_remove_element() {
        let mut surface = surface_with_boxes();
        let removed = surface.remove_element(ElementId::new("anchor"));
        assert!(removed.is_some());
        assert!(!surface.contains(ElementId::new("anchor")));
        assert!(surface.remove_element(ElementId::new("anchor")).is_none());
    }

    #[test]
    fn test_elements_by_z_index_is_stable() {
        let mut surface = Surface::new(100, 100);
        for (name, z) in [("a", 1), ("b", 0), ("c", 1), ("d", -3)] {
            RectBuilder::for_surface(&surface)
                .with_z_index(z)
                .build_and_add(&mut surface, name);
        }
        let order: Vec<_> = surface
            .elements_by_z_index()
            .into_iter()
            .map(|(id, _)| id.to_string())
            .collect();
        assert_eq!(order, ["d", "b", "a", "c"]);
    }

    #[test]
    fn test_align_element_in_surface() {
        let mut surface = surface_with_boxes();
        let bounds = surface
            .align_element(ElementId::new("follower"), "right", -4, "50%", 0)
            .unwrap();
        assert_eq!(bounds, Bounds::new(306, 115, 10, 10));
    }

    #[test]
    fn test_align_element_to_sibling() {
        let mut surface = surface_with_boxes();
        let bounds = surface
            .align_element_to(
                ElementId::new("follower"),
                ElementId::new("anchor"),
                "leftOnRight",
                2,
                "centerOnCenter",
                0,
            )
            .unwrap();
        assert_eq!(bounds, Bounds::new(52, 15, 10, 10));
    }

    #[test]
    fn test_align_element_to_invalid_rule() {
        let mut surface = surface_with_boxes();
        let follower = ElementId::new("follower");
        let err = surface
            .align_element_to(
                follower,
                ElementId::new("anchor"),
                "leftOnRight",
                0,
                "middleOnTop",
                0,
            )
            .unwrap_err();
        assert!(matches!(err, TetherError::Alignment { element, .. } if element == follower));
        assert_eq!(
            surface.element(follower).unwrap().scaled_bounds(),
            Bounds::new(0, 0, 10, 10)
        );
    }

    #[test]
    fn test_align_unknown_element() {
        let mut surface = surface_with_boxes();
        let err = surface
            .align_element_to(
                ElementId::new("follower"),
                ElementId::new("missing"),
                "leftOnLeft",
                0,
                "topOnTop",
                0,
            )
            .unwrap_err();
        assert!(matches!(err, TetherError::UnknownElement(id) if id == "missing"));
    }

    #[test]
    fn test_resize_updates_parent() {
        let mut surface = surface_with_boxes();
        surface.resize(100, 100);
        let bounds = surface
            .align_element(ElementId::new("follower"), "end", 0, "end", 0)
            .unwrap();
        assert_eq!(bounds, Bounds::new(90, 90, 10, 10));
    }
}
