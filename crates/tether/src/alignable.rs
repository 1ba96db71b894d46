//! The alignment contract shared by every element on a surface.
//!
//! [`Bounded`] exposes an element's scaled bounding box; [`Alignable`] adds
//! the parent span and a single mutating primitive, [`Alignable::move_to`],
//! and builds every alignment operation on top of them.
//!
//! There are two families of operations:
//!
//! - `align_horizontally` / `align_vertically` place an element inside its
//!   parent using a single anchor (`"center"`, `"right"`, `"25%"`). Rules
//!   that do not parse are ignored and leave the element where it was.
//! - `align_horizontally_to` / `align_vertically_to` place an element
//!   against another one using an anchor pair (`"leftOnRight"`). Rules that
//!   do not parse are rejected with [`InvalidAlignment`] before anything
//!   moves.

use log::{debug, warn};

use tether_core::{
    anchor::AnchorPair,
    geometry::{Axis, Bounds, Size},
};
use tether_parser::{error::InvalidAlignment, parse_anchor, parse_anchor_pair};

/// Anything with a scaled bounding box.
///
/// Only [`scaled_bounds`](Bounded::scaled_bounds) is required; it is
/// recomputed on every call and never cached by callers.
pub trait Bounded {
    fn scaled_bounds(&self) -> Bounds;

    fn scaled_left(&self) -> i32 {
        self.scaled_bounds().left()
    }

    fn scaled_top(&self) -> i32 {
        self.scaled_bounds().top()
    }

    fn scaled_width(&self) -> i32 {
        self.scaled_bounds().width()
    }

    fn scaled_height(&self) -> i32 {
        self.scaled_bounds().height()
    }

    fn scaled_right(&self) -> i32 {
        self.scaled_bounds().right()
    }

    fn scaled_bottom(&self) -> i32 {
        self.scaled_bounds().bottom()
    }
}

impl Bounded for Bounds {
    fn scaled_bounds(&self) -> Bounds {
        *self
    }
}

/// An element that can be positioned by alignment rules.
///
/// # Examples
///
/// ```
/// use tether::alignable::{Alignable, Bounded};
/// use tether::geometry::{Bounds, Size};
///
/// struct Badge {
///     bounds: Bounds,
/// }
///
/// impl Bounded for Badge {
///     fn scaled_bounds(&self) -> Bounds {
///         self.bounds
///     }
/// }
///
/// impl Alignable for Badge {
///     fn parent_size(&self) -> Size {
///         Size::new(200, 100)
///     }
///
///     fn move_to(&mut self, x: i32, y: i32) {
///         self.bounds = Bounds::new(x, y, self.bounds.width(), self.bounds.height());
///     }
/// }
///
/// let mut badge = Badge { bounds: Bounds::new(0, 0, 50, 20) };
/// badge.align("center", 5, "bottom", -2);
/// assert_eq!(badge.scaled_left(), 80);
/// assert_eq!(badge.scaled_top(), 78);
/// ```
pub trait Alignable: Bounded {
    /// The size of the container this element is laid out in.
    fn parent_size(&self) -> Size;

    /// Move the element's top-left corner to `(x, y)`.
    fn move_to(&mut self, x: i32, y: i32);

    fn parent_width(&self) -> i32 {
        self.parent_size().width()
    }

    fn parent_height(&self) -> i32 {
        self.parent_size().height()
    }

    /// Move horizontally, keeping the current top edge.
    fn move_to_x(&mut self, x: i32) {
        let y = self.scaled_top();
        self.move_to(x, y);
    }

    /// Move vertically, keeping the current left edge.
    fn move_to_y(&mut self, y: i32) {
        let x = self.scaled_left();
        self.move_to(x, y);
    }

    /// Move the leading edge along `axis` to `position`.
    fn move_along(&mut self, axis: Axis, position: i32) {
        match axis {
            Axis::Horizontal => self.move_to_x(position),
            Axis::Vertical => self.move_to_y(position),
        }
    }

    /// Align inside the parent width using `left`, `center`, `right` or `<p>%`.
    ///
    /// Unrecognized rules are ignored.
    fn align_horizontally(&mut self, alignment: &str, offset: i32) -> &mut Self {
        self.align_in_parent(Axis::Horizontal, alignment, offset)
    }

    /// Align inside the parent height using `top`, `center`, `bottom` or `<p>%`.
    ///
    /// Unrecognized rules are ignored.
    fn align_vertically(&mut self, alignment: &str, offset: i32) -> &mut Self {
        self.align_in_parent(Axis::Vertical, alignment, offset)
    }

    /// Align inside the parent span along `axis`.
    fn align_in_parent(&mut self, axis: Axis, alignment: &str, offset: i32) -> &mut Self {
        match parse_anchor(alignment, axis) {
            Ok(anchor) => {
                let parent_span = self.parent_size().span(axis);
                let own_span = self.scaled_bounds().span(axis);
                let position = anchor
                    .resolve_in_parent(parent_span, own_span)
                    .saturating_add(offset);
                debug!(alignment = alignment, axis:% = axis, position; "Aligned in parent");
                self.move_along(axis, position);
            }
            Err(err) => {
                warn!(alignment = alignment, axis:% = axis, err:% = err; "Ignoring unrecognized alignment");
            }
        }
        self
    }

    /// Align against `other` horizontally using an `{own}on{other}` rule,
    /// e.g. `leftOnCenter`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAlignment`] if either anchor is invalid; the element
    /// does not move in that case.
    fn align_horizontally_to<O>(
        &mut self,
        other: &O,
        alignment: &str,
        offset: i32,
    ) -> Result<&mut Self, InvalidAlignment>
    where
        O: Bounded + ?Sized,
    {
        let pair = parse_anchor_pair(alignment, Axis::Horizontal)?;
        self.apply_anchor_pair(Axis::Horizontal, pair, other.scaled_bounds(), offset);
        Ok(self)
    }

    /// Align against `other` vertically using an `{own}on{other}` rule,
    /// e.g. `bottomOnTop`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAlignment`] if either anchor is invalid; the element
    /// does not move in that case.
    fn align_vertically_to<O>(
        &mut self,
        other: &O,
        alignment: &str,
        offset: i32,
    ) -> Result<&mut Self, InvalidAlignment>
    where
        O: Bounded + ?Sized,
    {
        let pair = parse_anchor_pair(alignment, Axis::Vertical)?;
        self.apply_anchor_pair(Axis::Vertical, pair, other.scaled_bounds(), offset);
        Ok(self)
    }

    /// Move along `axis` so that `pair` holds against `target`.
    fn apply_anchor_pair(&mut self, axis: Axis, pair: AnchorPair, target: Bounds, offset: i32) {
        let own_span = self.scaled_bounds().span(axis);
        let position = pair
            .resolve(target.start(axis), target.span(axis), own_span)
            .saturating_add(offset);
        debug!(axis:% = axis, rule = pair.token(axis), position; "Aligned against element");
        self.move_along(axis, position);
    }

    /// Align inside the parent on both axes, horizontal first.
    fn align(
        &mut self,
        horizontal: &str,
        horizontal_offset: i32,
        vertical: &str,
        vertical_offset: i32,
    ) -> &mut Self {
        self.align_horizontally(horizontal, horizontal_offset)
            .align_vertically(vertical, vertical_offset)
    }

    /// Align against `other` on both axes, horizontal first.
    ///
    /// # Errors
    ///
    /// Both rules are validated before either axis moves.
    fn align_to<O>(
        &mut self,
        other: &O,
        horizontal: &str,
        horizontal_offset: i32,
        vertical: &str,
        vertical_offset: i32,
    ) -> Result<&mut Self, InvalidAlignment>
    where
        O: Bounded + ?Sized,
    {
        let horizontal = parse_anchor_pair(horizontal, Axis::Horizontal)?;
        let vertical = parse_anchor_pair(vertical, Axis::Vertical)?;
        let target = other.scaled_bounds();

        self.apply_anchor_pair(Axis::Horizontal, horizontal, target, horizontal_offset);
        self.apply_anchor_pair(Axis::Vertical, vertical, target, vertical_offset);
        Ok(self)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    #[derive(Debug)]
    struct Block {
        bounds: Bounds,
        parent: Size,
    }

    impl Bounded for Block {
        fn scaled_bounds(&self) -> Bounds {
            self.bounds
        }
    }

    impl Alignable for Block {
        fn parent_size(&self) -> Size {
            self.parent
        }

        fn move_to(&mut self, x: i32, y: i32) {
            self.bounds = Bounds::new(x, y, self.bounds.width(), self.bounds.height());
        }
    }

    fn block_strategy() -> impl Strategy<Value = Block> {
        (
            -500i32..500,
            -500i32..500,
            0i32..300,
            0i32..300,
            0i32..1000,
            0i32..1000,
        )
            .prop_map(|(x, y, w, h, pw, ph)| Block {
                bounds: Bounds::new(x, y, w, h),
                parent: Size::new(pw, ph),
            })
    }

    fn bounds_strategy() -> impl Strategy<Value = Bounds> {
        (-500i32..500, -500i32..500, 0i32..300, 0i32..300)
            .prop_map(|(x, y, w, h)| Bounds::new(x, y, w, h))
    }

    fn parent_rule_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("start".to_string()),
            Just("center".to_string()),
            Just("end".to_string()),
            (0u32..=100).prop_map(|p| format!("{p}%")),
            "[a-z]{1,8}",
        ]
    }

    fn pair_token_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("start".to_string()),
            Just("center".to_string()),
            Just("end".to_string()),
            (0u32..=100).prop_map(|p| format!("{p}%")),
        ]
    }

    fn pair_rule_strategy() -> impl Strategy<Value = String> {
        (pair_token_strategy(), pair_token_strategy())
            .prop_map(|(own, target)| format!("{own}On{target}"))
    }

    /// Applying the same parent alignment twice is the same as applying it once.
    fn check_parent_alignment_idempotent(
        mut block: Block,
        horizontal: String,
        vertical: String,
        offset: i32,
    ) -> Result<(), TestCaseError> {
        block.align(&horizontal, offset, &vertical, -offset);
        let once = block.scaled_bounds();
        block.align(&horizontal, offset, &vertical, -offset);
        prop_assert_eq!(block.scaled_bounds(), once);
        Ok(())
    }

    /// Applying the same pair alignment twice is the same as applying it once.
    fn check_pair_alignment_idempotent(
        mut block: Block,
        other: Bounds,
        rule: String,
        offset: i32,
    ) -> Result<(), TestCaseError> {
        block
            .align_horizontally_to(&other, &rule, offset)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        let once = block.scaled_bounds();
        block
            .align_horizontally_to(&other, &rule, offset)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(block.scaled_bounds(), once);
        Ok(())
    }

    /// `0%` behaves as `start` and `100%` as `end` in both grammars.
    fn check_percentage_extremes(
        block: Block,
        other: Bounds,
        offset: i32,
    ) -> Result<(), TestCaseError> {
        let mut by_name = Block { ..block };
        let mut by_percent = Block { ..by_name };

        by_name.align("left", offset, "bottom", offset);
        by_percent.align("0%", offset, "100%", offset);
        prop_assert_eq!(by_name.scaled_bounds(), by_percent.scaled_bounds());

        by_name
            .align_to(&other, "rightOnLeft", offset, "topOnBottom", offset)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        by_percent
            .align_to(&other, "100%On0%", offset, "0%On100%", offset)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(by_name.scaled_bounds(), by_percent.scaled_bounds());
        Ok(())
    }

    /// Named anchors keep an element that fits inside its parent.
    fn check_named_anchor_within_parent(
        mut block: Block,
        rule: &str,
    ) -> Result<(), TestCaseError> {
        prop_assume!(block.bounds.width() <= block.parent.width());
        prop_assume!(block.bounds.height() <= block.parent.height());

        block.align(rule, 0, rule, 0);
        prop_assert!(block.scaled_left() >= 0);
        prop_assert!(block.scaled_right() <= block.parent_width());
        prop_assert!(block.scaled_top() >= 0);
        prop_assert!(block.scaled_bottom() <= block.parent_height());
        Ok(())
    }

    proptest! {
        #[test]
        fn parent_alignment_idempotent(
            block in block_strategy(),
            horizontal in parent_rule_strategy(),
            vertical in parent_rule_strategy(),
            offset in -50i32..50,
        ) {
            check_parent_alignment_idempotent(block, horizontal, vertical, offset)?;
        }

        #[test]
        fn pair_alignment_idempotent(
            block in block_strategy(),
            other in bounds_strategy(),
            rule in pair_rule_strategy(),
            offset in -50i32..50,
        ) {
            check_pair_alignment_idempotent(block, other, rule, offset)?;
        }

        #[test]
        fn percentage_extremes(
            block in block_strategy(),
            other in bounds_strategy(),
            offset in -50i32..50,
        ) {
            check_percentage_extremes(block, other, offset)?;
        }

        #[test]
        fn named_anchor_within_parent(
            block in block_strategy(),
            rule in prop_oneof![Just("start"), Just("center"), Just("end")],
        ) {
            check_named_anchor_within_parent(block, rule)?;
        }
    }
}
