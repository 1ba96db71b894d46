//! Alignment anchors and the arithmetic that resolves them.
//!
//! An [`Anchor`] names a reference point along one axis of a bounding box:
//! its leading edge, its center, its trailing edge, or a percentage of its
//! span. Anchors are axis-neutral; the per-axis vocabulary (`left`/`right`
//! versus `top`/`bottom`) lives in the token table returned by
//! [`Anchor::names`].
//!
//! All divisions round toward negative infinity. Resolution is carried out in
//! `i64` and saturated to the `i32` range on the way out, so extreme spans and
//! coordinates pin to `i32::MIN`/`i32::MAX` instead of overflowing.

use std::{borrow::Cow, fmt};

use thiserror::Error;

use crate::geometry::Axis;

/// A percentage in the inclusive range `0..=100`.
///
/// Values outside that range are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Percentage(u8);

/// Returned when a percentage lies outside `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("percentage {0} is outside 0..=100")]
pub struct PercentageOutOfRange(pub u32);

impl Percentage {
    /// The smallest valid percentage.
    pub const MIN: Self = Self(0);
    /// The largest valid percentage.
    pub const MAX: Self = Self(100);

    /// Creates a percentage, rejecting values above 100.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether_core::anchor::Percentage;
    /// assert_eq!(Percentage::new(50).unwrap().value(), 50);
    /// assert!(Percentage::new(101).is_err());
    /// ```
    pub fn new(value: u32) -> Result<Self, PercentageOutOfRange> {
        u8::try_from(value)
            .ok()
            .filter(|value| *value <= 100)
            .map(Self)
            .ok_or(PercentageOutOfRange(value))
    }

    /// Returns the numeric value in `0..=100`.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns `span * self / 100`, rounded down.
    pub fn of(self, span: i32) -> i32 {
        saturate(self.of_wide(i64::from(span)))
    }

    fn of_wide(self, span: i64) -> i64 {
        (span * i64::from(self.0)).div_euclid(100)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A named reference point along one axis of a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The leading edge (left or top).
    Start,
    /// The midpoint of the span.
    Center,
    /// The trailing edge (right or bottom).
    End,
    /// A point at the given percentage of the span, measured from the leading edge.
    Percent(Percentage),
}

const HORIZONTAL_NAMES: &[(&str, Anchor)] = &[
    ("left", Anchor::Start),
    ("center", Anchor::Center),
    ("right", Anchor::End),
    ("start", Anchor::Start),
    ("end", Anchor::End),
];

const VERTICAL_NAMES: &[(&str, Anchor)] = &[
    ("top", Anchor::Start),
    ("center", Anchor::Center),
    ("bottom", Anchor::End),
    ("start", Anchor::Start),
    ("end", Anchor::End),
];

impl Anchor {
    /// Returns the token table for `axis`.
    ///
    /// The canonical name of each anchor comes first; the axis-neutral
    /// aliases `start` and `end` follow.
    pub fn names(axis: Axis) -> &'static [(&'static str, Anchor)] {
        match axis {
            Axis::Horizontal => HORIZONTAL_NAMES,
            Axis::Vertical => VERTICAL_NAMES,
        }
    }

    /// Looks up a named anchor for `axis`, ignoring ASCII case.
    ///
    /// Percentages are not names; see `tether_parser` for the full grammar.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether_core::{anchor::Anchor, geometry::Axis};
    /// assert_eq!(Anchor::from_name(Axis::Horizontal, "Right"), Some(Anchor::End));
    /// assert_eq!(Anchor::from_name(Axis::Vertical, "right"), None);
    /// ```
    pub fn from_name(axis: Axis, name: &str) -> Option<Self> {
        Self::names(axis)
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, anchor)| *anchor)
    }

    /// Returns the canonical token for this anchor on `axis`.
    pub fn token(self, axis: Axis) -> Cow<'static, str> {
        if let Self::Percent(percentage) = self {
            return Cow::Owned(percentage.to_string());
        }
        Self::names(axis)
            .iter()
            .find(|(_, anchor)| *anchor == self)
            .map(|(name, _)| Cow::Borrowed(*name))
            .unwrap_or(Cow::Borrowed("center"))
    }

    /// Returns the coordinate of this anchor on a span starting at `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether_core::anchor::Anchor;
    /// assert_eq!(Anchor::Start.point_on(10, 40), 10);
    /// assert_eq!(Anchor::Center.point_on(10, 40), 30);
    /// assert_eq!(Anchor::End.point_on(10, 40), 50);
    /// ```
    pub fn point_on(self, start: i32, span: i32) -> i32 {
        saturate(i64::from(start) + self.offset_into(i64::from(span)))
    }

    /// Returns the leading edge an element of `own_span` needs so that this
    /// anchor of the element lands on `point`.
    pub fn place_at(self, point: i32, own_span: i32) -> i32 {
        saturate(i64::from(point) - self.offset_into(i64::from(own_span)))
    }

    /// Returns the leading edge of an element of `own_span` placed at this
    /// anchor inside a parent of `parent_span`.
    ///
    /// The free space `parent_span - own_span` is distributed according to
    /// the anchor: none before the element for `Start`, all of it for `End`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether_core::anchor::Anchor;
    /// assert_eq!(Anchor::Center.resolve_in_parent(200, 50), 75);
    /// assert_eq!(Anchor::End.resolve_in_parent(200, 50), 150);
    /// ```
    pub fn resolve_in_parent(self, parent_span: i32, own_span: i32) -> i32 {
        saturate(self.offset_into(i64::from(parent_span) - i64::from(own_span)))
    }

    /// Distance from the leading edge of `span` to this anchor.
    fn offset_into(self, span: i64) -> i64 {
        match self {
            Self::Start => 0,
            Self::Center => span.div_euclid(2),
            Self::End => span,
            Self::Percent(percentage) => percentage.of_wide(span),
        }
    }
}

/// Narrows a wide coordinate, pinning it to the `i32` range.
fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// A pair of anchors used to align one element against another.
///
/// `own` names the point on the element being moved, `target` the point on
/// the reference element it should land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnchorPair {
    own: Anchor,
    target: Anchor,
}

impl AnchorPair {
    pub fn new(own: Anchor, target: Anchor) -> Self {
        Self { own, target }
    }

    /// The anchor on the element being aligned.
    pub fn own(&self) -> Anchor {
        self.own
    }

    /// The anchor on the reference element.
    pub fn target(&self) -> Anchor {
        self.target
    }

    /// Returns the leading edge of an element of `own_span` aligned against a
    /// reference span starting at `target_start`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tether_core::anchor::{Anchor, AnchorPair};
    /// // left edge onto the right edge of a box at 10..50
    /// let pair = AnchorPair::new(Anchor::Start, Anchor::End);
    /// assert_eq!(pair.resolve(10, 40, 25), 50);
    /// ```
    pub fn resolve(&self, target_start: i32, target_span: i32, own_span: i32) -> i32 {
        let align_point =
            i64::from(target_start) + self.target.offset_into(i64::from(target_span));
        saturate(align_point - self.own.offset_into(i64::from(own_span)))
    }

    /// Returns the rule text for this pair on `axis`, e.g. `leftonright`.
    pub fn token(&self, axis: Axis) -> String {
        format!("{}on{}", self.own.token(axis), self.target.token(axis))
    }
}
