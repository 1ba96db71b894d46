//! Tether Parser - alignment rules for overlay layout.
//!
//! Two grammars are accepted, both ASCII case-insensitive:
//!
//! - a single anchor, used to align an element inside its parent:
//!   `left | center | right | start | end | <0-100>%` horizontally and
//!   `top | center | bottom | start | end | <0-100>%` vertically;
//! - an anchor pair joined by the literal `on`, used to align an element
//!   against another one: `leftOnRight`, `bottomOnTop`, `50%on25%`.
//!
//! # Example
//!
//! ```
//! # use tether_core::{anchor::Anchor, geometry::Axis};
//! # use tether_parser::{parse_anchor, parse_anchor_pair};
//! assert_eq!(parse_anchor("Center", Axis::Horizontal).unwrap(), Anchor::Center);
//!
//! let pair = parse_anchor_pair("bottomOnTop", Axis::Vertical).unwrap();
//! assert_eq!(pair.own(), Anchor::End);
//! assert_eq!(pair.target(), Anchor::Start);
//! ```

pub mod error;

mod grammar;
mod span;

pub use span::Span;

use log::trace;

use tether_core::{
    anchor::{Anchor, AnchorPair, Percentage},
    geometry::Axis,
};

use error::{ErrorCode, InvalidAlignment};
use grammar::RawToken;

/// The literal joining the two anchors of a pair rule.
pub const SEPARATOR: &str = "on";

/// Parse a single anchor token for `axis`.
///
/// # Errors
///
/// Returns [`InvalidAlignment`] with [`ErrorCode::E001`] for unknown tokens
/// and [`ErrorCode::E003`] for percentages above 100.
pub fn parse_anchor(rule: &str, axis: Axis) -> Result<Anchor, InvalidAlignment> {
    let anchor = parse_token(rule, 0..rule.len(), axis)?;
    trace!(rule = rule, axis:% = axis; "Parsed anchor");
    Ok(anchor)
}

/// Parse an `{own}on{target}` rule for `axis`.
///
/// Both tokens are validated; nothing is returned unless both are valid.
///
/// # Errors
///
/// Returns [`InvalidAlignment`] with [`ErrorCode::E002`] when the rule does
/// not contain exactly one separator, otherwise the error of the first
/// invalid token.
pub fn parse_anchor_pair(rule: &str, axis: Axis) -> Result<AnchorPair, InvalidAlignment> {
    // ASCII lowercasing keeps byte offsets, so indices found here are valid in `rule`
    let lowered = rule.to_ascii_lowercase();
    let separators: Vec<usize> = lowered
        .match_indices(SEPARATOR)
        .map(|(idx, _)| idx)
        .collect();

    let separator = match separators[..] {
        [separator] => separator,
        [] => {
            return Err(InvalidAlignment::new(
                ErrorCode::E002,
                axis,
                rule,
                Span::new(0..rule.len()),
                format!("expected two anchors joined by `{SEPARATOR}`"),
            )
            .with_help(pair_help(axis)));
        }
        [_, second, ..] => {
            return Err(InvalidAlignment::new(
                ErrorCode::E002,
                axis,
                rule,
                Span::new(second..second + SEPARATOR.len()),
                format!(
                    "found {} `{SEPARATOR}` separators, expected exactly one",
                    separators.len()
                ),
            )
            .with_help(pair_help(axis)));
        }
    };

    let target_start = separator + SEPARATOR.len();
    let own = parse_token(rule, 0..separator, axis)?;
    let target = parse_token(rule, target_start..rule.len(), axis)?;

    trace!(rule = rule, axis:% = axis; "Parsed anchor pair");
    Ok(AnchorPair::new(own, target))
}

/// Parse the token at `range` of `rule`, reporting errors against the whole rule.
fn parse_token(
    rule: &str,
    range: std::ops::Range<usize>,
    axis: Axis,
) -> Result<Anchor, InvalidAlignment> {
    let token = &rule[range.clone()];
    let span = Span::new(range);

    let mut input = token;
    match grammar::anchor_token(&mut input, axis) {
        Ok(RawToken::Named(anchor)) => Ok(anchor),
        Ok(RawToken::Percent(value)) => Percentage::new(value).map(Anchor::Percent).map_err(|_| {
            InvalidAlignment::new(
                ErrorCode::E003,
                axis,
                rule,
                span,
                format!("percentage `{token}` is outside 0%..=100%"),
            )
            .with_help("percentages must lie between `0%` and `100%` inclusive")
        }),
        Err(_) => {
            let message = if token.is_empty() {
                "missing anchor".to_string()
            } else {
                format!("unknown {axis} anchor `{token}`")
            };
            Err(
                InvalidAlignment::new(ErrorCode::E001, axis, rule, span, message)
                    .with_help(token_help(axis)),
            )
        }
    }
}

fn token_help(axis: Axis) -> String {
    let names: Vec<String> = Anchor::names(axis)
        .iter()
        .map(|(name, _)| format!("`{name}`"))
        .collect();
    format!(
        "expected one of {} or a percentage such as `50%`",
        names.join(", ")
    )
}

fn pair_help(axis: Axis) -> String {
    let example = AnchorPair::new(Anchor::Start, Anchor::Center).token(axis);
    format!("write the anchor of this element, then `{SEPARATOR}`, then the anchor of the other element, e.g. `{example}`")
}
