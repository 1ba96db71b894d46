//! Token grammar for alignment rules.
//!
//! ```text
//! token := name | digits "%"
//! name  := one of the axis vocabulary, ASCII case-insensitive
//! ```
//!
//! A token must span its whole input. Range checking of percentages is left
//! to the caller so that out-of-range values can be reported separately from
//! unknown tokens.

use winnow::{
    Parser as _,
    ascii::digit1,
    combinator::{alt, eof, terminated},
    error::ModalResult,
    token::take_while,
};

use tether_core::{anchor::Anchor, geometry::Axis};

/// A syntactically valid token before range checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    Named(Anchor),
    /// Saturates at `u32::MAX` for digit strings that overflow.
    Percent(u32),
}

/// Parse `digits "%"`.
fn percentage(input: &mut &str) -> ModalResult<u32> {
    terminated(digit1, '%')
        .map(|digits: &str| digits.parse::<u32>().unwrap_or(u32::MAX))
        .parse_next(input)
}

/// Parse a word from the anchor vocabulary of `axis`.
fn named_anchor(input: &mut &str, axis: Axis) -> ModalResult<Anchor> {
    take_while(1.., |c: char| c.is_ascii_alphabetic())
        .verify_map(|word: &str| Anchor::from_name(axis, word))
        .parse_next(input)
}

/// Parse a complete anchor token for `axis`.
pub(crate) fn anchor_token(input: &mut &str, axis: Axis) -> ModalResult<RawToken> {
    terminated(
        alt((
            percentage.map(RawToken::Percent),
            (|input: &mut &str| named_anchor(input, axis)).map(RawToken::Named),
        )),
        eof,
    )
    .parse_next(input)
}
