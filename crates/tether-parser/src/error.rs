//! Error types for the alignment rule parser.
//!
//! Every rejected rule is reported as an [`InvalidAlignment`] carrying an
//! [`ErrorCode`], the rule text, the span of the offending token and, where
//! useful, help text listing what would have been accepted.
//!
//! # Example
//!
//! ```
//! # use tether_core::geometry::Axis;
//! # use tether_parser::{error::ErrorCode, parse_anchor_pair};
//! let err = parse_anchor_pair("bogusOnCenter", Axis::Horizontal).unwrap_err();
//!
//! assert_eq!(err.code(), ErrorCode::E001);
//! assert_eq!(&err.rule()[err.span().range()], "bogus");
//! ```

mod error_code;
mod invalid_alignment;

pub use error_code::ErrorCode;
pub use invalid_alignment::InvalidAlignment;
