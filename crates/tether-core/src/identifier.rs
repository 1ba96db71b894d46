//! Element identifiers backed by a global string interner.
//!
//! [`ElementId`] is `Copy` and compares by symbol, so surfaces can key their
//! element maps by it without cloning strings.

use std::{
    fmt,
    sync::{Mutex, MutexGuard, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for element names.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> MutexGuard<'static, DefaultStringInterner> {
    INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        // The interner is only ever appended to, so a poisoned lock still holds valid data
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Interned identifier of an element on a surface.
///
/// # Examples
///
/// ```
/// use tether_core::identifier::ElementId;
///
/// let title = ElementId::new("title");
/// assert_eq!(title, "title");
/// assert_eq!(title, ElementId::new("title"));
///
/// let anonymous = ElementId::from_anonymous(3);
/// assert_eq!(anonymous.to_string(), "__3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(DefaultSymbol);

impl ElementId {
    /// Creates an `ElementId` from a name, interning it on first use.
    pub fn new(name: &str) -> Self {
        Self(interner().get_or_intern(name))
    }

    /// Creates an identifier for an element added without a name.
    ///
    /// # Arguments
    ///
    /// * `idx` - A per-surface counter used to keep anonymous ids unique.
    pub fn from_anonymous(idx: usize) -> Self {
        Self::new(&format!("__{idx}"))
    }

    /// Returns `true` if this id was produced by [`ElementId::from_anonymous`].
    pub fn is_anonymous(&self) -> bool {
        interner()
            .resolve(self.0)
            .is_some_and(|name| name.starts_with("__"))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner();
        let name = interner.resolve(self.0).unwrap_or_default();
        f.write_str(name)
    }
}

impl From<&str> for ElementId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<&String> for ElementId {
    fn from(name: &String) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for ElementId {
    fn eq(&self, other: &str) -> bool {
        interner().resolve(self.0) == Some(other)
    }
}

impl PartialEq<&str> for ElementId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
