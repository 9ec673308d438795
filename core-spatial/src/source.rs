//! Source reference classification.
//!
//! A source can arrive as a live stream handle, an element handle, or one of
//! two string forms from the declarative layer: a `#`-prefixed document
//! selector or a plain resource locator. Classification happens before any
//! cache lookup or connection work, so identical logical sources always map
//! to the same cache key.

use bridge_traits::media::{MediaElement, MediaHandle, MediaStream};
use std::fmt;
use std::rc::Rc;

/// Reserved marker prefix for selector sources.
pub const SELECTOR_MARKER: char = '#';

/// A source reference in one of the supported input kinds.
#[derive(Clone)]
pub enum SourceRef {
    /// No source; setting this tears the active connection down.
    None,
    /// A live media stream, wired as-is.
    Stream(Rc<dyn MediaStream>),
    /// A playable media element, wired as-is.
    Element(Rc<dyn MediaElement>),
    /// A document id (marker stripped) to look up in the host document.
    Selector(String),
    /// A resource locator written onto the internally owned default element.
    Locator(String),
}

impl SourceRef {
    /// Classify a declarative string form.
    ///
    /// A leading [`SELECTOR_MARKER`] makes a [`SourceRef::Selector`] with the
    /// marker stripped; any other non-empty string is a
    /// [`SourceRef::Locator`]. An empty value clears the source.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            SourceRef::None
        } else if let Some(id) = value.strip_prefix(SELECTOR_MARKER) {
            SourceRef::Selector(id.to_string())
        } else {
            SourceRef::Locator(value.to_string())
        }
    }

    /// The kind tag of this reference.
    pub fn kind(&self) -> SourceKind {
        match self {
            SourceRef::None => SourceKind::None,
            SourceRef::Stream(_) => SourceKind::Stream,
            SourceRef::Element(_) => SourceKind::Element,
            SourceRef::Selector(_) => SourceKind::Selector,
            SourceRef::Locator(_) => SourceKind::Locator,
        }
    }

    /// Whether this reference names no source at all.
    pub fn is_none(&self) -> bool {
        matches!(self, SourceRef::None)
    }
}

impl fmt::Debug for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceRef::None => f.write_str("None"),
            SourceRef::Stream(stream) => {
                f.debug_tuple("Stream").field(&stream.handle_id()).finish()
            }
            SourceRef::Element(element) => {
                f.debug_tuple("Element").field(&element.handle_id()).finish()
            }
            SourceRef::Selector(id) => f.debug_tuple("Selector").field(id).finish(),
            SourceRef::Locator(locator) => f.debug_tuple("Locator").field(locator).finish(),
        }
    }
}

/// Equality over source identity: handles compare by their stable ids, the
/// string forms by value. Used for change detection in the configuration
/// path, not for cache keying.
impl PartialEq for SourceRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (SourceRef::None, SourceRef::None) => true,
            (SourceRef::Stream(a), SourceRef::Stream(b)) => a.handle_id() == b.handle_id(),
            (SourceRef::Element(a), SourceRef::Element(b)) => a.handle_id() == b.handle_id(),
            (SourceRef::Selector(a), SourceRef::Selector(b)) => a == b,
            (SourceRef::Locator(a), SourceRef::Locator(b)) => a == b,
            _ => false,
        }
    }
}

impl From<&str> for SourceRef {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Rc<dyn MediaElement>> for SourceRef {
    fn from(element: Rc<dyn MediaElement>) -> Self {
        SourceRef::Element(element)
    }
}

impl From<Rc<dyn MediaStream>> for SourceRef {
    fn from(stream: Rc<dyn MediaStream>) -> Self {
        SourceRef::Stream(stream)
    }
}

/// Discriminant-only view of a [`SourceRef`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    None,
    Stream,
    Element,
    Selector,
    Locator,
}
