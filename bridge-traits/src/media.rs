//! Media handle traits and identity types.
//!
//! The host document owns the actual playable media objects; the core only
//! sees them through these capability traits. Host applications are expected
//! to provide thin wrappers around their platform media elements and live
//! streams (DOM media elements, native player handles, capture streams) that
//! satisfy these contracts.

use crate::error::Result;
use std::any::Any;
use std::fmt;
use uuid::Uuid;

/// Stable identity of a media handle.
///
/// The core keys its graph-node reuse on this identity: two handles with the
/// same id are treated as the same underlying media object and share one
/// graph input node. Implementations must report the same id for the same
/// underlying object for the lifetime of the handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaHandleId(Uuid);

impl MediaHandleId {
    /// Generate a new handle identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Construct an identifier from an existing UUID.
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Borrow the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for MediaHandleId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MediaHandleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Capabilities shared by every media handle the host can hand to the core.
pub trait MediaHandle {
    /// Stable identity of the underlying media object.
    fn handle_id(&self) -> MediaHandleId;

    /// Escape hatch for host adapters to recover their concrete handle type.
    fn as_any(&self) -> &dyn Any;
}

/// A playable media element owned by the host document.
///
/// This is the surface the core needs from an HTML-style media element: a
/// rewritable resource attribute, loop/autoplay indicators and play/pause
/// control. All methods take `&self`; hosts use interior mutability in their
/// wrappers, matching the shared-handle semantics of the underlying media
/// objects.
pub trait MediaElement: MediaHandle {
    /// Rewrite the element's resource attribute.
    fn set_resource(&self, locator: &str);

    /// The current resource attribute, if one was ever set.
    fn resource(&self) -> Option<String>;

    /// Set the loop indicator.
    fn set_looping(&self, looping: bool);

    /// Whether the loop indicator is set.
    fn looping(&self) -> bool;

    /// Set the autoplay indicator.
    fn set_autoplay(&self, autoplay: bool);

    /// Whether the autoplay indicator is set.
    fn autoplay(&self) -> bool;

    /// Start playback.
    ///
    /// Host media engines may complete the start asynchronously; the returned
    /// error only reports a rejected start, which callers are free to ignore.
    fn play(&self) -> Result<()>;

    /// Pause playback.
    fn pause(&self) -> Result<()>;

    /// Detach the element from the host document.
    ///
    /// The core calls this for elements it owns when the component is torn
    /// down.
    fn remove(&self);
}

/// A live media stream.
///
/// Playback of a live input is controlled at its origin; the core only wires
/// it into the render graph, so no control surface is required here.
pub trait MediaStream: MediaHandle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_id_is_unique() {
        let a = MediaHandleId::new();
        let b = MediaHandleId::new();
        assert_ne!(a, b);
        assert_eq!(a, MediaHandleId::from_uuid(*a.as_uuid()));
    }

    #[test]
    fn handle_id_display_matches_uuid() {
        let id = MediaHandleId::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
