//! Host document capability.

use crate::error::Result;
use crate::media::MediaElement;
use std::rc::Rc;

/// Lookup and creation of media elements in the host document.
pub trait DocumentHandle {
    /// Find a media element by its document id (without the `#` marker).
    ///
    /// Returns `None` when no element with that id exists; the core turns
    /// that into a resolution error without touching its connection state.
    fn media_element_by_id(&self, id: &str) -> Option<Rc<dyn MediaElement>>;

    /// Create a detached media element owned by the caller.
    ///
    /// Used for the core's internally owned default element that backs plain
    /// resource-locator sources.
    fn create_media_element(&self) -> Result<Rc<dyn MediaElement>>;
}
