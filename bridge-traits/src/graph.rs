//! Audio graph capability traits.
//!
//! The render graph itself belongs to the host's audio engine. The core only
//! needs two things from it: a way to create one graph input node per media
//! handle, and a way to wire such a node into (and out of) a spatial source's
//! input port.

use crate::error::Result;
use crate::media::{MediaElement, MediaStream};
use std::fmt;
use std::rc::Rc;
use uuid::Uuid;

/// Stable identity of an input port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortId(Uuid);

impl PortId {
    /// Generate a new port identifier.
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

impl Default for PortId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Connection point where graph input nodes are wired into a spatial source.
pub trait InputPort {
    /// Stable identity of this port.
    fn port_id(&self) -> PortId;
}

/// The point where one source's signal enters the spatial render graph.
///
/// Connect and disconnect calls are always paired against the same port by
/// the core; implementations may assume a node is never asked to disconnect
/// from a port it is not wired to.
pub trait InputNode {
    /// Wire this node's output into the given port.
    fn connect(&self, input: &dyn InputPort) -> Result<()>;

    /// Remove this node's wiring into the given port.
    fn disconnect(&self, input: &dyn InputPort) -> Result<()>;
}

/// Audio context capability: constructs graph input nodes for media handles.
///
/// The core invokes each constructor at most once per distinct media handle;
/// node reuse across reconnections is the core's responsibility.
pub trait AudioGraph {
    /// Create a graph input node fed by a media element.
    fn create_element_source(&self, element: &Rc<dyn MediaElement>) -> Result<Box<dyn InputNode>>;

    /// Create a graph input node fed by a live media stream.
    fn create_stream_source(&self, stream: &Rc<dyn MediaStream>) -> Result<Box<dyn InputNode>>;
}
