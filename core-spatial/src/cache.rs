//! Graph input node reuse.

use bridge_traits::graph::InputNode;
use bridge_traits::media::MediaHandleId;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use crate::error::Result;

/// Cache of graph input nodes keyed by media handle identity.
///
/// Guarantees at most one input node per distinct media handle over the
/// owning component's lifetime: a node is created lazily on the handle's
/// first connection and every later lookup returns that same node. There is
/// no eviction; the map is bounded by the number of distinct sources the
/// component is ever given, which is typically small.
#[derive(Default)]
pub struct NodeCache {
    nodes: HashMap<MediaHandleId, Box<dyn InputNode>>,
}

impl NodeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the node for `id`, invoking `create` exactly once on first
    /// sight of the handle.
    ///
    /// A creation failure leaves the cache unchanged, so the next call for
    /// the same handle tries again.
    pub fn get_or_create(
        &mut self,
        id: MediaHandleId,
        create: impl FnOnce() -> Result<Box<dyn InputNode>>,
    ) -> Result<&dyn InputNode> {
        let node = match self.nodes.entry(id) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(create()?),
        };
        Ok(&**node)
    }

    /// The node for `id`, if one was ever created.
    pub fn get(&self, id: MediaHandleId) -> Option<&dyn InputNode> {
        self.nodes.get(&id).map(|node| node.as_ref())
    }

    /// Whether a node exists for `id`.
    pub fn contains(&self, id: MediaHandleId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of distinct handles seen so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no node has been created yet.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl fmt::Debug for NodeCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeCache")
            .field("nodes", &self.nodes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::BridgeError;
    use bridge_traits::graph::InputPort;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Stub node that reports which instance was connected through shared state.
    struct StubNode {
        tag: usize,
        touched: Rc<Cell<usize>>,
    }

    impl StubNode {
        fn new(tag: usize, touched: &Rc<Cell<usize>>) -> Box<Self> {
            Box::new(Self {
                tag,
                touched: Rc::clone(touched),
            })
        }
    }

    impl InputNode for StubNode {
        fn connect(&self, _input: &dyn InputPort) -> bridge_traits::error::Result<()> {
            self.touched.set(self.tag);
            Ok(())
        }

        fn disconnect(&self, _input: &dyn InputPort) -> bridge_traits::error::Result<()> {
            Ok(())
        }
    }

    struct StubPort {
        id: bridge_traits::graph::PortId,
    }

    impl InputPort for StubPort {
        fn port_id(&self) -> bridge_traits::graph::PortId {
            self.id
        }
    }

    #[test]
    fn creates_only_on_first_sight() {
        let mut cache = NodeCache::new();
        let id = MediaHandleId::new();
        let touched = Rc::new(Cell::new(0));
        let creations = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let creations = Rc::clone(&creations);
            let touched = Rc::clone(&touched);
            cache
                .get_or_create(id, move || {
                    creations.set(creations.get() + 1);
                    Ok(StubNode::new(7, &touched))
                })
                .unwrap();
        }

        assert_eq!(creations.get(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn lookups_return_the_same_node() {
        let mut cache = NodeCache::new();
        let id = MediaHandleId::new();
        let touched = Rc::new(Cell::new(0));
        let port = StubPort {
            id: bridge_traits::graph::PortId::new(),
        };

        cache
            .get_or_create(id, || Ok(StubNode::new(1, &touched)))
            .unwrap();

        // A second creator is never run; connecting the returned node shows
        // it is still the first instance.
        let node = cache
            .get_or_create(id, || Ok(StubNode::new(2, &touched)))
            .unwrap();
        node.connect(&port).unwrap();
        assert_eq!(touched.get(), 1);

        cache.get(id).unwrap().connect(&port).unwrap();
        assert_eq!(touched.get(), 1);
    }

    #[test]
    fn distinct_handles_get_distinct_nodes() {
        let mut cache = NodeCache::new();
        let touched = Rc::new(Cell::new(0));
        let a = MediaHandleId::new();
        let b = MediaHandleId::new();

        cache
            .get_or_create(a, || Ok(StubNode::new(1, &touched)))
            .unwrap();
        cache
            .get_or_create(b, || Ok(StubNode::new(2, &touched)))
            .unwrap();

        assert_eq!(cache.len(), 2);
        assert!(cache.contains(a));
        assert!(cache.contains(b));
    }

    #[test]
    fn creation_failure_leaves_cache_unchanged() {
        let mut cache = NodeCache::new();
        let id = MediaHandleId::new();

        let result = cache.get_or_create(id, || {
            Err(BridgeError::OperationFailed("node construction".to_string()).into())
        });

        assert!(result.is_err());
        assert!(cache.is_empty());
        assert!(!cache.contains(id));

        // The next attempt for the same handle runs the creator again.
        let touched = Rc::new(Cell::new(0));
        cache
            .get_or_create(id, || Ok(StubNode::new(3, &touched)))
            .unwrap();
        assert_eq!(cache.len(), 1);
    }
}
