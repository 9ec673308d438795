//! Spatial scene capability traits and the world transform type.
//!
//! The spatial-audio engine (panning, room acoustics, listener placement) is
//! host territory. The core drives it through two seams: a per-component
//! source handle whose placement it updates, and the owning scene whose
//! listener placement it asks to refresh whenever the tracked object moves.

use crate::error::Result;
use crate::graph::{AudioGraph, InputPort};
use std::rc::Rc;

/// A column-major 4x4 world transform matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldTransform {
    elements: [f32; 16],
}

impl WorldTransform {
    /// The identity transform.
    pub fn identity() -> Self {
        Self {
            elements: [
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Construct a transform from column-major matrix elements.
    pub fn from_column_major(elements: [f32; 16]) -> Self {
        Self { elements }
    }

    /// A pure translation transform.
    pub fn from_translation(x: f32, y: f32, z: f32) -> Self {
        let mut transform = Self::identity();
        transform.elements[12] = x;
        transform.elements[13] = y;
        transform.elements[14] = z;
        transform
    }

    /// Borrow the column-major matrix elements.
    pub fn as_column_major(&self) -> &[f32; 16] {
        &self.elements
    }

    /// The translation component of the transform.
    pub fn translation(&self) -> [f32; 3] {
        [self.elements[12], self.elements[13], self.elements[14]]
    }
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self::identity()
    }
}

/// Per-component source placement handle inside the spatial scene.
///
/// One handle exists per bound component; it lives for the component's whole
/// lifetime and receives placement updates derived from the owning object's
/// world transform.
pub trait SpatialSource {
    /// Update the source placement from the owning object's world transform.
    fn set_transform(&self, transform: &WorldTransform);

    /// The input connection point for this source's render-graph wiring.
    fn input(&self) -> &dyn InputPort;
}

/// The spatial-audio scene ("room") that owns listener placement and creates
/// per-source handles.
pub trait SpatialScene {
    /// Create a placement handle for one audio source in this scene.
    fn create_source(&self) -> Result<Box<dyn SpatialSource>>;

    /// Refresh the scene's own listener placement.
    fn update_position(&self);
}

/// The owning scene context supplied to `bind`.
///
/// Bundles the spatial scene with the audio graph context it renders through.
#[derive(Clone)]
pub struct Room {
    /// The spatial-audio scene.
    pub scene: Rc<dyn SpatialScene>,
    /// The audio graph context used to construct input nodes.
    pub graph: Rc<dyn AudioGraph>,
}

impl Room {
    /// Bundle a scene and its audio graph context.
    pub fn new(scene: Rc<dyn SpatialScene>, graph: Rc<dyn AudioGraph>) -> Self {
        Self { scene, graph }
    }
}

/// Supplies the owning scene object's current world transform.
///
/// The placement bridge pulls from this on every transform-changed
/// notification rather than caching matrices itself.
pub trait SceneEntity {
    /// The object's current world transform.
    fn world_transform(&self) -> WorldTransform;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_has_no_translation() {
        assert_eq!(WorldTransform::identity().translation(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn translation_round_trips() {
        let transform = WorldTransform::from_translation(1.0, -2.5, 3.0);
        assert_eq!(transform.translation(), [1.0, -2.5, 3.0]);
        assert_eq!(transform.as_column_major()[15], 1.0);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(WorldTransform::default(), WorldTransform::identity());
    }
}
