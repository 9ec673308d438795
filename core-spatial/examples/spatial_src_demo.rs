//! # Spatial Audio Source Usage Example
//!
//! This example demonstrates how to implement the host bridge traits and
//! drive the source-connection manager through a typical session: binding,
//! declarative source writes, playback settings and placement updates.
//!
//! Run with: `cargo run --example spatial_src_demo --package core-spatial`

use bridge_traits::document::DocumentHandle;
use bridge_traits::error::Result as BridgeResult;
use bridge_traits::graph::{AudioGraph, InputNode, InputPort, PortId};
use bridge_traits::logging::LogLevel;
use bridge_traits::media::{MediaElement, MediaHandle, MediaHandleId, MediaStream};
use bridge_traits::scene::{Room, SceneEntity, SpatialScene, SpatialSource, WorldTransform};
use core_spatial::logging::{init_logging, LogFormat, LoggingConfig};
use core_spatial::{SourceConfig, SourceRef, SpatialAudioSrc};
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

// ============================================================================
// Simple In-Memory Render Graph (for demonstration)
// ============================================================================

struct DemoNode {
    label: String,
}

impl InputNode for DemoNode {
    fn connect(&self, input: &dyn InputPort) -> BridgeResult<()> {
        println!("  [graph] {} -> port {}", self.label, input.port_id());
        Ok(())
    }

    fn disconnect(&self, input: &dyn InputPort) -> BridgeResult<()> {
        println!("  [graph] {} -x- port {}", self.label, input.port_id());
        Ok(())
    }
}

struct DemoGraph;

impl AudioGraph for DemoGraph {
    fn create_element_source(&self, element: &Rc<dyn MediaElement>) -> BridgeResult<Box<dyn InputNode>> {
        println!("  [graph] created element node for {}", element.handle_id());
        Ok(Box::new(DemoNode {
            label: format!("element:{}", element.handle_id()),
        }))
    }

    fn create_stream_source(&self, stream: &Rc<dyn MediaStream>) -> BridgeResult<Box<dyn InputNode>> {
        println!("  [graph] created stream node for {}", stream.handle_id());
        Ok(Box::new(DemoNode {
            label: format!("stream:{}", stream.handle_id()),
        }))
    }
}

// ============================================================================
// Simple Spatial Scene
// ============================================================================

struct DemoPort {
    id: PortId,
}

impl InputPort for DemoPort {
    fn port_id(&self) -> PortId {
        self.id
    }
}

struct DemoSpatialSource {
    port: DemoPort,
}

impl SpatialSource for DemoSpatialSource {
    fn set_transform(&self, transform: &WorldTransform) {
        let [x, y, z] = transform.translation();
        println!("  [scene] source placed at ({x}, {y}, {z})");
    }

    fn input(&self) -> &dyn InputPort {
        &self.port
    }
}

struct DemoScene;

impl SpatialScene for DemoScene {
    fn create_source(&self) -> BridgeResult<Box<dyn SpatialSource>> {
        Ok(Box::new(DemoSpatialSource {
            port: DemoPort { id: PortId::new() },
        }))
    }

    fn update_position(&self) {
        println!("  [scene] listener placement refreshed");
    }
}

// ============================================================================
// Simple Document & Media Elements
// ============================================================================

struct DemoElement {
    id: MediaHandleId,
    name: String,
    resource: RefCell<Option<String>>,
    looping: Cell<bool>,
    autoplay: Cell<bool>,
}

impl DemoElement {
    fn new(name: &str) -> Rc<Self> {
        Rc::new(Self {
            id: MediaHandleId::new(),
            name: name.to_string(),
            resource: RefCell::new(None),
            looping: Cell::new(false),
            autoplay: Cell::new(false),
        })
    }
}

impl MediaHandle for DemoElement {
    fn handle_id(&self) -> MediaHandleId {
        self.id
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl MediaElement for DemoElement {
    fn set_resource(&self, locator: &str) {
        self.resource.replace(Some(locator.to_string()));
        println!("  [media] {} now points at {locator}", self.name);
    }

    fn resource(&self) -> Option<String> {
        self.resource.borrow().clone()
    }

    fn set_looping(&self, looping: bool) {
        self.looping.set(looping);
    }

    fn looping(&self) -> bool {
        self.looping.get()
    }

    fn set_autoplay(&self, autoplay: bool) {
        self.autoplay.set(autoplay);
    }

    fn autoplay(&self) -> bool {
        self.autoplay.get()
    }

    fn play(&self) -> BridgeResult<()> {
        println!("  [media] {} playing", self.name);
        Ok(())
    }

    fn pause(&self) -> BridgeResult<()> {
        println!("  [media] {} paused", self.name);
        Ok(())
    }

    fn remove(&self) {
        println!("  [media] {} removed from document", self.name);
    }
}

struct DemoDocument {
    elements: RefCell<HashMap<String, Rc<DemoElement>>>,
}

impl DemoDocument {
    fn new() -> Rc<Self> {
        let document = Rc::new(Self {
            elements: RefCell::new(HashMap::new()),
        });
        document
            .elements
            .borrow_mut()
            .insert("ambience".to_string(), DemoElement::new("#ambience"));
        document
    }
}

impl DocumentHandle for DemoDocument {
    fn media_element_by_id(&self, id: &str) -> Option<Rc<dyn MediaElement>> {
        self.elements.borrow().get(id).map(|element| {
            let handle: Rc<dyn MediaElement> = element.clone();
            handle
        })
    }

    fn create_media_element(&self) -> BridgeResult<Rc<dyn MediaElement>> {
        let element: Rc<dyn MediaElement> = DemoElement::new("(default)");
        Ok(element)
    }
}

struct DemoEntity {
    transform: RefCell<WorldTransform>,
}

impl SceneEntity for DemoEntity {
    fn world_transform(&self) -> WorldTransform {
        *self.transform.borrow()
    }
}

// ============================================================================
// Demo Flow
// ============================================================================

fn main() -> core_spatial::Result<()> {
    init_logging(
        LoggingConfig::default()
            .with_format(LogFormat::Compact)
            .with_level(LogLevel::Debug),
    )?;

    let document = DemoDocument::new();
    let entity = Rc::new(DemoEntity {
        transform: RefCell::new(WorldTransform::identity()),
    });

    println!("=== bind ===");
    let entity_handle: Rc<dyn SceneEntity> = entity.clone();
    let document_handle: Rc<dyn DocumentHandle> = document.clone();
    let mut src = SpatialAudioSrc::new(
        entity_handle,
        document_handle,
        SourceConfig::new().with_src("#ambience"),
    );

    let scene: Rc<dyn SpatialScene> = Rc::new(DemoScene);
    let graph: Rc<dyn AudioGraph> = Rc::new(DemoGraph);
    src.bind(Room::new(scene, graph))?;

    println!("\n=== switch to a locator source ===");
    src.set_src(SourceRef::parse("assets/rain.ogg"))?;

    println!("\n=== declarative attribute writes ===");
    src.attribute_changed("loop", "false")?;
    src.attribute_changed("autoplay", "false")?;

    println!("\n=== the object moves ===");
    entity
        .transform
        .replace(WorldTransform::from_translation(2.0, 0.0, -1.0));
    src.transform_changed()?;

    println!("\n=== teardown ===");
    src.teardown()?;

    Ok(())
}
