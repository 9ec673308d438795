//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by the host
//! environment embedding the spatial audio source core.
//!
//! ## Overview
//!
//! This crate defines the contract between the core and its collaborators.
//! Each trait represents a capability the core requires but that belongs to
//! the host: the document that owns media elements, the audio graph that
//! constructs input nodes, the spatial-audio scene that places sources, and
//! the scene object whose transform is tracked.
//!
//! ## Traits
//!
//! ### Media
//! - [`MediaElement`](media::MediaElement) - Playable element with resource, loop/autoplay and play/pause control
//! - [`MediaStream`](media::MediaStream) - Live media input
//! - [`DocumentHandle`](document::DocumentHandle) - Element lookup and creation
//!
//! ### Rendering
//! - [`AudioGraph`](graph::AudioGraph) - Input node construction
//! - [`InputNode`](graph::InputNode) / [`InputPort`](graph::InputPort) - Render-graph wiring points
//! - [`SpatialScene`](scene::SpatialScene) / [`SpatialSource`](scene::SpatialSource) - Source and listener placement
//! - [`SceneEntity`](scene::SceneEntity) - World transform supplier
//!
//! ### Utilities
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Thread model
//!
//! The core is single-threaded and event-driven: every operation runs
//! synchronously to completion inside the host callback that triggered it.
//! Handles are therefore plain `Rc` values and the traits carry no `Send`
//! bounds. The one exception is [`LoggerSink`](logging::LoggerSink), which is
//! installed into the process-global tracing subscriber and must be
//! `Send + Sync`.
//!
//! ## Identity
//!
//! Media handles and input ports report stable identifiers
//! ([`MediaHandleId`](media::MediaHandleId), [`PortId`](graph::PortId)).
//! The core keys graph-node reuse on media handle identity, so two handles
//! reporting the same id are treated as the same underlying media object.
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type.
//! Platform implementations should convert platform-specific errors to
//! `BridgeError` and provide actionable error messages.

pub mod document;
pub mod error;
pub mod graph;
pub mod logging;
pub mod media;
pub mod scene;

pub use error::BridgeError;

// Re-export commonly used types
pub use document::DocumentHandle;
pub use graph::{AudioGraph, InputNode, InputPort, PortId};
pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
pub use media::{MediaElement, MediaHandle, MediaHandleId, MediaStream};
pub use scene::{Room, SceneEntity, SpatialScene, SpatialSource, WorldTransform};
