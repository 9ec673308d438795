//! # Spatial Audio Source Core
//!
//! Attaches a logical audio source to a positioned scene object and routes
//! playable media (an element or a live stream) into the host's
//! spatial-audio render graph, keeping the graph wiring and the source
//! placement in sync with the object.
//!
//! ## Overview
//!
//! This crate handles:
//! - Classifying arbitrary source references (element, stream, `#` selector,
//!   resource locator) ahead of any connection work
//! - Reusing one graph input node per distinct media handle for the
//!   component's lifetime
//! - The single-active-source connection state machine with strict
//!   disconnect-before-connect transitions
//! - Loop/autoplay synchronization onto element-backed sources
//! - Forwarding the owning object's transform into the spatial scene
//!
//! The host environment is reached exclusively through the capability traits
//! in [`bridge_traits`]; see that crate for the contract implementations must
//! satisfy.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use core_spatial::{SourceConfig, SourceRef, SpatialAudioSrc};
//! use bridge_traits::scene::Room;
//!
//! let mut src = SpatialAudioSrc::new(entity, document, SourceConfig::default());
//! src.bind(Room::new(scene, graph))?;
//!
//! // Declarative writes and direct handles both work.
//! src.set_src(SourceRef::parse("#ambience"))?;
//! src.set_src(SourceRef::Element(element))?;
//!
//! // The object moved; push placement into the spatial engine.
//! src.transform_changed()?;
//!
//! src.teardown()?;
//! ```
//!
//! ## Execution model
//!
//! Single-threaded and event-driven: every operation runs synchronously to
//! completion inside the host callback that triggered it, and the render
//! graph never observes two simultaneously wired sources.

pub mod cache;
pub mod component;
pub mod config;
pub mod error;
pub mod logging;
pub mod source;

pub use cache::NodeCache;
pub use component::{Sound, SpatialAudioSrc};
pub use config::SourceConfig;
pub use error::{Result, SpatialSrcError};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use source::{SourceKind, SourceRef, SELECTOR_MARKER};
