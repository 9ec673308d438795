//! The spatial audio source component.
//!
//! Owns the source-connection state machine: classifies incoming source
//! references, reuses graph input nodes through the [`NodeCache`], enforces
//! the single-active-source invariant with disconnect-before-connect
//! transitions, and keeps playback settings and spatial placement in sync
//! with the host.

use bridge_traits::document::DocumentHandle;
use bridge_traits::media::{MediaElement, MediaHandle, MediaHandleId, MediaStream};
use bridge_traits::scene::{Room, SceneEntity, SpatialSource};
use std::rc::Rc;
use tracing::{debug, warn};

use crate::cache::NodeCache;
use crate::config::SourceConfig;
use crate::error::{Result, SpatialSrcError};
use crate::source::SourceRef;

/// The currently wired source, if any.
///
/// At most one source is wired at a time; every transition disconnects the
/// previous node before any new wiring is made.
enum Connection {
    Disconnected,
    Element(Rc<dyn MediaElement>),
    Stream(Rc<dyn MediaStream>),
}

/// A source reference after resolution: the string forms have been turned
/// into concrete elements, so only the wireable cases remain.
enum Resolved {
    None,
    Element(Rc<dyn MediaElement>),
    Stream(Rc<dyn MediaStream>),
}

/// Handle to the currently connected sound, as returned by
/// [`SpatialAudioSrc::sound`].
///
/// Play/pause control is only meaningful for element-backed sounds. Invoking
/// either on a stream-backed sound logs a warning and does nothing: a live
/// input is controlled at its origin.
#[derive(Clone)]
pub enum Sound {
    /// An element-backed sound; control calls forward to the element.
    Element(Rc<dyn MediaElement>),
    /// A stream-backed sound; control calls warn and no-op.
    Stream(Rc<dyn MediaStream>),
}

impl Sound {
    /// Start playback of an element-backed sound.
    pub fn play(&self) -> Result<()> {
        match self {
            Sound::Element(element) => Ok(element.play()?),
            Sound::Stream(_) => {
                warn!("can't use play on a live stream; control the stream at its origin");
                Ok(())
            }
        }
    }

    /// Pause playback of an element-backed sound.
    pub fn pause(&self) -> Result<()> {
        match self {
            Sound::Element(element) => Ok(element.pause()?),
            Sound::Stream(_) => {
                warn!("can't use pause on a live stream; control the stream at its origin");
                Ok(())
            }
        }
    }

    /// Stable identity of the underlying media object.
    pub fn handle_id(&self) -> MediaHandleId {
        match self {
            Sound::Element(element) => element.handle_id(),
            Sound::Stream(stream) => stream.handle_id(),
        }
    }

    /// Whether this sound is element-backed.
    pub fn is_element(&self) -> bool {
        matches!(self, Sound::Element(_))
    }

    /// Whether this sound is stream-backed.
    pub fn is_stream(&self) -> bool {
        matches!(self, Sound::Stream(_))
    }
}

/// Attaches a logical audio source to a positioned scene object and routes
/// its signal into the host's spatial render graph.
///
/// The component is constructed unbound, then bound exactly once to its
/// [`Room`]. From that point on the host drives it through lifecycle
/// notifications: [`set_src`](Self::set_src) and
/// [`attribute_changed`](Self::attribute_changed) for source changes,
/// [`configuration_changed`](Self::configuration_changed) for playback
/// settings, [`transform_changed`](Self::transform_changed) when the owning
/// object moves, and [`teardown`](Self::teardown) on removal. All operations
/// run synchronously to completion.
pub struct SpatialAudioSrc {
    entity: Rc<dyn SceneEntity>,
    document: Rc<dyn DocumentHandle>,
    config: SourceConfig,
    room: Option<Room>,
    spatial_source: Option<Box<dyn SpatialSource>>,
    node_cache: NodeCache,
    connection: Connection,
    default_element: Option<Rc<dyn MediaElement>>,
}

impl SpatialAudioSrc {
    /// Create an unbound component for the given scene object.
    pub fn new(
        entity: Rc<dyn SceneEntity>,
        document: Rc<dyn DocumentHandle>,
        config: SourceConfig,
    ) -> Self {
        Self {
            entity,
            document,
            config,
            room: None,
            spatial_source: None,
            node_cache: NodeCache::new(),
            connection: Connection::Disconnected,
            default_element: None,
        }
    }

    /// Bind the component to its owning room.
    ///
    /// Must be called exactly once; a second call is a usage error and leaves
    /// all state untouched. Creates the spatial source handle, pushes the
    /// initial placement, then applies the declaratively configured source.
    pub fn bind(&mut self, room: Room) -> Result<()> {
        if self.room.is_some() {
            return Err(SpatialSrcError::AlreadyBound);
        }

        let spatial_source = room.scene.create_source()?;
        self.room = Some(room);
        self.spatial_source = Some(spatial_source);

        self.transform_changed()?;
        self.set_src(self.config.src.clone())
    }

    /// Whether [`bind`](Self::bind) has run.
    pub fn is_bound(&self) -> bool {
        self.room.is_some()
    }

    /// The current configuration, including the last requested source.
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// The currently connected sound, if any.
    pub fn sound(&self) -> Option<Sound> {
        match &self.connection {
            Connection::Disconnected => None,
            Connection::Element(element) => Some(Sound::Element(Rc::clone(element))),
            Connection::Stream(stream) => Some(Sound::Stream(Rc::clone(stream))),
        }
    }

    /// Whether an element-backed source is currently wired.
    pub fn is_element_connected(&self) -> bool {
        matches!(self.connection, Connection::Element(_))
    }

    /// Whether a stream-backed source is currently wired.
    pub fn is_stream_connected(&self) -> bool {
        matches!(self.connection, Connection::Stream(_))
    }

    /// Set a new source.
    ///
    /// The reference is resolved before any state change, so a resolution
    /// failure leaves the previous connection untouched. The transition
    /// itself always disconnects the active node first; passing
    /// [`SourceRef::None`] therefore just tears the connection down.
    ///
    /// Deliberately not short-circuited for the already-active source: the
    /// full disconnect/reconnect sequence re-runs so settings re-application
    /// and cache reuse behave uniformly.
    pub fn set_src(&mut self, src: SourceRef) -> Result<()> {
        if self.room.is_none() {
            return Err(SpatialSrcError::NotBound);
        }

        match self.resolve(&src)? {
            Resolved::None => self.disconnect_active()?,
            Resolved::Element(element) => self.connect_with_element(element)?,
            Resolved::Stream(stream) => self.connect_with_stream(stream)?,
        }

        self.config.src = src;
        Ok(())
    }

    /// Replace the component configuration.
    ///
    /// A changed source reference re-runs the full connection transition;
    /// otherwise only the playback settings are pushed onto the connected
    /// element. Callable before `bind` to stage configuration.
    pub fn configuration_changed(&mut self, config: SourceConfig) -> Result<()> {
        let src_changed = config.src != self.config.src;
        self.config = config;

        if src_changed && self.room.is_some() {
            self.set_src(self.config.src.clone())
        } else {
            self.apply_playback_settings();
            Ok(())
        }
    }

    /// Declarative attribute write, as forwarded by the host framework.
    ///
    /// Recognizes `src`, `loop` and `autoplay`; all three funnel through
    /// [`configuration_changed`](Self::configuration_changed) so the
    /// connection and playback settings stay consistent however they are
    /// driven. Other attributes are ignored.
    pub fn attribute_changed(&mut self, name: &str, value: &str) -> Result<()> {
        let mut config = self.config.clone();
        match name {
            "src" => config.src = SourceRef::parse(value),
            "loop" => config.looping = parse_flag(value),
            "autoplay" => config.autoplay = parse_flag(value),
            _ => {
                debug!(attribute = name, "ignoring unrelated attribute write");
                return Ok(());
            }
        }
        self.configuration_changed(config)
    }

    /// Push the owning object's current world transform into the spatial
    /// source and refresh the room's listener placement.
    ///
    /// Independent of connection state; never blocked by source transitions.
    pub fn transform_changed(&self) -> Result<()> {
        let room = self.room.as_ref().ok_or(SpatialSrcError::NotBound)?;
        let source = self
            .spatial_source
            .as_ref()
            .ok_or(SpatialSrcError::NotBound)?;

        room.scene.update_position();
        source.set_transform(&self.entity.world_transform());
        Ok(())
    }

    /// Tear the component down: disconnect the active source and release the
    /// internally owned default element.
    ///
    /// The room binding stays recorded, so `bind` remains a once-only
    /// operation; a later locator source lazily creates a fresh default
    /// element.
    pub fn teardown(&mut self) -> Result<()> {
        self.disconnect_active()?;
        if let Some(element) = self.default_element.take() {
            element.remove();
        }
        Ok(())
    }

    /// Resolve a source reference into a wireable form.
    ///
    /// Runs before any connection mutation: selector lookup failures surface
    /// here, and locator strings are written onto the lazily created default
    /// element so repeated string sets never leak elements.
    fn resolve(&mut self, src: &SourceRef) -> Result<Resolved> {
        match src {
            SourceRef::None => Ok(Resolved::None),
            SourceRef::Stream(stream) => Ok(Resolved::Stream(Rc::clone(stream))),
            SourceRef::Element(element) => Ok(Resolved::Element(Rc::clone(element))),
            SourceRef::Selector(id) => {
                let element = self
                    .document
                    .media_element_by_id(id)
                    .ok_or_else(|| SpatialSrcError::ElementNotFound(id.clone()))?;
                Ok(Resolved::Element(element))
            }
            SourceRef::Locator(locator) => {
                let element = match &self.default_element {
                    Some(element) => Rc::clone(element),
                    None => {
                        let element = self.document.create_media_element()?;
                        self.default_element = Some(Rc::clone(&element));
                        element
                    }
                };
                element.set_resource(locator);
                Ok(Resolved::Element(element))
            }
        }
    }

    /// Disconnect the active node from the spatial input, if any, and clear
    /// the connection state.
    fn disconnect_active(&mut self) -> Result<()> {
        let id = match &self.connection {
            Connection::Disconnected => return Ok(()),
            Connection::Element(element) => element.handle_id(),
            Connection::Stream(stream) => stream.handle_id(),
        };

        let source = self
            .spatial_source
            .as_ref()
            .ok_or(SpatialSrcError::NotBound)?;
        if let Some(node) = self.node_cache.get(id) {
            node.disconnect(source.input())?;
        }

        self.connection = Connection::Disconnected;
        debug!(handle = %id, "disconnected source");
        Ok(())
    }

    /// Wire an element-backed source, then apply playback settings and start
    /// playback when the element's effective autoplay flag is set.
    fn connect_with_element(&mut self, element: Rc<dyn MediaElement>) -> Result<()> {
        self.disconnect_active()?;

        let room = self.room.as_ref().ok_or(SpatialSrcError::NotBound)?;
        let source = self
            .spatial_source
            .as_ref()
            .ok_or(SpatialSrcError::NotBound)?;

        let node = self.node_cache.get_or_create(element.handle_id(), || {
            Ok(room.graph.create_element_source(&element)?)
        })?;
        node.connect(source.input())?;

        self.connection = Connection::Element(Rc::clone(&element));
        self.apply_playback_settings();

        if element.autoplay() {
            // The media engine may refuse the automatic start; that is not a
            // connection failure.
            if let Err(error) = element.play() {
                debug!(%error, "automatic playback start rejected");
            }
        }

        debug!(handle = %element.handle_id(), "connected element source");
        Ok(())
    }

    /// Wire a stream-backed source.
    fn connect_with_stream(&mut self, stream: Rc<dyn MediaStream>) -> Result<()> {
        self.disconnect_active()?;

        let room = self.room.as_ref().ok_or(SpatialSrcError::NotBound)?;
        let source = self
            .spatial_source
            .as_ref()
            .ok_or(SpatialSrcError::NotBound)?;

        let node = self.node_cache.get_or_create(stream.handle_id(), || {
            Ok(room.graph.create_stream_source(&stream)?)
        })?;
        node.connect(source.input())?;

        self.connection = Connection::Stream(Rc::clone(&stream));
        debug!(handle = %stream.handle_id(), "connected stream source");
        Ok(())
    }

    /// Push the loop/autoplay configuration onto the connected element.
    ///
    /// A no-op while a stream is connected or nothing is connected.
    fn apply_playback_settings(&self) {
        if let Connection::Element(element) = &self.connection {
            element.set_looping(self.config.looping);
            element.set_autoplay(self.config.autoplay);
        }
    }
}

/// HTML-style boolean attribute value: anything but `"false"` enables.
fn parse_flag(value: &str) -> bool {
    !value.eq_ignore_ascii_case("false")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::LoggerSinkLayer;
    use bridge_traits::logging::{LogEntry, LogLevel, LoggerSink};
    use bridge_traits::media::MediaHandle;
    use std::any::Any;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[derive(Default)]
    struct CapturingSink {
        entries: Mutex<Vec<LogEntry>>,
    }

    impl LoggerSink for CapturingSink {
        fn log(&self, entry: LogEntry) {
            self.entries.lock().unwrap().push(entry);
        }

        fn min_level(&self) -> LogLevel {
            LogLevel::Trace
        }
    }

    struct StubStream {
        id: MediaHandleId,
    }

    impl MediaHandle for StubStream {
        fn handle_id(&self) -> MediaHandleId {
            self.id
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl MediaStream for StubStream {}

    #[test]
    fn parse_flag_semantics() {
        assert!(parse_flag("true"));
        assert!(parse_flag(""));
        assert!(parse_flag("loop"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("FALSE"));
    }

    #[test]
    fn stream_sound_control_warns_and_noops() {
        let sink = Arc::new(CapturingSink::default());
        let trait_sink: Arc<dyn LoggerSink> = sink.clone();
        let subscriber =
            tracing_subscriber::registry().with(LoggerSinkLayer::new(Some(trait_sink)));
        let _guard = tracing::subscriber::set_default(subscriber);

        let sound = Sound::Stream(Rc::new(StubStream {
            id: MediaHandleId::new(),
        }));
        sound.play().expect("play on a stream must not fail");
        sound.pause().expect("pause on a stream must not fail");

        let entries = sink.entries.lock().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|entry| entry.level == LogLevel::Warn));
        assert!(entries[0].message.contains("stream"));
    }
}
