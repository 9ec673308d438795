//! Component configuration.

use crate::source::SourceRef;

/// Declarative configuration for a spatial audio source component.
///
/// Mirrors the host-facing attribute surface: the requested source reference
/// plus the loop/autoplay playback settings. Playback settings apply only
/// while an element-backed source is connected and both default to enabled.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceConfig {
    /// Requested source reference.
    pub src: SourceRef,
    /// Whether an element-backed source should loop.
    pub looping: bool,
    /// Whether an element-backed source should start automatically on connect.
    pub autoplay: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            src: SourceRef::None,
            looping: true,
            autoplay: true,
        }
    }
}

impl SourceConfig {
    /// Create a configuration with the default settings and no source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a source reference.
    pub fn with_src(mut self, src: impl Into<SourceRef>) -> Self {
        self.src = src.into();
        self
    }

    /// Set the loop setting.
    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Set the autoplay setting.
    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SourceKind;

    #[test]
    fn default_values() {
        let config = SourceConfig::default();
        assert!(config.src.is_none());
        assert!(config.looping);
        assert!(config.autoplay);
    }

    #[test]
    fn builder_methods() {
        let config = SourceConfig::new()
            .with_src("#ambience")
            .with_looping(false)
            .with_autoplay(false);

        assert_eq!(config.src.kind(), SourceKind::Selector);
        assert!(!config.looping);
        assert!(!config.autoplay);
    }
}
