// =============================================================================
// IgniteX Web - Video Reveal
// =============================================================================

/// Whether a video card shows its thumbnail or its player.
///
/// The only transition is `Thumbnail -> Playing`; once playing, a card stays
/// playing for the lifetime of the component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VideoReveal {
    #[default]
    Thumbnail,
    Playing,
}

impl VideoReveal {
    /// Handle a click/tap on the thumbnail. Returns `true` if this call
    /// revealed the player.
    pub fn activate(&mut self) -> bool {
        match self {
            VideoReveal::Thumbnail => {
                *self = VideoReveal::Playing;
                true
            }
            VideoReveal::Playing => false,
        }
    }

    pub fn is_playing(&self) -> bool {
        matches!(self, VideoReveal::Playing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_thumbnail() {
        assert_eq!(VideoReveal::default(), VideoReveal::Thumbnail);
        assert!(!VideoReveal::default().is_playing());
    }

    #[test]
    fn test_activation_reveals_once() {
        let mut state = VideoReveal::default();
        assert!(state.activate());
        assert!(state.is_playing());

        // Further activations never revert or re-trigger
        for _ in 0..3 {
            assert!(!state.activate());
            assert_eq!(state, VideoReveal::Playing);
        }
    }
}
