// =============================================================================
// IgniteX Web - Image Fallback
// =============================================================================

/// Source selection for an image that may fail to load.
///
/// Starts on the primary reference (or the placeholder when the primary is
/// empty). The first failure switches to the placeholder for good; the
/// primary is never retried by the same instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    placeholder: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        let primary = primary.into();
        let failed = primary.trim().is_empty();
        Self {
            primary,
            placeholder: placeholder.into(),
            failed,
        }
    }

    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The reference the `<img>` should currently load.
    pub fn current(&self) -> &str {
        if self.failed {
            &self.placeholder
        } else {
            &self.primary
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns `true` if the source changed, i.e. this
    /// was the primary failing; a failing placeholder changes nothing.
    pub fn fail(&mut self) -> bool {
        if self.failed {
            return false;
        }
        self.failed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLACEHOLDER: &str = "/api/placeholder/400/320";

    #[test]
    fn test_primary_used_until_failure() {
        let source = ImageSource::new("/images/suhas.jpg", PLACEHOLDER);
        assert_eq!(source.current(), "/images/suhas.jpg");
        assert!(!source.is_fallback());
    }

    #[test]
    fn test_single_failure_switches_to_placeholder() {
        let mut source = ImageSource::new("/images/missing.jpg", PLACEHOLDER);
        assert!(source.fail());
        assert_eq!(source.current(), PLACEHOLDER);

        // Placeholder failing too must not bring the original back
        assert!(!source.fail());
        assert!(!source.fail());
        assert_eq!(source.current(), PLACEHOLDER);
    }

    #[test]
    fn test_empty_primary_resolves_to_placeholder() {
        let source = ImageSource::new("", PLACEHOLDER);
        assert_eq!(source.current(), PLACEHOLDER);
        assert!(source.is_fallback());
    }

    #[test]
    fn test_instances_are_independent() {
        let mut broken = ImageSource::new("/images/missing.jpg", PLACEHOLDER);
        let sibling = ImageSource::new("/images/kavyabs.jpg", PLACEHOLDER);
        broken.fail();
        assert_eq!(sibling.current(), "/images/kavyabs.jpg");
    }
}
