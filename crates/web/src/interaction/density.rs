// =============================================================================
// IgniteX Web - Header Density
// =============================================================================

/// Scroll offset (px) past which the header compacts. The boundary itself
/// still counts as expanded.
pub const COMPACT_THRESHOLD_PX: f64 = 30.0;

/// Visual density of the page header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HeaderDensity {
    #[default]
    Expanded,
    Compact,
}

impl HeaderDensity {
    /// Derive the density from the document's vertical scroll offset.
    pub fn from_offset(offset: f64) -> Self {
        if offset > COMPACT_THRESHOLD_PX {
            HeaderDensity::Compact
        } else {
            HeaderDensity::Expanded
        }
    }

    pub fn is_compact(&self) -> bool {
        matches!(self, HeaderDensity::Compact)
    }

    /// Class for the `<header>` element.
    pub fn header_class(&self) -> &'static str {
        match self {
            HeaderDensity::Expanded => "site-header",
            HeaderDensity::Compact => "site-header compact",
        }
    }

    /// Class for the logo images on either side of the header.
    pub fn logo_class(&self) -> &'static str {
        match self {
            HeaderDensity::Expanded => "header-logo",
            HeaderDensity::Compact => "header-logo header-logo-small",
        }
    }

    /// Class for the college title block.
    pub fn title_class(&self) -> &'static str {
        match self {
            HeaderDensity::Expanded => "header-title",
            HeaderDensity::Compact => "header-title header-title-small",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(HeaderDensity::from_offset(0.0), HeaderDensity::Expanded);
        assert_eq!(HeaderDensity::from_offset(30.0), HeaderDensity::Expanded);
        assert_eq!(HeaderDensity::from_offset(30.5), HeaderDensity::Compact);
        assert_eq!(HeaderDensity::from_offset(31.0), HeaderDensity::Compact);
    }

    #[test]
    fn test_density_is_reversible() {
        let offsets = [0.0, 120.0, 31.0, 12.0, 400.0, 0.0];
        let densities: Vec<bool> = offsets
            .iter()
            .map(|&y| HeaderDensity::from_offset(y).is_compact())
            .collect();
        assert_eq!(densities, vec![false, true, true, false, true, false]);
    }

    #[test]
    fn test_classes_follow_density() {
        assert!(!HeaderDensity::Expanded.header_class().contains("compact"));
        assert!(HeaderDensity::Compact.header_class().contains("compact"));
        assert!(HeaderDensity::Compact.logo_class().ends_with("header-logo-small"));
        assert_eq!(HeaderDensity::Expanded.title_class(), "header-title");
    }
}
