//! Zoom factor formatting and default comparison for Site Zoom

/// Percentage shown for a zoom factor: `round(zoom * 100)`.
pub fn zoom_percent(zoom: f64) -> i64 {
    (zoom * 100.0).round() as i64
}

/// Format a zoom factor for the popup title
///
/// Examples:
/// - 1.0 → "100%"
/// - 1.33 → "133%"
/// - 0.5 → "50%"
pub fn format_zoom(zoom: f64) -> String {
    format!("{}%", zoom_percent(zoom))
}

/// Browsers only hand out finite, strictly positive zoom factors.
pub fn is_valid_zoom(zoom: f64) -> bool {
    zoom.is_finite() && zoom > 0.0
}

/// Whether the active tab's zoom already matches the stored default for its host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultTag {
    CurrentDefault,
    OfferToSave,
}

impl DefaultTag {
    /// Exact comparison. A missing stored value never matches.
    pub fn compare(stored: Option<f64>, current: f64) -> DefaultTag {
        match stored {
            Some(stored) if stored == current => DefaultTag::CurrentDefault,
            _ => DefaultTag::OfferToSave,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DefaultTag::CurrentDefault => "This site's current default zoom",
            DefaultTag::OfferToSave => "Mark as this site's new default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_zoom() {
        assert_eq!(format_zoom(1.0), "100%");
        assert_eq!(format_zoom(1.33), "133%");
        assert_eq!(format_zoom(0.5), "50%");
        assert_eq!(format_zoom(0.3), "30%");
        assert_eq!(format_zoom(5.0), "500%");
    }

    #[test]
    fn test_format_zoom_rounds_to_whole_percent() {
        assert_eq!(format_zoom(1.1), "110%");
        assert_eq!(format_zoom(0.675), "68%");
        assert_eq!(format_zoom(1.234), "123%");
        assert_eq!(format_zoom(2.999), "300%");
    }

    #[test]
    fn test_is_valid_zoom() {
        assert!(is_valid_zoom(1.0));
        assert!(is_valid_zoom(0.3));
        assert!(!is_valid_zoom(0.0));
        assert!(!is_valid_zoom(-1.5));
        assert!(!is_valid_zoom(f64::NAN));
        assert!(!is_valid_zoom(f64::INFINITY));
    }

    #[test]
    fn test_tag_matches_exact_stored_value() {
        assert_eq!(DefaultTag::compare(Some(1.5), 1.5), DefaultTag::CurrentDefault);
    }

    #[test]
    fn test_tag_offers_when_absent() {
        assert_eq!(DefaultTag::compare(None, 1.0), DefaultTag::OfferToSave);
        assert_eq!(DefaultTag::compare(None, 1.5), DefaultTag::OfferToSave);
    }

    #[test]
    fn test_tag_has_no_tolerance() {
        assert_eq!(DefaultTag::compare(Some(1.5), 1.5000001), DefaultTag::OfferToSave);
        assert_eq!(DefaultTag::compare(Some(1.1), 1.0), DefaultTag::OfferToSave);
    }

    #[test]
    fn test_tag_labels_differ() {
        assert_ne!(DefaultTag::CurrentDefault.label(), DefaultTag::OfferToSave.label());
    }
}
