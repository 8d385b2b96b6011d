//! Tests for layout constants and composer defaults

#[cfg(test)]
mod tests {
    use wishmap::io::configuration::{
        CELL_PADDING, ComposerConfig, DEFAULT_FETCH_TIMEOUT, DEFAULT_TITLE, DEFAULT_WORKER_LIMIT,
        MARGIN, MAX_IMAGES, MIN_IMAGES, PLACEHOLDER_FONT_MAX, PLACEHOLDER_FONT_MIN,
        PLACEHOLDER_LABEL_MAX_CHARS, PLATFORM_FONT_PATHS, TITLE_BAND_HEIGHT,
    };

    // Tests default config mirrors the constants
    // Verified by changing a default field
    #[test]
    fn test_default_config_uses_constants() {
        let config = ComposerConfig::default();

        assert_eq!(config.title, DEFAULT_TITLE);
        assert_eq!(config.margin, MARGIN);
        assert_eq!(config.padding, CELL_PADDING);
        assert_eq!(config.title_height, TITLE_BAND_HEIGHT);
        assert_eq!(config.fetch_timeout, DEFAULT_FETCH_TIMEOUT);
        assert_eq!(config.worker_limit, DEFAULT_WORKER_LIMIT);
        assert!(config.font_paths.is_empty());
    }

    // Tests layout values match the published geometry
    // Verified by changing constant values
    #[test]
    fn test_layout_values() {
        assert_eq!(MARGIN, 40);
        assert_eq!(CELL_PADDING, 20);
        assert_eq!(TITLE_BAND_HEIGHT, 100);
        assert_eq!(PLACEHOLDER_LABEL_MAX_CHARS, 30);
    }

    // Tests the supported image range and worker cap agree
    // Verified by lowering the worker cap
    #[test]
    fn test_count_range_and_workers() {
        assert_eq!((MIN_IMAGES, MAX_IMAGES), (3, 9));
        assert!(DEFAULT_WORKER_LIMIT >= MAX_IMAGES);
        assert!(DEFAULT_FETCH_TIMEOUT.as_secs() >= 10);
    }

    // Tests placeholder font bounds are ordered and a platform font list exists
    // Verified by swapping font bounds
    #[test]
    fn test_font_bounds() {
        assert!(PLACEHOLDER_FONT_MIN <= PLACEHOLDER_FONT_MAX);
        assert!(!PLATFORM_FONT_PATHS.is_empty());
    }
}
