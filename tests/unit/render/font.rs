//! Tests for font source ordering and resolution

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;
    use wishmap::render::font::{FontSource, Typeface};

    // Tests configured files come before the built-in fallbacks
    // Verified by appending configured files last
    #[test]
    fn test_default_chain_order() {
        let chain = FontSource::default_chain(&[PathBuf::from("a.ttf"), PathBuf::from("b.ttf")]);

        assert_eq!(
            chain,
            vec![
                FontSource::File(PathBuf::from("a.ttf")),
                FontSource::File(PathBuf::from("b.ttf")),
                FontSource::Environment,
                FontSource::Bundled,
                FontSource::Platform,
            ]
        );
    }

    // Tests the bundled font always loads
    // Verified by pointing the bundled bytes at an empty slice
    #[test]
    fn test_bundled_font() {
        let typeface = Typeface::bundled();

        assert!(typeface.font().is_some());
        assert_eq!(typeface.origin(), "bundled");
    }

    // Tests missing and unparseable files fall through to the next source
    // Verified by stopping at the first configured file
    #[test]
    fn test_resolve_skips_bad_files() {
        let mut garbage = tempfile::NamedTempFile::new().unwrap();
        garbage.write_all(b"definitely not a font").unwrap();

        let typeface = Typeface::resolve(&[
            FontSource::File(PathBuf::from("/nonexistent/font.ttf")),
            FontSource::File(garbage.path().to_path_buf()),
            FontSource::Bundled,
        ]);

        assert!(typeface.font().is_some());
        assert_eq!(typeface.origin(), "bundled");
    }

    // Tests resolution never fails when nothing loads
    // Verified by returning an error from resolve
    #[test]
    fn test_resolve_falls_back_to_glyphless() {
        let typeface = Typeface::resolve(&[FontSource::File(PathBuf::from("/nonexistent.ttf"))]);

        assert!(typeface.font().is_none());
        assert_eq!(typeface.origin(), "glyphless");
        assert!(Typeface::resolve(&[]).font().is_none());
    }

    // Tests debug output names the origin without dumping font data
    // Verified by deriving Debug
    #[test]
    fn test_debug_output() {
        let rendered = format!("{:?}", Typeface::glyphless());

        assert!(rendered.contains("glyphless"));
        assert!(rendered.contains("has_glyphs: false"));
    }
}
