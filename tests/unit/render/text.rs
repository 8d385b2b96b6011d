//! Tests for text measurement, drawing and truncation

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use wishmap::render::Typeface;
    use wishmap::render::text::{
        WHITE, centered_offset, draw, draw_shadowed, measure, truncate_chars,
    };

    const GREY: Rgb<u8> = Rgb([128, 128, 128]);

    // Tests measurement grows with font size and text length
    // Verified by ignoring the scale
    #[test]
    fn test_measure_bundled() {
        let typeface = Typeface::bundled();
        let (small_w, small_h) = measure(&typeface, 16, "Travel");
        let (large_w, large_h) = measure(&typeface, 48, "Travel");

        assert!(small_w > 0 && small_h > 0);
        assert!(large_w > small_w && large_h > small_h);
        assert!(measure(&typeface, 16, "Travel more").0 > small_w);
    }

    // Tests empty text and the glyphless typeface measure as zero
    // Verified by measuring the glyphless typeface with a default box
    #[test]
    fn test_measure_zero() {
        assert_eq!(measure(&Typeface::bundled(), 20, ""), (0, 0));
        assert_eq!(measure(&Typeface::glyphless(), 20, "Home"), (0, 0));
    }

    // Tests the glyphless typeface draws nothing
    // Verified by drawing a filled box for missing fonts
    #[test]
    fn test_draw_glyphless_is_noop() {
        let mut canvas = RgbImage::from_pixel(64, 32, GREY);
        draw(&mut canvas, &Typeface::glyphless(), WHITE, 20, (2, 2), "Home");

        assert!(canvas.pixels().all(|p| *p == GREY));
    }

    // Tests shadowed text leaves both shadow and foreground pixels
    // Verified by drawing the shadow after the foreground
    #[test]
    fn test_draw_shadowed() {
        let mut canvas = RgbImage::from_pixel(200, 60, GREY);
        draw_shadowed(&mut canvas, &Typeface::bundled(), 32, (10, 10), "Wish");

        assert!(canvas.pixels().any(|p| p.0.iter().all(|&c| c > 240)));
        assert!(canvas.pixels().any(|p| p.0.iter().all(|&c| c < 15)));
    }

    // Tests text running off the canvas is clipped without panicking
    // Verified by drawing with unchecked pixel writes
    #[test]
    fn test_draw_clips_overflow() {
        let mut canvas = RgbImage::from_pixel(20, 20, GREY);
        draw_shadowed(&mut canvas, &Typeface::bundled(), 40, (-15, 5), "Overflowing label");

        assert_eq!(canvas.dimensions(), (20, 20));
    }

    // Tests centring offsets, including wider-than-container spans
    // Verified by clamping to zero
    #[test]
    fn test_centered_offset() {
        assert_eq!(centered_offset(100, 40), 30);
        assert_eq!(centered_offset(101, 40), 30);
        assert_eq!(centered_offset(40, 40), 0);
        assert_eq!(centered_offset(40, 100), -30);
        assert_eq!(centered_offset(40, 101), -31);
    }

    // Tests truncation counts characters, not bytes
    // Verified by slicing at a byte index
    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("Learn Rust", 5), "Learn");
        assert_eq!(truncate_chars("short", 30), "short");
        assert_eq!(truncate_chars("Übersee Café", 9), "Übersee C");
        assert_eq!(truncate_chars("日本へ行く", 3), "日本へ");
        assert_eq!(truncate_chars("", 3), "");
    }
}
