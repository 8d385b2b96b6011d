//! Tests for canvas partitioning into title band and grid

#[cfg(test)]
mod tests {
    use wishmap::layout::geometry::CanvasLayout;
    use wishmap::{ComposerConfig, Format, WishMapError};

    // Tests the three-image desktop layout
    // Verified by omitting the title band from the grid height
    #[test]
    fn test_pc_three_images() {
        let (width, height) = Format::Pc.dimensions();
        let layout = CanvasLayout::compute(&ComposerConfig::default(), 3, width, height).unwrap();

        assert_eq!(layout.grid_origin, (40, 140));
        assert_eq!(layout.grid_area, (1840, 900));
        assert_eq!((layout.plan.rows, layout.plan.cols), (3, 1));
        assert_eq!(layout.cell_size, (1840, 286));

        let origins: Vec<_> = layout
            .plan
            .boxes
            .iter()
            .map(|cell| layout.cell_origin(cell))
            .collect();
        assert_eq!(origins, vec![(40, 140), (40, 440), (40, 740)]);
    }

    // Tests padded cells fit inside their boxes
    // Verified by ignoring padding in the cell size
    #[test]
    fn test_cells_fit_boxes() {
        let config = ComposerConfig::default();
        for format in Format::ALL {
            let (width, height) = format.dimensions();
            for count in 3..=9 {
                let layout = CanvasLayout::compute(&config, count, width, height).unwrap();
                let (cell_w, cell_h) = layout.cell_size;
                for cell in &layout.plan.boxes {
                    assert!(cell_w <= cell.width() && cell_h <= cell.height());
                    let (x, y) = layout.cell_origin(cell);
                    assert!(x + cell_w <= width && y + cell_h <= height);
                }
            }
        }
    }

    // Tests the nine-image phone layout uses a uniform cell size
    // Verified by dividing without removing padding
    #[test]
    fn test_phone_nine_images() {
        let (width, height) = Format::Phone.dimensions();
        let layout = CanvasLayout::compute(&ComposerConfig::default(), 9, width, height).unwrap();

        assert_eq!(layout.grid_area, (1000, 1700));
        assert_eq!(layout.cell_size, (320, 553));
        assert_eq!(layout.plan.boxes.len(), 9);
    }

    // Tests canvases without room for the grid are rejected
    // Verified by saturating instead of checking subtraction
    #[test]
    fn test_canvas_too_small() {
        let config = ComposerConfig::default();

        assert!(matches!(
            CanvasLayout::compute(&config, 3, 80, 1000),
            Err(WishMapError::CanvasTooSmall { .. })
        ));
        assert!(matches!(
            CanvasLayout::compute(&config, 3, 1000, 180),
            Err(WishMapError::CanvasTooSmall { .. })
        ));
        assert!(matches!(
            CanvasLayout::compute(&config, 9, 100, 1000),
            Err(WishMapError::CanvasTooSmall { .. })
        ));
    }

    // Tests oversized margins, title bands and padding are rejected without overflow
    // Verified by multiplying the margin unchecked
    #[test]
    fn test_oversized_config_values() {
        let huge_margin = ComposerConfig {
            margin: u32::MAX / 2 + 1,
            ..ComposerConfig::default()
        };
        let huge_title = ComposerConfig {
            title_height: u32::MAX,
            ..ComposerConfig::default()
        };
        let huge_padding = ComposerConfig {
            padding: u32::MAX,
            ..ComposerConfig::default()
        };

        for config in [huge_margin, huge_title, huge_padding] {
            assert!(matches!(
                CanvasLayout::compute(&config, 3, 1920, 1080),
                Err(WishMapError::CanvasTooSmall { .. })
            ));
        }
    }

    // Tests count errors surface before size checks
    // Verified by validating size first
    #[test]
    fn test_count_checked() {
        let result = CanvasLayout::compute(&ComposerConfig::default(), 10, 1920, 1080);
        assert!(matches!(
            result,
            Err(WishMapError::ImageCountOutOfRange { count: 10, .. })
        ));
    }
}
