//! Tests for grid shape selection and cell placement

#[cfg(test)]
mod tests {
    use wishmap::WishMapError;
    use wishmap::layout::grid::{
        BoundingBox, GridPlan, choose_grid, place_cells, validate_wish_count,
    };

    // Tests the fixed shape table for every supported count
    // Verified by returning (3, 3) for five images
    #[test]
    fn test_choose_grid_table() {
        let expected = [
            (3, (3, 1)),
            (4, (2, 2)),
            (5, (2, 3)),
            (6, (2, 3)),
            (7, (3, 3)),
            (8, (3, 3)),
            (9, (3, 3)),
        ];
        for (count, shape) in expected {
            assert_eq!(choose_grid(count).unwrap(), shape, "count {count}");
        }
    }

    // Tests every supported count gets enough slots
    // Verified by shrinking the 7-9 shape
    #[test]
    fn test_choose_grid_has_capacity() {
        for count in 3..=9 {
            let (rows, cols) = choose_grid(count).unwrap();
            assert!((rows * cols) as usize >= count);
        }
    }

    // Tests counts outside 3-9 are layout errors
    // Verified by defaulting to (3, 3)
    #[test]
    fn test_choose_grid_out_of_range() {
        for count in [0, 1, 2, 10, 100] {
            assert!(matches!(
                choose_grid(count),
                Err(WishMapError::ImageCountOutOfRange { min: 3, max: 9, .. })
            ));
            assert!(validate_wish_count(count).is_err());
        }
        assert!(validate_wish_count(3).is_ok());
        assert!(validate_wish_count(9).is_ok());
    }

    // Tests boxes are emitted row-major and stop at count
    // Verified by emitting boxes for every slot
    #[test]
    fn test_place_cells_row_major() {
        let boxes = place_cells(3, 3, 300, 300, 7);

        assert_eq!(boxes.len(), 7);
        assert_eq!(
            boxes.first(),
            Some(&BoundingBox {
                x0: 0,
                y0: 0,
                x1: 100,
                y1: 100
            })
        );
        assert_eq!(
            boxes.get(3),
            Some(&BoundingBox {
                x0: 0,
                y0: 100,
                x1: 100,
                y1: 200
            })
        );
        assert_eq!(
            boxes.last(),
            Some(&BoundingBox {
                x0: 0,
                y0: 200,
                x1: 100,
                y1: 300
            })
        );
    }

    // Tests boxes stay inside the area and never overlap
    // Verified by rounding cell size up
    #[test]
    fn test_place_cells_bounds_and_overlap() {
        for count in 3..=9 {
            let (rows, cols) = choose_grid(count).unwrap();
            let boxes = place_cells(rows, cols, 1001, 767, count);

            assert_eq!(boxes.len(), count);
            for (i, a) in boxes.iter().enumerate() {
                assert!(a.x1 > a.x0 && a.y1 > a.y0);
                assert!(a.x1 <= 1001 && a.y1 <= 767);
                for b in boxes.iter().skip(i + 1) {
                    assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
                }
            }
        }
    }

    // Tests integer-division remainder stays unused at the right and bottom
    // Verified by distributing remainder pixels
    #[test]
    fn test_place_cells_truncates_remainder() {
        let boxes = place_cells(2, 3, 100, 51, 6);

        assert!(boxes.iter().all(|b| b.width() == 33 && b.height() == 25));
        assert_eq!(boxes.iter().map(|b| b.x1).max(), Some(99));
        assert_eq!(boxes.iter().map(|b| b.y1).max(), Some(50));
    }

    // Tests degenerate grid shapes produce no boxes
    // Verified by dividing by zero
    #[test]
    fn test_place_cells_zero_shape() {
        assert!(place_cells(0, 3, 100, 100, 3).is_empty());
        assert!(place_cells(3, 0, 100, 100, 3).is_empty());
    }

    // Tests areas narrower or shorter than the grid produce no empty boxes
    // Verified by emitting zero-sized boxes
    #[test]
    fn test_place_cells_degenerate_area() {
        assert!(place_cells(3, 3, 2, 2, 9).is_empty());
        assert!(place_cells(3, 3, 300, 2, 9).is_empty());
        assert!(place_cells(2, 3, 2, 300, 6).is_empty());

        let boxes = place_cells(3, 3, 3, 3, 9);
        assert_eq!(boxes.len(), 9);
        assert!(boxes.iter().all(|b| b.x1 > b.x0 && b.y1 > b.y0));
    }

    // Tests the plan exposes shape, boxes and unused slots
    // Verified by counting unused slots from capacity alone
    #[test]
    fn test_grid_plan() {
        let plan = GridPlan::new(5, 600, 400).unwrap();

        assert_eq!((plan.rows, plan.cols), (2, 3));
        assert_eq!(plan.boxes.len(), 5);
        assert_eq!(plan.capacity(), 6);
        assert_eq!(plan.unused_slots(), 1);
        assert!(GridPlan::new(10, 600, 400).is_err());
    }
}
