// Pixel <-> cell mapping for the letter grid.
use crate::model::{Cell, Line, Offset, Point};

/// Edge length of one rendered cell, in CSS pixels. Rows render their cells at
/// this size, so overlays stay aligned only while both agree.
pub const CELL_SIZE: f64 = 50.0;

/// Cell under a page-space pixel. Not clamped: positions outside the grid give
/// negative or out-of-range indices.
pub fn cell_from_pixel(x: f64, y: f64, offset: Offset) -> Cell {
    Cell::new(
        ((y - offset.top) / CELL_SIZE).floor() as i32,
        ((x - offset.left) / CELL_SIZE).floor() as i32,
    )
}

pub fn pixel_center_from_cell(cell: Cell, offset: Offset) -> Point {
    Point {
        x: cell.col as f64 * CELL_SIZE + CELL_SIZE / 2.0 + offset.left,
        y: cell.row as f64 * CELL_SIZE + CELL_SIZE / 2.0 + offset.top,
    }
}

pub fn line_between(from: Cell, to: Cell, offset: Offset) -> Line {
    Line {
        from: pixel_center_from_cell(from, offset),
        to: pixel_center_from_cell(to, offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSETS: [Offset; 4] = [
        Offset { top: 0.0, left: 0.0 },
        Offset { top: 120.0, left: 37.5 },
        Offset { top: 8.25, left: 611.0 },
        Offset { top: -40.0, left: -13.0 },
    ];

    #[test]
    fn center_maps_back_to_same_cell() {
        for offset in OFFSETS {
            for row in -2..17 {
                for col in -2..17 {
                    let cell = Cell::new(row, col);
                    let c = pixel_center_from_cell(cell, offset);
                    assert_eq!(cell_from_pixel(c.x, c.y, offset), cell, "offset {:?}", offset);
                }
            }
        }
    }

    #[test]
    fn cell_edges_floor_into_the_lower_cell() {
        let offset = Offset { top: 100.0, left: 200.0 };
        assert_eq!(cell_from_pixel(200.0, 100.0, offset), Cell::new(0, 0));
        assert_eq!(cell_from_pixel(249.999, 149.999, offset), Cell::new(0, 0));
        assert_eq!(cell_from_pixel(250.0, 150.0, offset), Cell::new(1, 1));
    }

    #[test]
    fn pixels_outside_grid_are_not_clamped() {
        let offset = Offset { top: 100.0, left: 100.0 };
        assert_eq!(cell_from_pixel(99.0, 99.0, offset), Cell::new(-1, -1));
        assert_eq!(cell_from_pixel(100.0 + 20.0 * CELL_SIZE, 100.0, offset), Cell::new(0, 20));
    }

    #[test]
    fn center_is_half_a_cell_in() {
        let p = pixel_center_from_cell(Cell::new(2, 3), Offset { top: 10.0, left: 20.0 });
        assert_eq!(p, Point { x: 3.0 * 50.0 + 25.0 + 20.0, y: 2.0 * 50.0 + 25.0 + 10.0 });
    }

    #[test]
    fn line_between_uses_both_centers() {
        let offset = Offset::default();
        let l = line_between(Cell::new(0, 0), Cell::new(0, 4), offset);
        assert_eq!(l.from, Point { x: 25.0, y: 25.0 });
        assert_eq!(l.to, Point { x: 225.0, y: 25.0 });
    }
}
