// Lines drawn over the grid, derived fresh from state on every render.
use crate::coords::line_between;
use crate::model::{Line, Offset, Word};
use crate::state::SelectionTracker;

/// One line per word the player has already found.
pub fn selection_lines(words: &[Word], offset: Offset) -> Vec<Line> {
    words
        .iter()
        .filter(|w| w.is_selected)
        .map(|w| line_between(w.from_cell, w.to_cell, offset))
        .collect()
}

/// The drag in progress (or awaiting the server). Nothing while idle.
pub fn active_line(tracker: &SelectionTracker, offset: Offset) -> Option<Line> {
    tracker
        .live_selection()
        .map(|s| line_between(s.from_cell, s.to_cell, offset))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::pixel_center_from_cell;
    use crate::model::Cell;
    use crate::state::PointerButton;
    use serde_json::Map;

    fn word(from: Cell, to: Cell, is_selected: bool) -> Word {
        Word {
            from_cell: from,
            to_cell: to,
            is_selected,
            extra: Map::new(),
        }
    }

    #[test]
    fn only_selected_words_get_lines() {
        let offset = Offset { top: 40.0, left: 60.0 };
        let words = vec![
            word(Cell::new(0, 0), Cell::new(0, 3), true),
            word(Cell::new(1, 0), Cell::new(4, 0), false),
            word(Cell::new(2, 2), Cell::new(5, 5), true),
        ];
        let lines = selection_lines(&words, offset);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].from, pixel_center_from_cell(Cell::new(0, 0), offset));
        assert_eq!(lines[0].to, pixel_center_from_cell(Cell::new(0, 3), offset));
        assert_eq!(lines[1].to, pixel_center_from_cell(Cell::new(5, 5), offset));
    }

    #[test]
    fn idle_tracker_draws_no_live_line() {
        let offset = Offset::default();
        let mut t = SelectionTracker::default();
        assert_eq!(active_line(&t, offset), None);
        t.pointer_down(PointerButton::PRIMARY, Cell::new(1, 1));
        t.pointer_move(Cell::new(1, 4));
        let l = active_line(&t, offset).unwrap();
        assert_eq!(l.from, pixel_center_from_cell(Cell::new(1, 1), offset));
        assert_eq!(l.to, pixel_center_from_cell(Cell::new(1, 4), offset));
    }
}
