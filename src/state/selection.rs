use crate::model::{Cell, Selection};

/// Mouse button info as reported by the browser. `which` is the legacy
/// 1/2/3 = left/middle/right field some browsers still fill in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButton {
    pub button: i16,
    pub which: u32,
}

impl PointerButton {
    #[cfg(test)]
    pub const PRIMARY: Self = Self { button: 0, which: 1 };
    #[cfg(test)]
    pub const MIDDLE: Self = Self { button: 1, which: 2 };
    #[cfg(test)]
    pub const SECONDARY: Self = Self { button: 2, which: 3 };

    pub fn from_event(e: &web_sys::MouseEvent) -> Self {
        Self {
            button: e.button(),
            which: e.which(),
        }
    }

    /// Right and middle clicks never start a selection.
    pub fn starts_selection(self) -> bool {
        !(self.button == 2 || self.which == 2)
    }
}

/// A released drag handed to the server. `ticket` increases with every
/// submission so late answers can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub selection: Selection,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging { from: Cell, to: Cell },
    /// Released and waiting on the server. Reads as idle from outside.
    Submitting(Submission),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionTracker {
    phase: DragPhase,
    last_ticket: u64,
}

impl SelectionTracker {
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Returns false when the press was ignored.
    pub fn pointer_down(&mut self, button: PointerButton, cell: Cell) -> bool {
        if !button.starts_selection() {
            return false;
        }
        self.phase = DragPhase::Dragging { from: cell, to: cell };
        true
    }

    /// Moves the free end of the drag. Returns false when nothing changed.
    pub fn pointer_move(&mut self, cell: Cell) -> bool {
        match &mut self.phase {
            DragPhase::Dragging { to, .. } if *to != cell => {
                *to = cell;
                true
            }
            _ => false,
        }
    }

    pub fn pointer_up(&mut self) -> Option<Submission> {
        let DragPhase::Dragging { from, to } = self.phase else {
            return None;
        };
        self.last_ticket += 1;
        let submission = Submission {
            ticket: self.last_ticket,
            selection: Selection {
                from_cell: from,
                to_cell: to,
            },
        };
        self.phase = DragPhase::Submitting(submission);
        Some(submission)
    }

    /// Server answered `ticket`. Clears the released line if it is still the
    /// one on screen; a drag started since then is left alone.
    pub fn resolve(&mut self, ticket: u64) -> bool {
        match self.phase {
            DragPhase::Submitting(s) if s.ticket == ticket => {
                self.phase = DragPhase::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> Option<Submission> {
        match self.phase {
            DragPhase::Submitting(s) => Some(s),
            _ => None,
        }
    }

    /// Endpoints of the line being dragged or awaiting the server.
    pub fn live_selection(&self) -> Option<Selection> {
        match self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { from, to } => Some(Selection {
                from_cell: from,
                to_cell: to,
            }),
            DragPhase::Submitting(s) => Some(s.selection),
        }
    }
}
