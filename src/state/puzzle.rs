//! Everything the grid view renders from, driven through `PuzzleAction`s.
//! Grid and words are replaced wholesale by server answers; only the drag
//! state is changed locally.

use std::rc::Rc;
use yew::Reducible;

use super::selection::{PointerButton, SelectionTracker};
use crate::coords::cell_from_pixel;
use crate::error::ApiError;
use crate::model::{Grid, NewGridResponse, Offset, SelectResponse, Word, accepted_words};
use crate::util::{clog, cwarn};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PuzzleState {
    pub phase: LoadPhase,
    pub grid: Grid,
    pub words: Vec<Word>,
    /// Measured once after the grid first lays out. Never refreshed on
    /// resize or scroll.
    pub offset: Option<Offset>,
    pub tracker: SelectionTracker,
    /// Last submit failure, shown until dismissed.
    pub notice: Option<String>,
    /// Bumped by `Retry` so the load effect fires again.
    pub load_attempt: u32,
}

impl PuzzleState {
    pub fn found_count(&self) -> usize {
        self.words.iter().filter(|w| w.is_selected).count()
    }

    pub fn is_solved(&self) -> bool {
        !self.words.is_empty() && self.found_count() == self.words.len()
    }
}

pub enum PuzzleAction {
    Loaded(NewGridResponse),
    LoadFailed(String),
    Retry,
    OffsetMeasured(Offset),
    /// Page-space pointer coordinates.
    PointerDown { button: PointerButton, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    SubmitResolved {
        ticket: u64,
        result: Result<SelectResponse, ApiError>,
    },
    DismissNotice,
}

impl Reducible for PuzzleState {
    type Action = PuzzleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PuzzleAction::*;
        let mut new = (*self).clone();
        match action {
            Loaded(resp) => {
                clog(&format!(
                    "grid loaded: {} rows, {} words",
                    resp.grid.rows(),
                    resp.words.len()
                ));
                new.grid = resp.grid;
                new.words = resp.words;
                new.phase = LoadPhase::Ready;
            }
            LoadFailed(msg) => {
                cwarn(&format!("grid load failed: {}", msg));
                new.phase = LoadPhase::Failed(msg);
            }
            Retry => {
                if !matches!(new.phase, LoadPhase::Failed(_)) {
                    return self;
                }
                new.phase = LoadPhase::Loading;
                new.load_attempt = new.load_attempt.wrapping_add(1);
            }
            OffsetMeasured(offset) => {
                if new.offset.is_some() {
                    return self;
                }
                clog(&format!("grid offset top={} left={}", offset.top, offset.left));
                new.offset = Some(offset);
            }
            PointerDown { button, x, y } => {
                let Some(offset) = new.offset else { return self };
                if !new.tracker.pointer_down(button, cell_from_pixel(x, y, offset)) {
                    return self;
                }
            }
            PointerMove { x, y } => {
                let Some(offset) = new.offset else { return self };
                if !new.tracker.pointer_move(cell_from_pixel(x, y, offset)) {
                    return self;
                }
            }
            PointerUp => match new.tracker.pointer_up() {
                Some(sub) => clog(&format!(
                    "submitting #{} ({},{}) -> ({},{})",
                    sub.ticket,
                    sub.selection.from_cell.row,
                    sub.selection.from_cell.col,
                    sub.selection.to_cell.row,
                    sub.selection.to_cell.col
                )),
                None => return self,
            },
            SubmitResolved { ticket, result } => {
                if !new.tracker.resolve(ticket) {
                    clog(&format!("late answer for #{}, tracker is {:?}", ticket, new.tracker.phase()));
                }
                match result {
                    Ok(resp) => {
                        if let Some(words) = accepted_words(&resp) {
                            new.words = words;
                        }
                    }
                    Err(e) => {
                        cwarn(&format!("selection #{} failed: {}", ticket, e));
                        new.notice = Some(format!("Could not check that selection: {}", e));
                    }
                }
            }
            DismissNotice => {
                if new.notice.is_none() {
                    return self;
                }
                new.notice = None;
            }
        }
        Rc::new(new)
    }
}
