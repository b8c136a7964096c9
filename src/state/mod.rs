pub mod puzzle;
pub mod selection;

pub use puzzle::{LoadPhase, PuzzleAction, PuzzleState};
pub use selection::{PointerButton, SelectionTracker};
