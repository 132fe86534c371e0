//! Drag gesture state machine for the shelf list
//!
//! Decides what an in-progress drag means — reorder, remove-by-drag-out,
//! or nothing — from a stream of pointer events, and applies the matching
//! shelf mutation on drop. One explicit state value, no scattered booleans,
//! so the ambiguous edge cases stay auditable.
//!
//! The "outside" state is sticky: once the pointer has left the list
//! bounds the gesture is a removal, even if the pointer jitters back in
//! before release. Drop coordinates right at the boundary are unreliable,
//! and a single crossing is an unambiguous statement of intent.

use crate::model::ShelfModel;
use egui::Pos2;
use std::path::{Path, PathBuf};

/// Pixel distance on either axis a press must travel before it becomes a
/// drag.
/// Guards against accidental micro-moves during a click.
const DRAG_THRESHOLD: f32 = 4.0;

/// Where the gesture's drag phase currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum DragPhase {
    /// No gesture in progress.
    Idle,
    /// Pointer pressed on an entry; drag not yet confirmed.
    Armed { path: PathBuf, origin: Pos2 },
    /// Drag confirmed; pointer has stayed inside the list bounds so far.
    Dragging { path: PathBuf },
    /// Drag confirmed and the pointer has left the list bounds at least
    /// once. Sticky for the remainder of the gesture.
    DraggingOutside { path: PathBuf },
}

/// What the pointer was over when the drop happened.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropTarget<'a> {
    /// Released over a shelf entry.
    Entry(&'a Path),
    /// Released over empty list space.
    Vacant,
    /// Payload the list does not recognize (drag did not start here).
    Foreign,
}

/// Mutation the drop produced, for the caller's status line and selection.
#[derive(Debug, Clone, PartialEq)]
pub enum DropOutcome {
    /// No mutation: aborted, dropped on self, or dropped on nothing.
    None,
    /// The dragged entry was removed (drag-out gesture).
    Removed(PathBuf),
    /// The dragged entry now sits at `index`.
    Moved { path: PathBuf, index: usize },
}

pub struct DragReorderController {
    phase: DragPhase,
}

impl DragReorderController {
    pub fn new() -> Self {
        Self { phase: DragPhase::Idle }
    }

    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// Path being dragged, once the drag is confirmed.
    pub fn dragging_path(&self) -> Option<&Path> {
        match &self.phase {
            DragPhase::Dragging { path } | DragPhase::DraggingOutside { path } => Some(path),
            _ => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging_path().is_some()
    }

    /// Pointer pressed on `path`. Starts a fresh gesture; a press while a
    /// previous gesture is somehow still live re-arms from scratch.
    pub fn on_pointer_down(&mut self, path: &Path, pos: Pos2) {
        self.phase = DragPhase::Armed { path: path.to_path_buf(), origin: pos };
    }

    /// Pointer moved. Confirms the drag once the displacement from the
    /// press position exceeds the threshold on either axis; returns the
    /// dragged path at that moment so the caller can begin its drag
    /// presentation. Sub-threshold moves are no-ops.
    pub fn on_pointer_move(&mut self, pos: Pos2) -> Option<&Path> {
        let confirmed = match &self.phase {
            DragPhase::Armed { path, origin } => {
                let delta = pos - *origin;
                if delta.x.abs() >= DRAG_THRESHOLD || delta.y.abs() >= DRAG_THRESHOLD {
                    Some(path.clone())
                } else {
                    None
                }
            }
            _ => None,
        };
        match confirmed {
            Some(path) => {
                self.phase = DragPhase::Dragging { path };
                self.dragging_path()
            }
            None => None,
        }
    }

    /// The pointer has left the list bounds while a drag is live. Commits
    /// the gesture to removal; re-entering bounds later does not undo it.
    pub fn on_drag_leave_bounds(&mut self) {
        if let DragPhase::Dragging { path } = &self.phase {
            self.phase = DragPhase::DraggingOutside { path: path.clone() };
        }
    }

    /// Pointer released. Applies the gesture's mutation to the model and
    /// resets to `Idle` — every drop, recognized or not, ends the gesture.
    ///
    /// A drop while `Idle` or `Armed` (payload not ours, or the press never
    /// crossed the drag threshold) is a silent abort.
    pub fn on_drop(&mut self, target: DropTarget<'_>, model: &mut ShelfModel) -> DropOutcome {
        let phase = std::mem::replace(&mut self.phase, DragPhase::Idle);
        match phase {
            DragPhase::DraggingOutside { path } => {
                model.remove(&path);
                DropOutcome::Removed(path)
            }
            DragPhase::Dragging { path } => match target {
                DropTarget::Entry(over) if over != path => {
                    match model.index_of(over) {
                        Some(index) => {
                            model.move_to(&path, index);
                            DropOutcome::Moved { path, index }
                        }
                        // target vanished between render and release
                        None => DropOutcome::None,
                    }
                }
                _ => DropOutcome::None,
            },
            DragPhase::Idle | DragPhase::Armed { .. } => DropOutcome::None,
        }
    }

    /// Abandon the gesture without any effect.
    pub fn cancel(&mut self) {
        self.phase = DragPhase::Idle;
    }
}

impl Default for DragReorderController {
    fn default() -> Self {
        Self::new()
    }
}
