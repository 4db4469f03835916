use serde::{Deserialize, Serialize};

use crate::{figure::TileSet, view::ViewState};

/// The full editing state at one instant: the figure's tiles, every view's
/// transform, and which view has focus. Opaque and comparable, so an
/// external history manager needs no access to private fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tiles: TileSet,
    pub views: Vec<ViewState>,
    pub focused: usize,
}

/// Undo history: an explicit index into a growable sequence of snapshots.
/// Recording after an undo discards the undone future.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct History {
    snapshots: Vec<Snapshot>,
    index: usize,
}

impl History {
    pub fn new() -> History {
        History::default()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// The snapshot the index sits on, if any has been recorded.
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshots.get(self.index)
    }

    /// Record a new snapshot after an edit. A snapshot equal to the current
    /// one is dropped, so no-op edits do not pollute the history.
    pub fn record(&mut self, snapshot: Snapshot) {
        if self.current() == Some(&snapshot) {
            return;
        }
        self.snapshots.truncate(self.index + 1);
        self.snapshots.push(snapshot);
        self.index = self.snapshots.len() - 1;
    }

    /// Step back, returning the snapshot to restore; `None` at the oldest.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.index == 0 || self.snapshots.is_empty() {
            return None;
        }
        self.index -= 1;
        Some(&self.snapshots[self.index])
    }

    /// Step forward, returning the snapshot to restore; `None` at the
    /// newest.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.index + 1 >= self.snapshots.len() {
            return None;
        }
        self.index += 1;
        Some(&self.snapshots[self.index])
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::geometry::point::Point;

    fn snap(tiles: &[(i32, i32)]) -> Snapshot {
        Snapshot {
            tiles: tiles.iter().map(|&(x, y)| Point { x, y }).collect(),
            views: vec![],
            focused: 0,
        }
    }

    #[test]
    fn empty_history() {
        let mut history = History::new();
        assert!(history.is_empty());
        assert_eq!(history.current(), None);
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn undo_redo_walk() {
        let mut history = History::new();
        history.record(snap(&[]));
        history.record(snap(&[(0, 0)]));
        history.record(snap(&[(0, 0), (1, 0)]));
        assert_eq!(history.len(), 3);

        assert_eq!(history.undo(), Some(&snap(&[(0, 0)])));
        assert_eq!(history.undo(), Some(&snap(&[])));
        assert_eq!(history.undo(), None);

        assert_eq!(history.redo(), Some(&snap(&[(0, 0)])));
        assert_eq!(history.redo(), Some(&snap(&[(0, 0), (1, 0)])));
        assert_eq!(history.redo(), None);
    }

    #[test]
    fn record_after_undo_truncates_the_future() {
        let mut history = History::new();
        history.record(snap(&[]));
        history.record(snap(&[(0, 0)]));
        history.record(snap(&[(0, 0), (1, 0)]));
        history.undo();
        history.undo();

        history.record(snap(&[(5, 5)]));
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), Some(&snap(&[(5, 5)])));
        assert_eq!(history.redo(), None);
        assert_eq!(history.undo(), Some(&snap(&[])));
    }

    #[test]
    fn duplicate_records_are_dropped() {
        let mut history = History::new();
        history.record(snap(&[(0, 0)]));
        history.record(snap(&[(0, 0)]));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn snapshot_serde_round_trip() {
        let snapshot = Snapshot {
            tiles: [(0, 0), (1, 0)].iter().map(|&(x, y)| Point { x, y }).collect(),
            views: vec![ViewState {
                offset: Point { x: 0.5, y: -0.5 },
                transform: crate::geometry::symmetry::Symmetry::ROTATE_CCW,
            }],
            focused: 1,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
