//! The per-half-move stream the driver emits.

use crate::board::board_state::Projection;
use crate::board::piece_types::Side;
use crate::notation::move_classifier::MoveTag;

/// Everything a consumer needs to render one half-move.
#[derive(Debug, Clone)]
pub struct HalfMoveSnapshot {
    /// Occupancy view after the half-move. When the half-move failed under
    /// the tolerant policy this is the unchanged prior position.
    pub projection: Projection,
    /// The SAN token exactly as it appeared in the movetext.
    pub label: String,
    /// Full-move number this half-move belongs to.
    pub number: u32,
    /// Half-moves played so far, counting this one, starting at 1.
    pub ply: u32,
    /// Side that moved.
    pub side: Side,
    /// Check suffix carried by the token.
    pub tag: MoveTag,
}

/// Consumer of the snapshot stream. The driver performs no I/O of its own;
/// a consumer accumulates whatever output it owns, one call per half-move
/// in game order.
pub trait SnapshotConsumer {
    fn half_move(&mut self, snapshot: &HalfMoveSnapshot);
}

/// Consumer that keeps every snapshot, for tests and callers that want to
/// inspect positions after the fact.
#[derive(Debug, Default)]
pub struct SnapshotLog {
    pub snapshots: Vec<HalfMoveSnapshot>,
}

impl SnapshotConsumer for SnapshotLog {
    fn half_move(&mut self, snapshot: &HalfMoveSnapshot) {
        self.snapshots.push(snapshot.clone());
    }
}
