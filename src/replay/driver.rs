//! The game driver: movetext in, snapshot stream out.
//!
//! Walks `<number>. <white> <black>` groups, classifies and resolves each
//! half-move against the evolving board, and emits one snapshot per
//! half-move to the consumer. A move-number token that fails to parse (or
//! is zero) halts the walk; a result token in a move slot ends the game
//! normally. What happens on a failed half-move is policy-controlled: the
//! historical behavior keeps going and re-emits the stale board so the
//! diagram count still matches the movetext.

use crate::board::board_state::BoardState;
use crate::board::piece_types::Side;
use crate::notation::move_classifier::{classify, MoveTag};
use crate::notation::movetext::{
    parse_move_number, result_outcome, strip_comments_and_variations, tokens, GameOutcome,
};
use crate::replay::snapshot::{HalfMoveSnapshot, SnapshotConsumer};
use crate::replay_errors::ReplayError;
use crate::resolution::applicator::{apply_castling, apply_move};
use crate::resolution::resolver::{resolve_origin, DisambiguationPolicy};

/// What to do when a half-move fails to classify, resolve or apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record a diagnostic, emit the unchanged prior board for the failed
    /// half-move, and keep walking. Later moves replay against a board
    /// that is now stale, which keeps long games renderable at the cost of
    /// positional drift.
    #[default]
    ContinueStale,
    /// Stop the replay and return the error.
    Abort,
}

/// Replay configuration; `ReplayOptions::default()` reproduces the
/// historical behavior on both axes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReplayOptions {
    pub disambiguation: DisambiguationPolicy,
    pub on_error: FailurePolicy,
}

/// One recorded failure: which token, at which half-move, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayDiagnostic {
    pub ply: u32,
    pub token: String,
    pub error: ReplayError,
}

/// Summary of one fully walked game.
#[derive(Debug, Clone)]
pub struct ReplayReport {
    /// Half-moves emitted, failed ones included.
    pub plies: u32,
    /// Result token seen in a move slot, `Unfinished` when none was.
    pub outcome: GameOutcome,
    /// Failures skipped under `FailurePolicy::ContinueStale`.
    pub diagnostics: Vec<ReplayDiagnostic>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DriverState {
    AwaitingMoveNumber,
    AwaitingWhiteMove,
    AwaitingBlackMove,
    GameEnded,
}

/// Replays one game's movetext, emitting a snapshot per half-move.
///
/// Only `FailurePolicy::Abort` can make this return an error; under the
/// default policy every failure becomes a diagnostic in the report.
pub fn replay_game(
    movetext: &str,
    options: ReplayOptions,
    consumer: &mut dyn SnapshotConsumer,
) -> Result<ReplayReport, ReplayError> {
    let cleaned = strip_comments_and_variations(movetext);
    let mut stream = tokens(&cleaned);
    let mut board = BoardState::new_game();
    let mut report = ReplayReport {
        plies: 0,
        outcome: GameOutcome::Unfinished,
        diagnostics: Vec::new(),
    };
    let mut number = 0u32;
    let mut state = DriverState::AwaitingMoveNumber;

    while state != DriverState::GameEnded {
        let token = match stream.next() {
            Some(token) => token,
            None => break,
        };
        state = match state {
            DriverState::AwaitingMoveNumber => match parse_move_number(token) {
                Some(parsed) if parsed > 0 => {
                    number = parsed;
                    DriverState::AwaitingWhiteMove
                }
                _ => break,
            },
            DriverState::AwaitingWhiteMove => {
                if let Some(outcome) = result_outcome(token) {
                    report.outcome = outcome;
                    DriverState::GameEnded
                } else {
                    half_move(
                        &mut board,
                        Side::White,
                        token,
                        number,
                        options,
                        &mut report,
                        consumer,
                    )?;
                    DriverState::AwaitingBlackMove
                }
            }
            DriverState::AwaitingBlackMove => {
                if let Some(outcome) = result_outcome(token) {
                    report.outcome = outcome;
                    DriverState::GameEnded
                } else {
                    half_move(
                        &mut board,
                        Side::Black,
                        token,
                        number,
                        options,
                        &mut report,
                        consumer,
                    )?;
                    DriverState::AwaitingMoveNumber
                }
            }
            DriverState::GameEnded => DriverState::GameEnded,
        };
    }
    Ok(report)
}

fn half_move(
    board: &mut BoardState,
    side: Side,
    token: &str,
    number: u32,
    options: ReplayOptions,
    report: &mut ReplayReport,
    consumer: &mut dyn SnapshotConsumer,
) -> Result<(), ReplayError> {
    report.plies += 1;
    let ply = report.plies;
    match attempt(board, side, token, options) {
        Ok(tag) => emit(consumer, board, token, number, ply, side, tag),
        Err(error) => match options.on_error {
            FailurePolicy::Abort => return Err(error),
            FailurePolicy::ContinueStale => {
                report.diagnostics.push(ReplayDiagnostic {
                    ply,
                    token: token.to_string(),
                    error,
                });
                emit(consumer, board, token, number, ply, side, MoveTag::Continuation);
            }
        },
    }
    Ok(())
}

/// Runs one half-move through classify, resolve, apply. Leaves the board
/// untouched whenever it returns an error.
fn attempt(
    board: &mut BoardState,
    side: Side,
    token: &str,
    options: ReplayOptions,
) -> Result<MoveTag, ReplayError> {
    let descriptor = classify(token)?;
    if let Some(castling) = descriptor.castling {
        apply_castling(board, side, castling, token)?;
        return Ok(descriptor.tag);
    }
    let slot = {
        let (mover, other) = board.rosters(side);
        resolve_origin(mover, other, side, &descriptor, options.disambiguation, token)?
    };
    apply_move(board, side, slot, &descriptor, token)?;
    Ok(descriptor.tag)
}

fn emit(
    consumer: &mut dyn SnapshotConsumer,
    board: &BoardState,
    token: &str,
    number: u32,
    ply: u32,
    side: Side,
    tag: MoveTag,
) {
    let snapshot = HalfMoveSnapshot {
        projection: board.project(),
        label: token.to_string(),
        number,
        ply,
        side,
        tag,
    };
    consumer.half_move(&snapshot);
}
