//! Errors used throughout the replay engine.
//!
//! This module defines the canonical error type returned by notation
//! classification, move resolution and application. The enum `ReplayError` is
//! used as the single error type across the crate to simplify propagation and
//! matching. Each variant carries the offending token so diagnostics can quote
//! the input text exactly as it appeared.
//!
//! Usage guidelines:
//! - Fallible steps of a half-move return `Result<..., ReplayError>`; the
//!   game driver decides at the half-move boundary whether a failure is fatal
//!   (see `replay::driver::FailurePolicy`).
//! - Classification variants (`UnknownPieceToken`, `UnknownPromotionTarget`,
//!   `InvalidSquareToken`) mean the token itself is malformed and no board
//!   state was consulted.
//! - Resolution variants (`AmbiguousOrUnresolvedMove`, `CastlingUnavailable`)
//!   mean the token was well formed but does not describe a move the current
//!   position can perform.

use thiserror::Error;

/// Unified error type for notation classification and move resolution.
///
/// Every variant owns the raw movetext token that triggered it, so a failed
/// half-move can always be reported in the player's own notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// The leading character of a token is neither a piece letter, a pawn
    /// file letter, nor a castling marker.
    #[error("unknown piece in move token '{0}'")]
    UnknownPieceToken(String),

    /// A `=` promotion suffix named a class that pawns cannot promote to,
    /// or named nothing at all.
    #[error("unknown promotion target in move token '{0}'")]
    UnknownPromotionTarget(String),

    /// A destination square or origin hint did not parse as board
    /// coordinates.
    #[error("malformed square in move token '{0}'")]
    InvalidSquareToken(String),

    /// No roster slot satisfies the token's class, hint and reachability
    /// constraints, or, under strict disambiguation, more than one does.
    #[error("cannot resolve move token '{0}' against the current position")]
    AmbiguousOrUnresolvedMove(String),

    /// Castling was requested after the king had already moved, or after
    /// the named rook was captured.
    #[error("castling unavailable for move token '{0}'")]
    CastlingUnavailable(String),
}
