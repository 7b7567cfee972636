//! Search depth selection.

use std::fmt::{self, Display};
use std::num::NonZeroU8;

use crate::coretypes::{MoveCount, PlyKind};
use crate::error::{self, ErrorKind};

/// Depth in plies searched for a position with `moves_made` moves already played.
///
/// The deeper the game, the fewer pieces remain and the cheaper each ply is,
/// so depth grows with game progress. Never returns 0.
pub const fn scheduled_depth(moves_made: MoveCount) -> PlyKind {
    match moves_made {
        0..=19 => 1,
        20..=29 => 2,
        30..=39 => 3,
        _ => 4,
    }
}

/// How many plies a search looks ahead.
///
/// Default values:
/// * Schedule: depth follows `scheduled_depth` of the moves made so far.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DepthPolicy {
    #[default]
    Schedule,
    Fixed(NonZeroU8),
}

impl DepthPolicy {
    /// Search every position to exactly `depth` plies. Depth must be at least 1.
    pub fn fixed(depth: PlyKind) -> error::Result<Self> {
        NonZeroU8::new(depth)
            .map(DepthPolicy::Fixed)
            .ok_or_else(|| (ErrorKind::EngineDepthInvalid, depth).into())
    }

    /// Depth to search for a position with `moves_made` moves already played.
    pub fn depth(&self, moves_made: MoveCount) -> PlyKind {
        match self {
            DepthPolicy::Schedule => scheduled_depth(moves_made),
            DepthPolicy::Fixed(depth) => depth.get(),
        }
    }
}

impl Display for DepthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DepthPolicy::Schedule => write!(f, "schedule"),
            DepthPolicy::Fixed(depth) => write!(f, "fixed {depth}"),
        }
    }
}
