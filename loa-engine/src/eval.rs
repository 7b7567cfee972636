//! Static Evaluation Functions.
//!
//! Scores are absolute: White is the maxing player and Black the minning player,
//! so a positive Score favors White and a negative Score favors Black.
//!
//! A position where a side's pieces are already contiguous is a detected win,
//! scored `±Score::WINNING`. Any other position compares how far each side is
//! from joining its pieces, measured as its spread: pieces outside its
//! largest connected region.

use std::cmp::Ordering;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::coretypes::{Score, ScoreKind, Side};
use crate::position::Position;

/// Anything that can statically score a position for search.
pub trait Evaluate<P: Position> {
    fn evaluate(&mut self, position: &P) -> Score;
}

/// Any closure over a position can act as an evaluator.
impl<P: Position, F: FnMut(&P) -> Score> Evaluate<P> for F {
    fn evaluate(&mut self, position: &P) -> Score {
        self(position)
    }
}

/// Magnitude of the Score returned when one side has the smaller spread.
///
/// `Fixed` is the default and keeps evaluation a pure function of the position.
/// `Random` draws a fresh magnitude from `1..Score::WINNING` on every call, so
/// the same position may score differently twice. Alpha-beta pruning assumes a
/// stable value per position, so with `Random` pruned and unpruned searches may
/// disagree and searches are only repeatable for the same seed.
#[derive(Debug, Clone)]
pub enum Magnitude {
    Fixed(ScoreKind),
    Random(StdRng),
}

impl Magnitude {
    /// Random magnitudes from a seeded generator.
    pub fn random(seed: u64) -> Self {
        Magnitude::Random(StdRng::seed_from_u64(seed))
    }

    /// Random magnitudes from a generator seeded by the operating system.
    pub fn random_from_entropy() -> Self {
        Magnitude::Random(StdRng::from_entropy())
    }

    /// Returns the magnitude to use for the next evaluation.
    pub fn draw(&mut self) -> ScoreKind {
        match self {
            Magnitude::Fixed(magnitude) => *magnitude,
            Magnitude::Random(rng) => rng.gen_range(1..Score::WINNING.value()),
        }
    }

    pub fn is_deterministic(&self) -> bool {
        matches!(self, Magnitude::Fixed(_))
    }
}

impl Default for Magnitude {
    fn default() -> Self {
        Magnitude::Fixed(1)
    }
}

/// The engine's evaluator: detected wins first, then a spread comparison.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    magnitude: Magnitude,
}

impl Evaluator {
    pub fn new(magnitude: Magnitude) -> Self {
        Self { magnitude }
    }

    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub fn set_magnitude(&mut self, magnitude: Magnitude) {
        self.magnitude = magnitude;
    }
}

impl<P: Position> Evaluate<P> for Evaluator {
    fn evaluate(&mut self, position: &P) -> Score {
        if let Some(score) = terminal(position) {
            return score;
        }
        match spread(position, Side::White).cmp(&spread(position, Side::Black)) {
            Ordering::Less => Score::new(self.magnitude.draw()),
            Ordering::Greater => Score::new(-self.magnitude.draw()),
            Ordering::Equal => Score::default(),
        }
    }
}

/// Returns `±Score::WINNING` if a side's pieces are contiguous, checking White first.
pub fn terminal<P: Position>(position: &P) -> Option<Score> {
    if position.pieces_contiguous(Side::White) {
        Some(Score::WINNING)
    } else if position.pieces_contiguous(Side::Black) {
        Some(-Score::WINNING)
    } else {
        None
    }
}

/// Number of pieces of `side` outside its largest connected region.
pub fn spread<P: Position>(position: &P, side: Side) -> u32 {
    position.piece_count(side) - position.largest_region(side)
}

/// Evaluate with the default, deterministic evaluator.
pub fn evaluate<P: Position>(position: &P) -> Score {
    Evaluator::default().evaluate(position)
}
