//! First-class invariants for tic-tac-toe boards.
//!
//! The search assumes every board it sees arose from legal alternating
//! play. Boards typed in by a person carry no such guarantee, so they are
//! checked against these invariants before being searched.

use super::error::BoardError;
use super::types::Board;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod mark_balance;
pub mod single_winner;
pub mod winner_moved_last;

pub use mark_balance::MarkBalanceInvariant;
pub use single_winner::SingleWinnerInvariant;
pub use winner_moved_last::WinnerMovedLastInvariant;

/// All board reachability invariants as a composable set.
pub type BoardInvariants = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    WinnerMovedLastInvariant,
);

impl Board {
    /// Checks that this board can arise from legal alternating play.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unreachable`] listing every violated invariant.
    #[instrument(skip(self), fields(board = %self.encode()))]
    pub fn validate(&self) -> Result<(), BoardError> {
        BoardInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(violations = %descriptions, "Board failed validation");
            BoardError::Unreachable(descriptions)
        })
    }
}
