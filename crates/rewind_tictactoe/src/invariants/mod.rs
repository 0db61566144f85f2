//! First-class invariants for the history engine.
//!
//! Invariants are logical properties that must hold after every
//! transition. They are testable independently and asserted in debug builds.

use super::GameState;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    #[new(into)]
    pub description: String,
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>),+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod empty_root;
pub mod single_mark;
pub mod step_in_bounds;

pub use alternating_turn::AlternatingTurnInvariant;
pub use empty_root::EmptyRootInvariant;
pub use single_mark::SingleMarkInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All engine invariants as a composable set.
pub type HistoryInvariants = (
    StepInBoundsInvariant,
    EmptyRootInvariant,
    SingleMarkInvariant,
    AlternatingTurnInvariant,
);

/// Asserts that all engine invariants hold (panics on violation in debug builds).
#[instrument(skip(state))]
pub fn assert_invariants(state: &GameState) {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(violations) = HistoryInvariants::check_all(state) {
        for v in &violations {
            warn!(description = %v.description, "Invariant violated");
        }
        panic!("Engine invariants violated: {:?}", violations);
    }
}
