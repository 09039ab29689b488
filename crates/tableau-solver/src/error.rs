use thiserror::Error;

use crate::simplex::SolverState;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimplexError {
    #[error("Invalid tableau shape: {reason}")]
    InvalidShape { reason: String },
    #[error("Entry ({row}, {col}) is outside the tableau")]
    OutOfBounds { row: usize, col: usize },
    #[error("Tableau is not in canonical form")]
    NotCanonical,
    #[error("No leaving row for any improving column at iteration {iteration}: problem is unbounded or infeasible")]
    UnboundedOrInfeasible { iteration: usize },
    #[error("Iteration limit of {limit} pivots exceeded")]
    IterationLimitExceeded { limit: usize },
}

impl SimplexError {
    /// The solver state a failure leaves the tableau in.
    pub fn state(&self) -> SolverState {
        match self {
            Self::InvalidShape { .. } | Self::OutOfBounds { .. } => SolverState::Unvalidated,
            Self::NotCanonical => SolverState::Rejected,
            Self::UnboundedOrInfeasible { .. } | Self::IterationLimitExceeded { .. } => {
                SolverState::Failed
            }
        }
    }

    pub(crate) fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidShape {
            reason: reason.into(),
        }
    }
}
