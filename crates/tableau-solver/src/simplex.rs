use log::{debug, trace};

use crate::canonical::{has_feasible_rhs, is_canonical};
use crate::error::SimplexError;
use crate::optimality::is_optimal;
use crate::pivot::{execute_pivot, select_pivot, Pivot};
use crate::solution::{objective_value, Solution};
use crate::tableau::Tableau;

/// Where a solve ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    /// Not yet checked for canonical form
    Unvalidated,
    /// Passed the canonical-form gate
    Canonical,
    /// At least one pivot applied, not yet optimal
    Optimizing,
    /// No negative reduced cost remains
    Optimal,
    /// Failed the canonical-form gate
    Rejected,
    /// Unbounded/infeasible or out of iterations
    Failed,
}

/// Bookkeeping from a successful `Solver::optimize` run. Failed runs report
/// their end state through `SimplexError::state`.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveStats {
    pub state: SolverState,
    pub pivots: Vec<Pivot>,
}

impl SolveStats {
    pub fn iterations(&self) -> usize {
        self.pivots.len()
    }
}

/// Tableau simplex solver for canonical-form problems
pub struct Solver {
    /// Maximum pivots before giving up
    max_iterations: usize,
    /// Tolerance for floating point comparisons
    tolerance: f64,
    /// Reject tableaus without an identity basis before pivoting
    canonical_check: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: 10000,
            tolerance: 1e-9,
            canonical_check: true,
        }
    }
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    /// Turn the identity-basis part of the canonical-form gate on or off.
    /// A negative right-hand side is rejected either way.
    pub fn with_canonical_check(mut self, enabled: bool) -> Self {
        self.canonical_check = enabled;
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    pub fn is_canonical(&self, tableau: &Tableau) -> bool {
        is_canonical(tableau, self.tolerance)
    }

    /// Pivot `tableau` in place until no reduced cost is negative.
    ///
    /// The tableau is left untouched when it fails the canonical-form gate.
    /// On `UnboundedOrInfeasible` or `IterationLimitExceeded` it holds the
    /// state after the last completed pivot.
    pub fn optimize(&self, tableau: &mut Tableau) -> Result<SolveStats, SimplexError> {
        let mut state = SolverState::Unvalidated;
        trace!("{:?}: {}x{} tableau", state, tableau.rows(), tableau.cols());

        let admitted = if self.canonical_check {
            is_canonical(tableau, self.tolerance)
        } else {
            has_feasible_rhs(tableau)
        };
        if !admitted {
            state = SolverState::Rejected;
            debug!("{:?}: tableau is not in canonical form", state);
            return Err(SimplexError::NotCanonical);
        }
        state = SolverState::Canonical;
        debug!("{:?}: starting objective {}", state, objective_value(tableau));

        let mut pivots = Vec::new();
        loop {
            if is_optimal(tableau, self.tolerance) {
                state = SolverState::Optimal;
                debug!(
                    "{:?} after {} pivots: objective {}",
                    state,
                    pivots.len(),
                    objective_value(tableau)
                );
                return Ok(SolveStats { state, pivots });
            }

            if pivots.len() >= self.max_iterations {
                debug!("{:?}: reached max iterations ({})", SolverState::Failed, self.max_iterations);
                return Err(SimplexError::IterationLimitExceeded {
                    limit: self.max_iterations,
                });
            }

            let Some(pivot) = select_pivot(tableau, self.tolerance) else {
                debug!("{:?}: no leaving row at iteration {}", SolverState::Failed, pivots.len());
                return Err(SimplexError::UnboundedOrInfeasible {
                    iteration: pivots.len(),
                });
            };

            execute_pivot(tableau, pivot);
            pivots.push(pivot);
            state = SolverState::Optimizing;
            trace!(
                "{:?}: pivot {} at ({}, {}), objective {}",
                state,
                pivots.len(),
                pivot.row,
                pivot.col,
                objective_value(tableau)
            );
        }
    }

    /// Build a tableau from `matrix`, optimize it and read off the solution.
    pub fn solve<R: AsRef<[f64]>>(&self, matrix: &[R]) -> Result<Solution, SimplexError> {
        let mut tableau = Tableau::new(matrix)?;
        let stats = self.optimize(&mut tableau)?;
        Ok(Solution::extract(&tableau, stats.pivots, self.tolerance))
    }
}
