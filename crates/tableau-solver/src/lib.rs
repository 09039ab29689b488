pub mod canonical;
mod error;
pub mod optimality;
pub mod pivot;
mod simplex;
mod solution;
mod tableau;

pub use canonical::{basis, identity_row, is_canonical};
pub use error::SimplexError;
pub use optimality::is_optimal;
pub use pivot::{execute_pivot, select_pivot, Pivot};
pub use simplex::{SolveStats, Solver, SolverState};
pub use solution::{basic_feasible_solution, objective_value, Solution};
pub use tableau::Tableau;
