use crate::canonical::identity_row;
use crate::pivot::Pivot;
use crate::tableau::Tableau;

/// The result of optimizing a tableau
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Value of each decision variable (index 0 is x_1)
    pub values: Vec<f64>,
    /// Objective value read from the top-left entry
    pub objective_value: f64,
    /// Number of pivots performed
    pub iterations: usize,
    /// Pivot positions in the order they were applied
    pub pivots: Vec<Pivot>,
}

impl Solution {
    /// Read the objective value and basic feasible solution off `tableau`.
    pub fn extract(tableau: &Tableau, pivots: Vec<Pivot>, tolerance: f64) -> Self {
        Self {
            values: basic_feasible_solution(tableau, tolerance),
            objective_value: objective_value(tableau),
            iterations: pivots.len(),
            pivots,
        }
    }
}

pub fn objective_value(tableau: &Tableau) -> f64 {
    tableau[(0, 0)]
}

/// Value of every decision variable at the current basis.
///
/// A variable with a nonzero reduced cost is non-basic and takes 0. A
/// variable with a zero reduced cost takes the right-hand side of the row its
/// column is a unit vector for. A zero reduced cost on a column that is not a
/// unit vector (an alternate optimum) also yields 0.
pub fn basic_feasible_solution(tableau: &Tableau, tolerance: f64) -> Vec<f64> {
    (1..tableau.cols())
        .map(|c| {
            if tableau[(0, c)].abs() > tolerance {
                return 0.0;
            }
            match identity_row(tableau, c, tolerance) {
                Some(r) => tableau[(r, 0)],
                None => 0.0,
            }
        })
        .collect()
}
