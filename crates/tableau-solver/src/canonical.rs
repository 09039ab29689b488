//! Canonical-form checks that gate pivoting.

use crate::tableau::Tableau;

/// Returns the constraint row that `col` is a unit vector for, if any.
///
/// Only constraint rows take part in the comparison; the objective-row entry
/// of the column is ignored.
pub fn identity_row(tableau: &Tableau, col: usize, tolerance: f64) -> Option<usize> {
    let mut found = None;

    for r in 1..tableau.rows() {
        let value = tableau[(r, col)];
        if (value - 1.0).abs() <= tolerance {
            if found.is_some() {
                return None;
            }
            found = Some(r);
        } else if value.abs() > tolerance {
            return None;
        }
    }

    found
}

/// True when every constraint right-hand side is non-negative.
///
/// Compared exactly: this only ever sees caller input, never pivot output.
pub fn has_feasible_rhs(tableau: &Tableau) -> bool {
    (1..tableau.rows()).all(|r| tableau[(r, 0)] >= 0.0)
}

/// Match each constraint row with an identity column.
///
/// Element `i` of the result is the column for constraint row `i + 1`. When
/// several columns qualify for a row the lowest index wins. Returns `None` if
/// some row has no identity column.
pub fn basis(tableau: &Tableau, tolerance: f64) -> Option<Vec<usize>> {
    let mut matched: Vec<Option<usize>> = vec![None; tableau.num_constraints()];

    for c in 1..tableau.cols() {
        if let Some(r) = identity_row(tableau, c, tolerance) {
            let slot = &mut matched[r - 1];
            if slot.is_none() {
                *slot = Some(c);
            }
        }
    }

    matched.into_iter().collect()
}

/// A tableau is canonical when its B vector is non-negative and its
/// constraint columns contain a (possibly permuted) identity covering every
/// constraint row.
pub fn is_canonical(tableau: &Tableau, tolerance: f64) -> bool {
    has_feasible_rhs(tableau) && basis(tableau, tolerance).is_some()
}
