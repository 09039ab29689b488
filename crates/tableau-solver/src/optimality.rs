use crate::tableau::Tableau;

/// The tableau is optimal once no reduced cost is negative.
///
/// A cost counts as negative only below `-tolerance`, so with the solver's
/// default of 1e-9 a cost of -1e-10 is treated as zero. Pass a tolerance of
/// 0.0 for an exact sign test.
pub fn is_optimal(tableau: &Tableau, tolerance: f64) -> bool {
    tableau.c_vector().iter().all(|&cost| cost >= -tolerance)
}
