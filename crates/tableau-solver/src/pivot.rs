use log::trace;

use crate::tableau::Tableau;

/// A pivot position: `col` enters the basis on constraint row `row`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pivot {
    pub row: usize,
    pub col: usize,
}

impl Pivot {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Pick the pivot with the smallest ratio across every improving column.
///
/// Improving columns have a negative reduced cost; a row is a leaving
/// candidate only where its entry in that column is positive. Columns are
/// scanned from the right and rows from the bottom, and a candidate replaces
/// the incumbent only with a strictly smaller ratio. Returns `None` when no
/// improving column has a leaving row.
pub fn select_pivot(tableau: &Tableau, tolerance: f64) -> Option<Pivot> {
    let mut best: Option<(Pivot, f64)> = None;

    for col in (1..tableau.cols()).rev() {
        if tableau[(0, col)] >= -tolerance {
            continue;
        }

        for row in (1..tableau.rows()).rev() {
            let entry = tableau[(row, col)];
            if entry <= tolerance {
                continue;
            }

            let ratio = tableau[(row, 0)] / entry;
            match best {
                Some((_, min_ratio)) if ratio >= min_ratio => {}
                _ => best = Some((Pivot::new(row, col), ratio)),
            }
        }
    }

    if let Some((pivot, ratio)) = best {
        trace!("selected pivot ({}, {}) with ratio {}", pivot.row, pivot.col, ratio);
    }

    best.map(|(pivot, _)| pivot)
}

/// Gauss-Jordan pivot: turn column `pivot.col` into the unit vector at `pivot.row`.
///
/// Every other row first has a multiple of the pivot row added to it; the
/// pivot row is scaled last.
///
/// # Panics
///
/// Panics if the pivot entry is zero. Pivot selection never produces one.
pub fn execute_pivot(tableau: &mut Tableau, pivot: Pivot) {
    let Pivot { row, col } = pivot;
    let pivot_value = tableau[(row, col)];
    assert!(
        pivot_value != 0.0,
        "pivot entry at ({}, {}) is zero",
        row,
        col
    );

    let pivot_row = tableau.row(row).to_vec();

    for r in 0..tableau.rows() {
        if r == row {
            continue;
        }

        let current = tableau.row_mut(r);
        let scalar = -(current[col] / pivot_value);
        if scalar == 0.0 {
            continue;
        }
        for (value, &p) in current.iter_mut().zip(&pivot_row) {
            *value += scalar * p;
        }
        current[col] = 0.0;
    }

    let scale = 1.0 / pivot_value;
    let current = tableau.row_mut(row);
    for value in current.iter_mut() {
        *value *= scale;
    }
    current[col] = 1.0;
}
