use std::fmt;
use std::ops::Index;

use crate::error::SimplexError;

/// Dense row-major simplex tableau.
///
/// Row 0 is the objective row: column 0 holds the running objective value and
/// columns `1..` the reduced costs. Rows `1..` are constraints: column 0 holds
/// the right-hand side (the B vector) and columns `1..` the coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Tableau {
    /// Build a tableau by copying `matrix`. Fails if the matrix is empty,
    /// ragged, or holds a NaN or infinite entry.
    pub fn new<R: AsRef<[f64]>>(matrix: &[R]) -> Result<Self, SimplexError> {
        let cols = check_shape(matrix)?;
        let mut data = Vec::with_capacity(matrix.len() * cols);
        for row in matrix {
            data.extend_from_slice(row.as_ref());
        }

        Ok(Self {
            data,
            rows: matrix.len(),
            cols,
        })
    }

    /// Build a tableau from owned row vectors, moving their entries into the
    /// flat buffer. Same checks as [`Tableau::new`].
    pub fn from_rows(matrix: Vec<Vec<f64>>) -> Result<Self, SimplexError> {
        let cols = check_shape(&matrix)?;
        let rows = matrix.len();
        let data: Vec<f64> = matrix.into_iter().flatten().collect();

        Ok(Self { data, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of constraint rows (everything below the objective row).
    pub fn num_constraints(&self) -> usize {
        self.rows - 1
    }

    /// Number of decision-variable columns (everything right of the B vector).
    pub fn num_variables(&self) -> usize {
        self.cols - 1
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<(), SimplexError> {
        if row >= self.rows || col >= self.cols {
            return Err(SimplexError::OutOfBounds { row, col });
        }
        self.data[row * self.cols + col] = value;
        Ok(())
    }

    /// Borrow a full row. Panics if `row` is out of range.
    pub fn row(&self, row: usize) -> &[f64] {
        assert!(row < self.rows, "row {} out of range (rows = {})", row, self.rows);
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub(crate) fn row_mut(&mut self, row: usize) -> &mut [f64] {
        let start = row * self.cols;
        &mut self.data[start..start + self.cols]
    }

    /// Objective row entries in columns `1..` (the C vector).
    pub fn c_vector(&self) -> &[f64] {
        &self.row(0)[1..]
    }

    /// Right-hand sides of the constraint rows (the B vector).
    pub fn b_vector(&self) -> Vec<f64> {
        (1..self.rows).map(|r| self[(r, 0)]).collect()
    }

    /// Snapshot of the full matrix.
    pub fn to_matrix(&self) -> Vec<Vec<f64>> {
        self.data.chunks(self.cols).map(|row| row.to_vec()).collect()
    }
}

/// Column count of a well-formed matrix.
fn check_shape<R: AsRef<[f64]>>(matrix: &[R]) -> Result<usize, SimplexError> {
    let Some(first) = matrix.first() else {
        return Err(SimplexError::invalid_shape("matrix has no rows"));
    };
    let cols = first.as_ref().len();
    if cols == 0 {
        return Err(SimplexError::invalid_shape("matrix has no columns"));
    }

    for (r, row) in matrix.iter().enumerate() {
        let row = row.as_ref();
        if row.len() != cols {
            return Err(SimplexError::invalid_shape(format!(
                "row {} has {} entries, expected {}",
                r,
                row.len(),
                cols
            )));
        }
        if let Some(c) = row.iter().position(|v| !v.is_finite()) {
            return Err(SimplexError::invalid_shape(format!(
                "entry ({}, {}) is {}",
                r, c, row[c]
            )));
        }
    }

    Ok(cols)
}

impl Index<(usize, usize)> for Tableau {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "entry ({}, {}) out of range for {}x{} tableau",
            row,
            col,
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            let line: Vec<String> = self.row(r).iter().map(|v| v.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
