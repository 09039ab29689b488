use tableau_solver::{SimplexError, Solution, Tableau};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    /// An optimal tableau was reached
    Optimal,
    /// The input failed the canonical-form gate
    NotCanonical,
    /// No leaving row for an improving column
    UnboundedOrInfeasible,
    /// Pivoting hit the iteration cap
    IterationLimit,
    /// The input matrix could not be used as a tableau
    Invalid,
}

/// Machine-readable summary of a solve
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub status: ReportStatus,
    pub values: Vec<f64>,
    pub objective_value: Option<f64>,
    pub iterations: usize,
    pub message: Option<String>,
}

impl Report {
    pub fn from_result(result: &Result<Solution, SimplexError>) -> Self {
        match result {
            Ok(solution) => Self {
                status: ReportStatus::Optimal,
                values: solution.values.clone(),
                objective_value: Some(solution.objective_value),
                iterations: solution.iterations,
                message: None,
            },
            Err(e) => {
                let status = match e {
                    SimplexError::NotCanonical => ReportStatus::NotCanonical,
                    SimplexError::UnboundedOrInfeasible { .. } => ReportStatus::UnboundedOrInfeasible,
                    SimplexError::IterationLimitExceeded { .. } => ReportStatus::IterationLimit,
                    SimplexError::InvalidShape { .. } | SimplexError::OutOfBounds { .. } => {
                        ReportStatus::Invalid
                    }
                };
                Self {
                    status,
                    values: Vec::new(),
                    objective_value: None,
                    iterations: 0,
                    message: Some(e.to_string()),
                }
            }
        }
    }
}

/// One `x_i = value` line per variable (1-indexed), then the objective value.
pub fn format_solution(solution: &Solution) -> String {
    let mut lines: Vec<String> = solution
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| format!("x_{} = {}\n", i + 1, value))
        .collect();
    lines.push(format!("objective = {}\n", solution.objective_value));
    lines.concat()
}

/// Right-aligned grid with a rule under the objective row.
pub fn format_tableau(tableau: &Tableau, precision: usize) -> String {
    let cells: Vec<Vec<String>> = (0..tableau.rows())
        .map(|r| {
            tableau
                .row(r)
                .iter()
                .map(|v| format!("{:.*}", precision, clean_zero(*v)))
                .collect()
        })
        .collect();

    let width = cells
        .iter()
        .flat_map(|row| row.iter().map(String::len))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (r, row) in cells.iter().enumerate() {
        let line: Vec<String> = row.iter().map(|cell| format!("{:>width$}", cell)).collect();
        out.push_str(&line.join("  "));
        out.push('\n');
        if r == 0 && cells.len() > 1 {
            let rule_len = row.len() * width + row.len().saturating_sub(1) * 2;
            out.push_str(&"-".repeat(rule_len));
            out.push('\n');
        }
    }
    out
}

fn clean_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}
