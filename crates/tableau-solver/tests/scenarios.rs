use paste::paste;
use tableau_solver::*;

const EPS: f64 = 1e-9;

struct TestCase {
    matrix: Vec<Vec<f64>>,
    check_result: fn(Result<Solution, SimplexError>),
}

fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{:?} vs {:?}", actual, expected);
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        assert!((a - e).abs() < 1e-6, "x_{} = {} (expected {})", i + 1, a, e);
    }
}

fn slack_maximization() -> TestCase {
    // max 3x + 2y, x + y <= 4, x <= 3
    TestCase {
        matrix: vec![
            vec![0.0, -3.0, -2.0, 0.0, 0.0],
            vec![4.0, 1.0, 1.0, 1.0, 0.0],
            vec![3.0, 1.0, 0.0, 0.0, 1.0],
        ],
        check_result: |result| {
            let solution = result.unwrap();
            assert_close(&solution.values, &[3.0, 1.0, 0.0, 0.0]);
            assert!((solution.objective_value - 11.0).abs() < 1e-6);
        },
    }
}

fn three_constraints() -> TestCase {
    // max 5x + 4y, 6x + 4y <= 24, x + 2y <= 6, y <= 2
    // Optimal: x=3, y=1.5, obj=21
    TestCase {
        matrix: vec![
            vec![0.0, -5.0, -4.0, 0.0, 0.0, 0.0],
            vec![24.0, 6.0, 4.0, 1.0, 0.0, 0.0],
            vec![6.0, 1.0, 2.0, 0.0, 1.0, 0.0],
            vec![2.0, 0.0, 1.0, 0.0, 0.0, 1.0],
        ],
        check_result: |result| {
            let solution = result.unwrap();
            assert_close(&solution.values[..2], &[3.0, 1.5]);
            assert!((solution.objective_value - 21.0).abs() < 1e-6);
        },
    }
}

fn degenerate_rhs() -> TestCase {
    // max 2x + y, x - y + s1 = 0, x + y + s2 = 4; first pivot is degenerate
    TestCase {
        matrix: vec![
            vec![0.0, -2.0, -1.0, 0.0, 0.0],
            vec![0.0, 1.0, -1.0, 1.0, 0.0],
            vec![4.0, 1.0, 1.0, 0.0, 1.0],
        ],
        check_result: |result| {
            let solution = result.unwrap();
            assert_eq!(solution.pivots, vec![Pivot::new(1, 1), Pivot::new(2, 2)]);
            assert_close(&solution.values, &[2.0, 2.0, 0.0, 0.0]);
            assert!((solution.objective_value - 6.0).abs() < 1e-6);
        },
    }
}

fn unbounded_column() -> TestCase {
    TestCase {
        matrix: vec![vec![0.0, -1.0, 0.0], vec![2.0, -1.0, 1.0]],
        check_result: |result| {
            assert!(matches!(
                result,
                Err(SimplexError::UnboundedOrInfeasible { .. })
            ));
        },
    }
}

fn negative_rhs() -> TestCase {
    TestCase {
        matrix: vec![
            vec![0.0, -1.0, 0.0, 0.0],
            vec![-2.0, 1.0, 1.0, 0.0],
            vec![3.0, 1.0, 0.0, 1.0],
        ],
        check_result: |result| {
            assert_eq!(result.unwrap_err(), SimplexError::NotCanonical);
        },
    }
}

fn short_row() -> TestCase {
    TestCase {
        matrix: vec![vec![0.0, -2.0, -1.0], vec![4.0, 1.0], vec![6.0, 1.0, 2.0]],
        check_result: |result| {
            assert!(matches!(result, Err(SimplexError::InvalidShape { .. })));
        },
    }
}

macro_rules! generate_tests {
    ($solver_name:ident, $solver:expr, $($problem:ident,)+) => {
        paste! {
            $(
                #[test]
                fn [<$solver_name _ $problem>]() {
                    let test_case = $problem();
                    let solver = $solver;
                    (test_case.check_result)(solver.solve(&test_case.matrix))
                }
            )+
        }
    };
}

generate_tests! {
    default,
    Solver::default(),
    slack_maximization,
    three_constraints,
    degenerate_rhs,
    unbounded_column,
    negative_rhs,
    short_row,
}

generate_tests! {
    tight_tolerance,
    Solver::new().with_tolerance(1e-12),
    slack_maximization,
    three_constraints,
    degenerate_rhs,
    unbounded_column,
    negative_rhs,
    short_row,
}

#[test]
fn scenario_a_without_identity_basis() {
    let matrix = [[0.0, -2.0, -1.0], [4.0, 1.0, 1.0], [6.0, 1.0, 2.0]];

    let mut tableau = Tableau::new(&matrix).unwrap();
    assert!(!is_canonical(&tableau, EPS));
    assert_eq!(Solver::new().optimize(&mut tableau), Err(SimplexError::NotCanonical));

    // x1 + x2 = 4, x1 + 2 x2 = 6 pins x = (2, 2), so max 2 x1 + x2 = 6.
    let solver = Solver::new().with_canonical_check(false);
    let stats = solver.optimize(&mut tableau).unwrap();
    assert_eq!(stats.state, SolverState::Optimal);
    assert_eq!(stats.pivots, vec![Pivot::new(2, 2), Pivot::new(1, 1)]);
    assert!(is_optimal(&tableau, EPS));
    assert_eq!(objective_value(&tableau), 6.0);
    assert_eq!(basic_feasible_solution(&tableau, EPS), vec![2.0, 2.0]);
}

#[test]
fn scenario_b_degenerate_completes_within_cap() {
    let solver = Solver::new().with_max_iterations(10);
    let result = solver.solve(&degenerate_rhs().matrix);
    assert!(!matches!(result, Err(SimplexError::IterationLimitExceeded { .. })));
    assert_eq!(result.unwrap().iterations, 2);
}

#[test]
fn scenario_d_negative_rhs_does_not_mutate() {
    let matrix = negative_rhs().matrix;
    let mut tableau = Tableau::new(&matrix).unwrap();
    assert_eq!(Solver::new().optimize(&mut tableau), Err(SimplexError::NotCanonical));
    assert_eq!(tableau.to_matrix(), matrix);
}

#[test]
fn optimal_after_successful_optimize() {
    for case in [slack_maximization(), three_constraints(), degenerate_rhs()] {
        let mut tableau = Tableau::new(&case.matrix).unwrap();
        assert!(!is_optimal(&tableau, EPS));
        Solver::new().optimize(&mut tableau).unwrap();
        assert!(is_optimal(&tableau, EPS));
    }
}

#[test]
fn objective_never_decreases_and_pivot_column_is_unit() {
    for case in [slack_maximization(), three_constraints(), degenerate_rhs()] {
        let mut tableau = Tableau::new(&case.matrix).unwrap();
        let mut previous = objective_value(&tableau);

        while let Some(pivot) = select_pivot(&tableau, EPS) {
            execute_pivot(&mut tableau, pivot);

            for r in 0..tableau.rows() {
                let expected = if r == pivot.row { 1.0 } else { 0.0 };
                assert!((tableau[(r, pivot.col)] - expected).abs() < EPS);
            }

            let current = objective_value(&tableau);
            assert!(current >= previous - EPS, "{} dropped to {}", previous, current);
            previous = current;
        }

        assert!(is_optimal(&tableau, EPS));
    }
}
