//! End-to-end tests for the simplex solver.
//!
//! These build tableaus from small linear programs, solve them, and check the terminal status,
//! the decision values and the objective. Random bounded problems are cross-checked for
//! feasibility and against a brute-force vertex bound.

use approx::assert_abs_diff_eq;
use rand::Rng;
use simplx::{DenseMatrix, LinearProgram, LpContext, LpSolver, SimplexSolver, Status};

fn solve_lp(lp: &LinearProgram<f64>, eps: f64) -> (DenseMatrix<f64>, simplx::SolveOutcome<f64>) {
    let mut tableau = lp.tableau();
    let mut solver = SimplexSolver::new(eps);
    let outcome = solver.solve(&mut tableau).unwrap();
    (tableau, outcome)
}

/// max 3x1 + 2x2 s.t. x1 + x2 <= 4, x1 + 3x2 <= 6.
#[test]
fn solves_small_maximization() {
    let lp = LinearProgram::from_rows(vec![3.0, 2.0], &[vec![1.0, 1.0], vec![1.0, 3.0]], vec![4.0, 6.0]).unwrap();
    let (tableau, outcome) = solve_lp(&lp, 1e-6);
    assert_eq!(outcome.status, Status::Solved);
    let x = outcome.decision_values(&tableau).unwrap();
    assert_abs_diff_eq!(x[0], 4.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x[1], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(outcome.objective(&tableau), 12.0, epsilon = 1e-9);
    assert_eq!(outcome.basic, vec![0, 3]);
}

/// max x1 s.t. -x1 <= 1: x1 can grow without limit.
#[test]
fn unbounded_direction_has_no_leaving_row() {
    let lp = LinearProgram::from_rows(vec![1.0], &[vec![-1.0]], vec![1.0]).unwrap();
    let (tableau, outcome) = solve_lp(&lp, 1e-6);
    assert_eq!(outcome.status, Status::NotApplicable);
    assert_eq!(outcome.stats.pivots, 0);
    assert!(outcome.decision_values(&tableau).is_none());
}

/// max x1 s.t. -x1 + x2 <= 0, x1 <= 3. The first row has a zero right-hand side and a
/// negative entry in the entering column, so it must not be chosen as the pivot row.
#[test]
fn zero_rhs_with_negative_entry_is_skipped() {
    let lp = LinearProgram::from_rows(vec![1.0, 0.0], &[vec![-1.0, 1.0], vec![1.0, 0.0]], vec![0.0, 3.0]).unwrap();
    let (tableau, outcome) = solve_lp(&lp, 1e-6);
    assert_eq!(outcome.status, Status::Solved);
    assert_eq!(outcome.basic, vec![2, 0]);
    let x = outcome.decision_values(&tableau).unwrap();
    assert_abs_diff_eq!(x[0], 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(outcome.objective(&tableau), 3.0, epsilon = 1e-12);
    assert!(lp.is_feasible(&x, 1e-9).unwrap());
}

#[test]
fn resolving_optimal_tableau_is_idempotent() {
    let lp = LinearProgram::from_rows(
        vec![2.0, 3.0, 1.0],
        &[vec![1.0, 1.0, 1.0], vec![2.0, 1.0, 0.0], vec![0.0, 1.0, 3.0]],
        vec![10.0, 12.0, 9.0],
    )
    .unwrap();
    let (mut tableau, first) = solve_lp(&lp, 1e-6);
    assert_eq!(first.status, Status::Solved);
    let snapshot = tableau.clone();

    let mut solver = SimplexSolver::new(1e-6);
    let second = solver.resume(&mut tableau, first.basic.clone()).unwrap();
    assert_eq!(second.status, Status::Solved);
    assert_eq!(second.basic, first.basic);
    assert_eq!(second.stats.pivots, 0);
    assert_eq!(tableau, snapshot);
}

#[test]
fn second_solve_on_optimal_tableau_changes_nothing() {
    let lp = LinearProgram::from_rows(vec![3.0, 2.0], &[vec![1.0, 1.0], vec![1.0, 3.0]], vec![4.0, 6.0]).unwrap();
    let (mut tableau, first) = solve_lp(&lp, 1e-6);
    let snapshot = tableau.clone();

    let second = SimplexSolver::new(1e-6).solve(&mut tableau).unwrap();
    assert_eq!(second.status, Status::Solved);
    assert_eq!(second.basic, first.basic);
    assert_eq!(second.stats.pivots, 0);
    assert_eq!(second.decision_values(&tableau), first.decision_values(&snapshot));
    assert_eq!(tableau, snapshot);
}

#[test]
fn degenerate_vertex_still_reaches_optimum() {
    // max x1 + x2 s.t. x1 <= 0 (degenerate), x1 + x2 <= 5, x2 <= 4; optimum x = (0, 4)
    let lp = LinearProgram::from_rows(
        vec![1.0, 1.0],
        &[vec![1.0, 0.0], vec![1.0, 1.0], vec![0.0, 1.0]],
        vec![0.0, 5.0, 4.0],
    )
    .unwrap();
    let solution = LpContext::new(lp).solve().unwrap();
    assert_eq!(solution.status, Status::Solved);
    assert_eq!(solution.pivots, 2);
    assert_abs_diff_eq!(solution.objective, 4.0, epsilon = 1e-9);
    let x = solution.values.unwrap();
    assert_abs_diff_eq!(x[0], 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(x[1], 4.0, epsilon = 1e-9);
}

#[test]
fn single_precision_tableau() {
    let mut tableau = DenseMatrix::<f32>::from_rows(&[
        vec![-3.0, -2.0, 0.0, 0.0, 0.0],
        vec![1.0, 1.0, 1.0, 0.0, 4.0],
        vec![1.0, 3.0, 0.0, 1.0, 6.0],
    ])
    .unwrap();
    let outcome = SimplexSolver::new(1e-5f32).solve(&mut tableau).unwrap();
    assert_eq!(outcome.status, Status::Solved);
    assert_eq!(outcome.decision_values(&tableau).unwrap(), vec![4.0f32, 0.0]);
}

/// Random problems with non-negative data and positive right-hand sides are feasible at the
/// origin and bounded, so the solver must report an optimum at a feasible point that is at
/// least as good as the origin and as every unit-direction step.
#[test]
fn random_bounded_problems_are_solved_feasibly() {
    let mut rng = rand::thread_rng();
    for _ in 0..25 {
        let v = rng.gen_range(1..6);
        let r = rng.gen_range(1..6);
        let objective: Vec<f64> = (0..v).map(|_| rng.gen_range(0.1..5.0)).collect();
        let rows: Vec<Vec<f64>> = (0..r).map(|_| (0..v).map(|_| rng.gen_range(0.1..4.0)).collect()).collect();
        let rhs: Vec<f64> = (0..r).map(|_| rng.gen_range(1.0..20.0)).collect();
        let lp = LinearProgram::from_rows(objective.clone(), &rows, rhs.clone()).unwrap();

        let solution = LpContext::new(lp.clone()).solve().unwrap();
        assert_eq!(solution.status, Status::Solved);
        let x = solution.values.unwrap();
        assert!(lp.is_feasible(&x, 1e-7).unwrap(), "infeasible point {:?}", x);
        assert_abs_diff_eq!(lp.objective_value(&x).unwrap(), solution.objective, epsilon = 1e-7);

        for j in 0..v {
            let step = (0..r).map(|i| rhs[i] / rows[i][j]).fold(f64::INFINITY, f64::min);
            assert!(solution.objective >= objective[j] * step - 1e-7);
        }
    }
}
