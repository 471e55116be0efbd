// Application layer: the program-building facade

use crate::domain::{
    backend::{Result, SolveReport, SolverBackend},
    models::ProgramDraft,
    value_objects::{ConstraintId, Direction, RowBounds, SolveStatus, VariableId},
};
use crate::solver::SolverFactory;

/// One binary integer program, bound to the solver backend compiled into
/// this build.
///
/// The lifecycle is build, commit, solve, read: register variables and
/// constraint rows in any order, accumulate coefficient contributions,
/// [`commit`](IntegerProgram::commit) (optional, [`solve`](IntegerProgram::solve)
/// always commits first), then read values back. Structural changes after a
/// solve are not supported.
pub struct IntegerProgram {
    draft: ProgramDraft,
    backend: Box<dyn SolverBackend>,
    report: Option<SolveReport>,
}

impl IntegerProgram {
    /// Create an empty program.
    ///
    /// `threads` is a parallelism hint for the backend's own search, clamped
    /// to at least 1; backends without parallel search ignore it. A backend
    /// that fails to initialize surfaces the error here, fatally.
    pub fn new(direction: Direction, threads: u32) -> Result<Self> {
        Ok(Self {
            draft: ProgramDraft::new(direction, threads),
            backend: SolverFactory::create()?,
            report: None,
        })
    }

    /// Register one binary decision variable with the given objective
    /// coefficient. Returned handles are unique and strictly increasing.
    pub fn make_variable(&mut self, coef: f64) -> VariableId {
        debug_assert!(self.report.is_none(), "program already solved");
        VariableId::new(self.draft.push_variable(coef))
    }

    /// Register one constraint row with the given bound semantics. Returned
    /// handles are unique and strictly increasing, independent of variable
    /// handles.
    pub fn make_constraint(&mut self, bounds: RowBounds) -> ConstraintId {
        debug_assert!(self.report.is_none(), "program already solved");
        ConstraintId::new(self.draft.push_row(bounds))
    }

    /// Add `coef * var` to the row's accumulated expression.
    ///
    /// May be called any number of times per (row, variable) pair; repeated
    /// calls sum, they do not overwrite.
    pub fn add_constraint(&mut self, row: ConstraintId, var: VariableId, coef: f64) {
        debug_assert!(self.report.is_none(), "program already solved");
        self.draft.push_entry(row.index(), var.index(), coef);
    }

    /// Finalize structural changes: validate the draft and fold the
    /// coefficient matrix. Idempotent; safe to call repeatedly or not at
    /// all, since [`solve`](IntegerProgram::solve) always commits first.
    pub fn commit(&mut self) -> Result<()> {
        self.draft.commit()
    }

    /// Run the backend's optimizer (relaxation followed by integer search,
    /// diagnostics suppressed) and report the outcome. Blocking.
    ///
    /// Infeasible and unbounded outcomes are carried in the returned status,
    /// not as errors; errors are reserved for solver-process failures.
    pub fn solve(&mut self) -> Result<SolveStatus> {
        self.draft.commit()?;
        let report = self.backend.solve(&self.draft)?;
        let status = report.status;
        self.report = Some(report);
        Ok(status)
    }

    /// Solved value of a binary variable.
    ///
    /// Backends report floating point; callers threshold against 0.5 when
    /// exactness is required.
    ///
    /// # Panics
    ///
    /// Panics unless a prior [`solve`](IntegerProgram::solve) produced a
    /// solution-bearing status.
    pub fn value(&self, var: VariableId) -> f64 {
        match &self.report {
            Some(report) if report.status.has_solution() => report.columns[var.index()],
            _ => panic!("value() requires a prior solve() with a feasible outcome"),
        }
    }

    /// Solved objective value, recomputed from the staged coefficients;
    /// `None` until a solve produces a solution
    pub fn objective_value(&self) -> Option<f64> {
        self.report
            .as_ref()
            .filter(|report| report.status.has_solution())
            .map(|report| self.draft.objective_of(&report.columns))
    }

    pub fn num_variables(&self) -> usize {
        self.draft.num_variables()
    }

    pub fn num_constraints(&self) -> usize {
        self.draft.num_rows()
    }

    /// Name of the backend compiled into this build
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn program(direction: Direction) -> IntegerProgram {
        IntegerProgram::new(direction, 1).unwrap()
    }

    #[test]
    fn min_picks_cheapest_of_exactly_one() {
        let mut ip = program(Direction::Minimize);
        let cheap = ip.make_variable(1.0);
        let costly = ip.make_variable(2.0);
        let pick_one = ip.make_constraint(RowBounds::Fixed(1.0));
        ip.add_constraint(pick_one, cheap, 1.0);
        ip.add_constraint(pick_one, costly, 1.0);
        ip.commit().unwrap();

        assert_eq!(ip.solve().unwrap(), SolveStatus::Optimal);
        assert!((ip.value(cheap) - 1.0).abs() < 1e-6);
        assert!(ip.value(costly).abs() < 1e-6);
        assert!((ip.objective_value().unwrap() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn max_selects_the_profitable_variable() {
        let mut ip = program(Direction::Maximize);
        let v = ip.make_variable(5.0);

        // no explicit commit: solve commits unconditionally
        assert_eq!(ip.solve().unwrap(), SolveStatus::Optimal);
        assert!((ip.value(v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn double_bounds_enforce_both_sides() {
        // {0,1} ∩ [1,2] = {1}, so the variable is forced up despite
        // a zero objective weight
        let mut ip = program(Direction::Minimize);
        let v = ip.make_variable(0.0);
        let row = ip.make_constraint(RowBounds::Double(1.0, 2.0));
        ip.add_constraint(row, v, 1.0);

        assert_eq!(ip.solve().unwrap(), SolveStatus::Optimal);
        assert!((ip.value(v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn double_bounds_without_integer_point_are_infeasible() {
        // {0,1} ∩ [0.25, 0.75] is empty; no value may leak out
        let mut ip = program(Direction::Minimize);
        let v = ip.make_variable(0.0);
        let row = ip.make_constraint(RowBounds::Double(0.25, 0.75));
        ip.add_constraint(row, v, 1.0);

        assert_eq!(ip.solve().unwrap(), SolveStatus::Infeasible);
        assert!(ip.objective_value().is_none());
    }

    #[test]
    fn accumulated_entries_match_a_single_entry() {
        let solve_split = |split: bool| {
            let mut ip = program(Direction::Maximize);
            let a = ip.make_variable(3.0);
            let b = ip.make_variable(2.0);
            let cap = ip.make_constraint(RowBounds::Upper(1.5));
            if split {
                ip.add_constraint(cap, a, 0.5);
                ip.add_constraint(cap, a, 0.5);
            } else {
                ip.add_constraint(cap, a, 1.0);
            }
            ip.add_constraint(cap, b, 1.0);
            let status = ip.solve().unwrap();
            (status, ip.value(a), ip.value(b))
        };

        let (s1, a1, b1) = solve_split(true);
        let (s2, a2, b2) = solve_split(false);
        assert_eq!(s1, s2);
        assert!((a1 - a2).abs() < 1e-6);
        assert!((b1 - b2).abs() < 1e-6);
        assert!((a1 - 1.0).abs() < 1e-6);
    }

    #[test]
    fn free_rows_never_constrain() {
        let mut ip = program(Direction::Maximize);
        let v = ip.make_variable(1.0);
        let inert = ip.make_constraint(RowBounds::Free);
        ip.add_constraint(inert, v, 100.0);

        assert_eq!(ip.solve().unwrap(), SolveStatus::Optimal);
        assert!((ip.value(v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn committing_twice_changes_nothing() {
        let mut ip = program(Direction::Minimize);
        let v = ip.make_variable(1.0);
        let row = ip.make_constraint(RowBounds::Fixed(1.0));
        ip.add_constraint(row, v, 1.0);
        ip.commit().unwrap();
        ip.commit().unwrap();

        assert_eq!(ip.solve().unwrap(), SolveStatus::Optimal);
        assert!((ip.value(v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn inverted_double_bounds_fail_at_commit() {
        let mut ip = program(Direction::Minimize);
        let v = ip.make_variable(1.0);
        let row = ip.make_constraint(RowBounds::Double(2.0, 1.0));
        ip.add_constraint(row, v, 1.0);

        assert!(ip.commit().is_err());
    }

    #[test]
    fn repeated_create_solve_drop_cycles() {
        for _ in 0..50 {
            let mut ip = program(Direction::Minimize);
            let v = ip.make_variable(1.0);
            let row = ip.make_constraint(RowBounds::Fixed(1.0));
            ip.add_constraint(row, v, 1.0);
            assert_eq!(ip.solve().unwrap(), SolveStatus::Optimal);
        }
    }

    #[test]
    #[should_panic(expected = "requires a prior solve")]
    fn value_before_solve_panics() {
        let mut ip = program(Direction::Minimize);
        let v = ip.make_variable(1.0);
        ip.value(v);
    }

    proptest! {
        #[test]
        fn variable_handles_strictly_increase(
            coefs in proptest::collection::vec(-10.0f64..10.0, 1..40)
        ) {
            let mut ip = program(Direction::Minimize);
            let ids: Vec<VariableId> =
                coefs.iter().map(|&c| ip.make_variable(c)).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn constraint_handles_increase_independent_of_variables(
            interleave in proptest::collection::vec(proptest::bool::ANY, 1..40)
        ) {
            let mut ip = program(Direction::Minimize);
            let mut rows: Vec<ConstraintId> = Vec::new();
            for &make_var in &interleave {
                if make_var {
                    ip.make_variable(1.0);
                } else {
                    rows.push(ip.make_constraint(RowBounds::Free));
                }
            }
            prop_assert!(rows.windows(2).all(|w| w[0] < w[1]));
            prop_assert_eq!(rows.len(), ip.num_constraints());
        }
    }
}
