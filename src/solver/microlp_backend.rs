// microlp backend
// Pure-Rust simplex + branch-and-bound; the default backend. microlp rows
// are single comparisons, so a double-bounded row becomes two native
// constraints sharing the same folded expression.

use crate::domain::{
    backend::{Result, SolveReport, SolverBackend, SolverError},
    models::ProgramDraft,
    value_objects::{Direction, RowBounds, SolveStatus},
};
use microlp::{ComparisonOp, OptimizationDirection, Problem};
use std::time::Instant;

pub struct MicrolpBackend;

impl MicrolpBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MicrolpBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBackend for MicrolpBackend {
    fn solve(&mut self, draft: &ProgramDraft) -> Result<SolveReport> {
        let start = Instant::now();

        let direction = match draft.direction() {
            Direction::Minimize => OptimizationDirection::Minimize,
            Direction::Maximize => OptimizationDirection::Maximize,
        };
        let mut problem = Problem::new(direction);

        let vars: Vec<microlp::Variable> = draft
            .objective()
            .iter()
            .map(|&coef| problem.add_integer_var(coef, (0, 1)))
            .collect();

        for (row, &bounds) in draft.rows().iter().enumerate() {
            let terms: Vec<(microlp::Variable, f64)> = draft
                .row_terms(row)
                .iter()
                .map(|&(col, coef)| (vars[col], coef))
                .collect();

            match bounds {
                // Free rows receive coefficients but never bind
                RowBounds::Free => {}
                RowBounds::Lower(l) => {
                    problem.add_constraint(terms.as_slice(), ComparisonOp::Ge, l);
                }
                RowBounds::Upper(u) => {
                    problem.add_constraint(terms.as_slice(), ComparisonOp::Le, u);
                }
                RowBounds::Double(l, u) => {
                    problem.add_constraint(terms.as_slice(), ComparisonOp::Ge, l);
                    problem.add_constraint(terms.as_slice(), ComparisonOp::Le, u);
                }
                RowBounds::Fixed(t) => {
                    problem.add_constraint(terms.as_slice(), ComparisonOp::Eq, t);
                }
            }
        }

        let report = match problem.solve() {
            Ok(solution) => {
                let columns = vars.iter().map(|&v| solution[v]).collect();
                SolveReport {
                    status: SolveStatus::Optimal,
                    columns,
                }
            }
            Err(microlp::Error::Infeasible) => SolveReport {
                status: SolveStatus::Infeasible,
                columns: Vec::new(),
            },
            Err(microlp::Error::Unbounded) => SolveReport {
                status: SolveStatus::Unbounded,
                columns: Vec::new(),
            },
            Err(other) => return Err(SolverError::ExecutionFailed(other.to_string())),
        };

        tracing::debug!(
            backend = self.name(),
            variables = draft.num_variables(),
            rows = draft.num_rows(),
            status = %report.status,
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "integer solve finished"
        );
        Ok(report)
    }

    fn name(&self) -> &str {
        "microlp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solves_a_committed_draft() {
        let mut draft = ProgramDraft::new(Direction::Maximize, 1);
        let v = draft.push_variable(5.0);
        let r = draft.push_row(RowBounds::Fixed(0.0));
        draft.push_entry(r, v, 1.0);
        draft.commit().unwrap();

        let mut backend = MicrolpBackend::new();
        let report = backend.solve(&draft).unwrap();
        assert_eq!(report.status, SolveStatus::Optimal);
        assert!(report.columns[v].abs() < 1e-6);
    }

    #[test]
    fn reports_name() {
        assert_eq!(MicrolpBackend::new().name(), "microlp");
    }
}
