// HiGHS backend
// Translates the committed draft into a native HiGHS row problem. HiGHS
// rows carry both bounds, so a double-bounded row stays a single row here.

use crate::domain::{
    backend::{Result, SolveReport, SolverBackend, SolverError},
    models::ProgramDraft,
    value_objects::{Direction, RowBounds, SolveStatus},
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;

pub struct HighsBackend;

impl HighsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBackend for HighsBackend {
    fn solve(&mut self, draft: &ProgramDraft) -> Result<SolveReport> {
        let start = Instant::now();

        let mut pb = RowProblem::default();
        let cols: Vec<_> = draft
            .objective()
            .iter()
            .map(|&coef| pb.add_integer_column(coef, 0.0..=1.0))
            .collect();

        for (row, &bounds) in draft.rows().iter().enumerate() {
            let terms: Vec<_> = draft
                .row_terms(row)
                .iter()
                .map(|&(col, coef)| (cols[col], coef))
                .collect();

            match bounds {
                // Free rows receive coefficients but never bind
                RowBounds::Free => {}
                RowBounds::Lower(l) => {
                    pb.add_row(l.., &terms);
                }
                RowBounds::Upper(u) => {
                    pb.add_row(..=u, &terms);
                }
                RowBounds::Double(l, u) => {
                    pb.add_row(l..=u, &terms);
                }
                RowBounds::Fixed(t) => {
                    pb.add_row(t..=t, &terms);
                }
            }
        }

        let sense = match draft.direction() {
            Direction::Minimize => Sense::Minimise,
            Direction::Maximize => Sense::Maximise,
        };
        let mut model = pb.optimise(sense);
        model.set_option("output_flag", false);
        model.set_option("threads", draft.threads() as i32);

        let solved = model.solve();
        let report = match solved.status() {
            HighsModelStatus::Optimal => {
                let columns = solved.get_solution().columns().to_vec();
                SolveReport {
                    status: SolveStatus::Optimal,
                    columns,
                }
            }
            HighsModelStatus::Infeasible => SolveReport {
                status: SolveStatus::Infeasible,
                columns: Vec::new(),
            },
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => SolveReport {
                status: SolveStatus::Unbounded,
                columns: Vec::new(),
            },
            status => {
                return Err(SolverError::ExecutionFailed(format!(
                    "HiGHS returned status {:?}",
                    status
                )))
            }
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
        "HiGHS"
    }
}
