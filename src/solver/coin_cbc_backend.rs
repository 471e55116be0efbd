// COIN-OR CBC backend, through good_lp
// good_lp constraints are single-sided, so a double-bounded row becomes two
// synthesized rows. Both are built from the same folded term list, so every
// accumulated contribution reaches both sides; the caller still sees one
// logical constraint handle.

use crate::domain::{
    backend::{Result, SolveReport, SolverBackend, SolverError},
    models::ProgramDraft,
    value_objects::{Direction, RowBounds, SolveStatus},
};
use good_lp::{
    coin_cbc, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};
use std::time::Instant;

pub struct CoinCbcBackend;

impl CoinCbcBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverBackend for CoinCbcBackend {
    fn solve(&mut self, draft: &ProgramDraft) -> Result<SolveReport> {
        let start = Instant::now();

        let mut vars = variables!();
        let lp_vars: Vec<good_lp::Variable> = draft
            .objective()
            .iter()
            .map(|_| vars.add(variable().integer().min(0.0).max(1.0)))
            .collect();

        let mut objective: Expression = 0.into();
        for (col, &coef) in draft.objective().iter().enumerate() {
            if coef != 0.0 {
                objective += coef * lp_vars[col];
            }
        }

        let mut model = match draft.direction() {
            Direction::Minimize => vars.minimise(objective).using(coin_cbc),
            Direction::Maximize => vars.maximise(objective).using(coin_cbc),
        };

        for (row, &bounds) in draft.rows().iter().enumerate() {
            let mut lhs: Expression = 0.into();
            for &(col, coef) in draft.row_terms(row) {
                lhs += coef * lp_vars[col];
            }

            match bounds {
                // Free rows receive coefficients but never bind
                RowBounds::Free => {}
                RowBounds::Lower(l) => {
                    model = model.with(lhs.geq(l));
                }
                RowBounds::Upper(u) => {
                    model = model.with(lhs.leq(u));
                }
                RowBounds::Double(l, u) => {
                    model = model.with(lhs.clone().geq(l));
                    model = model.with(lhs.leq(u));
                }
                RowBounds::Fixed(t) => {
                    model = model.with(lhs.eq(t));
                }
            }
        }

        model.set_parameter("log", "0");
        model.set_parameter("threads", &draft.threads().to_string());

        let report = match model.solve() {
            Ok(solution) => {
                let columns = lp_vars.iter().map(|&v| solution.value(v)).collect();
                SolveReport {
                    status: SolveStatus::Optimal,
                    columns,
                }
            }
            Err(ResolutionError::Infeasible) => SolveReport {
                status: SolveStatus::Infeasible,
                columns: Vec::new(),
            },
            Err(ResolutionError::Unbounded) => SolveReport {
                status: SolveStatus::Unbounded,
                columns: Vec::new(),
            },
            Err(other) => return Err(SolverError::ExecutionFailed(format!("{:?}", other))),
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
        "COIN-OR CBC"
    }
}
