// Staged form of a binary integer program, shared by every backend

use std::collections::BTreeMap;

use super::backend::{Result, SolverError};
use super::value_objects::{Direction, RowBounds};

/// The staged problem: direction, thread hint, objective coefficients,
/// row bounds, and a triple list of matrix entries.
///
/// Variables and rows accumulate here in caller order. The coefficient
/// matrix is kept as `(row, col, coef)` triples until [`commit`] folds it
/// into per-row term lists; contributions to the same (row, column) pair
/// sum during folding, they never overwrite. Backends translate from this
/// one representation into their native model at solve time.
///
/// [`commit`]: ProgramDraft::commit
#[derive(Debug, Clone)]
pub struct ProgramDraft {
    direction: Direction,
    threads: u32,
    objective: Vec<f64>,
    rows: Vec<RowBounds>,
    entries: Vec<(usize, usize, f64)>,
    folded: Vec<Vec<(usize, f64)>>,
    dirty: bool,
}

impl ProgramDraft {
    pub fn new(direction: Direction, threads: u32) -> Self {
        Self {
            direction,
            threads: threads.max(1),
            objective: Vec::new(),
            rows: Vec::new(),
            entries: Vec::new(),
            folded: Vec::new(),
            dirty: false,
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Thread hint for backends that run parallel searches; at least 1
    pub fn threads(&self) -> u32 {
        self.threads
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Objective coefficient per column, in creation order
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn rows(&self) -> &[RowBounds] {
        &self.rows
    }

    /// Register one binary variable; returns its column index
    pub fn push_variable(&mut self, coef: f64) -> usize {
        self.objective.push(coef);
        self.objective.len() - 1
    }

    /// Register one constraint row; returns its row index
    pub fn push_row(&mut self, bounds: RowBounds) -> usize {
        self.rows.push(bounds);
        self.dirty = true;
        self.rows.len() - 1
    }

    /// Stage one `coef * column` contribution to a row's expression
    pub fn push_entry(&mut self, row: usize, col: usize, coef: f64) {
        debug_assert!(row < self.rows.len(), "unknown constraint row {}", row);
        debug_assert!(col < self.objective.len(), "unknown variable column {}", col);
        self.entries.push((row, col, coef));
        self.dirty = true;
    }

    /// Validate the draft and fold the triple list into per-row terms.
    ///
    /// Idempotent: committing an already-committed draft is a no-op, so it
    /// is safe to call any number of times, or not at all (solving always
    /// commits first).
    pub fn commit(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        for (row, bounds) in self.rows.iter().enumerate() {
            if let RowBounds::Double(lower, upper) = bounds {
                if lower > upper {
                    return Err(SolverError::InvalidProgram(format!(
                        "row {} has lower bound {} above upper bound {}",
                        row, lower, upper
                    )));
                }
            }
        }
        let mut folded: Vec<BTreeMap<usize, f64>> = vec![BTreeMap::new(); self.rows.len()];
        for &(row, col, coef) in &self.entries {
            *folded[row].entry(col).or_insert(0.0) += coef;
        }
        self.folded = folded
            .into_iter()
            .map(|terms| terms.into_iter().collect())
            .collect();
        self.dirty = false;
        Ok(())
    }

    /// Folded `(column, coefficient)` terms of one row, ordered by column.
    /// Valid after [`commit`](ProgramDraft::commit).
    pub fn row_terms(&self, row: usize) -> &[(usize, f64)] {
        debug_assert!(!self.dirty, "draft has uncommitted entries");
        &self.folded[row]
    }

    /// Objective value of a column assignment under this draft's coefficients
    pub fn objective_of(&self, columns: &[f64]) -> f64 {
        self.objective
            .iter()
            .zip(columns)
            .map(|(coef, value)| coef * value)
            .sum()
    }
}
