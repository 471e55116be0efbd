// Backend contract for solver integrations
// Exactly one concrete implementation is compiled into a given build
// (see solver::factory); each must satisfy the identical contract so the
// caller never observes which solver library is linked in.

use super::models::ProgramDraft;
use super::value_objects::SolveStatus;

/// Error types for the solver adapters
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid program: {0}")]
    InvalidProgram(String),

    #[error("Solver not available: {0}")]
    SolverUnavailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Outcome of one optimization run
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub status: SolveStatus,
    /// Solved value per column; empty unless `status.has_solution()`
    pub columns: Vec<f64>,
}

/// Contract that every compiled-in backend satisfies.
///
/// The draft a backend receives is already committed: row terms are folded
/// and validated. Translation into the native model happens here, once per
/// solve, with the solver's own diagnostic output suppressed. An infeasible
/// or unbounded outcome is a [`SolveReport`], not an error; errors are
/// reserved for solver-process failures.
pub trait SolverBackend {
    /// Translate the draft into the native model and optimize it
    fn solve(&mut self, draft: &ProgramDraft) -> Result<SolveReport>;

    /// Name of the underlying solver, for diagnostics
    fn name(&self) -> &str;
}
