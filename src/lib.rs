// Domain layer: program model and backend contract
pub mod domain;

// Application layer: the IntegerProgram facade
pub mod application;

// Solver adapters: concrete backends, exactly one compiled in per build
pub mod solver;

// Re-export commonly used types
pub use domain::{
    ConstraintId, Direction, ProgramDraft, RowBounds, SolveReport, SolveStatus, SolverBackend,
    SolverError, VariableId,
};

pub use application::IntegerProgram;

pub use solver::SolverFactory;
