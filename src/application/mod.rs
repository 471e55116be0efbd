// Application layer: the program-building facade

pub mod program;

pub use program::IntegerProgram;
