// Domain module: program model and backend contract

pub mod backend;
pub mod models;
pub mod value_objects;

pub use backend::*;
pub use models::*;
pub use value_objects::*;
