use crate::domain::backend::{Result, SolverBackend};

/// Yields the backend compiled into this build
pub struct SolverFactory;

impl SolverFactory {
    /// Create the selected backend.
    ///
    /// Initialization failures surface as `SolverError::SolverUnavailable`;
    /// the bundled backends construct in-process and cannot fail today, but
    /// callers must treat a failure here as fatal for the program instance.
    pub fn create() -> Result<Box<dyn SolverBackend>> {
        #[cfg(feature = "highs")]
        {
            Ok(Box::new(super::HighsBackend::new()))
        }
        #[cfg(all(feature = "cbc", not(feature = "highs")))]
        {
            Ok(Box::new(super::CoinCbcBackend::new()))
        }
        #[cfg(all(feature = "microlp", not(feature = "cbc"), not(feature = "highs")))]
        {
            Ok(Box::new(super::MicrolpBackend::new()))
        }
    }
}
