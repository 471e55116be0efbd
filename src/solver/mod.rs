// Solver adapters module
//
// Exactly one backend is compiled in. Features are additive in cargo, so a
// build that unions several resolves by precedence: highs > cbc > microlp.

#[cfg(not(any(feature = "microlp", feature = "cbc", feature = "highs")))]
compile_error!("enable one solver backend feature: `microlp` (default), `cbc`, or `highs`");

#[cfg(all(feature = "cbc", not(feature = "highs")))]
pub mod coin_cbc_backend;
pub mod factory;
#[cfg(feature = "highs")]
pub mod highs_backend;
#[cfg(all(feature = "microlp", not(feature = "cbc"), not(feature = "highs")))]
pub mod microlp_backend;

#[cfg(all(feature = "cbc", not(feature = "highs")))]
pub use coin_cbc_backend::CoinCbcBackend;
pub use factory::SolverFactory;
#[cfg(feature = "highs")]
pub use highs_backend::HighsBackend;
#[cfg(all(feature = "microlp", not(feature = "cbc"), not(feature = "highs")))]
pub use microlp_backend::MicrolpBackend;
