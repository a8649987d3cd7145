pub mod annuity;
pub mod error;
pub mod schedule;
pub mod simulator;
pub mod types;

pub use error::PrestamoError;
pub use simulator::{simulate, validate};
pub use types::*;

/// Standard result type for all prestamo operations
pub type PrestamoResult<T> = Result<T, PrestamoError>;
