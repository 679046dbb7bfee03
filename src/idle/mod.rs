//! Idle rewards: offline/online accrual math and session checkpoints.

pub mod accrual;
pub mod session;

pub use accrual::*;
pub use session::*;
