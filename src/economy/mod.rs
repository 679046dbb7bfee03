//! Currencies: the wallet and per-kill drops.

pub mod drops;
pub mod wallet;

pub use drops::*;
pub use wallet::*;
