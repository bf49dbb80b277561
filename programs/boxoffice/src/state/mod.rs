//! State account definitions

pub mod event;
pub mod market_config;
pub mod reentrancy;
pub mod ticket;

pub use event::*;
pub use market_config::*;
pub use reentrancy::*;
pub use ticket::*;
