//! Shared value types for Splitpack: device-configuration values and the
//! targeting records that describe which devices a delivery unit is for.

pub mod abi;
pub mod config;
pub mod targeting;

// Re-exports
pub use abi::*;
pub use config::*;
pub use targeting::*;
