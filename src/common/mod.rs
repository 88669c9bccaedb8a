pub mod config;
pub mod referral;

pub use config::*;
pub use referral::*;
