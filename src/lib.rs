pub mod activity;
pub mod client;
pub mod coder;
pub mod config;
pub mod error;
pub mod report;
pub mod team;

pub use crate::activity::{classify, classify_snapshot, Activity};
pub use crate::client::{ApiKey, Client};
pub use crate::coder::Coder;
pub use crate::config::Config;
pub use crate::error::{Error, Result};
pub use crate::team::{parse_snapshot, TeamId, TeamSnapshot};
