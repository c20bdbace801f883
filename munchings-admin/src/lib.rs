pub mod config;
pub mod format;
pub mod notice;
pub mod sample;
pub mod session;
pub mod stats;

pub use config::{Config, ConfigError};
pub use notice::{Notice, NoticeLevel};
pub use session::{AdminError, AdminSession};
pub use stats::DashboardStats;
