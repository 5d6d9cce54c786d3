//! The settings bundle and its sections.
//!
//! Each section mirrors one block of the host framework's configuration:
//! database, cache, async worker, feature flags, session policy, uploads.

pub mod constants;
mod source;

mod cache;
mod database;
mod features;
mod session;
mod settings;
mod uploads;
mod worker;

pub use cache::CacheSettings;
pub use database::DatabaseSettings;
pub use features::{FeatureFlags, FLAG_NAMES};
pub use session::{SameSite, SessionSettings};
pub use settings::{recognized_vars, Settings, VarSpec};
pub use uploads::UploadSettings;
pub use worker::{TaskAnnotation, WorkerSettings};
