//! Client for the Quiet Wealth listing backend: typed API access, form
//! mapping and the state behind each screen of the site.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod forms;
pub mod logging;
pub mod models;
pub mod notify;
pub mod views;

pub use app::App;
pub use config::Config;
pub use error::ApiError;
