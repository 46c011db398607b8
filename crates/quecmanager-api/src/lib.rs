// quecmanager-api: Async Rust client for the QuecManager device CGI endpoints

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod settings;
mod usage;

pub use client::QuecClient;
pub use error::Error;
pub use models::{
    CgiResponse, CgiStatus, DataUsage, DataUsageWarning, DismissRequest, MeasurementUnits,
};
pub use transport::{TlsMode, TransportConfig};
