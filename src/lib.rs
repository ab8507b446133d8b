pub mod analysis;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod output;
pub mod parser;
pub mod scoring;
pub mod server;

pub use error::AnalysisError;
pub use handler::handle;
