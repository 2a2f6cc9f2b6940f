//! Client for the sampleinfo service: resolves which endpoint answers a query, fetches it
//! and exports the returned `data` collection as csv or json.

pub mod config;
pub mod error;
pub mod model;
pub mod output;
mod progress;
pub mod resolver;
pub mod service;

pub use config::Config;
pub use error::Error;
pub use model::{DataType, OutputFormat, QueryParams};
pub use output::OutputWriter;
pub use resolver::EndpointResolver;
pub use service::{SampleInfoLoader, SampleInfoService};
