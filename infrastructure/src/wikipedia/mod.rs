//! Wikipedia query API adapter

mod gateway;

pub use gateway::{GatewayBuildError, WikipediaGateway};
