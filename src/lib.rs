pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatters;
pub mod models;
pub mod routes;
pub mod service;
pub mod store;

pub use client::CityApiClient;
pub use config::Config;
pub use error::{AppError, UpstreamError};
pub use service::CityService;
pub use store::RecipeStore;
