//! HTTP inbound adapter exposing REST endpoints.

pub mod applications;
pub mod error;
pub mod health;
pub mod packages;
pub mod reviews;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;
