//! NutriFlow Client - the backend a tracking front-end talks to
//!
//! - `FoodCatalog`: text search over foods, the one call the nutrition
//!   screen depends on
//! - `NutriflowClient`: JSON-over-HTTP client for the whole backend API
//!   (food search, meals, user profile, workouts)
//! - `InMemoryCatalog`: fixed-list catalog for tests and offline runs
//!
//! Requests are made once. Failures are logged and returned to the caller;
//! nothing here retries.

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]
#![warn(rust_2018_idioms)]

mod catalog;
mod client;
mod config;
mod error;

pub use catalog::{FoodCatalog, InMemoryCatalog};
pub use client::NutriflowClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
