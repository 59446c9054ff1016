//! Admin back-office client for the car marketplace.
//!
//! The crate talks to the marketplace GraphQL backend through a single shared
//! [`transport::GraphQlClient`], and keeps admin list pages in sync with it
//! through [`controller::ListController`].

pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod operations;
pub mod render;
pub mod state;
pub mod transport;

pub use config::Config;
pub use error::ClientError;
