pub mod app;
pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod methods;
pub mod policy;
pub mod shutdown;
pub mod state;
pub mod validation;
