//! # feedrelay Config
//!
//! Configuration management for feedrelay: a TOML schema with defaults,
//! `${VAR}` substitution, the environment-variable overlay used by container
//! deployments, and validation.

mod env;
mod error;
mod loader;
mod schema;
mod validator;

pub use env::{ENV_ANTHROPIC_API_KEY, ENV_DISCORD_WEBHOOK_URL, EnvOverlay};
pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
