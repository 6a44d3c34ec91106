//! Unit tests for configuration handling.

mod config_parsing;
mod config_validation;
