//! Library exports for linescribe.
//!
//! Exposes the point data model, the line editing state machine, event script
//! replay and the configuration types so that hosts and the schema tool share
//! one implementation with the main binary.

pub mod config;
pub mod draw;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
