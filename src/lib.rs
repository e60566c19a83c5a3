#![allow(clippy::uninlined_format_args)]

pub mod chunks;
pub mod commands;
pub mod config;
pub mod error;
pub mod services;
