pub mod config;
pub mod entrypoint;
pub mod error;
pub mod handler;
pub mod model;
pub mod service;
