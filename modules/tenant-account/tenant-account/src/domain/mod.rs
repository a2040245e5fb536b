pub mod aggregate;
pub mod error;
pub mod repo;
pub mod service;
pub mod tokens;
