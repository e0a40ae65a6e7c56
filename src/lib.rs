pub mod abstract_trait;
pub mod cli;
pub mod config;
pub mod di;
pub mod domain;
pub mod errors;
pub mod model;
pub mod repository;
pub mod service;
pub mod session;
pub mod state;
pub mod utils;

#[cfg(test)]
mod mock_repository;
