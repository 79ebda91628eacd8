pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod export;
pub mod ranker;
pub mod scenario;
