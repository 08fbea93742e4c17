pub mod config;
pub mod curate;
pub mod error;
pub mod export;
pub mod fetch;
