pub mod app;
pub mod articles;
pub mod config;
pub mod db;
pub mod errors;
pub mod memory;
pub mod seed;
pub mod state;
pub mod users;
