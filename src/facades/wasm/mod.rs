pub mod config;
pub mod listeners;
