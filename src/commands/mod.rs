pub mod config;
pub mod list;
pub mod mood;
pub mod show;
pub mod write;
