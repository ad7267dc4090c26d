pub mod client;
pub mod config;
pub mod enums;
pub mod errors;
pub mod service;
pub mod structs;
