pub mod client;
pub mod config;
pub mod enums;
pub mod errors;
pub mod signature;
pub mod structs;
