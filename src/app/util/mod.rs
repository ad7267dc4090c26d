pub mod reqwest;
pub mod time;
