pub mod config;
pub mod lookup;
pub mod serve;
