//! Storage-proxy URL builders

mod waterbutler;

pub use waterbutler::WaterButlerApi;
