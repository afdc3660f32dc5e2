pub mod open_er_api;

pub use crate::rate_provider::{FetchError, RateProvider};
