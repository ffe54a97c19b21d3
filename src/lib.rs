pub mod client;
pub mod compute;
pub mod error;
pub mod image;

mod http;

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};
