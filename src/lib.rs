pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod reader;
pub mod resolver;
pub mod server;
pub mod utils;

#[cfg(test)]
mod test_support;

pub use config::{Cli, Config, Source};
pub use error::{DatasetError, ResolveError};
pub use resolver::{Resolution, Selection, resolve};
pub use server::SoilServer;
