//! Stores functionality that should be shared between different clients
//! NB: The assumption is made that the async runtime has already been started
//! before any functions from this library are called

#![warn(unused_crate_dependencies)]

#[cfg(test)] // Included to prevent unused crate warning
mod warning_suppress {
    use tokio as _;
    use wiremock as _;
}

mod client;
pub mod config;
pub mod session;
pub mod storage;

pub use client::{Client, UiCallBack, NO_ARGS};
pub use config::{ClientConfig, Configuration};
pub use session::SessionStore;
