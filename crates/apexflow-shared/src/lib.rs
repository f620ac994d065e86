//! Code shared between ApexFlow clients and the description of the backend
//! contract they talk to

#![warn(unused_crate_dependencies)]

#[cfg(test)] // Included to prevent unused crate warning
mod warning_suppress {
    use rstest as _;
    use static_assertions as _;
}

pub mod const_config;
pub mod envelope;
pub mod errors;
pub mod id;
mod macros;
pub mod req_args;
pub mod session;
pub mod token;
pub mod uac;

#[cfg(not(target_arch = "wasm32"))]
pub mod telemetry;
