//! Code shared between the session core and the client

#![warn(unused_crate_dependencies)]

pub mod const_config;
pub mod errors;
pub mod id;
mod macros;
pub mod req_args;
pub mod status;
pub mod telemetry;
pub mod uac;
