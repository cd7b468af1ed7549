#![warn(unused_crate_dependencies)]

mod app;
pub mod cli;
pub mod configuration;
mod pages;
mod sample_data;
pub mod tracing;
mod ui_helpers;

pub use app::{log_rejected_switch, OmniApp};
pub use pages::{DisplayablePage, UiPage};
pub use sample_data::SampleData;

