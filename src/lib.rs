#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod dispatch;
pub mod message;
pub mod training;
pub mod utils;
