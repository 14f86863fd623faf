// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod core;
pub mod specs;

pub mod csv;
pub mod error;
pub mod file;
pub mod frame;
pub mod model;
pub mod params;
pub mod report;
pub mod runner;
pub mod stats;

pub use error::Error;
