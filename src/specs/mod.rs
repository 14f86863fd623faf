// src/specs/mod.rs

pub mod scoresheet;
