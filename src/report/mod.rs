//! Report generation

pub mod console;
