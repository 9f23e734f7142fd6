//! Command line data models

pub mod arg;
