//! Application layer: implementations of the domain components.

pub mod services;
