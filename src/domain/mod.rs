//! Domain layer: the payload types and the greeting component contract.
//!
//! - [`message`] - Single-field message payload, marshaled to JSON or XML
//! - [`greeter`] - Trait for the greeting component invoked by the `say` routes

pub mod greeter;
pub mod message;

pub use greeter::Greeter;
pub use message::Message;
