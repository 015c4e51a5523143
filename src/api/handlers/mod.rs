//! HTTP request handlers for the sample endpoints.
//!
//! Each handler module corresponds to one group of routes.

pub mod forms;
pub mod say;

pub use forms::forms_handler;
pub use say::{greetings_handler, hello_name_handler, say_hello_handler, say_hello_object_handler};
