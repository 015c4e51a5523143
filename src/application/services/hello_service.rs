//! Default greeting component.

use crate::domain::{Greeter, Message};
use crate::error::AppError;

/// Greets by name. Stateless.
#[derive(Debug, Clone, Default)]
pub struct HelloService;

impl HelloService {
    /// Creates a new greeting service.
    pub fn new() -> Self {
        Self
    }

    fn greeting_for(name: &str) -> String {
        format!("Hello {name}!")
    }
}

impl Greeter for HelloService {
    fn greetings(&self, name: &str) -> Result<String, AppError> {
        Ok(Self::greeting_for(name))
    }

    fn say_hello_object(&self, name: &str) -> Result<Message, AppError> {
        Ok(Message::new(Self::greeting_for(name)))
    }
}
