//! Contract of the greeting component.

use crate::domain::Message;
use crate::error::AppError;

/// Greeting component invoked by the `say` routes.
///
/// Calls are synchronous and must not block on I/O.
///
/// # Implementations
///
/// - [`crate::application::services::HelloService`] - Default implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait Greeter: Send + Sync {
    /// Builds a greeting for `name`.
    ///
    /// # Errors
    ///
    /// Any error is normalized into the 503 failure response.
    fn greetings(&self, name: &str) -> Result<String, AppError>;

    /// Builds a greeting for `name` wrapped in a [`Message`].
    ///
    /// # Errors
    ///
    /// Any error is normalized into the 503 failure response.
    fn say_hello_object(&self, name: &str) -> Result<Message, AppError>;
}
