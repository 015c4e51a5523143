#![allow(dead_code)]

use axum_test::TestServer;
use mockall::mock;
use rest_samples::api::binding::BindingMode;
use rest_samples::application::services::HelloService;
use rest_samples::domain::{Greeter, Message};
use rest_samples::error::AppError;
use rest_samples::routes::app_router;
use rest_samples::state::AppState;
use std::sync::Arc;

pub const CONTEXT_PATH: &str = "/camel";

mock! {
    pub Greeter {}

    impl Greeter for Greeter {
        fn greetings(&self, name: &str) -> Result<String, AppError>;
        fn say_hello_object(&self, name: &str) -> Result<Message, AppError>;
    }
}

/// Greeter whose every call panics with `message`.
pub struct PanickingGreeter {
    pub message: &'static str,
}

impl Greeter for PanickingGreeter {
    fn greetings(&self, _name: &str) -> Result<String, AppError> {
        panic!("{}", self.message)
    }

    fn say_hello_object(&self, _name: &str) -> Result<Message, AppError> {
        panic!("{}", self.message)
    }
}

pub fn create_test_state(greeter: Arc<dyn Greeter>, binding_mode: BindingMode) -> AppState {
    AppState::new(greeter, binding_mode)
}

pub fn create_server_with(greeter: Arc<dyn Greeter>, binding_mode: BindingMode) -> TestServer {
    let state = create_test_state(greeter, binding_mode);
    let app = app_router(state, CONTEXT_PATH);

    TestServer::new(app).unwrap()
}

pub fn create_server(binding_mode: BindingMode) -> TestServer {
    create_server_with(Arc::new(HelloService::new()), binding_mode)
}

/// Greeter that fails every call with `message`.
pub fn failing_greeter(message: &'static str) -> MockGreeter {
    let mut greeter = MockGreeter::new();
    greeter
        .expect_greetings()
        .returning(move |_| Err(AppError::handler(message)));
    greeter
        .expect_say_hello_object()
        .returning(move |_| Err(AppError::handler(message)));
    greeter
}
