#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tinylink::application::services::{DEFAULT_MAX_ATTEMPTS, DynCodeGenerator, UrlRegistry};
use tinylink::routes::router;
use tinylink::state::AppState;
use tinylink::utils::code_generator::CodeGenerator;

pub const BASE_URL: &str = "http://s.example.com";

/// Hands out a fixed list of codes in order, then repeats the last one.
pub struct ScriptedCodes {
    codes: Mutex<VecDeque<String>>,
    last: Mutex<String>,
}

impl ScriptedCodes {
    pub fn new(codes: &[&str]) -> Self {
        Self {
            codes: Mutex::new(codes.iter().map(|c| c.to_string()).collect()),
            last: Mutex::new(String::new()),
        }
    }
}

impl CodeGenerator for ScriptedCodes {
    fn generate(&self) -> String {
        let mut last = self.last.lock();
        if let Some(code) = self.codes.lock().pop_front() {
            *last = code;
        }
        last.clone()
    }
}

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(UrlRegistry::new()), BASE_URL)
}

/// State whose registry mints `codes` in order.
pub fn create_test_state_with_codes(codes: &[&str]) -> AppState {
    let generator: DynCodeGenerator = Box::new(ScriptedCodes::new(codes));
    let registry = UrlRegistry::with_generator(generator, DEFAULT_MAX_ATTEMPTS);
    AppState::new(Arc::new(registry), BASE_URL)
}

/// Full application router over `state`, serving the repository's `static/` dir.
pub fn create_test_server(state: AppState) -> TestServer {
    let app: Router = router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/static"));
    TestServer::new(app).unwrap()
}
