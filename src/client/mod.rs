//! Explanation clients
//!
//! The engine hands a composed prompt to an `ExplanationClient` and gets text
//! back. Model choice, credentials and transport belong to the client.

pub mod openai;
pub mod redact;

use std::cell::RefCell;

use crate::error::RemoteError;

pub use openai::OpenAiClient;

/// A text-generation collaborator
pub trait ExplanationClient {
    /// Send a prompt and return the generated text
    fn generate(&self, prompt: &str) -> Result<String, RemoteError>;
}

/// Test double returning a fixed response or failure.
///
/// Records every prompt it receives.
pub struct MockExplanationClient {
    response: Result<String, String>,
    prompts: RefCell<Vec<String>>,
}

impl MockExplanationClient {
    /// A client that always answers with `response`
    pub fn new(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// A client that always fails with a connection error to `endpoint`
    pub fn failing(endpoint: &str) -> Self {
        Self {
            response: Err(endpoint.to_string()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Prompts received so far, oldest first
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ExplanationClient for MockExplanationClient {
    fn generate(&self, prompt: &str) -> Result<String, RemoteError> {
        self.prompts.borrow_mut().push(prompt.to_string());
        match &self.response {
            Ok(text) => Ok(text.clone()),
            Err(endpoint) => Err(RemoteError::Connection(endpoint.clone())),
        }
    }
}
