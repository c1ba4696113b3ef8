pub mod completion;

use async_trait::async_trait;

pub use completion::ChatCompletionClient;

/// Instruction sent ahead of every prompt.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI that generates only functional HTML and JavaScript code representing a survey form. The generated form should include appropriate input fields, labels, a submit button, and all necessary scripts to operate correctly when inserted into <div id='output'></div>.";

#[derive(Debug)]
pub struct GenerationError {
    pub message: String,
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for GenerationError {
    fn from(s: String) -> Self {
        GenerationError { message: s }
    }
}

impl From<&str> for GenerationError {
    fn from(s: &str) -> Self {
        GenerationError {
            message: s.to_string(),
        }
    }
}

/// Turns a free-text prompt into survey markup.
#[async_trait]
pub trait Generator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
