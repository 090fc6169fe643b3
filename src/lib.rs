mod cli;
mod commands;
mod constants;
mod error;
mod fs_utils;
mod logging;
mod models;

pub use cli::{load_dotenv, Cli};
pub use commands::generate::{run_prompt, GeminiGenerator, TextGenerator};
pub use commands::prompts::{build_prompt_request, compose_prompt};
pub use constants::{
    API_KEY_ENV, DEFAULT_GEMINI_ENDPOINT, DEFAULT_LANGUAGE_HINT, DEFAULT_MODEL, ENDPOINT_ENV,
    MODEL_ENV, SYSTEM_INSTRUCTION,
};
pub use error::RunError;
pub use logging::init_tracing;
pub use models::{Credential, Delivery, PromptRequest, RunConfig};
