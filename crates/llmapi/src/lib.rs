pub mod providers;
pub mod types;
pub mod utils;

pub use providers::gemini::generate_text;
pub use types::{GenerateRequest, LLMClient};
