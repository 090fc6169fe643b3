pub mod gemini;

pub use gemini::{generate_text, send_generate_request};
