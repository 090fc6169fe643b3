use crate::constants::SYSTEM_INSTRUCTION;
use crate::models::PromptRequest;

/// The hint and the file contents are embedded as-is, with no escaping.
pub fn compose_prompt(language_hint: &str, contents: &str) -> String {
    format!("Language hint: {language_hint}\nPrompt: {contents}")
}

pub fn build_prompt_request(language_hint: &str, contents: &str) -> PromptRequest {
    PromptRequest {
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt: compose_prompt(language_hint, contents),
    }
}
