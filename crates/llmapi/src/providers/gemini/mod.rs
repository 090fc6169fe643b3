mod api;
pub mod models;
pub use api::{
    build_generate_body, error_message_from_body, response_to_text_data, send_generate_request,
};

use anyhow::Result;

use crate::types::{GenerateRequest, LLMClient};

/// Runs a single `generateContent` call and returns the text of the first
/// candidate. No retries.
pub async fn generate_text(client: &LLMClient, request: &GenerateRequest) -> Result<String> {
    let response = send_generate_request(client, request).await?;
    if let Some(usage) = &response.usage_metadata {
        tracing::debug!(
            prompt_tokens = usage.prompt_token_count,
            candidate_tokens = usage.candidates_token_count,
            total_tokens = usage.total_token_count,
            "token usage"
        );
    }
    response_to_text_data(&response)
}
