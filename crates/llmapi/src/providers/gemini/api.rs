use anyhow::{Context, Result, anyhow};
use reqwest::StatusCode;
use serde_json::{Value, json};
use tracing::debug;

use crate::types::{GenerateRequest, LLMClient};
use crate::utils::generate_content_url;

use super::models::{GeminiErrorResponse, GeminiResponse};

pub fn build_generate_body(request: &GenerateRequest) -> Value {
    let mut body = json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": request.prompt }]
        }]
    });

    if let Some(system) = request.system_instruction.as_deref() {
        body["systemInstruction"] = json!({
            "parts": [{ "text": system }]
        });
    }

    body
}

pub async fn send_generate_request(
    api_client: &LLMClient,
    request: &GenerateRequest,
) -> Result<GeminiResponse> {
    let url = generate_content_url(api_client.endpoint(), api_client.default_model());
    let body = build_generate_body(request);

    debug!(url = %url, model = api_client.default_model(), "sending generateContent request");

    let response = api_client
        .http
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await
        .context("HTTP request failed")?;

    let status = response.status();
    let response_text = response
        .text()
        .await
        .context("Reading response body failed")?;

    debug!(status = %status, bytes = response_text.len(), "received generateContent response");

    if !status.is_success() {
        return Err(anyhow!(
            "Gemini API error: {}",
            error_message_from_body(status, &response_text)
        ));
    }

    let response: GeminiResponse = serde_json::from_str(&response_text).with_context(|| {
        format!(
            "Failed to decode Gemini response JSON. Raw response: {}",
            response_text
        )
    })?;

    Ok(response)
}

pub fn error_message_from_body(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<GeminiErrorResponse>(body)
        .ok()
        .and_then(|parsed| parsed.error.message)
        .map(|message| format!("{} ({})", message, status))
        .unwrap_or_else(|| format!("HTTP {}: {}", status, body))
}

pub fn response_to_text_data(response: &GeminiResponse) -> Result<String> {
    //get only 1 text response
    if let Some(candidate) = response.candidates.first() {
        let mut full_text = String::new();
        if let Some(content) = &candidate.content {
            for part in &content.parts {
                if part.thought.unwrap_or(false) {
                    continue;
                }
                if let Some(text) = &part.text {
                    full_text.push_str(text);
                }
            }
        }
        Ok(full_text)
    } else if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|feedback| feedback.block_reason.as_deref())
    {
        Err(anyhow!("Prompt was blocked: {}", reason))
    } else {
        Err(anyhow!("No candidates found"))
    }
}
