pub fn normalize_model_id(model: &str) -> String {
    let trimmed = model.trim();
    trimmed
        .strip_prefix("models/")
        .unwrap_or(trimmed)
        .to_string()
}

pub fn generate_content_url(endpoint: &str, model: &str) -> String {
    format!("{}/{}:generateContent", endpoint.trim_end_matches('/'), model)
}
