use std::io::Write;

use async_trait::async_trait;
use llmapi::{GenerateRequest, LLMClient};
use tracing::{debug, info};

use crate::commands::prompts::build_prompt_request;
use crate::error::RunError;
use crate::fs_utils::{read_prompt_file, write_output};
use crate::models::{Delivery, PromptRequest, RunConfig};

/// A backend that turns one prompt request into generated text.
#[async_trait]
pub trait TextGenerator {
    async fn generate(&self, request: &PromptRequest) -> anyhow::Result<String>;
}

pub struct GeminiGenerator {
    client: LLMClient,
}

impl GeminiGenerator {
    pub fn connect(config: &RunConfig) -> Result<Self, RunError> {
        let client = LLMClient::new(
            config.credential.expose(),
            config.endpoint.as_str(),
            config.model.as_str(),
        )
        .map_err(|err| RunError::AuthConfiguration(format!("{err:#}")))?;

        debug!(?client, "generation client ready");
        Ok(Self { client })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, request: &PromptRequest) -> anyhow::Result<String> {
        let request = GenerateRequest::text(
            request.system_instruction.as_str(),
            request.prompt.as_str(),
        );
        llmapi::generate_text(&self.client, &request).await
    }
}

/// Reads the prompt file, calls the generator once and delivers the text.
///
/// `connect` is only invoked once the input has been read successfully, so
/// configuration and file errors never touch the service.
pub async fn run_prompt<G, C, W>(
    config: &RunConfig,
    connect: C,
    stdout: &mut W,
) -> Result<Delivery, RunError>
where
    G: TextGenerator,
    C: FnOnce(&RunConfig) -> Result<G, RunError>,
    W: Write,
{
    if config.input.as_os_str().is_empty() {
        return Err(RunError::Configuration(
            "Input file must be specified with -i flag".into(),
        ));
    }

    let (input_path, contents) = read_prompt_file(&config.input).await?;
    debug!(
        path = %input_path.display(),
        bytes = contents.len(),
        language_hint = %config.language_hint,
        "read prompt file"
    );

    let request = build_prompt_request(&config.language_hint, &contents);
    let generator = connect(config)?;

    let text = generator
        .generate(&request)
        .await
        .map_err(|err| RunError::Service {
            model: config.model.clone(),
            message: format!("{err:#}"),
        })?;

    match &config.output {
        Some(path) => {
            let written = write_output(path, &text).await?;
            info!("Response written to '{}'", written.display());
            Ok(Delivery::File(written))
        }
        None => {
            writeln!(stdout, "{text}")
                .and_then(|_| stdout.flush())
                .map_err(|err| RunError::io("Error writing response to", "<stdout>", err))?;
            info!("Response printed to stdout");
            Ok(Delivery::Stdout)
        }
    }
}
