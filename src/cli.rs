use std::path::PathBuf;

use clap::Parser;

use crate::constants::{
    API_KEY_ENV, DEFAULT_GEMINI_ENDPOINT, DEFAULT_LANGUAGE_HINT, DEFAULT_MODEL, ENDPOINT_ENV,
    MODEL_ENV,
};
use crate::error::RunError;
use crate::models::{Credential, RunConfig};

/// Turn a plain-language prompt file into source code using a Gemini model.
#[derive(Parser)]
#[command(name = "promptc", version, about)]
pub struct Cli {
    /// Input file to read the prompt from
    #[arg(short = 'i', long = "input", value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file to write the response to (stdout when omitted)
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Language hint for the model
    #[arg(short = 'l', long = "lang", value_name = "HINT", default_value = DEFAULT_LANGUAGE_HINT)]
    pub lang: String,

    /// API key for the model
    #[arg(short = 'k', long = "key", env = API_KEY_ENV, hide_env_values = true)]
    pub key: Option<String>,

    /// Model identifier
    #[arg(short = 'm', long = "model", env = MODEL_ENV, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the models collection
    #[arg(long = "endpoint", env = ENDPOINT_ENV, default_value = DEFAULT_GEMINI_ENDPOINT)]
    pub endpoint: String,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

/// Loads `.env` from the working directory. A missing file is not an error.
pub fn load_dotenv() -> Result<Option<PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(dotenvy::Error::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig, RunError> {
        let input = self
            .input
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or_else(|| {
                RunError::Configuration("Input file must be specified with -i flag".into())
            })?;

        Ok(RunConfig {
            input,
            output: self.output.filter(|path| !path.as_os_str().is_empty()),
            language_hint: self.lang,
            credential: Credential::new(self.key.unwrap_or_default()),
            model: self.model,
            endpoint: self.endpoint,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("promptc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn short_flags_populate_config() {
        let config = parse(&["-i", "prompt.txt", "-o", "out.rs", "-l", "rust", "-k", "abc"])
            .into_config()
            .unwrap();

        assert_eq!(config.input, PathBuf::from("prompt.txt"));
        assert_eq!(config.output, Some(PathBuf::from("out.rs")));
        assert_eq!(config.language_hint, "rust");
        assert_eq!(config.credential.expose(), "abc");
    }

    #[test]
    fn long_flags_are_accepted() {
        let config = parse(&[
            "--input",
            "p.txt",
            "--lang",
            "python",
            "--key",
            "xyz",
            "--model",
            "models/gemini-2.5-pro",
            "--endpoint",
            "http://localhost:9999/models",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.language_hint, "python");
        assert_eq!(config.credential.expose(), "xyz");
        assert_eq!(config.model, "models/gemini-2.5-pro");
        assert_eq!(config.endpoint, "http://localhost:9999/models");
        assert_eq!(config.output, None);
    }

    #[test]
    fn language_hint_defaults_to_go() {
        let cli = parse(&["-i", "p.txt", "-k", "abc"]);
        assert_eq!(cli.lang, DEFAULT_LANGUAGE_HINT);
        assert!(!cli.verbose);
    }

    #[test]
    fn missing_input_is_a_configuration_error() {
        let err = parse(&["-k", "abc"]).into_config().unwrap_err();
        assert!(matches!(err, RunError::Configuration(_)));
        assert!(err.to_string().contains("-i"));
    }

    #[test]
    fn empty_paths_are_treated_as_unset() {
        let mut cli = parse(&["-k", "abc"]);
        cli.input = Some(PathBuf::new());
        let err = cli.into_config().unwrap_err();
        assert!(matches!(err, RunError::Configuration(_)));

        let mut cli = parse(&["-i", "p.txt", "-k", "abc"]);
        cli.output = Some(PathBuf::new());
        assert_eq!(cli.into_config().unwrap().output, None);
    }
}
