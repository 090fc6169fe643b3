pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_LANGUAGE_HINT: &str = "go";
pub const API_KEY_ENV: &str = "GENAI_API_KEY";
pub const MODEL_ENV: &str = "PROMPTC_MODEL";
pub const ENDPOINT_ENV: &str = "PROMPTC_ENDPOINT";
pub const SYSTEM_INSTRUCTION: &str = "You are a model for a 'compiler' of a language. Respond ONLY with plaintext code that corresponds to the prompt provided. Do NOT generate any markdown codeblocks (e.g., ```language\ncode\n```) or any additional comments. You will be given a language hint and a prompt. The language hint is a single word that indicates the language. The prompt is a description of the code to be generated.";
