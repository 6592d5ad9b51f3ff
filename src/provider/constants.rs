pub mod groq {
    pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
    pub const API_BASE: &str = "https://api.groq.com/openai/v1";
    pub const CHAT_COMPLETIONS_ENDPOINT: &str = "/chat/completions";
    pub const API_KEY_ENV_VAR: &str = "GROQ_API_KEY";
    pub const BASE_URL_ENV_VAR: &str = "GROQ_BASE_URL";
}
