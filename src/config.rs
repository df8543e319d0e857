use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentMode {
    /// Slot-filling dialogue state machine.
    Scripted,
    /// Stateless keyword matching with canned replies.
    Rules,
    /// Forward the conversation history to the hosted model.
    Llm,
}

impl AgentMode {
    pub fn parse(s: &str) -> Self {
        match s {
            "rules" => AgentMode::Rules,
            "llm" => AgentMode::Llm,
            _ => AgentMode::Scripted,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub business_name: String,
    pub agent_mode: AgentMode,
    pub llm_provider: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub ollama_url: String,
    pub twilio_auth_token: String,
    pub summary_log: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            business_name: env::var("BUSINESS_NAME")
                .unwrap_or_else(|_| "our office".to_string()),
            agent_mode: AgentMode::parse(env::var("AGENT_MODE").unwrap_or_default().as_str()),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "ollama".to_string()),
            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.3-70b-versatile".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            summary_log: env::var("SUMMARY_LOG")
                .unwrap_or_else(|_| "call_summaries.log".to_string()),
        }
    }
}
