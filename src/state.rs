use crate::config::AppConfig;
use crate::services::ai::LlmProvider;
use crate::store::{SessionStore, SummaryLog, TranscriptStore};

pub struct AppState {
    pub config: AppConfig,
    pub llm: Box<dyn LlmProvider>,
    pub sessions: SessionStore,
    pub transcripts: TranscriptStore,
    pub summaries: SummaryLog,
}
