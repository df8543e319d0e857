use std::sync::Arc;

use crate::config::AgentMode;
use crate::models::SessionRecord;
use crate::services::ai::Message;
use crate::services::{dialogue, humanizer, rules};
use crate::state::AppState;

const SYSTEM_PROMPT: &str = "You are a warm, professional AI receptionist. Help the caller with bookings and questions about the business. Keep replies short and conversational.";

pub struct ChatOutcome {
    pub reply: String,
    pub memory: Option<SessionRecord>,
}

pub async fn process_message(
    state: &Arc<AppState>,
    session_id: &str,
    message: &str,
) -> anyhow::Result<ChatOutcome> {
    match state.config.agent_mode {
        AgentMode::Rules => Ok(ChatOutcome {
            reply: rules::canned_reply(message).to_string(),
            memory: None,
        }),

        AgentMode::Scripted => {
            let session = state.sessions.get(session_id);
            let mut record = session.lock().unwrap();

            let outcome = dialogue::advance(&mut record, message);

            tracing::info!(
                session = session_id,
                step = record.state.as_str(),
                "dialogue advanced"
            );

            // Cosmetic only; applied after the state machine has decided.
            let reply = humanizer::humanize(&mut rand::thread_rng(), &outcome.reply);
            let memory = outcome.memory.then(|| record.clone());

            Ok(ChatOutcome { reply, memory })
        }

        AgentMode::Llm => {
            let transcript = state.transcripts.get(session_id);
            let mut messages = transcript.lock().await;

            messages.push(Message {
                role: "user".to_string(),
                content: message.to_string(),
            });

            let system = format!(
                "{SYSTEM_PROMPT}\n\nYou answer for {}.",
                state.config.business_name
            );
            let reply = state.llm.chat(&system, &messages).await?;

            messages.push(Message {
                role: "assistant".to_string(),
                content: reply.clone(),
            });

            Ok(ChatOutcome {
                reply,
                memory: None,
            })
        }
    }
}
