use std::sync::Arc;

use crate::models::CallAction;
use crate::services::ai::{decision, Message};
use crate::state::AppState;

const SYSTEM_PROMPT: &str = r#"You are a phone receptionist. After each caller turn, decide whether the call should continue or end.

Return ONLY valid JSON (no markdown, no explanation) with this exact structure:
{
  "action": "continue|end",
  "assistant_reply": "What you say to the caller next"
}

Action rules:
- "continue": The caller still needs something; keep gathering details
- "end": The caller said goodbye, or their request is fully handled

For the assistant_reply:
- Be friendly and professional
- Keep it short and speakable, one or two sentences
- When ending, close the call politely
"#;

const SUMMARY_PROMPT: &str = r#"The call has ended. Write a short structured summary of the conversation for the business owner.

Use this exact line format:
Caller request: ...
Details collected: ...
Outcome: ...
Follow-up needed: ...
"#;

pub struct TurnResult {
    pub reply: String,
    pub end_call: bool,
}

/// Record the spoken greeting as the first assistant turn so the model sees
/// the full exchange on later turns.
pub async fn begin_call(state: &Arc<AppState>, call_sid: &str, greeting: &str) {
    let transcript = state.transcripts.get(call_sid);
    transcript.lock().await.push(Message {
        role: "assistant".to_string(),
        content: greeting.to_string(),
    });
}

/// One speech turn: append the caller's words, ask the model for a control
/// decision, and on "end" produce the post-call summary. The transcript
/// stays locked for the whole turn, so turns for one call are serialized.
pub async fn process_turn(
    state: &Arc<AppState>,
    call_sid: &str,
    caller: &str,
    speech: &str,
) -> anyhow::Result<TurnResult> {
    let transcript = state.transcripts.get(call_sid);
    let mut messages = transcript.lock().await;

    messages.push(Message {
        role: "user".to_string(),
        content: speech.to_string(),
    });

    let system = format!(
        "{SYSTEM_PROMPT}\nBusiness context:\nYou answer calls for {}.",
        state.config.business_name
    );
    let response = state.llm.chat(&system, &messages).await?;
    let decision = decision::parse_decision(&response);

    messages.push(Message {
        role: "assistant".to_string(),
        content: decision.assistant_reply.clone(),
    });

    tracing::info!(
        call = call_sid,
        action = ?decision.action,
        "voice turn processed"
    );

    let end_call = decision.action == CallAction::End;
    if end_call {
        summarize_call(state, call_sid, caller, &messages).await;
    }

    Ok(TurnResult {
        reply: decision.assistant_reply,
        end_call,
    })
}

/// Summary failures are logged and swallowed; the call still ends cleanly.
async fn summarize_call(state: &Arc<AppState>, call_sid: &str, caller: &str, messages: &[Message]) {
    match state.llm.chat(SUMMARY_PROMPT, messages).await {
        Ok(summary) => {
            if let Err(e) = state.summaries.append(call_sid, caller, &summary) {
                tracing::error!(error = %e, call = call_sid, "failed to write call summary");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, call = call_sid, "failed to summarize call");
        }
    }
}
