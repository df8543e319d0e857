use crate::models::{CallAction, CallDecision};

/// Parse the model's voice-turn control decision. Models wrap JSON in
/// markdown fences or chatter often enough that we try progressively
/// looser extractions before degrading to raw-text mode: the reply is the
/// response as-is and the call continues.
pub fn parse_decision(response: &str) -> CallDecision {
    if let Ok(decision) = serde_json::from_str::<CallDecision>(response) {
        return decision;
    }

    let cleaned = response
        .trim()
        .strip_prefix("```json")
        .or_else(|| response.trim().strip_prefix("```"))
        .unwrap_or(response.trim());
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    if let Ok(decision) = serde_json::from_str::<CallDecision>(cleaned) {
        return decision;
    }

    if let Some(start) = cleaned.find('{') {
        if let Some(end) = cleaned.rfind('}') {
            let json_str = &cleaned[start..=end];
            if let Ok(decision) = serde_json::from_str::<CallDecision>(json_str) {
                return decision;
            }
        }
    }

    tracing::warn!("failed to parse LLM response as call decision, using raw text");
    CallDecision {
        action: CallAction::Continue,
        assistant_reply: response.to_string(),
    }
}
