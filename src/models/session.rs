use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Booking,
}

/// Which slot the dialogue is waiting on. Slots fill strictly in this
/// order; a rejection at confirmation returns to `AwaitingService`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    AwaitingIntent,
    AwaitingService,
    AwaitingDate,
    AwaitingName,
    AwaitingConfirmation,
}

impl DialogueState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogueState::AwaitingIntent => "awaiting_intent",
            DialogueState::AwaitingService => "awaiting_service",
            DialogueState::AwaitingDate => "awaiting_date",
            DialogueState::AwaitingName => "awaiting_name",
            DialogueState::AwaitingConfirmation => "awaiting_confirmation",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub intent: Option<Intent>,
    pub service: Option<String>,
    pub date: Option<String>,
    pub name: Option<String>,
    /// Informational label mirroring the state; the slots are authoritative.
    #[serde(rename = "step")]
    pub state: DialogueState,
}

impl SessionRecord {
    pub fn new() -> Self {
        Self {
            intent: None,
            service: None,
            date: None,
            name: None,
            state: DialogueState::AwaitingIntent,
        }
    }
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self::new()
    }
}
