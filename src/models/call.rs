use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CallAction {
    Continue,
    End,
}

/// Control decision the hosted model returns for each voice turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallDecision {
    pub action: CallAction,
    pub assistant_reply: String,
}
