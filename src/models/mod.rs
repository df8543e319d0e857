pub mod call;
pub mod session;

pub use call::{CallAction, CallDecision};
pub use session::{DialogueState, Intent, SessionRecord};
