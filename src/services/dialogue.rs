use crate::models::{DialogueState, Intent, SessionRecord};

/// Result of one dialogue turn. `memory` marks the transitions where the
/// full session record is echoed back to the caller.
pub struct Outcome {
    pub reply: String,
    pub memory: bool,
}

impl Outcome {
    fn reply(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            memory: false,
        }
    }

    fn with_memory(text: impl Into<String>) -> Self {
        Self {
            reply: text.into(),
            memory: true,
        }
    }
}

/// Advance the session by one turn. Keyword matching is case-insensitive
/// substring containment, so "nope" matches "no"; that looseness is part of
/// the contract. Every input produces a reply.
pub fn advance(session: &mut SessionRecord, input: &str) -> Outcome {
    let msg = input.to_lowercase();

    match session.state {
        DialogueState::AwaitingIntent => {
            if msg.contains("appointment") || msg.contains("book") {
                session.intent = Some(Intent::Booking);
                session.state = DialogueState::AwaitingService;
                Outcome::reply("Sure, I can help with that. What service are you looking for?")
            } else {
                Outcome::reply("Could you please tell me what you're calling about today?")
            }
        }

        DialogueState::AwaitingService => {
            session.service = Some(input.to_string());
            session.state = DialogueState::AwaitingDate;
            Outcome::reply("Got it. What date would you prefer?")
        }

        DialogueState::AwaitingDate => {
            session.date = Some(input.to_string());
            session.state = DialogueState::AwaitingName;
            Outcome::reply("Thanks. May I have your name, please?")
        }

        DialogueState::AwaitingName => {
            session.name = Some(input.to_string());
            session.state = DialogueState::AwaitingConfirmation;
            let name = session.name.as_deref().unwrap_or_default();
            let service = session.service.as_deref().unwrap_or_default();
            let date = session.date.as_deref().unwrap_or_default();
            Outcome::with_memory(format!(
                "Alright {name}, just to confirm — you'd like to book {service} on {date}, correct?"
            ))
        }

        // "yes"/"correct" win over "no" when an input contains both.
        DialogueState::AwaitingConfirmation => {
            if msg.contains("yes") || msg.contains("correct") {
                Outcome::with_memory(
                    "Perfect. I've booked that for you. You'll receive a confirmation shortly. Anything else I can help with?",
                )
            } else if msg.contains("no") {
                session.service = None;
                session.date = None;
                session.name = None;
                session.state = DialogueState::AwaitingService;
                Outcome::reply("No problem. Let's start again. What service do you need?")
            } else {
                Outcome::reply("Sorry, could you repeat that for me?")
            }
        }
    }
}
