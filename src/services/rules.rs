/// Stateless keyword-matched replies, the simplest of the agent modes. No
/// session is consulted or mutated; first matching rule wins.
pub fn canned_reply(message: &str) -> &'static str {
    let msg = message.to_lowercase();

    if msg.contains("book") || msg.contains("appointment") {
        "Sure! I can help you book an appointment. May I have your full name please?"
    } else if msg.contains("name") {
        "Thank you. What service are you looking for today?"
    } else if msg.contains("hair") || msg.contains("spa") || msg.contains("consult") {
        "Got it. What date and time would you prefer?"
    } else if msg.contains("today") || msg.contains("tomorrow") {
        "Perfect. I have noted your request. Our team will contact you shortly to confirm."
    } else if msg.contains("price") || msg.contains("cost") {
        "Prices vary based on service. May I know which service you are interested in?"
    } else {
        "Sure, I understand. Let me note this and have our team follow up with you."
    }
}
