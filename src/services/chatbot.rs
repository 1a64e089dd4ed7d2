// src/services/chatbot.rs
use crate::services::provider::ResponseProvider;

#[derive(Debug, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    Goodbye,
    Thanks,
    Hours,
    Unknown,
}

pub fn detect_intent(msg: &str) -> Intent {
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("hello") || msg_lower.contains("hi ") || msg_lower == "hi" {
        Intent::Greeting
    } else if msg_lower.contains("bye") || msg_lower.contains("see you") {
        Intent::Goodbye
    } else if msg_lower.contains("thank") {
        Intent::Thanks
    } else if msg_lower.contains("hour") || msg_lower.contains("open") {
        Intent::Hours
    } else {
        Intent::Unknown
    }
}

/// Default in-process responder. Keyword intents with canned replies; anything
/// it cannot classify gets the fallback line.
pub struct RuleBasedProvider;

impl ResponseProvider for RuleBasedProvider {
    fn get_response(&self, message: &str) -> anyhow::Result<String> {
        let reply = match detect_intent(message) {
            Intent::Greeting => "Hi there, how can I help?",
            Intent::Goodbye => "See you later, thanks for visiting!",
            Intent::Thanks => "Happy to help!",
            Intent::Hours => "We are open every day, 9am to 9pm.",
            Intent::Unknown => "I do not understand, could you rephrase that?",
        };
        Ok(reply.to_string())
    }
}
