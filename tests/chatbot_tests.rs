use chatbox_server::services::chatbot::{Intent, RuleBasedProvider, detect_intent};
use chatbox_server::services::provider::ResponseProvider;

#[test]
fn test_detect_intent() {
    assert_eq!(detect_intent("Hello there"), Intent::Greeting);
    assert_eq!(detect_intent("hi"), Intent::Greeting);
    assert_eq!(detect_intent("goodbye"), Intent::Goodbye);
    assert_eq!(detect_intent("thank you so much"), Intent::Thanks);
    assert_eq!(detect_intent("when are you open?"), Intent::Hours);
    assert_eq!(detect_intent("random text"), Intent::Unknown);
}

#[test]
fn test_rule_based_replies() {
    let provider = RuleBasedProvider;

    let reply = provider.get_response("hello").unwrap();
    assert!(reply.contains("help"));

    let reply = provider.get_response("what are your hours?").unwrap();
    assert!(reply.contains("9am"));

    let reply = provider.get_response("qwertyuiop").unwrap();
    assert!(reply.contains("rephrase"));
}

#[test]
fn test_provider_is_deterministic() {
    let provider = RuleBasedProvider;
    let a = provider.get_response("thanks").unwrap();
    let b = provider.get_response("thanks").unwrap();
    assert_eq!(a, b);
}
