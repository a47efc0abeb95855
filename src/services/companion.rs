//! Scripted companion replies.
//!
//! Messages are bucketed into a category by keyword match and answered with
//! a canned response picked from that category's pool. There is no model
//! behind this — the tables are the whole feature.

use rand::Rng;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Mental Wellness Companion. \
    I'm here to listen and support you on your journey. How are you feeling today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCategory {
    Greeting,
    Sad,
    Anxious,
    Happy,
    Stressed,
    Grateful,
    Fallback,
}

const GREETING_KEYWORDS: &[&str] = &["hi", "hello", "hey", "good morning", "good afternoon"];
const SAD_KEYWORDS: &[&str] = &["sad", "depressed", "down", "unhappy", "miserable", "awful"];
const ANXIOUS_KEYWORDS: &[&str] = &["anxious", "anxiety", "worried", "nervous", "scared", "fear"];
const HAPPY_KEYWORDS: &[&str] = &["happy", "great", "wonderful", "amazing", "excited", "good", "better"];
const STRESSED_KEYWORDS: &[&str] = &["stressed", "stress", "overwhelmed", "busy", "pressure"];
const GRATEFUL_KEYWORDS: &[&str] = &["grateful", "thankful", "appreciate", "blessed", "fortunate"];

const GREETING_RESPONSES: &[&str] = &[
    "Hello! I'm here to support you. How are you feeling today?",
    "Hi there! It's great to see you. What's on your mind?",
    "Welcome! I'm here to listen. How can I help you today?",
];

const SAD_RESPONSES: &[&str] = &[
    "I'm sorry you're feeling down. Remember, it's okay to have difficult days. \
     Would you like to talk about what's bothering you?",
    "Your feelings are valid. Sometimes just acknowledging how we feel can be helpful. \
     I'm here to listen.",
    "I hear you. Tough moments are part of life, but they don't define you. \
     You're stronger than you know.",
];

const ANXIOUS_RESPONSES: &[&str] = &[
    "Anxiety can be overwhelming. Try taking a few deep breaths with me. \
     Inhale for 4... hold for 4... exhale for 4.",
    "It's normal to feel anxious sometimes. Remember, you've gotten through difficult \
     times before, and you can do it again.",
    "Let's ground ourselves. Can you name 5 things you can see right now? \
     This can help bring you back to the present.",
];

const HAPPY_RESPONSES: &[&str] = &[
    "That's wonderful! I'm so glad you're feeling good. What's bringing you joy today?",
    "It's great to hear you're doing well! Savoring positive moments is so important.",
    "Your happiness is contagious! Thank you for sharing this positive energy with me.",
];

const STRESSED_RESPONSES: &[&str] = &[
    "Stress can be tough to handle. Remember to take things one step at a time. \
     What's one small thing you could do right now to help yourself?",
    "It sounds like you have a lot on your plate. Have you considered breaking down \
     your tasks into smaller, manageable pieces?",
    "Taking care of yourself during stressful times is crucial. \
     Have you had a chance to rest today?",
];

const GRATEFUL_RESPONSES: &[&str] = &[
    "Gratitude is such a powerful practice. It's wonderful that you're taking time \
     to appreciate the good things.",
    "That's beautiful. Focusing on what we're grateful for can really shift our perspective.",
    "Thank you for sharing that. Practicing gratitude is one of the best things \
     we can do for our mental health.",
];

const FALLBACK_RESPONSES: &[&str] = &[
    "I understand. Tell me more about how you're feeling.",
    "Thank you for sharing that with me. Your feelings matter.",
    "I'm here to listen and support you. What else would you like to talk about?",
    "That makes sense. How are you coping with everything?",
    "I appreciate you opening up. Remember, it's okay to feel whatever you're feeling.",
];

/// Classify a message by the first keyword group it matches.
///
/// Category order matters: "I feel down but a bit better" reads as sad, not
/// happy, because sadness keywords are checked first.
pub fn categorize(message: &str) -> ResponseCategory {
    let lower = message.to_lowercase();

    let matches = |keywords: &[&str]| keywords.iter().any(|k| contains_word(&lower, k));

    if matches(GREETING_KEYWORDS) {
        ResponseCategory::Greeting
    } else if matches(SAD_KEYWORDS) {
        ResponseCategory::Sad
    } else if matches(ANXIOUS_KEYWORDS) {
        ResponseCategory::Anxious
    } else if matches(HAPPY_KEYWORDS) {
        ResponseCategory::Happy
    } else if matches(STRESSED_KEYWORDS) {
        ResponseCategory::Stressed
    } else if matches(GRATEFUL_KEYWORDS) {
        ResponseCategory::Grateful
    } else {
        ResponseCategory::Fallback
    }
}

/// Pick a canned reply for a category.
pub fn pick_reply(category: ResponseCategory) -> &'static str {
    let pool = responses(category);
    pool[rand::thread_rng().gen_range(0..pool.len())]
}

fn responses(category: ResponseCategory) -> &'static [&'static str] {
    match category {
        ResponseCategory::Greeting => GREETING_RESPONSES,
        ResponseCategory::Sad => SAD_RESPONSES,
        ResponseCategory::Anxious => ANXIOUS_RESPONSES,
        ResponseCategory::Happy => HAPPY_RESPONSES,
        ResponseCategory::Stressed => STRESSED_RESPONSES,
        ResponseCategory::Grateful => GRATEFUL_RESPONSES,
        ResponseCategory::Fallback => FALLBACK_RESPONSES,
    }
}

/// Whole-word match: `keyword` must not be embedded in a longer word, so
/// "scared" does not match inside "sacred scarecrow" territory and "hi"
/// does not fire on "this".
fn contains_word(text: &str, keyword: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = text[start..].find(keyword) {
        let begin = start + pos;
        let end = begin + keyword.len();

        let boundary_before = begin == 0
            || !text[..begin]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        let boundary_after = end == text.len()
            || !text[end..].chars().next().is_some_and(char::is_alphanumeric);

        if boundary_before && boundary_after {
            return true;
        }
        start = end;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_detected() {
        assert_eq!(categorize("Hello there"), ResponseCategory::Greeting);
        assert_eq!(categorize("good morning!"), ResponseCategory::Greeting);
    }

    #[test]
    fn test_keyword_requires_word_boundary() {
        // "hi" inside "this" or "down" inside "downtown" must not match.
        assert_eq!(categorize("this is fine and calm"), ResponseCategory::Fallback);
        assert_eq!(categorize("I walked downtown"), ResponseCategory::Fallback);
    }

    #[test]
    fn test_category_priority_order() {
        // Contains both sad and happy keywords; sad wins because it is
        // checked first.
        assert_eq!(
            categorize("I was sad but things are better"),
            ResponseCategory::Sad
        );
        // Greeting outranks everything.
        assert_eq!(
            categorize("hi, feeling really stressed"),
            ResponseCategory::Greeting
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(categorize("I'm SO ANXIOUS today"), ResponseCategory::Anxious);
    }

    #[test]
    fn test_each_category_has_a_reply() {
        for category in [
            ResponseCategory::Greeting,
            ResponseCategory::Sad,
            ResponseCategory::Anxious,
            ResponseCategory::Happy,
            ResponseCategory::Stressed,
            ResponseCategory::Grateful,
            ResponseCategory::Fallback,
        ] {
            let reply = pick_reply(category);
            assert!(!reply.is_empty());
            assert!(responses(category).contains(&reply));
        }
    }

    #[test]
    fn test_unmatched_message_falls_back() {
        assert_eq!(categorize("the weather changed"), ResponseCategory::Fallback);
        assert_eq!(categorize(""), ResponseCategory::Fallback);
    }
}
