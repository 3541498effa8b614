//! End-to-end tests for message splitting

use bubblesplit_core::*;

const BARISTA: &str = "Great! I can help you with that. Our most popular item is the vanilla latte which comes in three sizes. Would you like to hear about our specials?";

#[test]
fn test_short_greeting_is_one_bubble() {
    let messages = split_into_natural_messages("Hey! How are you?", 160).unwrap();
    assert_eq!(messages, vec!["Hey! How are you?"]);
}

#[test]
fn test_blank_input_is_empty() {
    assert!(split_into_natural_messages("", 160).unwrap().is_empty());
    assert!(split_into_natural_messages("   ", 160).unwrap().is_empty());
    assert!(split_into_natural_messages("\n\t", 10).unwrap().is_empty());
}

#[test]
fn test_zero_max_chars_is_invalid() {
    let result = split_into_natural_messages("Hello.", 0);
    assert!(matches!(result, Err(SplitError::InvalidConfiguration(_))));
}

#[test]
fn test_components_reject_zero_max_chars() {
    let sentences = segment("We have three sizes of latte on the menu today for everyone.");
    assert!(matches!(
        aggregate(sentences, 0),
        Err(SplitError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        split_long("alpha beta gamma", 0),
        Err(SplitError::InvalidConfiguration(_))
    ));
}

#[test]
fn test_barista_reply_fits_default_guideline() {
    // 146 characters: short enough to send whole
    let messages = split_into_natural_messages(BARISTA, 160).unwrap();
    assert_eq!(messages, vec![BARISTA]);
}

#[test]
fn test_barista_reply_at_100() {
    let messages = split_into_natural_messages(BARISTA, 100).unwrap();
    assert_eq!(
        messages,
        vec![
            "Great!",
            "I can help you with that. Our most popular item is the vanilla latte which comes in three sizes.",
            "Would you like to hear about our specials?",
        ]
    );
}

#[test]
fn test_barista_reply_at_80() {
    let messages = split_into_natural_messages(BARISTA, 80).unwrap();
    assert_eq!(
        messages,
        vec![
            "Great!",
            "I can help you with that.",
            "Our most popular item is the vanilla latte which comes in three sizes.",
            "Would you like to hear about our specials?",
        ]
    );
}

#[test]
fn test_prices_do_not_break_sentences() {
    let text = "Your latte is $5.50. By the way, we have a special today on pastries! Would you like to add one to your order?";
    let messages = split_into_natural_messages(text, 60).unwrap();
    assert_eq!(
        messages,
        vec![
            "Your latte is $5.50.",
            "By the way, we have a special today on pastries!",
            "Would you like to add one to your order?",
        ]
    );
}

#[test]
fn test_abbreviation_stays_in_sentence() {
    let text = "Thanks for waiting. Dr. Patel will see you at noon. Please bring your insurance card and a photo ID. Do you need directions?";
    let messages = split_into_natural_messages(text, 60).unwrap();
    assert_eq!(
        messages,
        vec![
            "Thanks for waiting. Dr. Patel will see you at noon.",
            "Please bring your insurance card and a photo ID.",
            "Do you need directions?",
        ]
    );
}

#[test]
fn test_single_long_sentence_is_word_wrapped() {
    let sentence = format!("{}.", "lorem ipsum dolor ".repeat(23).trim());
    assert!(sentence.chars().count() > 400);

    let messages = split_into_natural_messages(&sentence, 160).unwrap();
    assert!(messages.len() > 1);
    for message in &messages {
        assert!(!message.is_empty());
        assert!(message.chars().count() <= 160, "too long: {message}");
    }
    assert_eq!(messages.join(" "), sentence);
}

#[test]
fn test_long_sentence_with_commas() {
    let sentence = "We have espresso, cappuccino, flat white, cortado, and macchiato on the main menu, \
        plus seasonal drinks like pumpkin spice latte, peppermint mocha, and gingerbread cold brew, \
        and you can swap in oat, almond, soy, or coconut milk for any of them at no extra charge today.";
    let splitter = MessageSplitter::with_max_chars(100).unwrap();
    let bubbles = splitter.split_bubbles(sentence);

    assert!(bubbles.len() > 1);
    assert!(bubbles.iter().all(|b| b.origin == BubbleOrigin::Split));
    assert!(bubbles.iter().all(|b| !b.text.ends_with(',')));
    assert!(bubbles.iter().all(|b| b.len() <= 100));
    assert_eq!(bubbles[0].text, "We have espresso, cappuccino, flat white, cortado, and macchiato on the main menu");
}

#[test]
fn test_giant_word_survives() {
    let word = "a".repeat(500);
    let messages = split_into_natural_messages(&word, 160).unwrap();
    assert_eq!(messages, vec![word]);
}

#[test]
fn test_all_punctuation_input() {
    let text = "?! ".repeat(100);
    let messages = split_into_natural_messages(&text, 20).unwrap();
    assert_eq!(messages.len(), 100);
    assert!(messages.iter().all(|m| m == "?!"));
}

#[test]
fn test_questions_end_their_bubble() {
    let text = "I checked the schedule. Is noon okay? We can also do three. Does that work? Let me know.";
    let splitter = MessageSplitter::with_max_chars(60).unwrap();
    for message in splitter.split(text) {
        if let Some(pos) = message.find('?') {
            assert_eq!(pos, message.len() - 1, "question not last in {message:?}");
        }
    }
}

#[test]
fn test_component_pipeline_matches_splitter() {
    let text = "Perfect! I've got your order for a vanilla latte. That'll be $5.50. I'll send you a payment link now.";

    let trimmed = match normalize(text, 50) {
        Normalized::Long(trimmed) => trimmed,
        other => panic!("expected long input, got {other:?}"),
    };
    let sentences = segment(trimmed);
    assert_eq!(sentences.len(), 4);
    assert!(is_standalone(&sentences[0]));

    let bubbles: Vec<String> = aggregate(sentences, 50)
        .unwrap()
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(bubbles, split_into_natural_messages(text, 50).unwrap());
    assert_eq!(
        bubbles,
        vec![
            "Perfect!",
            "I've got your order for a vanilla latte.",
            "That'll be $5.50.",
            "I'll send you a payment link now.",
        ]
    );
}

#[test]
fn test_delivery_records_follow_bubbles() {
    let messages = split_into_natural_messages(BARISTA, 80).unwrap();
    let records = format_for_bridge(messages.clone());

    assert_eq!(records.len(), messages.len());
    for (record, message) in records.iter().zip(&messages) {
        assert_eq!(&record.text, message);
        assert!(record.typing_delay_hint.is_none());
        assert!(record.delay_before_hint.is_none());
    }
}

#[test]
fn test_shared_splitter_across_threads() {
    use std::sync::Arc;
    use std::thread;

    let splitter = Arc::new(MessageSplitter::with_max_chars(80).unwrap());
    let expected = splitter.split(BARISTA);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let splitter = Arc::clone(&splitter);
            thread::spawn(move || splitter.split(BARISTA))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
