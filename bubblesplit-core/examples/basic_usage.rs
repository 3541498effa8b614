//! Basic usage example for bubblesplit-core

use bubblesplit_core::{format_for_bridge, split_into_natural_messages, MessageSplitter, SplitterConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reply = "Perfect! I've got your order for a vanilla latte. That'll be $5.50. \
                 I'll send you a payment link now.";

    // Default tables, custom guideline
    let messages = split_into_natural_messages(reply, 50)?;
    println!("Split into {} bubbles:", messages.len());
    for (i, message) in messages.iter().enumerate() {
        println!("  {}. ({} chars) {}", i + 1, message.chars().count(), message);
    }

    // Delivery records for the sender, timing left to it
    let records = format_for_bridge(messages);
    println!("\nDelivery records:");
    println!("{}", serde_json::to_string_pretty(&records)?);

    // Extra abbreviations and canned replies
    let config = SplitterConfig::builder()
        .max_chars(40)
        .abbreviation("academic", "Prof")
        .canned_phrase("on it!")
        .build()?;
    let splitter = MessageSplitter::with_config(config)?;

    println!("\nWith custom config:");
    for bubble in splitter.split_bubbles("On it! Prof. Lee moved the review to Friday. Does that still work for you?") {
        println!("  [{:?}] {}", bubble.origin, bubble.text);
    }

    Ok(())
}
