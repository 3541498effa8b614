//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use bubblesplit_core::{format_for_bridge, Bubble, DeliveryRecord};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs delivery records grouped by input
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<InputDocument>,
    pending: Vec<String>,
}

/// Delivery records produced from one input
#[derive(Debug, Serialize, Deserialize)]
pub struct InputDocument {
    /// File path, `<text>` or `<stdin>`
    pub source: String,
    /// Records in send order
    pub messages: Vec<DeliveryRecord>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
            pending: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_input(&mut self, source: &str) -> Result<()> {
        self.documents.push(InputDocument {
            source: source.to_string(),
            messages: Vec::new(),
        });
        Ok(())
    }

    fn format_bubble(&mut self, bubble: &Bubble) -> Result<()> {
        self.pending.push(bubble.text.clone());
        Ok(())
    }

    fn end_input(&mut self) -> Result<()> {
        let records = format_for_bridge(std::mem::take(&mut self.pending));
        if let Some(document) = self.documents.last_mut() {
            document.messages = records;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubblesplit_core::MessageSplitter;
    use serde_json::Value;

    fn render(inputs: &[(&str, &str)], pretty: bool) -> String {
        let splitter = MessageSplitter::with_max_chars(20).unwrap();
        let mut buffer = Vec::new();
        {
            let mut formatter = JsonFormatter::new(&mut buffer, pretty);
            for (source, text) in inputs {
                formatter.begin_input(source).unwrap();
                for bubble in splitter.split_bubbles(text) {
                    formatter.format_bubble(&bubble).unwrap();
                }
                formatter.end_input().unwrap();
            }
            formatter.finish().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_records_per_input() {
        let output = render(
            &[
                ("a.txt", "Hello there friend. How are you today?"),
                ("b.txt", "Bye."),
            ],
            true,
        );
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["source"], "a.txt");
        assert_eq!(value[0]["messages"][0]["text"], "Hello there friend.");
        assert_eq!(value[0]["messages"][1]["text"], "How are you today?");
        assert!(value[0]["messages"][0]["typing_delay"].is_null());
        assert!(value[0]["messages"][0]["delay_before"].is_null());
        assert_eq!(value[1]["source"], "b.txt");
        assert_eq!(value[1]["messages"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_compact_output_is_one_line() {
        let output = render(&[("<text>", "Hi.")], false);
        assert_eq!(output.lines().count(), 1);
        let documents: Vec<InputDocument> = serde_json::from_str(&output).unwrap();
        assert_eq!(documents[0].messages, vec![DeliveryRecord::new("Hi.")]);
    }

    #[test]
    fn test_blank_input_has_no_messages() {
        let output = render(&[("<stdin>", "  ")], true);
        let documents: Vec<InputDocument> = serde_json::from_str(&output).unwrap();
        assert!(documents[0].messages.is_empty());
    }
}
