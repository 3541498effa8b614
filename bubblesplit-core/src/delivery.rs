//! Delivery records for the downstream sender

use crate::types::DeliveryRecord;

/// Wrap each message in a [`DeliveryRecord`] with timing hints unset
///
/// The sender computes typing and inter-message delays itself.
pub fn format_for_bridge<I, S>(messages: I) -> Vec<DeliveryRecord>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    messages.into_iter().map(DeliveryRecord::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_record_per_message_in_order() {
        let records = format_for_bridge(["Hey!", "How are you?"]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text, "Hey!");
        assert_eq!(records[1].text, "How are you?");
        assert!(records
            .iter()
            .all(|r| r.typing_delay_hint.is_none() && r.delay_before_hint.is_none()));
    }

    #[test]
    fn test_empty_input() {
        assert!(format_for_bridge(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_bridge_json() {
        let records = format_for_bridge(vec!["a".to_string(), "b".to_string()]);
        let json = serde_json::to_value(&records).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"text": "a", "typing_delay": null, "delay_before": null},
                {"text": "b", "typing_delay": null, "delay_before": null}
            ])
        );
    }
}
