use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Query string parameters, serialized in key order.
pub type QueryParams = BTreeMap<String, String>;

/// Fields to change on a channel via PUT /kraken/channels/{id}.
///
/// Only fields that are `Some` are sent. `delay: Some(0)` is sent as `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
}

impl ChannelUpdate {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..Self::default()
        }
    }

    pub fn with_game(mut self, game: impl Into<String>) -> Self {
        self.game = Some(game.into());
        self
    }

    pub fn with_delay(mut self, delay: u64) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// Response of GET /kraken/channels/{id}/subscriptions.
#[derive(Debug, Deserialize)]
pub(crate) struct SubscriptionsResponse {
    #[serde(default)]
    pub subscriptions: Option<Vec<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn channel_update_skips_absent_fields() {
        let body = serde_json::to_value(ChannelUpdate::status("S")).unwrap();
        assert_eq!(body, json!({"status": "S"}));
    }

    #[test]
    fn channel_update_keeps_zero_delay() {
        let update = ChannelUpdate::default().with_delay(0);
        let body = serde_json::to_value(update).unwrap();
        assert_eq!(body, json!({"delay": 0}));
    }

    #[test]
    fn subscriptions_response_allows_missing_field() {
        let parsed: SubscriptionsResponse = serde_json::from_str(r#"{"_total": 0}"#).unwrap();
        assert!(parsed.subscriptions.is_none());
    }

    #[test]
    fn subscriptions_response_allows_null_field() {
        let parsed: SubscriptionsResponse =
            serde_json::from_str(r#"{"_total": 0, "subscriptions": null}"#).unwrap();
        assert!(parsed.subscriptions.is_none());
    }
}
