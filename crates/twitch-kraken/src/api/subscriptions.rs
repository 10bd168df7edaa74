use super::models::SubscriptionsResponse;
use super::*;

impl<T: Transport> TwitchClient<T> {
    /// Get subscribers of a channel. Only available on API v3 and earlier.
    ///
    /// A 422 response means the channel has no subscription program and is
    /// returned as an empty list.
    pub async fn get_channel_subscriptions(
        &self,
        channel_id: &str,
        access_token: &str,
        params: QueryParams,
    ) -> Result<Vec<Value>, TwitchError> {
        self.require_legacy_version("channels/subscriptions")?;

        let result = self
            .execute(
                RequestOptions::get(format!("/channels/{channel_id}/subscriptions"))
                    .with_token(access_token),
                params,
            )
            .await;

        match result {
            Ok(Value::Null) => Ok(Vec::new()),
            Ok(body) => {
                let resp: SubscriptionsResponse = serde_json::from_value(body)?;
                Ok(resp.subscriptions.unwrap_or_default())
            }
            Err(TwitchError::Api { status: 422, .. }) => {
                tracing::debug!(channel_id, "Channel has no subscription program");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}
