use serde_json::Map;

use super::*;

impl<T: Transport> TwitchClient<T> {
    /// Get the channel of the user that owns `access_token`.
    pub async fn get_authenticated_user_channel(&self, access_token: &str) -> ApiResult {
        self.execute(
            RequestOptions::get("/channel").with_token(access_token),
            QueryParams::new(),
        )
        .await
    }

    /// Get a channel by ID.
    pub async fn get_channel(&self, channel_id: &str) -> ApiResult {
        self.execute(
            RequestOptions::get(format!("/channels/{channel_id}")),
            QueryParams::new(),
        )
        .await
    }

    /// Update channel status, game and/or delay.
    pub async fn update_channel(
        &self,
        channel_id: &str,
        update: &ChannelUpdate,
        access_token: &str,
    ) -> ApiResult {
        let mut body = Map::new();
        body.insert("channel".into(), serde_json::to_value(update)?);

        self.execute(
            RequestOptions::put(format!("/channels/{channel_id}"))
                .with_token(access_token)
                .with_body(body),
            QueryParams::new(),
        )
        .await
    }

    /// Get followers of a channel. `params` is forwarded as the query string
    /// (`limit`, `offset`, `cursor`, `direction`, ...).
    pub async fn get_channel_followers(&self, channel_id: &str, params: QueryParams) -> ApiResult {
        self.execute(
            RequestOptions::get(format!("/channels/{channel_id}/follows")),
            params,
        )
        .await
    }
}
