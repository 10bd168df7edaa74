use super::*;

/// Page size used by [`TwitchClient::get_top_games`].
pub const DEFAULT_GAMES_LIMIT: u32 = 20;

impl<T: Transport> TwitchClient<T> {
    /// Get the first page of top games.
    pub async fn get_top_games(&self) -> ApiResult {
        self.get_games(DEFAULT_GAMES_LIMIT, 0).await
    }

    /// Get top games by current viewers. Only available on API v3 and earlier.
    pub async fn get_games(&self, count: u32, offset: u32) -> ApiResult {
        self.require_legacy_version("games/top")?;

        self.execute(
            RequestOptions::get(format!("/games/top?limit={count}&offset={offset}")),
            QueryParams::new(),
        )
        .await
    }
}
