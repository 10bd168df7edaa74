use super::*;

impl<T: Transport> TwitchClient<T> {
    /// Get live streams. `params` is forwarded as the query string
    /// (`channel`, `game`, `stream_type`, `limit`, ...).
    pub async fn get_streams(&self, params: QueryParams) -> ApiResult {
        self.execute(RequestOptions::get("/streams"), params).await
    }
}
