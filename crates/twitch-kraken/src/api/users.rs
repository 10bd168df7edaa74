use super::*;

impl<T: Transport> TwitchClient<T> {
    /// Get a user by Kraken user ID.
    pub async fn get_user(&self, user_id: &str) -> ApiResult {
        if user_id.is_empty() {
            return Err(TwitchError::InvalidArgument("user_id is required".into()));
        }

        self.execute(
            RequestOptions::get(format!("/users/{user_id}")),
            QueryParams::new(),
        )
        .await
    }

    /// Look up users by login name. Names are sent as one comma-joined
    /// `login` parameter.
    pub async fn get_users_login<S: AsRef<str>>(&self, usernames: &[S]) -> ApiResult {
        if usernames.is_empty() {
            return Err(TwitchError::InvalidArgument(
                "array of usernames required".into(),
            ));
        }

        let login = usernames
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(",");
        let query = QueryParams::from([("login".to_string(), login)]);
        self.execute(RequestOptions::get("/users"), query).await
    }

    /// Get the user that owns `access_token`.
    pub async fn get_authenticated_user(&self, access_token: &str) -> ApiResult {
        self.execute(
            RequestOptions::get("/user").with_token(access_token),
            QueryParams::new(),
        )
        .await
    }
}
