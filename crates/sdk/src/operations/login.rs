//! Login protocol: Telegram identity -> session token.
//!
//! The backend exchanges a Telegram mini-app login payload for a JWT.
//! Token interpretation is the strict "decode and verify" strategy (see
//! [`crate::jwt`]): the claims are decoded locally, `exp` is checked
//! against the current time, and the wallet user id is read from the
//! Hasura claims namespace. Any decode or freshness failure resets the
//! session to logged-out and raises the specific error -- after a failed
//! login the client is indistinguishable from one that never logged in.

use serde_json::{json, Value};

use config::constants::HEADER_TELEGRAM_ID;

use crate::{documents, jwt, utils, Client, Executor, SdkError};

impl<E: Executor> Client<E> {
    /// Log in with a Telegram mini-app `initData` payload.
    ///
    /// Requires an initialized client; this is how authentication is
    /// obtained, so no session token is required. On success the
    /// `(user_id, session_token)` pair is set together.
    ///
    /// # Errors
    ///
    /// [`SdkError::ExpiredToken`] if the issued token's `exp` is already
    /// in the past, [`SdkError::InvalidToken`] if it cannot be decoded.
    /// Either way the session is cleared before returning.
    pub async fn login_with_telegram(&mut self, init_data: &str) -> Result<(), SdkError> {
        self.require_initialized()?;

        let variables = json!({
            "appId": self.app_id(),
            "initData": init_data,
        });

        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::LOGIN_MUTATION,
                variables,
                &[],
            )
            .await?;

        let token = data
            .get("tgLogin")
            .and_then(Value::as_str)
            .ok_or(SdkError::InvalidResponse)?
            .to_owned();

        match jwt::verify(&token, utils::unix_timestamp_secs()) {
            Ok(claims) => {
                tracing::debug!(user_id = %claims.user_id, "login succeeded");
                self.set_session(claims.user_id, token);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "login token rejected");
                self.logout();
                Err(err)
            }
        }
    }

    /// Check whether a wallet user exists for a Telegram id.
    ///
    /// Pre-login lookup: requires an initialized client only. The id
    /// travels in the `x-hasura-tg-id` header, not as a variable, and no
    /// bearer token is attached.
    ///
    /// # Errors
    ///
    /// [`SdkError::InvalidArgument`] if `tg_id` is empty.
    pub async fn user_exists_by_telegram_id(&self, tg_id: &str) -> Result<bool, SdkError> {
        self.require_initialized()?;
        if tg_id.is_empty() {
            return Err(SdkError::InvalidArgument("tg_id is required"));
        }

        let headers = [(HEADER_TELEGRAM_ID, tg_id.to_owned())];
        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::CHECK_USER_EXISTS_QUERY,
                json!({}),
                &headers,
            )
            .await?;

        let matches = data
            .get("telegramUser")
            .and_then(Value::as_array)
            .ok_or(SdkError::InvalidResponse)?;

        Ok(!matches.is_empty())
    }
}
