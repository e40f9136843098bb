//! Account lookups for the logged-in user.

use serde_json::{json, Value};

use crate::{documents, Client, Executor, SdkError};

impl<E: Executor> Client<E> {
    /// Fetch the session user's wallet address.
    ///
    /// Returns the address of the user's first sub-wallet, which is the
    /// wallet orders execute against.
    pub async fn user_wallet_address(&self) -> Result<String, SdkError> {
        self.require_authenticated()?;

        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::USER_WALLET_ADDRESS_QUERY,
                json!({ "id": self.user_id() }),
                &self.auth_headers(),
            )
            .await?;

        let address = data
            .get("walletUserByPk")
            .and_then(|u| u.get("sub_wallets"))
            .and_then(Value::as_array)
            .and_then(|wallets| wallets.first())
            .and_then(|w| w.get("address"))
            .and_then(Value::as_str)
            .ok_or(SdkError::InvalidResponse)?;

        Ok(address.to_owned())
    }

    /// Bind a Google keyless account to the session user.
    ///
    /// `address` is the keyless-derived wallet address and `id_token`
    /// the Google identity JWT. Returns the backend's raw result; the
    /// browser flow that obtains the token is outside this layer.
    pub async fn bind_google_account(
        &self,
        address: &str,
        id_token: &str,
    ) -> Result<Value, SdkError> {
        self.require_authenticated()?;
        if address.is_empty() {
            return Err(SdkError::InvalidArgument("address is required"));
        }
        if id_token.is_empty() {
            return Err(SdkError::InvalidArgument("id_token is required"));
        }

        let variables = json!({
            "address": address,
            "idToken": id_token,
        });

        self.executor()
            .execute(
                self.graphql_endpoint(),
                documents::BIND_GOOGLE_MUTATION,
                variables,
                &self.auth_headers(),
            )
            .await
    }
}
