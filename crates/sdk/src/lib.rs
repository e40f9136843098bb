//! Custodial-wallet client SDK: session, orders, and transfers.
//!
//! The SDK orchestrates the wallet backend's multi-step workflows by
//! combining:
//!
//! - **Session state** ([`Client`]) -- application id, network/endpoint
//!   pair, and the `(user_id, session_token)` authentication pair
//! - **Transport** ([`Executor`]) -- executes one named GraphQL
//!   operation; the `graphql` crate provides the production
//!   implementation
//! - **Workflows** ([`operations`]) -- login, order lifecycle
//!   (create / simulate / confirm / list), and transfer issuance/claim
//!
//! # Architecture
//!
//! Every workflow operation follows the same pattern:
//!
//! 1. Check session preconditions (initialized, authenticated) --
//!    synchronously, before any network I/O
//! 2. Validate and encode caller arguments
//! 3. Delegate to the [`Executor`]
//! 4. Parse the operation's result shape strictly at the boundary
//!
//! A precondition error therefore guarantees that no request was sent.
//!
//! # Concurrency
//!
//! One `Client` is one logical session. Mutating calls (`login`,
//! `logout`, `update_network`) take `&mut self`; request-issuing calls
//! capture the token and endpoint at call time. There is no internal
//! synchronization, no background work, and no retry or timeout logic
//! -- those belong to the [`Executor`] or the caller.
//!
//! # Usage
//!
//! ```no_run
//! use sdk::Client;
//! use sdk_core::Network;
//!
//! # async fn example() -> Result<(), sdk::SdkError> {
//! let mut client = Client::new("my-app", Network::Testnet, graphql::GraphqlClient::new())?;
//!
//! client.login_with_telegram("query_id=...").await?;
//! let orders = client.fetch_order_list(Default::default()).await?;
//! println!("total orders: {}", orders.pagination.total);
//!
//! client.logout();
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod executor;
pub mod operations;

pub(crate) mod documents;
pub(crate) mod jwt;
pub(crate) mod utils;

pub use error::SdkError;
pub use executor::Executor;

use config::NetworkConfig;
use sdk_core::Network;

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Wallet backend client: session state plus workflow entry points.
///
/// Generic over the [`Executor`] so tests and embedders can inject
/// their own transport. Construction is the only way `initialized`
/// becomes true; a constructed client is always initialized.
pub struct Client<E> {
    /// Application id, immutable for the client's lifetime.
    app_id: String,

    /// Selected network.
    network: Network,

    /// GraphQL endpoint derived from `network`.
    endpoint: &'static str,

    /// Wallet user id; empty until login, cleared with the token.
    user_id: String,

    /// Bearer session token; empty until login, cleared with the user id.
    session_token: String,

    /// Set once by construction.
    initialized: bool,

    /// Transport used for every backend call.
    executor: E,
}

impl<E: Executor> Client<E> {
    /// Creates a new client for `app_id` on `network`.
    ///
    /// No network I/O happens during construction.
    ///
    /// # Errors
    ///
    /// Returns [`SdkError::InvalidConfig`] if `app_id` is empty.
    pub fn new(
        app_id: impl Into<String>,
        network: Network,
        executor: E,
    ) -> Result<Self, SdkError> {
        let app_id = app_id.into();
        if app_id.is_empty() {
            return Err(SdkError::InvalidConfig("app_id is required"));
        }

        Ok(Self {
            app_id,
            network,
            endpoint: NetworkConfig::for_network(network).graphql_endpoint(),
            user_id: String::new(),
            session_token: String::new(),
            initialized: true,
            executor,
        })
    }

    /// The application id this client was constructed with.
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// The currently selected network.
    pub fn network(&self) -> Network {
        self.network
    }

    /// The GraphQL endpoint the next operation will use.
    pub fn graphql_endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// The logged-in wallet user id. Empty when not authenticated.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Whether a session token is currently held.
    pub fn is_authenticated(&self) -> bool {
        !self.session_token.is_empty()
    }

    /// Switch networks, re-deriving the endpoint.
    ///
    /// The session token is left untouched: it remains valid only if
    /// the new network's backend accepts it, which is the caller's
    /// responsibility to ensure.
    pub fn update_network(&mut self, network: Network) -> Result<(), SdkError> {
        self.require_initialized()?;
        self.network = network;
        self.endpoint = NetworkConfig::for_network(network).graphql_endpoint();
        Ok(())
    }

    /// Clears the session. Idempotent, no precondition, no network I/O.
    pub fn logout(&mut self) {
        self.user_id.clear();
        self.session_token.clear();
    }

    // -----------------------------------------------------------------------
    // Internal session plumbing
    // -----------------------------------------------------------------------

    /// Fails with [`SdkError::NotInitialized`] before any network call.
    pub(crate) fn require_initialized(&self) -> Result<(), SdkError> {
        if !self.initialized {
            return Err(SdkError::NotInitialized);
        }
        Ok(())
    }

    /// Fails with [`SdkError::NotAuthenticated`] before any network call.
    pub(crate) fn require_authenticated(&self) -> Result<(), SdkError> {
        self.require_initialized()?;
        if self.session_token.is_empty() {
            return Err(SdkError::NotAuthenticated);
        }
        Ok(())
    }

    /// Sets the `(user_id, session_token)` pair. The two fields are only
    /// ever written together, here and in [`Client::logout`].
    pub(crate) fn set_session(&mut self, user_id: String, session_token: String) {
        self.user_id = user_id;
        self.session_token = session_token;
    }

    /// `authorization: Bearer <token>` for authenticated operations,
    /// capturing the token at call time.
    pub(crate) fn auth_headers(&self) -> [(&'static str, String); 1] {
        [("authorization", format!("Bearer {}", self.session_token))]
    }

    /// The injected executor.
    pub(crate) fn executor(&self) -> &E {
        &self.executor
    }
}

impl<E: Executor> std::fmt::Debug for Client<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The session token stays out of Debug output.
        f.debug_struct("Client")
            .field("app_id", &self.app_id)
            .field("network", &self.network)
            .field("endpoint", &self.endpoint)
            .field("user_id", &self.user_id)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client<graphql::GraphqlClient> {
        Client::new("app-1", Network::Testnet, graphql::GraphqlClient::new()).unwrap()
    }

    #[test]
    fn new_rejects_empty_app_id() {
        let err = Client::new("", Network::Testnet, graphql::GraphqlClient::new()).unwrap_err();
        assert_eq!(err, SdkError::InvalidConfig("app_id is required"));
    }

    #[test]
    fn new_derives_endpoint_and_initializes() {
        let client = client();
        assert_eq!(
            client.graphql_endpoint(),
            NetworkConfig::TESTNET.graphql_endpoint()
        );
        assert!(client.require_initialized().is_ok());
        assert!(!client.is_authenticated());
        assert_eq!(client.user_id(), "");
    }

    #[test]
    fn update_network_switches_endpoint_keeps_token() {
        let mut client = client();
        client.set_session("u-1".into(), "tok".into());

        client.update_network(Network::Mainnet).unwrap();
        assert_eq!(
            client.graphql_endpoint(),
            NetworkConfig::MAINNET.graphql_endpoint()
        );
        assert!(client.is_authenticated());
        assert_eq!(client.user_id(), "u-1");
    }

    #[test]
    fn logout_clears_pair_and_is_idempotent() {
        let mut client = client();
        client.set_session("u-1".into(), "tok".into());

        client.logout();
        assert!(!client.is_authenticated());
        assert_eq!(client.user_id(), "");
        assert_eq!(
            client.require_authenticated(),
            Err(SdkError::NotAuthenticated)
        );

        // Second logout is a no-op.
        client.logout();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn auth_headers_carry_bearer_token() {
        let mut client = client();
        client.set_session("u-1".into(), "tok-abc".into());
        let [(name, value)] = client.auth_headers();
        assert_eq!(name, "authorization");
        assert_eq!(value, "Bearer tok-abc");
    }

    #[test]
    fn debug_omits_session_token() {
        let mut client = client();
        client.set_session("u-1".into(), "secret-token".into());
        let out = format!("{client:?}");
        assert!(!out.contains("secret-token"));
        assert!(out.contains("authenticated: true"));
    }
}
