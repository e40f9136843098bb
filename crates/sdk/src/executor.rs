//! Remote operation executor trait.
//!
//! [`Executor`] is the seam between the workflow layer and the network:
//! it executes one named GraphQL operation and returns the parsed `data`
//! value. The trait exists so tests can substitute a scripted mock and
//! so embedders can wrap the transport with their own retry or metrics
//! layers -- this crate performs no retries itself.

use std::future::Future;

use serde_json::Value;

use crate::SdkError;

/// Executes GraphQL operations against a wallet backend endpoint.
///
/// Implementations own all transport concerns (connections, TLS,
/// timeouts, cancellation). The SDK guarantees that every call it makes
/// has already passed its session preconditions, so an `Executor` is
/// never invoked for a request the session state forbids.
pub trait Executor: Send + Sync {
    /// Execute `document` against `endpoint` with the given variables
    /// and extra headers, returning the GraphQL `data` value.
    fn execute(
        &self,
        endpoint: &str,
        document: &str,
        variables: Value,
        headers: &[(&str, String)],
    ) -> impl Future<Output = Result<Value, SdkError>> + Send;
}

/// The hyper-based transport from the `graphql` crate is the default
/// production executor.
impl Executor for graphql::GraphqlClient {
    async fn execute(
        &self,
        endpoint: &str,
        document: &str,
        variables: Value,
        headers: &[(&str, String)],
    ) -> Result<Value, SdkError> {
        graphql::GraphqlClient::execute(self, endpoint, document, variables, headers)
            .await
            .map_err(SdkError::from)
    }
}
