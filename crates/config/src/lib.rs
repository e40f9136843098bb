//! Wallet backend network configuration.
//!
//! This crate provides static, per-network configuration for the wallet
//! client:
//!
//! - [`NetworkConfig`] -- GraphQL endpoint for a given network
//! - [`constants`] -- protocol-level parameters (transfer TTL, page size,
//!   JWT claim locations, identity header names)
//!
//! All data is compile-time constant (`&'static str`). Zero heap
//! allocations. Types are `Copy`.
//!
//! `config` depends only on [`sdk_core::Network`]. It does **not** depend
//! on transport or any runtime crate, so it can be used freely as a leaf
//! dependency.

pub mod constants;

use sdk_core::Network;

// ---------------------------------------------------------------------------
// NetworkConfig
// ---------------------------------------------------------------------------

/// Network-specific configuration.
///
/// This is `Copy` -- just pointers to static data. The GraphQL endpoint
/// is the only per-network value today; authentication and workflow
/// parameters are network-independent and live in [`constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// The network this configuration is for.
    pub network: Network,

    /// GraphQL endpoint URL for this network.
    graphql_endpoint: &'static str,
}

impl NetworkConfig {
    /// Get the configuration for a specific network.
    pub const fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::MAINNET,
            Network::Testnet => Self::TESTNET,
        }
    }

    /// Returns the GraphQL endpoint URL.
    pub const fn graphql_endpoint(&self) -> &'static str {
        self.graphql_endpoint
    }

    // -----------------------------------------------------------------------
    // Built-in network configurations
    // -----------------------------------------------------------------------

    /// Production mainnet configuration.
    pub const MAINNET: Self = Self {
        network: Network::Mainnet,
        graphql_endpoint: "https://api.mz.xyz/v1/graphql/",
    };

    /// Public testnet configuration.
    pub const TESTNET: Self = Self {
        network: Network::Testnet,
        graphql_endpoint: "https://hasura-wallet.groupwar.xyz/v1/graphql",
    };
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_network_selects_endpoint() {
        let mainnet = NetworkConfig::for_network(Network::Mainnet);
        let testnet = NetworkConfig::for_network(Network::Testnet);
        assert_eq!(mainnet.network, Network::Mainnet);
        assert_eq!(testnet.network, Network::Testnet);
        assert_ne!(mainnet.graphql_endpoint(), testnet.graphql_endpoint());
    }

    #[test]
    fn endpoints_are_https() {
        for config in [NetworkConfig::MAINNET, NetworkConfig::TESTNET] {
            assert!(
                config.graphql_endpoint().starts_with("https://"),
                "{:?} endpoint should use HTTPS",
                config.network
            );
        }
    }

    #[test]
    fn configs_are_copy() {
        let a = NetworkConfig::MAINNET;
        let b = a;
        assert_eq!(a, b);
    }

    #[test]
    fn const_fn_works_at_compile_time() {
        const CONFIG: NetworkConfig = NetworkConfig::for_network(Network::Testnet);
        assert_eq!(CONFIG.network, Network::Testnet);
    }
}
