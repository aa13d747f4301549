use {
    crate::units::tinycents_to_usd,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Component breakdown of one transaction's fee, in tinycents.
///
/// All sums and products were saturated at `u64::MAX`:
/// - `node = node_base + node_extras`
/// - `network = network_multiplier × node`
/// - `service = service_base + service_extras`
/// - `total = node + network + service`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct FeeBreakdown {
    /// Node fee, inclusive of `node_extras`.
    pub node: u64,
    /// Charge for extras beyond the node allowance.
    pub node_extras: u64,
    /// Network fee.
    pub network: u64,
    /// Service fee, inclusive of `service_extras`.
    pub service: u64,
    /// Charge for extras beyond the operation's allowance.
    pub service_extras: u64,
    pub total: u64,
}

impl FeeBreakdown {
    /// Node plus network fee, the part owed when the service never ran.
    #[inline]
    pub fn node_and_network(&self) -> u64 {
        self.node.saturating_add(self.network)
    }

    pub fn node_usd(&self) -> f64 {
        tinycents_to_usd(self.node)
    }

    pub fn network_usd(&self) -> f64 {
        tinycents_to_usd(self.network)
    }

    pub fn service_usd(&self) -> f64 {
        tinycents_to_usd(self.service)
    }

    pub fn total_usd(&self) -> f64 {
        tinycents_to_usd(self.total)
    }
}
