//! What the payer owes, depending on where a transaction stopped.
//!
//! A transaction that fails before the node did any work for the payer costs
//! nothing. One that the node accepted but which failed due diligence costs
//! the node and network fees, since the network still validated and
//! propagated it. One that reached handling pays the full fee, whether it
//! succeeded or not.

use {
    crate::{
        api::Operation, breakdown::FeeBreakdown, calculator::compute, params::ExtrasCount,
        prepared::PreparedSchedule, units::tinycents_to_usd,
    },
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

/// Which fee components the payer is charged.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
    Display,
    EnumIter,
    IntoStaticStr,
)]
pub enum ChargePolicy {
    /// The whole `total`.
    FullCharge,
    /// Nothing. The breakdown is still computed for diagnostics.
    ZeroPayer,
    /// `node + network`, without the service fee.
    NodeAndNetworkOnly,
}

/// The named outcomes a transaction can reach in the ingest/pre-handle/handle
/// pipeline, each charged under exactly one [`ChargePolicy`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ChargeScenario {
    /// The submitted bytes could not be parsed as a transaction.
    UnreadableBytesZeroPayer,
    /// Rejected by the receiving node's ingest checks.
    InvalidTxnAtIngestZeroPayer,
    /// Rejected during pre-handle.
    InvalidTxnAtPreHandleZeroPayer,
    /// Reached handling and failed there.
    UnhandledTxnFullCharge,
    /// Reached handling and succeeded.
    SuccessTxnFullCharge,
    /// Failed the node's due diligence after submission, e.g. an invalid payer
    /// signature; the service never ran.
    UnhandledTxnNodeAndNetworkCharge,
}

impl ChargeScenario {
    pub fn policy(self) -> ChargePolicy {
        match self {
            Self::UnreadableBytesZeroPayer
            | Self::InvalidTxnAtIngestZeroPayer
            | Self::InvalidTxnAtPreHandleZeroPayer => ChargePolicy::ZeroPayer,
            Self::UnhandledTxnFullCharge | Self::SuccessTxnFullCharge => ChargePolicy::FullCharge,
            Self::UnhandledTxnNodeAndNetworkCharge => ChargePolicy::NodeAndNetworkOnly,
        }
    }
}

impl From<ChargeScenario> for ChargePolicy {
    fn from(scenario: ChargeScenario) -> Self {
        scenario.policy()
    }
}

/// Amount the payer owes under `policy`.
pub fn resolve(breakdown: &FeeBreakdown, policy: ChargePolicy) -> u64 {
    match policy {
        ChargePolicy::FullCharge => breakdown.total,
        ChargePolicy::ZeroPayer => 0,
        ChargePolicy::NodeAndNetworkOnly => breakdown.node_and_network(),
    }
}

/// A fee breakdown together with what the payer was actually charged.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct Charges {
    pub breakdown: FeeBreakdown,
    pub policy: ChargePolicy,
    pub payer_charged: u64,
}

impl Charges {
    pub fn payer_usd(&self) -> f64 {
        tinycents_to_usd(self.payer_charged)
    }
}

/// [`compute`] followed by [`resolve`].
pub fn compute_with_policy<Op: Operation>(
    prepared: &PreparedSchedule<Op>,
    api: Op,
    extras_count: &ExtrasCount,
    policy: impl Into<ChargePolicy>,
) -> Charges {
    let policy = policy.into();
    let breakdown = compute(prepared, api, extras_count);
    Charges {
        breakdown,
        policy,
        payer_charged: resolve(&breakdown, policy),
    }
}
