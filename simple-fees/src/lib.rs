//! # TRv1 Simple Fees
//!
//! A reference implementation of the **simple fee schedule**: every
//! transaction pays a *node* fee, a *network* fee and a *service* fee, each
//! with a free allowance of chargeable "extras" (signatures, bytes, keys, …)
//! beyond which every unit is priced.
//!
//! The pipeline runs one way:
//!
//! 1. [`schedule`] loads a JSON schedule into a [`RawSchedule`], applying
//!    defaults and rejecting malformed values.
//! 2. [`prepared`] resolves names into a [`PreparedSchedule`] of lookup tables,
//!    dropping extras and operations it does not recognize.
//! 3. [`calculator`] computes a [`FeeBreakdown`] for one transaction.
//! 4. [`policy`] decides how much of that breakdown the payer owes.
//!
//! All fee arithmetic saturates at `u64::MAX`.
//!
//! ## Quick start
//!
//! ```rust
//! use trv1_simple_fees::{
//!     calculator::compute, policy::resolve, prepare, Api, ChargePolicy, ExtrasCount, RawSchedule,
//! };
//!
//! let raw: RawSchedule = r#"{
//!     "node": { "baseFee": 1000, "extras": [ { "name": "SIGNATURES", "includedCount": 1 } ] },
//!     "network": { "multiplier": 2 },
//!     "extras": [ { "name": "SIGNATURES", "fee": 100000 } ],
//!     "services": [ { "name": "Crypto", "schedule": [ { "name": "CryptoCreate", "baseFee": 499000000 } ] } ]
//! }"#
//! .parse()
//! .unwrap();
//! let prepared = prepare(&raw);
//!
//! let fees = compute(&prepared, Api::CryptoCreate, &ExtrasCount::new().signatures(2));
//! assert_eq!(fees.node, 101_000);
//! assert_eq!(fees.network, 202_000);
//! assert_eq!(resolve(&fees, ChargePolicy::NodeAndNetworkOnly), 303_000);
//! ```

pub mod api;
pub mod breakdown;
pub mod calculator;
pub mod error;
pub mod extra;
pub mod params;
pub mod policy;
pub mod prepared;
pub mod schedule;
pub mod units;


// Re-exports for convenience.
pub use {
    api::{Api, Operation},
    breakdown::FeeBreakdown,
    calculator::compute,
    error::ScheduleFormatError,
    extra::Extra,
    params::ExtrasCount,
    policy::{compute_with_policy, resolve, ChargePolicy, ChargeScenario, Charges},
    prepared::{prepare, prepare_for, PreparedSchedule},
    schedule::RawSchedule,
};
