use {
    serde::{Deserialize, Serialize},
    strum::IntoEnumIterator,
    strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr},
};

/// A chargeable dimension of a transaction.
///
/// The set is closed: schedule entries naming anything else are dropped when
/// the schedule is prepared, so newer schedules keep loading on older nodes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Extra {
    /// Verified signatures on the signed transaction.
    Signatures,
    /// Serialized size of the signed transaction.
    Bytes,
    /// Keys set or replaced by the transaction.
    Keys,
    /// Accounts referenced by the transaction.
    Accounts,
    ProcessingBytes,
    StateBytes,
    TokenTypes,
    StandardFungibleTokens,
    StandardNonFungibleTokens,
    CustomFeeFungibleTokens,
    CustomFeeNonFungibleTokens,
    CustomFee,
    NftSerials,
    Allowances,
    CreatedAccounts,
    CreatedAutoAssociations,
    HookExecution,
    HookUpdates,
    Gas,
    TokenAssociate,
    TokenMintNft,
    ScheduleCreateContractCallBase,
}

impl Extra {
    /// Resolve a schedule name such as `"SIGNATURES"` or `"signatures"`.
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Canonical schedule name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}
