use {
    crate::extra::Extra,
    serde::{Deserialize, Serialize},
    std::collections::{btree_map, BTreeMap},
};

/// Observed count of each extra for one transaction.
///
/// The engine trusts these numbers; deriving them from the signed transaction
/// is the caller's job.
///
/// ```
/// use trv1_simple_fees::{Extra, ExtrasCount};
///
/// let counts = ExtrasCount::new().signatures(3).keys(2).bytes(150);
/// assert_eq!(counts.get(Extra::Keys), 2);
/// assert_eq!(counts.get(Extra::Accounts), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtrasCount(BTreeMap<Extra, u64>);

impl ExtrasCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ExtrasCount::set`].
    #[must_use]
    pub fn with(mut self, extra: Extra, count: u64) -> Self {
        self.set(extra, count);
        self
    }

    #[must_use]
    pub fn signatures(self, count: u64) -> Self {
        self.with(Extra::Signatures, count)
    }

    #[must_use]
    pub fn bytes(self, count: u64) -> Self {
        self.with(Extra::Bytes, count)
    }

    #[must_use]
    pub fn keys(self, count: u64) -> Self {
        self.with(Extra::Keys, count)
    }

    #[must_use]
    pub fn accounts(self, count: u64) -> Self {
        self.with(Extra::Accounts, count)
    }

    #[must_use]
    pub fn processing_bytes(self, count: u64) -> Self {
        self.with(Extra::ProcessingBytes, count)
    }

    #[must_use]
    pub fn state_bytes(self, count: u64) -> Self {
        self.with(Extra::StateBytes, count)
    }

    #[must_use]
    pub fn token_types(self, count: u64) -> Self {
        self.with(Extra::TokenTypes, count)
    }

    #[must_use]
    pub fn nft_serials(self, count: u64) -> Self {
        self.with(Extra::NftSerials, count)
    }

    #[must_use]
    pub fn hook_execution(self, count: u64) -> Self {
        self.with(Extra::HookExecution, count)
    }

    #[must_use]
    pub fn gas(self, count: u64) -> Self {
        self.with(Extra::Gas, count)
    }

    /// Record the count of `extra`, replacing any earlier value.
    pub fn set(&mut self, extra: Extra, count: u64) -> Option<u64> {
        self.0.insert(extra, count)
    }

    /// Count of `extra`, zero when it was never recorded.
    pub fn get(&self, extra: Extra) -> u64 {
        self.0.get(&extra).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Extra, u64)> + '_ {
        self.0.iter().map(|(extra, count)| (*extra, *count))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Extra, u64)> for ExtrasCount {
    fn from_iter<I: IntoIterator<Item = (Extra, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(Extra, u64); N]> for ExtrasCount {
    fn from(counts: [(Extra, u64); N]) -> Self {
        counts.into_iter().collect()
    }
}

impl IntoIterator for ExtrasCount {
    type Item = (Extra, u64);
    type IntoIter = btree_map::IntoIter<Extra, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
