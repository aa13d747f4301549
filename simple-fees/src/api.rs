use {
    serde::{Deserialize, Serialize},
    std::{fmt::Debug, hash::Hash},
    strum_macros::{Display, EnumIter, EnumString, IntoStaticStr},
};

/// An operation identifier a fee schedule can price.
///
/// The preparer is generic over this so that a caller with its own operation
/// type decides which schedule entries are recognized.
pub trait Operation: Copy + Eq + Hash + Debug {
    /// Resolve a schedule name, returning `None` for names this type does not know.
    fn from_name(name: &str) -> Option<Self>;
}

/// Node functionalities, named as they appear in the fee schedule.
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
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum Api {
    // Crypto
    CryptoCreate,
    CryptoUpdate,
    CryptoDelete,
    CryptoTransfer,
    CryptoApproveAllowance,
    CryptoDeleteAllowance,
    CryptoAddLiveHash,
    CryptoDeleteLiveHash,
    CryptoGetAccountBalance,
    CryptoGetAccountRecords,
    CryptoGetInfo,
    CryptoGetLiveHash,
    CryptoGetStakers,
    CryptoAccountAutoRenew,
    GetAccountDetails,

    // Consensus
    ConsensusCreateTopic,
    ConsensusUpdateTopic,
    ConsensusDeleteTopic,
    ConsensusSubmitMessage,
    ConsensusGetTopicInfo,

    // File
    FileCreate,
    FileUpdate,
    FileAppend,
    FileDelete,
    FileGetContents,
    FileGetInfo,
    SystemDelete,
    SystemUndelete,

    // Token
    TokenCreate,
    TokenUpdate,
    TokenDelete,
    TokenMint,
    TokenBurn,
    TokenAccountWipe,
    TokenFreezeAccount,
    TokenUnfreezeAccount,
    TokenGrantKycToAccount,
    TokenRevokeKycFromAccount,
    TokenAssociateToAccount,
    TokenDissociateFromAccount,
    TokenPause,
    TokenUnpause,
    TokenFeeScheduleUpdate,
    TokenUpdateNfts,
    TokenAirdrop,
    TokenClaimAirdrop,
    TokenCancelAirdrop,
    TokenReject,
    TokenGetInfo,
    TokenGetNftInfo,
    TokenGetNftInfos,
    TokenGetAccountNftInfos,

    // Schedule
    ScheduleCreate,
    ScheduleSign,
    ScheduleDelete,
    ScheduleGetInfo,

    // Smart contracts
    ContractCreate,
    ContractUpdate,
    ContractDelete,
    ContractCall,
    ContractCallLocal,
    ContractGetInfo,
    ContractGetBytecode,
    ContractGetRecords,
    ContractAutoRenew,
    #[serde(rename = "GetBySolidityID")]
    #[strum(serialize = "GetBySolidityID")]
    GetBySolidityId,
    GetByKey,
    EthereumTransaction,
    HookStore,
    HookDispatch,

    // Records and receipts
    TransactionGetReceipt,
    TransactionGetRecord,
    TransactionGetFastRecord,
    CreateTransactionRecord,

    // Network and node administration
    Freeze,
    UncheckedSubmit,
    GetVersionInfo,
    NetworkGetExecutionTime,
    NodeCreate,
    NodeUpdate,
    NodeDelete,
    NodeStakeUpdate,
    StateSignatureTransaction,
    HintsKeyPublication,
    HintsPreprocessingVote,
    HintsPartialSignature,
    HistoryAssemblySignature,
    HistoryProofKeyPublication,
    HistoryProofVote,
    CrsPublication,
    UtilPrng,
    AtomicBatch,
}

impl Operation for Api {
    fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl Api {
    pub fn name(self) -> &'static str {
        self.into()
    }
}
