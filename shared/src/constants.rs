//! Harness constants

/// Storage key for the persisted wallet state. The suffix is the schema version.
pub const STATE_KEY: &str = "baint_test_state_v1";

/// Maximum number of transactions kept in history.
pub const MAX_TX_HISTORY: usize = 50;

/// EIP-1193 error code for "chain not added to wallet".
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;

/// Decimals of every preset's native currency.
pub const NATIVE_DECIMALS: u8 = 18;

/// Interval between `eth_getTransactionReceipt` polls while waiting for confirmation.
pub const RECEIPT_POLL_INTERVAL_MS: u32 = 1500;

/// Prefix that marks locally fabricated transaction hashes.
pub const MOCK_HASH_PREFIX: &str = "local_";

/// Length of the random part of a mock hash.
pub const MOCK_HASH_LEN: usize = 7;

/// Balance display is cut to this many characters.
pub const BALANCE_DISPLAY_LEN: usize = 12;

/// Placeholder shown when a value is unknown.
pub const PLACEHOLDER: &str = "—";

// Address abbreviation
pub const ADDRESS_PREFIX_LEN: usize = 8;
pub const ADDRESS_SUFFIX_LEN: usize = 6;
