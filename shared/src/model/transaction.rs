use serde::{Deserialize, Serialize};

/// Direction of a history entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TxKind {
    Send,
    Receive,
}

impl TxKind {
    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Send => "Send",
            TxKind::Receive => "Receive",
        }
    }
}

/// One transaction history entry.
///
/// Entries are never edited after insertion and carry no unique key; two
/// identical records are two entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TxRecord {
    #[serde(rename = "type")]
    pub kind: TxKind,
    #[serde(default)]
    pub to: String,
    /// Decimal amount in native units, exactly as entered.
    #[serde(default)]
    pub amount: String,
    /// Transaction hash, or a `local_` pseudo-hash for mock entries.
    #[serde(default)]
    pub hash: String,
    /// Epoch milliseconds.
    pub time: i64,
}

impl TxRecord {
    pub fn send(to: impl Into<String>, amount: impl Into<String>, hash: impl Into<String>, time: i64) -> Self {
        Self {
            kind: TxKind::Send,
            to: to.into(),
            amount: amount.into(),
            hash: hash.into(),
            time,
        }
    }

    pub fn receive(to: impl Into<String>, amount: impl Into<String>, hash: impl Into<String>, time: i64) -> Self {
        Self {
            kind: TxKind::Receive,
            to: to.into(),
            amount: amount.into(),
            hash: hash.into(),
            time,
        }
    }

    /// Whether the hash was fabricated locally rather than returned by a wallet.
    pub fn is_mock(&self) -> bool {
        self.hash.starts_with(crate::constants::MOCK_HASH_PREFIX)
    }
}
