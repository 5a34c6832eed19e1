//! # Formatting and Validation Helpers
//!
//! ## Address Formatting
//!
//! - [`format_address`] - first N and last M characters joined by `...`
//! - [`abbreviate_address`] - account panel form (8 + 6), `—` when absent
//!
//! ## Amounts
//!
//! - [`parse_amount`] - decimal native amount to wei
//! - [`format_balance`] - wei to a truncated decimal string with unit
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4";
//! assert_eq!(format_address(address, 8, 6), "0x5B38Da...beddC4");
//! ```

use alloy_primitives::utils::{format_ether, parse_units, ParseUnits};
use alloy_primitives::U256;
use chrono::{DateTime, Local, TimeZone};
use uuid::Uuid;

use crate::constants::{
    ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN, BALANCE_DISPLAY_LEN, MOCK_HASH_LEN, MOCK_HASH_PREFIX,
    PLACEHOLDER,
};
use crate::error::{Result, WalletError};

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x5B38Da6a701c568545dCfcB03FcB875f56beddC4";
/// assert_eq!(format_address(addr, 4, 4), "0x5B...ddC4");
/// assert_eq!(format_address("0xabc", 8, 6), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    // Hex addresses are ASCII, but guard the slice boundaries anyway
    if address_len <= prefix_len + suffix_len
        || !address.is_char_boundary(prefix_len)
        || !address.is_char_boundary(address_len - suffix_len)
    {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Account panel address: 8 + 6 characters, or `—` when not connected.
pub fn abbreviate_address(address: Option<&str>) -> String {
    match address {
        Some(addr) if !addr.is_empty() => format_address(addr, ADDRESS_PREFIX_LEN, ADDRESS_SUFFIX_LEN),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Convert a decimal native amount (e.g. `"1.5"`) to wei. Negative amounts are
/// rejected.
pub fn parse_amount(amount: &str) -> Result<U256> {
    match parse_units(amount, "ether") {
        Ok(ParseUnits::U256(wei)) => Ok(wei),
        Ok(ParseUnits::I256(wei)) if !wei.is_negative() => Ok(wei.into_raw()),
        Ok(ParseUnits::I256(_)) => Err(WalletError::InvalidAmount(format!("{amount}: negative amount"))),
        Err(e) => Err(WalletError::InvalidAmount(format!("{amount}: {e}"))),
    }
}

/// Wei balance as an ether decimal cut to 12 characters, followed by `unit`.
/// Trailing zeros are dropped, keeping one digit after the point.
///
/// ```rust
/// use alloy_primitives::U256;
/// use shared::utils::format_balance;
///
/// let one_and_half = U256::from(1_500_000_000_000_000_000u128);
/// assert_eq!(format_balance(one_and_half, "tETH"), "1.5 tETH");
/// ```
pub fn format_balance(wei: U256, unit: &str) -> String {
    let ether = trim_fraction(&format_ether(wei));
    let shown: String = ether.chars().take(BALANCE_DISPLAY_LEN).collect();
    format!("{} {}", shown, unit)
}

fn trim_fraction(decimal: &str) -> String {
    let Some((whole, fraction)) = decimal.split_once('.') else {
        return decimal.to_string();
    };
    match fraction.trim_end_matches('0') {
        "" => format!("{whole}.0"),
        fraction => format!("{whole}.{fraction}"),
    }
}

/// Epoch millis as `YYYY-MM-DD HH:MM:SS` in the local timezone.
pub fn format_timestamp(millis: i64) -> String {
    format_timestamp_in(millis, &Local)
}

pub fn format_timestamp_in<Tz: TimeZone>(millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp_millis(millis) {
        Some(utc) => utc.with_timezone(tz).format("%Y-%m-%d %H:%M:%S").to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Parse an EIP-1193 hex quantity such as `"0xaa36a7"`.
pub fn parse_hex_u64(quantity: &str) -> Result<u64> {
    let digits = quantity
        .strip_prefix("0x")
        .or_else(|| quantity.strip_prefix("0X"))
        .ok_or_else(|| WalletError::Decode(format!("not a hex quantity: {quantity}")))?;
    u64::from_str_radix(digits, 16)
        .map_err(|e| WalletError::Decode(format!("{quantity}: {e}")))
}

/// Current time in epoch millis.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Trim and check send form input: recipient must be a non-empty `0x` string,
/// amount must be non-empty. Numeric range and checksums are not checked.
pub fn validate_send_input(to: &str, amount: &str) -> Result<(String, String)> {
    let to = to.trim();
    let amount = amount.trim();

    if to.is_empty() || !to.starts_with("0x") || amount.is_empty() {
        return Err(WalletError::InvalidInput(
            "Enter valid recipient and amount".to_string(),
        ));
    }

    Ok((to.to_string(), amount.to_string()))
}

/// Random mock amount in `[0, 10)` with four decimals.
pub fn random_mock_amount() -> String {
    mock_amount_from(Uuid::new_v4())
}

/// Random `local_` pseudo-hash.
pub fn random_mock_hash() -> String {
    mock_hash_from(Uuid::new_v4())
}

fn mock_amount_from(seed: Uuid) -> String {
    let ten_thousandths = (seed.as_u128() % 100_000) as u32;
    format!("{}.{:04}", ten_thousandths / 10_000, ten_thousandths % 10_000)
}

fn mock_hash_from(seed: Uuid) -> String {
    let simple = seed.simple().to_string();
    format!("{}{}", MOCK_HASH_PREFIX, &simple[..MOCK_HASH_LEN])
}
