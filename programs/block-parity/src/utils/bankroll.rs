use crate::{constants::*, error::BlockParityError};
use anchor_lang::prelude::*;

/// Worst-case payout owed on every open bet.
pub fn calculate_reserved_liability(open_stake: u64) -> Result<u64> {
    open_stake
        .checked_mul(PAYOUT_MULTIPLIER)
        .ok_or(BlockParityError::Overflow.into())
}

/// Vault balance the admin may withdraw without uncovering an open bet.
/// Zero when the vault is already under-collateralised.
pub fn calculate_free_bankroll(vault_balance: u64, open_stake: u64) -> Result<u64> {
    let reserved = calculate_reserved_liability(open_stake)?;
    Ok(vault_balance.saturating_sub(reserved))
}
