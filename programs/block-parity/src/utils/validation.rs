use crate::{constants::*, error::BlockParityError, state::*, utils::*};
use anchor_lang::prelude::*;

/// The token account fields a stake is drawn against.
#[derive(Clone, Copy, Debug)]
pub struct StakeSource {
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub delegate: Option<Pubkey>,
    pub delegated_amount: u64,
}

pub fn validate_bet_terms(ledger: &Ledger, stake: u64) -> Result<()> {
    require!(
        ledger.status == ProgramStatus::Active,
        BlockParityError::ProgramPaused
    );

    require!(stake > 0, BlockParityError::ZeroStake);

    require!(
        stake >= ledger.min_stake,
        BlockParityError::StakeBelowMinimum
    );

    Ok(())
}

/// The signer must own the source account or be its delegate with enough
/// allowance left. The token program enforces the same rule on transfer.
pub fn validate_stake_source(
    source: &StakeSource,
    signer: Pubkey,
    stake: u64,
    token_mint: Pubkey,
) -> Result<()> {
    require_keys_eq!(source.mint, token_mint, BlockParityError::InvalidMint);

    require!(
        source.amount >= stake,
        BlockParityError::InsufficientBalance
    );

    if source.owner == signer {
        return Ok(());
    }

    require!(
        source.delegate == Some(signer),
        BlockParityError::Unauthorized
    );

    require!(
        source.delegated_amount >= stake,
        BlockParityError::InsufficientAllowance
    );

    Ok(())
}

/// Payouts go to the bet's player whoever triggers settlement.
pub fn validate_payout_account(
    owner: Pubkey,
    mint: Pubkey,
    bet: &Bet,
    ledger: &Ledger,
) -> Result<()> {
    require_keys_eq!(owner, bet.player, BlockParityError::InvalidPayoutAccount);

    require_keys_eq!(mint, ledger.token_mint, BlockParityError::InvalidMint);

    Ok(())
}

pub fn validate_bankroll_withdrawal(
    signer: Pubkey,
    ledger: &Ledger,
    recipient_mint: Pubkey,
    vault_balance: u64,
    amount: u64,
) -> Result<()> {
    require_keys_eq!(signer, ledger.admin, BlockParityError::Unauthorized);

    require!(amount > 0, BlockParityError::InvalidAmount);

    require_keys_eq!(
        recipient_mint,
        ledger.token_mint,
        BlockParityError::InvalidMint
    );

    // open bets stay covered at their full payout
    let free_bankroll = calculate_free_bankroll(vault_balance, ledger.open_stake)?;
    require!(
        amount <= free_bankroll,
        BlockParityError::InsufficientBankroll
    );

    Ok(())
}
