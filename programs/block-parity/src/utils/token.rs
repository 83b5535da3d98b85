use crate::{constants::*, state::Ledger};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

/// Moves `amount` out of the vault. The ledger PDA signs as vault authority.
pub fn transfer_from_vault<'info>(
    token_program: &Program<'info, Token>,
    vault: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    ledger: &Account<'info, Ledger>,
    amount: u64,
) -> Result<()> {
    let ledger_bump = ledger.bump;
    let seeds = &[LEDGER_SEED.as_bytes(), &[ledger_bump]];
    let signer = &[&seeds[..]];

    let transfer_accounts = Transfer {
        from: vault.to_account_info(),
        to: to.to_account_info(),
        authority: ledger.to_account_info(),
    };
    let transfer_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        transfer_accounts,
        signer,
    );
    transfer(transfer_ctx, amount)
}
