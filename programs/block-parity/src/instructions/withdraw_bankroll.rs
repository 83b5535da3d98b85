use crate::{constants::*, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
pub struct WithdrawBankroll<'info> {
    pub signer: Signer<'info>,

    #[account(
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub recipient_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> WithdrawBankroll<'info> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        validate_bankroll_withdrawal(
            self.signer.key(),
            &self.ledger,
            self.recipient_token_account.mint,
            self.vault.amount,
            amount,
        )
    }
}

pub fn handler(ctx: Context<WithdrawBankroll>, amount: u64) -> Result<()> {
    // validate
    ctx.accounts.validate(amount)?;

    // transfer from vault to recipient
    transfer_from_vault(
        &ctx.accounts.token_program,
        &ctx.accounts.vault,
        &ctx.accounts.recipient_token_account,
        &ctx.accounts.ledger,
        amount,
    )?;

    ctx.accounts.vault.reload()?;
    let vault_balance = ctx.accounts.vault.amount;

    msg!("Bankroll withdrawn: {}, vault balance: {}", amount, vault_balance);

    // emit event
    emit!(BankrollWithdrawn {
        admin: ctx.accounts.signer.key(),
        recipient: ctx.accounts.recipient_token_account.owner,
        amount,
        vault_balance,
    });

    Ok(())
}
