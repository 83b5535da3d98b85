use crate::{constants::*, error::BlockParityError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct FundBankroll<'info> {
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
    pub funder_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> FundBankroll<'info> {
    pub fn validate(&self, amount: u64) -> Result<()> {
        require!(amount > 0, BlockParityError::InvalidAmount);

        require_keys_eq!(
            self.funder_token_account.mint,
            self.ledger.token_mint,
            BlockParityError::InvalidMint
        );

        require!(
            self.funder_token_account.amount >= amount,
            BlockParityError::InsufficientBalance
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<FundBankroll>, amount: u64) -> Result<()> {
    // validate
    ctx.accounts.validate(amount)?;

    // transfer from funder to vault
    let transfer_accounts = Transfer {
        from: ctx.accounts.funder_token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, amount)?;

    ctx.accounts.vault.reload()?;
    let vault_balance = ctx.accounts.vault.amount;

    msg!("Bankroll funded with {}, vault balance: {}", amount, vault_balance);

    // emit event
    emit!(BankrollFunded {
        funder: ctx.accounts.signer.key(),
        amount,
        vault_balance,
    });

    Ok(())
}
