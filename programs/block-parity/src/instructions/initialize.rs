use crate::{constants::*, error::BlockParityError, events::*, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED.as_bytes()],
        bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = signer,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump,
        token::mint = mint,
        token::authority = ledger,
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn validate(&self, target_offset: u64, min_stake: u64) -> Result<()> {
        require!(
            (MIN_TARGET_OFFSET..=MAX_TARGET_OFFSET).contains(&target_offset),
            BlockParityError::InvalidTargetOffset
        );

        require!(min_stake > 0, BlockParityError::InvalidMinStake);

        Ok(())
    }
}

pub fn handler(ctx: Context<Initialize>, target_offset: u64, min_stake: u64) -> Result<()> {
    // validate
    ctx.accounts.validate(target_offset, min_stake)?;

    let ledger = &mut ctx.accounts.ledger;

    // set fields
    ledger.admin = ctx.accounts.signer.key();
    ledger.token_mint = ctx.accounts.mint.key();
    ledger.vault = ctx.accounts.vault.key();
    ledger.target_offset = target_offset;
    ledger.min_stake = min_stake;
    ledger.status = ProgramStatus::Active;
    ledger.bet_counter = 0;
    ledger.open_bets = 0;
    ledger.open_stake = 0;
    ledger.total_wagered = 0;
    ledger.total_paid_out = 0;
    ledger.version = 0;
    ledger.bump = ctx.bumps.ledger;
    ledger.vault_bump = ctx.bumps.vault;

    msg!(
        "Ledger initialized, mint: {}, target offset: {}, min stake: {}",
        ledger.token_mint,
        target_offset,
        min_stake
    );

    // emit event
    emit!(LedgerInitialized {
        admin: ledger.admin,
        ledger: ledger.key(),
        token_mint: ledger.token_mint,
        vault: ledger.vault,
        target_offset,
        min_stake,
    });

    Ok(())
}
