use crate::{constants::*, error::BlockParityError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct SettleBet<'info> {
    /// Anyone may settle. The payout still goes to `bet.player`.
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        mut,
        seeds = [BET_SEED.as_bytes(), &id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        mut,
        seeds = [PLAYER_SEED.as_bytes(), bet.player.as_ref()],
        bump = player_profile.bump
    )]
    pub player_profile: Account<'info, PlayerProfile>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub player_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> SettleBet<'info> {
    pub fn validate(&self, id: u64) -> Result<()> {
        require!(self.bet.id == id, BlockParityError::InvalidBetId);

        validate_payout_account(
            self.player_token_account.owner,
            self.player_token_account.mint,
            &self.bet,
            &self.ledger,
        )?;

        Ok(())
    }
}

pub fn handler(ctx: Context<SettleBet>, id: u64) -> Result<()> {
    // validate
    ctx.accounts.validate(id)?;

    let current_slot = Clock::get()?.slot;
    let settled_by = ctx.accounts.signer.key();

    // decide outcome
    let bet = &mut ctx.accounts.bet;
    let settlement = bet.settle(current_slot, settled_by)?;
    let stake = bet.stake;
    let player = bet.player;

    // pay winner from vault
    if settlement.won {
        require!(
            ctx.accounts.vault.amount >= settlement.payout,
            BlockParityError::InsufficientBankroll
        );

        transfer_from_vault(
            &ctx.accounts.token_program,
            &ctx.accounts.vault,
            &ctx.accounts.player_token_account,
            &ctx.accounts.ledger,
            settlement.payout,
        )?;
    }

    // release custody
    ctx.accounts
        .ledger
        .record_settlement(stake, settlement.payout)?;
    ctx.accounts
        .player_profile
        .record_settlement(settlement.won, settlement.payout)?;

    msg!(
        "Bet {} settled by {}, player: {}, won: {}, payout: {}",
        id,
        settled_by,
        player,
        settlement.won,
        settlement.payout
    );

    // emit event
    emit!(BetSettled {
        id,
        player,
        won: settlement.won,
        payout: settlement.payout,
    });

    Ok(())
}
