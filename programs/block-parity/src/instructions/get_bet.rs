use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct GetBet<'info> {
    #[account(
        seeds = [BET_SEED.as_bytes(), &id.to_le_bytes()],
        bump = bet.bump
    )]
    pub bet: Account<'info, Bet>,
}

pub fn handler(ctx: Context<GetBet>, _id: u64) -> Result<Bet> {
    Ok((*ctx.accounts.bet).clone())
}
