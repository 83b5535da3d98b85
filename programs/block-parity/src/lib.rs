#![allow(unexpected_cfgs)]
#![allow(deprecated)]

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("EpDtxnv9pfeMpbHxK4rqufCQKENBik54rLy2X9miVwyB");

#[program]
pub mod block_parity {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>, target_offset: u64, min_stake: u64) -> Result<()> {
        initialize::handler(ctx, target_offset, min_stake)
    }

    pub fn update_config(
        ctx: Context<UpdateConfig>,
        new_admin: Option<Pubkey>,
        new_target_offset: Option<u64>,
        new_min_stake: Option<u64>,
    ) -> Result<()> {
        update_config::handler(ctx, new_admin, new_target_offset, new_min_stake)
    }

    pub fn pause_program(ctx: Context<PauseProgram>) -> Result<()> {
        pause_program::handler(ctx)
    }

    pub fn unpause_program(ctx: Context<UnpauseProgram>) -> Result<()> {
        unpause_program::handler(ctx)
    }

    pub fn fund_bankroll(ctx: Context<FundBankroll>, amount: u64) -> Result<()> {
        fund_bankroll::handler(ctx, amount)
    }

    pub fn withdraw_bankroll(ctx: Context<WithdrawBankroll>, amount: u64) -> Result<()> {
        withdraw_bankroll::handler(ctx, amount)
    }

    pub fn place_bet(ctx: Context<PlaceBet>, predict_even: bool, stake: u64) -> Result<u64> {
        place_bet::handler(ctx, predict_even, stake)
    }

    pub fn settle_bet(ctx: Context<SettleBet>, id: u64) -> Result<()> {
        settle_bet::handler(ctx, id)
    }

    pub fn get_bet(ctx: Context<GetBet>, id: u64) -> Result<Bet> {
        get_bet::handler(ctx, id)
    }

    pub fn get_player_bets(
        ctx: Context<GetPlayerBets>,
        player: Pubkey,
        page: u32,
    ) -> Result<Vec<u64>> {
        get_player_bets::handler(ctx, player, page)
    }
}
