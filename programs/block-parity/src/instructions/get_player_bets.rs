use crate::{error::BlockParityError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
#[instruction(player: Pubkey, page: u32)]
pub struct GetPlayerBets<'info> {
    /// None when the player has never reached this page.
    pub player_bets: Option<Account<'info, PlayerBets>>,
}

impl<'info> GetPlayerBets<'info> {
    pub fn validate(&self, player: Pubkey, page: u32) -> Result<()> {
        if let Some(player_bets) = &self.player_bets {
            require_keys_eq!(
                player_bets.player,
                player,
                BlockParityError::InvalidPlayerBetsPage
            );

            require!(
                player_bets.page == page,
                BlockParityError::InvalidPlayerBetsPage
            );
        }

        Ok(())
    }
}

/// One page of the player's bet ids, oldest first. Pages are
/// `PLAYER_BETS_PAGE_SIZE` long; a short page is the last one.
pub fn handler(ctx: Context<GetPlayerBets>, player: Pubkey, page: u32) -> Result<Vec<u64>> {
    // validate
    ctx.accounts.validate(player, page)?;

    Ok(ctx
        .accounts
        .player_bets
        .as_ref()
        .map(|player_bets| player_bets.bet_ids.clone())
        .unwrap_or_default())
}
