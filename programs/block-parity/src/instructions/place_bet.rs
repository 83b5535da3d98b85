use crate::{constants::*, error::BlockParityError, events::*, state::*, utils::*};
use anchor_lang::prelude::*;
use anchor_lang::solana_program::program_option::COption;
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(mut)]
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,

    #[account(
        init,
        payer = signer,
        space = DISCRIMINATOR_SIZE + Bet::INIT_SPACE,
        seeds = [BET_SEED.as_bytes(), &ledger.next_bet_seed().to_le_bytes()],
        bump
    )]
    pub bet: Account<'info, Bet>,

    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + PlayerProfile::INIT_SPACE,
        seeds = [PLAYER_SEED.as_bytes(), signer.key().as_ref()],
        bump
    )]
    pub player_profile: Account<'info, PlayerProfile>,

    #[account(
        init_if_needed,
        payer = signer,
        space = DISCRIMINATOR_SIZE + PlayerBets::INIT_SPACE,
        seeds = [
            PLAYER_BETS_SEED.as_bytes(),
            signer.key().as_ref(),
            &player_profile.current_page().to_le_bytes()
        ],
        bump
    )]
    pub player_bets: Account<'info, PlayerBets>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), ledger.key().as_ref()],
        bump = ledger.vault_bump
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(mut)]
    pub token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> PlaceBet<'info> {
    pub fn stake_source(&self) -> StakeSource {
        StakeSource {
            mint: self.token_account.mint,
            owner: self.token_account.owner,
            amount: self.token_account.amount,
            delegate: match self.token_account.delegate {
                COption::Some(delegate) => Some(delegate),
                COption::None => None,
            },
            delegated_amount: self.token_account.delegated_amount,
        }
    }

    pub fn validate(&self, stake: u64) -> Result<()> {
        validate_bet_terms(&self.ledger, stake)?;

        validate_stake_source(
            &self.stake_source(),
            self.signer.key(),
            stake,
            self.ledger.token_mint,
        )?;

        Ok(())
    }
}

pub fn handler(ctx: Context<PlaceBet>, predict_even: bool, stake: u64) -> Result<u64> {
    // validate
    ctx.accounts.validate(stake)?;

    // transfer to vault, signed by the owner or its delegate
    let transfer_accounts = Transfer {
        from: ctx.accounts.token_account.to_account_info(),
        to: ctx.accounts.vault.to_account_info(),
        authority: ctx.accounts.signer.to_account_info(),
    };
    let transfer_ctx = CpiContext::new(
        ctx.accounts.token_program.to_account_info(),
        transfer_accounts,
    );
    transfer(transfer_ctx, stake)?;

    let player = ctx.accounts.signer.key();
    let current_slot = Clock::get()?.slot;
    let ledger = &mut ctx.accounts.ledger;
    let bet = &mut ctx.accounts.bet;

    // assign id and book custody
    let id = ledger.record_bet(stake)?;
    bet.open(
        id,
        player,
        stake,
        predict_even,
        current_slot,
        ledger.target_offset,
        ctx.bumps.bet,
    )?;

    // index the bet under the player
    let profile = &mut ctx.accounts.player_profile;
    if profile.player == Pubkey::default() {
        profile.player = player;
        profile.bump = ctx.bumps.player_profile;
    }
    let page = profile.current_page();

    let player_bets = &mut ctx.accounts.player_bets;
    if player_bets.player == Pubkey::default() {
        player_bets.player = player;
        player_bets.page = page;
        player_bets.bump = ctx.bumps.player_bets;
    }
    require!(
        player_bets.page == page,
        BlockParityError::InvalidPlayerBetsPage
    );
    player_bets.push(id)?;
    profile.record_bet(stake)?;

    msg!(
        "Bet {} placed, player: {}, stake: {}, target block: {}, predict even: {}",
        id,
        player,
        stake,
        bet.target_block,
        predict_even
    );

    // emit event
    emit!(BetPlaced {
        id,
        player,
        stake,
        target_block: bet.target_block,
        predict_even,
    });

    Ok(id)
}
