use crate::{constants::*, error::BlockParityError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UnpauseProgram<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

impl<'info> UnpauseProgram<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.ledger.status != ProgramStatus::Active,
            BlockParityError::AlreadyActive
        );

        require_keys_eq!(
            self.signer.key(),
            self.ledger.admin,
            BlockParityError::Unauthorized
        );

        Ok(())
    }
}

pub fn handler(ctx: Context<UnpauseProgram>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let ledger = &mut ctx.accounts.ledger;

    // set fields
    ledger.status = ProgramStatus::Active;

    msg!(
        "Program unpaused, accepting bets from id {}, open bets: {}",
        ledger.next_bet_id()?,
        ledger.open_bets
    );

    // emit event
    emit!(ProgramUnpaused {
        admin: ctx.accounts.signer.key(),
        ledger: ledger.key(),
        open_bets: ledger.open_bets,
        open_stake: ledger.open_stake,
    });

    Ok(())
}
