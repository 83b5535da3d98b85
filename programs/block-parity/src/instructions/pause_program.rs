use crate::{constants::*, error::BlockParityError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct PauseProgram<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

impl<'info> PauseProgram<'info> {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.ledger.status != ProgramStatus::Paused,
            BlockParityError::AlreadyPaused
        );

        require_keys_eq!(
            self.signer.key(),
            self.ledger.admin,
            BlockParityError::Unauthorized
        );

        Ok(())
    }
}

/// Stops new bets. Open bets can still be settled.
pub fn handler(ctx: Context<PauseProgram>) -> Result<()> {
    // validate
    ctx.accounts.validate()?;

    let ledger = &mut ctx.accounts.ledger;

    // set fields
    ledger.status = ProgramStatus::Paused;

    msg!(
        "Program paused, {} open bets staking {} remain settleable",
        ledger.open_bets,
        ledger.open_stake
    );

    // emit event
    emit!(ProgramPaused {
        admin: ctx.accounts.signer.key(),
        ledger: ledger.key(),
        open_bets: ledger.open_bets,
        open_stake: ledger.open_stake,
    });

    Ok(())
}
