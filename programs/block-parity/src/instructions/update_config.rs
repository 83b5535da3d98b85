use crate::{constants::*, error::BlockParityError, events::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub signer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED.as_bytes()],
        bump = ledger.bump
    )]
    pub ledger: Account<'info, Ledger>,
}

impl<'info> UpdateConfig<'info> {
    pub fn validate(
        &self,
        new_admin: Option<Pubkey>,
        new_target_offset: Option<u64>,
        new_min_stake: Option<u64>,
    ) -> Result<()> {
        require_keys_eq!(
            self.signer.key(),
            self.ledger.admin,
            BlockParityError::Unauthorized
        );

        if let Some(new_admin) = new_admin {
            require!(
                new_admin != self.ledger.admin,
                BlockParityError::InvalidNewAdmin
            );
        }

        if let Some(new_target_offset) = new_target_offset {
            require!(
                (MIN_TARGET_OFFSET..=MAX_TARGET_OFFSET).contains(&new_target_offset),
                BlockParityError::InvalidTargetOffset
            );
        }

        if let Some(new_min_stake) = new_min_stake {
            require!(new_min_stake > 0, BlockParityError::InvalidMinStake);
        }

        Ok(())
    }
}

/// Only future bets see a new offset. Stored target blocks never move.
pub fn handler(
    ctx: Context<UpdateConfig>,
    new_admin: Option<Pubkey>,
    new_target_offset: Option<u64>,
    new_min_stake: Option<u64>,
) -> Result<()> {
    // validate
    ctx.accounts
        .validate(new_admin, new_target_offset, new_min_stake)?;

    let ledger = &mut ctx.accounts.ledger;

    // set fields
    if let Some(new_admin) = new_admin {
        ledger.admin = new_admin;
    }
    if let Some(new_target_offset) = new_target_offset {
        ledger.target_offset = new_target_offset;
    }
    if let Some(new_min_stake) = new_min_stake {
        ledger.min_stake = new_min_stake;
    }

    // update config version
    ledger.bump_version()?;

    msg!(
        "Config updated to version {}, target offset: {}, min stake: {}",
        ledger.version,
        ledger.target_offset,
        ledger.min_stake
    );

    // emit event
    emit!(ConfigUpdated {
        admin: ledger.admin,
        ledger: ledger.key(),
        target_offset: ledger.target_offset,
        min_stake: ledger.min_stake,
        version: ledger.version,
    });

    Ok(())
}
