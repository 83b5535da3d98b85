use crate::{constants::*, error::BlockParityError, utils::*};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Bet {
    // --- Identify ---
    pub id: u64,        // The unique identifier of the bet, assigned from ledger.bet_counter.
    pub player: Pubkey, // The address of the player placing the bet. Always the payout recipient.

    // --- Bet Info ---
    pub stake: u64,         // The amount of settlement token staked.
    pub target_block: u64,  // The slot whose parity decides the bet. Never mutated.
    pub predict_even: bool, // The predicted parity of target_block.

    // --- State ---
    pub settled: bool, // Whether the bet has been settled.
    pub won: bool,     // Outcome, meaningful only once settled.

    // --- Metadata ---
    pub placed_at_slot: u64,          // The slot the bet was placed in.
    pub settled_at_slot: Option<u64>, // The slot the bet was settled in.
    pub settled_by: Option<Pubkey>,   // Whoever triggered settlement.
    pub bump: u8,                     // A bump seed for PDA.
}

/// Result of settling one bet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settlement {
    pub won: bool,
    pub payout: u64,
}

impl Bet {
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        id: u64,
        player: Pubkey,
        stake: u64,
        predict_even: bool,
        current_slot: u64,
        target_offset: u64,
        bump: u8,
    ) -> Result<()> {
        require!(stake > 0, BlockParityError::ZeroStake);

        self.target_block = calculate_target_block(current_slot, target_offset)?;
        self.id = id;
        self.player = player;
        self.stake = stake;
        self.predict_even = predict_even;
        self.settled = false;
        self.won = false;
        self.placed_at_slot = current_slot;
        self.settled_at_slot = None;
        self.settled_by = None;
        self.bump = bump;

        Ok(())
    }

    /// Open -> SettledWon | SettledLost. Leaves the bet untouched on error.
    pub fn settle(&mut self, current_slot: u64, settled_by: Pubkey) -> Result<Settlement> {
        require!(!self.settled, BlockParityError::BetAlreadySettled);

        require!(
            is_bet_matured(self.target_block, current_slot),
            BlockParityError::BetNotMatured
        );

        let won = is_bet_winner(self.target_block, self.predict_even);
        let payout = calculate_payout(self.stake, won)?;

        self.won = won;
        self.settled = true;
        self.settled_at_slot = Some(current_slot);
        self.settled_by = Some(settled_by);

        Ok(Settlement { won, payout })
    }

    pub fn status(&self) -> BetStatus {
        match (self.settled, self.won) {
            (false, _) => BetStatus::Open,
            (true, true) => BetStatus::SettledWon,
            (true, false) => BetStatus::SettledLost,
        }
    }
}
