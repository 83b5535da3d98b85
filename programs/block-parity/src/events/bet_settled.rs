use anchor_lang::prelude::*;

/// `payout` is zero for a lost bet.
#[event]
pub struct BetSettled {
    pub id: u64,
    pub player: Pubkey,
    pub won: bool,
    pub payout: u64,
}
