use anchor_lang::prelude::*;

#[event]
pub struct ProgramUnpaused {
    pub admin: Pubkey,
    pub ledger: Pubkey,
    pub open_bets: u64,
    pub open_stake: u64,
}
