use anchor_lang::prelude::*;

#[event]
pub struct ConfigUpdated {
    pub admin: Pubkey,
    pub ledger: Pubkey,
    pub target_offset: u64,
    pub min_stake: u64,
    pub version: u8,
}
