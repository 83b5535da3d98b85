use anchor_lang::prelude::*;

#[event]
pub struct LedgerInitialized {
    pub admin: Pubkey,
    pub ledger: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,
    pub target_offset: u64,
    pub min_stake: u64,
}
