use anchor_lang::prelude::*;

#[event]
pub struct BankrollFunded {
    pub funder: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}

#[event]
pub struct BankrollWithdrawn {
    pub admin: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub vault_balance: u64,
}
