use anchor_lang::prelude::*;

#[event]
pub struct BetPlaced {
    pub id: u64,
    pub player: Pubkey,
    pub stake: u64,
    pub target_block: u64,
    pub predict_even: bool,
}
