use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const LEDGER_SEED: &str = "ledger";
#[constant]
pub const VAULT_SEED: &str = "vault";
#[constant]
pub const BET_SEED: &str = "bet";
#[constant]
pub const PLAYER_SEED: &str = "player";
#[constant]
pub const PLAYER_BETS_SEED: &str = "player_bets";

/// Account layout
pub const DISCRIMINATOR_SIZE: usize = 8;

/// Slots between placement and the block whose parity decides the bet.
#[constant]
pub const TARGET_BLOCK_OFFSET: u64 = 10;
pub const MIN_TARGET_OFFSET: u64 = 1;
pub const MAX_TARGET_OFFSET: u64 = 1_000;

/// Winning bets pay stake * PAYOUT_MULTIPLIER.
#[constant]
pub const PAYOUT_MULTIPLIER: u64 = 2;

/// Bet ids per player page. Keeps `get_player_bets` return data under 1 KiB.
pub const PLAYER_BETS_PAGE_SIZE: usize = 32;

/// Enum for program status flags
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug, Default)]
pub enum ProgramStatus {
    #[default]
    Active,
    Paused,
}

/// Lifecycle of a single bet
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BetStatus {
    Open,
    SettledWon,
    SettledLost,
}
