use crate::{constants::*, error::BlockParityError};
use anchor_lang::prelude::*;

pub fn calculate_target_block(current_slot: u64, target_offset: u64) -> Result<u64> {
    if !(MIN_TARGET_OFFSET..=MAX_TARGET_OFFSET).contains(&target_offset) {
        return Err(BlockParityError::InvalidTargetOffset.into());
    }

    current_slot
        .checked_add(target_offset)
        .ok_or(BlockParityError::Overflow.into())
}

pub fn is_even_block(block: u64) -> bool {
    block % 2 == 0
}

/// The outcome is the literal parity of the target block number, not of any
/// block hash. Anyone who controls slot production can predict it.
pub fn is_bet_winner(target_block: u64, predict_even: bool) -> bool {
    is_even_block(target_block) == predict_even
}

pub fn is_bet_matured(target_block: u64, current_slot: u64) -> bool {
    current_slot > target_block
}

pub fn calculate_payout(stake: u64, won: bool) -> Result<u64> {
    if !won {
        return Ok(0);
    }

    stake
        .checked_mul(PAYOUT_MULTIPLIER)
        .ok_or(BlockParityError::Overflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_block_adds_offset() {
        assert_eq!(calculate_target_block(100, TARGET_BLOCK_OFFSET).unwrap(), 110);
        assert_eq!(calculate_target_block(7, 2).unwrap(), 9);
    }

    #[test]
    fn test_target_block_rejects_bad_offset() {
        assert!(calculate_target_block(100, 0).is_err());
        assert!(calculate_target_block(100, MAX_TARGET_OFFSET + 1).is_err());
    }

    #[test]
    fn test_target_block_overflow() {
        assert!(calculate_target_block(u64::MAX, 1).is_err());
        assert!(calculate_target_block(u64::MAX - 10, 10).is_ok());
    }

    #[test]
    fn test_is_bet_winner() {
        assert!(is_bet_winner(42, true));
        assert!(is_bet_winner(43, false));
        assert!(!is_bet_winner(42, false));
        assert!(!is_bet_winner(43, true));
        assert!(is_bet_winner(0, true));
    }

    #[test]
    fn test_matured_only_after_target() {
        assert!(!is_bet_matured(110, 109));
        assert!(!is_bet_matured(110, 110));
        assert!(is_bet_matured(110, 111));
    }

    #[test]
    fn test_payout_doubles_stake_on_win() {
        assert_eq!(calculate_payout(1_000_000, true).unwrap(), 2_000_000);
        assert_eq!(calculate_payout(1_000_000, false).unwrap(), 0);
    }

    #[test]
    fn test_payout_overflow() {
        assert!(calculate_payout(u64::MAX, true).is_err());
        // a losing bet never computes the multiple
        assert_eq!(calculate_payout(u64::MAX, false).unwrap(), 0);
    }
}
