use crate::{constants::*, error::BlockParityError};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct PlayerProfile {
    pub player: Pubkey,

    // --- Stats ---
    pub bet_count: u64,     // Bets ever placed. Also the index of the next bet in the player's list.
    pub settled_count: u64, // Bets settled, won or lost.
    pub wins: u64,          // Bets settled as won.
    pub total_staked: u64,  // Sum of every stake placed.
    pub total_won: u64,     // Sum of every payout received.

    pub bump: u8,
}

/// One page of a player's bet ids in creation order.
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct PlayerBets {
    pub player: Pubkey,
    pub page: u32,
    #[max_len(32)]
    pub bet_ids: Vec<u64>,
    pub bump: u8,
}

impl PlayerProfile {
    /// Page that receives the player's next bet.
    pub fn current_page(&self) -> u32 {
        (self.bet_count / PLAYER_BETS_PAGE_SIZE as u64) as u32
    }

    pub fn record_bet(&mut self, stake: u64) -> Result<()> {
        self.bet_count = self
            .bet_count
            .checked_add(1)
            .ok_or(BlockParityError::Overflow)?;
        self.total_staked = self
            .total_staked
            .checked_add(stake)
            .ok_or(BlockParityError::Overflow)?;
        Ok(())
    }

    pub fn record_settlement(&mut self, won: bool, payout: u64) -> Result<()> {
        self.settled_count = self
            .settled_count
            .checked_add(1)
            .ok_or(BlockParityError::Overflow)?;
        if won {
            self.wins = self.wins.checked_add(1).ok_or(BlockParityError::Overflow)?;
            self.total_won = self
                .total_won
                .checked_add(payout)
                .ok_or(BlockParityError::Overflow)?;
        }
        Ok(())
    }
}

impl PlayerBets {
    pub fn push(&mut self, bet_id: u64) -> Result<()> {
        require!(
            self.bet_ids.len() < PLAYER_BETS_PAGE_SIZE,
            BlockParityError::PlayerBetsPageFull
        );

        if let Some(last) = self.bet_ids.last() {
            require!(bet_id > *last, BlockParityError::InvalidBetId);
        }

        self.bet_ids.push(bet_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_space_matches_page_size() {
        // player + page + vec len prefix + ids + bump
        assert_eq!(
            PlayerBets::INIT_SPACE,
            32 + 4 + 4 + 8 * PLAYER_BETS_PAGE_SIZE + 1
        );
    }

    #[test]
    fn test_pages_fill_in_order() {
        let mut profile = PlayerProfile::default();
        let mut pages: Vec<PlayerBets> = Vec::new();

        for id in 1..=(PLAYER_BETS_PAGE_SIZE as u64 * 2 + 5) {
            let page = profile.current_page();
            if pages.len() <= page as usize {
                pages.push(PlayerBets {
                    page,
                    ..PlayerBets::default()
                });
            }
            pages[page as usize].push(id * 3).unwrap();
            profile.record_bet(1).unwrap();
        }

        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].bet_ids.len(), PLAYER_BETS_PAGE_SIZE);
        assert_eq!(pages[2].bet_ids.len(), 5);

        let all: Vec<u64> = pages.iter().flat_map(|p| p.bet_ids.clone()).collect();
        let expected: Vec<u64> = (1..=(PLAYER_BETS_PAGE_SIZE as u64 * 2 + 5))
            .map(|id| id * 3)
            .collect();
        assert_eq!(all, expected);
        assert_eq!(profile.bet_count, expected.len() as u64);
    }

    #[test]
    fn test_page_rejects_overflow() {
        let mut page = PlayerBets::default();
        for id in 1..=PLAYER_BETS_PAGE_SIZE as u64 {
            page.push(id).unwrap();
        }
        assert!(page.push(PLAYER_BETS_PAGE_SIZE as u64 + 1).is_err());
        assert_eq!(page.bet_ids.len(), PLAYER_BETS_PAGE_SIZE);
    }

    #[test]
    fn test_page_rejects_out_of_order_id() {
        let mut page = PlayerBets::default();
        page.push(7).unwrap();
        assert!(page.push(7).is_err());
        assert!(page.push(3).is_err());
        assert_eq!(page.bet_ids, vec![7]);
    }

    #[test]
    fn test_current_page_boundaries() {
        let mut profile = PlayerProfile::default();
        assert_eq!(profile.current_page(), 0);

        profile.bet_count = PLAYER_BETS_PAGE_SIZE as u64 - 1;
        assert_eq!(profile.current_page(), 0);

        profile.bet_count = PLAYER_BETS_PAGE_SIZE as u64;
        assert_eq!(profile.current_page(), 1);
    }

    #[test]
    fn test_record_settlement_counts_wins() {
        let mut profile = PlayerProfile::default();
        profile.record_bet(10).unwrap();
        profile.record_bet(10).unwrap();

        profile.record_settlement(true, 20).unwrap();
        profile.record_settlement(false, 0).unwrap();

        assert_eq!(profile.settled_count, 2);
        assert_eq!(profile.wins, 1);
        assert_eq!(profile.total_staked, 20);
        assert_eq!(profile.total_won, 20);
    }
}
