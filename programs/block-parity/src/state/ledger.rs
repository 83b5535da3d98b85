use crate::{constants::*, error::BlockParityError};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Ledger {
    // --- Authorities ---
    pub admin: Pubkey, // The administrator allowed to configure, pause and withdraw bankroll.

    // --- Token & Vault ---
    pub token_mint: Pubkey, // The settlement token stakes are paid in.
    pub vault: Pubkey,      // The token account holding stakes and bankroll.

    // --- Betting Rules ---
    pub target_offset: u64, // Slots added to the placement slot to get the target block.
    pub min_stake: u64,     // The minimum stake in token base units.

    // --- Global State ---
    pub status: ProgramStatus, // Active / Paused
    pub bet_counter: u64,      // Id of the last bet placed. Ids start at 1.
    pub open_bets: u64,        // Bets placed but not yet settled.
    pub open_stake: u64,       // Sum of stakes of open bets.
    pub total_wagered: u64,    // Sum of every stake ever placed.
    pub total_paid_out: u64,   // Sum of every payout ever sent.

    // --- Metadata ---
    pub version: u8,    // Incremented on every config update.
    pub bump: u8,       // A bump seed for PDA.
    pub vault_bump: u8, // A bump seed for the vault PDA.
}

impl Ledger {
    pub fn next_bet_id(&self) -> Result<u64> {
        self.bet_counter
            .checked_add(1)
            .ok_or(BlockParityError::Overflow.into())
    }

    /// Id used to derive the next bet PDA. Wraps instead of panicking so that
    /// `record_bet` is the one to report an exhausted counter.
    pub fn next_bet_seed(&self) -> u64 {
        self.bet_counter.wrapping_add(1)
    }

    /// Claims the next id and books the stake into custody.
    pub fn record_bet(&mut self, stake: u64) -> Result<u64> {
        let id = self.next_bet_id()?;

        self.open_bets = self
            .open_bets
            .checked_add(1)
            .ok_or(BlockParityError::Overflow)?;
        self.open_stake = self
            .open_stake
            .checked_add(stake)
            .ok_or(BlockParityError::Overflow)?;
        self.total_wagered = self
            .total_wagered
            .checked_add(stake)
            .ok_or(BlockParityError::Overflow)?;
        self.bet_counter = id;

        Ok(id)
    }

    pub fn record_settlement(&mut self, stake: u64, payout: u64) -> Result<()> {
        self.open_bets = self
            .open_bets
            .checked_sub(1)
            .ok_or(BlockParityError::Underflow)?;
        self.open_stake = self
            .open_stake
            .checked_sub(stake)
            .ok_or(BlockParityError::Underflow)?;
        self.total_paid_out = self
            .total_paid_out
            .checked_add(payout)
            .ok_or(BlockParityError::Overflow)?;

        Ok(())
    }

    pub fn bump_version(&mut self) -> Result<()> {
        self.version = self
            .version
            .checked_add(1)
            .ok_or(BlockParityError::Overflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{state::Bet, utils::*};

    const ONE_TOKEN: u64 = 1_000_000;

    /// Token balances around a ledger, moved the way the instructions move them.
    struct Balances {
        vault: u64,
        player: u64,
    }

    fn place(
        ledger: &mut Ledger,
        balances: &mut Balances,
        player: Pubkey,
        stake: u64,
        predict_even: bool,
        slot: u64,
    ) -> Bet {
        balances.player -= stake;
        balances.vault += stake;

        let id = ledger.record_bet(stake).unwrap();
        let mut bet = Bet::default();
        bet.open(id, player, stake, predict_even, slot, ledger.target_offset, 254)
            .unwrap();
        bet
    }

    fn settle(ledger: &mut Ledger, balances: &mut Balances, bet: &mut Bet, slot: u64) -> u64 {
        let settlement = bet.settle(slot, Pubkey::new_unique()).unwrap();
        balances.vault -= settlement.payout;
        balances.player += settlement.payout;
        ledger.record_settlement(bet.stake, settlement.payout).unwrap();
        settlement.payout
    }

    fn seeded() -> (Ledger, Balances) {
        let ledger = Ledger {
            target_offset: 2,
            min_stake: 1,
            ..Ledger::default()
        };
        let balances = Balances {
            vault: 500 * ONE_TOKEN,
            player: 100 * ONE_TOKEN,
        };
        (ledger, balances)
    }

    #[test]
    fn test_custody_grows_by_stake_on_placement() {
        let (mut ledger, mut balances) = seeded();
        let vault_before = balances.vault;

        let bet = place(&mut ledger, &mut balances, Pubkey::new_unique(), ONE_TOKEN, true, 40);

        assert_eq!(balances.vault - vault_before, ONE_TOKEN);
        assert_eq!(bet.id, 1);
        assert_eq!(bet.target_block, 42);
        assert!(!bet.settled);
    }

    #[test]
    fn test_winning_bet_pays_double_stake() {
        let (mut ledger, mut balances) = seeded();
        let h = 77;
        let player = Pubkey::new_unique();
        let vault_before = balances.vault;

        let mut bet = place(&mut ledger, &mut balances, player, 2 * ONE_TOKEN, is_even_block(h + 2), h);
        let player_before = balances.player;
        let payout = settle(&mut ledger, &mut balances, &mut bet, h + 3);

        assert!(bet.won);
        assert_eq!(payout, 4 * ONE_TOKEN);
        assert_eq!(balances.player - player_before, 4 * ONE_TOKEN);
        // bankroll is down one stake net of the deposit
        assert_eq!(vault_before - balances.vault, 2 * ONE_TOKEN);
        assert_eq!(ledger.open_stake, 0);
        assert_eq!(ledger.total_paid_out, 4 * ONE_TOKEN);
    }

    #[test]
    fn test_losing_bet_keeps_stake_in_bankroll() {
        let (mut ledger, mut balances) = seeded();
        let h = 77;
        let vault_before = balances.vault;

        let mut bet = place(
            &mut ledger,
            &mut balances,
            Pubkey::new_unique(),
            ONE_TOKEN,
            !is_even_block(h + 2),
            h,
        );
        let player_before = balances.player;
        let payout = settle(&mut ledger, &mut balances, &mut bet, h + 3);

        assert!(!bet.won);
        assert_eq!(payout, 0);
        assert_eq!(balances.player, player_before);
        assert_eq!(balances.vault - vault_before, ONE_TOKEN);
        assert_eq!(ledger.open_bets, 0);
        assert_eq!(ledger.total_paid_out, 0);
    }

    #[test]
    fn test_free_bankroll_reserves_open_bets() {
        let (mut ledger, mut balances) = seeded();
        place(&mut ledger, &mut balances, Pubkey::new_unique(), 10 * ONE_TOKEN, true, 5);

        let free = calculate_free_bankroll(balances.vault, ledger.open_stake).unwrap();

        assert_eq!(free, 490 * ONE_TOKEN);
    }

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut ledger = Ledger::default();

        assert_eq!(ledger.next_bet_id().unwrap(), 1);
        assert_eq!(ledger.next_bet_seed(), 1);
        assert_eq!(ledger.record_bet(10).unwrap(), 1);
        assert_eq!(ledger.record_bet(20).unwrap(), 2);
        assert_eq!(ledger.record_bet(30).unwrap(), 3);
        assert_eq!(ledger.bet_counter, 3);
        assert_eq!(ledger.next_bet_id().unwrap(), 4);
    }

    #[test]
    fn test_record_bet_tracks_open_stake() {
        let mut ledger = Ledger::default();
        ledger.record_bet(10).unwrap();
        ledger.record_bet(25).unwrap();

        assert_eq!(ledger.open_bets, 2);
        assert_eq!(ledger.open_stake, 35);
        assert_eq!(ledger.total_wagered, 35);
    }

    #[test]
    fn test_record_settlement_releases_stake() {
        let mut ledger = Ledger::default();
        ledger.record_bet(10).unwrap();
        ledger.record_bet(25).unwrap();

        ledger.record_settlement(10, 20).unwrap();
        assert_eq!(ledger.open_bets, 1);
        assert_eq!(ledger.open_stake, 25);
        assert_eq!(ledger.total_paid_out, 20);

        ledger.record_settlement(25, 0).unwrap();
        assert_eq!(ledger.open_bets, 0);
        assert_eq!(ledger.open_stake, 0);
        assert_eq!(ledger.total_paid_out, 20);
        // settled bets never give their ids back
        assert_eq!(ledger.next_bet_id().unwrap(), 3);
    }

    #[test]
    fn test_record_settlement_without_open_bet() {
        let mut ledger = Ledger::default();
        assert!(ledger.record_settlement(10, 0).is_err());
    }

    #[test]
    fn test_counter_overflow_leaves_ledger_unchanged() {
        let mut ledger = Ledger {
            bet_counter: u64::MAX,
            ..Ledger::default()
        };

        assert_eq!(ledger.next_bet_seed(), 0);
        assert!(ledger.record_bet(10).is_err());
        assert_eq!(ledger.bet_counter, u64::MAX);
        assert_eq!(ledger.open_bets, 0);
        assert_eq!(ledger.open_stake, 0);
    }
}
