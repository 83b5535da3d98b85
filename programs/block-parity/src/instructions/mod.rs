#![allow(ambiguous_glob_reexports)]

pub mod fund_bankroll;
pub mod get_bet;
pub mod get_player_bets;
pub mod initialize;
pub mod pause_program;
pub mod place_bet;
pub mod settle_bet;
pub mod unpause_program;
pub mod update_config;
pub mod withdraw_bankroll;

pub use fund_bankroll::*;
pub use get_bet::*;
pub use get_player_bets::*;
pub use initialize::*;
pub use pause_program::*;
pub use place_bet::*;
pub use settle_bet::*;
pub use unpause_program::*;
pub use update_config::*;
pub use withdraw_bankroll::*;
