pub mod bet;
pub mod ledger;
pub mod player;

pub use bet::*;
pub use ledger::*;
pub use player::*;
