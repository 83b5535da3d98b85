pub mod bankroll;
pub mod bet_placed;
pub mod bet_settled;
pub mod config_updated;
pub mod ledger_initialized;
pub mod program_paused;
pub mod program_unpaused;

pub use bankroll::*;
pub use bet_placed::*;
pub use bet_settled::*;
pub use config_updated::*;
pub use ledger_initialized::*;
pub use program_paused::*;
pub use program_unpaused::*;
