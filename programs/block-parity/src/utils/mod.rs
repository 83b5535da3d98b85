pub mod bankroll;
pub mod parity;
pub mod token;
pub mod validation;

pub use bankroll::*;
pub use parity::*;
pub use token::*;
pub use validation::*;
