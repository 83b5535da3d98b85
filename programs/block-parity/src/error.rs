use anchor_lang::prelude::*;

#[error_code]
pub enum BlockParityError {
    // General Program Errors (0x1000 - 0x1999)
    #[msg("Unauthorized action for this account")]
    Unauthorized = 0x1000,

    #[msg("Program is currently paused")]
    ProgramPaused = 0x1001,

    #[msg("Program is already paused")]
    AlreadyPaused = 0x1002,

    #[msg("Program is already active")]
    AlreadyActive = 0x1003,

    #[msg("Arithmetic overflow")]
    Overflow = 0x1004,

    #[msg("Arithmetic underflow")]
    Underflow = 0x1005,

    // Configuration Errors (0x2000 - 0x2999)
    #[msg("Target offset is outside the allowed range")]
    InvalidTargetOffset = 0x2000,

    #[msg("Minimum stake must be greater than 0")]
    InvalidMinStake = 0x2001,

    #[msg("New admin must differ from the current admin")]
    InvalidNewAdmin = 0x2002,

    // Betting Errors (0x4000 - 0x4999)
    #[msg("Stake must be greater than 0")]
    ZeroStake = 0x4000,

    #[msg("Stake is below the configured minimum")]
    StakeBelowMinimum = 0x4001,

    #[msg("Bet id does not match the bet account")]
    InvalidBetId = 0x4002,

    #[msg("Player bets page is full")]
    PlayerBetsPageFull = 0x4003,

    #[msg("Player bets page does not match the player's bet count")]
    InvalidPlayerBetsPage = 0x4004,

    // Settlement Errors (0x5000 - 0x5999)
    #[msg("Bet has already been settled")]
    BetAlreadySettled = 0x5000,

    #[msg("Target block has not passed yet")]
    BetNotMatured = 0x5001,

    #[msg("Vault bankroll cannot cover this transfer")]
    InsufficientBankroll = 0x5002,

    // Account & Token Errors (0x6000 - 0x6999)
    #[msg("Insufficient token balance for this stake")]
    InsufficientBalance = 0x6000,

    #[msg("Token mint does not match ledger configuration")]
    InvalidMint = 0x6001,

    #[msg("Payout account is not owned by the bet's player")]
    InvalidPayoutAccount = 0x6002,

    #[msg("Vault account does not match ledger configuration")]
    InvalidVault = 0x6003,

    #[msg("Amount must be greater than 0")]
    InvalidAmount = 0x6004,

    #[msg("Delegated allowance is below the stake")]
    InsufficientAllowance = 0x6005,
}
