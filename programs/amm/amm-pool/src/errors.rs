use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    #[msg("Pool is already initialized")]
    AlreadyInitialized,

    #[msg("Fee basis points cannot exceed 10000 (100%)")]
    InvalidFee,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalMints,

    #[msg("Account address does not match its derived address")]
    InvalidDerivation,

    #[msg("Only the pool authority can perform this action")]
    Unauthorized,

    #[msg("Pool is currently locked - operations are disabled")]
    PoolLocked,

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Amount is outside the caller's slippage bounds")]
    SlippageExceeded,

    #[msg("Pool does not have enough liquidity for this operation")]
    InsufficientLiquidity,

    #[msg("Insufficient balance for operation")]
    InsufficientBalance,

    #[msg("Arithmetic overflow occurred")]
    ArithmeticOverflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,
}
