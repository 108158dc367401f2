// Validation helpers shared by every pool operation.
// All of them run before the first custody call.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

pub fn require_unlocked(pool: &Pool) -> Result<()> {
    require!(!pool.locked, AmmError::PoolLocked);
    Ok(())
}

pub fn require_authority(pool: &Pool, caller: &Pubkey) -> Result<()> {
    require_keys_eq!(pool.authority, *caller, AmmError::Unauthorized);
    Ok(())
}

pub fn require_uninitialized(pool: &Pool) -> Result<()> {
    require!(!pool.is_initialized(), AmmError::AlreadyInitialized);
    Ok(())
}

pub fn require_valid_fee(fee_bps: u16) -> Result<()> {
    require!(fee_bps <= MAX_FEE_BASIS_POINTS, AmmError::InvalidFee);
    Ok(())
}

pub fn require_distinct_mints(mint_x: &Pubkey, mint_y: &Pubkey) -> Result<()> {
    require_keys_neq!(*mint_x, *mint_y, AmmError::IdenticalMints);
    Ok(())
}

pub fn require_nonzero(amount: u64) -> Result<()> {
    require!(amount > 0, AmmError::ZeroAmount);
    Ok(())
}

// Slippage: deposits are capped from above, payouts bounded from below

pub fn require_within_max(required: u64, max: u64) -> Result<()> {
    require!(required <= max, AmmError::SlippageExceeded);
    Ok(())
}

pub fn require_at_least(actual: u64, min: u64) -> Result<()> {
    require!(actual >= min, AmmError::SlippageExceeded);
    Ok(())
}

pub fn require_balance(held: u64, needed: u64) -> Result<()> {
    require!(held >= needed, AmmError::InsufficientBalance);
    Ok(())
}
