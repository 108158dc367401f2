// Pool Math
//
// Checked u64 arithmetic with u128 intermediates. Every ratio in the
// program goes through `proportional` (floor) or `proportional_ceil`, so the
// rounding direction is decided here and nowhere else.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

fn to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| error!(AmmError::ArithmeticOverflow))
}

fn product(a: u64, b: u64) -> Result<u128> {
    Ok((a as u128)
        .checked_mul(b as u128)
        .ok_or(AmmError::ArithmeticOverflow)?)
}

/// `floor(amount * numerator / denominator)`.
///
/// Used wherever the pool pays out (withdrawals, claims), so the remainder
/// always stays with the pool.
pub fn proportional(amount: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let value = product(amount, numerator)?
        .checked_div(denominator as u128)
        .ok_or(AmmError::DivisionByZero)?;

    to_u64(value)
}

/// `ceil(amount * numerator / denominator)`.
///
/// Used for what a depositor owes the pool.
pub fn proportional_ceil(amount: u64, numerator: u64, denominator: u64) -> Result<u64> {
    let scaled = product(amount, numerator)?;
    let denominator = denominator as u128;

    let quotient = scaled
        .checked_div(denominator)
        .ok_or(AmmError::DivisionByZero)?;
    let remainder = scaled
        .checked_rem(denominator)
        .ok_or(AmmError::DivisionByZero)?;

    let value = if remainder == 0 {
        quotient
    } else {
        quotient.checked_add(1).ok_or(AmmError::ArithmeticOverflow)?
    };

    to_u64(value)
}

/// Input amount left once the swap fee is taken, floored.
pub fn amount_after_fee(amount: u64, fee_bps: u16) -> Result<u64> {
    require!(fee_bps <= MAX_FEE_BASIS_POINTS, AmmError::InvalidFee);

    let kept_bps = BPS_DENOMINATOR
        .checked_sub(fee_bps as u64)
        .ok_or(AmmError::InvalidFee)?;

    proportional(amount, kept_bps, BPS_DENOMINATOR)
}

/// The constant-product quantity `x * y`.
pub fn invariant(reserve_x: u64, reserve_y: u64) -> Result<u128> {
    product(reserve_x, reserve_y)
}

/// Output of a fee-adjusted constant-product swap.
///
/// `reserve_out - ceil(k / (reserve_in + amount_in_after_fee))`, which is
/// `floor(reserve_out * a' / (reserve_in + a'))`. The post-swap reserve is
/// rounded up, so `k` never shrinks.
pub fn constant_product_output(
    reserve_in: u64,
    reserve_out: u64,
    amount_in: u64,
    fee_bps: u16,
) -> Result<u64> {
    let amount_in_after_fee = amount_after_fee(amount_in, fee_bps)?;

    let k = invariant(reserve_in, reserve_out)?;
    let new_reserve_in = (reserve_in as u128)
        .checked_add(amount_in_after_fee as u128)
        .ok_or(AmmError::ArithmeticOverflow)?;

    require!(new_reserve_in > 0, AmmError::DivisionByZero);

    let mut new_reserve_out = k / new_reserve_in;
    if k % new_reserve_in != 0 {
        new_reserve_out += 1;
    }

    let amount_out = (reserve_out as u128)
        .checked_sub(new_reserve_out)
        .ok_or(AmmError::ArithmeticOverflow)?;

    to_u64(amount_out)
}

/// A holder's share of one reserve: `reserve * user_lp / lp_supply`, floored.
pub fn claim(reserve: u64, user_lp: u64, lp_supply: u64) -> Result<u64> {
    if lp_supply == 0 {
        return Ok(0);
    }
    proportional(user_lp, reserve, lp_supply)
}
