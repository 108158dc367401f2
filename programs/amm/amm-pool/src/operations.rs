// Pool Operations
//
// Initialize, Deposit, Withdraw, Swap, Lock and Unlock as state transitions
// over an explicit `Pool` record. Every quantity is computed and every check
// passes before the first custody call, so a failed operation leaves
// reserves, supply and holdings untouched.

use anchor_lang::prelude::*;

use crate::{
    custody::{ReserveCustody, Reserves, Side},
    derivation::IdentityDerivation,
    errors::*,
    math,
    state::*,
    validation::*,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeParams {
    pub seed: u64,
    pub fee_bps: u16,
    pub authority: Pubkey,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Initialized {
    pub pool_address: Pubkey,
    pub snapshot: PoolSnapshot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deposited {
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_minted: u64,
    pub snapshot: PoolSnapshot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Withdrawn {
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_burned: u64,
    pub snapshot: PoolSnapshot,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swapped {
    pub input: Side,
    pub amount_in: u64,
    pub amount_out: u64,
    pub snapshot: PoolSnapshot,
}

fn snapshot(pool: &Pool, reserves: Reserves) -> PoolSnapshot {
    PoolSnapshot {
        pool: pool.clone(),
        reserves,
    }
}

fn add(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_add(b).ok_or(AmmError::ArithmeticOverflow)?)
}

fn sub(a: u64, b: u64) -> Result<u64> {
    Ok(a.checked_sub(b).ok_or(AmmError::InsufficientLiquidity)?)
}

/// Writes a fresh, unlocked pool record into `pool`.
pub fn initialize<D: IdentityDerivation>(
    pool: &mut Pool,
    derivation: &D,
    params: InitializeParams,
) -> Result<Initialized> {
    require_uninitialized(pool)?;
    require_valid_fee(params.fee_bps)?;
    require_distinct_mints(&params.mint_x, &params.mint_y)?;

    let (pool_address, pool_bump) =
        derivation.pool_address(params.seed, &params.mint_x, &params.mint_y);
    let (lp_mint, lp_bump) = derivation.lp_mint_address(&pool_address);

    *pool = Pool {
        seed: params.seed,
        authority: params.authority,
        mint_x: params.mint_x,
        mint_y: params.mint_y,
        lp_mint,
        fee_bps: params.fee_bps,
        locked: false,
        pool_bump,
        lp_bump,
    };

    Ok(Initialized {
        pool_address,
        snapshot: snapshot(pool, Reserves::default()),
    })
}

/// Mints exactly `amount` LP tokens to the caller.
///
/// On an empty pool the caller sets the price: `max_x` and `max_y` are
/// deposited as-is. Otherwise the caller pays `ceil(amount * reserve / supply)`
/// of each asset, bounded by `max_x`/`max_y`.
pub fn deposit<C: ReserveCustody>(
    pool: &Pool,
    custody: &mut C,
    amount: u64,
    max_x: u64,
    max_y: u64,
) -> Result<Deposited> {
    require_unlocked(pool)?;
    require_nonzero(amount)?;

    let reserves = custody.reserves();

    let (amount_x, amount_y) = if reserves.lp_supply == 0 {
        require_nonzero(max_x)?;
        require_nonzero(max_y)?;
        (max_x, max_y)
    } else {
        let amount_x = math::proportional_ceil(amount, reserves.x, reserves.lp_supply)?;
        let amount_y = math::proportional_ceil(amount, reserves.y, reserves.lp_supply)?;
        require_within_max(amount_x, max_x)?;
        require_within_max(amount_y, max_y)?;
        (amount_x, amount_y)
    };

    let holdings = custody.holdings();
    require_balance(holdings.x, amount_x)?;
    require_balance(holdings.y, amount_y)?;

    let after = Reserves {
        x: add(reserves.x, amount_x)?,
        y: add(reserves.y, amount_y)?,
        lp_supply: add(reserves.lp_supply, amount)?,
    };

    custody.credit(Side::X, amount_x)?;
    custody.credit(Side::Y, amount_y)?;
    custody.mint_lp(amount)?;

    Ok(Deposited {
        amount_x,
        amount_y,
        lp_minted: amount,
        snapshot: snapshot(pool, after),
    })
}

/// Burns `amount` LP tokens for the floored proportional share of each reserve.
///
/// A zero `amount` fails with `ZeroAmount`.
pub fn withdraw<C: ReserveCustody>(
    pool: &Pool,
    custody: &mut C,
    amount: u64,
    min_x: u64,
    min_y: u64,
) -> Result<Withdrawn> {
    require_unlocked(pool)?;
    require_nonzero(amount)?;

    let reserves = custody.reserves();
    require!(
        amount <= reserves.lp_supply,
        AmmError::InsufficientLiquidity
    );
    require_balance(custody.holdings().lp, amount)?;

    let amount_x = math::proportional(amount, reserves.x, reserves.lp_supply)?;
    let amount_y = math::proportional(amount, reserves.y, reserves.lp_supply)?;
    require_at_least(amount_x, min_x)?;
    require_at_least(amount_y, min_y)?;

    let after = Reserves {
        x: sub(reserves.x, amount_x)?,
        y: sub(reserves.y, amount_y)?,
        lp_supply: sub(reserves.lp_supply, amount)?,
    };

    custody.burn_lp(amount)?;
    custody.debit(Side::X, amount_x)?;
    custody.debit(Side::Y, amount_y)?;

    Ok(Withdrawn {
        amount_x,
        amount_y,
        lp_burned: amount,
        snapshot: snapshot(pool, after),
    })
}

/// Sells `amount_in` of `input` for the other asset. The fee stays in the
/// input reserve, so it accrues to every LP holder.
///
/// A trade whose output rounds down to zero fails with `ZeroAmount`. That
/// check runs after the `min_out` check.
pub fn swap<C: ReserveCustody>(
    pool: &Pool,
    custody: &mut C,
    input: Side,
    amount_in: u64,
    min_out: u64,
) -> Result<Swapped> {
    require_unlocked(pool)?;
    require_nonzero(amount_in)?;

    let output = input.other();
    let reserves = custody.reserves();
    let reserve_in = reserves.get(input);
    let reserve_out = reserves.get(output);

    require!(
        reserve_in > 0 && reserve_out > 0,
        AmmError::InsufficientLiquidity
    );
    require_balance(custody.holdings().get(input), amount_in)?;

    let amount_out =
        math::constant_product_output(reserve_in, reserve_out, amount_in, pool.fee_bps)?;
    require!(amount_out < reserve_out, AmmError::InsufficientLiquidity);
    require_at_least(amount_out, min_out)?;
    require_nonzero(amount_out)?;

    let new_in = add(reserve_in, amount_in)?;
    let new_out = sub(reserve_out, amount_out)?;
    let after = match input {
        Side::X => Reserves {
            x: new_in,
            y: new_out,
            ..reserves
        },
        Side::Y => Reserves {
            x: new_out,
            y: new_in,
            ..reserves
        },
    };

    custody.credit(input, amount_in)?;
    custody.debit(output, amount_out)?;

    Ok(Swapped {
        input,
        amount_in,
        amount_out,
        snapshot: snapshot(pool, after),
    })
}

/// Returns whether the pool was unlocked before.
pub fn lock(pool: &mut Pool, caller: &Pubkey) -> Result<bool> {
    require_authority(pool, caller)?;
    Ok(pool.lock())
}

/// Returns whether the pool was locked before.
pub fn unlock(pool: &mut Pool, caller: &Pubkey) -> Result<bool> {
    require_authority(pool, caller)?;
    Ok(pool.unlock())
}
