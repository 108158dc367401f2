// AMM (Automated Market Maker) Pool Program
//
// Two-asset constant product pool (x * y = k) with LP receipt tokens.
//
// Instructions:
// - initialize: Create a pool for a token pair under a seed
// - deposit: Add tokens, receive an exact amount of LP tokens
// - withdraw: Burn LP tokens, receive the proportional share of both tokens
// - swap: Exchange tokens along the curve, fee stays in the pool
// - lock / unlock: Emergency pause mechanism

use anchor_lang::prelude::*;

pub mod constants;
pub mod custody;
pub mod derivation;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod math;
pub mod operations;
pub mod state;
pub mod validation;

use instructions::*;

declare_id!("C69SyTvGpSpWX3dyEZmHsm9yS8piprGpF3VsPDGnF3vq");

#[program]
pub mod amm_pool {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        seed: u64,
        fee_bps: u16,
        authority: Pubkey,
    ) -> Result<()> {
        ctx.accounts.initialize(seed, fee_bps, authority, &ctx.bumps)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64, max_x: u64, max_y: u64) -> Result<()> {
        ctx.accounts.deposit(amount, max_x, max_y)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64, min_x: u64, min_y: u64) -> Result<()> {
        ctx.accounts.withdraw(amount, min_x, min_y)
    }

    pub fn swap(ctx: Context<Swap>, is_x: bool, amount_in: u64, min_out: u64) -> Result<()> {
        ctx.accounts.swap(is_x, amount_in, min_out)
    }

    pub fn lock(ctx: Context<SetLock>) -> Result<()> {
        ctx.accounts.lock()
    }

    pub fn unlock(ctx: Context<SetLock>) -> Result<()> {
        ctx.accounts.unlock()
    }
}
