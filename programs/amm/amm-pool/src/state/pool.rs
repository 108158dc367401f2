// Pool State

use anchor_lang::prelude::*;

use crate::{custody::Reserves, math};

#[account]
#[derive(InitSpace, Default, Debug, PartialEq, Eq)]
pub struct Pool {
    pub seed: u64,            // Distinguishes pools over the same pair
    pub authority: Pubkey,    // Can lock/unlock pool
    pub mint_x: Pubkey,       // First token in pair
    pub mint_y: Pubkey,       // Second token in pair
    pub lp_mint: Pubkey,      // LP token mint, derived from the pool address
    pub fee_bps: u16,         // Swap fee (e.g., 100 = 1%)
    pub locked: bool,         // Emergency pause state
    pub pool_bump: u8,        // PDA bump for the pool
    pub lp_bump: u8,          // PDA bump for LP mint
}

impl Pool {
    /// A freshly allocated account is all zeroes; the LP mint is always a
    /// derived, non-default key once initialized.
    pub fn is_initialized(&self) -> bool {
        self.lp_mint != Pubkey::default()
    }

    /// Returns whether the flag changed.
    pub fn lock(&mut self) -> bool {
        let changed = !self.locked;
        self.locked = true;
        changed
    }

    /// Returns whether the flag changed.
    pub fn unlock(&mut self) -> bool {
        let changed = self.locked;
        self.locked = false;
        changed
    }
}

/// Pool record together with the custody totals it governs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolSnapshot {
    pub pool: Pool,
    pub reserves: Reserves,
}

impl PoolSnapshot {
    pub fn invariant(&self) -> Result<u128> {
        math::invariant(self.reserves.x, self.reserves.y)
    }

    /// What `user_lp` LP tokens are worth in each reserve right now.
    pub fn claim_of(&self, user_lp: u64) -> Result<(u64, u64)> {
        let Reserves { x, y, lp_supply } = self.reserves;
        Ok((
            math::claim(x, user_lp, lp_supply)?,
            math::claim(y, user_lp, lp_supply)?,
        ))
    }
}
