// Lock / Unlock Instructions
//
// Emergency pause mechanism. Only the pool authority can flip the flag;
// setting it to its current value is a no-op.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, operations, state::*};

#[derive(Accounts)]
pub struct SetLock<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            POOL_SEED,
            pool.seed.to_le_bytes().as_ref(),
            pool.mint_x.as_ref(),
            pool.mint_y.as_ref(),
        ],
        bump = pool.pool_bump,
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> SetLock<'info> {
    pub fn lock(&mut self) -> Result<()> {
        let changed = operations::lock(&mut self.pool, &self.authority.key())?;

        if changed {
            msg!("Pool locked by {}", self.authority.key());
        } else {
            msg!("Pool already locked");
        }

        self.emit_state()
    }

    pub fn unlock(&mut self) -> Result<()> {
        let changed = operations::unlock(&mut self.pool, &self.authority.key())?;

        if changed {
            msg!("Pool unlocked by {}", self.authority.key());
        } else {
            msg!("Pool already unlocked");
        }

        self.emit_state()
    }

    fn emit_state(&self) -> Result<()> {
        emit!(PoolLockChanged {
            pool: self.pool.key(),
            authority: self.authority.key(),
            locked: self.pool.locked,
        });
        Ok(())
    }
}
