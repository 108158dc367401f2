// Identity Derivation
//
// Pool and LP mint addresses are pure functions of their inputs. The
// operations only need determinism, so they take the derivation as a
// capability instead of calling `find_program_address` directly.

use anchor_lang::prelude::*;

use crate::constants::*;

pub trait IdentityDerivation {
    /// Pool address and bump for `(seed, mint_x, mint_y)`.
    fn pool_address(&self, seed: u64, mint_x: &Pubkey, mint_y: &Pubkey) -> (Pubkey, u8);

    /// LP mint address and bump for a pool.
    fn lp_mint_address(&self, pool: &Pubkey) -> (Pubkey, u8);
}

/// Program-derived addresses under `program_id`.
pub struct ProgramDerivation<'a> {
    pub program_id: &'a Pubkey,
}

impl<'a> ProgramDerivation<'a> {
    pub fn new(program_id: &'a Pubkey) -> Self {
        Self { program_id }
    }
}

impl IdentityDerivation for ProgramDerivation<'_> {
    fn pool_address(&self, seed: u64, mint_x: &Pubkey, mint_y: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[
                POOL_SEED,
                seed.to_le_bytes().as_ref(),
                mint_x.as_ref(),
                mint_y.as_ref(),
            ],
            self.program_id,
        )
    }

    fn lp_mint_address(&self, pool: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[LP_MINT_SEED, pool.as_ref()], self.program_id)
    }
}
