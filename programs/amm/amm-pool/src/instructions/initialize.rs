// Initialize Instruction
//
// Creates the pool record, its LP mint and both reserve vaults.
// Accounts are `init_if_needed` so a repeated call reaches the pool check
// and fails with `AlreadyInitialized`.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    derivation::ProgramDerivation,
    errors::*,
    events::*,
    operations::{self, InitializeParams},
    state::*,
};

#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub initializer: Signer<'info>,

    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = initializer,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [
            POOL_SEED,
            seed.to_le_bytes().as_ref(),
            mint_x.key().as_ref(),
            mint_y.key().as_ref(),
        ],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = initializer,
        seeds = [LP_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = LP_DECIMALS,
        mint::authority = pool,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = initializer,
        associated_token::mint = mint_x,
        associated_token::authority = pool,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = initializer,
        associated_token::mint = mint_y,
        associated_token::authority = pool,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        seed: u64,
        fee_bps: u16,
        authority: Pubkey,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        let derivation = ProgramDerivation::new(&crate::ID);

        let result = operations::initialize(
            &mut self.pool,
            &derivation,
            InitializeParams {
                seed,
                fee_bps,
                authority,
                mint_x: self.mint_x.key(),
                mint_y: self.mint_y.key(),
            },
        )?;

        // Anchor already created these accounts at the same seeds
        require_keys_eq!(result.pool_address, self.pool.key(), AmmError::InvalidDerivation);
        require_keys_eq!(self.pool.lp_mint, self.lp_mint.key(), AmmError::InvalidDerivation);
        require_eq!(self.pool.pool_bump, bumps.pool, AmmError::InvalidDerivation);
        require_eq!(self.pool.lp_bump, bumps.lp_mint, AmmError::InvalidDerivation);

        msg!(
            "Pool initialized: {} / {} (seed {})",
            self.mint_x.key(),
            self.mint_y.key(),
            seed
        );
        msg!("Fee: {} basis points, authority {}", fee_bps, authority);

        emit!(PoolInitialized {
            pool: result.pool_address,
            seed,
            authority,
            mint_x: self.pool.mint_x,
            mint_y: self.pool.mint_y,
            lp_mint: self.pool.lp_mint,
            fee_bps,
        });

        Ok(())
    }
}
