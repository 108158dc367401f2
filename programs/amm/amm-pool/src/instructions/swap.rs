// Swap Instruction
//
// Sells one asset for the other along x * y = k.
// Fee is deducted from input before calculating output and stays in the pool.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*,
    custody::{Side, TokenCustody},
    events::*,
    operations,
    state::*,
};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        seeds = [
            POOL_SEED,
            pool.seed.to_le_bytes().as_ref(),
            pool.mint_x.as_ref(),
            pool.mint_y.as_ref(),
        ],
        bump = pool.pool_bump,
        has_one = mint_x,
        has_one = mint_y,
        has_one = lp_mint,
    )]
    pub pool: Box<Account<'info, Pool>>,

    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        seeds = [LP_MINT_SEED, pool.key().as_ref()],
        bump = pool.lp_bump,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_x,
        associated_token::authority = user,
    )]
    pub user_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_y,
        associated_token::authority = user,
    )]
    pub user_y: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_x,
        associated_token::authority = pool,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_y,
        associated_token::authority = pool,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Swap<'info> {
    pub fn swap(&mut self, is_x: bool, amount_in: u64, min_out: u64) -> Result<()> {
        let input = if is_x { Side::X } else { Side::Y };

        let mut custody = TokenCustody {
            pool: &self.pool,
            owner: &self.user,
            owner_x: &self.user_x,
            owner_y: &self.user_y,
            owner_lp: None,
            vault_x: &self.vault_x,
            vault_y: &self.vault_y,
            lp_mint: &self.lp_mint,
            token_program: &self.token_program,
        };

        let result = operations::swap(&self.pool, &mut custody, input, amount_in, min_out)?;

        if is_x {
            msg!("Swapped {} X -> {} Y", result.amount_in, result.amount_out);
        } else {
            msg!("Swapped {} Y -> {} X", result.amount_in, result.amount_out);
        }

        emit!(TokensSwapped {
            pool: self.pool.key(),
            user: self.user.key(),
            x_to_y: is_x,
            amount_in: result.amount_in,
            amount_out: result.amount_out,
            reserve_x: result.snapshot.reserves.x,
            reserve_y: result.snapshot.reserves.y,
        });

        Ok(())
    }
}
