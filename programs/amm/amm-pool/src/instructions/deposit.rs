// Deposit Instruction
//
// Mints an exact LP amount to the depositor against proportional reserves.
// First deposit: the depositor's caps become the reserves.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, custody::TokenCustody, events::*, operations, state::*};

#[derive(Accounts)]
pub struct Deposit<'info> {
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
        mut,
        seeds = [LP_MINT_SEED, pool.key().as_ref()],
        bump = pool.lp_bump,
    )]
    pub lp_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = mint_x,
        associated_token::authority = user,
    )]
    pub user_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = mint_y,
        associated_token::authority = user,
    )]
    pub user_y: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = lp_mint,
        associated_token::authority = user,
    )]
    pub user_lp: Box<Account<'info, TokenAccount>>,

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

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, amount: u64, max_x: u64, max_y: u64) -> Result<()> {
        let mut custody = TokenCustody {
            pool: &self.pool,
            owner: &self.user,
            owner_x: &self.user_x,
            owner_y: &self.user_y,
            owner_lp: Some(&*self.user_lp),
            vault_x: &self.vault_x,
            vault_y: &self.vault_y,
            lp_mint: &self.lp_mint,
            token_program: &self.token_program,
        };

        let result = operations::deposit(&self.pool, &mut custody, amount, max_x, max_y)?;

        msg!(
            "Deposited: {} X, {} Y -> {} LP",
            result.amount_x,
            result.amount_y,
            result.lp_minted
        );

        emit!(LiquidityDeposited {
            pool: self.pool.key(),
            user: self.user.key(),
            amount_x: result.amount_x,
            amount_y: result.amount_y,
            lp_minted: result.lp_minted,
            lp_supply: result.snapshot.reserves.lp_supply,
        });

        Ok(())
    }
}
