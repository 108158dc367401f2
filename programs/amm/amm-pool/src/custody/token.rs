// SPL Token Custody
//
// CPI-backed custody. Vaults and the LP mint are owned by the pool PDA, so
// debits and mints are signed with the pool seeds. Swaps carry no LP token
// account; `owner_lp` is only required by deposit and withdraw.

use anchor_lang::prelude::*;
use anchor_spl::token::{burn, mint_to, transfer, Burn, Mint, MintTo, Token, TokenAccount, Transfer};

use crate::{constants::*, state::*};

use super::{Holdings, ReserveCustody, Reserves, Side};

pub struct TokenCustody<'a, 'info> {
    pub pool: &'a Account<'info, Pool>,
    pub owner: &'a Signer<'info>,
    pub owner_x: &'a Account<'info, TokenAccount>,
    pub owner_y: &'a Account<'info, TokenAccount>,
    pub owner_lp: Option<&'a Account<'info, TokenAccount>>,
    pub vault_x: &'a Account<'info, TokenAccount>,
    pub vault_y: &'a Account<'info, TokenAccount>,
    pub lp_mint: &'a Account<'info, Mint>,
    pub token_program: &'a Program<'info, Token>,
}

impl<'a, 'info> TokenCustody<'a, 'info> {
    fn accounts_for(
        &self,
        side: Side,
    ) -> (&'a Account<'info, TokenAccount>, &'a Account<'info, TokenAccount>) {
        match side {
            Side::X => (self.owner_x, self.vault_x),
            Side::Y => (self.owner_y, self.vault_y),
        }
    }

    fn lp_account(&self) -> Result<&'a Account<'info, TokenAccount>> {
        Ok(self.owner_lp.ok_or(ErrorCode::AccountNotEnoughKeys)?)
    }

    // Runs `f` with the pool PDA signer seeds
    fn with_pool_signer<R>(&self, f: impl FnOnce(&[&[&[u8]]]) -> Result<R>) -> Result<R> {
        let seed = self.pool.seed.to_le_bytes();
        let bump = [self.pool.pool_bump];
        let pool_seeds: &[&[u8]] = &[
            POOL_SEED,
            &seed,
            self.pool.mint_x.as_ref(),
            self.pool.mint_y.as_ref(),
            &bump,
        ];

        f(&[pool_seeds])
    }
}

impl<'a, 'info> ReserveCustody for TokenCustody<'a, 'info> {
    // Anchor caches token account state at deserialization, so these are the
    // balances at instruction entry.
    fn reserves(&self) -> Reserves {
        Reserves {
            x: self.vault_x.amount,
            y: self.vault_y.amount,
            lp_supply: self.lp_mint.supply,
        }
    }

    fn holdings(&self) -> Holdings {
        Holdings {
            x: self.owner_x.amount,
            y: self.owner_y.amount,
            lp: self.owner_lp.map_or(0, |account| account.amount),
        }
    }

    fn credit(&mut self, side: Side, amount: u64) -> Result<()> {
        let (from, to) = self.accounts_for(side);

        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: from.to_account_info(),
                    to: to.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
        )
    }

    fn debit(&mut self, side: Side, amount: u64) -> Result<()> {
        let (to, from) = self.accounts_for(side);

        self.with_pool_signer(|signer_seeds| {
            transfer(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    Transfer {
                        from: from.to_account_info(),
                        to: to.to_account_info(),
                        authority: self.pool.to_account_info(),
                    },
                    signer_seeds,
                ),
                amount,
            )
        })
    }

    fn mint_lp(&mut self, amount: u64) -> Result<()> {
        let owner_lp = self.lp_account()?;

        self.with_pool_signer(|signer_seeds| {
            mint_to(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    MintTo {
                        mint: self.lp_mint.to_account_info(),
                        to: owner_lp.to_account_info(),
                        authority: self.pool.to_account_info(),
                    },
                    signer_seeds,
                ),
                amount,
            )
        })
    }

    fn burn_lp(&mut self, amount: u64) -> Result<()> {
        let owner_lp = self.lp_account()?;

        burn(
            CpiContext::new(
                self.token_program.to_account_info(),
                Burn {
                    mint: self.lp_mint.to_account_info(),
                    from: owner_lp.to_account_info(),
                    authority: self.owner.to_account_info(),
                },
            ),
            amount,
        )
    }
}
