// In-memory custody for host tests. Balances follow SPL token rules closely
// enough for the pool math: transfers and burns fail on short balances.

use anchor_lang::prelude::*;

use crate::errors::*;

use super::{Holdings, ReserveCustody, Reserves, Side};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustodyCall {
    Credit(Side, u64),
    Debit(Side, u64),
    MintLp(u64),
    BurnLp(u64),
}

#[derive(Clone, Debug, Default)]
pub struct MemoryCustody {
    pub reserves: Reserves,
    pub holdings: Holdings,
    pub calls: Vec<CustodyCall>,
}

impl MemoryCustody {
    pub fn with_holdings(x: u64, y: u64) -> Self {
        Self {
            holdings: Holdings { x, y, lp: 0 },
            ..Self::default()
        }
    }

    fn sides(&mut self, side: Side) -> (&mut u64, &mut u64) {
        match side {
            Side::X => (&mut self.holdings.x, &mut self.reserves.x),
            Side::Y => (&mut self.holdings.y, &mut self.reserves.y),
        }
    }
}

fn move_balance(from: &mut u64, to: &mut u64, amount: u64) -> Result<()> {
    *from = from
        .checked_sub(amount)
        .ok_or(AmmError::InsufficientBalance)?;
    *to = to.checked_add(amount).ok_or(AmmError::ArithmeticOverflow)?;
    Ok(())
}

impl ReserveCustody for MemoryCustody {
    fn reserves(&self) -> Reserves {
        self.reserves
    }

    fn holdings(&self) -> Holdings {
        self.holdings
    }

    fn credit(&mut self, side: Side, amount: u64) -> Result<()> {
        let (owner, vault) = self.sides(side);
        move_balance(owner, vault, amount)?;
        self.calls.push(CustodyCall::Credit(side, amount));
        Ok(())
    }

    fn debit(&mut self, side: Side, amount: u64) -> Result<()> {
        let (owner, vault) = self.sides(side);
        move_balance(vault, owner, amount)?;
        self.calls.push(CustodyCall::Debit(side, amount));
        Ok(())
    }

    fn mint_lp(&mut self, amount: u64) -> Result<()> {
        self.reserves.lp_supply = self
            .reserves
            .lp_supply
            .checked_add(amount)
            .ok_or(AmmError::ArithmeticOverflow)?;
        self.holdings.lp = self
            .holdings
            .lp
            .checked_add(amount)
            .ok_or(AmmError::ArithmeticOverflow)?;
        self.calls.push(CustodyCall::MintLp(amount));
        Ok(())
    }

    fn burn_lp(&mut self, amount: u64) -> Result<()> {
        self.holdings.lp = self
            .holdings
            .lp
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientBalance)?;
        self.reserves.lp_supply = self
            .reserves
            .lp_supply
            .checked_sub(amount)
            .ok_or(AmmError::InsufficientBalance)?;
        self.calls.push(CustodyCall::BurnLp(amount));
        Ok(())
    }
}
