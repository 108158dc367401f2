// Reserve Custody
//
// The operations never move tokens themselves. They read balances and issue
// credit/debit/mint/burn through `ReserveCustody`, implemented over SPL token
// CPIs on chain and over plain counters in tests.

use anchor_lang::prelude::*;

#[cfg(test)]
pub mod memory;
pub mod token;

pub use token::*;

/// One side of the pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    X,
    Y,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::X => Side::Y,
            Side::Y => Side::X,
        }
    }
}

/// Vault balances and LP supply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reserves {
    pub x: u64,
    pub y: u64,
    pub lp_supply: u64,
}

impl Reserves {
    pub fn get(&self, side: Side) -> u64 {
        match side {
            Side::X => self.x,
            Side::Y => self.y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x == 0 && self.y == 0 && self.lp_supply == 0
    }
}

/// Balances held by the caller of an operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Holdings {
    pub x: u64,
    pub y: u64,
    pub lp: u64,
}

impl Holdings {
    pub fn get(&self, side: Side) -> u64 {
        match side {
            Side::X => self.x,
            Side::Y => self.y,
        }
    }
}

pub trait ReserveCustody {
    fn reserves(&self) -> Reserves;

    fn holdings(&self) -> Holdings;

    /// Caller -> vault.
    fn credit(&mut self, side: Side, amount: u64) -> Result<()>;

    /// Vault -> caller.
    fn debit(&mut self, side: Side, amount: u64) -> Result<()>;

    /// New LP tokens to the caller.
    fn mint_lp(&mut self, amount: u64) -> Result<()>;

    /// LP tokens taken from the caller and destroyed.
    fn burn_lp(&mut self, amount: u64) -> Result<()>;
}
