use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub pool: Pubkey,
    pub seed: u64,
    pub authority: Pubkey,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub lp_mint: Pubkey,
    pub fee_bps: u16,
}

#[event]
pub struct LiquidityDeposited {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_minted: u64,
    pub lp_supply: u64,
}

#[event]
pub struct LiquidityWithdrawn {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub amount_x: u64,
    pub amount_y: u64,
    pub lp_burned: u64,
    pub lp_supply: u64,
}

#[event]
pub struct TokensSwapped {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub x_to_y: bool,
    pub amount_in: u64,
    pub amount_out: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
}

#[event]
pub struct PoolLockChanged {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub locked: bool,
}
