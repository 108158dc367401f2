// AMM Program Constants

pub const POOL_SEED: &[u8] = b"pool";
pub const LP_MINT_SEED: &[u8] = b"lp";
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_FEE_BASIS_POINTS: u16 = 10_000; // 100%, a full-fee pool still keeps the invariant
pub const LP_DECIMALS: u8 = 6;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
