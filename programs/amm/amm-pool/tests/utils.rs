// Test utilities for the AMM pool program

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};
use spl_associated_token_account::get_associated_token_address;

use amm_pool::{
    constants::{LP_MINT_SEED, POOL_SEED},
    errors::AmmError,
    state::Pool,
};

// Program ID matching declare_id! (amm_pool)
pub const AMM_PROGRAM_ID: Pubkey = Pubkey::new_from_array(amm_pool::ID.to_bytes());

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// Token decimals
pub const DECIMALS: u8 = 6;

// Workspace build output, produced by `anchor build`
fn program_path() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../target/deploy/amm_pool.so")
}

// Setup LiteSVM with the AMM program. The suite is `#[ignore]`d and only
// runs on demand, so a missing build is a hard failure here.
pub fn setup_svm() -> LiteSVM {
    let path = program_path();
    let program_bytes = std::fs::read(&path).unwrap_or_else(|e| {
        panic!("{} not readable ({}), run `anchor build` first", path.display(), e)
    });

    let mut svm = LiteSVM::new();
    let _ = svm.add_program(AMM_PROGRAM_ID, &program_bytes);
    svm
}

// On-chain code of a program error (Anchor offsets custom errors by 6000)
pub fn error_code(error: AmmError) -> u32 {
    error as u32 + anchor_lang::error::ERROR_CODE_OFFSET
}

// Assert a failed transaction carries `expected` as its custom error
pub fn assert_amm_error<T: std::fmt::Debug, E: std::fmt::Debug>(
    result: Result<T, E>,
    expected: AmmError,
) {
    let error = format!("{:?}", result.expect_err("Transaction should have failed"));
    let code = format!("Custom({})", error_code(expected));
    assert!(
        error.contains(&code),
        "Expected {:?} ({}), got: {}",
        expected,
        code,
        error
    );
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Derive pool PDA
pub fn derive_pool_pda(seed: u64, mint_x: &Pubkey, mint_y: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            POOL_SEED,
            seed.to_le_bytes().as_ref(),
            mint_x.as_ref(),
            mint_y.as_ref(),
        ],
        &AMM_PROGRAM_ID,
    )
}

// Derive LP mint PDA
pub fn derive_lp_mint_pda(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LP_MINT_SEED, pool.as_ref()], &AMM_PROGRAM_ID)
}

// Decode the on-chain pool record
pub fn fetch_pool(svm: &LiteSVM, pool: &Pubkey) -> Pool {
    let account = svm.get_account(pool).expect("Pool PDA should exist");
    assert_eq!(account.owner, AMM_PROGRAM_ID);
    Pool::try_deserialize(&mut account.data.as_slice()).expect("Pool should decode")
}

// Addresses shared by deposit / withdraw / swap
pub struct PoolAccounts {
    pub pool: Pubkey,
    pub lp_mint: Pubkey,
    pub vault_x: Pubkey,
    pub vault_y: Pubkey,
}

impl PoolAccounts {
    pub fn new(seed: u64, mint_x: &Pubkey, mint_y: &Pubkey) -> Self {
        let (pool, _) = derive_pool_pda(seed, mint_x, mint_y);
        let (lp_mint, _) = derive_lp_mint_pda(&pool);
        Self {
            pool,
            lp_mint,
            vault_x: get_associated_token_address(&pool, mint_x),
            vault_y: get_associated_token_address(&pool, mint_y),
        }
    }
}

// Build initialize instruction
pub fn build_initialize_ix(
    initializer: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    fee_bps: u16,
    authority: &Pubkey,
) -> Instruction {
    let accounts = PoolAccounts::new(seed, mint_x, mint_y);

    let mut data = anchor_discriminator("initialize").to_vec();
    data.extend_from_slice(&seed.to_le_bytes());
    data.extend_from_slice(&fee_bps.to_le_bytes());
    data.extend_from_slice(authority.as_ref());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*initializer, true),
            AccountMeta::new_readonly(*mint_x, false),
            AccountMeta::new_readonly(*mint_y, false),
            AccountMeta::new(accounts.pool, false),
            AccountMeta::new(accounts.lp_mint, false),
            AccountMeta::new(accounts.vault_x, false),
            AccountMeta::new(accounts.vault_y, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Account list for deposit / withdraw / swap. Swaps leave out the user's
// LP token account and only read the LP mint.
fn liquidity_accounts(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    is_swap: bool,
) -> Vec<AccountMeta> {
    let accounts = PoolAccounts::new(seed, mint_x, mint_y);

    let mut metas = vec![
        AccountMeta::new(*user, true),
        AccountMeta::new_readonly(accounts.pool, false),
        AccountMeta::new_readonly(*mint_x, false),
        AccountMeta::new_readonly(*mint_y, false),
    ];
    if is_swap {
        metas.push(AccountMeta::new_readonly(accounts.lp_mint, false));
    } else {
        metas.push(AccountMeta::new(accounts.lp_mint, false));
    }
    metas.push(AccountMeta::new(get_associated_token_address(user, mint_x), false));
    metas.push(AccountMeta::new(get_associated_token_address(user, mint_y), false));
    if !is_swap {
        metas.push(AccountMeta::new(
            get_associated_token_address(user, &accounts.lp_mint),
            false,
        ));
    }
    metas.extend([
        AccountMeta::new(accounts.vault_x, false),
        AccountMeta::new(accounts.vault_y, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]);
    metas
}

// Build deposit instruction
pub fn build_deposit_ix(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    amount: u64,
    max_x: u64,
    max_y: u64,
) -> Instruction {
    let mut data = anchor_discriminator("deposit").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&max_x.to_le_bytes());
    data.extend_from_slice(&max_y.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: liquidity_accounts(user, mint_x, mint_y, seed, false),
        data,
    }
}

// Build withdraw instruction
pub fn build_withdraw_ix(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    amount: u64,
    min_x: u64,
    min_y: u64,
) -> Instruction {
    let mut data = anchor_discriminator("withdraw").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());
    data.extend_from_slice(&min_x.to_le_bytes());
    data.extend_from_slice(&min_y.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: liquidity_accounts(user, mint_x, mint_y, seed, false),
        data,
    }
}

// Build swap instruction
pub fn build_swap_ix(
    user: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    is_x: bool,
    amount_in: u64,
    min_out: u64,
) -> Instruction {
    let mut data = anchor_discriminator("swap").to_vec();
    data.push(is_x as u8);
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&min_out.to_le_bytes());

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: liquidity_accounts(user, mint_x, mint_y, seed, true),
        data,
    }
}

// Build lock / unlock instruction
pub fn build_set_lock_ix(
    authority: &Pubkey,
    mint_x: &Pubkey,
    mint_y: &Pubkey,
    seed: u64,
    locked: bool,
) -> Instruction {
    let (pool, _) = derive_pool_pda(seed, mint_x, mint_y);
    let method = if locked { "lock" } else { "unlock" };

    Instruction {
        program_id: AMM_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(pool, false),
        ],
        data: anchor_discriminator(method).to_vec(),
    }
}
