//! Account bundle for migrating a fully-bonded curve into a Raydium
//! CPMM pool.

use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::{launchpad::accounts::WSOL_MINT, raydium_cpmm::accounts},
    error::LaunchError,
    pda::raydium_cpmm::{
        get_lp_mint_pda, get_observation_state_pda, get_pool_authority_pda, get_pool_pda,
        get_vault_pda, sort_token_mints,
    },
};

/// Every CPMM-side account needed to create and seed the pool for one
/// migrated token.
///
/// Addresses are derived, not validated: nothing here checks that the
/// pool exists on chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationAccounts {
    /// AMM configuration, fixed by Raydium
    pub amm_config: Pubkey,
    /// Pool creation fee receiver, fixed by Raydium
    pub create_pool_fee_receiver: Pubkey,
    /// Shared vault and LP mint authority
    pub pool_authority: Pubkey,
    /// Pool state account
    pub pool_state: Pubkey,
    /// LP token mint
    pub lp_mint: Pubkey,
    /// Canonically smaller token mint
    pub token0_mint: Pubkey,
    /// Canonically larger token mint
    pub token1_mint: Pubkey,
    /// Pool vault for `token0_mint`
    pub token0_vault: Pubkey,
    /// Pool vault for `token1_mint`
    pub token1_vault: Pubkey,
    /// Price observation state account
    pub observation_state: Pubkey,
}

/// Derives the full CPMM account set for the pool pairing `mint` with
/// wrapped SOL.
///
/// # Arguments
/// * `mint` - The migrated token's mint; the other side of the pool is
///   always [`WSOL_MINT`]
///
/// # Returns
/// The ordered [`MigrationAccounts`] bundle
pub fn get_migration_accounts(mint: &Pubkey) -> Result<MigrationAccounts, LaunchError> {
    let (token0_mint, token1_mint) = sort_token_mints(&WSOL_MINT, mint)?;

    let (pool_authority, _) = get_pool_authority_pda()?;
    let (pool_state, _) = get_pool_pda(&accounts::AMM_CONFIG, &token0_mint, &token1_mint)?;
    let (lp_mint, _) = get_lp_mint_pda(&pool_state)?;
    let (token0_vault, _) = get_vault_pda(&pool_state, &token0_mint)?;
    let (token1_vault, _) = get_vault_pda(&pool_state, &token1_mint)?;
    let (observation_state, _) = get_observation_state_pda(&pool_state)?;

    log::debug!("derived migration pool {} for mint {}", pool_state, mint);

    Ok(MigrationAccounts {
        amm_config: accounts::AMM_CONFIG,
        create_pool_fee_receiver: accounts::CREATE_POOL_FEE_RECEIVER,
        pool_authority,
        pool_state,
        lp_mint,
        token0_mint,
        token1_mint,
        token0_vault,
        token1_vault,
        observation_state,
    })
}
