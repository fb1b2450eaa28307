//! Address derivation for the Raydium CPMM program.
//!
//! Pool-level derivations take the pool's two token mints in canonical
//! order; use [`sort_token_mints`] before deriving a pool address.

use once_cell::sync::Lazy;
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::raydium_cpmm::{accounts, seeds},
    error::LaunchError,
};

/// Orders two token mints the way the CPMM program expects.
///
/// Comparison is over raw key bytes, most-significant byte first; the
/// smaller key becomes `token0`. The ordering is total, so for any two
/// distinct mints exactly one arrangement is canonical. Identical mints
/// cannot form a pool and are a caller error.
#[inline]
pub fn sort_token_mints(
    mint_a: &Pubkey,
    mint_b: &Pubkey,
) -> Result<(Pubkey, Pubkey), LaunchError> {
    if mint_a == mint_b {
        return Err(LaunchError::IdenticalMints);
    }
    if mint_a.to_bytes() < mint_b.to_bytes() {
        Ok((*mint_a, *mint_b))
    } else {
        Ok((*mint_b, *mint_a))
    }
}

#[inline]
pub fn get_pool_authority_pda() -> Result<(Pubkey, u8), LaunchError> {
    static POOL_AUTHORITY_PDA: Lazy<Option<(Pubkey, u8)>> = Lazy::new(|| {
        Pubkey::try_find_program_address(&[seeds::AUTH_SEED], &accounts::RAYDIUM_CPMM)
    });
    (*POOL_AUTHORITY_PDA).ok_or(LaunchError::DerivationExhausted)
}

/// Derives the pool state address for an ordered mint pair.
///
/// `token0` and `token1` must already be in canonical order.
#[inline]
pub fn get_pool_pda(
    amm_config: &Pubkey,
    token0: &Pubkey,
    token1: &Pubkey,
) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 4] = &[
        seeds::POOL_SEED,
        amm_config.as_ref(),
        token0.as_ref(),
        token1.as_ref(),
    ];
    Pubkey::try_find_program_address(seeds, &accounts::RAYDIUM_CPMM)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_lp_mint_pda(pool_state: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::POOL_LP_MINT_SEED, pool_state.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::RAYDIUM_CPMM)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_vault_pda(pool_state: &Pubkey, mint: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 3] = &[seeds::POOL_VAULT_SEED, pool_state.as_ref(), mint.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::RAYDIUM_CPMM)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_observation_state_pda(pool_state: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::OBSERVATION_STATE_SEED, pool_state.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::RAYDIUM_CPMM)
        .ok_or(LaunchError::DerivationExhausted)
}
