//! Address derivation for every account the launchpad program owns.
//!
//! Seed order is part of the on-chain contract: fixed tag bytes first,
//! then entity keys in the order the account was declared on-chain.
//! Reversing two keys yields a different, wrong address with no error
//! signal, so each function here fixes the order once.

use once_cell::sync::Lazy;
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::launchpad::{accounts, seeds},
    error::LaunchError,
};

#[inline]
pub fn get_global_config_pda() -> Result<(Pubkey, u8), LaunchError> {
    static GLOBAL_CONFIG_PDA: Lazy<Option<(Pubkey, u8)>> = Lazy::new(|| {
        Pubkey::try_find_program_address(&[seeds::GLOBAL_CONFIG_SEED], &accounts::LAUNCHPAD)
    });
    (*GLOBAL_CONFIG_PDA).ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_bonding_curve_pda(mint: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::BONDING_CURVE_SEED, mint.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

/// Token account holding the curve's unsold supply.
///
/// Derived through the standard associated-token scheme under the
/// Token-2022 program, not the launchpad's own derivation.
#[inline]
pub fn get_curve_token_account(mint: &Pubkey) -> Result<Pubkey, LaunchError> {
    let (bonding_curve, _) = get_bonding_curve_pda(mint)?;
    Ok(
        spl_associated_token_account::get_associated_token_address_with_program_id(
            &bonding_curve,
            mint,
            &accounts::TOKEN_2022_PROGRAM,
        ),
    )
}

#[inline]
pub fn get_user_position_pda(
    bonding_curve: &Pubkey,
    user: &Pubkey,
) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 3] = &[
        seeds::USER_POSITION_SEED,
        bonding_curve.as_ref(),
        user.as_ref(),
    ];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_vote_record_pda(
    bonding_curve: &Pubkey,
    voter: &Pubkey,
) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 3] = &[
        seeds::VOTE_RECORD_SEED,
        bonding_curve.as_ref(),
        voter.as_ref(),
    ];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_mint_treasury_pda(mint: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::TREASURY_SEED, mint.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_global_treasury_pda() -> Result<(Pubkey, u8), LaunchError> {
    static GLOBAL_TREASURY_PDA: Lazy<Option<(Pubkey, u8)>> = Lazy::new(|| {
        Pubkey::try_find_program_address(&[seeds::GLOBAL_TREASURY_SEED], &accounts::LAUNCHPAD)
    });
    (*GLOBAL_TREASURY_PDA).ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_user_stats_pda(user: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::USER_STATS_SEED, user.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_star_record_pda(user: &Pubkey, mint: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 3] = &[seeds::STAR_SEED, user.as_ref(), mint.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_loan_position_pda(
    mint: &Pubkey,
    borrower: &Pubkey,
) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 3] = &[seeds::LOAN_SEED, mint.as_ref(), borrower.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_collateral_vault_pda(mint: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::COLLATERAL_VAULT_SEED, mint.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_creator_vault_pda(creator: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::CREATOR_VAULT_SEED, creator.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}

#[inline]
pub fn get_vault_link_pda(wallet: &Pubkey) -> Result<(Pubkey, u8), LaunchError> {
    let seeds: &[&[u8]; 2] = &[seeds::VAULT_LINK_SEED, wallet.as_ref()];
    Pubkey::try_find_program_address(seeds, &accounts::LAUNCHPAD)
        .ok_or(LaunchError::DerivationExhausted)
}
