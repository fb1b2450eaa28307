//! Global configuration account for the launchpad program.
//!
//! One per deployment, holding the fee schedule and the default curve
//! parameters every new mint starts from.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::launchpad::global_constants::{
        DEFAULT_BONDING_TARGET, DEFAULT_PROTOCOL_FEE_BPS, DEFAULT_TREASURY_FEE_BPS,
        INITIAL_VIRTUAL_SOL_RESERVES, INITIAL_VIRTUAL_TOKEN_RESERVES, TOKEN_TOTAL_SUPPLY,
    },
    error::LaunchError,
    utils::calc::launchpad::FeeConfig,
};

/// Represents the global configuration account for token pricing and fees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct GlobalConfigAccount {
    /// Authority that can modify global settings
    pub authority: Pubkey,
    /// Authority over the protocol-wide treasury
    pub treasury_authority: Pubkey,
    /// Protocol fee on buys, in basis points
    pub protocol_fee_bps: u64,
    /// Flat treasury fee on buys, in basis points
    pub treasury_fee_bps: u64,
    /// Per-deployment bonding target in lamports; 0 = protocol default
    pub bonding_target: u64,
    /// Initial virtual token reserves for new curves
    pub initial_virtual_token_reserves: u64,
    /// Initial virtual SOL reserves for new curves
    pub initial_virtual_sol_reserves: u64,
    /// Total supply minted for each new token
    pub token_total_supply: u64,
}

impl GlobalConfigAccount {
    pub const DISCRIMINATOR: [u8; 8] = [149, 8, 156, 202, 160, 252, 176, 217];

    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // treasury_authority
        8 + // protocol_fee_bps
        8 + // treasury_fee_bps
        8 + // bonding_target
        8 + // initial_virtual_token_reserves
        8 + // initial_virtual_sol_reserves
        8; // token_total_supply

    /// Decodes a fetched account's raw data, checking the discriminator.
    pub fn from_account_data(data: &[u8]) -> Result<Self, LaunchError> {
        if data.len() < 8 || data[..8] != Self::DISCRIMINATOR {
            return Err(LaunchError::InvalidAccountData);
        }
        solana_sdk::borsh1::try_from_slice_unchecked(&data[8..])
            .map_err(|_| LaunchError::InvalidAccountData)
    }

    /// The fee parameters the pricing engine consumes.
    pub fn fee_config(&self) -> FeeConfig {
        FeeConfig {
            protocol_fee_bps: self.protocol_fee_bps,
            treasury_fee_bps: self.treasury_fee_bps,
            bonding_target: self.bonding_target,
        }
    }

    /// The bonding target with the zero sentinel resolved.
    pub fn resolved_bonding_target(&self) -> u64 {
        if self.bonding_target == 0 {
            DEFAULT_BONDING_TARGET
        } else {
            self.bonding_target
        }
    }
}

impl Default for GlobalConfigAccount {
    fn default() -> Self {
        Self {
            authority: Pubkey::default(),
            treasury_authority: Pubkey::default(),
            protocol_fee_bps: DEFAULT_PROTOCOL_FEE_BPS,
            treasury_fee_bps: DEFAULT_TREASURY_FEE_BPS,
            bonding_target: 0,
            initial_virtual_token_reserves: INITIAL_VIRTUAL_TOKEN_RESERVES,
            initial_virtual_sol_reserves: INITIAL_VIRTUAL_SOL_RESERVES,
            token_total_supply: TOKEN_TOTAL_SUPPLY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_target_resolves_to_default() {
        let config = GlobalConfigAccount::default();
        assert_eq!(config.bonding_target, 0);
        assert_eq!(config.resolved_bonding_target(), DEFAULT_BONDING_TARGET);

        let custom = GlobalConfigAccount { bonding_target: 1, ..Default::default() };
        assert_eq!(custom.resolved_bonding_target(), 1);
    }

    #[test]
    fn fee_config_mirrors_account_fields() {
        let config = GlobalConfigAccount::default();
        let fees = config.fee_config();
        assert_eq!(fees.protocol_fee_bps, DEFAULT_PROTOCOL_FEE_BPS);
        assert_eq!(fees.treasury_fee_bps, DEFAULT_TREASURY_FEE_BPS);
        assert_eq!(fees.bonding_target, 0);
    }
}
