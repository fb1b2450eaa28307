//! Per-mint bonding curve account.
//!
//! Snapshot of the on-chain record that prices one token's pre-listing
//! phase. Field order and widths match the program's binary layout; the
//! struct is decoded once from fetched account data and treated as
//! read-only afterwards.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;

use crate::{
    constants::launchpad::global_constants::{
        INITIAL_VIRTUAL_SOL_RESERVES, INITIAL_VIRTUAL_TOKEN_RESERVES, TOKEN_TOTAL_SUPPLY,
    },
    error::LaunchError,
    utils::{
        calc::launchpad::{calculate_sol_out, calculate_tokens_out, BuyQuote, FeeConfig},
        price::launchpad::{bonding_progress, price_token_in_sol},
    },
};

/// Represents the bonding curve state for one mint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct BondingCurveAccount {
    /// Virtual token reserves used for price calculations
    pub virtual_token_reserves: u64,
    /// Virtual SOL reserves used for price calculations
    pub virtual_sol_reserves: u64,
    /// Actual token reserves available for trading
    pub real_token_reserves: u64,
    /// Actual SOL collected by the curve
    pub real_sol_reserves: u64,
    /// Total supply of the token
    pub token_total_supply: u64,
    /// Whether the curve has fully bonded and migrated
    pub complete: bool,
    /// Creator of the token
    pub creator: Pubkey,
}

impl BondingCurveAccount {
    pub const DISCRIMINATOR: [u8; 8] = [23, 183, 248, 55, 96, 216, 172, 96];

    pub const LEN: usize = 8 + // discriminator
        8 + // virtual_token_reserves
        8 + // virtual_sol_reserves
        8 + // real_token_reserves
        8 + // real_sol_reserves
        8 + // token_total_supply
        1 + // complete
        32; // creator

    /// State of a freshly created curve, before any trade
    pub fn new(creator: Pubkey) -> Self {
        Self {
            virtual_token_reserves: INITIAL_VIRTUAL_TOKEN_RESERVES,
            virtual_sol_reserves: INITIAL_VIRTUAL_SOL_RESERVES,
            real_token_reserves: 0,
            real_sol_reserves: 0,
            token_total_supply: TOKEN_TOTAL_SUPPLY,
            complete: false,
            creator,
        }
    }

    /// Decodes a fetched account's raw data, checking the discriminator.
    pub fn from_account_data(data: &[u8]) -> Result<Self, LaunchError> {
        if data.len() < 8 || data[..8] != Self::DISCRIMINATOR {
            return Err(LaunchError::InvalidAccountData);
        }
        solana_sdk::borsh1::try_from_slice_unchecked(&data[8..])
            .map_err(|_| LaunchError::InvalidAccountData)
    }

    /// Quotes a buy against this snapshot.
    pub fn quote_buy(&self, sol_amount: u64, fee_config: &FeeConfig) -> Result<BuyQuote, LaunchError> {
        calculate_tokens_out(
            sol_amount,
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
            self.real_sol_reserves,
            fee_config,
        )
    }

    /// Quotes a sell against this snapshot.
    pub fn quote_sell(&self, token_amount: u64) -> Result<u64, LaunchError> {
        calculate_sol_out(
            token_amount,
            self.virtual_sol_reserves,
            self.virtual_token_reserves,
        )
    }

    /// Display price of the token in SOL.
    pub fn price(&self) -> f64 {
        price_token_in_sol(self.virtual_sol_reserves, self.virtual_token_reserves)
    }

    /// Display bonding completion percentage.
    pub fn progress(&self) -> f64 {
        bonding_progress(self.real_sol_reserves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_curve_quotes_match_free_functions() {
        let curve = BondingCurveAccount::new(Pubkey::new_unique());
        let quote = curve.quote_buy(1_000_000_000, &FeeConfig::default()).unwrap();
        assert_eq!(quote.tokens_out, 27_326_923_076_923);
        assert_eq!(curve.progress(), 0.0);
    }

    #[test]
    fn decode_round_trips_through_account_layout() {
        let curve = BondingCurveAccount::new(Pubkey::new_unique());
        let mut data = Vec::with_capacity(BondingCurveAccount::LEN);
        data.extend_from_slice(&BondingCurveAccount::DISCRIMINATOR);
        data.extend_from_slice(&borsh::to_vec(&curve).unwrap());
        assert_eq!(data.len(), BondingCurveAccount::LEN);

        let decoded = BondingCurveAccount::from_account_data(&data).unwrap();
        assert_eq!(decoded.virtual_token_reserves, curve.virtual_token_reserves);
        assert_eq!(decoded.creator, curve.creator);
    }

    #[test]
    fn wrong_discriminator_is_rejected() {
        let data = [0u8; BondingCurveAccount::LEN];
        assert_eq!(
            BondingCurveAccount::from_account_data(&data),
            Err(LaunchError::InvalidAccountData)
        );
    }
}
