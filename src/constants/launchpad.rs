//! Constants for the launchpad program.
//!
//! This module contains various constants used throughout the crate, including:
//!
//! - Seeds for deriving Program Derived Addresses (PDAs)
//! - Program account addresses and public keys
//! - Curve economics parameters (fee rates, the treasury rate band, the
//!   bonding target)
//!
//! The constants are organized into submodules for better organization:
//!
//! - `seeds`: Contains seed values used for PDA derivation
//! - `accounts`: Contains important program account addresses
//! - `global_constants`: Contains curve and fee parameters
//!
//! Seed tags are versioned implicitly: changing a tag changes every derived
//! address, so they are immutable constants and never computed.

/// Constants used as seeds for deriving PDAs (Program Derived Addresses)
pub mod seeds {
    /// Seed for the global configuration PDA
    pub const GLOBAL_CONFIG_SEED: &[u8] = b"global_config";

    /// Seed for per-mint bonding curve PDAs
    pub const BONDING_CURVE_SEED: &[u8] = b"bonding_curve";

    /// Seed for per-(curve, user) position PDAs
    pub const USER_POSITION_SEED: &[u8] = b"user_position";

    /// Seed for per-(curve, voter) vote record PDAs
    pub const VOTE_RECORD_SEED: &[u8] = b"vote_record";

    /// Seed for per-mint treasury PDAs
    pub const TREASURY_SEED: &[u8] = b"treasury";

    /// Seed for the protocol-wide treasury PDA
    pub const GLOBAL_TREASURY_SEED: &[u8] = b"global_treasury";

    /// Seed for per-user stats PDAs
    pub const USER_STATS_SEED: &[u8] = b"user_stats";

    /// Seed for per-(user, mint) star record PDAs
    pub const STAR_SEED: &[u8] = b"star";

    /// Seed for per-(mint, borrower) loan position PDAs
    pub const LOAN_SEED: &[u8] = b"loan";

    /// Seed for per-mint collateral vault PDAs
    pub const COLLATERAL_VAULT_SEED: &[u8] = b"collateral_vault";

    /// Seed for per-creator vault PDAs
    pub const CREATOR_VAULT_SEED: &[u8] = b"creator_vault";

    /// Seed for per-wallet vault link PDAs
    pub const VAULT_LINK_SEED: &[u8] = b"vault_link";
}

pub mod global_constants {
    pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000; // 10^9 for solana lamports

    pub const SCALE: u64 = 1_000_000; // 10^6 for token decimals

    pub const INITIAL_VIRTUAL_TOKEN_RESERVES: u64 = 1_073_000_000_000_000;

    pub const INITIAL_VIRTUAL_SOL_RESERVES: u64 = 30_000_000_000;

    pub const TOKEN_TOTAL_SUPPLY: u64 = 1_000_000_000 * SCALE; // 1 billion tokens

    /// Denominator for all basis-point arithmetic
    pub const BPS_DENOMINATOR: u64 = 10_000;

    /// Protocol fee charged on buys, in basis points (1%)
    pub const DEFAULT_PROTOCOL_FEE_BPS: u64 = 100;

    /// Flat treasury fee charged on buys, in basis points (1%)
    pub const DEFAULT_TREASURY_FEE_BPS: u64 = 100;

    /// Lamports of real SOL at which a curve is considered fully bonded.
    /// Used when a per-mint target of 0 is configured.
    pub const DEFAULT_BONDING_TARGET: u64 = 200 * LAMPORTS_PER_SOL;

    /// Treasury skim rate at zero bonding progress (20%)
    pub const TREASURY_RATE_MAX_BPS: u64 = 2_000;

    /// Treasury skim rate floor at full bonding progress (5%)
    pub const TREASURY_RATE_MIN_BPS: u64 = 500;

    /// Share of bought tokens delivered to the buyer (90%); the remainder
    /// accrues to the community pool.
    pub const USER_SHARE_BPS: u64 = 9_000;
}

/// Constants related to program accounts and authorities
pub mod accounts {
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// Public key for the launchpad program
    pub const LAUNCHPAD: Pubkey = pubkey!("EBp7g12JDT5SoPvPpGJVY95PtQMYvpp89c8M9frZqu5q");

    /// System Program ID
    pub const SYSTEM_PROGRAM: Pubkey = pubkey!("11111111111111111111111111111111");

    /// Token Program ID
    pub const TOKEN_PROGRAM: Pubkey = spl_token::ID;

    /// Token-2022 Program ID; curve token accounts live under this program
    pub const TOKEN_2022_PROGRAM: Pubkey = pubkey!("TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb");

    /// Associated Token Program ID
    pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey =
        pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

    /// Wrapped SOL mint
    pub const WSOL_MINT: Pubkey = pubkey!("So11111111111111111111111111111111111111112");

    /// Rent Sysvar ID
    pub const RENT: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");
}
