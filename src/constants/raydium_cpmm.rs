//! Constants for the Raydium CPMM program that fully-bonded curves
//! migrate into.
//!
//! The AMM configuration address and the pool-creation fee receiver are
//! fixed by Raydium and must be supplied verbatim, never derived.

/// Constants used as seeds for deriving PDAs (Program Derived Addresses)
pub mod seeds {
    /// Seed for the shared vault and LP mint authority PDA
    pub const AUTH_SEED: &[u8] = b"vault_and_lp_mint_auth_seed";

    /// Seed for pool state PDAs
    pub const POOL_SEED: &[u8] = b"pool";

    /// Seed for pool LP mint PDAs
    pub const POOL_LP_MINT_SEED: &[u8] = b"pool_lp_mint";

    /// Seed for per-token pool vault PDAs
    pub const POOL_VAULT_SEED: &[u8] = b"pool_vault";

    /// Seed for pool observation state PDAs
    pub const OBSERVATION_STATE_SEED: &[u8] = b"observation";
}

/// Constants related to program accounts and authorities
pub mod accounts {
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// Public key for the Raydium CPMM program
    pub const RAYDIUM_CPMM: Pubkey = pubkey!("CPMMoo8L3F4NbTegBCKVNunggL7H1ZpdTHKxQB5qKP1C");

    /// AMM configuration account used for migrated pools
    pub const AMM_CONFIG: Pubkey = pubkey!("D4FPEruKEHrG5TenZ2mpDGEfu1iUvTiqBxvpU8HLBvC2");

    /// Receiver of the one-time pool creation fee
    pub const CREATE_POOL_FEE_RECEIVER: Pubkey =
        pubkey!("DNXgeM9EiiaAbaWvwjHj9fQQLAX5ZsfHyvmYUNRAdNC8");
}
