//! Deterministic off-chain mirror of an on-chain bonding-curve launchpad.
//!
//! Before submitting a transaction, a client must compute exactly the
//! token and SOL amounts, fee splits, and dynamic rates the on-chain
//! program will compute, and derive exactly the account addresses the
//! program expects. This crate does both, and nothing else: no network
//! I/O, no persistence, no signing. Every function is a pure mapping
//! from caller-supplied reserve snapshots and keys to amounts and
//! `(address, bump)` pairs, so concurrent use is always safe.
//!
//! - [`utils::calc`] prices buys and sells against a reserve snapshot,
//!   including the progress-dependent treasury skim and the user /
//!   community token split.
//! - [`utils::price`] derives the display price and bonding progress.
//! - [`pda`] derives every launchpad-owned account plus the Raydium CPMM
//!   accounts a migrated pool needs.
//! - [`accounts`] mirrors the on-chain account layouts the above consume.

pub mod accounts;
pub mod constants;
pub mod error;
pub mod pda;
pub mod utils;

pub use accounts::{BondingCurveAccount, GlobalConfigAccount};
pub use error::LaunchError;
pub use pda::migration::{get_migration_accounts, MigrationAccounts};
pub use utils::calc::common::{calculate_with_slippage_buy, calculate_with_slippage_sell};
pub use utils::calc::launchpad::{
    calculate_sol_out, calculate_tokens_out, dynamic_treasury_rate_bps, BuyQuote, FeeConfig,
};
pub use utils::price::launchpad::{bonding_progress, price_token_in_sol};
