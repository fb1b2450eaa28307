pub mod launchpad;
pub mod migration;
pub mod raydium_cpmm;
