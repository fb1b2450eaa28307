pub mod launchpad;
pub mod raydium_cpmm;
