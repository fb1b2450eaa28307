pub mod common;
pub mod launchpad;
