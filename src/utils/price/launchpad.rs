use crate::constants::launchpad::global_constants::DEFAULT_BONDING_TARGET;

/// Calculate the display price of the token from virtual reserves.
///
/// This is a raw reserve ratio for display only; settlement always uses
/// the integer formulas in [`crate::utils::calc::launchpad`].
///
/// # Arguments
/// * `virtual_sol_reserves` - Virtual SOL reserves in the bonding curve
/// * `virtual_token_reserves` - Virtual token reserves in the bonding curve
///
/// # Returns
/// Token price as f64
pub fn price_token_in_sol(virtual_sol_reserves: u64, virtual_token_reserves: u64) -> f64 {
    if virtual_token_reserves == 0 {
        return 0.0;
    }
    virtual_sol_reserves as f64 / virtual_token_reserves as f64
}

/// Calculate bonding completion as a percentage.
///
/// Uses the fixed 200 SOL target regardless of any per-mint configured
/// target; callers that need per-mint accuracy must resolve the target
/// from the global configuration and compare reserves themselves.
///
/// # Arguments
/// * `real_sol_reserves` - Actual SOL collected by the curve (lamports)
///
/// # Returns
/// Completion percentage in [0, 100] as f64
pub fn bonding_progress(real_sol_reserves: u64) -> f64 {
    if real_sol_reserves >= DEFAULT_BONDING_TARGET {
        return 100.0;
    }
    real_sol_reserves as f64 * 100.0 / DEFAULT_BONDING_TARGET as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::launchpad::global_constants::{
        INITIAL_VIRTUAL_SOL_RESERVES, INITIAL_VIRTUAL_TOKEN_RESERVES, LAMPORTS_PER_SOL,
    };

    #[test]
    fn initial_price_is_reserve_ratio() {
        let price =
            price_token_in_sol(INITIAL_VIRTUAL_SOL_RESERVES, INITIAL_VIRTUAL_TOKEN_RESERVES);
        assert!((price - 30_000.0 / 1_073_000_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn price_of_empty_curve_is_zero() {
        assert_eq!(price_token_in_sol(INITIAL_VIRTUAL_SOL_RESERVES, 0), 0.0);
    }

    #[test]
    fn progress_is_linear_and_capped() {
        assert_eq!(bonding_progress(0), 0.0);
        assert_eq!(bonding_progress(50 * LAMPORTS_PER_SOL), 25.0);
        assert_eq!(bonding_progress(200 * LAMPORTS_PER_SOL), 100.0);
        assert_eq!(bonding_progress(u64::MAX), 100.0);
    }
}
