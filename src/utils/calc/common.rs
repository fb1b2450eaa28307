/// Maximum SOL a buyer is willing to spend for a quoted amount.
///
/// Pads the quoted cost upward so the instruction still succeeds if the
/// curve moves against the buyer between quoting and execution.
///
/// # Parameters
/// * `amount` - Quoted transaction amount
/// * `basis_points` - Slippage tolerance, 1 basis point = 0.01%
pub fn calculate_with_slippage_buy(amount: u64, basis_points: u64) -> u64 {
    amount + (amount * basis_points / 10000)
}

/// Minimum output a seller will accept for a quoted amount.
///
/// Shaves the quoted proceeds downward by the tolerance; bottoms out at 1
/// so the bound never degenerates to zero on dust amounts.
///
/// # Parameters
/// * `amount` - Quoted transaction amount
/// * `basis_points` - Slippage tolerance, 1 basis point = 0.01%
pub fn calculate_with_slippage_sell(amount: u64, basis_points: u64) -> u64 {
    if amount <= basis_points / 10000 {
        1
    } else {
        amount - (amount * basis_points / 10000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slippage_bounds_bracket_the_amount() {
        assert_eq!(calculate_with_slippage_buy(1_000_000, 100), 1_010_000);
        assert_eq!(calculate_with_slippage_sell(1_000_000, 100), 990_000);
    }

    #[test]
    fn dust_sell_bound_never_reaches_zero() {
        assert_eq!(calculate_with_slippage_sell(0, 500), 1);
    }
}
