use thiserror::Error;

/// Errors produced by the quote and derivation paths.
///
/// Every failure is local and immediately reported; nothing is retried
/// here. Callers that fetched a snapshot with zero virtual reserves must
/// reject it before asking for a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LaunchError {
    /// A virtual reserve used as a divisor is zero.
    #[error("invalid reserves: virtual reserves must be non-zero")]
    InvalidReserves,

    /// The resolved bonding target is zero.
    #[error("invalid bonding target: target must be non-zero")]
    InvalidTarget,

    /// A checked multiplication or addition overflowed.
    #[error("arithmetic overflow during amount calculation")]
    ArithmeticOverflow,

    /// No valid off-curve bump exists for the seed set.
    #[error("program address derivation exhausted the bump range")]
    DerivationExhausted,

    /// The two mints of a pool pair are the same account.
    #[error("cannot order a token pair with identical mints")]
    IdenticalMints,

    /// Account data did not match the expected on-chain layout.
    #[error("account data does not match the expected layout")]
    InvalidAccountData,
}
