/// Error type covering every failure mode of an interactive proof session.
///
/// Verification *rejection* is not an error: verifiers return `Ok(false)`.
/// Every variant here either aborts the session or reports a construction
/// mistake.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The peer sent a challenge whose length differs from `ceil(t/8)`.
    #[error("cheat attempt: {0}")]
    CheatAttempt(String),

    /// A message or statement had the wrong variant or the wrong arity.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Bad soundness parameter, or mismatched parameters across composed
    /// protocols. Raised at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A driver step was invoked out of protocol order.
    #[error("protocol misuse: {0}")]
    ProtocolMisuse(String),

    /// The underlying channel failed; the session cannot be resumed.
    #[error("transport failure: {0}")]
    Transport(#[from] std::io::Error),

    /// Group parameters do not describe a prime-order subgroup.
    #[error("invalid group parameters: {0}")]
    InvalidParams(String),

    /// A scalar was out of range or malformed.
    #[error("invalid scalar: {0}")]
    InvalidScalar(String),

    /// An element encoding did not decode to a subgroup member.
    #[error("invalid group element: {0}")]
    InvalidGroupElement(String),
}
