/// Modular arithmetic and decimal integer codec.
pub mod field;
/// Group trait abstracting over prime-order cyclic groups.
pub mod group;
/// Cryptographically secure random number generation.
pub mod rng;

pub use group::Group;
pub use rng::SessionRng;
