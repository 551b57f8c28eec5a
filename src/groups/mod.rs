/// Runtime-configured prime-order subgroup of `Z_p^*`.
pub mod modp;
/// Ristretto255 prime-order group.
pub mod ristretto;

pub use modp::ModpGroup;
pub use ristretto::Ristretto255;
