//! # Interactive Sigma Protocol Library
//!
//! ## Overview
//!
//! A Sigma protocol is a three-move, public-coin proof of knowledge: the
//! prover sends a commitment `a`, the verifier replies with a uniformly
//! random `t`-bit challenge `e`, and the prover answers with a response `z`.
//! The verifier then accepts or rejects the transcript `(a, e, z)`. This
//! crate implements the interactive flow end to end:
//!
//! - **Schnorr** proof of knowledge of a discrete log (`g^w = h`)
//! - **Chaum-Pedersen** proof that `(g, h, u, v)` is a Diffie-Hellman tuple
//! - **AND composition** running any number of sub-protocols under one
//!   shared challenge
//! - Per-protocol **simulators** witnessing honest-verifier zero-knowledge
//! - **Drivers** that run either side of the three-move flow over a
//!   length-prefixed byte channel (TCP out of the box)
//!
//! Group arithmetic is abstracted by the [`Group`] trait, with two
//! implementations: a runtime-configured prime-order subgroup of `Z_p^*`
//! ([`ModpGroup`]) and [`Ristretto255`].
//!
//! ## Quick Start
//!
//! ```rust
//! use sigma_protocols::{
//!     DlogProver, DlogProverInput, DlogVerifier, Group, ModpGroup,
//!     ProverComputation, SessionRng, VerifierComputation, Witness,
//! };
//!
//! # fn main() -> sigma_protocols::Result<()> {
//! let group = ModpGroup::rfc5114();
//! let mut rng = SessionRng::new();
//!
//! // Prover: claims knowledge of the discrete log of h = g^w.
//! let witness = Witness::new(group.random_scalar(&mut rng));
//! let input = DlogProverInput::from_witness(&group, witness);
//! let statement = input.statement().clone();
//!
//! // The three moves, with the messages carried by hand; the
//! // `SigmaProtocolProver` / `SigmaProtocolVerifier` drivers do the same
//! // over a channel between two processes.
//! let mut prover = DlogProver::new(group.clone(), 80)?;
//! let mut verifier = DlogVerifier::new(group, 80)?;
//!
//! let a = prover.compute_first(input)?;
//! verifier.sample_challenge();
//! let z = prover.compute_second(verifier.challenge())?;
//! assert!(verifier.verify(&statement, &a, &z)?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Security Considerations
//!
//! - **Soundness**: a cheating prover succeeds with probability at most
//!   `2^-t`; constructors reject `t` larger than `bitlen(q) - 1`
//! - **Zero-knowledge** holds against honest verifiers only; composing into
//!   full zero-knowledge or non-interactive proofs is out of scope here
//! - **Randomness**: every computation owns a [`SessionRng`]; witnesses and
//!   nonces are zeroized on drop
//! - **Sessions are single-shot**: a failed or rejected session is dead,
//!   nothing is retried
//!
//! ## Wire Compatibility
//!
//! Message encodings (decimal scalars, `:`-joined element pairs,
//! tagged compound framing) are stable and kept compatible with existing
//! deployments of these protocols; see [`message`] for the exact formats.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all)]

/// Byte channels connecting the two parties.
pub mod comm;
/// Session configuration loading.
pub mod config;
/// Cryptographic primitives and traits.
pub mod crypto;
/// Error types for the library.
pub mod error;
/// Group implementations.
pub mod groups;
/// Typed wire messages and their codec.
pub mod message;
/// Protocol computations, drivers and composition.
pub mod protocol;

pub use comm::{Channel, TcpChannel};
pub use config::{ProofConfig, ProtocolKind};
pub use crypto::{Group, SessionRng};
pub use error::Error;
pub use groups::{ModpGroup, Ristretto255};
pub use message::{MessageShape, SigmaMessage};
pub use protocol::{
    challenge_byte_len, AndProver, AndProverInput, AndSimulator, AndStatement, AndVerifier,
    DhProver, DhProverInput, DhSimulator, DhStatement, DhVerifier, DlogProver, DlogProverInput,
    DlogSimulator, DlogStatement, DlogVerifier, ErasedProver, ErasedSimulator, ErasedVerifier,
    ProverComputation, SigmaProtocolProver, SigmaProtocolVerifier, Simulator, SimulatorOutput,
    VerifierComputation, Witness,
};

/// A specialized Result type for Sigma protocol operations.
pub type Result<T> = core::result::Result<T, Error>;
