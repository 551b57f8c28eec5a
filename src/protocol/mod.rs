/// Parallel AND composition of Sigma protocols.
pub mod and;
/// Chaum-Pedersen proof of a Diffie-Hellman tuple.
pub mod dh;
/// Schnorr proof of knowledge of a discrete log.
pub mod dlog;
/// Prover-side protocol driver.
pub mod prover;
/// Contracts shared by all Sigma protocol computations.
pub mod traits;
/// Verifier-side protocol driver.
pub mod verifier;

pub use and::{
    AndProver, AndProverInput, AndSimulator, AndStatement, AndVerifier, ErasedProver,
    ErasedSimulator, ErasedVerifier,
};
pub use dh::{DhProver, DhProverInput, DhSimulator, DhStatement, DhVerifier};
pub use dlog::{DlogProver, DlogProverInput, DlogSimulator, DlogStatement, DlogVerifier};
pub use prover::SigmaProtocolProver;
pub use traits::{
    challenge_byte_len, ProverComputation, Simulator, SimulatorOutput, VerifierComputation,
    Witness,
};
pub use verifier::SigmaProtocolVerifier;
