//! Contracts every concrete Sigma protocol satisfies.
//!
//! A Sigma protocol is a three-move proof: the prover commits (`a`), the
//! verifier challenges (`e`, a uniformly random `t`-bit string), the prover
//! responds (`z`). These traits separate the *computations* (the algebra of
//! each move) from the *drivers* that shuttle messages over a channel, so
//! one driver runs every protocol.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::message::{MessageShape, SigmaMessage};
use crate::{Error, Group, Result};

/// Number of challenge bytes for a soundness parameter of `t` bits.
pub fn challenge_byte_len(soundness_bits: u32) -> usize {
    (soundness_bits as usize + 7) / 8
}

/// Validates a soundness parameter against a group's order.
///
/// Challenges must stay below `2^(bitlen(q)-1) <= q` so that a challenge is a
/// well-defined residue mod `q`.
pub(crate) fn check_soundness_param(soundness_bits: u32, order_bits: u32) -> Result<()> {
    if soundness_bits == 0 || soundness_bits > order_bits.saturating_sub(1) {
        return Err(Error::InvalidConfig(format!(
            "soundness parameter {soundness_bits} is outside (0, {}]",
            order_bits.saturating_sub(1)
        )));
    }
    Ok(())
}

/// Enforces the challenge-length invariant at every consumption site.
pub(crate) fn check_challenge_length(challenge: &[u8], soundness_bits: u32) -> Result<()> {
    if challenge.len() != challenge_byte_len(soundness_bits) {
        return Err(Error::CheatAttempt(format!(
            "challenge is {} bytes, expected {}",
            challenge.len(),
            challenge_byte_len(soundness_bits)
        )));
    }
    Ok(())
}

/// Secret exponent a prover demonstrates knowledge of.
///
/// Automatically zeroized when dropped.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub struct Witness<G: Group> {
    w: G::Scalar,
}

impl<G: Group> Witness<G> {
    /// Wraps a secret scalar.
    pub fn new(w: G::Scalar) -> Self {
        Self { w }
    }

    /// The secret scalar.
    pub fn secret(&self) -> &G::Scalar {
        &self.w
    }
}

/// The random exponent sampled in the first move and consumed in the second.
///
/// Automatically zeroized when dropped.
#[derive(Clone, Debug, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Nonce<G: Group> {
    r: G::Scalar,
}

impl<G: Group> Nonce<G> {
    pub(crate) fn new(r: G::Scalar) -> Self {
        Self { r }
    }

    pub(crate) fn value(&self) -> &G::Scalar {
        &self.r
    }
}

/// An accepting transcript `(a, e, z)` produced without the witness.
#[derive(Clone, Debug)]
pub struct SimulatorOutput {
    a: SigmaMessage,
    e: Vec<u8>,
    z: SigmaMessage,
}

impl SimulatorOutput {
    /// Assembles a transcript.
    pub fn new(a: SigmaMessage, e: Vec<u8>, z: SigmaMessage) -> Self {
        Self { a, e, z }
    }

    /// The first message.
    pub fn a(&self) -> &SigmaMessage {
        &self.a
    }

    /// The challenge bytes.
    pub fn challenge(&self) -> &[u8] {
        &self.e
    }

    /// The second message.
    pub fn z(&self) -> &SigmaMessage {
        &self.z
    }

    /// Decomposes the transcript.
    pub fn into_parts(self) -> (SigmaMessage, Vec<u8>, SigmaMessage) {
        (self.a, self.e, self.z)
    }
}

/// The prover-side computations of one Sigma protocol.
///
/// Implementations hold the transient state (the sampled nonce and the
/// input) between the two moves; [`compute_second`](Self::compute_second)
/// consumes it, so a second response without a fresh first move is a
/// [`ProtocolMisuse`](crate::Error::ProtocolMisuse) error.
pub trait ProverComputation {
    /// Statement plus witness for this protocol.
    type Input;
    /// The matching simulator type.
    type Simulator: Simulator;

    /// First move: samples fresh randomness, stores transient state and
    /// returns the commitment `a`.
    fn compute_first(&mut self, input: Self::Input) -> Result<SigmaMessage>;

    /// Second move: consumes the stored state and returns the response `z`
    /// for the given challenge.
    ///
    /// Fails with [`CheatAttempt`](crate::Error::CheatAttempt) when the
    /// challenge length differs from `ceil(t/8)`.
    fn compute_second(&mut self, challenge: &[u8]) -> Result<SigmaMessage>;

    /// The soundness parameter `t` in bits.
    fn soundness_bits(&self) -> u32;

    /// A simulator for the same protocol, group and soundness parameter.
    fn simulator(&self) -> Self::Simulator;
}

/// The verifier-side computations of one Sigma protocol.
pub trait VerifierComputation {
    /// The public statement being proven.
    type Statement;

    /// Samples and stores a uniformly random `ceil(t/8)`-byte challenge.
    fn sample_challenge(&mut self);

    /// Stores an externally chosen challenge (used by composition, which
    /// shares one challenge across sub-protocols).
    fn set_challenge(&mut self, challenge: &[u8]);

    /// The stored challenge; empty until sampled or set.
    fn challenge(&self) -> &[u8];

    /// Decides the transcript `(a, e, z)` against the statement, where `e`
    /// is the stored challenge.
    ///
    /// Returns `Ok(false)` on rejection. Fails with
    /// [`InvalidInput`](crate::Error::InvalidInput) when a message has the
    /// wrong variant.
    fn verify(
        &mut self,
        statement: &Self::Statement,
        a: &SigmaMessage,
        z: &SigmaMessage,
    ) -> Result<bool>;

    /// The soundness parameter `t` in bits.
    fn soundness_bits(&self) -> u32;

    /// The variant tree of the first prover message, used to decode it.
    fn first_message_shape(&self) -> MessageShape;

    /// The variant tree of the second prover message.
    fn second_message_shape(&self) -> MessageShape;
}

/// Produces accepting transcripts without the witness.
///
/// The existence of such a simulator whose output distribution matches real
/// conversations (conditioned on the challenge) is what makes the protocol
/// honest-verifier zero-knowledge.
pub trait Simulator {
    /// The public statement transcripts are simulated for.
    type Statement;

    /// Simulates with a freshly sampled random challenge.
    fn simulate(&mut self, statement: &Self::Statement) -> Result<SimulatorOutput>;

    /// Simulates an accepting transcript for the *given* challenge.
    ///
    /// Fails with [`CheatAttempt`](crate::Error::CheatAttempt) when the
    /// challenge length differs from `ceil(t/8)`.
    fn simulate_with_challenge(
        &mut self,
        statement: &Self::Statement,
        challenge: &[u8],
    ) -> Result<SimulatorOutput>;

    /// The soundness parameter `t` in bits.
    fn soundness_bits(&self) -> u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn challenge_byte_len_rounds_up() {
        assert_eq!(challenge_byte_len(1), 1);
        assert_eq!(challenge_byte_len(8), 1);
        assert_eq!(challenge_byte_len(9), 2);
        assert_eq!(challenge_byte_len(80), 10);
    }

    #[test]
    fn soundness_param_bounds() {
        assert!(check_soundness_param(0, 256).is_err());
        assert!(check_soundness_param(256, 256).is_err());
        assert!(check_soundness_param(255, 256).is_ok());
        assert!(check_soundness_param(3, 4).is_ok());
        assert!(check_soundness_param(4, 4).is_err());
    }

    #[test]
    fn challenge_length_check() {
        assert!(check_challenge_length(&[0x05], 8).is_ok());
        assert!(matches!(
            check_challenge_length(&[0x05, 0x00], 8),
            Err(Error::CheatAttempt(_))
        ));
        assert!(check_challenge_length(&[], 8).is_err());
    }
}
