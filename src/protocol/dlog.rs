//! Schnorr's proof of knowledge of a discrete logarithm.
//!
//! The prover convinces the verifier that it knows `w` such that `g^w = h`:
//!
//! - First move: sample `r <- [0, q-1]`, send `a = g^r`
//! - Second move: send `z = r + e*w mod q`
//! - Accept iff `VALID_PARAMS(G) && h in G && g^z == a * h^e`
//!
//! See Hazay-Lindell, protocol 6.1.1.

use crate::crypto::SessionRng;
use crate::message::{MessageShape, SigmaMessage};
use crate::protocol::traits::{
    check_challenge_length, check_soundness_param, challenge_byte_len, Nonce, ProverComputation,
    Simulator, SimulatorOutput, VerifierComputation, Witness,
};
use crate::{Error, Group, Result};

/// Public statement: an element `h` claimed to satisfy `h = g^w`.
#[derive(Clone, Debug)]
pub struct DlogStatement<G: Group> {
    h: G::Element,
}

impl<G: Group> DlogStatement<G> {
    /// Wraps the public element.
    pub fn new(h: G::Element) -> Self {
        Self { h }
    }

    /// The public element `h`.
    pub fn h(&self) -> &G::Element {
        &self.h
    }
}

/// Prover input: the statement plus the witness `w` with `g^w = h`.
#[derive(Clone, Debug)]
pub struct DlogProverInput<G: Group> {
    statement: DlogStatement<G>,
    witness: Witness<G>,
}

impl<G: Group> DlogProverInput<G> {
    /// Pairs a statement with its witness. The caller is responsible for
    /// `g^w = h`; a mismatch simply yields a rejecting proof.
    pub fn new(statement: DlogStatement<G>, witness: Witness<G>) -> Self {
        Self { statement, witness }
    }

    /// Derives the statement `h = g^w` from the witness.
    pub fn from_witness(group: &G, witness: Witness<G>) -> Self {
        let h = group.exponentiate(&group.generator(), witness.secret());
        Self {
            statement: DlogStatement::new(h),
            witness,
        }
    }

    /// The public part of this input.
    pub fn statement(&self) -> &DlogStatement<G> {
        &self.statement
    }
}

/// Prover computations for the Schnorr protocol.
pub struct DlogProver<G: Group> {
    group: G,
    soundness_bits: u32,
    rng: SessionRng,
    state: Option<(DlogProverInput<G>, Nonce<G>)>,
}

impl<G: Group> DlogProver<G> {
    /// Creates a prover over `group` with soundness parameter `t` bits.
    ///
    /// Fails with [`Error::InvalidConfig`] unless `0 < t <= bitlen(q) - 1`.
    pub fn new(group: G, soundness_bits: u32) -> Result<Self> {
        check_soundness_param(soundness_bits, group.order_bits())?;
        Ok(Self {
            group,
            soundness_bits,
            rng: SessionRng::new(),
            state: None,
        })
    }
}

impl<G: Group> ProverComputation for DlogProver<G> {
    type Input = DlogProverInput<G>;
    type Simulator = DlogSimulator<G>;

    fn compute_first(&mut self, input: Self::Input) -> Result<SigmaMessage> {
        let r = self.group.random_scalar(&mut self.rng);
        let a = self.group.exponentiate(&self.group.generator(), &r);
        let message = SigmaMessage::Element(self.group.encode_element(&a));
        self.state = Some((input, Nonce::new(r)));
        Ok(message)
    }

    fn compute_second(&mut self, challenge: &[u8]) -> Result<SigmaMessage> {
        check_challenge_length(challenge, self.soundness_bits)?;
        let (input, nonce) = self.state.take().ok_or_else(|| {
            Error::ProtocolMisuse("second message requested before the first".to_string())
        })?;

        let e = self.group.scalar_from_be_bytes(challenge)?;
        let ew = self.group.scalar_mul(&e, input.witness.secret());
        let z = self.group.scalar_add(nonce.value(), &ew);
        Ok(SigmaMessage::Scalar(self.group.scalar_to_uint(&z)))
    }

    fn soundness_bits(&self) -> u32 {
        self.soundness_bits
    }

    fn simulator(&self) -> Self::Simulator {
        DlogSimulator {
            group: self.group.clone(),
            soundness_bits: self.soundness_bits,
            rng: SessionRng::new(),
        }
    }
}

/// Verifier computations for the Schnorr protocol.
pub struct DlogVerifier<G: Group> {
    group: G,
    soundness_bits: u32,
    challenge: Vec<u8>,
    rng: SessionRng,
}

impl<G: Group> DlogVerifier<G> {
    /// Creates a verifier over `group` with soundness parameter `t` bits.
    pub fn new(group: G, soundness_bits: u32) -> Result<Self> {
        check_soundness_param(soundness_bits, group.order_bits())?;
        Ok(Self {
            group,
            soundness_bits,
            challenge: Vec::new(),
            rng: SessionRng::new(),
        })
    }
}

impl<G: Group> VerifierComputation for DlogVerifier<G> {
    type Statement = DlogStatement<G>;

    fn sample_challenge(&mut self) {
        self.challenge = self
            .rng
            .challenge_bytes(challenge_byte_len(self.soundness_bits));
    }

    fn set_challenge(&mut self, challenge: &[u8]) {
        self.challenge = challenge.to_vec();
    }

    fn challenge(&self) -> &[u8] {
        &self.challenge
    }

    fn verify(
        &mut self,
        statement: &Self::Statement,
        a: &SigmaMessage,
        z: &SigmaMessage,
    ) -> Result<bool> {
        check_challenge_length(&self.challenge, self.soundness_bits)?;

        let a = match a {
            SigmaMessage::Element(encoding) => self.group.decode_element(encoding)?,
            _ => {
                return Err(Error::InvalidInput(
                    "first message must be a group element".to_string(),
                ))
            }
        };
        let z = match z {
            SigmaMessage::Scalar(value) => self.group.scalar_from_uint(value),
            _ => {
                return Err(Error::InvalidInput(
                    "second message must be a scalar".to_string(),
                ))
            }
        };

        if !self.group.validate_params() || !self.group.is_member(statement.h()) {
            return Ok(false);
        }

        let e = self.group.scalar_from_be_bytes(&self.challenge)?;
        let lhs = self.group.exponentiate(&self.group.generator(), &z);
        let rhs = self
            .group
            .multiply(&a, &self.group.exponentiate(statement.h(), &e));
        Ok(lhs == rhs)
    }

    fn soundness_bits(&self) -> u32 {
        self.soundness_bits
    }

    fn first_message_shape(&self) -> MessageShape {
        MessageShape::Element
    }

    fn second_message_shape(&self) -> MessageShape {
        MessageShape::Scalar
    }
}

/// Simulator for the Schnorr protocol.
///
/// Samples `z <- [0, q-1]` and computes `a = g^z * h^(-e mod q)`, yielding a
/// transcript distributed exactly like an honest one with challenge `e`.
pub struct DlogSimulator<G: Group> {
    group: G,
    soundness_bits: u32,
    rng: SessionRng,
}

impl<G: Group> DlogSimulator<G> {
    /// Creates a simulator over `group` with soundness parameter `t` bits.
    pub fn new(group: G, soundness_bits: u32) -> Result<Self> {
        check_soundness_param(soundness_bits, group.order_bits())?;
        Ok(Self {
            group,
            soundness_bits,
            rng: SessionRng::new(),
        })
    }
}

impl<G: Group> Simulator for DlogSimulator<G> {
    type Statement = DlogStatement<G>;

    fn simulate(&mut self, statement: &Self::Statement) -> Result<SimulatorOutput> {
        let challenge = self
            .rng
            .challenge_bytes(challenge_byte_len(self.soundness_bits));
        self.simulate_with_challenge(statement, &challenge)
    }

    fn simulate_with_challenge(
        &mut self,
        statement: &Self::Statement,
        challenge: &[u8],
    ) -> Result<SimulatorOutput> {
        check_challenge_length(challenge, self.soundness_bits)?;

        let z = self.group.random_scalar(&mut self.rng);
        let e = self.group.scalar_from_be_bytes(challenge)?;
        let minus_e = self.group.scalar_negate(&e);
        let a = self.group.multiply(
            &self.group.exponentiate(&self.group.generator(), &z),
            &self.group.exponentiate(statement.h(), &minus_e),
        );

        Ok(SimulatorOutput::new(
            SigmaMessage::Element(self.group.encode_element(&a)),
            challenge.to_vec(),
            SigmaMessage::Scalar(self.group.scalar_to_uint(&z)),
        ))
    }

    fn soundness_bits(&self) -> u32 {
        self.soundness_bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groups::ModpGroup;
    use crypto_bigint::U256;

    fn tiny_statement(group: &ModpGroup) -> DlogStatement<ModpGroup> {
        // h = 2^4 mod 23 = 16
        let w = group.scalar_from_uint(&U256::from_u64(4));
        DlogStatement::new(group.exponentiate(&group.generator(), &w))
    }

    #[test]
    fn known_transcript_accepts() {
        // Hand-computed session over the tiny group: w = 4, h = 16, r = 3,
        // a = 2^3 = 8, e = 0x05, z = (3 + 5*4) mod 11 = 1.
        let group = ModpGroup::tiny();
        let mut verifier = DlogVerifier::new(group.clone(), 3).unwrap();
        verifier.set_challenge(&[0x05]);

        let accepted = verifier
            .verify(
                &tiny_statement(&group),
                &SigmaMessage::Element(b"8".to_vec()),
                &SigmaMessage::Scalar(U256::from_u64(1)),
            )
            .unwrap();
        assert!(accepted);
    }

    #[test]
    fn flipped_response_rejects() {
        let group = ModpGroup::tiny();
        let mut verifier = DlogVerifier::new(group.clone(), 3).unwrap();
        verifier.set_challenge(&[0x05]);

        let accepted = verifier
            .verify(
                &tiny_statement(&group),
                &SigmaMessage::Element(b"8".to_vec()),
                &SigmaMessage::Scalar(U256::from_u64(2)),
            )
            .unwrap();
        assert!(!accepted);
    }

    #[test]
    fn known_simulated_transcript_accepts() {
        // Simulator algebra with z = 7, e = 0x05:
        // a = 2^7 * 16^(-5) mod 23 = 13 * 4 = 6.
        let group = ModpGroup::tiny();
        let z = group.scalar_from_uint(&U256::from_u64(7));
        let e = group.scalar_from_be_bytes(&[0x05]).unwrap();
        let statement = tiny_statement(&group);
        let a = group.multiply(
            &group.exponentiate(&group.generator(), &z),
            &group.exponentiate(statement.h(), &group.scalar_negate(&e)),
        );
        assert_eq!(group.encode_element(&a), b"6");

        let mut verifier = DlogVerifier::new(group.clone(), 3).unwrap();
        verifier.set_challenge(&[0x05]);
        let accepted = verifier
            .verify(
                &statement,
                &SigmaMessage::Element(group.encode_element(&a)),
                &SigmaMessage::Scalar(U256::from_u64(7)),
            )
            .unwrap();
        assert!(accepted);
    }

    #[test]
    fn honest_run_completes() {
        let group = ModpGroup::tiny();
        let mut rng = crate::SessionRng::new();
        let witness = Witness::new(group.random_scalar(&mut rng));
        let input = DlogProverInput::from_witness(&group, witness);
        let statement = input.statement().clone();

        let mut prover = DlogProver::new(group.clone(), 3).unwrap();
        let mut verifier = DlogVerifier::new(group, 3).unwrap();

        let a = prover.compute_first(input).unwrap();
        verifier.sample_challenge();
        let challenge = verifier.challenge().to_vec();
        let z = prover.compute_second(&challenge).unwrap();
        assert!(verifier.verify(&statement, &a, &z).unwrap());
    }

    #[test]
    fn simulator_output_verifies() {
        let group = ModpGroup::tiny();
        let statement = tiny_statement(&group);
        let mut simulator = DlogSimulator::new(group.clone(), 3).unwrap();

        for supplied in [None, Some(vec![0x02u8])] {
            let output = match supplied {
                Some(e) => simulator.simulate_with_challenge(&statement, &e).unwrap(),
                None => simulator.simulate(&statement).unwrap(),
            };
            let mut verifier = DlogVerifier::new(group.clone(), 3).unwrap();
            verifier.set_challenge(output.challenge());
            assert!(verifier.verify(&statement, output.a(), output.z()).unwrap());
        }
    }

    #[test]
    fn second_message_before_first_is_misuse() {
        let group = ModpGroup::tiny();
        let mut prover = DlogProver::new(group, 3).unwrap();
        assert!(matches!(
            prover.compute_second(&[0x05]),
            Err(Error::ProtocolMisuse(_))
        ));
    }

    #[test]
    fn oversized_challenge_is_a_cheat_attempt() {
        let group = ModpGroup::rfc5114();
        let mut rng = crate::SessionRng::new();
        let witness = Witness::new(group.random_scalar(&mut rng));
        let input = DlogProverInput::from_witness(&group, witness);
        let statement = input.statement().clone();

        let mut prover = DlogProver::new(group.clone(), 8).unwrap();
        prover.compute_first(input).unwrap();
        assert!(matches!(
            prover.compute_second(&[0x00, 0x05]),
            Err(Error::CheatAttempt(_))
        ));

        let mut simulator = DlogSimulator::new(group, 8).unwrap();
        assert!(matches!(
            simulator.simulate_with_challenge(&statement, &[0x00, 0x05]),
            Err(Error::CheatAttempt(_))
        ));
    }

    #[test]
    fn soundness_parameter_is_bounded_by_group_order() {
        let group = ModpGroup::tiny();
        // bitlen(11) = 4, so t = 8 is rejected and t = 3 is the maximum.
        assert!(matches!(
            DlogProver::new(group.clone(), 8),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            DlogVerifier::new(group.clone(), 0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(DlogSimulator::new(group, 3).is_ok());
    }

    #[test]
    fn wrong_message_variant_is_invalid_input() {
        let group = ModpGroup::tiny();
        let statement = tiny_statement(&group);
        let mut verifier = DlogVerifier::new(group, 3).unwrap();
        verifier.set_challenge(&[0x05]);

        let element = SigmaMessage::Element(b"8".to_vec());
        let scalar = SigmaMessage::Scalar(U256::from_u64(1));
        assert!(matches!(
            verifier.verify(&statement, &scalar, &scalar),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            verifier.verify(&statement, &element, &element),
            Err(Error::InvalidInput(_))
        ));
    }
}
