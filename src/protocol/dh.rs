//! Chaum-Pedersen proof that a tuple is a Diffie-Hellman tuple.
//!
//! The prover convinces the verifier that `(g, h, u, v)` satisfies
//! `u = g^w` and `v = h^w` for a known `w`:
//!
//! - First move: sample `r <- [0, q-1]`, send `(a1, a2) = (g^r, h^r)`
//! - Second move: send `z = r + e*w mod q`
//! - Accept iff `VALID_PARAMS(G) && h,u,v in G && g^z == a1 * u^e
//!   && h^z == a2 * v^e`
//!
//! See Hazay-Lindell, protocol 6.2.4.

use crate::crypto::SessionRng;
use crate::message::{MessageShape, SigmaMessage};
use crate::protocol::traits::{
    check_challenge_length, check_soundness_param, challenge_byte_len, Nonce, ProverComputation,
    Simulator, SimulatorOutput, VerifierComputation, Witness,
};
use crate::{Error, Group, Result};

/// Public statement: the tuple `(h, u, v)` claimed to satisfy `u = g^w`,
/// `v = h^w` (the generator `g` comes from the group).
#[derive(Clone, Debug)]
pub struct DhStatement<G: Group> {
    h: G::Element,
    u: G::Element,
    v: G::Element,
}

impl<G: Group> DhStatement<G> {
    /// Wraps the public tuple.
    pub fn new(h: G::Element, u: G::Element, v: G::Element) -> Self {
        Self { h, u, v }
    }

    /// The second base `h`.
    pub fn h(&self) -> &G::Element {
        &self.h
    }

    /// The element `u = g^w`.
    pub fn u(&self) -> &G::Element {
        &self.u
    }

    /// The element `v = h^w`.
    pub fn v(&self) -> &G::Element {
        &self.v
    }
}

/// Prover input: the statement plus the witness `w`.
#[derive(Clone, Debug)]
pub struct DhProverInput<G: Group> {
    statement: DhStatement<G>,
    witness: Witness<G>,
}

impl<G: Group> DhProverInput<G> {
    /// Pairs a statement with its witness. The caller is responsible for
    /// `g^w = u` and `h^w = v`; a mismatch simply yields a rejecting proof.
    pub fn new(statement: DhStatement<G>, witness: Witness<G>) -> Self {
        Self { statement, witness }
    }

    /// Derives `u = g^w` and `v = h^w` from the witness and the base `h`.
    pub fn from_witness(group: &G, h: G::Element, witness: Witness<G>) -> Self {
        let u = group.exponentiate(&group.generator(), witness.secret());
        let v = group.exponentiate(&h, witness.secret());
        Self {
            statement: DhStatement::new(h, u, v),
            witness,
        }
    }

    /// The public part of this input.
    pub fn statement(&self) -> &DhStatement<G> {
        &self.statement
    }
}

/// Prover computations for the Chaum-Pedersen protocol.
pub struct DhProver<G: Group> {
    group: G,
    soundness_bits: u32,
    rng: SessionRng,
    state: Option<(DhProverInput<G>, Nonce<G>)>,
}

impl<G: Group> DhProver<G> {
    /// Creates a prover over `group` with soundness parameter `t` bits.
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

impl<G: Group> ProverComputation for DhProver<G> {
    type Input = DhProverInput<G>;
    type Simulator = DhSimulator<G>;

    fn compute_first(&mut self, input: Self::Input) -> Result<SigmaMessage> {
        let r = self.group.random_scalar(&mut self.rng);
        let a1 = self.group.exponentiate(&self.group.generator(), &r);
        let a2 = self.group.exponentiate(input.statement.h(), &r);
        let message = SigmaMessage::Pair(
            self.group.encode_element(&a1),
            self.group.encode_element(&a2),
        );
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
        DhSimulator {
            group: self.group.clone(),
            soundness_bits: self.soundness_bits,
            rng: SessionRng::new(),
        }
    }
}

/// Verifier computations for the Chaum-Pedersen protocol.
pub struct DhVerifier<G: Group> {
    group: G,
    soundness_bits: u32,
    challenge: Vec<u8>,
    rng: SessionRng,
}

impl<G: Group> DhVerifier<G> {
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

impl<G: Group> VerifierComputation for DhVerifier<G> {
    type Statement = DhStatement<G>;

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

        let (a1, a2) = match a {
            SigmaMessage::Pair(first, second) => (
                self.group.decode_element(first)?,
                self.group.decode_element(second)?,
            ),
            _ => {
                return Err(Error::InvalidInput(
                    "first message must be a pair of group elements".to_string(),
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

        if !self.group.validate_params()
            || !self.group.is_member(statement.h())
            || !self.group.is_member(statement.u())
            || !self.group.is_member(statement.v())
        {
            return Ok(false);
        }

        let e = self.group.scalar_from_be_bytes(&self.challenge)?;
        let first_ok = self.group.exponentiate(&self.group.generator(), &z)
            == self
                .group
                .multiply(&a1, &self.group.exponentiate(statement.u(), &e));
        let second_ok = self.group.exponentiate(statement.h(), &z)
            == self
                .group
                .multiply(&a2, &self.group.exponentiate(statement.v(), &e));
        Ok(first_ok && second_ok)
    }

    fn soundness_bits(&self) -> u32 {
        self.soundness_bits
    }

    fn first_message_shape(&self) -> MessageShape {
        MessageShape::Pair
    }

    fn second_message_shape(&self) -> MessageShape {
        MessageShape::Scalar
    }
}

/// Simulator for the Chaum-Pedersen protocol.
///
/// Samples `z <- [0, q-1]` and computes `a1 = g^z * u^(-e mod q)`,
/// `a2 = h^z * v^(-e mod q)`.
pub struct DhSimulator<G: Group> {
    group: G,
    soundness_bits: u32,
    rng: SessionRng,
}

impl<G: Group> DhSimulator<G> {
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

impl<G: Group> Simulator for DhSimulator<G> {
    type Statement = DhStatement<G>;

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
        let a1 = self.group.multiply(
            &self.group.exponentiate(&self.group.generator(), &z),
            &self.group.exponentiate(statement.u(), &minus_e),
        );
        let a2 = self.group.multiply(
            &self.group.exponentiate(statement.h(), &z),
            &self.group.exponentiate(statement.v(), &minus_e),
        );

        Ok(SimulatorOutput::new(
            SigmaMessage::Pair(
                self.group.encode_element(&a1),
                self.group.encode_element(&a2),
            ),
            challenge.to_vec(),
            SigmaMessage::Scalar(self.group.scalar_to_uint(&z)),
        ))
    }

    fn soundness_bits(&self) -> u32 {
        self.soundness_bits
    }
}
