//! Parallel AND composition of Sigma protocols.
//!
//! An AND proof runs `N` sub-protocols side by side under *one* challenge:
//! the first and second messages are compound messages collecting the
//! children's messages in order, and the verifier accepts iff every child
//! accepts the shared challenge.
//!
//! Children are heterogeneous (a Schnorr proof next to a Chaum-Pedersen
//! proof, possibly over different groups), so this module is the crate's
//! single dynamic-dispatch seam: the `Erased*` traits accept type-erased
//! statements and inputs, and a blanket impl adapts every typed computation.
//! A type mismatch between a child and its slot surfaces as
//! [`InvalidInput`](crate::Error::InvalidInput).

use std::any::Any;

use crate::crypto::SessionRng;
use crate::message::{MessageShape, SigmaMessage};
use crate::protocol::traits::{
    check_challenge_length, challenge_byte_len, ProverComputation, Simulator, SimulatorOutput,
    VerifierComputation,
};
use crate::{Error, Result};

/// Object-safe face of [`ProverComputation`] for composition.
///
/// Implemented automatically for every prover computation; never implement
/// it by hand.
pub trait ErasedProver {
    /// Runs the first move on a type-erased input.
    fn first_message(&mut self, input: Box<dyn Any + Send>) -> Result<SigmaMessage>;

    /// Runs the second move.
    fn second_message(&mut self, challenge: &[u8]) -> Result<SigmaMessage>;

    /// The soundness parameter `t` in bits.
    fn challenge_bits(&self) -> u32;

    /// A boxed simulator for the same protocol instance.
    fn make_simulator(&self) -> Box<dyn ErasedSimulator + Send>;
}

impl<P> ErasedProver for P
where
    P: ProverComputation,
    P::Input: Any + Send,
    P::Simulator: ErasedSimulator + Send + 'static,
{
    fn first_message(&mut self, input: Box<dyn Any + Send>) -> Result<SigmaMessage> {
        let input = input.downcast::<P::Input>().map_err(|_| {
            Error::InvalidInput("prover input type does not match the sub-protocol".to_string())
        })?;
        self.compute_first(*input)
    }

    fn second_message(&mut self, challenge: &[u8]) -> Result<SigmaMessage> {
        self.compute_second(challenge)
    }

    fn challenge_bits(&self) -> u32 {
        self.soundness_bits()
    }

    fn make_simulator(&self) -> Box<dyn ErasedSimulator + Send> {
        Box::new(self.simulator())
    }
}

/// Object-safe face of [`VerifierComputation`] for composition.
pub trait ErasedVerifier {
    /// Samples and stores a random challenge.
    fn draw_challenge(&mut self);

    /// Stores an externally chosen challenge.
    fn assign_challenge(&mut self, challenge: &[u8]);

    /// The stored challenge; empty until chosen.
    fn stored_challenge(&self) -> &[u8];

    /// Decides a transcript against a type-erased statement.
    fn check(&mut self, statement: &dyn Any, a: &SigmaMessage, z: &SigmaMessage) -> Result<bool>;

    /// The soundness parameter `t` in bits.
    fn challenge_bits(&self) -> u32;

    /// The variant tree of the first prover message.
    fn first_shape(&self) -> MessageShape;

    /// The variant tree of the second prover message.
    fn second_shape(&self) -> MessageShape;
}

impl<V> ErasedVerifier for V
where
    V: VerifierComputation,
    V::Statement: Any,
{
    fn draw_challenge(&mut self) {
        self.sample_challenge()
    }

    fn assign_challenge(&mut self, challenge: &[u8]) {
        self.set_challenge(challenge)
    }

    fn stored_challenge(&self) -> &[u8] {
        self.challenge()
    }

    fn check(&mut self, statement: &dyn Any, a: &SigmaMessage, z: &SigmaMessage) -> Result<bool> {
        let statement = statement.downcast_ref::<V::Statement>().ok_or_else(|| {
            Error::InvalidInput("statement type does not match the sub-protocol".to_string())
        })?;
        self.verify(statement, a, z)
    }

    fn challenge_bits(&self) -> u32 {
        self.soundness_bits()
    }

    fn first_shape(&self) -> MessageShape {
        self.first_message_shape()
    }

    fn second_shape(&self) -> MessageShape {
        self.second_message_shape()
    }
}

/// Object-safe face of [`Simulator`] for composition.
pub trait ErasedSimulator {
    /// Simulates with a fresh random challenge.
    fn run(&mut self, statement: &dyn Any) -> Result<SimulatorOutput>;

    /// Simulates for the given challenge.
    fn run_with_challenge(&mut self, statement: &dyn Any, challenge: &[u8])
        -> Result<SimulatorOutput>;

    /// The soundness parameter `t` in bits.
    fn challenge_bits(&self) -> u32;
}

impl<S> ErasedSimulator for S
where
    S: Simulator,
    S::Statement: Any,
{
    fn run(&mut self, statement: &dyn Any) -> Result<SimulatorOutput> {
        let statement = statement.downcast_ref::<S::Statement>().ok_or_else(|| {
            Error::InvalidInput("statement type does not match the sub-protocol".to_string())
        })?;
        self.simulate(statement)
    }

    fn run_with_challenge(
        &mut self,
        statement: &dyn Any,
        challenge: &[u8],
    ) -> Result<SimulatorOutput> {
        let statement = statement.downcast_ref::<S::Statement>().ok_or_else(|| {
            Error::InvalidInput("statement type does not match the sub-protocol".to_string())
        })?;
        self.simulate_with_challenge(statement, challenge)
    }

    fn challenge_bits(&self) -> u32 {
        self.soundness_bits()
    }
}

/// Ordered list of per-child statements for an AND proof.
#[derive(Default)]
pub struct AndStatement {
    statements: Vec<Box<dyn Any + Send>>,
}

impl AndStatement {
    /// An empty statement list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child statement; order must match the child order of the
    /// verifier.
    pub fn push<S: Any + Send>(&mut self, statement: S) {
        self.statements.push(Box::new(statement));
    }

    /// Number of child statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// Ordered list of per-child prover inputs for an AND proof.
///
/// Each input carries its own statement, exactly as in the stand-alone
/// protocols.
#[derive(Default)]
pub struct AndProverInput {
    inputs: Vec<Box<dyn Any + Send>>,
}

impl AndProverInput {
    /// An empty input list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child input; order must match the child order of the
    /// prover.
    pub fn push<I: Any + Send>(&mut self, input: I) {
        self.inputs.push(Box::new(input));
    }

    /// Number of child inputs.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Prover computations for the AND composition.
pub struct AndProver {
    provers: Vec<Box<dyn ErasedProver + Send>>,
    soundness_bits: u32,
}

impl AndProver {
    /// Composes sub-provers that all share the soundness parameter `t`.
    ///
    /// Fails with [`Error::InvalidConfig`] when any child has a different
    /// `t`: a single challenge is used for every child, so their soundness
    /// parameters must agree.
    pub fn new(provers: Vec<Box<dyn ErasedProver + Send>>, soundness_bits: u32) -> Result<Self> {
        for prover in &provers {
            if prover.challenge_bits() != soundness_bits {
                return Err(Error::InvalidConfig(
                    "sub-prover soundness parameter differs from the composition's".to_string(),
                ));
            }
        }
        Ok(Self {
            provers,
            soundness_bits,
        })
    }
}

impl ProverComputation for AndProver {
    type Input = AndProverInput;
    type Simulator = AndSimulator;

    fn compute_first(&mut self, input: Self::Input) -> Result<SigmaMessage> {
        if input.inputs.len() != self.provers.len() {
            return Err(Error::InvalidInput(format!(
                "{} prover inputs for {} sub-provers",
                input.inputs.len(),
                self.provers.len()
            )));
        }

        let mut first_messages = Vec::with_capacity(self.provers.len());
        for (prover, input) in self.provers.iter_mut().zip(input.inputs) {
            first_messages.push(prover.first_message(input)?);
        }
        Ok(SigmaMessage::Compound(first_messages))
    }

    fn compute_second(&mut self, challenge: &[u8]) -> Result<SigmaMessage> {
        check_challenge_length(challenge, self.soundness_bits)?;

        let mut second_messages = Vec::with_capacity(self.provers.len());
        for prover in &mut self.provers {
            second_messages.push(prover.second_message(challenge)?);
        }
        Ok(SigmaMessage::Compound(second_messages))
    }

    fn soundness_bits(&self) -> u32 {
        self.soundness_bits
    }

    fn simulator(&self) -> Self::Simulator {
        AndSimulator {
            simulators: self.provers.iter().map(|p| p.make_simulator()).collect(),
            soundness_bits: self.soundness_bits,
            rng: SessionRng::new(),
        }
    }
}

/// Verifier computations for the AND composition.
pub struct AndVerifier {
    verifiers: Vec<Box<dyn ErasedVerifier + Send>>,
    soundness_bits: u32,
    challenge: Vec<u8>,
    rng: SessionRng,
}

impl AndVerifier {
    /// Composes sub-verifiers that all share the soundness parameter `t`.
    pub fn new(
        verifiers: Vec<Box<dyn ErasedVerifier + Send>>,
        soundness_bits: u32,
    ) -> Result<Self> {
        for verifier in &verifiers {
            if verifier.challenge_bits() != soundness_bits {
                return Err(Error::InvalidConfig(
                    "sub-verifier soundness parameter differs from the composition's".to_string(),
                ));
            }
        }
        Ok(Self {
            verifiers,
            soundness_bits,
            challenge: Vec::new(),
            rng: SessionRng::new(),
        })
    }
}

impl VerifierComputation for AndVerifier {
    type Statement = AndStatement;

    fn sample_challenge(&mut self) {
        let challenge = self
            .rng
            .challenge_bytes(challenge_byte_len(self.soundness_bits));
        self.set_challenge(&challenge);
    }

    fn set_challenge(&mut self, challenge: &[u8]) {
        self.challenge = challenge.to_vec();
        for verifier in &mut self.verifiers {
            verifier.assign_challenge(challenge);
        }
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
        if statement.statements.len() != self.verifiers.len() {
            return Err(Error::InvalidInput(format!(
                "{} statements for {} sub-verifiers",
                statement.statements.len(),
                self.verifiers.len()
            )));
        }

        let first_messages = match a {
            SigmaMessage::Compound(items) if items.len() == self.verifiers.len() => items,
            SigmaMessage::Compound(_) => {
                return Err(Error::InvalidInput(
                    "first message arity differs from the number of sub-verifiers".to_string(),
                ))
            }
            _ => {
                return Err(Error::InvalidInput(
                    "first message must be a compound message".to_string(),
                ))
            }
        };
        let second_messages = match z {
            SigmaMessage::Compound(items) if items.len() == self.verifiers.len() => items,
            SigmaMessage::Compound(_) => {
                return Err(Error::InvalidInput(
                    "second message arity differs from the number of sub-verifiers".to_string(),
                ))
            }
            _ => {
                return Err(Error::InvalidInput(
                    "second message must be a compound message".to_string(),
                ))
            }
        };

        // Every child is checked; no short-circuiting.
        let mut verified = true;
        for ((verifier, statement), (a_i, z_i)) in self
            .verifiers
            .iter_mut()
            .zip(&statement.statements)
            .zip(first_messages.iter().zip(second_messages))
        {
            verified &= verifier.check(statement.as_ref(), a_i, z_i)?;
        }
        Ok(verified)
    }

    fn soundness_bits(&self) -> u32 {
        self.soundness_bits
    }

    fn first_message_shape(&self) -> MessageShape {
        MessageShape::Compound(self.verifiers.iter().map(|v| v.first_shape()).collect())
    }

    fn second_message_shape(&self) -> MessageShape {
        MessageShape::Compound(self.verifiers.iter().map(|v| v.second_shape()).collect())
    }
}

/// Simulator for the AND composition: every child simulates against the same
/// challenge.
pub struct AndSimulator {
    simulators: Vec<Box<dyn ErasedSimulator + Send>>,
    soundness_bits: u32,
    rng: SessionRng,
}

impl AndSimulator {
    /// Composes sub-simulators that all share the soundness parameter `t`.
    pub fn new(
        simulators: Vec<Box<dyn ErasedSimulator + Send>>,
        soundness_bits: u32,
    ) -> Result<Self> {
        for simulator in &simulators {
            if simulator.challenge_bits() != soundness_bits {
                return Err(Error::InvalidConfig(
                    "sub-simulator soundness parameter differs from the composition's".to_string(),
                ));
            }
        }
        Ok(Self {
            simulators,
            soundness_bits,
            rng: SessionRng::new(),
        })
    }
}

impl Simulator for AndSimulator {
    type Statement = AndStatement;

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
        if statement.statements.len() != self.simulators.len() {
            return Err(Error::InvalidInput(format!(
                "{} statements for {} sub-simulators",
                statement.statements.len(),
                self.simulators.len()
            )));
        }

        let mut first_messages = Vec::with_capacity(self.simulators.len());
        let mut second_messages = Vec::with_capacity(self.simulators.len());
        for (simulator, statement) in self.simulators.iter_mut().zip(&statement.statements) {
            let (a, _, z) = simulator
                .run_with_challenge(statement.as_ref(), challenge)?
                .into_parts();
            first_messages.push(a);
            second_messages.push(z);
        }

        Ok(SimulatorOutput::new(
            SigmaMessage::Compound(first_messages),
            challenge.to_vec(),
            SigmaMessage::Compound(second_messages),
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
    use crate::protocol::dh::{DhProver, DhProverInput, DhStatement, DhVerifier};
    use crate::protocol::dlog::{DlogProver, DlogProverInput, DlogVerifier};
    use crate::protocol::traits::Witness;
    use crate::Group;
    use crypto_bigint::U256;

    fn dlog_input(group: &ModpGroup, w: u64) -> DlogProverInput<ModpGroup> {
        let w = group.scalar_from_uint(&U256::from_u64(w));
        DlogProverInput::from_witness(group, Witness::new(w))
    }

    fn dh_input(group: &ModpGroup, w: u64) -> DhProverInput<ModpGroup> {
        let seven = group.scalar_from_uint(&U256::from_u64(7));
        let h = group.exponentiate(&group.generator(), &seven);
        let w = group.scalar_from_uint(&U256::from_u64(w));
        DhProverInput::from_witness(group, h, Witness::new(w))
    }

    fn two_dlog_prover(group: &ModpGroup) -> AndProver {
        AndProver::new(
            vec![
                Box::new(DlogProver::new(group.clone(), 3).unwrap()),
                Box::new(DlogProver::new(group.clone(), 3).unwrap()),
            ],
            3,
        )
        .unwrap()
    }

    fn two_dlog_verifier(group: &ModpGroup) -> AndVerifier {
        AndVerifier::new(
            vec![
                Box::new(DlogVerifier::new(group.clone(), 3).unwrap()),
                Box::new(DlogVerifier::new(group.clone(), 3).unwrap()),
            ],
            3,
        )
        .unwrap()
    }

    #[test]
    fn two_dlog_and_accepts() {
        let group = ModpGroup::tiny();
        let inputs = [dlog_input(&group, 4), dlog_input(&group, 9)];

        let mut statement = AndStatement::new();
        let mut input = AndProverInput::new();
        for i in &inputs {
            statement.push(i.statement().clone());
            input.push(i.clone());
        }

        let mut prover = two_dlog_prover(&group);
        let mut verifier = two_dlog_verifier(&group);

        let a = prover.compute_first(input).unwrap();
        verifier.sample_challenge();
        let challenge = verifier.challenge().to_vec();
        let z = prover.compute_second(&challenge).unwrap();
        assert!(verifier.verify(&statement, &a, &z).unwrap());
    }

    #[test]
    fn flipping_either_response_rejects() {
        let group = ModpGroup::tiny();
        let inputs = [dlog_input(&group, 4), dlog_input(&group, 9)];

        let mut statement = AndStatement::new();
        let mut input = AndProverInput::new();
        for i in &inputs {
            statement.push(i.statement().clone());
            input.push(i.clone());
        }

        let mut prover = two_dlog_prover(&group);
        let mut verifier = two_dlog_verifier(&group);
        let a = prover.compute_first(input).unwrap();
        verifier.set_challenge(&[0x05]);
        let z = prover.compute_second(&[0x05]).unwrap();

        let responses = match &z {
            SigmaMessage::Compound(items) => items.clone(),
            _ => unreachable!("AND responses are compound"),
        };
        for flipped_slot in 0..responses.len() {
            let mut tampered = responses.clone();
            if let SigmaMessage::Scalar(value) = &tampered[flipped_slot] {
                let bumped = group.scalar_add(
                    &group.scalar_from_uint(value),
                    &group.scalar_from_uint(&U256::ONE),
                );
                tampered[flipped_slot] = SigmaMessage::Scalar(group.scalar_to_uint(&bumped));
            }
            let accepted = verifier
                .verify(&statement, &a, &SigmaMessage::Compound(tampered))
                .unwrap();
            assert!(!accepted, "tampered slot {flipped_slot} must reject");
        }
        assert!(verifier.verify(&statement, &a, &z).unwrap());
    }

    #[test]
    fn heterogeneous_children_share_one_challenge() {
        let group = ModpGroup::tiny();
        let dlog = dlog_input(&group, 4);
        let dh = dh_input(&group, 3);

        let mut statement = AndStatement::new();
        statement.push(dlog.statement().clone());
        statement.push(dh.statement().clone());
        let mut input = AndProverInput::new();
        input.push(dlog.clone());
        input.push(dh.clone());

        let mut prover = AndProver::new(
            vec![
                Box::new(DlogProver::new(group.clone(), 3).unwrap()),
                Box::new(DhProver::new(group.clone(), 3).unwrap()),
            ],
            3,
        )
        .unwrap();
        let mut verifier = AndVerifier::new(
            vec![
                Box::new(DlogVerifier::new(group.clone(), 3).unwrap()),
                Box::new(DhVerifier::new(group.clone(), 3).unwrap()),
            ],
            3,
        )
        .unwrap();

        let a = prover.compute_first(input).unwrap();
        verifier.sample_challenge();
        let shared = verifier.challenge().to_vec();
        let z = prover.compute_second(&shared).unwrap();
        assert!(verifier.verify(&statement, &a, &z).unwrap());

        // Distributivity: each child accepts the same transcript alone.
        let (first_messages, second_messages) = match (&a, &z) {
            (SigmaMessage::Compound(firsts), SigmaMessage::Compound(seconds)) => {
                (firsts.clone(), seconds.clone())
            }
            _ => unreachable!("AND messages are compound"),
        };
        let mut dlog_verifier = DlogVerifier::new(group.clone(), 3).unwrap();
        dlog_verifier.set_challenge(&shared);
        assert!(dlog_verifier
            .verify(dlog.statement(), &first_messages[0], &second_messages[0])
            .unwrap());
        let mut dh_verifier = DhVerifier::new(group, 3).unwrap();
        dh_verifier.set_challenge(&shared);
        assert!(dh_verifier
            .verify(dh.statement(), &first_messages[1], &second_messages[1])
            .unwrap());
    }

    #[test]
    fn mismatched_soundness_is_invalid_config() {
        let group = ModpGroup::tiny();
        let result = AndProver::new(
            vec![
                Box::new(DlogProver::new(group.clone(), 3).unwrap()),
                Box::new(DlogProver::new(group.clone(), 2).unwrap()),
            ],
            3,
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));

        let result = AndVerifier::new(
            vec![Box::new(DlogVerifier::new(group, 2).unwrap())],
            3,
        );
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn arity_mismatch_is_invalid_input() {
        let group = ModpGroup::tiny();
        let mut prover = two_dlog_prover(&group);
        let mut input = AndProverInput::new();
        input.push(dlog_input(&group, 4));
        assert!(matches!(
            prover.compute_first(input),
            Err(Error::InvalidInput(_))
        ));

        let mut verifier = two_dlog_verifier(&group);
        verifier.set_challenge(&[0x05]);
        let mut statement = AndStatement::new();
        statement.push(dlog_input(&group, 4).statement().clone());
        let a = SigmaMessage::Compound(vec![
            SigmaMessage::Element(b"8".to_vec()),
            SigmaMessage::Element(b"8".to_vec()),
        ]);
        let z = SigmaMessage::Compound(vec![
            SigmaMessage::Scalar(U256::ONE),
            SigmaMessage::Scalar(U256::ONE),
        ]);
        assert!(matches!(
            verifier.verify(&statement, &a, &z),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn statement_type_mismatch_is_invalid_input() {
        let group = ModpGroup::tiny();
        let mut verifier = two_dlog_verifier(&group);
        verifier.set_challenge(&[0x05]);

        // A DH statement in a Dlog slot.
        let dh = dh_input(&group, 3);
        let mut statement = AndStatement::new();
        statement.push::<DhStatement<ModpGroup>>(dh.statement().clone());
        statement.push(dlog_input(&group, 4).statement().clone());

        let a = SigmaMessage::Compound(vec![
            SigmaMessage::Element(b"8".to_vec()),
            SigmaMessage::Element(b"8".to_vec()),
        ]);
        let z = SigmaMessage::Compound(vec![
            SigmaMessage::Scalar(U256::ONE),
            SigmaMessage::Scalar(U256::ONE),
        ]);
        assert!(matches!(
            verifier.verify(&statement, &a, &z),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn simulator_output_verifies() {
        let group = ModpGroup::tiny();
        let dlog = dlog_input(&group, 4);
        let dh = dh_input(&group, 3);

        let mut statement = AndStatement::new();
        statement.push(dlog.statement().clone());
        statement.push(dh.statement().clone());

        let prover = AndProver::new(
            vec![
                Box::new(DlogProver::new(group.clone(), 3).unwrap()),
                Box::new(DhProver::new(group.clone(), 3).unwrap()),
            ],
            3,
        )
        .unwrap();
        let mut simulator = prover.simulator();
        let output = simulator
            .simulate_with_challenge(&statement, &[0x05])
            .unwrap();
        assert_eq!(output.challenge(), &[0x05]);

        let mut verifier = AndVerifier::new(
            vec![
                Box::new(DlogVerifier::new(group.clone(), 3).unwrap()),
                Box::new(DhVerifier::new(group, 3).unwrap()),
            ],
            3,
        )
        .unwrap();
        verifier.set_challenge(output.challenge());
        assert!(verifier.verify(&statement, output.a(), output.z()).unwrap());
    }

    #[test]
    fn nested_and_composes() {
        let group = ModpGroup::tiny();
        let inner_input = dlog_input(&group, 9);
        let outer_input = dlog_input(&group, 4);

        let mut inner_statement = AndStatement::new();
        inner_statement.push(inner_input.statement().clone());
        let mut inner_prover_input = AndProverInput::new();
        inner_prover_input.push(inner_input.clone());

        let mut statement = AndStatement::new();
        statement.push(outer_input.statement().clone());
        statement.push(inner_statement);
        let mut input = AndProverInput::new();
        input.push(outer_input.clone());
        input.push(inner_prover_input);

        let inner_prover = AndProver::new(
            vec![Box::new(DlogProver::new(group.clone(), 3).unwrap())],
            3,
        )
        .unwrap();
        let mut prover = AndProver::new(
            vec![
                Box::new(DlogProver::new(group.clone(), 3).unwrap()),
                Box::new(inner_prover),
            ],
            3,
        )
        .unwrap();

        let inner_verifier = AndVerifier::new(
            vec![Box::new(DlogVerifier::new(group.clone(), 3).unwrap())],
            3,
        )
        .unwrap();
        let mut verifier = AndVerifier::new(
            vec![
                Box::new(DlogVerifier::new(group.clone(), 3).unwrap()),
                Box::new(inner_verifier),
            ],
            3,
        )
        .unwrap();

        let a = prover.compute_first(input).unwrap();
        verifier.sample_challenge();
        let challenge = verifier.challenge().to_vec();
        let z = prover.compute_second(&challenge).unwrap();
        assert!(verifier.verify(&statement, &a, &z).unwrap());
    }
}
