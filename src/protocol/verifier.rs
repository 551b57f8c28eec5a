use crate::comm::Channel;
use crate::message::{MessageShape, SigmaMessage};
use crate::protocol::traits::VerifierComputation;
use crate::{Error, Result};

/// Drives the verifier side of a three-move proof over a channel.
///
/// Holds the expected variant tree of each prover message (taken from the
/// computation at construction), so the receiver always knows how to decode
/// — no placeholder message values exist.
pub struct SigmaProtocolVerifier<C: Channel, V: VerifierComputation> {
    channel: C,
    computation: V,
    first_shape: MessageShape,
    second_shape: MessageShape,
    a: Option<SigmaMessage>,
    done_challenge: bool,
}

impl<C: Channel, V: VerifierComputation> SigmaProtocolVerifier<C, V> {
    /// Binds a computation to a channel for one proof session.
    pub fn new(channel: C, computation: V) -> Self {
        let first_shape = computation.first_message_shape();
        let second_shape = computation.second_message_shape();
        Self {
            channel,
            computation,
            first_shape,
            second_shape,
            a: None,
            done_challenge: false,
        }
    }

    /// Runs the whole verification: challenge round, then the accept check.
    pub fn verify(&mut self, statement: &V::Statement) -> Result<bool> {
        self.send_challenge()?;
        self.process_verify(statement)
    }

    /// Samples the challenge ahead of time (delegates to the computation).
    pub fn sample_challenge(&mut self) {
        self.computation.sample_challenge();
    }

    /// Overrides the challenge (delegates to the computation).
    pub fn set_challenge(&mut self, challenge: &[u8]) {
        self.computation.set_challenge(challenge);
    }

    /// The challenge that will be (or was) sent; empty until chosen.
    pub fn challenge(&self) -> &[u8] {
        self.computation.challenge()
    }

    /// Challenge round: receives the prover's commitment, samples the
    /// challenge unless one was already chosen, and sends it. Blocks on the
    /// channel until the commitment arrives.
    pub fn send_challenge(&mut self) -> Result<()> {
        if self.done_challenge {
            return Err(Error::ProtocolMisuse(
                "challenge already sent; expecting the verification round".to_string(),
            ));
        }

        let raw = self.channel.recv_sized()?;
        self.a = Some(SigmaMessage::from_bytes(&raw, &self.first_shape)?);

        if self.computation.challenge().is_empty() {
            self.computation.sample_challenge();
        }
        let challenge = self.computation.challenge().to_vec();
        self.channel.send_sized(&challenge)?;
        self.done_challenge = true;
        Ok(())
    }

    /// Accept check: receives the response and decides the transcript.
    /// Blocks on the channel until the response arrives.
    pub fn process_verify(&mut self, statement: &V::Statement) -> Result<bool> {
        if !self.done_challenge {
            return Err(Error::ProtocolMisuse(
                "verification requested before the challenge round".to_string(),
            ));
        }

        let raw = self.channel.recv_sized()?;
        let z = SigmaMessage::from_bytes(&raw, &self.second_shape)?;
        let a = self.a.take().ok_or_else(|| {
            Error::ProtocolMisuse("first prover message is no longer available".to_string())
        })?;
        self.done_challenge = false;
        self.computation.verify(statement, &a, &z)
    }
}
