use crate::comm::Channel;
use crate::protocol::traits::ProverComputation;
use crate::{Error, Result};

/// Drives the prover side of a three-move proof over a channel.
///
/// The driver owns the message flow; the [`ProverComputation`] owns the
/// algebra. Moves are totally ordered: `process_first` then
/// `process_second`; anything else is a
/// [`ProtocolMisuse`](crate::Error::ProtocolMisuse) error.
pub struct SigmaProtocolProver<C: Channel, P: ProverComputation> {
    channel: C,
    computation: P,
    done_first: bool,
}

impl<C: Channel, P: ProverComputation> SigmaProtocolProver<C, P> {
    /// Binds a computation to a channel for one proof session.
    pub fn new(channel: C, computation: P) -> Self {
        Self {
            channel,
            computation,
            done_first: false,
        }
    }

    /// Runs the whole proof: both moves, back to back.
    pub fn prove(&mut self, input: P::Input) -> Result<()> {
        self.process_first(input)?;
        self.process_second()
    }

    /// First step: computes the commitment and sends it to the verifier.
    pub fn process_first(&mut self, input: P::Input) -> Result<()> {
        if self.done_first {
            return Err(Error::ProtocolMisuse(
                "first message already sent; expecting the challenge round".to_string(),
            ));
        }

        let a = self.computation.compute_first(input)?;
        self.channel.send_sized(&a.to_bytes())?;
        self.done_first = true;
        Ok(())
    }

    /// Second step: receives the challenge, computes the response and sends
    /// it. Blocks on the channel until the challenge arrives.
    pub fn process_second(&mut self) -> Result<()> {
        if !self.done_first {
            return Err(Error::ProtocolMisuse(
                "second message requested before the first".to_string(),
            ));
        }

        let challenge = self.channel.recv_sized()?;
        let z = self.computation.compute_second(&challenge)?;
        self.channel.send_sized(&z.to_bytes())?;
        self.done_first = false;
        Ok(())
    }
}
