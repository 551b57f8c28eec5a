//! Byte channel between the two parties of a proof session.
//!
//! The core never fragments a logical message: every commitment, challenge
//! and response travels as one sized frame. Reads are the only blocking
//! points of a session; a timeout or EOF surfaces as
//! [`Error::Transport`](crate::Error::Transport) and kills the session.

use std::io::{Read, Write};
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::{Error, Result};

/// Upper bound on a single frame; anything larger is a corrupt or hostile
/// length prefix.
const MAX_FRAME_LEN: u32 = 16 * 1024 * 1024;

/// A reliable, ordered byte channel carrying sized frames.
pub trait Channel {
    /// Writes one length-prefixed frame.
    fn send_sized(&mut self, payload: &[u8]) -> Result<()>;

    /// Reads one length-prefixed frame. Blocks until a full frame arrives.
    fn recv_sized(&mut self) -> Result<Vec<u8>>;
}

/// TCP channel framing each message with a 4-byte big-endian length prefix.
pub struct TcpChannel {
    stream: TcpStream,
}

impl TcpChannel {
    /// Connects to the peer at `addr`.
    pub fn connect<A: ToSocketAddrs>(addr: A) -> Result<Self> {
        Ok(Self {
            stream: TcpStream::connect(addr)?,
        })
    }

    /// Wraps an already-connected stream (e.g. from a listener's `accept`).
    pub fn from_stream(stream: TcpStream) -> Self {
        Self { stream }
    }

    /// Applies a read timeout to every subsequent blocking receive.
    pub fn set_read_timeout(&self, timeout: Option<Duration>) -> Result<()> {
        self.stream.set_read_timeout(timeout)?;
        Ok(())
    }
}

impl Channel for TcpChannel {
    fn send_sized(&mut self, payload: &[u8]) -> Result<()> {
        let len = u32::try_from(payload.len())
            .ok()
            .filter(|len| *len <= MAX_FRAME_LEN)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "message of {} bytes exceeds the maximum frame size",
                    payload.len()
                ))
            })?;

        self.stream.write_all(&len.to_be_bytes())?;
        self.stream.write_all(payload)?;
        self.stream.flush()?;
        Ok(())
    }

    fn recv_sized(&mut self) -> Result<Vec<u8>> {
        let mut prefix = [0u8; 4];
        self.stream.read_exact(&mut prefix)?;
        let len = u32::from_be_bytes(prefix);
        if len > MAX_FRAME_LEN {
            return Err(Error::Transport(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("frame length {len} exceeds the maximum frame size"),
            )));
        }

        let mut payload = vec![0u8; len as usize];
        self.stream.read_exact(&mut payload)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn frames_round_trip_over_localhost() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let echo = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut channel = TcpChannel::from_stream(stream);
            let frame = channel.recv_sized().unwrap();
            channel.send_sized(&frame).unwrap();
            let empty = channel.recv_sized().unwrap();
            channel.send_sized(&empty).unwrap();
        });

        let mut channel = TcpChannel::connect(addr).unwrap();
        channel.send_sized(b"commitment").unwrap();
        assert_eq!(channel.recv_sized().unwrap(), b"commitment");
        channel.send_sized(b"").unwrap();
        assert_eq!(channel.recv_sized().unwrap(), b"");

        echo.join().unwrap();
    }

    #[test]
    fn closed_peer_surfaces_as_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let closer = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            drop(stream);
        });

        let mut channel = TcpChannel::connect(addr).unwrap();
        closer.join().unwrap();
        match channel.recv_sized() {
            Err(Error::Transport(_)) => {}
            other => panic!("expected a transport error, got {other:?}"),
        }
    }
}
