//! Typed wire messages exchanged during a Sigma protocol flow.
//!
//! Each protocol fixes statically which variant travels in which move; the
//! receiver decodes against a [`MessageShape`] template describing the
//! expected variant tree, so no uninitialized placeholder message ever
//! exists.

use crypto_bigint::U256;

use crate::crypto::field::{from_decimal, to_decimal};
use crate::{Error, Result};

/// Separator between the two element encodings of a pair message.
const PAIR_SEPARATOR: u8 = b':';

/// Wire tags for compound sub-messages.
const TAG_ELEMENT: u8 = 0;
const TAG_SCALAR: u8 = 1;
const TAG_PAIR: u8 = 2;
const TAG_COMPOUND: u8 = 3;

/// A message sent by the prover during a Sigma protocol execution.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SigmaMessage {
    /// One encoded group element (e.g. a Schnorr commitment).
    Element(Vec<u8>),
    /// One scalar in `[0, q)`; travels as ASCII decimal.
    Scalar(U256),
    /// Two encoded group elements (the Chaum-Pedersen commitment).
    Pair(Vec<u8>, Vec<u8>),
    /// An ordered sequence of sub-messages (AND composition).
    Compound(Vec<SigmaMessage>),
}

/// The variant tree a receiver expects for one protocol move.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MessageShape {
    /// A single encoded group element.
    Element,
    /// A single decimal scalar.
    Scalar,
    /// Two encoded group elements.
    Pair,
    /// A sequence of sub-messages with the given per-slot shapes.
    Compound(Vec<MessageShape>),
}

impl SigmaMessage {
    /// The shape of this message.
    pub fn shape(&self) -> MessageShape {
        match self {
            SigmaMessage::Element(_) => MessageShape::Element,
            SigmaMessage::Scalar(_) => MessageShape::Scalar,
            SigmaMessage::Pair(_, _) => MessageShape::Pair,
            SigmaMessage::Compound(items) => {
                MessageShape::Compound(items.iter().map(SigmaMessage::shape).collect())
            }
        }
    }

    fn tag(&self) -> u8 {
        match self {
            SigmaMessage::Element(_) => TAG_ELEMENT,
            SigmaMessage::Scalar(_) => TAG_SCALAR,
            SigmaMessage::Pair(_, _) => TAG_PAIR,
            SigmaMessage::Compound(_) => TAG_COMPOUND,
        }
    }

    /// Serializes the message for the channel.
    ///
    /// Formats are stable:
    /// - `Element`: the canonical element encoding, verbatim
    /// - `Scalar`: ASCII decimal
    /// - `Pair`: `enc(a) ‖ ":" ‖ enc(b)`
    /// - `Compound`: 4-byte BE sub-message count, then per sub-message a
    ///   1-byte tag, a 4-byte BE length and the payload
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            SigmaMessage::Element(encoding) => encoding.clone(),
            SigmaMessage::Scalar(value) => to_decimal(value).into_bytes(),
            SigmaMessage::Pair(a, b) => {
                let mut out = Vec::with_capacity(a.len() + 1 + b.len());
                out.extend_from_slice(a);
                out.push(PAIR_SEPARATOR);
                out.extend_from_slice(b);
                out
            }
            SigmaMessage::Compound(items) => {
                let mut out = Vec::new();
                out.extend_from_slice(&(items.len() as u32).to_be_bytes());
                for item in items {
                    let payload = item.to_bytes();
                    out.push(item.tag());
                    out.extend_from_slice(&(payload.len() as u32).to_be_bytes());
                    out.extend_from_slice(&payload);
                }
                out
            }
        }
    }

    /// Decodes a message against the expected shape.
    ///
    /// Returns [`Error::InvalidInput`] on any variant, arity or framing
    /// mismatch.
    pub fn from_bytes(bytes: &[u8], shape: &MessageShape) -> Result<Self> {
        match shape {
            MessageShape::Element => Ok(SigmaMessage::Element(bytes.to_vec())),
            MessageShape::Scalar => {
                let digits = core::str::from_utf8(bytes).map_err(|_| {
                    Error::InvalidInput("scalar message is not ASCII decimal".to_string())
                })?;
                Ok(SigmaMessage::Scalar(from_decimal(digits)?))
            }
            MessageShape::Pair => {
                let split = bytes
                    .iter()
                    .position(|&b| b == PAIR_SEPARATOR)
                    .ok_or_else(|| {
                        Error::InvalidInput("pair message is missing its separator".to_string())
                    })?;
                Ok(SigmaMessage::Pair(
                    bytes[..split].to_vec(),
                    bytes[split + 1..].to_vec(),
                ))
            }
            MessageShape::Compound(shapes) => {
                let mut cursor = bytes;
                let count = take_u32(&mut cursor)? as usize;
                if count != shapes.len() {
                    return Err(Error::InvalidInput(format!(
                        "compound message has {count} sub-messages, expected {}",
                        shapes.len()
                    )));
                }

                let mut items = Vec::with_capacity(count);
                for expected in shapes {
                    let tag = take_bytes(&mut cursor, 1)?[0];
                    let len = take_u32(&mut cursor)? as usize;
                    let payload = take_bytes(&mut cursor, len)?;
                    if tag != shape_tag(expected) {
                        return Err(Error::InvalidInput(format!(
                            "compound sub-message tag {tag} does not match the expected variant"
                        )));
                    }
                    items.push(SigmaMessage::from_bytes(payload, expected)?);
                }
                if !cursor.is_empty() {
                    return Err(Error::InvalidInput(
                        "compound message has trailing bytes".to_string(),
                    ));
                }
                Ok(SigmaMessage::Compound(items))
            }
        }
    }
}

fn shape_tag(shape: &MessageShape) -> u8 {
    match shape {
        MessageShape::Element => TAG_ELEMENT,
        MessageShape::Scalar => TAG_SCALAR,
        MessageShape::Pair => TAG_PAIR,
        MessageShape::Compound(_) => TAG_COMPOUND,
    }
}

fn take_bytes<'a>(cursor: &mut &'a [u8], len: usize) -> Result<&'a [u8]> {
    if cursor.len() < len {
        return Err(Error::InvalidInput("truncated compound message".to_string()));
    }
    let (head, tail) = cursor.split_at(len);
    *cursor = tail;
    Ok(head)
}

fn take_u32(cursor: &mut &[u8]) -> Result<u32> {
    let raw = take_bytes(cursor, 4)?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(raw);
    Ok(u32::from_be_bytes(buf))
}
