#![no_main]

use libfuzzer_sys::fuzz_target;
use sigma_protocols::{MessageShape, SigmaMessage};

fuzz_target!(|data: &[u8]| {
    let shapes = [
        MessageShape::Element,
        MessageShape::Scalar,
        MessageShape::Pair,
        MessageShape::Compound(vec![MessageShape::Element, MessageShape::Scalar]),
        MessageShape::Compound(vec![
            MessageShape::Pair,
            MessageShape::Compound(vec![MessageShape::Scalar]),
        ]),
    ];

    for shape in &shapes {
        if let Ok(message) = SigmaMessage::from_bytes(data, shape) {
            // Whatever decodes must re-encode to a decodable message of the
            // same shape.
            let bytes = message.to_bytes();
            let again = SigmaMessage::from_bytes(&bytes, shape).unwrap();
            assert_eq!(message, again);
        }
    }
});
