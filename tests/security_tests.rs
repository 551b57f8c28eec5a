//! Adversarial behavior: wrong-length challenges, malformed messages,
//! mismatched session parameters.

mod common;

use std::thread;

use sigma_protocols::{
    Channel, DlogProver, DlogProverInput, DlogSimulator, DlogStatement, DlogVerifier, Error,
    Group, ModpGroup, ProverComputation, SessionRng, SigmaProtocolProver, SigmaProtocolVerifier,
    Simulator, Witness,
};

use common::{channel_pair, tiny_group};

fn rfc5114_input(group: &ModpGroup) -> DlogProverInput<ModpGroup> {
    let mut rng = SessionRng::new();
    DlogProverInput::from_witness(group, Witness::new(group.random_scalar(&mut rng)))
}

#[test]
fn two_byte_challenge_for_t8_is_a_cheat_attempt() {
    let group = ModpGroup::rfc5114();
    let input = rfc5114_input(&group);
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
fn mismatched_soundness_across_the_wire_is_detected() {
    // The verifier believes t = 16 and sends a two-byte challenge; the
    // prover runs t = 8 and must refuse to answer it.
    let group = ModpGroup::rfc5114();
    let input = rfc5114_input(&group);
    let statement = input.statement().clone();
    let (prover_channel, verifier_channel) = channel_pair();

    let prover_group = group.clone();
    let prover = thread::spawn(move || {
        let computation = DlogProver::new(prover_group, 8).unwrap();
        let mut driver = SigmaProtocolProver::new(prover_channel, computation);
        match driver.prove(input) {
            Err(Error::CheatAttempt(_)) => {}
            other => panic!("expected a cheat attempt, got {other:?}"),
        }
    });

    let computation = DlogVerifier::new(group, 16).unwrap();
    let mut driver = SigmaProtocolVerifier::new(verifier_channel, computation);
    // The prover aborts instead of answering, so the verifier sees the
    // session die on the channel.
    assert!(driver.verify(&statement).is_err());
    prover.join().unwrap();
}

#[test]
fn malformed_first_message_fails_decoding() {
    let group = tiny_group();
    let statement = DlogStatement::new(group.generator());
    let (mut prover_channel, verifier_channel) = channel_pair();

    // A peer that speaks garbage instead of an encoded group element.
    let attacker = thread::spawn(move || {
        prover_channel.send_sized(b"sixteen").unwrap();
        let _ = prover_channel.recv_sized();
        prover_channel.send_sized(b"1").unwrap();
    });

    let computation = DlogVerifier::new(group, 3).unwrap();
    let mut driver = SigmaProtocolVerifier::new(verifier_channel, computation);
    assert!(matches!(
        driver.verify(&statement),
        Err(Error::InvalidGroupElement(_))
    ));
    attacker.join().unwrap();
}

#[test]
fn non_member_element_is_rejected_at_verify() {
    let group = tiny_group();
    let statement = DlogStatement::new(group.generator());
    let (mut prover_channel, verifier_channel) = channel_pair();

    let attacker = thread::spawn(move || {
        // 5 is not in the order-11 subgroup mod 23.
        prover_channel.send_sized(b"5").unwrap();
        let _ = prover_channel.recv_sized();
        prover_channel.send_sized(b"1").unwrap();
    });

    let computation = DlogVerifier::new(group, 3).unwrap();
    let mut driver = SigmaProtocolVerifier::new(verifier_channel, computation);
    assert!(matches!(
        driver.verify(&statement),
        Err(Error::InvalidGroupElement(_))
    ));
    attacker.join().unwrap();
}

#[test]
fn legacy_sentinel_response_is_rejected() {
    let group = tiny_group();
    let statement = DlogStatement::new(group.generator());
    let (mut prover_channel, verifier_channel) = channel_pair();

    let attacker = thread::spawn(move || {
        prover_channel.send_sized(b"8").unwrap();
        let _ = prover_channel.recv_sized();
        // The uninitialized-scalar sentinel of legacy implementations must
        // never be accepted off the wire.
        prover_channel.send_sized(b"-100").unwrap();
    });

    let computation = DlogVerifier::new(group, 3).unwrap();
    let mut driver = SigmaProtocolVerifier::new(verifier_channel, computation);
    assert!(matches!(
        driver.verify(&statement),
        Err(Error::InvalidInput(_))
    ));
    attacker.join().unwrap();
}

#[test]
fn tampered_response_rejects() {
    let group = tiny_group();
    let input = {
        let w = group.scalar_from_decimal("4").unwrap();
        DlogProverInput::from_witness(&group, Witness::new(w))
    };
    let statement = input.statement().clone();
    let (mut prover_channel, verifier_channel) = channel_pair();

    // An honest prover behind a tampering relay: the relay bumps the
    // response scalar by one before forwarding.
    let relay = thread::spawn(move || {
        let relay_group = tiny_group();
        let mut computation = DlogProver::new(relay_group.clone(), 3).unwrap();
        let a = computation.compute_first(input).unwrap();
        prover_channel.send_sized(&a.to_bytes()).unwrap();

        let challenge = prover_channel.recv_sized().unwrap();
        let z = computation.compute_second(&challenge).unwrap();
        let tampered = match z {
            sigma_protocols::SigmaMessage::Scalar(value) => {
                let bumped = relay_group.scalar_add(
                    &relay_group.scalar_from_uint(&value),
                    &relay_group.scalar_from_decimal("1").unwrap(),
                );
                sigma_protocols::SigmaMessage::Scalar(relay_group.scalar_to_uint(&bumped))
            }
            other => other,
        };
        prover_channel.send_sized(&tampered.to_bytes()).unwrap();
    });

    let computation = DlogVerifier::new(group, 3).unwrap();
    let mut driver = SigmaProtocolVerifier::new(verifier_channel, computation);
    assert!(!driver.verify(&statement).unwrap());
    relay.join().unwrap();
}
