#![allow(dead_code)] // not every test binary uses every helper

use std::net::TcpListener;
use std::thread;

use sigma_protocols::{ModpGroup, TcpChannel};

/// The order-11 subgroup of quadratic residues mod 23, generated by 2.
/// Small enough to check every transcript by hand.
pub fn tiny_group() -> ModpGroup {
    ModpGroup::from_decimal_params("23", "11", "2").unwrap()
}

/// A connected pair of TCP channels over loopback, one per party.
pub fn channel_pair() -> (TcpChannel, TcpChannel) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let accept = thread::spawn(move || listener.accept().unwrap().0);
    let prover_side = TcpChannel::connect(addr).unwrap();
    let verifier_side = TcpChannel::from_stream(accept.join().unwrap());
    (prover_side, verifier_side)
}
