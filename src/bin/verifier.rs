use std::net::TcpListener;
use std::path::{Path, PathBuf};

use clap::Parser;
use crypto_bigint::U256;
use sigma_protocols::{
    DhStatement, DhVerifier, DlogStatement, DlogVerifier, Group, ModpGroup, ProofConfig,
    ProtocolKind, SigmaProtocolVerifier, TcpChannel, Witness,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "verifier")]
#[command(about = "Sigma protocol verifier (role 2)", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the TOML session configuration
    #[arg(short, long, env = "SIGMA_CONFIG", default_value = "config/session.toml")]
    config: PathBuf,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    match run(&args.config) {
        Ok(true) => info!("Verifier output: Success"),
        Ok(false) => {
            warn!("Verifier output: Failure");
            std::process::exit(1);
        }
        Err(err) => {
            eprintln!("Proof session failed: {err}");
            std::process::exit(2);
        }
    }
}

fn run(config_path: &Path) -> sigma_protocols::Result<bool> {
    let config = ProofConfig::load(config_path)?;
    let group = config.group.build()?;
    // Sample setup: the verifier derives the public statement from the
    // shared witness instead of receiving it out of band.
    let witness = Witness::<ModpGroup>::new(group.scalar_from_decimal(&config.protocol.witness)?);
    let addr = config.peer.addr()?;

    let listener = TcpListener::bind(addr)?;
    info!(%addr, "listening for the prover");
    let (stream, prover_addr) = listener.accept()?;
    info!(%prover_addr, protocol = ?config.protocol.kind, "prover connected");
    let channel = TcpChannel::from_stream(stream);

    match config.protocol.kind {
        ProtocolKind::Dlog => {
            let h = group.exponentiate(&group.generator(), witness.secret());
            let statement = DlogStatement::new(h);
            let computation = DlogVerifier::new(group, config.protocol.soundness_bits)?;
            let mut verifier = SigmaProtocolVerifier::new(channel, computation);
            verifier.verify(&statement)
        }
        ProtocolKind::Dh => {
            let h = second_base(&group);
            let u = group.exponentiate(&group.generator(), witness.secret());
            let v = group.exponentiate(&h, witness.secret());
            let statement = DhStatement::new(h, u, v);
            let computation = DhVerifier::new(group, config.protocol.soundness_bits)?;
            let mut verifier = SigmaProtocolVerifier::new(channel, computation);
            verifier.verify(&statement)
        }
    }
}

/// The fixed second base `h = g^2` used by the DH sample session. Both
/// roles derive it the same way.
fn second_base(group: &ModpGroup) -> <ModpGroup as Group>::Element {
    let two = group.scalar_from_uint(&U256::from_u64(2));
    group.exponentiate(&group.generator(), &two)
}
