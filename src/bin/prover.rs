use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::Parser;
use crypto_bigint::U256;
use sigma_protocols::{
    DhProver, DhProverInput, DlogProver, DlogProverInput, Group, ModpGroup, ProofConfig,
    ProtocolKind, SigmaProtocolProver, TcpChannel, Witness,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "prover")]
#[command(about = "Sigma protocol prover (role 1)", long_about = None)]
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
    if let Err(err) = run(&args.config) {
        eprintln!("Proof session failed: {err}");
        std::process::exit(2);
    }
}

fn run(config_path: &Path) -> sigma_protocols::Result<()> {
    let config = ProofConfig::load(config_path)?;
    let group = config.group.build()?;
    let witness = Witness::new(group.scalar_from_decimal(&config.protocol.witness)?);
    let addr = config.peer.addr()?;

    let channel = connect_with_retry(addr)?;
    info!(protocol = ?config.protocol.kind, peer = %addr, "starting proof session");

    match config.protocol.kind {
        ProtocolKind::Dlog => {
            let input = DlogProverInput::from_witness(&group, witness);
            let computation = DlogProver::new(group, config.protocol.soundness_bits)?;
            let mut prover = SigmaProtocolProver::new(channel, computation);
            prover.prove(input)?;
        }
        ProtocolKind::Dh => {
            let h = second_base(&group);
            let input = DhProverInput::from_witness(&group, h, witness);
            let computation = DhProver::new(group, config.protocol.soundness_bits)?;
            let mut prover = SigmaProtocolProver::new(channel, computation);
            prover.prove(input)?;
        }
    }

    info!("proof sent");
    Ok(())
}

/// The fixed second base `h = g^2` used by the DH sample session. Both
/// roles derive it the same way.
fn second_base(group: &ModpGroup) -> <ModpGroup as Group>::Element {
    let two = group.scalar_from_uint(&U256::from_u64(2));
    group.exponentiate(&group.generator(), &two)
}

/// The verifier may still be binding its listener; retry briefly.
fn connect_with_retry(addr: SocketAddr) -> sigma_protocols::Result<TcpChannel> {
    let mut last_err = None;
    for _ in 0..50 {
        match TcpChannel::connect(addr) {
            Ok(channel) => return Ok(channel),
            Err(err) => {
                last_err = Some(err);
                thread::sleep(Duration::from_millis(100));
            }
        }
    }
    Err(last_err.unwrap_or_else(|| unreachable!("at least one connection attempt was made")))
}
