//! Session configuration for the prover and verifier binaries.
//!
//! Both roles read the same TOML file; the prover additionally uses the
//! witness. Configuration priority: environment variables (`SIGMA_`-prefixed)
//! override the file, which overrides nothing — group parameters have no
//! sensible defaults.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::groups::ModpGroup;
use crate::{Error, Result};

/// Full configuration of one proof session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProofConfig {
    /// Group parameters.
    pub group: GroupSettings,
    /// Protocol selection and soundness.
    pub protocol: ProtocolSettings,
    /// The peer's network location.
    pub peer: PeerSettings,
}

/// MODP group parameters as decimal strings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupSettings {
    /// The modulus `p`.
    pub p: String,
    /// The subgroup order `q`.
    pub q: String,
    /// The generator `g`.
    pub g: String,
}

impl GroupSettings {
    /// Builds and validates the configured group.
    pub fn build(&self) -> Result<ModpGroup> {
        ModpGroup::from_decimal_params(&self.p, &self.q, &self.g)
    }
}

/// Which Sigma protocol the session runs.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProtocolKind {
    /// Schnorr proof of knowledge of a discrete log.
    Dlog,
    /// Chaum-Pedersen proof of a Diffie-Hellman tuple.
    Dh,
}

/// Protocol selection, soundness parameter and witness.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolSettings {
    /// The protocol to run.
    pub kind: ProtocolKind,
    /// Soundness parameter `t` in bits.
    pub soundness_bits: u32,
    /// The witness `w` as a decimal string.
    ///
    /// Both roles carry it in this sample setup: the verifier derives the
    /// public statement from it instead of receiving the statement
    /// out of band.
    pub witness: String,
}

/// Network location of the peer (the verifier's listen address).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PeerSettings {
    /// Hostname or IP address.
    pub host: String,
    /// Port number.
    pub port: u16,
}

impl PeerSettings {
    /// Resolves host and port into a socket address.
    pub fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| Error::InvalidConfig(format!("invalid peer address {}:{}", self.host, self.port)))
    }
}

impl ProofConfig {
    /// Loads configuration from a TOML file and `SIGMA_`-prefixed
    /// environment variables; environment wins.
    pub fn load(path: &Path) -> Result<Self> {
        use figment::providers::{Env, Format, Toml};
        use figment::Figment;

        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("SIGMA_").split("_"))
            .extract()
            .map_err(|e| Error::InvalidConfig(e.to_string()))
    }
}
