use sha3_lamport_signatures::{Configuration, HashAlgorithm, PrivateKey, PublicKey, Signature};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::{fs, path::Path, path::PathBuf, process::ExitCode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
struct Arguments {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a one-time key pair.
    KeyGen {
        private_key: PathBuf,
        public_key: PathBuf,
        #[clap(long, value_enum, default_value_t = Hash::Sha3_256)]
        hash: Hash,
    },
    /// Sign a message. The private key file is deleted afterwards.
    Sign {
        message: PathBuf,
        private_key: PathBuf,
        signature: PathBuf,
    },
    Verify {
        message: PathBuf,
        signature: PathBuf,
        public_key: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Hash {
    #[value(name = "sha3-256")]
    Sha3_256,
    #[value(name = "sha3-512")]
    Sha3_512,
    Blake3,
}

impl From<Hash> for HashAlgorithm {
    fn from(hash: Hash) -> Self {
        match hash {
            Hash::Sha3_256 => HashAlgorithm::Sha3_256,
            Hash::Sha3_512 => HashAlgorithm::Sha3_512,
            Hash::Blake3 => HashAlgorithm::Blake3,
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(file: &Path) -> anyhow::Result<T> {
    let contents =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", file.display()))
}

fn write_json<T: serde::Serialize>(value: &T, file: &Path) -> anyhow::Result<()> {
    fs::write(file, serde_json::to_vec(value)?)
        .with_context(|| format!("writing {}", file.display()))
}

fn read_message(file: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(file).with_context(|| format!("reading {}", file.display()))
}

fn main() -> anyhow::Result<ExitCode> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Arguments::parse();
    use Command::*;
    match args.cmd {
        KeyGen {
            private_key,
            public_key,
            hash,
        } => {
            let privk = PrivateKey::generate(Configuration::for_hash(hash.into()))?;
            let pubk = privk.public_key();
            write_json(&privk, &private_key)?;
            write_json(&pubk, &public_key)?;
            info!(?hash, "wrote key pair");
        }
        Sign {
            message,
            private_key,
            signature,
        } => {
            let privk: PrivateKey = read_json(&private_key)?;
            let message = read_message(&message)?;
            let sig = privk.sign(&message)?;
            write_json(&sig, &signature)?;
            fs::remove_file(&private_key)
                .with_context(|| format!("discarding {}", private_key.display()))?;
            info!(private_key = %private_key.display(), "signed message and discarded private key");
        }
        Verify {
            message,
            signature,
            public_key,
        } => {
            let pubk: PublicKey = read_json(&public_key)?;
            let sig: Signature = read_json(&signature)?;
            let message = read_message(&message)?;
            let valid = pubk.verify(&message, &sig)?;
            println!("signature validity: {}", valid);
            if !valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}
