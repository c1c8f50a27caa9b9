// Key generation utility
// Writes a fresh RSA key pair as public.pem/private.pem and prints the
// public half

use std::env;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use easy_rsa::{KeyLocation, RsaSession, DEFAULT_KEY_LENGTH, MIN_KEY_LENGTH};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let directory = match args.next() {
        Some(dir) => PathBuf::from(dir),
        None => PathBuf::from("."),
    };
    let bits = match args.next() {
        Some(raw) => raw
            .parse::<usize>()
            .context("key length must be a number of bits")?,
        None => DEFAULT_KEY_LENGTH,
    };

    if bits < MIN_KEY_LENGTH {
        eprintln!("key length must be at least {MIN_KEY_LENGTH} bits");
        process::exit(1);
    }

    println!("Generating {bits}-bit RSA key pair (this can take a while)...");

    let mut session = RsaSession::new(KeyLocation::new(&directory), bits);
    session.generate_keys()?;
    session.save_keys().with_context(|| {
        format!("could not write key files under {}", directory.display())
    })?;

    println!(
        "Wrote {} and {} to {}",
        session.location().public_name,
        session.location().private_name,
        directory.display()
    );
    println!("\n{}", session.public_key_pem().unwrap_or_default());

    Ok(())
}
