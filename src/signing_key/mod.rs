use std::env::{var, VarError};

use cosmrs::{
    bip32::{Language, Mnemonic},
    crypto::secp256k1::SigningKey,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use self::error::{Error, Result};

pub mod error;

pub const DEFAULT_TERRA_HD_PATH: &str = "m/44'/330'/0'/0/0";

pub const MNEMONIC_ENV_VAR: &str = "SIGNING_KEY_MNEMONIC";

/// Derives the signing key from a BIP-39 mnemonic.
pub fn from_mnemonic(mnemonic: &str, derivation_path: &str, password: &str) -> Result<SigningKey> {
    SigningKey::derive_from_path(
        Mnemonic::new(mnemonic.trim(), Language::English)
            .map_err(Error::ParsingMnemonic)?
            .to_seed(password),
        &derivation_path
            .parse()
            .map_err(Error::ParsingDerivationPath)?,
    )
    .map_err(Error::DerivingKey)
}

/// Resolves the signing key from the `SIGNING_KEY_MNEMONIC`
/// environment variable, falling back to reading the mnemonic from
/// the standard input.
pub async fn signing_key(derivation_path: &str, password: &str) -> Result<SigningKey> {
    let secret: String = match var(MNEMONIC_ENV_VAR) {
        Ok(secret) => secret,
        Err(VarError::NotPresent) => {
            println!("Enter signing account's secret mnemonic: ");

            let mut secret = String::new();

            // Returns number of read bytes, which is meaningless for
            // current case.
            let _ = BufReader::new(tokio::io::stdin())
                .read_line(&mut secret)
                .await?;

            secret
        }
        Err(VarError::NotUnicode(_)) => return Err(Error::NonUnicodeMnemonic),
    };

    from_mnemonic(&secret, derivation_path, password)
}
