#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::missing_errors_doc,
    clippy::redundant_pub_crate,
    clippy::significant_drop_tightening
)]

pub mod account;
pub mod build_tx;
pub mod client;
pub mod config;
pub mod deadline;
pub mod interact;
pub mod log;
pub mod signer;
pub mod signing_key;

#[cfg(test)]
mod tests;

pub mod reexport {
    pub use cosmrs;
    pub use reqwest;
}
