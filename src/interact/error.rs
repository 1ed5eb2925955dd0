use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CreateAndSign {
    #[error("Failed to resolve signer account! Cause: {0}")]
    Account(#[from] crate::account::error::Error),
    #[error("Transaction simulation failed! Cause: {0}")]
    Simulation(#[from] super::simulate::error::Error),
    #[error("Tax computation failed! Cause: {0}")]
    ComputeTax(#[from] super::compute_tax::error::Error),
    #[error("Failed to calculate and construct fee object! Cause: {0}")]
    FeeCalculation(#[from] cosmrs::ErrorReport),
    #[error("Signing transaction failed! Cause: {0}")]
    Signing(#[from] crate::signer::error::Error),
}
