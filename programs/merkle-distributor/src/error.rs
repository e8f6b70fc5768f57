use anchor_lang::error_code;

/// Error codes.
#[error_code]
pub enum ErrorCode {
    #[msg("Invalid Merkle proof.")]
    InvalidProof,
    #[msg("New value is identical to the current one")]
    SameValue,
    #[msg("Account is not authorized to execute this instruction")]
    Unauthorized,
    #[msg("Distributor has been shut down")]
    Shutdown,
    #[msg("Distributor is already initialized")]
    AlreadyInitialized,
    #[msg("Cumulative amount has already been claimed")]
    AlreadyClaimed,
    #[msg("Vault balance is insufficient for this claim")]
    InsufficientBalance,
    #[msg("Arithmetic Error (overflow/underflow)")]
    ArithmeticError,
}
