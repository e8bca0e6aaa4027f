//! Custom errors for the Fee Lock program.

use {
    num_derive::{FromPrimitive, ToPrimitive},
    thiserror::Error,
};

/// Errors with stable codes that form part of the public contract.
///
/// Structural failures (duplicate creation, missing signatures, uninitialised
/// accounts) surface as the host's generic `InstructionError` variants
/// instead.
#[derive(Error, Debug, Clone, PartialEq, Eq, FromPrimitive, ToPrimitive)]
pub enum FeeLockError {
    #[error("Unlock time is not in the future")]
    UnlockTimeInPast = 0,

    #[error("Lock has not expired yet")]
    LockNotExpired,

    #[error("Supplied creator account does not match the lock record")]
    InvalidCreator,

    #[error("Lock record account does not match the derived address")]
    InvalidLockRecordAddress,

    #[error("Vault account does not match the derived address")]
    InvalidVaultAddress,
}

// InstructionError conversion is provided by the blanket
// `impl<T: ToPrimitive> From<T> for InstructionError` in solana_instruction_error.
