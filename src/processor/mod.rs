//! Instruction processing logic for the Fee Lock program.
//!
//! Every operation takes a fixed, ordered list of account references tagged
//! by role.  The schema — count, signer flags, writability — is validated
//! exhaustively before any business logic runs, and every precondition is
//! checked before the first mutation, so a rejected instruction leaves zero
//! partial effects.

pub mod create_lock;
pub mod withdraw;

use {
    crate::{instruction::FeeLockInstruction, ledger::Ledger},
    log::trace,
    solana_bincode::limited_deserialize,
    solana_clock::Clock,
    solana_instruction::{error::InstructionError, AccountMeta, Instruction},
};

/// Bound on instruction payloads; matches the transaction packet size.
const MAX_INSTRUCTION_DATA_LEN: u64 = 1232;

/// Required role of one entry in an operation's account list.
pub(crate) struct AccountSpec {
    pub signer: bool,
    pub writable: bool,
}

/// Validates an account list against an operation's schema.
pub(crate) fn check_account_schema(
    accounts: &[AccountMeta],
    schema: &[AccountSpec],
) -> Result<(), InstructionError> {
    if accounts.len() < schema.len() {
        return Err(InstructionError::NotEnoughAccountKeys);
    }
    for (meta, spec) in accounts.iter().zip(schema) {
        if spec.signer && !meta.is_signer {
            return Err(InstructionError::MissingRequiredSignature);
        }
        if spec.writable && !meta.is_writable {
            return Err(InstructionError::InvalidArgument);
        }
    }
    Ok(())
}

/// Entry point: validates, dispatches, and executes one instruction against
/// the ledger as a single all-or-nothing transition.
pub fn process_instruction(
    ledger: &mut dyn Ledger,
    clock: &Clock,
    instruction: &Instruction,
) -> Result<(), InstructionError> {
    if instruction.program_id != crate::id() {
        return Err(InstructionError::IncorrectProgramId);
    }

    let decoded: FeeLockInstruction =
        limited_deserialize(&instruction.data, MAX_INSTRUCTION_DATA_LEN)?;

    trace!("fee_lock process_instruction: {decoded:?}");

    match decoded {
        FeeLockInstruction::CreateLock {
            asset,
            unlock_timestamp,
        } => create_lock::process_create_lock(
            ledger,
            clock,
            &instruction.accounts,
            &asset,
            unlock_timestamp,
        ),
        FeeLockInstruction::Withdraw { asset } => {
            withdraw::process_withdraw(ledger, clock, &instruction.accounts, &asset)
        }
    }
}
