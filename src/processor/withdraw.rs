//! `Withdraw` — move the entire vault balance to the recorded creator.

use {
    crate::{
        error::FeeLockError,
        get_lock_record_address,
        ledger::Ledger,
        processor::{check_account_schema, AccountSpec},
        state::LockRecord,
        vault::VaultAuthority,
    },
    log::debug,
    solana_clock::Clock,
    solana_instruction::{error::InstructionError, AccountMeta},
    solana_pubkey::Pubkey,
};

/// 0 caller, 1 lock record, 2 vault, 3 creator destination.
const SCHEMA: &[AccountSpec] = &[
    AccountSpec {
        signer: true,
        writable: false,
    },
    AccountSpec {
        signer: false,
        writable: false,
    },
    AccountSpec {
        signer: false,
        writable: true,
    },
    AccountSpec {
        signer: false,
        writable: true,
    },
];

pub fn process_withdraw(
    ledger: &mut dyn Ledger,
    clock: &Clock,
    accounts: &[AccountMeta],
    asset: &Pubkey,
) -> Result<(), InstructionError> {
    check_account_schema(accounts, SCHEMA)?;

    let record_address = get_lock_record_address(asset);
    if accounts[1].pubkey != record_address {
        return Err(FeeLockError::InvalidLockRecordAddress.into());
    }
    let record = {
        let record_account = ledger
            .account(&record_address)
            .ok_or(InstructionError::UninitializedAccount)?;
        if record_account.owner != crate::id() {
            return Err(InstructionError::InvalidAccountOwner);
        }
        LockRecord::deserialize(&record_account.data)
            .map_err(|_| InstructionError::UninitializedAccount)?
    };

    // Relationship check before the timing gate: value can only ever flow to
    // the creator recorded at creation, no matter who calls.
    if accounts[3].pubkey != record.creator {
        debug!(
            "Withdraw: supplied creator {} does not match recorded creator {}",
            accounts[3].pubkey, record.creator
        );
        return Err(FeeLockError::InvalidCreator.into());
    }

    if clock.unix_timestamp < record.unlock_timestamp {
        debug!(
            "Withdraw: lock on {} expires at {}, current time {}",
            asset, record.unlock_timestamp, clock.unix_timestamp
        );
        return Err(FeeLockError::LockNotExpired.into());
    }

    let authority = VaultAuthority::derive(asset);
    if accounts[2].pubkey != *authority.address() {
        return Err(FeeLockError::InvalidVaultAddress.into());
    }

    // Balance is read live inside drain; deposits are unmediated, so no
    // previously observed figure can be trusted.  The record itself is left
    // untouched, keeping the operation repeatable.
    let amount = authority.drain(ledger, &record.creator)?;

    debug!(
        "Withdraw: {} lamports from asset {} vault to creator {} (caller {})",
        amount, asset, record.creator, accounts[0].pubkey
    );
    Ok(())
}
