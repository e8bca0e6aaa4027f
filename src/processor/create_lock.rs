//! `CreateLock` — one-time creation of the lock record and vault.

use {
    crate::{
        error::FeeLockError,
        get_lock_record_address, get_vault_address,
        ledger::Ledger,
        processor::{check_account_schema, AccountSpec},
        state::LockRecord,
    },
    log::debug,
    solana_clock::{Clock, UnixTimestamp},
    solana_instruction::{error::InstructionError, AccountMeta},
    solana_pubkey::Pubkey,
    solana_sdk_ids::system_program,
};

/// 0 payer, 1 lock record, 2 vault.
const SCHEMA: &[AccountSpec] = &[
    AccountSpec {
        signer: true,
        writable: true,
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

pub fn process_create_lock(
    ledger: &mut dyn Ledger,
    clock: &Clock,
    accounts: &[AccountMeta],
    asset: &Pubkey,
    unlock_timestamp: UnixTimestamp,
) -> Result<(), InstructionError> {
    check_account_schema(accounts, SCHEMA)?;

    // Strictly in the future; equal-to-now is rejected, not just past-due.
    if unlock_timestamp <= clock.unix_timestamp {
        debug!(
            "CreateLock: unlock time {} is not after current time {}",
            unlock_timestamp, clock.unix_timestamp
        );
        return Err(FeeLockError::UnlockTimeInPast.into());
    }

    let record_address = get_lock_record_address(asset);
    if accounts[1].pubkey != record_address {
        return Err(FeeLockError::InvalidLockRecordAddress.into());
    }
    let vault_address = get_vault_address(asset);
    if accounts[2].pubkey != vault_address {
        return Err(FeeLockError::InvalidVaultAddress.into());
    }

    // The creator is the verified signer, never a field from instruction
    // data.  An occupied record address makes create_account fail, which is
    // what enforces at-most-one record per asset.
    let record = LockRecord {
        creator: accounts[0].pubkey,
        asset: *asset,
        unlock_timestamp,
    };
    ledger.create_account(&record_address, &crate::id(), LockRecord::SERIALIZED_SIZE)?;
    let mut data = vec![0u8; LockRecord::SERIALIZED_SIZE];
    record
        .serialize_into(&mut data)
        .map_err(|_| InstructionError::InvalidAccountData)?;
    ledger.write_data(&record_address, &data)?;

    // The vault may already exist if value was deposited ahead of creation.
    if ledger.account(&vault_address).is_none() {
        ledger.create_account(&vault_address, &system_program::id(), 0)?;
    }

    debug!(
        "CreateLock: asset={} creator={} unlock_timestamp={}",
        asset, record.creator, unlock_timestamp
    );
    Ok(())
}
