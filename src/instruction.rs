//! Instruction definitions and client-side builders for the Fee Lock program.
//!
//! Instructions are serialised / deserialised via `bincode` to stay
//! consistent with the Agave built-in programs.  The builders derive the
//! lock record and vault addresses locally with the published formula, so a
//! client can name them in a transaction before either account exists.

use {
    crate::{get_lock_record_address, get_vault_address, id},
    serde::{Deserialize, Serialize},
    solana_clock::UnixTimestamp,
    solana_instruction::{AccountMeta, Instruction},
    solana_pubkey::Pubkey,
};

/// Instructions supported by the Fee Lock program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeeLockInstruction {
    /// One-time creation of the lock record and vault for an asset.
    ///
    /// # Accounts expected
    ///
    /// 0. `[signer, writable]` — Payer; recorded as the lock's creator.
    /// 1. `[writable]`         — Lock record account at the derived address.
    /// 2. `[writable]`         — Vault account at the derived address.
    ///
    /// # Data
    ///
    /// * `asset`            — Asset identifier the lock is keyed under.
    /// * `unlock_timestamp` — Must be strictly later than the current ledger
    ///                        time; immutable once set.
    CreateLock {
        asset: Pubkey,
        unlock_timestamp: UnixTimestamp,
    },

    /// Move the entire vault balance to the recorded creator.
    ///
    /// Permissionless once the unlock time has passed: any signer may submit
    /// it, but funds only ever flow to the creator stored in the lock
    /// record.  The record itself is left untouched, so the vault can be
    /// refilled and withdrawn from again.
    ///
    /// # Accounts expected
    ///
    /// 0. `[signer]`   — Caller; need not be the creator.
    /// 1. `[]`         — Lock record account at the derived address.
    /// 2. `[writable]` — Vault account at the derived address.
    /// 3. `[writable]` — Creator destination (must match the record).
    ///
    /// # Data
    ///
    /// * `asset` — Asset identifier the lock is keyed under.
    Withdraw { asset: Pubkey },
}

/// Builds a `CreateLock` instruction.
pub fn create_lock(
    payer: &Pubkey,
    asset: &Pubkey,
    unlock_timestamp: UnixTimestamp,
) -> Instruction {
    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(get_lock_record_address(asset), false),
        AccountMeta::new(get_vault_address(asset), false),
    ];
    Instruction {
        program_id: id(),
        accounts,
        data: bincode::serialize(&FeeLockInstruction::CreateLock {
            asset: *asset,
            unlock_timestamp,
        })
        .unwrap(),
    }
}

/// Builds a `Withdraw` instruction.
///
/// `creator` must be the creator recorded at creation; the processor rejects
/// any other destination with `FeeLockError::InvalidCreator`.
pub fn withdraw(caller: &Pubkey, asset: &Pubkey, creator: &Pubkey) -> Instruction {
    let accounts = vec![
        AccountMeta::new_readonly(*caller, true),
        AccountMeta::new_readonly(get_lock_record_address(asset), false),
        AccountMeta::new(get_vault_address(asset), false),
        AccountMeta::new(*creator, false),
    ];
    Instruction {
        program_id: id(),
        accounts,
        data: bincode::serialize(&FeeLockInstruction::Withdraw { asset: *asset }).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_lock_round_trips_through_bincode() {
        let instruction = create_lock(&Pubkey::new_unique(), &Pubkey::new_unique(), 42);
        let decoded: FeeLockInstruction = bincode::deserialize(&instruction.data).unwrap();
        assert!(matches!(decoded, FeeLockInstruction::CreateLock { unlock_timestamp: 42, .. }));
        assert_eq!(instruction.program_id, id());
        assert!(instruction.accounts[0].is_signer);
    }

    #[test]
    fn withdraw_marks_record_read_only() {
        let asset = Pubkey::new_unique();
        let instruction = withdraw(&Pubkey::new_unique(), &asset, &Pubkey::new_unique());
        assert_eq!(instruction.accounts[1].pubkey, get_lock_record_address(&asset));
        assert!(!instruction.accounts[1].is_writable);
        assert!(instruction.accounts[2].is_writable);
    }
}
