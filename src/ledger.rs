//! Keyed account storage abstraction.
//!
//! The host ledger's globally shared account store is modelled as an
//! injectable trait with the same contracts the real substrate provides:
//! creation fails on an occupied address, debits require an authorisation
//! witness, and a transaction's effects apply all-or-nothing.  The processor
//! only ever talks to this trait, so the full instruction surface can be
//! exercised against [`MemoryLedger`] without a runtime.

use {
    crate::vault::VaultAuthority,
    solana_account::Account,
    solana_instruction::error::InstructionError,
    solana_pubkey::Pubkey,
    solana_sdk_ids::system_program,
    std::collections::HashMap,
};

/// Proof presented alongside a debit.
///
/// The substrate verifies transaction signatures before execution, so
/// `Signature` asserts that an external signature for `from` was checked at
/// admission.  Derived addresses have no corresponding private key: a
/// signature witness is never honoured for them, and the only way to debit
/// one is to present the [`VaultAuthority`] carrying its derivation
/// parameters.
#[derive(Debug, Clone, Copy)]
pub enum TransferWitness<'a> {
    /// The debited address signed the transaction.
    Signature,
    /// Program authority over a derived address.
    DerivedAuthority(&'a VaultAuthority),
}

/// Injectable keyed account store with host-ledger semantics.
pub trait Ledger {
    /// Returns the account at `address`, if one exists.
    fn account(&self, address: &Pubkey) -> Option<&Account>;

    /// Current balance at `address`; a missing account holds zero.
    fn lamports(&self, address: &Pubkey) -> u64 {
        self.account(address).map_or(0, |account| account.lamports)
    }

    /// Creates an empty account at `address`.
    ///
    /// Fails with `AccountAlreadyInitialized` if any account already exists
    /// there — the substrate never re-initialises an occupied address.
    fn create_account(
        &mut self,
        address: &Pubkey,
        owner: &Pubkey,
        space: usize,
    ) -> Result<(), InstructionError>;

    /// Replaces the data of an existing account.
    fn write_data(&mut self, address: &Pubkey, data: &[u8]) -> Result<(), InstructionError>;

    /// Moves `lamports` from `from` to `to`, creating `to` if it does not
    /// exist yet.  The debit is only honoured if `witness` authorises it.
    fn transfer(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        lamports: u64,
        witness: TransferWitness<'_>,
    ) -> Result<(), InstructionError>;
}

/// Reference in-memory [`Ledger`] used by the test suite and local tooling.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    accounts: HashMap<Pubkey, Account>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `lamports` into `address`, creating it as a plain system
    /// account if needed.  Test funding; the real substrate has no
    /// equivalent outside genesis.
    pub fn credit(&mut self, address: &Pubkey, lamports: u64) {
        let account = self
            .accounts
            .entry(*address)
            .or_insert_with(|| Account::new(0, 0, &system_program::id()));
        account.lamports = account.lamports.saturating_add(lamports);
    }

    /// Applies `f` as one atomic transition: on error every effect is rolled
    /// back, mirroring the substrate's all-or-nothing transaction
    /// application.
    pub fn atomic<T, F>(&mut self, f: F) -> Result<T, InstructionError>
    where
        F: FnOnce(&mut Self) -> Result<T, InstructionError>,
    {
        let snapshot = self.accounts.clone();
        let result = f(self);
        if result.is_err() {
            self.accounts = snapshot;
        }
        result
    }
}

impl Ledger for MemoryLedger {
    fn account(&self, address: &Pubkey) -> Option<&Account> {
        self.accounts.get(address)
    }

    fn create_account(
        &mut self,
        address: &Pubkey,
        owner: &Pubkey,
        space: usize,
    ) -> Result<(), InstructionError> {
        if self.accounts.contains_key(address) {
            return Err(InstructionError::AccountAlreadyInitialized);
        }
        self.accounts.insert(*address, Account::new(0, space, owner));
        Ok(())
    }

    fn write_data(&mut self, address: &Pubkey, data: &[u8]) -> Result<(), InstructionError> {
        let account = self
            .accounts
            .get_mut(address)
            .ok_or(InstructionError::UninitializedAccount)?;
        account.data = data.to_vec();
        Ok(())
    }

    fn transfer(
        &mut self,
        from: &Pubkey,
        to: &Pubkey,
        lamports: u64,
        witness: TransferWitness<'_>,
    ) -> Result<(), InstructionError> {
        match witness {
            TransferWitness::Signature => {
                // No private key exists for an off-curve address, so no
                // signature for it can ever have been verified.
                if !from.is_on_curve() {
                    return Err(InstructionError::MissingRequiredSignature);
                }
            }
            TransferWitness::DerivedAuthority(authority) => {
                if authority.address() != from {
                    return Err(InstructionError::MissingRequiredSignature);
                }
            }
        }

        if self.lamports(from) < lamports {
            return Err(InstructionError::InsufficientFunds);
        }
        if from == to || lamports == 0 {
            return Ok(());
        }
        if let Some(source) = self.accounts.get_mut(from) {
            source.lamports -= lamports;
        }
        let destination = self
            .accounts
            .entry(*to)
            .or_insert_with(|| Account::new(0, 0, &system_program::id()));
        destination.lamports = destination
            .lamports
            .checked_add(lamports)
            .ok_or(InstructionError::ArithmeticOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*, crate::get_vault_address, assert_matches::assert_matches,
        solana_keypair::Keypair, solana_signer::Signer,
    };

    fn on_curve_key() -> Pubkey {
        Keypair::new().pubkey()
    }

    #[test]
    fn create_account_rejects_occupied_address() {
        let mut ledger = MemoryLedger::new();
        let address = Pubkey::new_unique();
        ledger.create_account(&address, &crate::id(), 16).unwrap();
        assert_matches!(
            ledger.create_account(&address, &crate::id(), 16),
            Err(InstructionError::AccountAlreadyInitialized)
        );
    }

    #[test]
    fn signature_witness_cannot_debit_derived_address() {
        let mut ledger = MemoryLedger::new();
        let vault = get_vault_address(&Pubkey::new_unique());
        ledger.credit(&vault, 500);
        assert_matches!(
            ledger.transfer(&vault, &Pubkey::new_unique(), 100, TransferWitness::Signature),
            Err(InstructionError::MissingRequiredSignature)
        );
        assert_eq!(ledger.lamports(&vault), 500);
    }

    #[test]
    fn derived_authority_must_match_debited_address() {
        let mut ledger = MemoryLedger::new();
        let asset = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let authority = VaultAuthority::derive(&asset);
        ledger.credit(&get_vault_address(&other), 500);
        assert_matches!(
            ledger.transfer(
                &get_vault_address(&other),
                &Pubkey::new_unique(),
                100,
                TransferWitness::DerivedAuthority(&authority),
            ),
            Err(InstructionError::MissingRequiredSignature)
        );
    }

    #[test]
    fn transfer_rejects_overdraw() {
        let mut ledger = MemoryLedger::new();
        let from = on_curve_key();
        ledger.credit(&from, 50);
        assert_matches!(
            ledger.transfer(&from, &Pubkey::new_unique(), 51, TransferWitness::Signature),
            Err(InstructionError::InsufficientFunds)
        );
    }

    #[test]
    fn transfer_creates_missing_destination() {
        let mut ledger = MemoryLedger::new();
        let from = on_curve_key();
        let to = Pubkey::new_unique();
        ledger.credit(&from, 100);
        ledger
            .transfer(&from, &to, 60, TransferWitness::Signature)
            .unwrap();
        assert_eq!(ledger.lamports(&from), 40);
        assert_eq!(ledger.lamports(&to), 60);
        assert_eq!(ledger.account(&to).unwrap().owner, system_program::id());
    }

    #[test]
    fn atomic_rolls_back_on_error() {
        let mut ledger = MemoryLedger::new();
        let from = on_curve_key();
        let to = Pubkey::new_unique();
        ledger.credit(&from, 100);
        let result: Result<(), InstructionError> = ledger.atomic(|ledger| {
            ledger.transfer(&from, &to, 100, TransferWitness::Signature)?;
            Err(InstructionError::InvalidArgument)
        });
        assert!(result.is_err());
        assert_eq!(ledger.lamports(&from), 100);
        assert_eq!(ledger.lamports(&to), 0);
    }
}
