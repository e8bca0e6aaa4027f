//! Vault authority capability.

use {
    crate::{ledger::{Ledger, TransferWitness}, FEE_VAULT_SEED},
    log::debug,
    solana_instruction::error::InstructionError,
    solana_pubkey::Pubkey,
};

/// Authority over one asset's vault.
///
/// The vault lives at a derived address with no controlling private key, so
/// the only way to move its balance is through this capability, and the only
/// way to construct the capability is to run the published derivation for
/// the program's own identity.  External deposits into the vault are plain
/// transfers and bypass this type entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultAuthority {
    asset: Pubkey,
    address: Pubkey,
    bump: u8,
}

impl VaultAuthority {
    /// Derives the authority for `asset`'s vault.
    pub fn derive(asset: &Pubkey) -> Self {
        let (address, bump) =
            Pubkey::find_program_address(&[FEE_VAULT_SEED, asset.as_ref()], &crate::id());
        Self {
            asset: *asset,
            address,
            bump,
        }
    }

    /// The vault address this capability controls.
    pub fn address(&self) -> &Pubkey {
        &self.address
    }

    /// Derivation bump, for off-ledger verification of the address.
    pub fn bump(&self) -> u8 {
        self.bump
    }

    /// Live vault balance; never cached, since deposits are unmediated.
    pub fn balance(&self, ledger: &dyn Ledger) -> u64 {
        ledger.lamports(&self.address)
    }

    /// Moves the entire current vault balance to `recipient` and returns the
    /// amount moved.
    pub fn drain(
        &self,
        ledger: &mut dyn Ledger,
        recipient: &Pubkey,
    ) -> Result<u64, InstructionError> {
        let amount = self.balance(ledger);
        ledger.transfer(
            &self.address,
            recipient,
            amount,
            TransferWitness::DerivedAuthority(self),
        )?;
        debug!(
            "vault drain: {} lamports from {} (asset {}) to {}",
            amount, self.address, self.asset, recipient
        );
        Ok(amount)
    }
}
