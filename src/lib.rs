//! Fee Lock Program
//!
//! Lets a creator make an irreversible, publicly checkable commitment to
//! leave accumulated fees untouched until a chosen time.  A lock is keyed by
//! an asset identifier and consists of two derived accounts: a `LockRecord`
//! naming who locked, what, and until when, and a vault that accumulates
//! value at an address no private key controls.
//!
//! ## Instructions
//!
//! | Instruction | Description                                              |
//! |-------------|----------------------------------------------------------|
//! | CreateLock  | One-time creation of the lock record and vault for an asset |
//! | Withdraw    | Move the entire vault balance to the recorded creator    |
//!
//! Anyone may deposit into a vault at any time with a plain transfer, and
//! anyone may submit `Withdraw` once the unlock time has passed — the funds
//! always go to the creator recorded at creation, never to the caller.
//! The lock record is never closed, so deposit/withdraw cycles can repeat
//! indefinitely under the same rules.
//!
//! The processor executes against the [`ledger::Ledger`] abstraction rather
//! than a concrete runtime, so the full instruction surface can be exercised
//! in-process with [`ledger::MemoryLedger`].

pub mod error;
pub mod instruction;
pub mod ledger;
pub mod processor;
pub mod state;
pub mod vault;

use solana_pubkey::Pubkey;

pub use processor::process_instruction;

solana_pubkey::declare_id!("FeeLock111111111111111111111111111111111111");

/// Domain tag for lock record addresses.
pub const FEE_LOCK_SEED: &[u8] = b"fee-lock";

/// Domain tag for vault addresses.
pub const FEE_VAULT_SEED: &[u8] = b"fee-vault";

/// Derives the lock record address for an asset.
///
/// Clients compute this locally to name the account in a transaction before
/// the record exists; the processor re-derives it and rejects mismatches.
pub fn get_lock_record_address(asset: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[FEE_LOCK_SEED, asset.as_ref()], &crate::id()).0
}

/// Derives the vault address for an asset.
pub fn get_vault_address(asset: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[FEE_VAULT_SEED, asset.as_ref()], &crate::id()).0
}
