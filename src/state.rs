//! Account state types for the Fee Lock program.

use {
    borsh::{BorshDeserialize, BorshSerialize},
    solana_clock::UnixTimestamp,
    solana_pubkey::Pubkey,
};

/// Discriminator byte written at the start of every lock record account to
/// distinguish it from uninitialised or foreign account data.
pub const LOCK_RECORD_DISCRIMINATOR: u8 = 1;

/// One creator's commitment for one asset.
///
/// Serialised with Borsh; the first byte of account data is the
/// discriminator.  Exactly one record can ever exist per asset — creation at
/// an address that already holds an account fails — and every field is
/// immutable after creation.  The record persists across any number of
/// withdrawals; there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq, BorshSerialize, BorshDeserialize)]
pub struct LockRecord {
    /// The signer that paid to create this record.
    ///
    /// Sourced exclusively from the transaction's verified signer, never from
    /// instruction data, and the sole eligible recipient of withdrawn value.
    pub creator: Pubkey,

    /// The asset identifier this record is keyed under.
    pub asset: Pubkey,

    /// Absolute timestamp at and after which withdrawal becomes legal.
    pub unlock_timestamp: UnixTimestamp,
}

impl LockRecord {
    /// Serialised size of a `LockRecord` (discriminator + borsh payload).
    ///
    /// Layout:
    ///   discriminator    (1)
    ///   creator          (32)
    ///   asset            (32)
    ///   unlock_timestamp (8)
    ///   = 73 bytes
    pub const SERIALIZED_SIZE: usize = 1 + 32 + 32 + 8;

    /// Deserialise from raw account data (expects leading discriminator byte).
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        if data.is_empty() || data[0] != LOCK_RECORD_DISCRIMINATOR {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing or invalid lock record discriminator",
            ));
        }
        let mut cursor = &data[1..];
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    /// Serialise into raw account data (prepends discriminator byte).
    pub fn serialize_into(&self, data: &mut [u8]) -> Result<(), std::io::Error> {
        if data.len() < Self::SERIALIZED_SIZE {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "account data buffer too small",
            ));
        }
        data[0] = LOCK_RECORD_DISCRIMINATOR;
        let mut cursor = &mut data[1..];
        BorshSerialize::serialize(self, &mut cursor)
    }
}
