//! Shared test harness: an in-memory ledger, a controllable clock, and
//! transaction helpers mirroring what a client library would submit.

use {
    fee_lock::{
        get_lock_record_address, get_vault_address, instruction,
        ledger::{Ledger, MemoryLedger, TransferWitness},
        state::LockRecord,
    },
    solana_clock::{Clock, UnixTimestamp},
    solana_instruction::{error::InstructionError, Instruction},
    solana_keypair::Keypair,
    solana_pubkey::Pubkey,
    solana_signer::Signer,
};

/// Ledger time at harness start.
pub const GENESIS_TIMESTAMP: UnixTimestamp = 1_700_000_000;

/// Balance given to every funded signer.
pub const STARTING_BALANCE: u64 = 1_000_000_000;

pub struct Harness {
    pub ledger: MemoryLedger,
    pub clock: Clock,
}

impl Harness {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            ledger: MemoryLedger::new(),
            clock: Clock {
                unix_timestamp: GENESIS_TIMESTAMP,
                ..Clock::default()
            },
        }
    }

    pub fn now(&self) -> UnixTimestamp {
        self.clock.unix_timestamp
    }

    pub fn warp_to(&mut self, timestamp: UnixTimestamp) {
        self.clock.unix_timestamp = timestamp;
    }

    /// A fresh on-curve identity holding `STARTING_BALANCE`.
    pub fn funded_signer(&mut self) -> Pubkey {
        let key = Keypair::new().pubkey();
        self.ledger.credit(&key, STARTING_BALANCE);
        key
    }

    /// Submits one instruction as an atomic transaction: a rejection leaves
    /// the ledger exactly as it was.
    pub fn process(&mut self, instruction: Instruction) -> Result<(), InstructionError> {
        let clock = self.clock.clone();
        self.ledger
            .atomic(|ledger| fee_lock::process_instruction(ledger, &clock, &instruction))
    }

    pub fn create_lock(
        &mut self,
        payer: &Pubkey,
        asset: &Pubkey,
        unlock_timestamp: UnixTimestamp,
    ) -> Result<(), InstructionError> {
        self.process(instruction::create_lock(payer, asset, unlock_timestamp))
    }

    pub fn withdraw(
        &mut self,
        caller: &Pubkey,
        asset: &Pubkey,
        creator: &Pubkey,
    ) -> Result<(), InstructionError> {
        self.process(instruction::withdraw(caller, asset, creator))
    }

    /// Plain value transfer into the vault, outside the program's
    /// instructions — anyone can do this at any time.
    pub fn deposit(&mut self, from: &Pubkey, asset: &Pubkey, amount: u64) {
        self.ledger
            .transfer(
                from,
                &get_vault_address(asset),
                amount,
                TransferWitness::Signature,
            )
            .unwrap();
    }

    pub fn balance(&self, address: &Pubkey) -> u64 {
        self.ledger.lamports(address)
    }

    pub fn vault_balance(&self, asset: &Pubkey) -> u64 {
        self.ledger.lamports(&get_vault_address(asset))
    }

    pub fn lock_record(&self, asset: &Pubkey) -> Option<LockRecord> {
        self.ledger
            .account(&get_lock_record_address(asset))
            .and_then(|account| LockRecord::deserialize(&account.data).ok())
    }
}
