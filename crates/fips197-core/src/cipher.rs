//! Block encryption (FIPS-197 section 5.1).

use log::{log_enabled, trace, Level};

use crate::error::Result;
use crate::key::{KeySize, RoundKeySchedule};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::expand_key;
use crate::state::{Block, State};

/// Encrypts a single 16-byte block with a pre-expanded schedule.
///
/// The round count comes from the schedule's key size.
pub fn encrypt_block(block: &Block, schedule: &RoundKeySchedule) -> Block {
    let nr = schedule.rounds();
    let mut state = State::from_block(block);

    add_round_key(&mut state, &schedule.round_key(0));

    for round in 1..nr {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, &schedule.round_key(round));
        trace_round(round, &state);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &schedule.round_key(nr));
    trace_round(nr, &state);

    state.to_block()
}

fn trace_round(round: usize, state: &State) {
    if log_enabled!(Level::Trace) {
        trace!("state after round {round}:\n{state}");
    }
}

/// Expands `key` and encrypts one block in a single call.
pub fn encrypt_block_with_key(block: &Block, key: &[u8], size: KeySize) -> Result<Block> {
    let schedule = expand_key(key, size)?;
    Ok(encrypt_block(block, &schedule))
}

/// A key expanded once and reused for many blocks.
///
/// The schedule is never mutated after construction, so `&Aes` can be shared
/// freely between threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Aes {
    schedule: RoundKeySchedule,
}

impl Aes {
    /// Expands `key` for the given key size.
    pub fn new(key: &[u8], size: KeySize) -> Result<Self> {
        Ok(Self {
            schedule: expand_key(key, size)?,
        })
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.schedule)
    }

    /// The underlying round-key schedule.
    pub fn schedule(&self) -> &RoundKeySchedule {
        &self.schedule
    }
}

impl From<RoundKeySchedule> for Aes {
    fn from(schedule: RoundKeySchedule) -> Self {
        Self { schedule }
    }
}
