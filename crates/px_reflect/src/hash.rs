//! Hash containers with a fixed `foldhash` seed.

use core::hash::BuildHasher;

use foldhash::fast::{FixedState, FoldHasher};

const FIXED_HASH_STATE: FixedState = FixedState::with_seed(0x5D8E_2F41_A7C3_09B6);

/// Builds hashers whose results only depend on the input.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FoldHasher<'static>;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FIXED_HASH_STATE.build_hasher()
    }
}

pub(crate) type HashMap<K, V> = hashbrown::HashMap<K, V, FixedHashState>;
pub(crate) type HashSet<T> = hashbrown::HashSet<T, FixedHashState>;
