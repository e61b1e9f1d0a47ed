use std::{
    fmt,
    ops::{Index, IndexMut},
};

/// Occurrence count of every byte value in an input.
///
/// Iteration only ever yields bytes that actually occur, in ascending byte
/// order. That order doubles as the insertion order used to break ties while
/// building the tree.
#[derive(Clone, PartialEq, Eq)]
pub struct FrequencyTable {
    bytes: [usize; u8::MAX as usize + 1],
}

impl Index<u8> for FrequencyTable {
    type Output = usize;

    fn index(&self, index: u8) -> &usize {
        &self.bytes[index as usize]
    }
}

impl IndexMut<u8> for FrequencyTable {
    fn index_mut(&mut self, index: u8) -> &mut Self::Output {
        &mut self.bytes[index as usize]
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self { bytes: [0; 256] }
    }
}

// Only the present bytes; 256 zero entries are noise in trace output.
impl fmt::Debug for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FrequencyTable {
    pub fn of(bytes: &[u8]) -> Self {
        let mut this = FrequencyTable::default();
        for &byte in bytes {
            this[byte] += 1;
        }
        this
    }

    /// `(byte, count)` for every byte with a non-zero count, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.bytes
            .iter()
            .enumerate()
            .filter(|&(_, &frequency)| frequency > 0)
            .map(|(byte, &frequency)| (byte as u8, frequency))
    }

    /// Number of distinct bytes present.
    pub fn distinct(&self) -> usize {
        self.bytes.iter().filter(|&&frequency| frequency > 0).count()
    }

    /// Sum of all counts, i.e. the length of the counted input.
    pub fn total(&self) -> usize {
        self.bytes.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.distinct() == 0
    }
}
