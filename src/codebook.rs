use {
    crate::tree::HuffmanTree,
    arr_macro::arr,
    bitvec::prelude::*,
    std::{collections::HashMap, fmt, ops::Index},
};

/// Bits of a single code, most significant (first emitted) bit first.
pub type Code = BitSlice<u8, Msb0>;

/// Byte -> code mapping derived from a [`HuffmanTree`].
#[derive(Clone, PartialEq, Eq)]
pub struct CodeBook {
    codings: [Option<BitBox<u8, Msb0>>; u8::MAX as usize + 1],
}

/// Panics if `index` has no code in this book.
impl Index<u8> for CodeBook {
    type Output = Code;

    fn index(&self, index: u8) -> &Code {
        match self.get(index) {
            Some(code) => code,
            None => panic!("byte {:#04x} has no code in this code book", index),
        }
    }
}

// Only coded bytes, as bit strings.
impl fmt::Debug for CodeBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut dbg_map = f.debug_map();
        for (byte, code) in self.iter() {
            dbg_map.entry(&byte, &bit_string(code));
        }
        dbg_map.finish()
    }
}

impl Default for CodeBook {
    fn default() -> Self {
        CodeBook {
            // Default stops at [T; 32] and BitBox is not Copy.
            codings: arr![None; 256],
        }
    }
}

impl CodeBook {
    /// Collect the root-to-leaf path of every leaf, 0 for left and 1 for
    /// right. A tree that is a single leaf gets the one-bit code `0`, since
    /// an empty code could not be told apart in the payload.
    pub fn of(tree: &HuffmanTree) -> Self {
        let mut this = CodeBook::default();

        if let HuffmanTree::Leaf { byte, .. } = *tree {
            this.insert(byte, bitbox![u8, Msb0; 0]);
            log::trace!("Code book: {:?}", this);
            return this;
        }

        // Explicit stack; degenerate trees can be 255 levels deep.
        let mut stack: Vec<(&HuffmanTree, BitVec<u8, Msb0>)> = vec![(tree, BitVec::new())];
        while let Some((node, path)) = stack.pop() {
            match node {
                &HuffmanTree::Leaf { byte, .. } => {
                    this.insert(byte, path.into_boxed_bitslice());
                }
                HuffmanTree::Node { left, right, .. } => {
                    // Right goes on first so the left subtree is visited first.
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((&**right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((&**left, left_path));
                }
            }
        }

        log::trace!("Code book: {:?}", this);
        this
    }

    /// Record `code` for `byte`, returning whatever code it had before.
    pub(crate) fn insert(
        &mut self,
        byte: u8,
        code: BitBox<u8, Msb0>,
    ) -> Option<BitBox<u8, Msb0>> {
        self.codings[byte as usize].replace(code)
    }

    pub fn get(&self, byte: u8) -> Option<&Code> {
        self.codings[byte as usize].as_deref()
    }

    /// `(byte, code)` for every coded byte, ascending by byte.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Code)> + '_ {
        self.codings
            .iter()
            .enumerate()
            .filter_map(|(byte, code)| code.as_deref().map(|code| (byte as u8, code)))
    }

    /// Number of coded bytes.
    pub fn len(&self) -> usize {
        self.codings.iter().filter(|code| code.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Length in bits of the longest code, 0 for an empty book.
    pub fn longest(&self) -> usize {
        self.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }

    /// Append the code for `byte` to `bits`.
    ///
    /// # Panics
    ///
    /// If `byte` has no code in this book.
    pub fn push_byte(&self, byte: u8, bits: &mut BitVec<u8, Msb0>) {
        bits.extend_from_bitslice(&self[byte])
    }

    /// The first pair of codes where one is a prefix of the other (or equal).
    pub fn prefix_conflict(&self) -> Option<(u8, u8)> {
        let codes: Vec<(u8, &Code)> = self.iter().collect();
        for (i, &(a, code_a)) in codes.iter().enumerate() {
            for &(b, code_b) in &codes[i + 1..] {
                let shared = code_a.len().min(code_b.len());
                if code_a[..shared] == code_b[..shared] {
                    return Some((a, b));
                }
            }
        }
        None
    }

    /// Invert the book for decoding.
    pub fn reverse(&self) -> ReverseCodeBook {
        ReverseCodeBook {
            symbols: self
                .iter()
                .map(|(byte, code)| (code.to_bitvec(), byte))
                .collect(),
            longest: self.longest(),
        }
    }
}

/// Code -> byte mapping, the inverse of a [`CodeBook`].
#[derive(Debug, Clone)]
pub struct ReverseCodeBook {
    symbols: HashMap<BitVec<u8, Msb0>, u8>,
    longest: usize,
}

impl ReverseCodeBook {
    pub fn get(&self, code: &BitVec<u8, Msb0>) -> Option<u8> {
        self.symbols.get(code).copied()
    }

    /// Length in bits of the longest known code. An accumulator longer than
    /// this can never match.
    pub fn longest(&self) -> usize {
        self.longest
    }
}

/// Render a code as a string of `0` and `1`.
pub fn bit_string(code: &Code) -> String {
    code.iter()
        .by_vals()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
