use {
    crate::frequency::FrequencyTable,
    std::{
        cmp::{self, Ordering},
        collections::BinaryHeap,
    },
};

/// Binary merge tree. Every node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree {
    Leaf {
        byte: u8,
        frequency: usize,
    },
    Node {
        left: Box<HuffmanTree>,
        right: Box<HuffmanTree>,
        frequency: usize,
    },
}

/// A subtree waiting in the merge queue.
///
/// Ordered by frequency, then by the order it entered the queue, so equal
/// frequencies are always merged in the same order.
struct Pending {
    frequency: usize,
    order: usize,
    tree: HuffmanTree,
}

impl Pending {
    fn key(&self) -> (usize, usize) {
        (self.frequency, self.order)
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl HuffmanTree {
    /// Build the tree for `table`, or `None` if the table is empty.
    ///
    /// Leaves enter the queue in ascending byte order and merged nodes after
    /// them in creation order. The first node taken off the queue becomes the
    /// left child, the second the right child.
    pub fn of(table: &FrequencyTable) -> Option<Self> {
        // std's heap is a max-heap; Reverse turns it into the min-queue we want.
        let mut queue: BinaryHeap<cmp::Reverse<Pending>> = table
            .iter()
            .enumerate()
            .map(|(order, (byte, frequency))| {
                cmp::Reverse(Pending {
                    frequency,
                    order,
                    tree: HuffmanTree::Leaf { byte, frequency },
                })
            })
            .collect();
        let mut next_order = queue.len();

        loop {
            let cmp::Reverse(left) = queue.pop()?;
            let cmp::Reverse(right) = match queue.pop() {
                Some(right) => right,
                None => {
                    let tree = left.tree;
                    log::trace!("Huffman tree: {:?}", tree);
                    return Some(tree);
                }
            };

            let frequency = left.frequency + right.frequency;
            queue.push(cmp::Reverse(Pending {
                frequency,
                order: next_order,
                tree: HuffmanTree::Node {
                    left: Box::new(left.tree),
                    right: Box::new(right.tree),
                    frequency,
                },
            }));
            next_order += 1;
        }
    }

    pub fn frequency(&self) -> usize {
        match *self {
            HuffmanTree::Leaf { frequency, .. } | HuffmanTree::Node { frequency, .. } => frequency,
        }
    }

    /// Length of the longest root-to-leaf path. A lone leaf has depth 0.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 0)];
        while let Some((tree, depth)) = stack.pop() {
            match tree {
                HuffmanTree::Leaf { .. } => deepest = cmp::max(deepest, depth),
                HuffmanTree::Node { left, right, .. } => {
                    stack.push((&**right, depth + 1));
                    stack.push((&**left, depth + 1));
                }
            }
        }
        deepest
    }
}
