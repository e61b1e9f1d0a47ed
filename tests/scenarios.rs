use huffpack::{
    codebook::bit_string, compress, decompress, CodeBook, DecodeError, FrequencyTable,
    HuffmanTree,
};

#[test]
fn abracadabra() {
    let table = FrequencyTable::of(b"abracadabra");
    let counts: Vec<_> = table.iter().collect();
    assert_eq!(
        counts,
        vec![(b'a', 5), (b'b', 2), (b'c', 1), (b'd', 1), (b'r', 2)]
    );

    let book = CodeBook::of(&HuffmanTree::of(&table).unwrap());
    let shortest = book.iter().map(|(_, code)| code.len()).min().unwrap();
    assert_eq!(book[b'a'].len(), shortest);
    assert!(book[b'a'].len() <= 2);
    assert_eq!(book[b'c'].len(), book.longest());
    assert_eq!(book[b'd'].len(), book.longest());

    let packed = compress(b"abracadabra");
    assert_eq!(decompress(&packed).unwrap(), b"abracadabra");
}

#[test]
fn abracadabra_file_bytes() {
    #[rustfmt::skip]
    let expected = vec![
        0, 0, 0, 0, 0, 0, 0, 11, // decoded length
        5,                       // alphabet size
        b'a', 1, 0b000,
        b'b', 3, 0b110,
        b'c', 3, 0b100,
        b'd', 3, 0b101,
        b'r', 3, 0b111,
        0b0110_1110, 0b1000_1010, 0b1101_1100,
    ];
    assert_eq!(compress(b"abracadabra"), expected);
}

#[test]
fn empty_input() {
    let packed = compress(b"");
    assert_eq!(packed, vec![0; 9]);
    assert_eq!(decompress(&packed).unwrap(), b"");
}

#[test]
fn single_symbol() {
    let packed = compress(b"aaaa");
    // One 1-bit code, four zero bits in a single payload byte.
    assert_eq!(
        packed,
        vec![0, 0, 0, 0, 0, 0, 0, 4, 1, b'a', 1, 0, 0b0000_0000]
    );
    assert_eq!(decompress(&packed).unwrap(), b"aaaa");
}

#[test]
fn every_byte_value() {
    let bytes: Vec<u8> = (0..=255u8).chain((0..=255u8).rev()).chain(0..10).collect();
    let packed = compress(&bytes);
    assert_eq!(packed[8], 0, "256 symbols wrap the alphabet byte to 0");
    assert_eq!(decompress(&packed).unwrap(), bytes);
}

#[test]
fn unbalanced_frequencies() {
    // Fibonacci-like counts give the deepest possible tree for the alphabet.
    let mut bytes = Vec::new();
    let (mut a, mut b) = (1usize, 1usize);
    for symbol in 0..20u8 {
        bytes.extend(std::iter::repeat(symbol).take(a));
        let next = a + b;
        a = b;
        b = next;
    }
    let tree = HuffmanTree::of(&FrequencyTable::of(&bytes)).unwrap();
    assert_eq!(tree.depth(), 19);
    assert_eq!(decompress(&compress(&bytes)).unwrap(), bytes);
}

#[test]
fn codes_render_as_bits() {
    let book = CodeBook::of(&HuffmanTree::of(&FrequencyTable::of(b"abracadabra")).unwrap());
    let rendered: Vec<_> = book
        .iter()
        .map(|(byte, code)| (byte, bit_string(code)))
        .collect();
    assert_eq!(
        rendered,
        vec![
            (b'a', "0".to_string()),
            (b'b', "110".to_string()),
            (b'c', "100".to_string()),
            (b'd', "101".to_string()),
            (b'r', "111".to_string()),
        ]
    );
}

#[test]
fn corrupted_files() {
    let packed = compress(b"abracadabra");

    assert!(matches!(
        decompress(&packed[..5]),
        Err(DecodeError::HeaderTooShort { .. })
    ));

    // Drop the last payload byte.
    assert_eq!(
        decompress(&packed[..packed.len() - 1]),
        Err(DecodeError::TruncatedPayload {
            decoded: 8,
            expected: 11
        })
    );

    // Extra byte after the padding.
    let mut extended = packed.clone();
    extended.push(0);
    assert_eq!(
        decompress(&extended),
        Err(DecodeError::TrailingPayload { extra: 9 })
    );

    // Claim more symbols than the payload holds. The lone pad bit reads
    // as a twelfth `a`, then the bits run out.
    let mut longer = packed;
    longer[7] = 13;
    assert_eq!(
        decompress(&longer),
        Err(DecodeError::TruncatedPayload {
            decoded: 12,
            expected: 13
        })
    );
}
