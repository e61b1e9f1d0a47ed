mod files;

use {
    files::{compress_file, decompress_file, read_all},
    huffpack::{codebook::bit_string, CodeBook, FrequencyTable, HuffmanTree},
    std::{
        env,
        io::{self, prelude::*},
        process,
    },
};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args[..] {
        ["compress", input, output] => {
            let (original, compressed) = compress_file(input, output)?;
            eprintln!("Original size:     {} bytes", original);
            eprintln!("Compressed size:   {} bytes", compressed);
        }
        ["decompress", input, output] => {
            let (compressed, decompressed) = decompress_file(input, output)?;
            eprintln!("Compressed size:   {} bytes", compressed);
            eprintln!("Decompressed size: {} bytes", decompressed);
        }
        ["stats", input] => print_stats(&read_all(input)?)?,
        _ => print_usage(),
    }

    Ok(())
}

fn print_usage() -> ! {
    println!("Usage:");
    println!("  huffpack compress <input> <output>     Compress a file");
    println!("  huffpack decompress <input> <output>   Decompress a file");
    println!("  huffpack stats <input>                 Show byte frequencies and their codes");
    println!();
    println!("Use - as <input> to read stdin, or as <output> to write stdout.");
    process::exit(1)
}

fn print_stats(bytes: &[u8]) -> io::Result<()> {
    let byte_frequency = FrequencyTable::of(bytes);
    let book = match HuffmanTree::of(&byte_frequency) {
        Some(tree) => CodeBook::of(&tree),
        None => CodeBook::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{:<8} {:>10} {:<8}  code", "byte", "count", "binary")?;

    let mut payload_bits = 0;
    for (byte, count) in byte_frequency.iter() {
        let code = &book[byte];
        payload_bits += count * code.len();
        writeln!(
            out,
            "{:<8} {:>10} {:08b}  {}",
            format!("'{}'", (byte as char).escape_default()),
            count,
            byte,
            bit_string(code)
        )?;
    }

    writeln!(
        out,
        "{} distinct bytes, {} bytes total, {} payload bits",
        byte_frequency.distinct(),
        byte_frequency.total(),
        payload_bits
    )
}
