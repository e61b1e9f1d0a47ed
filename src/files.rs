use {
    huffpack::{compress, decompress},
    std::{
        fs,
        io::{self, prelude::*},
    },
};

/// `(input size, output size)` of a finished run.
pub type Sizes = (usize, usize);

pub fn read_all(path: &str) -> io::Result<Vec<u8>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(path)
    }
}

/// Either all of `bytes` ends up at `path`, or `path` is left untouched and
/// no `<path>.partial` remains.
pub fn write_all(path: &str, bytes: &[u8]) -> io::Result<()> {
    if path == "-" {
        return io::stdout().write_all(bytes);
    }

    let partial = format!("{}.partial", path);
    let result = fs::write(&partial, bytes).and_then(|()| fs::rename(&partial, path));
    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }
    result
}

pub fn compress_file(input: &str, output: &str) -> io::Result<Sizes> {
    let bytes = read_all(input)?;
    let packed = compress(&bytes);
    write_all(output, &packed)?;
    Ok((bytes.len(), packed.len()))
}

/// Nothing is written unless the whole input decodes.
pub fn decompress_file(input: &str, output: &str) -> io::Result<Sizes> {
    let packed = read_all(input)?;
    let bytes =
        decompress(&packed).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    write_all(output, &bytes)?;
    Ok((packed.len(), bytes.len()))
}
