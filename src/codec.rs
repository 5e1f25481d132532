//! The encode and decode pipelines over the bit-stream layer.
//!
//! Compression reads the input twice: one pass to build the frequency
//! table and one pass to emit code bits. The trade keeps memory bounded by
//! the number of distinct symbols instead of the input size.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use tracing::debug;

use crate::dictionary::{decode_table, encode_table};
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::serialize::{read_tree, write_tree};
use crate::symbol::SymbolReader;
use crate::tree::build_tree;

/// Compresses `input` into a self-describing stream on `output`.
///
/// The reader must be seekable: after the frequency scan it is rewound and
/// re-chunked with the identical symbol grouping for the encode pass.
pub fn compress<R: Read + Seek, W: Write>(mut input: R, output: W) -> Result<()> {
    let table = FrequencyTable::scan(BufReader::new(&mut input))?;
    let total_bytes = table.total_bytes();
    if total_bytes > u64::from(u32::MAX) {
        return Err(Error::InputTooLarge(total_bytes));
    }
    debug!(
        bytes = total_bytes,
        symbols = table.distinct_symbols(),
        "frequency scan complete"
    );

    let mut writer = BitWriter::endian(BufWriter::new(output), BigEndian);
    writer.write::<32, u32>(total_bytes as u32)?;
    writer.write::<32, u32>(table.distinct_symbols() as u32)?;

    if let Some(tree) = build_tree(&table) {
        let codes = encode_table(&tree);
        write_tree(&mut writer, &tree)?;
        debug!(leaves = codes.len(), "tree header written");

        input.seek(SeekFrom::Start(0))?;
        let mut emitted = 0u64;
        for packed in SymbolReader::new(BufReader::new(&mut input)) {
            let packed = packed?;
            let path = codes.get(&packed.value).ok_or_else(|| {
                Error::corrupt(format!(
                    "symbol {:#06x} absent from dictionary; input changed between passes",
                    packed.value
                ))
            })?;
            for &bit in path {
                writer.write_bit(bit)?;
            }
            emitted += u64::from(packed.width);
        }
        if emitted != total_bytes {
            return Err(Error::corrupt("input length changed between passes"));
        }
    }

    writer.byte_align()?;
    writer.into_writer().flush()?;
    Ok(())
}

/// Decompresses a stream produced by [`compress`], writing the exact
/// original bytes to `output`.
pub fn decompress<R: Read, W: Write>(input: R, output: W) -> Result<()> {
    let mut reader = BitReader::endian(BufReader::new(input), BigEndian);
    let mut out = BufWriter::new(output);

    let total_bytes: u32 = reader
        .read::<32, u32>()
        .map_err(|e| Error::from_read(e, "byte-count header"))?;
    let leaf_count: u32 = reader
        .read::<32, u32>()
        .map_err(|e| Error::from_read(e, "leaf-count header"))?;
    debug!(bytes = total_bytes, leaves = leaf_count, "header read");

    if leaf_count == 0 {
        if total_bytes != 0 {
            return Err(Error::corrupt("header declares bytes but no symbols"));
        }
        // Zero-byte original: minimal header, no tree, no body.
        return Ok(());
    }
    if total_bytes == 0 {
        return Err(Error::corrupt("header declares symbols but no bytes"));
    }
    if leaf_count > 65536 {
        return Err(Error::corrupt(format!(
            "header declares {leaf_count} leaves; 16-bit symbols allow at most 65536"
        )));
    }

    let tree = read_tree(&mut reader, leaf_count)?;
    let paths = decode_table(&tree);
    // The longest code bounds how far the path buffer may grow before a
    // miss proves the stream corrupt.
    let max_code_len = paths.keys().map(|p| p.len()).max().unwrap_or(1);

    let mut remaining = u64::from(total_bytes);
    let mut buffer: Vec<bool> = Vec::with_capacity(max_code_len);
    while remaining > 0 {
        let bit = reader
            .read_bit()
            .map_err(|e| Error::from_read(e, "encoded body"))?;
        buffer.push(bit);

        if let Some(&symbol) = paths.get(&buffer) {
            let bytes = symbol.to_be_bytes();
            if remaining == 1 {
                // Odd-length original: only the high half of the final
                // symbol is real data.
                out.write_all(&bytes[..1])?;
                remaining = 0;
            } else {
                out.write_all(&bytes)?;
                remaining -= 2;
            }
            buffer.clear();
        } else if buffer.len() >= max_code_len {
            return Err(Error::corrupt(format!(
                "no code matches after {} bits",
                buffer.len()
            )));
        }
    }

    out.flush()?;
    Ok(())
}

/// Compresses the file at `input_path` into `output_path`.
pub fn compress_file(input_path: &Path, output_path: &Path) -> Result<()> {
    let input = File::open(input_path)?;
    let output = File::create(output_path)?;
    compress(input, output)
}

/// Decompresses the file at `input_path` into `output_path`.
pub fn decompress_file(input_path: &Path, output_path: &Path) -> Result<()> {
    let input = File::open(input_path)?;
    let output = File::create(output_path)?;
    decompress(input, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn compress_bytes(data: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        compress(Cursor::new(data), &mut out).unwrap();
        out
    }

    fn decompress_bytes(data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        decompress(Cursor::new(data), &mut out)?;
        Ok(out)
    }

    fn roundtrip(data: &[u8]) {
        let packed = compress_bytes(data);
        assert_eq!(decompress_bytes(&packed).unwrap(), data);
    }

    #[test]
    fn roundtrips_plain_text() {
        roundtrip(b"it was the best of times, it was the worst of times");
    }

    #[test]
    fn roundtrips_empty_input() {
        let packed = compress_bytes(&[]);
        // Minimal header only: two 32-bit zero fields.
        assert_eq!(packed, vec![0; 8]);
        assert_eq!(decompress_bytes(&packed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn roundtrips_single_byte() {
        roundtrip(&[0x41]);
    }

    #[test]
    fn roundtrips_odd_length_input() {
        roundtrip(&[0x41, 0x42, 0x43]);
    }

    #[test]
    fn roundtrips_single_repeated_symbol() {
        // One distinct 16-bit value: the zero-internal-node tree.
        let data: Vec<u8> = [0xAB, 0xCD].repeat(100);
        roundtrip(&data);
    }

    #[test]
    fn roundtrips_all_byte_values() {
        let data: Vec<u8> = (0u16..=255).map(|b| b as u8).collect();
        roundtrip(&data);
    }

    #[test]
    fn compression_is_deterministic() {
        let data = b"deterministic output requires a stable tie-break";
        assert_eq!(compress_bytes(data), compress_bytes(data));
    }

    #[test]
    fn header_matches_input() {
        let packed = compress_bytes(&[0x41, 0x42, 0x43]);
        let byte_count = u32::from_be_bytes(packed[0..4].try_into().unwrap());
        let leaf_count = u32::from_be_bytes(packed[4..8].try_into().unwrap());
        assert_eq!(byte_count, 3);
        // Symbols 0x4142 and 0x4300.
        assert_eq!(leaf_count, 2);
    }

    #[test]
    fn truncated_body_is_detected() {
        let data = b"truncation must fail loudly rather than decode garbage";
        let packed = compress_bytes(data);
        let err = decompress_bytes(&packed[..packed.len() - 1]).unwrap_err();
        assert!(err.is_corrupt(), "got {err:?}");
    }

    #[test]
    fn truncated_header_is_detected() {
        let packed = compress_bytes(b"hello world");
        let err = decompress_bytes(&packed[..6]).unwrap_err();
        assert!(err.is_corrupt(), "got {err:?}");
    }

    #[test]
    fn inconsistent_empty_header_is_detected() {
        // byte count 3 but zero leaves.
        let bad = [0, 0, 0, 3, 0, 0, 0, 0];
        let err = decompress_bytes(&bad).unwrap_err();
        assert!(err.is_corrupt(), "got {err:?}");
    }

    #[test]
    fn oversized_leaf_count_is_detected() {
        let mut bad = Vec::new();
        bad.extend_from_slice(&10u32.to_be_bytes());
        bad.extend_from_slice(&70000u32.to_be_bytes());
        let err = decompress_bytes(&bad).unwrap_err();
        assert!(err.is_corrupt(), "got {err:?}");
    }
}
