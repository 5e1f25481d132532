//! Input chunking into 16-bit symbols.

use std::io::{self, Read};

/// The 16-bit unit over which frequencies and codes are computed: two
/// consecutive input bytes, first byte in the high half.
pub type Symbol = u16;

/// A symbol together with how many input bytes actually back it.
///
/// An odd trailing input byte yields a final symbol of `width` 1: the
/// byte sits in the high half and the low half is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedSymbol {
    pub value: Symbol,
    pub width: u8,
}

/// Reads an input stream two bytes at a time, yielding one [`PackedSymbol`]
/// per pair. Both compression passes chunk through this reader, so the
/// frequency scan and the encode pass always agree on symbol boundaries.
pub struct SymbolReader<R> {
    inner: R,
}

impl<R: Read> SymbolReader<R> {
    pub fn new(inner: R) -> Self {
        SymbolReader { inner }
    }

    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(buf[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }
}

impl<R: Read> Iterator for SymbolReader<R> {
    type Item = io::Result<PackedSymbol>;

    fn next(&mut self) -> Option<Self::Item> {
        let first = match self.read_byte() {
            Ok(Some(b)) => b,
            Ok(None) => return None,
            Err(e) => return Some(Err(e)),
        };
        match self.read_byte() {
            Ok(Some(second)) => Some(Ok(PackedSymbol {
                value: (first as u16) << 8 | second as u16,
                width: 2,
            })),
            Ok(None) => Some(Ok(PackedSymbol {
                value: (first as u16) << 8,
                width: 1,
            })),
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn collect(bytes: &[u8]) -> Vec<PackedSymbol> {
        SymbolReader::new(Cursor::new(bytes))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn even_input_pairs_bytes() {
        let symbols = collect(&[0x41, 0x42, 0x43, 0x44]);
        assert_eq!(
            symbols,
            vec![
                PackedSymbol { value: 0x4142, width: 2 },
                PackedSymbol { value: 0x4344, width: 2 },
            ]
        );
    }

    #[test]
    fn odd_trailing_byte_fills_high_half() {
        let symbols = collect(&[0x41, 0x42, 0x43]);
        assert_eq!(
            symbols,
            vec![
                PackedSymbol { value: 0x4142, width: 2 },
                PackedSymbol { value: 0x4300, width: 1 },
            ]
        );
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(collect(&[]).is_empty());
    }

    #[test]
    fn single_byte_input() {
        let symbols = collect(&[0xFF]);
        assert_eq!(symbols, vec![PackedSymbol { value: 0xFF00, width: 1 }]);
    }
}
