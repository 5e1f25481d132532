//! Symbol frequency analysis: the first of the two compression passes.

use std::collections::HashMap;
use std::io::{self, Read};

use crate::symbol::{Symbol, SymbolReader};

/// Symbol occurrence counts for one input, plus the total number of raw
/// bytes seen. Built once per compression and read-only afterward.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: HashMap<Symbol, u64>,
    total_bytes: u64,
}

impl FrequencyTable {
    /// Scans the whole input, counting each 16-bit symbol. An odd trailing
    /// byte counts as its own symbol but adds only 1 to the byte total.
    pub fn scan<R: Read>(reader: R) -> io::Result<Self> {
        let mut table = FrequencyTable::default();
        for packed in SymbolReader::new(reader) {
            let packed = packed?;
            *table.counts.entry(packed.value).or_insert(0) += 1;
            table.total_bytes += packed.width as u64;
        }
        Ok(table)
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn distinct_symbols(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Entries sorted by symbol value. Tree construction seeds its heap
    /// from this order so the map's iteration order never leaks into the
    /// output.
    pub fn sorted_entries(&self) -> Vec<(Symbol, u64)> {
        let mut entries: Vec<(Symbol, u64)> =
            self.counts.iter().map(|(&s, &c)| (s, c)).collect();
        entries.sort_by_key(|&(symbol, _)| symbol);
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn counts_paired_symbols() {
        let table = FrequencyTable::scan(Cursor::new([0x41, 0x42, 0x41, 0x42])).unwrap();
        assert_eq!(table.total_bytes(), 4);
        assert_eq!(table.distinct_symbols(), 1);
        assert_eq!(table.count(0x4142), 2);
    }

    #[test]
    fn odd_input_counts_trailing_byte_once() {
        // The three-byte input [0x41, 0x42, 0x43] chunks into 0x4142 plus
        // the half-symbol 0x4300, for a byte total of 3.
        let table = FrequencyTable::scan(Cursor::new([0x41, 0x42, 0x43])).unwrap();
        assert_eq!(table.total_bytes(), 3);
        assert_eq!(table.distinct_symbols(), 2);
        assert_eq!(table.count(0x4142), 1);
        assert_eq!(table.count(0x4300), 1);
    }

    #[test]
    fn empty_input_yields_empty_table() {
        let table = FrequencyTable::scan(Cursor::new([])).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total_bytes(), 0);
    }

    #[test]
    fn sorted_entries_are_ordered_by_symbol() {
        let table = FrequencyTable::scan(Cursor::new([0xFF, 0x00, 0x01, 0x02])).unwrap();
        let entries = table.sorted_entries();
        assert_eq!(entries, vec![(0x0102, 1), (0xFF00, 1)]);
    }
}
