//! # huffpack
//!
//! Lossless Huffman compression over 16-bit symbols.
//!
//! Input bytes are paired into 16-bit symbols, coded with a Huffman prefix
//! code, and written as a self-describing file: a small header (original
//! byte count, leaf count), the tree as a postorder bit sequence, then the
//! encoded body. Decompression rebuilds the exact tree from the header
//! alone; frequencies are never retransmitted.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! huffpack::compress_file(Path::new("input.bin"), Path::new("input.hpk"))?;
//! huffpack::decompress_file(Path::new("input.hpk"), Path::new("restored.bin"))?;
//! # Ok::<(), huffpack::Error>(())
//! ```

pub mod codec;
pub mod dictionary;
pub mod error;
pub mod frequency;
pub mod logger;
pub mod serialize;
pub mod symbol;
pub mod tree;

pub use codec::{compress, compress_file, decompress, decompress_file};
pub use error::{Error, Result};
