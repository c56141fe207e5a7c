//! Trie serialization support.
//!
//! This module provides persistence for [`Trie`] contents in three formats:
//!
//! - [`BinarySerializer`] — the versioned binary format: a 4-byte magic
//!   constant and 4-byte version, followed by the depth-first node
//!   encoding. This is the compact wire format and what
//!   [`Trie::save_to_file`] uses.
//! - [`PlainTextSerializer`] — tab-separated `word<TAB>frequency` lines,
//!   for manual editing, version control, and debugging.
//! - [`JsonSerializer`] — a JSON document mapping words to frequencies,
//!   for interop and inspection.
//!
//! # Example
//!
//! ```rust,ignore
//! use libautocomplete::prelude::*;
//! use std::fs::File;
//!
//! let file = File::create("dict.trie")?;
//! BinarySerializer::serialize(&trie, file)?;
//!
//! let file = File::open("dict.trie")?;
//! let loaded = BinarySerializer::deserialize(file)?;
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::trie::{Trie, TrieNode};

/// Magic constant opening every binary trie file ("TRIE").
pub const MAGIC_NUMBER: u32 = 0x5452_4945;

/// Current binary format version. Exact match required on load.
pub const FORMAT_VERSION: u32 = 1;

/// Errors that can occur during trie serialization/deserialization.
#[derive(Debug, Error)]
pub enum SerializationError {
    /// I/O error while reading or writing.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// The file to load does not exist.
    #[error("file does not exist: {0}")]
    FileNotFound(PathBuf),

    /// The file does not start with the trie magic constant.
    #[error("invalid file format: expected magic {MAGIC_NUMBER:#010x}, found {found:#010x}")]
    InvalidMagic {
        /// The magic value actually present in the file.
        found: u32,
    },

    /// The file uses a format version this build does not understand.
    #[error("unsupported file format version: {found}")]
    UnsupportedVersion {
        /// The version actually present in the file.
        found: u32,
    },

    /// A character outside the Basic Multilingual Plane cannot be written
    /// as a single 16-bit code unit.
    #[error("character {0:?} cannot be encoded in the binary format")]
    NonBmpChar(char),

    /// A 16-bit code unit in the surrogate range is not a character.
    #[error("invalid character code in file: {0:#06x}")]
    InvalidCharCode(u16),

    /// A plain-text record did not parse as `word<TAB>frequency`.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Error during JSON serialization.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

/// Trait for serializing and deserializing tries.
pub trait TrieSerializer {
    /// Serialize a trie to a writer.
    fn serialize<W: Write>(trie: &Trie, writer: W) -> Result<(), SerializationError>;

    /// Deserialize a trie from a reader.
    fn deserialize<R: Read>(reader: R) -> Result<Trie, SerializationError>;

    /// Serialize a trie to a file, creating or truncating it.
    fn serialize_to_file(trie: &Trie, path: impl AsRef<Path>) -> Result<(), SerializationError> {
        let file = File::create(path)?;
        Self::serialize(trie, BufWriter::new(file))
    }

    /// Deserialize a trie from a file.
    ///
    /// A missing file is reported as [`SerializationError::FileNotFound`].
    fn deserialize_from_file(path: impl AsRef<Path>) -> Result<Trie, SerializationError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SerializationError::FileNotFound(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Self::deserialize(BufReader::new(file))
    }
}

/// The versioned binary trie format.
///
/// Layout (all integers big-endian): `[u32 magic][u32 version][node...]`
/// where each node is `[u32 frequency][u32 child_count]` followed by
/// `[u16 char_code][node]` per child, depth-first, root first. Characters
/// outside the BMP cannot be represented and fail serialization.
pub struct BinarySerializer;

impl TrieSerializer for BinarySerializer {
    fn serialize<W: Write>(trie: &Trie, mut writer: W) -> Result<(), SerializationError> {
        writer.write_all(&MAGIC_NUMBER.to_be_bytes())?;
        writer.write_all(&FORMAT_VERSION.to_be_bytes())?;
        write_node(&trie.root, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    fn deserialize<R: Read>(mut reader: R) -> Result<Trie, SerializationError> {
        let magic = read_u32(&mut reader)?;
        if magic != MAGIC_NUMBER {
            return Err(SerializationError::InvalidMagic { found: magic });
        }

        let version = read_u32(&mut reader)?;
        if version != FORMAT_VERSION {
            return Err(SerializationError::UnsupportedVersion { found: version });
        }

        let mut trie = Trie::new();
        read_node(&mut trie.root, &mut reader)?;
        Ok(trie)
    }
}

fn write_node<W: Write>(node: &TrieNode, writer: &mut W) -> Result<(), SerializationError> {
    writer.write_all(&node.frequency.to_be_bytes())?;
    writer.write_all(&(node.children.len() as u32).to_be_bytes())?;
    for (&c, child) in &node.children {
        let code = u32::from(c);
        if code > u32::from(u16::MAX) {
            return Err(SerializationError::NonBmpChar(c));
        }
        writer.write_all(&(code as u16).to_be_bytes())?;
        write_node(child, writer)?;
    }
    Ok(())
}

fn read_node<R: Read>(node: &mut TrieNode, reader: &mut R) -> Result<(), SerializationError> {
    node.frequency = read_u32(reader)?;

    let child_count = read_u32(reader)?;
    for _ in 0..child_count {
        let code = read_u16(reader)?;
        let c = char::from_u32(u32::from(code))
            .ok_or(SerializationError::InvalidCharCode(code))?;
        let child = node.children.entry(c).or_default();
        read_node(child, reader)?;
    }
    Ok(())
}

fn read_u32<R: Read>(reader: &mut R) -> Result<u32, SerializationError> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

fn read_u16<R: Read>(reader: &mut R) -> Result<u16, SerializationError> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_be_bytes(buf))
}

/// Plain text serializer using tab-separated `word<TAB>frequency` lines.
///
/// Words are written in sorted order for stable diffs. Empty lines are
/// skipped on load.
pub struct PlainTextSerializer;

impl TrieSerializer for PlainTextSerializer {
    fn serialize<W: Write>(trie: &Trie, mut writer: W) -> Result<(), SerializationError> {
        let words: BTreeMap<String, u32> = trie.all_words().into_iter().collect();
        for (word, frequency) in words {
            writeln!(writer, "{}\t{}", word, frequency)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<Trie, SerializationError> {
        let mut trie = Trie::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }
            let (word, frequency) = line
                .split_once('\t')
                .ok_or_else(|| SerializationError::MalformedRecord(line.clone()))?;
            if word.is_empty() {
                return Err(SerializationError::MalformedRecord(line.clone()));
            }
            let frequency: u32 = frequency
                .parse()
                .map_err(|_| SerializationError::MalformedRecord(line.clone()))?;
            set_word_frequency(&mut trie, word, frequency);
        }
        Ok(trie)
    }
}

/// On-disk shape of the JSON format.
#[derive(Debug, Serialize, Deserialize)]
struct JsonTrieFile {
    words: BTreeMap<String, u32>,
}

/// JSON serializer for human-readable interop.
///
/// Produces a document of the form `{"words": {"apple": 2, "applet": 1}}`.
pub struct JsonSerializer;

impl TrieSerializer for JsonSerializer {
    fn serialize<W: Write>(trie: &Trie, mut writer: W) -> Result<(), SerializationError> {
        let file = JsonTrieFile {
            words: trie.all_words().into_iter().collect(),
        };
        serde_json::to_writer_pretty(&mut writer, &file)?;
        writer.flush()?;
        Ok(())
    }

    fn deserialize<R: Read>(reader: R) -> Result<Trie, SerializationError> {
        let file: JsonTrieFile = serde_json::from_reader(reader)?;
        let mut trie = Trie::new();
        for (word, frequency) in file.words {
            if word.is_empty() {
                return Err(SerializationError::MalformedRecord(word));
            }
            set_word_frequency(&mut trie, &word, frequency);
        }
        Ok(trie)
    }
}

/// Walks/creates the path for `word` and sets its stored frequency.
fn set_word_frequency(trie: &mut Trie, word: &str, frequency: u32) {
    let mut node = &mut trie.root;
    for c in word.chars() {
        node = node.children.entry(c).or_default();
    }
    node.frequency = frequency;
}
