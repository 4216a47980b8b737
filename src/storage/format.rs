//! Binary format for model persistence.
//!
//! ## Format Layout
//!
//! ```text
//! +------------------+
//! | Header (32 bytes)|
//! +------------------+
//! | Model payload    |
//! | (bincode)        |
//! +------------------+
//! ```
//!
//! ### Header (32 bytes)
//! - Magic number (4 bytes): "LXCM"
//! - Version (2 bytes)
//! - Flags (2 bytes): bit 0 = inverse relations generated
//! - Number of lexes (4 bytes)
//! - Number of senses (4 bytes)
//! - Number of synsets (4 bytes)
//! - Payload length (8 bytes)
//! - Reserved (4 bytes)
//!
//! All integers are little-endian.

use crate::error::{ModelError, Result};
use crate::model::Model;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Magic number for model files.
const MAGIC: &[u8; 4] = b"LXCM";

/// Current format version.
const VERSION: u16 = 1;

/// Header size in bytes.
const HEADER_SIZE: usize = 32;

/// Flag set when the stored model went through inverse relation closure.
const FLAG_INVERSE_CLOSED: u16 = 0x0001;

/// Model file header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelHeader {
    /// Format version.
    pub version: u16,
    /// Flags.
    pub flags: u16,
    /// Number of lexes.
    pub num_lexes: u32,
    /// Number of senses.
    pub num_senses: u32,
    /// Number of synsets.
    pub num_synsets: u32,
    /// Length of the bincode payload following the header.
    pub payload_len: u64,
}

impl ModelHeader {
    /// Creates a header describing a model and its encoded payload.
    pub fn new(model: &Model, payload_len: u64) -> Self {
        Self {
            version: VERSION,
            flags: if model.is_inverse_closed() {
                FLAG_INVERSE_CLOSED
            } else {
                0
            },
            num_lexes: model.lexes().len() as u32,
            num_senses: model.senses().len() as u32,
            num_synsets: model.synsets().len() as u32,
            payload_len,
        }
    }

    /// Returns true if inverse relations were generated before saving.
    pub fn is_inverse_closed(&self) -> bool {
        self.flags & FLAG_INVERSE_CLOSED != 0
    }

    /// Writes the header to bytes.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[0..4].copy_from_slice(MAGIC);
        bytes[4..6].copy_from_slice(&self.version.to_le_bytes());
        bytes[6..8].copy_from_slice(&self.flags.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.num_lexes.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.num_senses.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.num_synsets.to_le_bytes());
        bytes[20..28].copy_from_slice(&self.payload_len.to_le_bytes());
        // Reserved (bytes 28-31)
        bytes
    }

    /// Reads a header from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(ModelError::InvalidFormat("Header too short".to_string()));
        }
        if &bytes[0..4] != MAGIC {
            return Err(ModelError::InvalidFormat("Invalid magic number".to_string()));
        }

        let version = u16::from_le_bytes([bytes[4], bytes[5]]);
        if version != VERSION {
            return Err(ModelError::InvalidFormat(format!(
                "Unsupported version {}",
                version
            )));
        }

        let u32_at =
            |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);
        let mut payload_len = [0u8; 8];
        payload_len.copy_from_slice(&bytes[20..28]);

        Ok(Self {
            version,
            flags: u16::from_le_bytes([bytes[6], bytes[7]]),
            num_lexes: u32_at(8),
            num_senses: u32_at(12),
            num_synsets: u32_at(16),
            payload_len: u64::from_le_bytes(payload_len),
        })
    }

    fn check(&self, model: &Model) -> Result<()> {
        let expected = (self.num_lexes, self.num_senses, self.num_synsets);
        let actual = (
            model.lexes().len() as u32,
            model.senses().len() as u32,
            model.synsets().len() as u32,
        );
        if expected != actual {
            return Err(ModelError::InvalidFormat(format!(
                "Header counts {:?} do not match payload {:?}",
                expected, actual
            )));
        }
        if self.is_inverse_closed() != model.is_inverse_closed() {
            return Err(ModelError::InvalidFormat(
                "Inverse relation flag does not match payload".to_string(),
            ));
        }
        Ok(())
    }
}

/// Binary format reader/writer for models.
pub struct ModelFormat;

impl ModelFormat {
    /// Encodes a model as header plus payload.
    pub fn to_bytes(model: &Model) -> Result<Vec<u8>> {
        let payload = bincode::serialize(model)?;
        let header = ModelHeader::new(model, payload.len() as u64);

        let mut bytes = Vec::with_capacity(HEADER_SIZE + payload.len());
        bytes.extend_from_slice(&header.to_bytes());
        bytes.extend_from_slice(&payload);
        Ok(bytes)
    }

    /// Decodes a model from header plus payload.
    pub fn from_bytes(bytes: &[u8]) -> Result<Model> {
        let header = ModelHeader::from_bytes(bytes)?;
        let payload = &bytes[HEADER_SIZE..];
        check_payload_len(&header, payload.len() as u64)?;
        decode(&header, payload)
    }

    /// Writes a model to a file.
    pub fn write<P: AsRef<Path>>(path: P, model: &Model) -> Result<()> {
        let payload = bincode::serialize(model)?;
        let header = ModelHeader::new(model, payload.len() as u64);

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&header.to_bytes())?;
        writer.write_all(&payload)?;
        writer.flush()?;
        Ok(())
    }

    /// Reads a model from a file.
    pub fn read<P: AsRef<Path>>(path: P) -> Result<Model> {
        let file = File::open(path)?;
        let file_len = file.metadata()?.len();
        let mut reader = BufReader::new(file);

        let mut header_bytes = [0u8; HEADER_SIZE];
        reader.read_exact(&mut header_bytes)?;
        let header = ModelHeader::from_bytes(&header_bytes)?;

        // The header length is untrusted until it matches the file.
        let remaining = file_len.saturating_sub(HEADER_SIZE as u64);
        check_payload_len(&header, remaining)?;

        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;
        check_payload_len(&header, payload.len() as u64)?;

        decode(&header, &payload)
    }

    /// Reads only the header of a model file.
    pub fn read_header<P: AsRef<Path>>(path: P) -> Result<ModelHeader> {
        let mut file = File::open(path)?;
        let mut header_bytes = [0u8; HEADER_SIZE];
        file.read_exact(&mut header_bytes)?;
        ModelHeader::from_bytes(&header_bytes)
    }
}

fn check_payload_len(header: &ModelHeader, actual: u64) -> Result<()> {
    if actual != header.payload_len {
        return Err(ModelError::InvalidFormat(format!(
            "Payload is {} bytes, header says {}",
            actual, header.payload_len
        )));
    }
    Ok(())
}

fn decode(header: &ModelHeader, payload: &[u8]) -> Result<Model> {
    let model: Model = bincode::deserialize(payload)?;
    header.check(&model)?;
    model.check_positions()?;
    Ok(model)
}
