// libnfcv/src/ndef/record.rs

use crate::protocol::parser;
use crate::{Error, Result};

const FLAG_MB: u8 = 0x80;
const FLAG_ME: u8 = 0x40;
const FLAG_CF: u8 = 0x20;
const FLAG_SR: u8 = 0x10;
const FLAG_IL: u8 = 0x08;
const TNF_MASK: u8 = 0x07;

/// Well-known record type of a Text record
pub const RTD_TEXT: &[u8] = b"T";

/// Type Name Format (3 bits of the record header)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeNameFormat {
    Empty,
    WellKnown,
    MimeMedia,
    AbsoluteUri,
    External,
    Unknown,
    Unchanged,
    Reserved,
}

impl From<u8> for TypeNameFormat {
    fn from(header: u8) -> Self {
        match header & TNF_MASK {
            0 => Self::Empty,
            1 => Self::WellKnown,
            2 => Self::MimeMedia,
            3 => Self::AbsoluteUri,
            4 => Self::External,
            5 => Self::Unknown,
            6 => Self::Unchanged,
            _ => Self::Reserved,
        }
    }
}

/// One NDEF record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefRecord {
    pub tnf: TypeNameFormat,
    pub record_type: Vec<u8>,
    pub id: Vec<u8>,
    pub payload: Vec<u8>,
}

/// Decoded well-known Text record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    pub language: String,
    pub text: String,
}

impl NdefRecord {
    pub fn is_text(&self) -> bool {
        self.tnf == TypeNameFormat::WellKnown && self.record_type == RTD_TEXT
    }

    /// Decode the payload of a well-known Text record.
    /// Layout: status(1) + language(status & 0x3F) + text
    /// Bit 7 of the status byte selects UTF-16 instead of UTF-8.
    pub fn text(&self) -> Result<TextRecord> {
        if !self.is_text() {
            return Err(Error::NdefFormat("not a text record".into()));
        }
        let status = parser::byte_at(&self.payload, 0)?;
        let lang_len = (status & 0x3F) as usize;
        let language = parser::slice_at(&self.payload, 1, lang_len)?;
        let body = &self.payload[1 + lang_len..];

        let text = if status & 0x80 != 0 {
            decode_utf16(body)?
        } else {
            String::from_utf8(body.to_vec())
                .map_err(|e| Error::NdefFormat(format!("invalid UTF-8 text: {}", e)))?
        };

        Ok(TextRecord {
            language: String::from_utf8_lossy(language).into_owned(),
            text,
        })
    }
}

fn decode_utf16(body: &[u8]) -> Result<String> {
    if body.len() % 2 != 0 {
        return Err(Error::NdefFormat("odd UTF-16 text length".into()));
    }
    // Big-endian unless a little-endian byte order mark is present.
    let (little_endian, body) = match body {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, body),
    };
    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|c| {
            if little_endian {
                u16::from_le_bytes([c[0], c[1]])
            } else {
                u16::from_be_bytes([c[0], c[1]])
            }
        })
        .collect();
    String::from_utf16(&units).map_err(|e| Error::NdefFormat(format!("invalid UTF-16 text: {}", e)))
}

/// NDEF message: the records found in a reassembled payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NdefMessage {
    records: Vec<NdefRecord>,
}

impl NdefMessage {
    /// Parse records up to the one flagged Message End. Chunked records are
    /// not supported.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::NdefFormat("empty message".into()));
        }

        let mut records = Vec::new();
        let mut idx = 0usize;
        loop {
            let header = parser::byte_at(bytes, idx)?;
            if records.is_empty() && header & FLAG_MB == 0 {
                return Err(Error::NdefFormat("first record lacks Message Begin".into()));
            }
            if header & FLAG_CF != 0 {
                return Err(Error::UnsupportedOperation("chunked NDEF record".into()));
            }

            let type_len = parser::byte_at(bytes, idx + 1)? as usize;
            idx += 2;

            let payload_len = if header & FLAG_SR != 0 {
                let len = parser::byte_at(bytes, idx)? as usize;
                idx += 1;
                len
            } else {
                let b = parser::slice_at(bytes, idx, 4)?;
                idx += 4;
                u32::from_be_bytes([b[0], b[1], b[2], b[3]]) as usize
            };

            let id_len = if header & FLAG_IL != 0 {
                let len = parser::byte_at(bytes, idx)? as usize;
                idx += 1;
                len
            } else {
                0
            };

            let record_type = parser::slice_at(bytes, idx, type_len)?.to_vec();
            idx += type_len;
            let id = parser::slice_at(bytes, idx, id_len)?.to_vec();
            idx += id_len;
            let payload = parser::slice_at(bytes, idx, payload_len)?.to_vec();
            idx += payload_len;

            records.push(NdefRecord {
                tnf: TypeNameFormat::from(header),
                record_type,
                id,
                payload,
            });

            if header & FLAG_ME != 0 {
                break;
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[NdefRecord] {
        &self.records
    }

    /// Text of the first record, when that record is a Text record.
    pub fn first_text(&self) -> Option<TextRecord> {
        self.records.first().and_then(|r| r.text().ok())
    }
}

/// Encode a single short Text record (UTF-8) as a complete message.
pub fn encode_text_record(language: &str, text: &str) -> Result<Vec<u8>> {
    let lang = language.as_bytes();
    if lang.len() > 0x3F {
        return Err(Error::InvalidLength {
            expected: 0x3F,
            actual: lang.len(),
        });
    }
    let payload_len = 1 + lang.len() + text.len();
    if payload_len > u8::MAX as usize {
        return Err(Error::InvalidLength {
            expected: u8::MAX as usize,
            actual: payload_len,
        });
    }

    let mut out = Vec::with_capacity(3 + RTD_TEXT.len() + payload_len);
    out.push(FLAG_MB | FLAG_ME | FLAG_SR | 0x01);
    out.push(RTD_TEXT.len() as u8);
    out.push(payload_len as u8);
    out.extend_from_slice(RTD_TEXT);
    out.push(lang.len() as u8);
    out.extend_from_slice(lang);
    out.extend_from_slice(text.as_bytes());
    Ok(out)
}
