// ============================================================================
// STELLAR-HORIZON - Account Identifiers
// ============================================================================
// Stellar account ids are "StrKey" encoded Ed25519 public keys:
// base32(version byte + 32 key bytes + CRC16 checksum), no padding.
// ============================================================================

use crate::error::HorizonError;
use crate::Result;
use ed25519_dalek::VerifyingKey;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// StrKey version byte for G... account ids (0x30 = 48)
const VERSION_ACCOUNT_ID: u8 = 6 << 3;

/// CRC16-CCITT polynomial
const CRC16_POLY: u16 = 0x1021;

const ENCODED_LEN: usize = 56;
const DECODED_LEN: usize = 35;

/// A validated Stellar account id (`G...` address).
///
/// Only the string form ever reaches the wire; the raw key is kept so
/// callers can hand it to signature verification without re-decoding.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct AccountId {
    address: String,
    key: [u8; 32],
}

impl AccountId {
    /// Parse and checksum-verify a `G...` address
    pub fn parse(address: &str) -> Result<Self> {
        let key = decode_account_id(address)?;
        Ok(Self {
            address: address.to_string(),
            key,
        })
    }

    /// Build from raw Ed25519 public key bytes
    pub fn from_public_key(key_bytes: &[u8]) -> Result<Self> {
        let key: [u8; 32] = key_bytes.try_into().map_err(|_| {
            HorizonError::InvalidAccountId(format!(
                "Expected 32 bytes, got {}",
                key_bytes.len()
            ))
        })?;
        Ok(Self {
            address: encode_account_id(&key),
            key,
        })
    }

    /// Build from a hex encoded Ed25519 public key (optional `0x` prefix)
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        let clean_hex = hex_key.trim_start_matches("0x");
        if clean_hex.len() != 64 {
            return Err(HorizonError::InvalidAccountId(format!(
                "Expected 64 hex chars, got {}",
                clean_hex.len()
            )));
        }
        let key_bytes = hex::decode(clean_hex)?;
        Self::from_public_key(&key_bytes)
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    pub fn public_key_bytes(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.key)
    }

    /// The Ed25519 verifying key behind this account
    pub fn verifying_key(&self) -> Result<VerifyingKey> {
        VerifyingKey::from_bytes(&self.key)
            .map_err(|e| HorizonError::InvalidAccountId(e.to_string()))
    }
}

impl From<&VerifyingKey> for AccountId {
    fn from(key: &VerifyingKey) -> Self {
        let key = key.to_bytes();
        Self {
            address: encode_account_id(&key),
            key,
        }
    }
}

impl FromStr for AccountId {
    type Err = HorizonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.address)
    }
}

impl AsRef<str> for AccountId {
    fn as_ref(&self) -> &str {
        &self.address
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.address)
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let address = String::deserialize(deserializer)?;
        AccountId::parse(&address).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// STRKEY CODEC
// ============================================================================

fn encode_account_id(key: &[u8; 32]) -> String {
    let mut payload = Vec::with_capacity(DECODED_LEN);
    payload.push(VERSION_ACCOUNT_ID);
    payload.extend_from_slice(key);

    // Checksum covers version + key, appended little-endian
    let checksum = crc16(&payload);
    payload.push((checksum & 0xFF) as u8);
    payload.push((checksum >> 8) as u8);

    base32_encode(&payload)
}

fn decode_account_id(address: &str) -> Result<[u8; 32]> {
    if !address.starts_with('G') {
        return Err(HorizonError::InvalidAccountId(
            "Must start with 'G'".to_string(),
        ));
    }

    if address.len() != ENCODED_LEN {
        return Err(HorizonError::InvalidAccountId(format!(
            "Expected {} chars, got {}",
            ENCODED_LEN,
            address.len()
        )));
    }

    let decoded = base32_decode(address)?;
    if decoded.len() != DECODED_LEN {
        return Err(HorizonError::InvalidAccountId(
            "Invalid decoded length".to_string(),
        ));
    }

    if decoded[0] != VERSION_ACCOUNT_ID {
        return Err(HorizonError::InvalidAccountId(
            "Invalid version byte".to_string(),
        ));
    }

    let stored_checksum = (decoded[33] as u16) | ((decoded[34] as u16) << 8);
    if stored_checksum != crc16(&decoded[0..33]) {
        return Err(HorizonError::InvalidAccountId(
            "Checksum mismatch".to_string(),
        ));
    }

    let mut key = [0u8; 32];
    key.copy_from_slice(&decoded[1..33]);
    Ok(key)
}

// RFC 4648 alphabet, no padding
const BASE32_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

fn base32_encode(data: &[u8]) -> String {
    let mut result = String::with_capacity((data.len() * 8 + 4) / 5);
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for &byte in data {
        buffer = (buffer << 8) | (byte as u64);
        bits_in_buffer += 8;

        while bits_in_buffer >= 5 {
            bits_in_buffer -= 5;
            let index = ((buffer >> bits_in_buffer) & 0x1F) as usize;
            result.push(BASE32_ALPHABET[index] as char);
        }
    }

    if bits_in_buffer > 0 {
        let index = ((buffer << (5 - bits_in_buffer)) & 0x1F) as usize;
        result.push(BASE32_ALPHABET[index] as char);
    }

    result
}

fn base32_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut result = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut buffer: u64 = 0;
    let mut bits_in_buffer = 0;

    for c in encoded.chars() {
        let value = match c {
            'A'..='Z' => (c as u8) - b'A',
            '2'..='7' => (c as u8) - b'2' + 26,
            _ => {
                return Err(HorizonError::InvalidAccountId(format!(
                    "Invalid base32 character: {}",
                    c
                )))
            }
        };

        buffer = (buffer << 5) | (value as u64);
        bits_in_buffer += 5;

        if bits_in_buffer >= 8 {
            bits_in_buffer -= 8;
            result.push(((buffer >> bits_in_buffer) & 0xFF) as u8);
        }
    }

    Ok(result)
}

// CRC16-CCITT, XModem variant
fn crc16(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;

    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ CRC16_POLY;
            } else {
                crc <<= 1;
            }
        }
    }

    crc
}
