//! Gen2 Select filter
//!
//! A Select filter compares `bit_length` bits of `mask` against tag memory
//! starting at `bit_pointer`. Bits are numbered MSB first: bit `b` of byte
//! `k` is `(byte[k] >> (7 - b)) & 1`.
//!
//! # EPC bank addressing
//!
//! In the EPC bank, `bit_pointer` counts from the start of the bank, which
//! begins with a 16-bit CRC and a 16-bit PC word. Those 32 bits are not part
//! of the identifier bytes a reader reports, so matching starts at
//! `bit_pointer - 32` in the identifier. Mask bits that fall inside the
//! CRC/PC header are skipped and always match; Gen2 leaves matching against
//! them undefined.
//!
//! # Wire fields
//! ```text
//! Invert (1 byte, 0 or 1)
//! Bank (1 byte)
//! Bit Pointer (4 bytes, big-endian)
//! Bit Length (2 bytes, big-endian)
//! Mask (ceil(bit_length / 8) bytes)
//! ```

use crate::bank::Bank;
use bytes::{Buf, BufMut, BytesMut};
use mercury_core::{MercuryError, MercuryResult};
use serde::{Deserialize, Serialize};

/// Bits of CRC and PC preceding the identifier in the EPC bank
pub const EPC_HEADER_BITS: u32 = 32;

const FIXED_FIELDS_LEN: usize = 8;

/// Gen2 Select filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SelectFields")]
pub struct Select {
    invert: bool,
    bank: Bank,
    bit_pointer: u32,
    bit_length: u16,
    #[serde(with = "serde_bytes")]
    mask: Vec<u8>,
}

/// Unvalidated field set, deserialized before [`Select::new`] checks it
#[derive(Deserialize)]
struct SelectFields {
    invert: bool,
    bank: Bank,
    bit_pointer: u32,
    bit_length: u16,
    #[serde(with = "serde_bytes")]
    mask: Vec<u8>,
}

impl TryFrom<SelectFields> for Select {
    type Error = MercuryError;

    fn try_from(fields: SelectFields) -> MercuryResult<Self> {
        Select::new(
            fields.invert,
            fields.bank,
            fields.bit_pointer,
            fields.bit_length,
            fields.mask,
        )
    }
}

impl Select {
    /// Create a Select filter
    ///
    /// # Arguments
    /// * `invert` - Negate the match result
    /// * `bank` - Memory bank to compare against
    /// * `bit_pointer` - First bit of the bank to compare
    /// * `bit_length` - Number of bits to compare
    /// * `mask` - Bits to compare, MSB first; must hold at least `bit_length` bits
    ///
    /// # Errors
    /// - `InvalidBank` for the reserved bank
    /// - `MaskLength` if `mask` is shorter than `bit_length` bits
    pub fn new(
        invert: bool,
        bank: Bank,
        bit_pointer: u32,
        bit_length: u16,
        mask: Vec<u8>,
    ) -> MercuryResult<Self> {
        if bank == Bank::Reserved {
            log::debug!("Rejecting Select against the {} bank", bank);
            return Err(MercuryError::InvalidBank(bank.to_string()));
        }
        if mask.len() * 8 < bit_length as usize {
            log::debug!(
                "Rejecting Select: {} mask bits for bit length {}",
                mask.len() * 8,
                bit_length
            );
            return Err(MercuryError::MaskLength {
                bit_length,
                available: mask.len() * 8,
            });
        }
        Ok(Self {
            invert,
            bank,
            bit_pointer,
            bit_length,
            mask,
        })
    }

    pub fn invert(&self) -> bool {
        self.invert
    }

    pub fn bank(&self) -> Bank {
        self.bank
    }

    pub fn bit_pointer(&self) -> u32 {
        self.bit_pointer
    }

    pub fn bit_length(&self) -> u16 {
        self.bit_length
    }

    /// Borrow the mask bytes
    pub fn mask(&self) -> &[u8] {
        &self.mask
    }

    /// Take ownership of the mask bytes
    pub fn into_mask(self) -> Vec<u8> {
        self.mask
    }

    /// Evaluate the filter against a tag's EPC identifier bytes
    ///
    /// Returns `false` as soon as a compared bit differs or the comparison
    /// runs past the end of `epc`; the identifier is never padded.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedBank` unless the filter targets the EPC bank.
    pub fn matches(&self, epc: &[u8]) -> MercuryResult<bool> {
        if self.bank != Bank::Epc {
            log::debug!("Cannot match a Select against the {} bank", self.bank);
            return Err(MercuryError::UnsupportedBank(self.bank.to_string()));
        }

        let (skip, start) = if self.bit_pointer < EPC_HEADER_BITS {
            ((EPC_HEADER_BITS - self.bit_pointer) as usize, 0usize)
        } else {
            (0usize, (self.bit_pointer - EPC_HEADER_BITS) as usize)
        };
        let available = epc.len() * 8;

        let matched = (skip..self.bit_length as usize)
            .zip(start..)
            .all(|(i, addr)| addr < available && bit_at(epc, addr) == bit_at(&self.mask, i));

        let result = matched != self.invert;
        log::trace!(
            "Select ptr={} len={} invert={} against {} EPC bytes: {}",
            self.bit_pointer,
            self.bit_length,
            self.invert,
            epc.len(),
            result
        );
        Ok(result)
    }

    /// Encode the filter's wire fields
    ///
    /// Only the mask bytes covering `bit_length` are written.
    pub fn encode(&self) -> Vec<u8> {
        let mask_len = mask_bytes(self.bit_length);
        let mut buf = BytesMut::with_capacity(FIXED_FIELDS_LEN + mask_len);
        buf.put_u8(self.invert as u8);
        buf.put_u8(self.bank.code());
        buf.put_u32(self.bit_pointer);
        buf.put_u16(self.bit_length);
        buf.put_slice(&self.mask[..mask_len]);
        buf.to_vec()
    }

    /// Decode wire fields produced by [`encode`](Select::encode)
    ///
    /// # Errors
    /// - `InvalidData` if the buffer is truncated, has trailing bytes, or the
    ///   invert flag or bank code is unknown
    /// - Any error from [`Select::new`]
    pub fn decode(mut data: &[u8]) -> MercuryResult<Self> {
        if data.remaining() < FIXED_FIELDS_LEN {
            return Err(MercuryError::InvalidData(format!(
                "Select fields need at least {} bytes, got {}",
                FIXED_FIELDS_LEN,
                data.remaining()
            )));
        }
        let invert = match data.get_u8() {
            0 => false,
            1 => true,
            other => {
                return Err(MercuryError::InvalidData(format!(
                    "Invalid invert flag: {}",
                    other
                )));
            }
        };
        let bank = Bank::from_code(data.get_u8())?;
        let bit_pointer = data.get_u32();
        let bit_length = data.get_u16();

        let mask_len = mask_bytes(bit_length);
        if data.remaining() != mask_len {
            return Err(MercuryError::InvalidData(format!(
                "Select mask needs {} bytes, got {}",
                mask_len,
                data.remaining()
            )));
        }
        Self::new(invert, bank, bit_pointer, bit_length, data.to_vec())
    }
}

fn mask_bytes(bit_length: u16) -> usize {
    (bit_length as usize).div_ceil(8)
}

fn bit_at(bytes: &[u8], index: usize) -> u8 {
    (bytes[index / 8] >> (7 - (index % 8))) & 1
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPC: [u8; 12] = [
        0xFF, 0x30, 0x08, 0x33, 0xB2, 0xDD, 0xD9, 0x01, 0x40, 0x00, 0x00, 0x01,
    ];

    #[test]
    fn test_match_first_byte() {
        let select = Select::new(false, Bank::Epc, 32, 8, vec![0xFF]).unwrap();
        assert!(select.matches(&EPC).unwrap());

        let inverted = Select::new(true, Bank::Epc, 32, 8, vec![0xFF]).unwrap();
        assert!(!inverted.matches(&EPC).unwrap());
    }

    #[test]
    fn test_mismatch() {
        let select = Select::new(false, Bank::Epc, 32, 8, vec![0xFE]).unwrap();
        assert!(!select.matches(&EPC).unwrap());

        let inverted = Select::new(true, Bank::Epc, 32, 8, vec![0xFE]).unwrap();
        assert!(inverted.matches(&EPC).unwrap());
    }

    #[test]
    fn test_unaligned_window() {
        // Bits 12..20 of the identifier: 0x0 of 0x30, then 0x08 -> 0000_0000
        let select = Select::new(false, Bank::Epc, 32 + 12, 8, vec![0x00]).unwrap();
        assert!(select.matches(&EPC).unwrap());

        // Bits 4..12: low nibble of 0xFF, high nibble of 0x30 -> 1111_0011
        let select = Select::new(false, Bank::Epc, 32 + 4, 8, vec![0xF3]).unwrap();
        assert!(select.matches(&EPC).unwrap());
    }

    #[test]
    fn test_header_bits_always_match() {
        let select = Select::new(false, Bank::Epc, 16, 8, vec![0x00]).unwrap();
        assert!(select.matches(&EPC).unwrap());
        assert!(select.matches(&[]).unwrap());

        // First mask byte falls in the header; the second is compared with EPC byte 0
        let select = Select::new(false, Bank::Epc, 24, 16, vec![0xAA, 0xFF]).unwrap();
        assert!(select.matches(&EPC).unwrap());
        let select = Select::new(false, Bank::Epc, 24, 16, vec![0xAA, 0xFE]).unwrap();
        assert!(!select.matches(&EPC).unwrap());
    }

    #[test]
    fn test_past_end_of_identifier() {
        let select = Select::new(false, Bank::Epc, 32, 16, vec![0xFF, 0x30]).unwrap();
        assert!(!select.matches(&[0xFF]).unwrap());

        let inverted = Select::new(true, Bank::Epc, 32, 16, vec![0xFF, 0x30]).unwrap();
        assert!(inverted.matches(&[0xFF]).unwrap());
    }

    #[test]
    fn test_full_identifier() {
        let select = Select::new(false, Bank::Epc, 32, 96, EPC.to_vec()).unwrap();
        assert!(select.matches(&EPC).unwrap());
    }

    #[test]
    fn test_zero_length_matches() {
        let select = Select::new(false, Bank::Epc, 32, 0, vec![]).unwrap();
        assert!(select.matches(&[]).unwrap());
    }

    #[test]
    fn test_bank_rules() {
        assert_eq!(
            Select::new(false, Bank::Reserved, 0, 8, vec![0]).unwrap_err(),
            MercuryError::InvalidBank("RESERVED".to_string())
        );

        let tid = Select::new(false, Bank::Tid, 0, 8, vec![0xE2]).unwrap();
        assert_eq!(
            tid.matches(&EPC).unwrap_err(),
            MercuryError::UnsupportedBank("TID".to_string())
        );
        let user = Select::new(false, Bank::User, 0, 8, vec![0x00]).unwrap();
        assert!(user.matches(&EPC).is_err());
    }

    #[test]
    fn test_mask_too_short() {
        assert_eq!(
            Select::new(false, Bank::Epc, 32, 9, vec![0xFF]).unwrap_err(),
            MercuryError::MaskLength {
                bit_length: 9,
                available: 8
            }
        );
    }

    #[test]
    fn test_wire_fields() {
        let select = Select::new(true, Bank::Epc, 0x20, 12, vec![0xAB, 0xC0, 0xFF]).unwrap();
        let encoded = select.encode();
        assert_eq!(
            encoded,
            vec![0x01, 0x01, 0x00, 0x00, 0x00, 0x20, 0x00, 0x0C, 0xAB, 0xC0]
        );

        let decoded = Select::decode(&encoded).unwrap();
        assert_eq!(decoded.mask(), &[0xAB, 0xC0]);
        assert_eq!(decoded.bit_length(), 12);
        assert!(decoded.invert());
    }

    #[test]
    fn test_wire_fields_rejected() {
        assert!(Select::decode(&[0x00, 0x01, 0x00]).is_err());
        // trailing byte
        assert!(Select::decode(&[0, 1, 0, 0, 0, 0x20, 0, 8, 0xFF, 0x00]).is_err());
        // bad invert flag
        assert!(Select::decode(&[2, 1, 0, 0, 0, 0x20, 0, 8, 0xFF]).is_err());
        // reserved bank
        assert!(matches!(
            Select::decode(&[0, 0, 0, 0, 0, 0, 0, 8, 0xFF]),
            Err(MercuryError::InvalidBank(_))
        ));
    }

    #[test]
    fn test_serde_validates() {
        let select = Select::new(false, Bank::Epc, 32, 8, vec![0xFF]).unwrap();
        let json = serde_json::to_string(&select).unwrap();
        assert_eq!(serde_json::from_str::<Select>(&json).unwrap(), select);

        let bad = r#"{"invert":false,"bank":"Reserved","bit_pointer":0,"bit_length":8,"mask":[255]}"#;
        assert!(serde_json::from_str::<Select>(bad).is_err());
    }
}
