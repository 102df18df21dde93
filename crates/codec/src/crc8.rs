//! CRC-8/SMBUS: polynomial 0x07, initial value 0, no reflection, no final XOR.

const POLYNOMIAL: u8 = 0x07;

const TABLE: [u8; 256] = build_table();

const fn build_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let mut crc = i as u8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x80 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i] = crc;
        i += 1;
    }
    table
}

/// Checksum of a byte slice.
pub fn crc8(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0, |crc, b| TABLE[(crc ^ b) as usize])
}

/// Appends the checksum of everything already in `bytes`.
pub fn append(bytes: &mut Vec<u8>) {
    let crc = crc8(bytes);
    bytes.push(crc);
}

/// True when the last byte is the checksum of the bytes before it.
pub fn verify(bytes: &[u8]) -> bool {
    match bytes.split_last() {
        Some((crc, data)) => crc8(data) == *crc,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_value() {
        assert_eq!(crc8(b"123456789"), 0xF4);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(crc8(&[]), 0);
        assert!(!verify(&[]));
    }

    #[test]
    fn test_append_then_verify() {
        let mut bytes = b"2,0,27667,0".to_vec();
        append(&mut bytes);
        assert!(verify(&bytes));

        let last = bytes.len() - 2;
        bytes[last] ^= 0x01;
        assert!(!verify(&bytes));
    }

    #[test]
    fn test_single_byte_detection() {
        // Any single-bit flip changes an 8-bit CRC
        let mut bytes = b"S2 payload".to_vec();
        append(&mut bytes);
        for i in 0..bytes.len() {
            for bit in 0..8 {
                let mut tampered = bytes.clone();
                tampered[i] ^= 1 << bit;
                assert!(!verify(&tampered), "byte {} bit {}", i, bit);
            }
        }
    }
}
