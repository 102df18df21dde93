//! D-code: date of birth and gender.
//!
//! Payload is five bytes: the birth date as a big-endian `i32` count of
//! days since 1950-01-01 (negative before it), then the gender code
//! (`M` or `F`).

use scoring::{Demographics, Gender};
use tracing::debug;

use crate::error::{CodecError, Result};
use crate::frame::{Frame, date_from_days, days_since_epoch};

pub const D_CODE_VERSION: u32 = 1;

const FRAME: Frame = Frame {
    tag: 'D',
    version: D_CODE_VERSION,
    kind: "D-code",
};

const PAYLOAD_LEN: usize = 5;

pub fn encode_d_code(demographics: &Demographics) -> Result<String> {
    let days = days_since_epoch(demographics.date_of_birth);
    let days = i32::try_from(days).map_err(|_| {
        CodecError::InvalidInput(format!(
            "date of birth {} is outside the range a D-code can carry",
            demographics.date_of_birth
        ))
    })?;

    let mut payload = Vec::with_capacity(PAYLOAD_LEN + 1);
    payload.extend_from_slice(&days.to_be_bytes());
    payload.push(demographics.gender.code() as u8);

    let code = FRAME.seal(payload);
    debug!("Encoded D-code {}", code);
    Ok(code)
}

pub fn decode_d_code(code: &str) -> Result<Demographics> {
    let payload = FRAME.open(code)?;

    let &[d0, d1, d2, d3, gender] = payload.as_slice() else {
        return Err(CodecError::invalid(format!(
            "D-code: expected {} payload bytes, found {}",
            PAYLOAD_LEN,
            payload.len()
        )));
    };

    let days = i32::from_be_bytes([d0, d1, d2, d3]);
    let date_of_birth = date_from_days(days.into())
        .ok_or_else(|| CodecError::invalid("D-code: date of birth out of range"))?;
    let gender = Gender::from_code(gender as char)
        .ok_or_else(|| CodecError::invalid(format!("D-code: unknown gender byte {:#04x}", gender)))?;

    debug!("Decoded D-code {} ({}, {})", code.trim(), date_of_birth, gender);
    Ok(Demographics::new(date_of_birth, gender))
}

pub fn is_valid_d_code(code: &str) -> bool {
    decode_d_code(code).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base64url;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_round_trip() {
        let profile = Demographics::new(date(1998, 1, 10), Gender::Male);
        let code = encode_d_code(&profile).unwrap();
        assert!(code.starts_with("D1-"));
        assert_eq!(code.len(), "D1-".len() + 8);
        assert_eq!(decode_d_code(&code).unwrap(), profile);
    }

    #[test]
    fn test_dates_around_the_epoch() {
        for profile in [
            Demographics::new(date(1950, 1, 1), Gender::Female),
            Demographics::new(date(1949, 12, 31), Gender::Male),
            Demographics::new(date(1949, 6, 1), Gender::Male),
            Demographics::new(date(1901, 2, 28), Gender::Female),
            Demographics::new(date(2129, 6, 7), Gender::Male),
        ] {
            let code = encode_d_code(&profile).unwrap();
            assert_eq!(decode_d_code(&code).unwrap(), profile);
        }
    }

    #[test]
    fn test_pre_epoch_payload_is_negative() {
        let profile = Demographics::new(date(1949, 12, 31), Gender::Female);
        let code = encode_d_code(&profile).unwrap();
        let bytes = base64url::decode(code.strip_prefix("D1-").unwrap()).unwrap();
        assert_eq!(bytes[..5], [0xff, 0xff, 0xff, 0xff, b'F']);
    }

    #[test]
    fn test_decode_rejects_days_beyond_the_calendar() {
        let code = FRAME.seal(vec![0x7f, 0xff, 0xff, 0xff, b'M']);
        assert!(matches!(
            decode_d_code(&code),
            Err(CodecError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_wrong_payload_length() {
        let code = FRAME.seal(vec![0x01, 0x02, b'M']);
        assert!(matches!(
            decode_d_code(&code),
            Err(CodecError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_gender() {
        let code = FRAME.seal(vec![0x00, 0x00, 0x01, 0x02, b'X']);
        assert!(matches!(
            decode_d_code(&code),
            Err(CodecError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_decode_rejects_checksum_mismatch() {
        let mut payload = vec![0x00, 0x00, 0x6c, 0x13, b'F'];
        crate::crc8::append(&mut payload);
        let last = payload.len() - 1;
        payload[last] ^= 0xff;
        let code = format!("D1-{}", base64url::encode(&payload));
        assert!(!is_valid_d_code(&code));
    }

    #[test]
    fn test_decode_rejects_s_code_prefix() {
        let profile = Demographics::new(date(1990, 5, 5), Gender::Female);
        let code = encode_d_code(&profile).unwrap().replacen("D1-", "S2-", 1);
        assert!(matches!(
            decode_d_code(&code),
            Err(CodecError::InvalidCode(_))
        ));
    }

    #[test]
    fn test_decode_newer_version() {
        let profile = Demographics::new(date(1990, 5, 5), Gender::Female);
        let code = encode_d_code(&profile).unwrap().replacen("D1-", "D2-", 1);
        assert!(matches!(
            decode_d_code(&code),
            Err(CodecError::UnsupportedVersion { found: 2, supported: 1, .. })
        ));
    }
}
