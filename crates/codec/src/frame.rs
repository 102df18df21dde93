//! Shared framing for text codes: `<tag><version>-` followed by the
//! base64url of the payload with its CRC-8 appended.

use chrono::{Days, NaiveDate};

use crate::base64url;
use crate::crc8;
use crate::error::{CodecError, Result};

/// Day zero for every date carried in a code.
pub const EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(1950, 1, 1) {
    Some(date) => date,
    None => NaiveDate::MIN,
};

pub fn days_since_epoch(date: NaiveDate) -> i64 {
    date.signed_duration_since(EPOCH).num_days()
}

pub fn date_from_days(days: i64) -> Option<NaiveDate> {
    let offset = Days::new(days.unsigned_abs());
    if days >= 0 {
        EPOCH.checked_add_days(offset)
    } else {
        EPOCH.checked_sub_days(offset)
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Frame {
    pub tag: char,
    pub version: u32,
    /// Human name used in error messages
    pub kind: &'static str,
}

impl Frame {
    pub fn prefix(&self) -> String {
        format!("{}{}-", self.tag, self.version)
    }

    pub fn seal(&self, mut payload: Vec<u8>) -> String {
        crc8::append(&mut payload);
        format!("{}{}", self.prefix(), base64url::encode(&payload))
    }

    /// Checks the prefix and checksum, returning the payload without its CRC.
    pub fn open(&self, code: &str) -> Result<Vec<u8>> {
        let code = code.trim();
        let Some((head, body)) = code.split_once('-') else {
            return Err(CodecError::invalid(format!(
                "{}: missing or incorrect prefix",
                self.kind
            )));
        };

        self.check_prefix(head)?;

        let mut bytes = base64url::decode(body)
            .map_err(|_| CodecError::invalid(format!("{}: base64url decode failed", self.kind)))?;

        if !crc8::verify(&bytes) {
            return Err(CodecError::invalid(format!(
                "{}: checksum mismatch",
                self.kind
            )));
        }

        bytes.pop();
        Ok(bytes)
    }

    fn check_prefix(&self, head: &str) -> Result<()> {
        let incorrect =
            || CodecError::invalid(format!("{}: missing or incorrect prefix", self.kind));

        let digits = head
            .strip_prefix(self.tag)
            .filter(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(incorrect)?;
        // All digits, so a failed parse can only mean overflow
        let version = digits.parse::<u32>().unwrap_or(u32::MAX);

        if version > self.version {
            return Err(CodecError::UnsupportedVersion {
                kind: self.kind,
                found: version,
                supported: self.version,
            });
        }

        if head != self.prefix().trim_end_matches('-') {
            return Err(incorrect());
        }

        Ok(())
    }
}
