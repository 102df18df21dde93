pub mod base64url;
pub mod crc8;
pub mod dcode;
pub mod error;
mod frame;
pub mod scode;

pub use dcode::{D_CODE_VERSION, decode_d_code, encode_d_code, is_valid_d_code};
pub use error::{CodecError, Result};
pub use frame::{EPOCH, date_from_days, days_since_epoch};
pub use scode::{
    DecodedAssessment, S_CODE_VERSION, SCHEMA_VERSION, decode_s_code, encode_s_code,
    encode_s_code_with, is_valid_s_code,
};
