//! S-code: one self-check assessment.
//!
//! The payload is sixteen comma-separated slots in a fixed order, with an
//! empty slot for anything absent:
//!
//! | slot  | content                                              |
//! |-------|------------------------------------------------------|
//! | 0     | schema version                                       |
//! | 1     | chart version                                        |
//! | 2     | assessment date, days since 1950-01-01               |
//! | 3     | diagnostic period flag                               |
//! | 4-6   | cardio exercise code, value, exempt flag             |
//! | 7-9   | strength exercise code, value, exempt flag           |
//! | 10-12 | core exercise code, value, exempt flag               |
//! | 13-15 | height and waist in tenths of an inch, exempt flag   |
//!
//! A component with neither a value nor an exemption is absent and leaves
//! all three of its slots empty. Exempt components keep their code and
//! drop their value.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use scoring::{
    Assessment, BodyCompositionInput, CHART_VERSION, ComponentExercise, ComponentInput, Exercise,
    ScoringPolicy,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CodecError, Result};
use crate::frame::{Frame, date_from_days, days_since_epoch};

pub const S_CODE_VERSION: u32 = 2;

/// Highest payload schema this build understands
pub const SCHEMA_VERSION: u32 = 2;

const FRAME: Frame = Frame {
    tag: 'S',
    version: S_CODE_VERSION,
    kind: "S-code",
};

const FIELD_COUNT: usize = 16;

/// An assessment recovered from an S-code along with its header slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedAssessment {
    pub assessment: Assessment,
    pub schema_version: u32,
    pub chart_version: u32,
    /// Diagnostic flag as recorded when the code was made
    pub diagnostic: bool,
}

pub fn encode_s_code(assessment: &Assessment) -> Result<String> {
    encode_s_code_with(assessment, &ScoringPolicy::default())
}

/// Encodes with the diagnostic flag taken from `policy`.
pub fn encode_s_code_with(assessment: &Assessment, policy: &ScoringPolicy) -> Result<String> {
    let mut fields: Vec<String> = Vec::with_capacity(FIELD_COUNT);

    fields.push(SCHEMA_VERSION.to_string());
    fields.push(CHART_VERSION.to_string());
    fields.push(days_since_epoch(assessment.date).to_string());
    fields.push(flag(policy.is_diagnostic_period(assessment.date)));

    push_component(&mut fields, assessment.cardio.as_ref())?;
    push_component(&mut fields, assessment.strength.as_ref())?;
    push_component(&mut fields, assessment.core.as_ref())?;
    push_body_composition(&mut fields, assessment.body_composition.as_ref())?;

    let text = fields.join(",");
    let code = FRAME.seal(text.clone().into_bytes());
    debug!("Encoded S-code {} from [{}]", code, text);
    Ok(code)
}

pub fn decode_s_code(code: &str) -> Result<DecodedAssessment> {
    let payload = FRAME.open(code)?;
    let text = String::from_utf8(payload)
        .map_err(|_| CodecError::invalid("S-code: payload is not valid UTF-8"))?;

    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(CodecError::invalid(format!(
            "S-code: expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let schema_version = required(&fields, 0, "schema version")?;
    let schema_version = match u32::try_from(schema_version) {
        Ok(version) => version,
        Err(_) if schema_version > 0 => u32::MAX,
        Err(_) => return Err(CodecError::invalid("S-code: schema version out of range")),
    };
    if schema_version > SCHEMA_VERSION {
        return Err(CodecError::UnsupportedVersion {
            kind: "S-code schema",
            found: schema_version,
            supported: SCHEMA_VERSION,
        });
    }

    let chart_version = u32::try_from(required(&fields, 1, "chart version")?)
        .map_err(|_| CodecError::invalid("S-code: chart version out of range"))?;
    let date = date_from_days(required(&fields, 2, "date")?)
        .ok_or_else(|| CodecError::invalid("S-code: date out of range"))?;
    let diagnostic = integer(&fields, 3)? == Some(1);

    let assessment = Assessment {
        date,
        cardio: read_component(&fields, 4)?,
        strength: read_component(&fields, 7)?,
        core: read_component(&fields, 10)?,
        body_composition: read_body_composition(&fields, 13)?,
    };

    debug!(
        "Decoded S-code for {} (schema {}, charts {})",
        date, schema_version, chart_version
    );

    Ok(DecodedAssessment {
        assessment,
        schema_version,
        chart_version,
        diagnostic,
    })
}

pub fn is_valid_s_code(code: &str) -> bool {
    decode_s_code(code).is_ok()
}

fn flag(value: bool) -> String {
    String::from(if value { "1" } else { "0" })
}

/// `value * scale` rounded half away from zero, as integer text.
fn rounded(value: Decimal, scale: Decimal) -> Result<String> {
    value
        .checked_mul(scale)
        .map(|scaled| scaled.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|scaled| scaled.to_i64())
        .map(|n| n.to_string())
        .ok_or_else(|| CodecError::InvalidInput(format!("value {} is too large", value)))
}

fn push_component<E: ComponentExercise>(
    fields: &mut Vec<String>,
    input: Option<&ComponentInput<E>>,
) -> Result<()> {
    let input = input.filter(|input| input.exempt || input.raw_value.is_some());
    let Some(input) = input else {
        fields.extend(std::iter::repeat_n(String::new(), 3));
        return Ok(());
    };

    let value = match input.raw_value {
        Some(raw) if !input.exempt => rounded(raw, Decimal::ONE)?,
        _ => String::new(),
    };

    fields.push(input.exercise.code().to_string());
    fields.push(value);
    fields.push(flag(input.exempt));
    Ok(())
}

fn push_body_composition(
    fields: &mut Vec<String>,
    input: Option<&BodyCompositionInput>,
) -> Result<()> {
    let Some(input) = input else {
        fields.extend(std::iter::repeat_n(String::new(), 3));
        return Ok(());
    };

    let tenths = |inches: Option<Decimal>| match inches {
        Some(inches) if !input.exempt => rounded(inches, Decimal::TEN),
        _ => Ok(String::new()),
    };

    fields.push(tenths(input.height_inches)?);
    fields.push(tenths(input.waist_inches)?);
    fields.push(flag(input.exempt));
    Ok(())
}

fn integer(fields: &[&str], index: usize) -> Result<Option<i64>> {
    let field = fields[index];
    if field.is_empty() {
        return Ok(None);
    }
    field
        .parse()
        .map(Some)
        .map_err(|_| CodecError::invalid(format!("S-code: field {} is not a number", index)))
}

fn required(fields: &[&str], index: usize, name: &str) -> Result<i64> {
    integer(fields, index)?
        .ok_or_else(|| CodecError::invalid(format!("S-code: missing {}", name)))
}

fn read_component<E: ComponentExercise>(
    fields: &[&str],
    start: usize,
) -> Result<Option<ComponentInput<E>>> {
    let code = fields[start];
    if code.is_empty() {
        return Ok(None);
    }

    Ok(Some(ComponentInput {
        exercise: exercise_from_code(code),
        raw_value: integer(fields, start + 1)?.map(Decimal::from),
        exempt: integer(fields, start + 2)? == Some(1),
    }))
}

/// Unknown codes degrade to the component's default exercise.
fn exercise_from_code<E: ComponentExercise>(code: &str) -> E {
    let mut chars = code.chars();
    let known = match (chars.next(), chars.next()) {
        (Some(c), None) => E::from_code(c),
        _ => None,
    };
    if let Some(exercise) = known {
        return exercise;
    }

    let fallback: Exercise = E::FALLBACK.into();
    warn!(
        "Unknown {} exercise code '{}' in S-code, assuming {}",
        E::COMPONENT,
        code,
        fallback
    );
    E::FALLBACK
}

fn read_body_composition(fields: &[&str], start: usize) -> Result<Option<BodyCompositionInput>> {
    if fields[start..start + 3].iter().all(|f| f.is_empty()) {
        return Ok(None);
    }

    let inches = |index| integer(fields, index).map(|tenths| tenths.map(|t| Decimal::new(t, 1)));

    Ok(Some(BodyCompositionInput {
        height_inches: inches(start)?,
        waist_inches: inches(start + 1)?,
        exempt: integer(fields, start + 2)? == Some(1),
    }))
}
