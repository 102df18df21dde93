//! Working state of one user: the saved profile and self-check codes.
//!
//! A session mirrors what is in the store so reads never touch it; every
//! change is written through before the mirror is updated.

use chrono::NaiveDate;
use codec::{CodecError, DecodedAssessment};
use scoring::{Assessment, AssessmentScore, Demographics, ScoringEngine, ScoringPolicy};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::codes::CodeRepository;
use crate::error::{Result, TrackerError};
use crate::store::KeyValueStore;

/// One saved S-code as it appears in the history view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub code: String,
    pub decoded: Option<DecodedAssessment>,
    /// Present when the code decoded and a profile is available
    pub score: Option<AssessmentScore>,
    pub error: Option<String>,
}

#[derive(Debug)]
pub struct Session<S> {
    codes: CodeRepository<S>,
    engine: ScoringEngine,
    d_code: Option<String>,
    demographics: Option<Demographics>,
    s_codes: Vec<String>,
    target_date: Option<NaiveDate>,
    onboarded: bool,
}

impl<S: KeyValueStore> Session<S> {
    pub fn load(store: S) -> Result<Self> {
        Self::load_with_policy(store, ScoringPolicy::default())
    }

    pub fn load_with_policy(store: S, policy: ScoringPolicy) -> Result<Self> {
        let codes = CodeRepository::new(store);

        let d_code = codes.get_d_code()?;
        let demographics = d_code.as_deref().and_then(|code| {
            codec::decode_d_code(code)
                .inspect_err(|e| error!("Error decoding stored D-code: {}", e))
                .ok()
        });

        let s_codes = codes.list_s_codes()?;
        let target_date = codes.get_target_date().unwrap_or_else(|e| {
            warn!("Ignoring stored target date: {}", e);
            None
        });
        let onboarded = codes.is_onboarded()?;

        info!(
            "Loaded session: profile {}, {} saved self-checks",
            if demographics.is_some() { "present" } else { "absent" },
            s_codes.len()
        );

        Ok(Self {
            codes,
            engine: ScoringEngine::with_policy(policy),
            d_code,
            demographics,
            s_codes,
            target_date,
            onboarded,
        })
    }

    pub fn d_code(&self) -> Option<&str> {
        self.d_code.as_deref()
    }

    pub fn demographics(&self) -> Option<&Demographics> {
        self.demographics.as_ref()
    }

    pub fn s_codes(&self) -> &[String] {
        &self.s_codes
    }

    pub fn target_date(&self) -> Option<NaiveDate> {
        self.target_date
    }

    pub fn needs_onboarding(&self) -> bool {
        !self.onboarded
    }

    pub fn policy(&self) -> &ScoringPolicy {
        self.engine.policy()
    }

    pub fn into_store(self) -> S {
        self.codes.into_store()
    }

    /// Replaces the profile with a pasted D-code. Invalid codes are rejected
    /// and leave the current profile in place.
    pub fn update_d_code(&mut self, code: &str) -> Result<Demographics> {
        let code = code.trim();
        let demographics = codec::decode_d_code(code)?;

        self.codes.save_d_code(code)?;
        self.d_code = Some(code.to_string());
        self.demographics = Some(demographics);
        Ok(demographics)
    }

    /// Encodes and saves a profile, returning its D-code.
    pub fn set_profile(&mut self, demographics: Demographics) -> Result<String> {
        let code = codec::encode_d_code(&demographics)?;

        self.codes.save_d_code(&code)?;
        self.d_code = Some(code.clone());
        self.demographics = Some(demographics);
        Ok(code)
    }

    /// Saves a pasted S-code. Returns `false` when it was already saved.
    pub fn add_s_code(&mut self, code: &str) -> Result<bool> {
        let code = code.trim();
        codec::decode_s_code(code)?;

        if self.s_codes.iter().any(|c| c == code) {
            debug!("S-code {} already saved", code);
            return Ok(false);
        }

        self.codes.add_s_code(code)?;
        self.s_codes.push(code.to_string());
        Ok(true)
    }

    /// Encodes a finished self-check and saves its S-code.
    pub fn record_assessment(&mut self, assessment: &Assessment) -> Result<String> {
        let code = codec::encode_s_code_with(assessment, self.engine.policy())?;
        self.add_s_code(&code)?;
        Ok(code)
    }

    pub fn remove_s_code(&mut self, code: &str) -> Result<bool> {
        let code = code.trim();
        let removed = self.codes.remove_s_code(code)?;
        self.s_codes.retain(|c| c != code);
        Ok(removed)
    }

    pub fn set_target_date(&mut self, date: NaiveDate) -> Result<()> {
        self.codes.save_target_date(date)?;
        self.target_date = Some(date);
        Ok(())
    }

    pub fn complete_onboarding(&mut self) -> Result<()> {
        self.codes.set_onboarded()?;
        self.onboarded = true;
        Ok(())
    }

    /// Forgets everything the tracker saved.
    pub fn clear(&mut self) -> Result<()> {
        self.codes.clear_all()?;
        self.d_code = None;
        self.demographics = None;
        self.s_codes.clear();
        self.target_date = None;
        self.onboarded = false;
        Ok(())
    }

    /// Scores an assessment against the current profile.
    pub fn score(&self, assessment: &Assessment) -> Result<AssessmentScore> {
        let demographics = self.demographics.as_ref().ok_or(TrackerError::MissingProfile)?;
        Ok(self.engine.score_assessment(assessment, demographics))
    }

    /// Decodes and rescores every saved S-code. A code that no longer
    /// decodes is reported in its entry and does not stop the rest.
    pub fn history(&self) -> Vec<HistoryEntry> {
        self.s_codes
            .iter()
            .map(|code| match codec::decode_s_code(code) {
                Ok(decoded) => HistoryEntry {
                    code: code.clone(),
                    score: self
                        .demographics
                        .as_ref()
                        .map(|d| self.engine.score_assessment(&decoded.assessment, d)),
                    decoded: Some(decoded),
                    error: None,
                },
                Err(e) => {
                    warn!("Saved S-code {} is unreadable: {}", code, e);
                    HistoryEntry {
                        code: code.clone(),
                        decoded: None,
                        score: None,
                        error: Some(describe(&e)),
                    }
                }
            })
            .collect()
    }
}

fn describe(error: &CodecError) -> String {
    match error {
        CodecError::UnsupportedVersion { .. } => error.to_string(),
        _ => format!("Unreadable code ({})", error),
    }
}
