use crate::core::entities::{ParticipantRecord, SourceRecord};
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;

/// External representation of birth dates in the source CSV, e.g. "07 Apr 2021".
const BIRTH_DATE_FORMAT: &str = "%d %b %Y";

/// Derives the seven enrichment fields from a participant's source fields.
///
/// Every derivation is a pure function of the source record. Postal code and
/// city are best-effort extractions over free-text addresses and come back as
/// `None` when the expected pattern is absent; a malformed birth date or an
/// out-of-range registration epoch is a hard error for the record.
pub struct FieldDeriver {
    postal_code_re: Regex,
    city_re: Regex,
    phone_prefix_re: Regex,
    phone_punct_re: Regex,
    whitespace_re: Regex,
}

impl FieldDeriver {
    pub fn new() -> Self {
        FieldDeriver {
            postal_code_re: Regex::new(r"(\d+)$").unwrap(),
            // Addresses carry line breaks either as a literal two-character
            // "\n" sequence or as a real newline; hyphen-joined fragments are
            // the other convention the source data uses.
            city_re: Regex::new(r"(?:\r?\n|\\n)+(\w+)|\b-(\w+)").unwrap(),
            phone_prefix_re: Regex::new(r"^(\+62|62)").unwrap(),
            phone_punct_re: Regex::new(r"[()\-]").unwrap(),
            whitespace_re: Regex::new(r"\s+").unwrap(),
        }
    }

    /// Compute all derived fields for one source record.
    pub fn derive(&self, source: &SourceRecord) -> Result<ParticipantRecord, AppError> {
        let birth_date = self.normalize_birth_date(&source.birth_date).map_err(|e| {
            e.with_context(format!("participant {}", source.participant_id))
        })?;
        let register_at = self.register_at(source.register_time).map_err(|e| {
            e.with_context(format!("participant {}", source.participant_id))
        })?;

        Ok(ParticipantRecord {
            participant_id: source.participant_id.clone(),
            first_name: source.first_name.clone(),
            last_name: source.last_name.clone(),
            birth_date,
            address: source.address.clone(),
            phone_number: source.phone_number.clone(),
            country: source.country.clone(),
            institute: source.institute.clone(),
            occupation: source.occupation.clone(),
            register_time: source.register_time,
            postal_code: self.postal_code(&source.address),
            city: self.city(&source.address),
            github_profile: self.github_profile(&source.first_name, &source.last_name),
            cleaned_phone_number: self.clean_phone_number(&source.phone_number),
            team_name: self.team_name(
                &source.first_name,
                &source.last_name,
                &source.country,
                &source.institute,
            ),
            email: self.email(
                &source.first_name,
                &source.last_name,
                &source.country,
                &source.institute,
            ),
            register_at,
        })
    }

    /// Trailing contiguous digit run of the address, if any.
    pub fn postal_code(&self, address: &str) -> Option<String> {
        self.postal_code_re
            .captures(address)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Token following a line break (or hyphen) inside the address.
    ///
    /// Lazy, partial extraction over unstructured text: inputs that follow
    /// neither convention yield `None` with no diagnostic.
    pub fn city(&self, address: &str) -> Option<String> {
        self.city_re.captures(address).and_then(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
        })
    }

    /// `https://github.com/` + lowercased first and last name, no separator.
    pub fn github_profile(&self, first_name: &str, last_name: &str) -> String {
        format!(
            "https://github.com/{}{}",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        )
    }

    /// Normalize a phone number: leading `+62`/`62` becomes `0`, then
    /// parentheses and hyphens are stripped, then all whitespace.
    ///
    /// The prefix substitution must run first so the literal `+` is consumed
    /// before punctuation stripping.
    pub fn clean_phone_number(&self, phone_number: &str) -> String {
        let phone = self.phone_prefix_re.replace(phone_number, "0");
        let phone = self.phone_punct_re.replace_all(&phone, "");
        self.whitespace_re.replace_all(&phone, "").into_owned()
    }

    /// `{first_initial}{last_initial}-{country}-{institute_initials}`.
    ///
    /// Initials keep their original case; an empty name or institute word
    /// contributes an empty initial rather than failing.
    pub fn team_name(
        &self,
        first_name: &str,
        last_name: &str,
        country: &str,
        institute: &str,
    ) -> String {
        let first_initial = first_name.chars().next().map(String::from).unwrap_or_default();
        let last_initial = last_name.chars().next().map(String::from).unwrap_or_default();
        let institute_initials: String = institute
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();
        format!("{first_initial}{last_initial}-{country}-{institute_initials}")
    }

    /// Synthesize an email address from name, institute, and country.
    ///
    /// Institutes containing the literal "Universitas" (original-case check)
    /// get an `.ac.{country}` suffix; everything else gets `.com` and the
    /// country is ignored.
    pub fn email(
        &self,
        first_name: &str,
        last_name: &str,
        country: &str,
        institute: &str,
    ) -> String {
        let local = format!("{}{}", first_name.to_lowercase(), last_name.to_lowercase());
        let institute_abbrev: String = institute
            .to_lowercase()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect();

        if institute.contains("Universitas") {
            let country_abbrev: String = if country.split_whitespace().count() > 1 {
                country
                    .to_lowercase()
                    .split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .collect()
            } else {
                country.to_lowercase().chars().take(3).collect()
            };
            format!("{local}@{institute_abbrev}.ac.{country_abbrev}")
        } else {
            format!("{local}@{institute_abbrev}.com")
        }
    }

    /// Parse a `day abbreviated-month year` birth date into a calendar date.
    /// Malformed input is a hard error for the record.
    pub fn normalize_birth_date(&self, raw: &str) -> Result<NaiveDate, AppError> {
        NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT).map_err(|e| {
            AppError::new(
                ErrorCategory::TransformError,
                format!("Malformed birth date '{}': {}", raw, e),
            )
        })
    }

    /// Interpret epoch seconds as a second-precision UTC timestamp.
    pub fn register_at(&self, register_time: i64) -> Result<NaiveDateTime, AppError> {
        DateTime::from_timestamp(register_time, 0)
            .map(|dt| dt.naive_utc())
            .ok_or_else(|| {
                AppError::new(
                    ErrorCategory::TransformError,
                    format!("Register time {} is out of range", register_time),
                )
            })
    }
}

impl Default for FieldDeriver {
    fn default() -> Self {
        Self::new()
    }
}
