//! # SafeSpace Form Validation
//!
//! File: lib/src/forms.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Validation for the site's four data-collection forms:
//! - counseling registration,
//! - donation,
//! - volunteer signup,
//! - partnership inquiry.
//!
//! Nothing is stored and no payment is taken. A valid submission produces a
//! `Confirmation` carrying the submission time and the thank-you message shown
//! to the visitor; an invalid one is rejected with `InvalidInput` naming the
//! first field that failed.
//!
//! ## Rules
//!
//! - Required text fields must contain something other than whitespace.
//! - Email addresses must start with `something@something.something`
//!   (`^[^@]+@[^@]+\.[^@]+`); this is a sanity check, not RFC 5322.
//! - Counseling, volunteer and partnership forms require a phone number.
//! - Donations must be at least `MIN_DONATION_KSH` shillings.
//!
use crate::error::{Result, SafespaceError};
use chrono::{Local, NaiveDateTime};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use tracing::info;

/// Smallest donation the form accepts, in Kenyan shillings.
pub const MIN_DONATION_KSH: u64 = 100;

/// Timestamp format used in confirmation messages.
pub const CONFIRMATION_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Static literal pattern; compilation cannot fail.
    Regex::new(r"^[^@]+@[^@]+\.[^@]+").expect("email regex")
});

/// Which form produced a confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Counseling,
    Donation,
    Volunteer,
    Partnership,
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormKind::Counseling => "counseling registration",
            FormKind::Donation => "donation",
            FormKind::Volunteer => "volunteer signup",
            FormKind::Partnership => "partnership inquiry",
        };
        write!(f, "{label}")
    }
}

/// How a counseling client wants to attend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CounselingMode {
    #[default]
    Online,
    InPerson,
}

impl fmt::Display for CounselingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CounselingMode::Online => write!(f, "Online"),
            CounselingMode::InPerson => write!(f, "In-person"),
        }
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub form: FormKind,
    pub submitted_at: NaiveDateTime,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounselingRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub mode: CounselingMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Donation {
    pub name: String,
    pub email: String,
    pub amount_ksh: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerSignup {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Preferred role; the form offers "Any" when the volunteer has no preference.
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartnershipInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Kind of collaboration, "Partner" unless the organisation says otherwise.
    pub kind: String,
}

/// Default volunteer role.
pub const DEFAULT_VOLUNTEER_ROLE: &str = "Any";
/// Default partnership kind.
pub const DEFAULT_PARTNERSHIP_KIND: &str = "Partner";

impl CounselingRegistration {
    /// Validates the registration and stamps it with the current time.
    pub fn submit(&self) -> Result<Confirmation> {
        self.submit_at(Local::now().naive_local())
    }

    pub fn submit_at(&self, submitted_at: NaiveDateTime) -> Result<Confirmation> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("phone", &self.phone)?;

        let when = submitted_at.format(CONFIRMATION_DATE_FORMAT);
        info!("Accepted {} counseling registration", self.mode);
        Ok(Confirmation {
            form: FormKind::Counseling,
            submitted_at,
            message: format!(
                "Thank you, {}! You have successfully registered for counseling on {}. We will contact you shortly at {}.",
                self.name.trim(),
                when,
                self.email.trim()
            ),
        })
    }
}

impl Donation {
    /// Validates the pledge and stamps it with the current time. No payment is processed.
    pub fn submit(&self) -> Result<Confirmation> {
        self.submit_at(Local::now().naive_local())
    }

    pub fn submit_at(&self, submitted_at: NaiveDateTime) -> Result<Confirmation> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        if self.amount_ksh < MIN_DONATION_KSH {
            return Err(SafespaceError::InvalidInput(format!(
                "donation amount must be at least KSh {MIN_DONATION_KSH}, got KSh {}",
                self.amount_ksh
            )));
        }

        let when = submitted_at.format(CONFIRMATION_DATE_FORMAT);
        info!("Accepted donation pledge of KSh {}", self.amount_ksh);
        Ok(Confirmation {
            form: FormKind::Donation,
            submitted_at,
            message: format!(
                "Thank you {} for your generous donation of KSh {} on {}! We appreciate your support.",
                self.name.trim(),
                self.amount_ksh,
                when
            ),
        })
    }
}

impl VolunteerSignup {
    pub fn submit(&self) -> Result<Confirmation> {
        self.submit_at(Local::now().naive_local())
    }

    pub fn submit_at(&self, submitted_at: NaiveDateTime) -> Result<Confirmation> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("phone", &self.phone)?;
        let role = non_blank_or(&self.role, DEFAULT_VOLUNTEER_ROLE);

        let when = submitted_at.format(CONFIRMATION_DATE_FORMAT);
        info!("Accepted volunteer signup for role '{}'", role);
        Ok(Confirmation {
            form: FormKind::Volunteer,
            submitted_at,
            message: format!(
                "Thank you, {}! Your volunteer application ({} role) was received on {}. Our team will reach out at {}.",
                self.name.trim(),
                role,
                when,
                self.email.trim()
            ),
        })
    }
}

impl PartnershipInquiry {
    pub fn submit(&self) -> Result<Confirmation> {
        self.submit_at(Local::now().naive_local())
    }

    pub fn submit_at(&self, submitted_at: NaiveDateTime) -> Result<Confirmation> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("phone", &self.phone)?;
        let kind = non_blank_or(&self.kind, DEFAULT_PARTNERSHIP_KIND);

        let when = submitted_at.format(CONFIRMATION_DATE_FORMAT);
        info!("Accepted partnership inquiry of kind '{}'", kind);
        Ok(Confirmation {
            form: FormKind::Partnership,
            submitted_at,
            message: format!(
                "Thank you, {}! Your {} inquiry was received on {}. We will contact you at {} to discuss next steps.",
                self.name.trim(),
                kind.to_lowercase(),
                when,
                self.email.trim()
            ),
        })
    }
}

/// Returns `true` if `email` passes the site's email check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SafespaceError::InvalidInput(format!("{field} is required")));
    }
    Ok(())
}

fn require_email(email: &str) -> Result<()> {
    require("email", email)?;
    if !is_valid_email(email) {
        return Err(SafespaceError::InvalidInput(format!(
            "email '{}' is not a valid address",
            email.trim()
        )));
    }
    Ok(())
}

fn non_blank_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback
    } else {
        trimmed
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, 2)
            .unwrap()
            .and_hms_opt(12, 0, 5)
            .unwrap()
    }

    fn registration() -> CounselingRegistration {
        CounselingRegistration {
            name: "Amina Otieno".into(),
            email: "amina@example.org".into(),
            phone: "+254 700 000 000".into(),
            mode: CounselingMode::default(),
        }
    }

    fn invalid_input_message(result: Result<Confirmation>) -> String {
        match result {
            Err(SafespaceError::InvalidInput(msg)) => msg,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_email_check() {
        assert!(is_valid_email("info@safespaceorganisation.org"));
        assert!(is_valid_email("  a@b.co  "));
        assert!(!is_valid_email("no-at-sign.org"));
        assert!(!is_valid_email("user@nodot"));
        assert!(!is_valid_email("@example.org"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_email_regex_compiles_to_expected_pattern() {
        assert_eq!(EMAIL_RE.as_str(), r"^[^@]+@[^@]+\.[^@]+");
        assert!(EMAIL_RE.is_match("amina@example.org"));
    }

    #[test]
    fn test_counseling_confirmation_message() {
        let confirmation = registration().submit_at(noon()).unwrap();
        assert_eq!(confirmation.form, FormKind::Counseling);
        assert_eq!(confirmation.submitted_at, noon());
        assert_eq!(
            confirmation.message,
            "Thank you, Amina Otieno! You have successfully registered for counseling on 2025-06-02 12:00:05. We will contact you shortly at amina@example.org."
        );
    }

    #[test]
    fn test_counseling_reports_first_missing_field() {
        let mut form = registration();
        form.name = "  ".into();
        form.phone = String::new();
        assert_eq!(invalid_input_message(form.submit_at(noon())), "name is required");

        let mut form = registration();
        form.email = "amina.example.org".into();
        assert!(invalid_input_message(form.submit_at(noon())).contains("not a valid address"));

        let mut form = registration();
        form.phone = " ".into();
        assert_eq!(invalid_input_message(form.submit_at(noon())), "phone is required");
    }

    #[test]
    fn test_donation_minimum() {
        let mut donation = Donation {
            name: "Kevin".into(),
            email: "kevin@example.com".into(),
            amount_ksh: 99,
        };
        assert!(invalid_input_message(donation.submit_at(noon())).contains("at least KSh 100"));

        donation.amount_ksh = MIN_DONATION_KSH;
        let confirmation = donation.submit_at(noon()).unwrap();
        assert_eq!(
            confirmation.message,
            "Thank you Kevin for your generous donation of KSh 100 on 2025-06-02 12:00:05! We appreciate your support."
        );
    }

    #[test]
    fn test_volunteer_defaults_role() {
        let signup = VolunteerSignup {
            name: "Wanjiru".into(),
            email: "wanjiru@example.com".into(),
            phone: "0711 111 111".into(),
            role: String::new(),
        };
        let confirmation = signup.submit_at(noon()).unwrap();
        assert_eq!(confirmation.form, FormKind::Volunteer);
        assert!(confirmation.message.contains("(Any role)"));
    }

    #[test]
    fn test_partnership_requires_phone() {
        let mut inquiry = PartnershipInquiry {
            name: "Nairobi General Hospital".into(),
            email: "partners@ngh.example".into(),
            phone: String::new(),
            kind: DEFAULT_PARTNERSHIP_KIND.into(),
        };
        assert_eq!(invalid_input_message(inquiry.submit_at(noon())), "phone is required");

        inquiry.phone = "020 000 0000".into();
        let confirmation = inquiry.submit_at(noon()).unwrap();
        assert!(confirmation.message.contains("Your partner inquiry"));
    }

    #[test]
    fn test_form_kind_display() {
        assert_eq!(FormKind::Donation.to_string(), "donation");
        assert_eq!(CounselingMode::InPerson.to_string(), "In-person");
    }
}
