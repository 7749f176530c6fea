use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::CertificationsError;

/// Form date format.
pub(crate) const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
/// Long-form date shown on cards, e.g. "November 15, 2023".
pub(crate) const DATE_DISPLAY_FORMAT: &str = "%B %-d, %Y";

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in required fields: Title, Issuer, and Date";
pub(crate) const INVALID_DATE_MESSAGE: &str = "Date must use the YYYY-MM-DD format";
pub(crate) const ADDED_MESSAGE: &str = "Certification added successfully!";
pub(crate) const UPDATED_MESSAGE: &str = "Certification updated successfully!";
pub(crate) const DELETED_MESSAGE: &str = "Certification deleted!";
pub(crate) const SAVE_FAILED_MESSAGE: &str = "Failed to save certifications";
pub(crate) const SAMPLES_RESTORED_MESSAGE: &str =
    "Stored certifications could not be read, showing samples";

/// A professional certification shown on the portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Certification {
    pub(crate) id: u64,
    pub(crate) title: String,
    pub(crate) issuer: String,
    pub(crate) date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) credential_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
}

impl Certification {
    pub(crate) fn display_date(&self) -> String {
        format_display_date(self.date)
    }
}

pub(crate) fn format_display_date(date: NaiveDate) -> String {
    date.format(DATE_DISPLAY_FORMAT).to_string()
}

/// Certifications shown until the owner stores their own.
pub(crate) fn sample_certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: 1,
            title: String::from("AWS Certified Solutions Architect"),
            issuer: String::from("Amazon Web Services"),
            date: NaiveDate::from_ymd_opt(2023, 11, 15).unwrap_or_default(),
            credential_url: Some(String::from(
                "https://aws.amazon.com/certification",
            )),
            description: Some(String::from(
                "Professional level certification for AWS architecture",
            )),
        },
        Certification {
            id: 2,
            title: String::from("React Advanced Certification"),
            issuer: String::from("Meta"),
            date: NaiveDate::from_ymd_opt(2023, 8, 22).unwrap_or_default(),
            credential_url: Some(String::from("https://react.dev")),
            description: Some(String::from(
                "Advanced React patterns and performance optimization",
            )),
        },
    ]
}

/// Editable fields of the certification form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CertificationField {
    Title,
    Issuer,
    Date,
    CredentialUrl,
    Description,
}

/// Raw text of the certification form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CertificationDraft {
    pub(crate) title: String,
    pub(crate) issuer: String,
    pub(crate) date: String,
    pub(crate) credential_url: String,
    pub(crate) description: String,
}

/// Validated form content ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CertificationInput {
    pub(crate) title: String,
    pub(crate) issuer: String,
    pub(crate) date: NaiveDate,
    pub(crate) credential_url: Option<String>,
    pub(crate) description: Option<String>,
}

impl CertificationDraft {
    pub(crate) fn from_certification(certification: &Certification) -> Self {
        Self {
            title: certification.title.clone(),
            issuer: certification.issuer.clone(),
            date: certification.date.format(DATE_INPUT_FORMAT).to_string(),
            credential_url: certification
                .credential_url
                .clone()
                .unwrap_or_default(),
            description: certification.description.clone().unwrap_or_default(),
        }
    }

    pub(crate) fn field(&self, field: CertificationField) -> &str {
        match field {
            CertificationField::Title => &self.title,
            CertificationField::Issuer => &self.issuer,
            CertificationField::Date => &self.date,
            CertificationField::CredentialUrl => &self.credential_url,
            CertificationField::Description => &self.description,
        }
    }

    pub(crate) fn set_field(&mut self, field: CertificationField, value: String) {
        let slot = match field {
            CertificationField::Title => &mut self.title,
            CertificationField::Issuer => &mut self.issuer,
            CertificationField::Date => &mut self.date,
            CertificationField::CredentialUrl => &mut self.credential_url,
            CertificationField::Description => &mut self.description,
        };
        *slot = value;
    }

    /// Check required fields and parse the date.
    pub(crate) fn validate(&self) -> Result<CertificationInput, CertificationsError> {
        let title = self.title.trim();
        let issuer = self.issuer.trim();
        let date = self.date.trim();
        if title.is_empty() || issuer.is_empty() || date.is_empty() {
            return Err(CertificationsError::Validation(String::from(
                REQUIRED_FIELDS_MESSAGE,
            )));
        }

        let date = NaiveDate::parse_from_str(date, DATE_INPUT_FORMAT).map_err(
            |_| CertificationsError::Validation(String::from(INVALID_DATE_MESSAGE)),
        )?;

        Ok(CertificationInput {
            title: title.to_string(),
            issuer: issuer.to_string(),
            date,
            credential_url: non_empty(&self.credential_url),
            description: non_empty(&self.description),
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Open add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CertificationForm {
    /// Id of the certification being edited; `None` while adding.
    pub(crate) editing: Option<u64>,
    pub(crate) draft: CertificationDraft,
}

impl CertificationForm {
    pub(crate) fn is_editing(&self) -> bool {
        self.editing.is_some()
    }
}

/// Read-only view model for the certifications panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CertificationsViewModel<'a> {
    /// Newest first.
    pub(crate) items: &'a [Certification],
    pub(crate) form: Option<&'a CertificationForm>,
    pub(crate) pending_delete: Option<&'a Certification>,
    pub(crate) is_loaded: bool,
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{
        CertificationDraft, CertificationField, INVALID_DATE_MESSAGE,
        REQUIRED_FIELDS_MESSAGE, format_display_date,
    };

    fn draft(title: &str, issuer: &str, date: &str) -> CertificationDraft {
        CertificationDraft {
            title: title.to_string(),
            issuer: issuer.to_string(),
            date: date.to_string(),
            ..CertificationDraft::default()
        }
    }

    #[test]
    fn given_date_when_formatted_for_display_then_month_is_spelled_out() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 15).expect("valid date");
        assert_eq!(format_display_date(date), "November 15, 2023");

        let date = NaiveDate::from_ymd_opt(2023, 8, 2).expect("valid date");
        assert_eq!(format_display_date(date), "August 2, 2023");
    }

    #[test]
    fn given_missing_issuer_when_validated_then_required_fields_message() {
        let error = draft("AWS", "  ", "2023-11-15")
            .validate()
            .expect_err("issuer is required");

        assert_eq!(error.to_string(), REQUIRED_FIELDS_MESSAGE);
    }

    #[test]
    fn given_malformed_date_when_validated_then_invalid_date_message() {
        let error = draft("AWS", "Amazon", "15/11/2023")
            .validate()
            .expect_err("date must be iso");

        assert_eq!(error.to_string(), INVALID_DATE_MESSAGE);
    }

    #[test]
    fn given_blank_optional_fields_when_validated_then_they_become_none() {
        let mut draft = draft(" AWS ", "Amazon", "2023-11-15");
        draft.set_field(CertificationField::CredentialUrl, String::from("  "));

        let input = draft.validate().expect("draft should be valid");

        assert_eq!(input.title, "AWS");
        assert!(input.credential_url.is_none());
        assert!(input.description.is_none());
    }
}
