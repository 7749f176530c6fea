use std::fs;
use std::path::{Path, PathBuf};

use super::errors::CertificationsError;
use super::model::{Certification, sample_certifications};
use crate::config::storage::write_atomic;

const CERTIFICATIONS_FILE: &str = "certifications.json";

/// Status describing how certifications were loaded from disk.
#[derive(Debug, Clone)]
pub(crate) enum CertificationsLoadStatus {
    Loaded,
    Missing,
    Invalid(String),
}

/// Result of loading certifications from disk.
#[derive(Debug, Clone)]
pub(crate) struct CertificationsLoad {
    items: Vec<Certification>,
    status: CertificationsLoadStatus,
}

impl CertificationsLoad {
    pub(crate) fn new(
        items: Vec<Certification>,
        status: CertificationsLoadStatus,
    ) -> Self {
        Self { items, status }
    }

    /// Consume the value and return both payload and status.
    pub(crate) fn into_parts(
        self,
    ) -> (Vec<Certification>, CertificationsLoadStatus) {
        (self.items, self.status)
    }
}

/// Load certifications from `data_dir`, seeding samples when none are stored.
pub(crate) fn load_certifications(
    data_dir: &Path,
) -> Result<CertificationsLoad, CertificationsError> {
    let path = certifications_path(data_dir);
    let data = match fs::read_to_string(&path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(CertificationsLoad::new(
                sample_certifications(),
                CertificationsLoadStatus::Missing,
            ));
        },
        Err(err) => return Err(err.into()),
    };

    match serde_json::from_str::<Vec<Certification>>(&data) {
        Ok(items) => Ok(CertificationsLoad::new(
            items,
            CertificationsLoadStatus::Loaded,
        )),
        Err(err) => Ok(CertificationsLoad::new(
            sample_certifications(),
            CertificationsLoadStatus::Invalid(format!("{err}")),
        )),
    }
}

/// Persist certifications to `data_dir`.
pub(crate) fn save_certifications(
    data_dir: &Path,
    items: &[Certification],
) -> Result<(), CertificationsError> {
    fs::create_dir_all(data_dir)?;

    let payload = serde_json::to_string_pretty(items)?;
    write_atomic(&certifications_path(data_dir), payload.as_bytes())?;

    Ok(())
}

fn certifications_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CERTIFICATIONS_FILE)
}
