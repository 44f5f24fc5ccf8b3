//! Per-company evaluation records.
//!
//! Each company gets its own directory under `companies/`, named by slug:
//! `companies/<slug>/energy_matrix.yaml`.

use std::path::PathBuf;

use super::data_dir;
use crate::energy::EnergyMatrix;
use crate::error::{CoreError, Result, ValidationError};

const COMPANIES_DIR: &str = "companies";
const MATRIX_FILE: &str = "energy_matrix.yaml";

/// Filesystem-safe directory name for a company: lowercase ASCII
/// alphanumerics separated by single dashes.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[derive(Debug, Clone)]
pub struct CompanyStore {
    root: PathBuf,
}

impl CompanyStore {
    pub fn open() -> Result<Self> {
        Ok(Self::at(data_dir()?))
    }

    /// Store whose `companies/` directory lives under `root`.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into().join(COMPANIES_DIR),
        }
    }

    fn company_dir(&self, company: &str) -> Result<PathBuf> {
        let slug = slugify(company);
        if slug.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "company".into(),
                message: format!("'{company}' has no usable characters for a directory name"),
            }
            .into());
        }
        Ok(self.root.join(slug))
    }

    /// Write the evaluation, replacing any earlier one for the same company.
    pub fn save(&self, matrix: &EnergyMatrix) -> Result<PathBuf> {
        let dir = self.company_dir(&matrix.company)?;
        std::fs::create_dir_all(&dir)?;
        let path = dir.join(MATRIX_FILE);
        std::fs::write(&path, serde_yaml::to_string(matrix)?)?;
        tracing::info!(company = %matrix.company, path = %path.display(), "energy matrix saved");
        Ok(path)
    }

    pub fn load(&self, company: &str) -> Result<EnergyMatrix> {
        let path = self.company_dir(company)?.join(MATRIX_FILE);
        if !path.exists() {
            return Err(CoreError::EvaluationMissing {
                company: company.to_string(),
            });
        }
        let content = std::fs::read_to_string(&path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Slugs of companies with a stored evaluation, sorted.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }
        let mut slugs = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.path().join(MATRIX_FILE).is_file() {
                slugs.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        slugs.sort();
        Ok(slugs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::{MatrixConfig, Profile};
    use chrono::NaiveDate;

    #[test]
    fn slugify_company_names() {
        assert_eq!(slugify("Acme Corp."), "acme-corp");
        assert_eq!(slugify("  Foo & Bar, Inc "), "foo-bar-inc");
        assert_eq!(slugify("ÜberTech"), "bertech");
        assert_eq!(slugify("???"), "");
    }

    #[test]
    fn save_load_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = CompanyStore::at(dir.path());
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        let profile = Profile::starter(today).unwrap();

        for company in ["Zeta Labs", "Acme Corp"] {
            let matrix =
                EnergyMatrix::evaluate(company, &[], &profile, &MatrixConfig::default(), today);
            store.save(&matrix).unwrap();
        }

        assert_eq!(store.list().unwrap(), vec!["acme-corp", "zeta-labs"]);
        let loaded = store.load("acme corp").unwrap();
        assert_eq!(loaded.company, "Acme Corp");
        assert_eq!(loaded.profile_version, profile.version);
    }

    #[test]
    fn missing_company_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = CompanyStore::at(dir.path());
        assert!(store.list().unwrap().is_empty());
        assert!(matches!(
            store.load("Nobody"),
            Err(CoreError::EvaluationMissing { .. })
        ));
        assert!(store.load("???").is_err());
    }
}
