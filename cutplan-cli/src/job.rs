//! Planning job file model and loader.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use cutplan_core::{Material, NumericInput};

/// A planning job as submitted by the estimation workflow.
///
/// Every length value may arrive as a plain number, a numeric string, or a
/// decimal wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Company requesting the plan; must own the material.
    pub company_id: String,
    /// The profile material with its standard-length catalogue.
    pub material: Material,
    /// Required cut lengths, in feet.
    pub required_cut_lengths_ft: Vec<NumericInput>,
}

/// Load a job from a JSON file.
pub fn load_job(path: &Path) -> Result<Job> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let job: Job = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(job)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const JOB_JSON: &str = r#"{
        "companyId": "acme",
        "material": {
            "id": "64a1f0",
            "companyId": "acme",
            "category": "Profile",
            "standardLengths": [
                {"length": {"$numberDecimal": "12"}, "unit": "ft"},
                {"length": "6", "unit": "ft"}
            ],
            "name": "Aluminium 50x50"
        },
        "requiredCutLengthsFt": [5, "5", {"$numberDecimal": "1.9"}]
    }"#;

    #[test]
    fn test_load_job() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(JOB_JSON.as_bytes()).unwrap();

        let job = load_job(file.path()).unwrap();
        assert_eq!(job.company_id, "acme");
        assert_eq!(job.material.standard_lengths.len(), 2);
        assert_eq!(job.required_cut_lengths_ft.len(), 3);
        assert_eq!(job.required_cut_lengths_ft[2].as_f64(), Some(1.9));
    }

    #[test]
    fn test_load_job_missing_file() {
        let err = load_job(Path::new("/nonexistent/job.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_load_job_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();
        let err = load_job(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
