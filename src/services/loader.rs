use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;
use validator::Validate;

use crate::core::text::{normalize, strip_needed_suffix};
use crate::models::{Dataset, InterestLabel};

/// Errors that can occur when loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unsupported dataset format: {0}")]
    UnsupportedFormat(String),
}

/// Document formats accepted by the loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Toml,
}

impl DatasetFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self, DatasetError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            other => Err(DatasetError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

/// Records dropped while preparing a dataset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub skipped_requests: usize,
    pub skipped_volunteers: usize,
    pub skipped_applications: usize,
}

impl LoadStats {
    pub fn total_skipped(&self) -> usize {
        self.skipped_requests + self.skipped_volunteers + self.skipped_applications
    }
}

/// Read, parse and prepare a dataset file
pub fn load_dataset(path: &Path) -> Result<(Dataset, LoadStats), DatasetError> {
    let format = DatasetFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw = parse_dataset(&contents, format)?;
    let (dataset, stats) = prepare_dataset(raw);

    tracing::info!(
        "Loaded dataset {}: {} requests, {} volunteers, {} applications, {} interests ({} records skipped)",
        path.display(),
        dataset.requests.len(),
        dataset.volunteers.len(),
        dataset.applications.len(),
        dataset.interests.len(),
        stats.total_skipped()
    );

    Ok((dataset, stats))
}

/// Parse a dataset document without preparing it
pub fn parse_dataset(contents: &str, format: DatasetFormat) -> Result<Dataset, DatasetError> {
    let dataset = match format {
        DatasetFormat::Json => serde_json::from_str(contents)?,
        DatasetFormat::Toml => toml::from_str(contents)?,
    };
    Ok(dataset)
}

/// Validate and normalize raw records
///
/// - invalid records and duplicate ids are skipped (first occurrence wins)
/// - request titles lose a trailing " needed"
/// - interest labels, in the catalog and on volunteers, are normalized
/// - applications referencing unknown requests or volunteers are skipped
pub fn prepare_dataset(raw: Dataset) -> (Dataset, LoadStats) {
    let mut stats = LoadStats::default();

    let mut request_ids = HashSet::new();
    let requests: Vec<_> = raw
        .requests
        .into_iter()
        .filter_map(|mut request| {
            if let Err(errors) = request.validate() {
                tracing::warn!("Skipping invalid request {:?}: {}", request.id, errors);
                stats.skipped_requests += 1;
                return None;
            }
            if !request_ids.insert(request.id.clone()) {
                tracing::warn!("Skipping duplicate request {}", request.id);
                stats.skipped_requests += 1;
                return None;
            }
            request.title = strip_needed_suffix(&request.title).to_string();
            Some(request)
        })
        .collect();

    let mut volunteer_ids = HashSet::new();
    let volunteers: Vec<_> = raw
        .volunteers
        .into_iter()
        .filter_map(|mut volunteer| {
            if let Err(errors) = volunteer.validate() {
                tracing::warn!("Skipping invalid volunteer {:?}: {}", volunteer.id, errors);
                stats.skipped_volunteers += 1;
                return None;
            }
            if !volunteer_ids.insert(volunteer.id.clone()) {
                tracing::warn!("Skipping duplicate volunteer {}", volunteer.id);
                stats.skipped_volunteers += 1;
                return None;
            }
            volunteer.interests = volunteer
                .interests
                .iter()
                .map(|label| normalize(label))
                .filter(|label| !label.is_empty())
                .collect();
            Some(volunteer)
        })
        .collect();

    let applications: Vec<_> = raw
        .applications
        .into_iter()
        .filter(|application| {
            if let Err(errors) = application.validate() {
                tracing::warn!("Skipping invalid application: {}", errors);
                stats.skipped_applications += 1;
                return false;
            }
            let known = request_ids.contains(&application.request_id)
                && volunteer_ids.contains(&application.volunteer_id);
            if !known {
                tracing::warn!(
                    "Skipping application of volunteer {} to request {}: unknown reference",
                    application.volunteer_id,
                    application.request_id
                );
                stats.skipped_applications += 1;
            }
            known
        })
        .collect();

    let dataset = Dataset {
        requests,
        volunteers,
        applications,
        interests: normalize_catalog(&raw.interests),
    };

    (dataset, stats)
}

/// Normalize interest labels, dropping empties and duplicates but keeping catalog order
fn normalize_catalog(labels: &[InterestLabel]) -> Vec<InterestLabel> {
    let mut seen = HashSet::new();
    labels
        .iter()
        .map(|label| normalize(label))
        .filter(|label| !label.is_empty() && seen.insert(label.clone()))
        .collect()
}
