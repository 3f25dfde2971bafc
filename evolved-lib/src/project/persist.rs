//! Persisted project format
//!
//! The JSON shape is `{ projects: [...], activeIndex?: n }`. Older saves held a
//! single project object at the top level; those are upgraded on decode.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ColorSpaceType, DEFAULT_PROJECT_NAME, Project};
use crate::error::{ParseError, StorageError};
use crate::ramp::ColorRamp;
use crate::stops::StopsConfig;
use crate::storage::StorageBackend;

/// Storage key of the project list.
pub const STORAGE_KEY: &str = "evolved_palettes";

/// Top-level fields every legacy single-project save carries.
const LEGACY_FIELDS: [&str; 4] = ["stops", "colorRamps", "colorSpaceType", "isInverted"];

/// Persisted shape of a ramp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub name: String,
    pub colors: Vec<String>,
}

/// Persisted shape of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub stops: StopsConfig,
    pub color_ramps: Vec<ColorSpec>,
    pub color_space_type: ColorSpaceType,
    pub is_inverted: bool,
}

/// Persisted project list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedProjects {
    pub projects: Vec<PersistedProject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_index: Option<usize>,
}

/// Decodes stored project JSON, upgrading the legacy single-project shape.
pub fn decode_projects(json: &str) -> Result<PersistedProjects, StorageError> {
    let value: Value = serde_json::from_str(json).map_err(StorageError::Decode)?;

    let is_legacy = value.get("projects").is_none()
        && LEGACY_FIELDS.iter().all(|field| value.get(field).is_some());
    if is_legacy {
        debug!("upgrading legacy single-project save");
        let mut project: PersistedProject =
            serde_json::from_value(value).map_err(StorageError::Decode)?;
        project
            .name
            .get_or_insert_with(|| DEFAULT_PROJECT_NAME.to_string());
        return Ok(PersistedProjects {
            projects: vec![project],
            active_index: Some(0),
        });
    }

    serde_json::from_value(value).map_err(StorageError::Decode)
}

/// Encodes a project list as JSON.
pub fn encode_projects(projects: &PersistedProjects) -> Result<String, StorageError> {
    serde_json::to_string(projects).map_err(StorageError::Encode)
}

/// Loads the stored project list.
///
/// Returns `None` when nothing is stored or the stored content can't be read;
/// the failure is logged.
pub fn load_projects<B: StorageBackend + ?Sized>(backend: &B) -> Option<PersistedProjects> {
    let content = match backend.get(STORAGE_KEY) {
        Ok(Some(content)) => content,
        Ok(None) => return None,
        Err(e) => {
            warn!("failed to read stored projects: {e}");
            return None;
        }
    };
    match decode_projects(&content) {
        Ok(projects) => Some(projects),
        Err(e) => {
            warn!("discarding stored projects: {e}");
            None
        }
    }
}

/// Writes the project list.
pub fn save_projects<B: StorageBackend + ?Sized>(
    backend: &mut B,
    projects: &PersistedProjects,
) -> Result<(), StorageError> {
    let json = encode_projects(projects)?;
    backend.set(STORAGE_KEY, &json)
}

/// Rebuilds a live project, parsing every key color.
pub fn from_persisted(persisted: PersistedProject) -> Result<Project, ParseError> {
    let PersistedProject {
        name,
        stops,
        color_ramps,
        color_space_type,
        is_inverted,
    } = persisted;
    let color_ramps = color_ramps
        .into_iter()
        .map(|spec| ColorRamp::new(&spec.colors, spec.name))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Project {
        name: name.unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string()),
        stops,
        color_ramps,
        color_space_type,
        is_inverted,
    })
}

/// The persisted shape of a project.
pub fn to_persisted(project: &Project) -> PersistedProject {
    PersistedProject {
        name: Some(project.name.clone()),
        stops: project.stops.clone(),
        color_ramps: project.color_ramps.iter().map(ColorRamp::to_spec).collect(),
        color_space_type: project.color_space_type,
        is_inverted: project.is_inverted,
    }
}
