use crate::application::dto::AssignmentPlan;
use crate::ports::outbound::PlanReader;
use crate::shared::error::HierarchyError;
use crate::shared::security::{validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Plan file syntaxes, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanSyntax {
    Yaml,
    Toml,
}

impl PlanSyntax {
    fn detect(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "yml" | "yaml" => Some(PlanSyntax::Yaml),
            "toml" => Some(PlanSyntax::Toml),
            _ => None,
        }
    }
}

/// FileSystemReader adapter for reading assignment plans from disk
///
/// Symlinks, non-regular files and files over the size limit are refused
/// before anything is read.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_and_parse(&self, path: &Path) -> Result<AssignmentPlan> {
        let syntax = PlanSyntax::detect(path).ok_or_else(|| {
            anyhow::anyhow!("Unsupported plan extension (expected .yml, .yaml or .toml)")
        })?;

        if !path.exists() {
            anyhow::bail!("File does not exist");
        }
        validate_regular_file(path, "plan file", MAX_FILE_SIZE)?;

        let content = fs::read_to_string(path)?;
        let plan: AssignmentPlan = match syntax {
            PlanSyntax::Yaml => serde_yaml_ng::from_str(&content)?,
            PlanSyntax::Toml => toml::from_str(&content)?,
        };
        Ok(plan)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl PlanReader for FileSystemReader {
    fn read_plan(&self, path: &Path) -> Result<AssignmentPlan> {
        self.read_and_parse(path).map_err(|e| {
            HierarchyError::PlanReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
