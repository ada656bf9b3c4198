use crate::context::Context;
use crate::error::Error;
use crate::result::Result;
use serde::Deserialize;
use std::fs;

/// Optional override file in the submission directory
pub const MANIFEST_FILE: &str = "makezip.toml";

/// Assignment number embedded in the archive name
pub const ASSIGNMENT: u32 = 9;

/// Course prefix of the archive name
pub const COURSE: &str = "STY25";

/// Group info file, always added to the archive
pub const GROUP_INFO_FILE: &str = "groupinfo.txt";

/// Raw contents of `makezip.toml`
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ManifestToml {
    #[serde(default)]
    pub projects: Option<Vec<String>>,

    #[serde(default)]
    pub target: Option<String>,

    #[serde(default)]
    pub build_tool: Option<String>,

    #[serde(default)]
    pub archiver: Option<String>,
}

/// Resolved packaging settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Project subdirectories queried for sources, in archive order
    pub projects: Vec<String>,
    /// Make target printing the source list
    pub target: String,
    pub build_tool: String,
    pub archiver: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            projects: vec!["p1".to_string(), "p2".to_string()],
            target: "showsrc".to_string(),
            build_tool: "make".to_string(),
            archiver: "zip".to_string(),
        }
    }
}

impl Manifest {
    /// Load `makezip.toml` if present, defaults otherwise
    pub fn load(ctx: &Context) -> Result<Self> {
        let path = ctx.path(MANIFEST_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let raw: ManifestToml =
            toml::from_str(&content).map_err(|error| Error::InvalidManifest { path, error })?;

        Ok(Self::from_toml(raw))
    }

    fn from_toml(raw: ManifestToml) -> Self {
        let defaults = Self::default();
        Self {
            projects: raw.projects.unwrap_or(defaults.projects),
            target: raw.target.unwrap_or(defaults.target),
            build_tool: raw.build_tool.unwrap_or(defaults.build_tool),
            archiver: raw.archiver.unwrap_or(defaults.archiver),
        }
    }
}
