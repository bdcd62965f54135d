pub mod delete;
pub mod list;
pub mod show;

use esper_sdk::{AppVersion, AppVersionList};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::{
    context::SessionContext,
    formatters::{display_option, DetailRow, Renderable},
    validators::non_empty,
};

pub const VERSION_DETAILS_HEADING: &str = "VERSION DETAILS";

/// `--app` when given, otherwise the current application.
pub(crate) fn resolve_application(app: Option<String>, ctx: &SessionContext) -> Option<String> {
    non_empty(app).or_else(|| {
        ctx.current_application()
            .map(|application| application.id.clone())
            .filter(|id| !id.trim().is_empty())
    })
}

#[derive(Tabled, Serialize, Debug, Clone, PartialEq)]
pub struct VersionDisplay {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "VERSION CODE", display = "crate::formatters::display_option")]
    pub version_code: Option<String>,
    #[tabled(rename = "BUILD NUMBER", display = "crate::formatters::display_option")]
    pub build_number: Option<String>,
    #[tabled(rename = "SIZE IN Mb", display = "crate::formatters::display_option")]
    pub size_in_mb: Option<f64>,
    #[tabled(rename = "RELEASE TRACK", display = "crate::formatters::display_option")]
    pub release_track: Option<String>,
    #[tabled(rename = "INSTALLED COUNT")]
    pub installed_count: u64,
}

impl From<AppVersion> for VersionDisplay {
    fn from(version: AppVersion) -> Self {
        VersionDisplay {
            id: version.id,
            version_code: version.version_code,
            build_number: version.build_number,
            size_in_mb: version.size_in_mb,
            release_track: version.release_track,
            installed_count: version.installed_count.unwrap_or(0),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct VersionListDisplay {
    pub count: u64,
    pub results: Vec<VersionDisplay>,
}

impl From<AppVersionList> for VersionListDisplay {
    fn from(list: AppVersionList) -> Self {
        VersionListDisplay {
            count: list.count,
            results: list.results.into_iter().map(VersionDisplay::from).collect(),
        }
    }
}

impl Renderable for VersionListDisplay {
    fn heading(&self) -> Option<String> {
        Some(format!("Total Number of Versions: {}", self.count))
    }

    fn table(&self) -> Option<Table> {
        Some(Table::new(&self.results))
    }
}

#[derive(Serialize, Debug)]
pub struct VersionDetailsDisplay {
    #[serde(skip)]
    heading: String,
    #[serde(flatten)]
    pub version: VersionDisplay,
}

impl VersionDetailsDisplay {
    pub fn new<H: Into<String>>(heading: H, version: AppVersion) -> Self {
        VersionDetailsDisplay {
            heading: heading.into(),
            version: version.into(),
        }
    }
}

impl Renderable for VersionDetailsDisplay {
    fn heading(&self) -> Option<String> {
        Some(self.heading.clone())
    }

    fn table(&self) -> Option<Table> {
        let version = &self.version;
        Some(Table::new([
            DetailRow {
                title: "id",
                details: version.id.clone(),
            },
            DetailRow {
                title: "version_code",
                details: display_option(&version.version_code),
            },
            DetailRow {
                title: "build_number",
                details: display_option(&version.build_number),
            },
            DetailRow {
                title: "size_in_mb",
                details: display_option(&version.size_in_mb),
            },
            DetailRow {
                title: "release_track",
                details: display_option(&version.release_track),
            },
            DetailRow {
                title: "installed_count",
                details: version.installed_count.to_string(),
            },
        ]))
    }
}
