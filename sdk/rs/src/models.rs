use serde::{Deserialize, Serialize};

/// A device group as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceGroup {
    pub id: String,
    pub name: String,
    /// Omitted (or null) by the API for groups it has not counted yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_count: Option<u64>,
}

/// One page of the device group collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceGroupList {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<DeviceGroup>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceGroupCreate {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DeviceGroupUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An application package uploaded to the enterprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub application_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_name: Option<String>,
}

/// One uploaded build of an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppVersion {
    pub id: String,
    #[serde(default)]
    pub version_code: Option<String>,
    #[serde(default)]
    pub build_number: Option<String>,
    #[serde(default)]
    pub size_in_mb: Option<f64>,
    #[serde(default)]
    pub release_track: Option<String>,
    /// Omitted (or null) until the build is installed somewhere.
    #[serde(default)]
    pub installed_count: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppVersionList {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<AppVersion>,
}
