pub mod create;
pub mod current;
pub mod delete;
pub mod list;
pub mod show;
pub mod update;

use esper_sdk::{DeviceGroup, DeviceGroupList};
use serde::Serialize;
use tabled::{Table, Tabled};

use crate::formatters::{DetailRow, Renderable};

pub const GROUP_DETAILS_HEADING: &str = "GROUP DETAILS";

#[derive(Tabled, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GroupDisplay {
    #[tabled(rename = "ID")]
    pub id: String,
    #[tabled(rename = "NAME")]
    pub name: String,
    #[tabled(rename = "DEVICE COUNT")]
    pub device_count: u64,
}

impl From<DeviceGroup> for GroupDisplay {
    fn from(group: DeviceGroup) -> Self {
        GroupDisplay {
            id: group.id,
            name: group.name,
            device_count: group.device_count.unwrap_or(0),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct GroupListDisplay {
    pub count: u64,
    pub results: Vec<GroupDisplay>,
}

impl From<DeviceGroupList> for GroupListDisplay {
    fn from(list: DeviceGroupList) -> Self {
        GroupListDisplay {
            count: list.count,
            results: list.results.into_iter().map(GroupDisplay::from).collect(),
        }
    }
}

impl Renderable for GroupListDisplay {
    fn heading(&self) -> Option<String> {
        Some(format!("Total Number of Groups: {}", self.count))
    }

    fn table(&self) -> Option<Table> {
        Some(Table::new(&self.results))
    }
}

/// A single group, shown as a TITLE/DETAILS table or a flat JSON object.
#[derive(Serialize, Debug)]
pub struct GroupDetailsDisplay {
    #[serde(skip)]
    heading: String,
    #[serde(flatten)]
    pub group: GroupDisplay,
}

impl GroupDetailsDisplay {
    pub fn new<H: Into<String>>(heading: H, group: DeviceGroup) -> Self {
        GroupDetailsDisplay {
            heading: heading.into(),
            group: group.into(),
        }
    }
}

impl Renderable for GroupDetailsDisplay {
    fn heading(&self) -> Option<String> {
        Some(self.heading.clone())
    }

    fn table(&self) -> Option<Table> {
        Some(Table::new([
            DetailRow {
                title: "id",
                details: self.group.id.clone(),
            },
            DetailRow {
                title: "name",
                details: self.group.name.clone(),
            },
            DetailRow {
                title: "device_count",
                details: self.group.device_count.to_string(),
            },
        ]))
    }
}
