pub mod current;
pub mod show;

use esper_sdk::Application;
use serde::Serialize;
use tabled::Table;

use crate::formatters::{display_option, DetailRow, Renderable};

pub const APPLICATION_DETAILS_HEADING: &str = "APPLICATION DETAILS";

#[derive(Serialize, Debug)]
pub struct ApplicationDetailsDisplay {
    #[serde(skip)]
    heading: String,
    pub id: String,
    pub name: String,
    pub package_name: Option<String>,
}

impl ApplicationDetailsDisplay {
    pub fn new<H: Into<String>>(heading: H, application: Application) -> Self {
        ApplicationDetailsDisplay {
            heading: heading.into(),
            id: application.id,
            name: application.application_name,
            package_name: application.package_name,
        }
    }
}

impl Renderable for ApplicationDetailsDisplay {
    fn heading(&self) -> Option<String> {
        Some(self.heading.clone())
    }

    fn table(&self) -> Option<Table> {
        Some(Table::new([
            DetailRow {
                title: "id",
                details: self.id.clone(),
            },
            DetailRow {
                title: "name",
                details: self.name.clone(),
            },
            DetailRow {
                title: "package_name",
                details: display_option(&self.package_name),
            },
        ]))
    }
}
