mod client;
mod config;
mod errors;
mod esperclient;
mod models;
mod store;

pub mod commands;


pub use crate::client::EsperHttpClient;
pub use crate::config::{get_store_filename, ENV_STORE_FILE};
pub use crate::errors::{ApiError, StoreError};
pub use crate::esperclient::{EsperClient, MockEsperClient};
pub use crate::models::{
    AppVersion, AppVersionList, Application, DeviceGroup, DeviceGroupCreate, DeviceGroupList,
    DeviceGroupUpdate,
};
pub use crate::store::{
    ApplicationDocument, ConfigDocument, ConfigStore, CurrentGroup, Document, DocumentKind,
};
