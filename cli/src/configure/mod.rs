pub mod get;
pub mod set;

use esper_sdk::ConfigDocument;
use std::{io::Write, path::Path};

use crate::helpers::mask_secret;

fn write_config_summary<W: Write>(
    out: &mut W,
    path: &Path,
    config: &ConfigDocument,
) -> eyre::Result<()> {
    writeln!(
        out,
        "Store File: {}\nHost: {}\nEnvironment: {}\nEnterprise ID: {}\nAPI Key: {}",
        path.display(),
        config.host,
        config.environment.as_deref().unwrap_or("(custom host)"),
        config.enterprise_id.as_deref().unwrap_or("(not set)"),
        mask_secret(&config.api_key),
    )?;
    Ok(())
}
