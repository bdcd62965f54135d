use std::{env, path::PathBuf};

/// Environment variable that points the CLI at a different store file.
pub const ENV_STORE_FILE: &str = "ESPER_CONFIG_FILE";

/// The default path to the CLI store file.
///
/// > `~/.config/esper/cli/db.json`
///
/// It will only be `None` if it is unable to identify the user's home
/// directory, which should not happen under typical OS environments.
pub fn get_store_filename() -> Option<PathBuf> {
    match env::var_os(ENV_STORE_FILE) {
        Some(path) => Some(PathBuf::from(path)),
        None => directories_next::UserDirs::new().map(|dirs| {
            let mut buf = dirs.home_dir().to_path_buf();
            buf.extend([".config", "esper", "cli", "db.json"]);
            buf
        }),
    }
}
