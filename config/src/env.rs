use std::fmt;
use url::Url;

use crate::constants::*;

/// Where the Esper API lives: either a cloud tenant, whose host is derived
/// from its name, or an explicit base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Tenant(String),
    Custom(Url),
}

impl std::str::FromStr for Environment {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.starts_with("http://") || s.starts_with("https://") {
            let url = Url::parse(s).map_err(|err| eyre::eyre!("Invalid API host {s}: {err}"))?;
            if url.host_str().is_none() {
                eyre::bail!("Invalid API host {s}: missing host name");
            }
            return Ok(Environment::Custom(url));
        }

        let tenant = s.to_ascii_lowercase();
        if tenant.is_empty()
            || tenant.len() > MAX_TENANT_NAME_LEN
            || tenant.starts_with('-')
            || tenant.ends_with('-')
            || !tenant
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            eyre::bail!(
                "Invalid environment {s}, must be a tenant name (letters, digits and '-') or an http(s) URL"
            );
        }

        Ok(Environment::Tenant(tenant))
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Tenant(tenant) => write!(f, "{tenant}"),
            Environment::Custom(url) => write!(f, "{}", url.as_str().trim_end_matches('/')),
        }
    }
}

impl Environment {
    pub fn config(&self) -> eyre::Result<ApiConfig> {
        let config = match self {
            // The override only redirects tenant hosts; an explicit URL wins.
            Environment::Tenant(tenant) => ApiConfig {
                api_host: match std::env::var(ENV_API_HOST_OVERRIDE) {
                    Ok(host) => host.trim_end_matches('/').to_string(),
                    Err(_) => {
                        format!("{ESPER_API_HOST_PREFIX}{tenant}{ESPER_API_HOST_SUFFIX}")
                    }
                },
                tenant: Some(tenant.clone()),
            },
            Environment::Custom(url) => ApiConfig {
                api_host: url.as_str().trim_end_matches('/').to_string(),
                tenant: None,
            },
        };

        Ok(config)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_host: String,
    pub tenant: Option<String>,
}
