// Esper cloud API hosts are derived from the tenant (environment) name.
pub const ESPER_API_HOST_PREFIX: &str = "https://";
pub const ESPER_API_HOST_SUFFIX: &str = "-api.esper.cloud/api";

// Overrides the resolved API host for every environment, mostly for local mocks.
pub const ENV_API_HOST_OVERRIDE: &str = "ESPER_API_HOST";

pub const MAX_TENANT_NAME_LEN: usize = 63;
