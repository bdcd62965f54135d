use esper_sdk::{ApplicationDocument, ConfigDocument, ConfigStore, CurrentGroup, StoreError};

use crate::errors::CliError;

/// Local state for one CLI invocation, loaded once from the store.
///
/// Commands read the configuration and the current selections from here and
/// mutate them through it; every mutation is written through to the store
/// immediately.
#[derive(Debug)]
pub struct SessionContext {
    store: ConfigStore,
    config: Option<ConfigDocument>,
    current_group: Option<CurrentGroup>,
    application: Option<ApplicationDocument>,
}

impl SessionContext {
    pub fn load(store: ConfigStore) -> Result<SessionContext, StoreError> {
        let config = store.get::<ConfigDocument>()?;
        let current_group = store.get::<CurrentGroup>()?;
        let application = store.get::<ApplicationDocument>()?;

        Ok(SessionContext {
            store,
            config,
            current_group,
            application,
        })
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn config(&self) -> Option<&ConfigDocument> {
        self.config.as_ref()
    }

    /// Fails with [`CliError::MissingCredentials`] unless an API key is stored.
    pub fn check_credentials(&self) -> Result<&ConfigDocument, CliError> {
        match &self.config {
            Some(config) if !config.api_key.trim().is_empty() => Ok(config),
            _ => Err(CliError::MissingCredentials),
        }
    }

    pub fn enterprise_id(&self) -> Result<String, CliError> {
        self.config
            .as_ref()
            .and_then(|config| config.enterprise_id.as_deref())
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .ok_or(CliError::MissingEnterpriseContext)
    }

    pub fn set_config(&mut self, config: ConfigDocument) -> Result<(), CliError> {
        self.store.set(&config)?;
        self.config = Some(config);
        Ok(())
    }

    pub fn current_group(&self) -> Option<&CurrentGroup> {
        self.current_group.as_ref()
    }

    pub fn set_current_group(&mut self, group_id: &str) -> Result<(), CliError> {
        let group = CurrentGroup {
            id: group_id.to_string(),
        };
        self.store.set(&group)?;
        self.current_group = Some(group);
        Ok(())
    }

    /// Clears the selection, returning what was set before.
    pub fn unset_current_group(&mut self) -> Result<Option<CurrentGroup>, CliError> {
        self.store.unset::<CurrentGroup>()?;
        Ok(self.current_group.take())
    }

    pub fn current_application(&self) -> Option<&ApplicationDocument> {
        self.application.as_ref()
    }

    pub fn set_current_application(
        &mut self,
        application: ApplicationDocument,
    ) -> Result<(), CliError> {
        self.store.set(&application)?;
        self.application = Some(application);
        Ok(())
    }

    pub fn unset_current_application(&mut self) -> Result<Option<ApplicationDocument>, CliError> {
        self.store.unset::<ApplicationDocument>()?;
        Ok(self.application.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::utils::{create_test_context, test_config};

    #[test]
    fn test_load_reads_both_documents() {
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));
        ctx.set_current_group("g1").unwrap();

        let reloaded = SessionContext::load(ctx.store().clone()).unwrap();
        assert_eq!(reloaded.config(), Some(&test_config()));
        assert_eq!(
            reloaded.current_group(),
            Some(&CurrentGroup {
                id: "g1".to_string()
            })
        );
    }

    #[test]
    fn test_check_credentials() {
        let (_tmpdir, ctx) = create_test_context(None);
        assert!(matches!(
            ctx.check_credentials(),
            Err(CliError::MissingCredentials)
        ));

        let mut config = test_config();
        config.api_key = "  ".to_string();
        let (_tmpdir, ctx) = create_test_context(Some(config));
        assert!(matches!(
            ctx.check_credentials(),
            Err(CliError::MissingCredentials)
        ));

        let (_tmpdir, ctx) = create_test_context(Some(test_config()));
        assert!(ctx.check_credentials().is_ok());
    }

    #[test]
    fn test_enterprise_id() {
        let mut config = test_config();
        config.enterprise_id = None;
        let (_tmpdir, ctx) = create_test_context(Some(config));
        assert!(matches!(
            ctx.enterprise_id(),
            Err(CliError::MissingEnterpriseContext)
        ));

        let (_tmpdir, ctx) = create_test_context(Some(test_config()));
        assert_eq!(ctx.enterprise_id().unwrap(), "e1");
    }

    #[test]
    fn test_unset_current_group_writes_through() {
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));

        assert_eq!(ctx.unset_current_group().unwrap(), None);

        ctx.set_current_group("g1").unwrap();
        let previous = ctx.unset_current_group().unwrap();
        assert_eq!(previous.map(|g| g.id), Some("g1".to_string()));
        assert_eq!(ctx.current_group(), None);
        assert_eq!(ctx.store().get::<CurrentGroup>().unwrap(), None);
    }

    #[test]
    fn test_current_application_writes_through() {
        let (_tmpdir, mut ctx) = create_test_context(Some(test_config()));
        assert_eq!(ctx.current_application(), None);

        let application = ApplicationDocument {
            id: "a1".to_string(),
            name: Some("Tiny Notepad".to_string()),
        };
        ctx.set_current_application(application.clone()).unwrap();

        let reloaded = SessionContext::load(ctx.store().clone()).unwrap();
        assert_eq!(reloaded.current_application(), Some(&application));

        assert_eq!(ctx.unset_current_application().unwrap(), Some(application));
        assert_eq!(ctx.store().get::<ApplicationDocument>().unwrap(), None);
    }
}
