use crate::{
    commands::application::application_path, errors::ApiError, models::Application, EsperClient,
};

#[derive(Debug, PartialEq, Clone)]
pub struct GetApplicationCommand {
    pub enterprise_id: String,
    pub application_id: String,
}

impl GetApplicationCommand {
    pub fn execute(&self, client: &dyn EsperClient) -> Result<Application, ApiError> {
        let response = client.get(
            application_path(&self.enterprise_id, &self.application_id)?,
            vec![],
        )?;
        Ok(serde_json::from_value(response)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        commands::application::get::GetApplicationCommand, tests::utils::create_test_client,
        Application,
    };
    use mockall::predicate;
    use serde_json::json;

    #[test]
    fn test_commands_application_get_command() {
        let mut client = create_test_client();

        client
            .expect_get()
            .with(
                predicate::eq("v0/enterprise/e1/application/a1/".to_string()),
                predicate::eq(Vec::<(String, String)>::new()),
            )
            .times(1)
            .returning(|_, _| {
                Ok(json!({
                    "id": "a1",
                    "application_name": "Tiny Notepad",
                    "package_name": "com.example.notepad",
                    "versions": []
                }))
            });

        let res = GetApplicationCommand {
            enterprise_id: "e1".to_string(),
            application_id: "a1".to_string(),
        }
        .execute(&client)
        .unwrap();

        assert_eq!(
            res,
            Application {
                id: "a1".to_string(),
                application_name: "Tiny Notepad".to_string(),
                package_name: Some("com.example.notepad".to_string()),
            }
        );
    }
}
