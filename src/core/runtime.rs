//! Account runtime
//!
//! Binds one account of the resolved configuration to a ready API client.
//! Built once per invocation; construction either yields a complete runtime
//! or fails before any remote call.

use crate::api::client::GridscaleClient;
use crate::api::resource::ObjectApi;
use crate::config::Config;
use crate::core::operators::StorageOperator;
use crate::error::ConfigError;
use crate::utils::validation::validate_url;

pub struct Runtime<C: ObjectApi = GridscaleClient> {
    account: String,
    client: C,
}

impl Runtime<GridscaleClient> {
    pub fn new(config: &Config, account: &str) -> crate::Result<Self> {
        let settings = config
            .account(account)
            .ok_or_else(|| ConfigError::AccountNotFound {
                name: account.to_string(),
                available: config.account_names(),
            })?;

        for (field, value) in [("userId", &settings.user_id), ("token", &settings.token)] {
            if value.is_empty() {
                return Err(ConfigError::MissingField {
                    account: settings.name.clone(),
                    field: field.to_string(),
                }
                .into());
            }
        }
        validate_url(&settings.url)?;

        tracing::debug!(account = %settings.name, url = %settings.url, "building runtime");
        let client = GridscaleClient::new(settings.url, settings.user_id, settings.token)?;

        Ok(Self {
            account: settings.name,
            client,
        })
    }
}

impl<C: ObjectApi> Runtime<C> {
    /// Runtime over an already constructed client
    pub fn with_client(account: impl Into<String>, client: C) -> Self {
        Self {
            account: account.into(),
            client,
        }
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn storage_operator(&self) -> StorageOperator<'_, C> {
        StorageOperator::new(&self.client)
    }

    #[cfg(test)]
    pub(crate) fn client(&self) -> &C {
        &self.client
    }
}
