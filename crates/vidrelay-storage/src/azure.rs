use crate::connection_string::{AzureConnectionString, AzureCredential};
use crate::objects;
use crate::traits::{ObjectStream, Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use object_store::azure::{AzureConfigKey, MicrosoftAzure, MicrosoftAzureBuilder};
use std::sync::Arc;

/// Azure Blob Storage implementation
#[derive(Clone)]
pub struct AzureBlobStorage {
    store: Arc<MicrosoftAzure>,
    container: String,
    container_url: String,
}

impl AzureBlobStorage {
    /// Create a client for `container` from an Azure connection string.
    ///
    /// No request is made here; bad credentials only surface on the first
    /// upload or listing. The container itself is never created.
    pub fn from_connection_string(connection_string: &str, container: &str) -> StorageResult<Self> {
        let parsed = AzureConnectionString::parse(connection_string)?;

        let mut builder = MicrosoftAzureBuilder::new()
            .with_account(parsed.account_name.clone())
            .with_container_name(container)
            .with_endpoint(parsed.blob_endpoint.clone())
            .with_allow_http(parsed.allows_http());

        builder = match &parsed.credential {
            AzureCredential::AccessKey(key) => builder.with_access_key(key.clone()),
            AzureCredential::SharedAccessSignature(sas) => {
                builder.with_config(AzureConfigKey::SasKey, sas.clone())
            }
        };

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        let container_url = parsed.container_url(container);

        tracing::debug!(
            account = %parsed.account_name,
            container = %container,
            container_url = %container_url,
            "Created Azure blob storage client"
        );

        Ok(AzureBlobStorage {
            store: Arc::new(store),
            container: container.to_string(),
            container_url,
        })
    }
}

#[async_trait]
impl Storage for AzureBlobStorage {
    async fn upload_with_key(
        &self,
        storage_key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> StorageResult<String> {
        objects::put_object(
            self.store.as_ref(),
            &self.container,
            storage_key,
            data,
            Some(content_type),
        )
        .await?;
        Ok(self.object_url(storage_key))
    }

    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>> {
        objects::get_object(self.store.as_ref(), &self.container, storage_key).await
    }

    async fn list(&self) -> StorageResult<ObjectStream> {
        Ok(objects::list_objects(self.store.as_ref(), &self.container))
    }

    fn container_url(&self) -> &str {
        &self.container_url
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Azure
    }
}
