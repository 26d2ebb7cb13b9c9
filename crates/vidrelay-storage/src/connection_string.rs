//! Azure Storage connection string parsing.
//!
//! Connection strings are `;`-separated `Key=Value` pairs, for example
//! `DefaultEndpointsProtocol=https;AccountName=acct;AccountKey=...;EndpointSuffix=core.windows.net`.
//! Keys are matched case-insensitively; unknown keys are ignored.

use crate::traits::{StorageError, StorageResult};

const DEFAULT_PROTOCOL: &str = "https";
const DEFAULT_ENDPOINT_SUFFIX: &str = "core.windows.net";

/// Well-known Azurite account used by `UseDevelopmentStorage=true`.
const EMULATOR_ACCOUNT_NAME: &str = "devstoreaccount1";
const EMULATOR_ACCOUNT_KEY: &str =
    "Eby8vdM02xNOcqFlqUwJPLlmEtlCDXJ1OUzFT50uSRZ6IFsuFq2UVErCz4I6tq/K1SZFPTOtr/KBHBeksoGMGw==";
const EMULATOR_BLOB_ENDPOINT: &str = "http://127.0.0.1:10000/devstoreaccount1";

/// Credential carried by a connection string.
#[derive(Clone, PartialEq, Eq)]
pub enum AzureCredential {
    AccessKey(String),
    SharedAccessSignature(String),
}

impl std::fmt::Debug for AzureCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AzureCredential::AccessKey(_) => f.write_str("AccessKey(<redacted>)"),
            AzureCredential::SharedAccessSignature(_) => {
                f.write_str("SharedAccessSignature(<redacted>)")
            }
        }
    }
}

/// Parsed connection string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureConnectionString {
    pub account_name: String,
    pub credential: AzureCredential,
    /// Account-level blob endpoint, without a trailing slash
    pub blob_endpoint: String,
}

impl AzureConnectionString {
    pub fn parse(raw: &str) -> StorageResult<Self> {
        let mut protocol = None;
        let mut account_name = None;
        let mut account_key = None;
        let mut sas = None;
        let mut endpoint_suffix = None;
        let mut blob_endpoint = None;
        let mut development = false;

        for part in raw.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            // Values (keys, signatures) may themselves contain '='.
            let (key, value) = part.split_once('=').ok_or_else(|| {
                StorageError::ConfigError(format!(
                    "Malformed connection string segment (expected Key=Value): {}",
                    redact(part)
                ))
            })?;
            let value = value.trim().to_string();
            match key.trim().to_ascii_lowercase().as_str() {
                "defaultendpointsprotocol" => protocol = Some(value),
                "accountname" => account_name = Some(value),
                "accountkey" => account_key = Some(value),
                "sharedaccesssignature" => sas = Some(value),
                "endpointsuffix" => endpoint_suffix = Some(value),
                "blobendpoint" => blob_endpoint = Some(value),
                "usedevelopmentstorage" => development = value.eq_ignore_ascii_case("true"),
                _ => {}
            }
        }

        if development {
            return Ok(AzureConnectionString {
                account_name: account_name.unwrap_or_else(|| EMULATOR_ACCOUNT_NAME.to_string()),
                credential: AzureCredential::AccessKey(
                    account_key.unwrap_or_else(|| EMULATOR_ACCOUNT_KEY.to_string()),
                ),
                blob_endpoint: trim_endpoint(
                    blob_endpoint.unwrap_or_else(|| EMULATOR_BLOB_ENDPOINT.to_string()),
                ),
            });
        }

        let account_name = account_name.ok_or_else(|| {
            StorageError::ConfigError("Connection string is missing AccountName".to_string())
        })?;

        let credential = match (account_key, sas) {
            (Some(key), _) => AzureCredential::AccessKey(key),
            (None, Some(sas)) => {
                AzureCredential::SharedAccessSignature(sas.trim_start_matches('?').to_string())
            }
            (None, None) => {
                return Err(StorageError::ConfigError(
                    "Connection string must contain AccountKey or SharedAccessSignature"
                        .to_string(),
                ))
            }
        };

        let blob_endpoint = match blob_endpoint {
            Some(endpoint) => trim_endpoint(endpoint),
            None => format!(
                "{}://{}.blob.{}",
                protocol.as_deref().unwrap_or(DEFAULT_PROTOCOL),
                account_name,
                endpoint_suffix.as_deref().unwrap_or(DEFAULT_ENDPOINT_SUFFIX)
            ),
        };

        Ok(AzureConnectionString {
            account_name,
            credential,
            blob_endpoint,
        })
    }

    /// URL of `container` under this account.
    pub fn container_url(&self, container: &str) -> String {
        format!("{}/{}", self.blob_endpoint, container)
    }

    pub fn allows_http(&self) -> bool {
        self.blob_endpoint.starts_with("http://")
    }
}

fn trim_endpoint(endpoint: String) -> String {
    endpoint.trim_end_matches('/').to_string()
}

/// Keep secrets out of error messages.
fn redact(segment: &str) -> String {
    let key = segment.split('=').next().unwrap_or_default();
    format!("{}=<redacted>", key)
}
