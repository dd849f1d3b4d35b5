//! The authenticated Tactill API gateway.

use crate::clients::errors::{ResponseError, TactillError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::config::{ApiKey, TactillConfig, TactillId};
use crate::rest::resources::{Account, ACCOUNT_PATH};
use crate::rest::Scope;

/// Client for the Tactill REST API.
///
/// Construction looks up the account bound to the API key and fails if the
/// key is rejected, so a client that exists is always authenticated. The
/// first company, shop and node of the account become the working scope of
/// every later call. Scope and headers never change after construction.
///
/// # Thread Safety
///
/// `TactillClient` is `Send + Sync`. Two clients share nothing.
///
/// # Example
///
/// ```rust,ignore
/// use tactill::rest::ListParams;
/// use tactill::TactillClient;
///
/// let client = TactillClient::new("0123456789abcdef01234567").await?;
/// let articles = client.get_articles(&ListParams::new().limit(10)).await?;
/// ```
#[derive(Debug)]
pub struct TactillClient {
    http_client: HttpClient,
    account: Account,
    company_id: TactillId,
    shop_id: TactillId,
    node_id: TactillId,
}

// Verify TactillClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TactillClient>();
};

impl TactillClient {
    /// Creates a client for `api_key` with the default configuration.
    ///
    /// # Errors
    ///
    /// - [`TactillError::Validation`] if the key is not 24 hexadecimal characters
    /// - [`TactillError::Authentication`] if the account lookup is refused
    /// - [`TactillError::MissingScope`] if the account has no company, shop or node
    pub async fn new(api_key: &str) -> Result<Self, TactillError> {
        let config = TactillConfig::builder().api_key(ApiKey::new(api_key)?).build()?;
        Self::with_config(config).await
    }

    /// Creates a client from a full configuration.
    ///
    /// # Errors
    ///
    /// Same as [`TactillClient::new`], plus [`TactillError::Network`] if the
    /// account lookup cannot reach the server.
    pub async fn with_config(config: TactillConfig) -> Result<Self, TactillError> {
        let http_client = HttpClient::new(&config)?;

        let request = HttpRequest::builder(HttpMethod::Get, ACCOUNT_PATH).build()?;
        let response = match http_client.request(request).await {
            Ok(response) => response,
            Err(TactillError::Response(e)) => return Err(authentication_failed(e)),
            Err(e) => return Err(e),
        };
        let account: Account = response.json("Account")?;

        let company_id = default_scope(&account, Scope::Company)?;
        let shop_id = default_scope(&account, Scope::Shop)?;
        let node_id = default_scope(&account, Scope::Node)?;

        tracing::info!(
            company_id = %company_id,
            shop_id = %shop_id,
            node_id = %node_id,
            "Resolved Tactill account scope"
        );

        Ok(Self {
            http_client,
            account,
            company_id,
            shop_id,
            node_id,
        })
    }

    /// Returns the HTTP client used for every request.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Returns the account read at construction.
    #[must_use]
    pub const fn account(&self) -> &Account {
        &self.account
    }

    /// Returns the working company.
    #[must_use]
    pub const fn company_id(&self) -> &TactillId {
        &self.company_id
    }

    /// Returns the working shop.
    #[must_use]
    pub const fn shop_id(&self) -> &TactillId {
        &self.shop_id
    }

    /// Returns the working node.
    #[must_use]
    pub const fn node_id(&self) -> &TactillId {
        &self.node_id
    }

    /// Returns the working identifier for `scope`.
    #[must_use]
    pub const fn scope_id(&self, scope: Scope) -> &TactillId {
        match scope {
            Scope::Company => &self.company_id,
            Scope::Shop => &self.shop_id,
            Scope::Node => &self.node_id,
        }
    }
}

fn authentication_failed(error: ResponseError) -> TactillError {
    tracing::warn!("Tactill account lookup refused with status {}", error.code);
    TactillError::Authentication(error)
}

fn default_scope(account: &Account, scope: Scope) -> Result<TactillId, TactillError> {
    account
        .default_scope_id(scope)
        .cloned()
        .ok_or(TactillError::MissingScope {
            scope: scope.account_field(),
        })
}
