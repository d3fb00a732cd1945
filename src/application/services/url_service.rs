//! URL registry service: alias allocation, custom creation, and resolution.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use serde_json::json;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::entities::{Counter, NewUrlMapping, UrlMapping};
use crate::domain::repositories::{CounterRepository, UrlRepository};
use crate::error::AppError;
use crate::utils::alias::{
    alias_from_url, canonical_alias, is_reserved, join_short_url, validate_alias,
};
use crate::utils::base62;
use crate::utils::expiry::parse_expiry;

/// Upper bound on fresh counter values tried when derived aliases are taken.
const MAX_ALIAS_ATTEMPTS: usize = 10;

/// Registry settings derived from [`crate::config::Config`].
#[derive(Debug, Clone)]
pub struct RegistrySettings {
    /// Host used for shortened references when no custom domain is given.
    pub default_domain: String,
    /// Extra attempts after a failed counter increment.
    pub allocation_retries: usize,
}

/// Caller input for [`UrlService::create_custom`].
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default)]
pub struct CustomShortenInput {
    pub original_url: String,
    pub custom_alias: Option<String>,
    pub expires_at: Option<String>,
    pub custom_domain: Option<String>,
    pub user_id: Option<i64>,
}

/// A persisted mapping together with its full shortened reference.
#[derive(Debug, Clone)]
pub struct ShortenedUrl {
    pub mapping: UrlMapping,
    pub shortened_url: String,
}

/// Service owning the create and resolve operations.
///
/// Generic over its repositories so tests can plug in mocks while the server runs
/// with trait objects (see [`DynUrlService`]).
pub struct UrlService<U: ?Sized, C: ?Sized> {
    url_repository: Arc<U>,
    counter_repository: Arc<C>,
    settings: RegistrySettings,
}

/// Service over boxed repositories, as stored in [`crate::state::AppState`].
pub type DynUrlService = UrlService<dyn UrlRepository, dyn CounterRepository>;

impl<U, C> UrlService<U, C>
where
    U: UrlRepository + ?Sized,
    C: CounterRepository + ?Sized,
{
    /// Creates a new URL service.
    pub fn new(
        url_repository: Arc<U>,
        counter_repository: Arc<C>,
        settings: RegistrySettings,
    ) -> Self {
        Self {
            url_repository,
            counter_repository,
            settings,
        }
    }

    /// Shortens a URL under a counter-derived base62 alias.
    ///
    /// Each call allocates a new counter value, so shortening the same URL twice
    /// yields two different aliases.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original_url` is empty.
    /// Returns [`AppError::Allocation`] if the counter cannot be incremented after retries.
    /// Returns [`AppError::Storage`] on persistence failures.
    pub async fn create_auto(&self, original_url: String) -> Result<ShortenedUrl, AppError> {
        let original_url = require_url(original_url)?;

        // Custom aliases share the namespace, so a derived alias may already be taken.
        // Values that encode to a route name are burned.
        for attempt in 1..=MAX_ALIAS_ATTEMPTS {
            let value = self.allocate().await?;
            let alias = encode_counter(value)?;
            if is_reserved(&alias) {
                tracing::warn!(attempt, %alias, "Derived alias is a route name, allocating again");
                continue;
            }

            let new_mapping = NewUrlMapping::auto(original_url.clone(), alias.clone());
            match self.url_repository.insert(new_mapping).await {
                Ok(mapping) => {
                    tracing::info!(alias = %mapping.alias, counter = value, "Created auto alias");
                    return Ok(self.shortened(mapping));
                }
                Err(AppError::Conflict { .. }) => {
                    tracing::warn!(attempt, %alias, "Derived alias already taken, allocating again");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::storage(
            "Failed to find a free alias",
            json!({ "attempts": MAX_ALIAS_ATTEMPTS }),
        ))
    }

    /// Shortens a URL under a caller-chosen or URL-derived alias.
    ///
    /// # Alias Resolution
    ///
    /// - `custom_alias` if given
    /// - otherwise the last non-empty `/` segment of the URL
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if:
    /// - `user_id` is missing
    /// - `original_url` is empty
    /// - `expires_at` is not `YYYY-MM-DD` or not in the future
    /// - the resolved alias breaks the alias rules
    ///
    /// Returns [`AppError::Conflict`] if the alias is already in use.
    pub async fn create_custom(&self, input: CustomShortenInput) -> Result<ShortenedUrl, AppError> {
        let user_id = input
            .user_id
            .ok_or_else(|| AppError::bad_request("user_id is required", json!({})))?;
        let original_url = require_url(input.original_url)?;

        let expires_at = non_empty(input.expires_at)
            .map(|raw| parse_expiry(&raw, Utc::now()))
            .transpose()?;

        let alias = match non_empty(input.custom_alias) {
            Some(alias) => alias,
            None => alias_from_url(&original_url)
                .map(str::to_string)
                .ok_or_else(|| {
                    AppError::bad_request(
                        "Cannot derive an alias from the URL",
                        json!({ "url": original_url }),
                    )
                })?,
        };
        validate_alias(&alias)?;

        let new_mapping = NewUrlMapping {
            original_url,
            alias,
            custom_domain: non_empty(input.custom_domain),
            expires_at,
            created_by: user_id,
        };

        let mapping = self.url_repository.insert(new_mapping).await?;
        tracing::info!(alias = %mapping.alias, user_id, "Created custom alias");

        Ok(self.shortened(mapping))
    }

    /// Resolves an alias or default-domain short URL to its mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the token is empty.
    /// Returns [`AppError::NotFound`] if no mapping matches or it has expired.
    pub async fn resolve(&self, token: &str) -> Result<UrlMapping, AppError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(AppError::bad_request("Alias is required", json!({})));
        }

        let alias = canonical_alias(token, &self.settings.default_domain);
        let not_found = || AppError::not_found("Short link not found", json!({ "alias": alias }));

        let mapping = self
            .url_repository
            .find_by_alias(alias)
            .await?
            .ok_or_else(not_found)?;

        if mapping.is_expired() {
            tracing::debug!(alias, "Alias has expired");
            return Err(not_found());
        }

        Ok(mapping)
    }

    /// Reads the allocation counter; used as a storage liveness probe.
    pub async fn counter_snapshot(&self) -> Result<Counter, AppError> {
        self.counter_repository.current().await
    }

    /// Builds the full shortened reference for a mapping.
    pub fn short_url(&self, mapping: &UrlMapping) -> String {
        let domain = mapping
            .custom_domain
            .as_deref()
            .unwrap_or(&self.settings.default_domain);
        join_short_url(domain, &mapping.alias)
    }

    fn shortened(&self, mapping: UrlMapping) -> ShortenedUrl {
        let shortened_url = self.short_url(&mapping);
        ShortenedUrl {
            mapping,
            shortened_url,
        }
    }

    /// Increments the counter, retrying transient allocation failures with backoff.
    async fn allocate(&self) -> Result<i64, AppError> {
        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_millis(250))
            .map(jitter)
            .take(self.settings.allocation_retries);

        RetryIf::start(
            strategy,
            || self.counter_repository.next(),
            AppError::is_retryable,
        )
        .await
    }
}

fn require_url(url: String) -> Result<String, AppError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::bad_request("URL is required", json!({})));
    }
    Ok(url.to_string())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn encode_counter(value: i64) -> Result<String, AppError> {
    u64::try_from(value).map(base62::encode).map_err(|_| {
        AppError::allocation(
            "Counter produced a negative value",
            json!({ "value": value }),
        )
    })
}
