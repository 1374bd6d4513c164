use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;
use url::Url;

pub const DEFAULT_FALLBACK_URL: &str = "https://example.com";

/// Static redirect configuration, built once at startup.
///
/// A rule is plain data; [`RedirectRule::validate`] checks it and
/// [`AppStoreResolver::new`](crate::AppStoreResolver::new) refuses rules
/// that do not validate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
pub struct RedirectRule {
    /// Numeric App Store identifier of the target app.
    #[builder(setter(into))]
    pub app_id: String,
    /// Advertising provider token, emitted as `pt` when present.
    #[builder(default, setter(strip_option, into))]
    pub provider_id: Option<String>,
    /// Where `/` redirects to.
    #[builder(default = DEFAULT_FALLBACK_URL.to_owned(), setter(into))]
    pub fallback_url: String,
}

impl RedirectRule {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_id.is_empty() {
            return Err(ConfigError::MissingAppId);
        }
        if !self.app_id.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidAppId(self.app_id.clone()));
        }

        if let Some(provider_id) = &self.provider_id {
            if provider_id.is_empty() || !provider_id.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(ConfigError::InvalidProviderId(provider_id.clone()));
            }
        }

        let invalid = || ConfigError::InvalidFallbackUrl(self.fallback_url.clone());
        if !self.fallback_url.chars().all(|c| c.is_ascii_graphic()) {
            return Err(invalid());
        }

        let url = Url::parse(&self.fallback_url).map_err(|_| invalid())?;
        let has_host = url.host_str().is_some_and(|host| !host.is_empty());
        if !matches!(url.scheme(), "http" | "https") || !has_host {
            return Err(invalid());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let rule = RedirectRule::builder().app_id("123456789").build();
        assert_eq!(rule.provider_id, None);
        assert_eq!(rule.fallback_url, DEFAULT_FALLBACK_URL);
        assert!(rule.validate().is_ok());
    }

    #[test]
    fn missing_app_id() {
        let rule = RedirectRule::builder().app_id("").build();
        assert_eq!(rule.validate(), Err(ConfigError::MissingAppId));
    }

    #[test]
    fn non_numeric_app_id() {
        let rule = RedirectRule::builder().app_id("id123").build();
        assert!(matches!(rule.validate(), Err(ConfigError::InvalidAppId(_))));
    }

    #[test]
    fn provider_id_must_be_alphanumeric() {
        let rule = RedirectRule::builder()
            .app_id("1")
            .provider_id("abc&x=1")
            .build();
        assert!(matches!(
            rule.validate(),
            Err(ConfigError::InvalidProviderId(_))
        ));

        let rule = RedirectRule::builder().app_id("1").provider_id("").build();
        assert!(rule.validate().is_err());
    }

    #[test]
    fn fallback_url_must_be_absolute() {
        for url in [
            "example.com",
            "https://",
            "ftp://example.com",
            "mailto:ops@example.com",
            "https://example.com/a b",
            "https://?x",
            "https://:80",
            "https://#frag",
        ] {
            let rule = RedirectRule::builder()
                .app_id("1")
                .fallback_url(url)
                .build();
            assert!(
                matches!(rule.validate(), Err(ConfigError::InvalidFallbackUrl(_))),
                "{url} should be rejected"
            );
        }

        let rule = RedirectRule::builder()
            .app_id("1")
            .fallback_url("http://localhost:3000/landing")
            .build();
        assert!(rule.validate().is_ok());

        let rule = RedirectRule::builder()
            .app_id("1")
            .fallback_url("https://example.com/apps?src=link")
            .build();
        assert!(rule.validate().is_ok());
    }
}
