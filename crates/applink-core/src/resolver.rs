use crate::campaign::CampaignToken;
use crate::error::ConfigError;
use crate::rule::RedirectRule;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;

const APP_STORE_BASE_URL: &str = "https://apps.apple.com/app";

/// Media type of iOS apps.
const MEDIA_TYPE_IOS: &str = "8";

/// Whitelisted campaign characters that a query-string parser would
/// otherwise split on or decode.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'{')
    .add(b'|')
    .add(b'}');

pub trait Resolver: Send + Sync + 'static {
    /// Redirect target of the root path.
    fn root(&self) -> String;

    /// Redirect target of a campaign, given its decoded name. The name is
    /// used as is, including any leading `/`.
    fn campaign(&self, name: &str) -> String;

    /// Returns the redirect target for a request path.
    ///
    /// The root path (`/` or empty) maps to [`Resolver::root`]; for any other
    /// path the single leading `/` is dropped and the rest is the campaign
    /// name.
    fn resolve(&self, path: &str) -> String {
        let name = path.strip_prefix('/').unwrap_or(path);
        if name.is_empty() {
            self.root()
        } else {
            self.campaign(name)
        }
    }
}

/// Resolves campaign paths to App Store deep links.
#[derive(Debug, Clone)]
pub struct AppStoreResolver {
    rule: RedirectRule,
}

impl AppStoreResolver {
    /// Creates a resolver, rejecting rules that do not validate.
    pub fn new(rule: RedirectRule) -> Result<Self, ConfigError> {
        rule.validate()?;
        Ok(Self { rule })
    }

    pub fn rule(&self) -> &RedirectRule {
        &self.rule
    }

    /// Builds `https://apps.apple.com/app/id{app}?pt={provider}&ct={token}&mt=8`,
    /// leaving out `pt` when no provider is configured.
    pub fn app_store_url(&self, token: &CampaignToken) -> String {
        let mut params = Vec::with_capacity(3);
        if let Some(provider_id) = &self.rule.provider_id {
            params.push(format!("pt={}", encode(provider_id)));
        }
        params.push(format!("ct={}", encode(token.as_str())));
        params.push(format!("mt={MEDIA_TYPE_IOS}"));

        format!(
            "{APP_STORE_BASE_URL}/id{}?{}",
            self.rule.app_id,
            params.join("&")
        )
    }
}

impl Resolver for AppStoreResolver {
    fn root(&self) -> String {
        self.rule.fallback_url.clone()
    }

    fn campaign(&self, name: &str) -> String {
        let token = CampaignToken::sanitize(name);
        let url = self.app_store_url(&token);
        debug!(name = %name, campaign = %token, url = %url, "resolved campaign");
        url
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
