use std::convert::TryFrom;

use figment::{
    providers::{Format, Toml},
    Figment,
};
use log::warn;
use serde::Deserialize;

use crate::error::Error;
use crate::fallback::ContactChannels;
use crate::validate::is_valid_email;

/// Built-in settings of the site, overridable per deployment.
pub const DEFAULTS: &str = include_str!("../emailjs.toml");

#[derive(Deserialize)]
struct RawConfig {
    service_id: String,
    template_id: String,
    public_key: String,
    endpoint: String,
    organization: String,
    banner_timeout_ms: u32,
    contact: ContactChannels,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "RawConfig")]
pub struct Config {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
    pub organization: String,
    pub banner_timeout_ms: u32,
    pub contact: ContactChannels,
}

impl TryFrom<RawConfig> for Config {
    type Error = Error;

    fn try_from(v: RawConfig) -> Result<Self, Self::Error> {
        if !v.endpoint.starts_with("https://") {
            if !v.endpoint.starts_with("http://") {
                return Err(Error::InvalidEndpoint(v.endpoint));
            }
            warn!("Email service endpoint {} is not using TLS", v.endpoint);
        }

        if !is_valid_email(&v.contact.email) {
            return Err(Error::InvalidChannel(v.contact.email));
        }

        if v.contact.whatsapp.is_empty() || !v.contact.whatsapp.chars().all(|c| c.is_ascii_digit())
        {
            return Err(Error::InvalidChannel(v.contact.whatsapp));
        }

        Ok(Config {
            service_id: v.service_id,
            template_id: v.template_id,
            public_key: v.public_key,
            endpoint: v.endpoint,
            organization: v.organization,
            banner_timeout_ms: v.banner_timeout_ms,
            contact: v.contact,
        })
    }
}

impl Config {
    pub fn load() -> Result<Config, Error> {
        Ok(Figment::from(Toml::string(DEFAULTS)).extract()?)
    }

    /// The built-in settings with `overrides` merged on top.
    pub fn from_toml(overrides: &str) -> Result<Config, Error> {
        Ok(Figment::from(Toml::string(DEFAULTS))
            .merge(Toml::string(overrides))
            .extract()?)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults() {
        let config = Config::load().unwrap();
        assert_eq!(config.service_id, "service_qpahzur");
        assert_eq!(config.template_id, "template_js8zym8");
        assert_eq!(config.public_key, "6MgztWwU_P9WcNjJi");
        assert_eq!(config.endpoint, "https://api.emailjs.com/api/v1.0/email/send");
        assert_eq!(config.organization, "Ocyana Global Migration");
        assert_eq!(config.banner_timeout_ms, 5000);
        assert_eq!(config.contact.email, "ocyanamigration@gmail.com");
        assert_eq!(config.contact.whatsapp, "94777638715");
    }

    #[test]
    fn overrides_are_merged() {
        let config = Config::from_toml(
            r#"
            template_id = "template_staging"

            [contact]
            phone_display = "+94 11 000 0000"
            "#,
        )
        .unwrap();
        assert_eq!(config.template_id, "template_staging");
        assert_eq!(config.service_id, "service_qpahzur");
        assert_eq!(config.contact.phone_display, "+94 11 000 0000");
        assert_eq!(config.contact.phone, "+94777638715");
    }

    #[test]
    fn rejects_bad_endpoint() {
        let err = Config::from_toml(r#"endpoint = "ftp://example.com""#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("ftp://example.com"));
    }

    #[test]
    fn plain_http_endpoint_is_accepted() {
        let config = Config::from_toml(r#"endpoint = "http://localhost:8025/send""#).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8025/send");
        assert_eq!(config.service_id, "service_qpahzur");
    }

    #[test]
    fn rejects_bad_channels() {
        assert!(Config::from_toml("[contact]\nemail = \"nobody\"").is_err());
        assert!(Config::from_toml("[contact]\nwhatsapp = \"+94 77\"").is_err());
    }
}
