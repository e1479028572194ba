use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::counter::CountUp;
use crate::skill::SkillBar;

/// Site content compiled into the binary.
const EMBEDDED_SITE: &str = include_str!("../site.toml");

/// Content of the site that is data rather than markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub brand: String,
    pub tagline: String,
    pub copyright: String,
    pub contact_email: String,
    #[serde(default)]
    pub news: Vec<String>,
    pub channel: ChannelConfig,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    #[serde(default)]
    pub stats: Vec<StatConfig>,
    #[serde(default)]
    pub skills: Vec<SkillConfig>,
}

/// The video channel the deep-link dispatcher hands off to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfig {
    /// Channel handle, e.g. `@x_mode798`
    pub handle: String,
    /// Generic web URL, always used as the fallback
    pub web_url: String,
    /// Custom URI scheme registered by the iOS app
    pub app_scheme: String,
    /// Installed package targeted by the Android intent
    pub android_package: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
}

/// One animated number on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatConfig {
    pub end_value: u64,
    pub duration_ms: u64,
    pub label: String,
}

impl StatConfig {
    pub fn counter(&self) -> CountUp {
        CountUp::new(self.end_value, self.duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillConfig {
    pub name: String,
    /// Proficiency in percent (0..=100)
    pub level: u8,
}

impl SkillConfig {
    pub fn bar(&self) -> SkillBar {
        SkillBar::new(&self.name, self.level)
    }
}

impl SiteConfig {
    /// Load the configuration compiled into the binary
    pub fn load() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_SITE).context("Failed to load embedded site configuration")
    }

    /// Parse and validate a configuration document
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Failed to parse site configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the pages cannot render sensibly
    pub fn validate(&self) -> Result<()> {
        if self.channel.handle.trim().is_empty() {
            bail!("channel.handle must not be empty");
        }

        if !self.channel.web_url.starts_with("https://") {
            bail!(
                "channel.web_url must be an https URL, got: {}",
                self.channel.web_url
            );
        }

        if self.contact_email.trim().is_empty() {
            bail!("contact_email must not be empty");
        }

        for social in &self.socials {
            if !social.url.starts_with("https://") {
                bail!("social link {} must be an https URL, got: {}", social.name, social.url);
            }
        }

        for stat in &self.stats {
            if stat.duration_ms == 0 {
                bail!("stat '{}' must have a non-zero duration", stat.label);
            }
        }

        for skill in &self.skills {
            if skill.level > 100 {
                bail!(
                    "skill '{}' has level {}, expected at most 100",
                    skill.name,
                    skill.level
                );
            }
        }

        Ok(())
    }

    /// `mailto:` URI for the contact button
    pub fn contact_uri(&self) -> String {
        format!("mailto:{}", self.contact_email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal(extra: &str) -> String {
        format!(
            r#"
brand = "X-MODE"
tagline = "t"
copyright = "c"
contact_email = "someone@example.com"
{extra}

[channel]
handle = "@chan"
web_url = "https://youtube.com/@chan"
app_scheme = "youtube"
android_package = "com.google.android.youtube"
"#
        )
    }

    #[test]
    fn test_embedded_config_loads() {
        let config = SiteConfig::load().unwrap();
        assert_eq!(config.brand, "X-MODE");
        assert_eq!(config.channel.handle, "@x_mode798");
        assert_eq!(config.socials.len(), 5);
        assert_eq!(config.news.len(), 4);
    }

    #[test]
    fn test_embedded_stats_and_skills() {
        let config = SiteConfig::load().unwrap();
        let stats: Vec<(u64, u64)> = config
            .stats
            .iter()
            .map(|s| (s.end_value, s.duration_ms))
            .collect();
        assert_eq!(stats, vec![(10, 1000), (5000, 1500), (20, 1200), (3, 800)]);

        assert_eq!(config.skills.len(), 7);
        assert_eq!(config.skills[0].name, "HTML5");
        assert_eq!(config.skills[0].level, 95);
        assert_eq!(config.skills[6].level, 60);
    }

    #[test]
    fn test_social_order_is_preserved() {
        let config = SiteConfig::load().unwrap();
        let names: Vec<&str> = config.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["TikTok", "Instagram", "YouTube", "WhatsApp", "Telegram"]
        );
    }

    #[test]
    fn test_optional_sections_default_to_empty() {
        let config = SiteConfig::from_toml_str(&minimal("")).unwrap();
        assert!(config.news.is_empty());
        assert!(config.socials.is_empty());
        assert!(config.stats.is_empty());
        assert!(config.skills.is_empty());
    }

    #[test]
    fn test_rejects_invalid_toml() {
        let err = SiteConfig::from_toml_str("not = [valid").unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_rejects_skill_level_over_100() {
        let doc = minimal("") + "\n[[skills]]\nname = \"Rust\"\nlevel = 120\n";
        let err = SiteConfig::from_toml_str(&doc).unwrap_err();
        assert!(err.to_string().contains("Rust"));
    }

    #[test]
    fn test_rejects_zero_duration_stat() {
        let doc = minimal("") + "\n[[stats]]\nend_value = 5\nduration_ms = 0\nlabel = \"x\"\n";
        assert!(SiteConfig::from_toml_str(&doc).is_err());
    }

    #[test]
    fn test_rejects_plain_http_channel() {
        let doc = minimal("").replace("https://youtube.com/@chan", "http://youtube.com/@chan");
        assert!(SiteConfig::from_toml_str(&doc).is_err());
    }

    #[test]
    fn test_rejects_empty_contact_email() {
        let doc = minimal("").replace("someone@example.com", " ");
        assert!(SiteConfig::from_toml_str(&doc).is_err());
    }

    #[test]
    fn test_contact_uri() {
        let config = SiteConfig::from_toml_str(&minimal("")).unwrap();
        assert_eq!(config.contact_uri(), "mailto:someone@example.com");
    }
}
