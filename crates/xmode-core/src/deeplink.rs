use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use std::time::Duration;

use crate::config::ChannelConfig;

/// Delay between the native handoff attempt and the web fallback.
pub const FALLBACK_GRACE: Duration = Duration::from_millis(500);

static IOS_AGENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)iPad|iPhone|iPod").expect("valid iOS agent regex"));
static ANDROID_AGENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)Android").expect("valid Android agent regex"));

/// Platform class of the requesting agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Ios,
    Android,
    Other,
}

impl Platform {
    /// Classify a user-agent string. iOS wins when both patterns match.
    pub fn detect(user_agent: &str) -> Self {
        if IOS_AGENT.is_match(user_agent) {
            Platform::Ios
        } else if ANDROID_AGENT.is_match(user_agent) {
            Platform::Android
        } else {
            Platform::Other
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Ios => write!(f, "iOS"),
            Platform::Android => write!(f, "Android"),
            Platform::Other => write!(f, "other"),
        }
    }
}

/// What to do for one `open_channel` call.
///
/// The native attempt and the fallback are independent actions with no
/// result channel between them: the fallback fires after the grace period
/// whether or not the app took over, so a successful handoff can still be
/// followed by a redundant browser tab if the OS did not navigate away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub platform: Platform,
    /// URI handed to the current context to wake the native app
    pub native_uri: Option<String>,
    /// Generic web URL opened in a new context
    pub web_url: String,
    /// Delay before the web URL is opened; `None` opens it immediately
    pub fallback_delay: Option<Duration>,
}

impl LaunchPlan {
    pub fn for_platform(channel: &ChannelConfig, platform: Platform) -> Self {
        let native_uri = match platform {
            Platform::Ios => Some(format!("{}://{}", channel.app_scheme, channel.handle)),
            Platform::Android => Some(format!(
                "intent://{}#Intent;scheme=https;package={};action=android.intent.action.VIEW;end;",
                channel.handle, channel.android_package
            )),
            Platform::Other => None,
        };

        let fallback_delay = native_uri.as_ref().map(|_| FALLBACK_GRACE);

        Self {
            platform,
            native_uri,
            web_url: channel.web_url.clone(),
            fallback_delay,
        }
    }

    /// True when the web fallback may open even though the app opened
    pub fn may_open_redundant_context(&self) -> bool {
        self.native_uri.is_some()
    }
}

/// Browser-side effects needed to leave the page.
pub trait Launcher {
    /// Point the current context at `uri` (custom scheme, intent, mailto)
    fn navigate(&self, uri: &str);

    /// Open `url` in a new browsing context
    fn open_in_new_context(&self, url: &str);

    /// Open `url` in a new context after `delay`. Never cancelled.
    fn open_in_new_context_after(&self, url: &str, delay: Duration);
}

/// Hands navigation to the channel's native app, with a web fallback.
#[derive(Debug, Clone)]
pub struct DeepLinkDispatcher {
    channel: ChannelConfig,
}

impl DeepLinkDispatcher {
    pub fn new(channel: ChannelConfig) -> Self {
        Self { channel }
    }

    pub fn channel(&self) -> &ChannelConfig {
        &self.channel
    }

    pub fn plan(&self, user_agent: &str) -> LaunchPlan {
        LaunchPlan::for_platform(&self.channel, Platform::detect(user_agent))
    }

    /// Attempt the native app for the agent's platform and schedule the web
    /// fallback. Returns the plan that was carried out.
    pub fn open_channel(&self, user_agent: &str, launcher: &dyn Launcher) -> LaunchPlan {
        let plan = self.plan(user_agent);
        log::debug!(
            "opening channel {} on {} (native: {:?})",
            self.channel.handle,
            plan.platform,
            plan.native_uri
        );

        if let Some(uri) = &plan.native_uri {
            launcher.navigate(uri);
        }

        match plan.fallback_delay {
            Some(delay) => launcher.open_in_new_context_after(&plan.web_url, delay),
            None => launcher.open_in_new_context(&plan.web_url),
        }

        plan
    }
}
