//! State and behaviour behind the X-MODE portfolio site.
//!
//! Everything here is independent of the browser. The front end plugs in
//! through [`nav::Viewport`] and [`deeplink::Launcher`] and feeds
//! intersection samples and frame timestamps into [`reveal`] and
//! [`counter`].

pub mod config;
pub mod counter;
pub mod deeplink;
pub mod nav;
pub mod notify;
pub mod reveal;
pub mod skeleton;
pub mod skill;
pub mod theme;

pub use config::SiteConfig;
pub use counter::CountUp;
pub use deeplink::{DeepLinkDispatcher, LaunchPlan, Launcher, Platform};
pub use nav::{NavItem, Navigator, PageId, Viewport};
pub use reveal::{IntersectionSample, RevealRegistry, Threshold};
pub use skeleton::SkeletonGate;
pub use skill::SkillBar;
pub use theme::{ThemeMode, ThemeState};
