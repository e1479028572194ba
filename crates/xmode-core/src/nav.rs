use std::fmt;
use std::str::FromStr;

/// The content views of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PageId {
    #[default]
    Home,
    Projects,
    Store,
    About,
}

impl PageId {
    pub const ALL: [PageId; 4] = [PageId::Home, PageId::Projects, PageId::Store, PageId::About];

    pub fn slug(self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::Projects => "projects",
            PageId::Store => "store",
            PageId::About => "about",
        }
    }

    /// Label shown in the footer navigation bar
    pub fn label(self) -> &'static str {
        match self {
            PageId::Home => "الرئيسية",
            PageId::Projects => "المشاريع",
            PageId::Store => "المتجر",
            PageId::About => "من أنا؟",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for PageId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.slug() == s)
            .ok_or_else(|| format!("Unknown page: {}. Available: home, projects, store, about", s))
    }
}

/// Entry of the sticky footer navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Page(PageId),
    /// Opens the video channel through the deep-link dispatcher
    Channel,
}

impl NavItem {
    /// Footer order, right to left on screen
    pub const FOOTER: [NavItem; 5] = [
        NavItem::Page(PageId::About),
        NavItem::Channel,
        NavItem::Page(PageId::Home),
        NavItem::Page(PageId::Projects),
        NavItem::Page(PageId::Store),
    ];

    pub fn key(self) -> &'static str {
        match self {
            NavItem::Page(page) => page.slug(),
            NavItem::Channel => "youtube",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavItem::Page(page) => page.label(),
            NavItem::Channel => "YouTube",
        }
    }

    pub fn is_active(self, current: PageId) -> bool {
        self == NavItem::Page(current)
    }
}

/// The scrollable area the pages are rendered into.
pub trait Viewport {
    /// Smoothly scroll back to the top-left origin
    fn scroll_to_origin(&self);
}

/// Holds the page currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Navigator {
    current: PageId,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    /// Switch to `page` and scroll the viewport back to the origin. The
    /// scroll is issued on every call, including when `page` is already
    /// current.
    pub fn navigate_to(&mut self, page: PageId, viewport: &dyn Viewport) {
        log::debug!("navigating from {} to {}", self.current, page);
        self.current = page;
        viewport.scroll_to_origin();
    }
}
