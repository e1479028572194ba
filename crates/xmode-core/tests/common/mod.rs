#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::time::Duration;

use xmode_core::{Launcher, Viewport};

/// What a launcher was asked to do, stamped with the virtual time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchEvent {
    Navigate { at_ms: u64, uri: String },
    OpenNewContext { at_ms: u64, url: String },
}

/// Launcher backed by a millisecond clock that only moves when told to.
#[derive(Default)]
pub struct VirtualLauncher {
    now_ms: Cell<u64>,
    scheduled: RefCell<Vec<(u64, String)>>,
    pub events: RefCell<Vec<LaunchEvent>>,
}

impl VirtualLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms.get()
    }

    /// Move the clock forward, firing every scheduled open that falls due
    pub fn advance(&self, ms: u64) {
        let target = self.now_ms.get() + ms;
        loop {
            let next = {
                let scheduled = self.scheduled.borrow();
                scheduled
                    .iter()
                    .enumerate()
                    .filter(|(_, (due, _))| *due <= target)
                    .min_by_key(|(_, (due, _))| *due)
                    .map(|(idx, _)| idx)
            };
            let Some(idx) = next else { break };
            let (due, url) = self.scheduled.borrow_mut().remove(idx);
            self.now_ms.set(due);
            self.open_in_new_context(&url);
        }
        self.now_ms.set(target);
    }

    pub fn pending(&self) -> usize {
        self.scheduled.borrow().len()
    }

    pub fn opened_urls(&self) -> Vec<(u64, String)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                LaunchEvent::OpenNewContext { at_ms, url } => Some((*at_ms, url.clone())),
                LaunchEvent::Navigate { .. } => None,
            })
            .collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                LaunchEvent::Navigate { uri, .. } => Some(uri.clone()),
                LaunchEvent::OpenNewContext { .. } => None,
            })
            .collect()
    }
}

impl Launcher for VirtualLauncher {
    fn navigate(&self, uri: &str) {
        self.events.borrow_mut().push(LaunchEvent::Navigate {
            at_ms: self.now_ms.get(),
            uri: uri.to_string(),
        });
    }

    fn open_in_new_context(&self, url: &str) {
        self.events.borrow_mut().push(LaunchEvent::OpenNewContext {
            at_ms: self.now_ms.get(),
            url: url.to_string(),
        });
    }

    fn open_in_new_context_after(&self, url: &str, delay: Duration) {
        let due = self.now_ms.get() + delay.as_millis() as u64;
        self.scheduled.borrow_mut().push((due, url.to_string()));
    }
}

#[derive(Default)]
pub struct CountingViewport {
    pub scrolls: Cell<usize>,
}

impl Viewport for CountingViewport {
    fn scroll_to_origin(&self) {
        self.scrolls.set(self.scrolls.get() + 1);
    }
}

pub const IPHONE_AGENT: &str =
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_5 like Mac OS X) AppleWebKit/605.1.15 Mobile/15E148";
pub const ANDROID_AGENT: &str =
    "Mozilla/5.0 (Linux; Android 13; SM-S911B) AppleWebKit/537.36 Chrome/126.0 Mobile Safari/537.36";
pub const DESKTOP_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 Chrome/126.0 Safari/537.36";
