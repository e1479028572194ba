mod common;

use common::{VirtualLauncher, ANDROID_AGENT, DESKTOP_AGENT, IPHONE_AGENT};
use xmode_core::{DeepLinkDispatcher, Platform, SiteConfig};

fn dispatcher() -> DeepLinkDispatcher {
    let config = SiteConfig::load().expect("embedded config");
    DeepLinkDispatcher::new(config.channel)
}

#[test]
fn test_android_always_opens_web_within_grace_period() {
    let dispatcher = dispatcher();
    let launcher = VirtualLauncher::new();

    let plan = dispatcher.open_channel(ANDROID_AGENT, &launcher);
    assert_eq!(plan.platform, Platform::Android);

    let navigations = launcher.navigations();
    assert_eq!(navigations.len(), 1);
    assert!(navigations[0].starts_with("intent://@x_mode798#Intent;"));
    assert!(navigations[0].contains("package=com.google.android.youtube"));
    assert!(launcher.opened_urls().is_empty());

    launcher.advance(499);
    assert!(launcher.opened_urls().is_empty());

    launcher.advance(1);
    assert_eq!(
        launcher.opened_urls(),
        vec![(500, dispatcher.channel().web_url.clone())]
    );
    assert_eq!(launcher.pending(), 0);
}

#[test]
fn test_ios_attempts_scheme_then_falls_back() {
    let dispatcher = dispatcher();
    let launcher = VirtualLauncher::new();

    dispatcher.open_channel(IPHONE_AGENT, &launcher);
    assert_eq!(launcher.navigations(), vec!["youtube://@x_mode798".to_string()]);

    launcher.advance(10_000);
    let opened = launcher.opened_urls();
    assert_eq!(opened.len(), 1);
    assert_eq!(opened[0].0, 500);
}

#[test]
fn test_desktop_opens_web_immediately() {
    let dispatcher = dispatcher();
    let launcher = VirtualLauncher::new();

    let plan = dispatcher.open_channel(DESKTOP_AGENT, &launcher);
    assert_eq!(plan.platform, Platform::Other);
    assert!(launcher.navigations().is_empty());
    assert_eq!(
        launcher.opened_urls(),
        vec![(0, "https://youtube.com/@x_mode798?si=iyxMKb6fuEp9hQ-G".to_string())]
    );
    assert_eq!(launcher.pending(), 0);
}

#[test]
fn test_repeated_taps_schedule_independent_fallbacks() {
    let dispatcher = dispatcher();
    let launcher = VirtualLauncher::new();

    dispatcher.open_channel(ANDROID_AGENT, &launcher);
    launcher.advance(200);
    dispatcher.open_channel(ANDROID_AGENT, &launcher);
    assert_eq!(launcher.pending(), 2);

    launcher.advance(800);
    let times: Vec<u64> = launcher.opened_urls().iter().map(|(at, _)| *at).collect();
    assert_eq!(times, vec![500, 700]);
}
