use sitemap_video_core::{VideoEntry, VideoParameters};

/// Install a subscriber once so `RUST_LOG=sitemap_video_core=debug` shows
/// rejected fields while debugging a test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Parameters with only a player location, the smallest valid set.
pub fn player_params() -> VideoParameters {
    VideoParameters {
        player_location: Some("http://x/player".to_string()),
        ..Default::default()
    }
}

/// Minimal entry: thumbnail `http://x/t.jpg`, title `T`, description `D`.
pub fn minimal_entry() -> VideoEntry {
    init_tracing();
    VideoEntry::new("http://x/t.jpg", "T", "D", player_params()).unwrap()
}
