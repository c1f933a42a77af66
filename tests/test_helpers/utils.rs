//local shortcuts
use crate::test_helpers::RecordingView;
use rmmv_player_bootstrap::*;
use rmmv_player_utils::ScriptSource;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

pub const TEST_INDEX: &str = "file:///android_asset/www/index.html";
pub const TEST_DETECTION: &str = "detect();";
pub const TEST_PAGE: &str = "<html><body>probe</body></html>";

/// Detection source plus the default bridge call, as evaluated in the probe page.
pub const TEST_PROBE_SCRIPT: &str = "detect();boot.prepare( webgl(), webaudio(), false );";

/// Platform level that supports bridge objects.
pub const MODERN_PLATFORM: PlatformLevel = PlatformLevel(21);
/// Platform level below the bridge threshold.
pub const LEGACY_PLATFORM: PlatformLevel = PlatformLevel(16);

//-------------------------------------------------------------------------------------------------------------------

pub fn test_config() -> BootstrapConfig
{
    BootstrapConfig{
        project_index    : String::from(TEST_INDEX),
        detection_source : ScriptSource::Text(String::from(TEST_DETECTION)),
        default_page     : ScriptSource::Text(String::from(TEST_PAGE)),
        ..Default::default()
    }
}

//-------------------------------------------------------------------------------------------------------------------

pub fn test_pack() -> BootstrapPack
{
    test_config().into_pack().expect("test config should resolve")
}

//-------------------------------------------------------------------------------------------------------------------

pub fn test_url(query: &str) -> String
{
    if query.is_empty() { return String::from(TEST_INDEX); }
    format!("{TEST_INDEX}?{query}")
}

//-------------------------------------------------------------------------------------------------------------------

/// Launch on a modern platform and evaluate the probe.
pub fn probing_context() -> ViewContext<RecordingView>
{
    let mut context = launch(test_pack(), MODERN_PLATFORM, RecordingView::new);
    context.on_view_ready();
    assert_eq!(context.run_pending(), 1);
    context
}

//-------------------------------------------------------------------------------------------------------------------

/// Installs a test-friendly subscriber; filter with `RUST_LOG`.
///
/// Safe to call from every test, only the first call installs anything.
pub fn prepare_tracing()
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//-------------------------------------------------------------------------------------------------------------------
