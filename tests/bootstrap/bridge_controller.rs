//local shortcuts
use crate::test_helpers::*;
use rmmv_player_bootstrap::*;
use rmmv_player_host::ViewOp;

//third-party shortcuts

//standard shortcuts
use std::sync::{Arc, Barrier};

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn begin_registers_bridge_and_loads_placeholder()
{
    let context = launch(test_pack(), MODERN_PLATFORM, RecordingView::new);

    assert!(context.is_negotiating());
    assert_eq!(context.phase(), Some(NegotiationPhase::Probing));
    assert_eq!(context.view().ops, vec![
            ViewOp::AddBridge(String::from(DEFAULT_BRIDGE_NAME)),
            ViewOp::LoadData(String::from(TEST_PAGE)),
        ]);
    assert!(context.view().bridge(DEFAULT_BRIDGE_NAME).is_pending());
    assert!(context.content_url().is_none());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn probe_is_deferred_to_owning_context()
{
    let mut context = launch(test_pack(), MODERN_PLATFORM, RecordingView::new);

    // the ready signal only queues the probe
    context.on_view_ready();
    assert!(context.view().evaluated_scripts().is_empty());

    assert_eq!(context.run_pending(), 1);
    assert_eq!(context.view().evaluated_scripts(), vec![String::from(TEST_PROBE_SCRIPT)]);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn content_loaded_signal_from_other_thread()
{
    let mut context = launch(test_pack(), MODERN_PLATFORM, RecordingView::new);

    let poster = context.poster();
    std::thread::spawn(move || poster.content_loaded().expect("owning context should be alive"))
        .join()
        .unwrap();

    // ContentLoaded, then the probe it posted
    assert_eq!(context.run_pending(), 2);
    assert_eq!(context.view().evaluated_scripts(), vec![String::from(TEST_PROBE_SCRIPT)]);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn report_finalizes_on_owning_context()
{
    let mut context = probing_context();
    let bridge = context.view().bridge(DEFAULT_BRIDGE_NAME);

    assert!(bridge.report(true, true, false));
    assert_eq!(context.phase(), Some(NegotiationPhase::Reporting));
    assert!(!bridge.is_pending());

    // nothing happens to the view until the finalize task runs
    assert!(context.view().loaded_urls().is_empty());
    assert!(context.content_url().is_none());

    assert_eq!(context.run_pending(), 1);
    assert_eq!(context.phase(), Some(NegotiationPhase::Finalized));
    assert_eq!(context.content_url().map(|u| u.as_str()), Some(test_url("webgl").as_str()));

    // bridge removed before the content load
    let ops = &context.view().ops;
    assert_eq!(ops[ops.len() - 2], ViewOp::RemoveBridge(String::from(DEFAULT_BRIDGE_NAME)));
    assert_eq!(ops[ops.len() - 1], ViewOp::LoadUrl(url::Url::parse(&test_url("webgl")).unwrap()));
    assert!(context.view().bridges.is_empty());

    let launch = context.take_launch().expect("launch should be recorded");
    assert!(launch.negotiated);
    assert_eq!(launch.url.as_str(), test_url("webgl"));
    assert!(context.take_launch().is_none());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn report_with_nothing_detected()
{
    let mut context = probing_context();
    assert!(context.view().bridge(DEFAULT_BRIDGE_NAME).report(false, false, false));
    context.run_pending();

    assert_eq!(context.view().loaded_urls().len(), 1);
    assert_eq!(context.view().loaded_urls()[0].as_str(), test_url("noaudio"));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn second_report_is_ignored()
{
    let mut context = probing_context();
    let bridge = context.view().bridge(DEFAULT_BRIDGE_NAME);

    assert!(bridge.report(true, false, false));
    context.run_pending();
    let loaded = context.view().loaded_urls();
    assert_eq!(loaded.len(), 1);

    // a late report from a stale handle
    assert!(!bridge.report(false, true, true));
    assert_eq!(context.run_pending(), 0);

    assert_eq!(context.view().loaded_urls(), loaded);
    assert_eq!(context.content_url(), Some(&loaded[0]));
    assert_eq!(context.phase(), Some(NegotiationPhase::Finalized));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn duplicate_report_before_finalize_is_ignored()
{
    let mut context = probing_context();
    let bridge = context.view().bridge(DEFAULT_BRIDGE_NAME);

    assert!(bridge.report(true, true, true));
    assert!(!bridge.report(false, false, false));

    assert_eq!(context.run_pending(), 1);
    assert_eq!(context.view().loaded_urls().len(), 1);
    assert_eq!(context.view().loaded_urls()[0].as_str(), test_url("webgl&showfps"));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn racing_reports_load_once()
{
    // prepare tracing
    prepare_tracing();

    let mut context = probing_context();
    let bridge = context.view().bridge(DEFAULT_BRIDGE_NAME);

    let num_reporters = 8;
    let barrier = Arc::new(Barrier::new(num_reporters));
    let reporters: Vec<_> = (0..num_reporters)
        .map(|i| {
            let bridge = bridge.clone();
            let barrier = barrier.clone();
            std::thread::spawn(move || {
                barrier.wait();
                bridge.report(i % 2 == 0, true, false)
            })
        })
        .collect();
    let accepted = reporters.into_iter().map(|r| r.join().unwrap()).filter(|a| *a).count();
    assert_eq!(accepted, 1);

    assert_eq!(context.run_pending(), 1);
    assert_eq!(context.view().loaded_urls().len(), 1);
    assert_eq!(context.phase(), Some(NegotiationPhase::Finalized));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn content_loaded_after_finalize_does_not_probe_again()
{
    let mut context = probing_context();
    context.view().bridge(DEFAULT_BRIDGE_NAME).report(true, true, false);
    context.run_pending();

    // the real content finishing its load
    context.poster().content_loaded().unwrap();
    context.on_view_ready();
    assert_eq!(context.run_pending(), 1);

    assert_eq!(context.view().evaluated_scripts().len(), 1);
    assert_eq!(context.view().loaded_urls().len(), 1);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn stale_probe_is_dropped_after_finalize()
{
    let mut context = probing_context();
    context.view().bridge(DEFAULT_BRIDGE_NAME).report(true, true, false);
    context.run_pending();

    context.poster().post(ViewTask::EvaluateProbe(String::from(TEST_PROBE_SCRIPT))).unwrap();
    assert_eq!(context.run_pending(), 1);
    assert_eq!(context.view().evaluated_scripts().len(), 1);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn finalize_without_live_token_is_rejected()
{
    // prepare tracing
    prepare_tracing();

    let mut context = probing_context();
    let bridge = context.view().bridge(DEFAULT_BRIDGE_NAME);

    context.poster()
        .post(ViewTask::Finalize{ bridge_id: bridge.id() + 1000, report: CapabilityReport::new(true, true, true) })
        .unwrap();
    assert_eq!(context.run_pending(), 1);

    assert!(context.view().loaded_urls().is_empty());
    assert_eq!(context.phase(), Some(NegotiationPhase::Probing));
    assert!(bridge.is_pending());

    // the real bridge still works
    assert!(bridge.report(false, true, false));
    context.run_pending();
    assert_eq!(context.view().loaded_urls().len(), 1);
    assert_eq!(context.view().loaded_urls()[0].as_str(), TEST_INDEX);
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn forged_finalize_after_finalize_is_rejected()
{
    let mut context = probing_context();
    let bridge = context.view().bridge(DEFAULT_BRIDGE_NAME);
    bridge.report(true, true, false);
    context.run_pending();

    context.poster()
        .post(ViewTask::Finalize{ bridge_id: bridge.id(), report: CapabilityReport::new(false, false, true) })
        .unwrap();
    assert_eq!(context.run_pending(), 1);

    assert_eq!(context.view().loaded_urls().len(), 1);
    assert_eq!(context.content_url().map(|u| u.as_str()), Some(test_url("webgl").as_str()));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn missing_report_stalls_silently()
{
    let mut context = probing_context();

    for _ in 0..10
    {
        assert_eq!(context.run_pending(), 0);
    }

    assert_eq!(context.phase(), Some(NegotiationPhase::Probing));
    assert!(context.content_url().is_none());
    assert!(context.take_launch().is_none());
    assert!(context.view().loaded_urls().is_empty());
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn second_negotiation_is_ignored()
{
    let mut context = launch(test_pack(), MODERN_PLATFORM, RecordingView::new);
    context.negotiate(test_pack());
    context.load_default(&test_pack());

    assert_eq!(context.view().ops.len(), 2);
    assert_eq!(context.phase(), Some(NegotiationPhase::Probing));
}

//-------------------------------------------------------------------------------------------------------------------

#[test]
fn fresh_context_is_idle()
{
    let mut context = ViewContext::new(RecordingView::new);
    assert!(!context.is_negotiating());
    assert_eq!(context.phase(), None);

    // tasks without a negotiation are dropped
    context.poster().content_loaded().unwrap();
    assert_eq!(context.run_pending(), 1);
    assert!(context.view().ops.is_empty());
}

//-------------------------------------------------------------------------------------------------------------------
