//local shortcuts
use rmmv_player_bootstrap::*;

//third-party shortcuts
use url::Url;

//standard shortcuts
use std::collections::HashMap;
use std::thread::JoinHandle;

//-------------------------------------------------------------------------------------------------------------------

/// An operation performed on a [`SimulatedView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewOp
{
    AddBridge(String),
    RemoveBridge(String),
    LoadData(String),
    LoadUrl(Url),
    EvaluateScript(String),
}

//-------------------------------------------------------------------------------------------------------------------

/// How the simulated script context delivers its report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ReportDelivery
{
    /// Call the bridge from inside `evaluate_script`.
    Inline,
    /// Call the bridge from a new thread, like a script engine with its own bridge thread.
    Threaded,
    /// Never call the bridge.
    Silent,
}

//-------------------------------------------------------------------------------------------------------------------

/// Joins report threads and counts the accepted reports.
///
/// Every thread is joined even after a failure. Returns `Err` if any of them panicked.
pub fn join_report_threads(reporters: impl IntoIterator<Item = JoinHandle<bool>>) -> Result<usize, ()>
{
    let mut accepted = 0;
    let mut panicked = 0;
    for reporter in reporters
    {
        match reporter.join()
        {
            Ok(true)  => accepted += 1,
            Ok(false) => (),
            Err(_)    => panicked += 1,
        }
    }

    if panicked > 0
    {
        tracing::error!(panicked, accepted, "simulated report thread panicked");
        return Err(());
    }
    Ok(accepted)
}

//-------------------------------------------------------------------------------------------------------------------

/// Headless [`EmbeddedView`] with a scripted detection result.
///
/// Every finished load posts a content-loaded signal, and evaluating a script that invokes a registered bridge
/// makes that bridge report `capabilities`.
#[derive(Debug)]
pub struct SimulatedView
{
    poster: ViewPoster,
    capabilities: CapabilityReport,
    delivery: ReportDelivery,
    bridges: HashMap<String, BridgeHandle>,
    ops: Vec<ViewOp>,
    reporters: Vec<JoinHandle<bool>>,
}

impl SimulatedView
{
    pub fn new(poster: ViewPoster, capabilities: CapabilityReport, delivery: ReportDelivery) -> Self
    {
        Self{
            poster,
            capabilities,
            delivery,
            bridges: HashMap::default(),
            ops: Vec::default(),
            reporters: Vec::default(),
        }
    }

    /// Operations in the order they were performed.
    pub fn ops(&self) -> &[ViewOp]
    {
        &self.ops
    }

    /// URLs loaded so far.
    pub fn loaded_urls(&self) -> Vec<Url>
    {
        self.ops.iter()
            .filter_map(|op| match op { ViewOp::LoadUrl(url) => Some(url.clone()), _ => None })
            .collect()
    }

    /// Bridge currently exposed under `name`.
    pub fn bridge(&self, name: &str) -> Option<&BridgeHandle>
    {
        self.bridges.get(name)
    }

    /// Waits for threaded reporters to finish.
    ///
    /// Returns how many of them had their report accepted, or `Err` if any reporter panicked.
    pub fn join_reporters(&mut self) -> Result<usize, ()>
    {
        join_report_threads(self.reporters.drain(..))
    }

    fn finish_load(&self)
    {
        let _ = self.poster.content_loaded();
    }
}

impl EmbeddedView for SimulatedView
{
    fn add_bridge(&mut self, bridge: BridgeHandle)
    {
        self.ops.push(ViewOp::AddBridge(bridge.name().to_string()));
        self.bridges.insert(bridge.name().to_string(), bridge);
    }

    fn remove_bridge(&mut self, name: &str)
    {
        self.ops.push(ViewOp::RemoveBridge(name.to_string()));
        self.bridges.remove(name);
    }

    fn load_data(&mut self, document: &str)
    {
        self.ops.push(ViewOp::LoadData(document.to_string()));
        self.finish_load();
    }

    fn load_url(&mut self, url: &Url)
    {
        self.ops.push(ViewOp::LoadUrl(url.clone()));
        self.finish_load();
    }

    fn evaluate_script(&mut self, script: &str)
    {
        self.ops.push(ViewOp::EvaluateScript(script.to_string()));

        let caps = self.capabilities;
        for (name, bridge) in self.bridges.iter()
        {
            if !script.contains(&format!("{name}.")) { continue; }

            match self.delivery
            {
                ReportDelivery::Inline =>
                {
                    let _ = bridge.report(caps.webgl, caps.webaudio, caps.show_fps);
                }
                ReportDelivery::Threaded =>
                {
                    let bridge = bridge.clone();
                    self.reporters.push(std::thread::spawn(
                        move || bridge.report(caps.webgl, caps.webaudio, caps.show_fps)
                    ));
                }
                ReportDelivery::Silent => tracing::debug!(bridge_name = %name, "simulated script context stays silent"),
            }
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------
