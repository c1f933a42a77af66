//local shortcuts

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

pub const DEFAULT_BRIDGE_NAME: &str = "boot";
pub const DEFAULT_REPORT_CALL: &str = "prepare( webgl(), webaudio(), false )";

//-------------------------------------------------------------------------------------------------------------------

/// The script injected into the probe page.
///
/// Detection code runs first, then the bridge's report entry point is called with its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest
{
    /// Opaque detection routine; must define whatever the entry point expression calls.
    pub detection_source: String,
    /// Report call expression, e.g. `prepare( webgl(), webaudio(), false )`.
    pub entry_point: String,
}

impl ProbeRequest
{
    pub fn new(detection_source: impl Into<String>, entry_point: impl Into<String>) -> Self
    {
        Self{ detection_source: detection_source.into(), entry_point: entry_point.into() }
    }

    /// Renders the request as a single script: `<detection><bridge>.<entry point>;`.
    pub fn script(&self, bridge_name: &str) -> String
    {
        let mut script = String::with_capacity(
            self.detection_source.len() + bridge_name.len() + self.entry_point.len() + 2
        );
        script.push_str(&self.detection_source);
        script.push_str(bridge_name);
        script.push('.');
        script.push_str(&self.entry_point);
        script.push(';');
        script
    }
}

//-------------------------------------------------------------------------------------------------------------------
