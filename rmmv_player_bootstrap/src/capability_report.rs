//local shortcuts
use crate::append_query;

//third-party shortcuts
use serde::{Deserialize, Serialize};
use url::Url;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

pub const DEFAULT_QUERY_WEBGL: &str = "webgl";
pub const DEFAULT_QUERY_NO_AUDIO: &str = "noaudio";
pub const DEFAULT_QUERY_SHOW_FPS: &str = "showfps";

//-------------------------------------------------------------------------------------------------------------------

/// Query tokens appended to the content URL.
///
/// The spelling belongs to the game runtime, which reads them back out of `location.search`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryFlags
{
    /// Appended when WebGL is available.
    pub webgl: String,
    /// Appended when WebAudio is *not* available.
    pub no_audio: String,
    /// Appended when the FPS overlay was requested.
    pub show_fps: String,
}

impl Default for QueryFlags
{
    fn default() -> Self
    {
        Self{
            webgl    : String::from(DEFAULT_QUERY_WEBGL),
            no_audio : String::from(DEFAULT_QUERY_NO_AUDIO),
            show_fps : String::from(DEFAULT_QUERY_SHOW_FPS),
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Result of feature detection inside the embedded script context.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityReport
{
    pub webgl: bool,
    pub webaudio: bool,
    pub show_fps: bool,
}

impl CapabilityReport
{
    pub fn new(webgl: bool, webaudio: bool, show_fps: bool) -> Self
    {
        Self{ webgl, webaudio, show_fps }
    }

    /// Builds the content URL for this report.
    ///
    /// Flags are independent and always appended in the order webgl, no-audio, show-fps.
    pub fn apply(&self, base: Url, flags: &QueryFlags) -> Url
    {
        let mut uri = base;
        if self.webgl     { uri = append_query(uri, &flags.webgl); }
        if !self.webaudio { uri = append_query(uri, &flags.no_audio); }
        if self.show_fps  { uri = append_query(uri, &flags.show_fps); }
        uri
    }
}

//-------------------------------------------------------------------------------------------------------------------
