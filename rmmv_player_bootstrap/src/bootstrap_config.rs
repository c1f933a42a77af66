//local shortcuts
use crate::*;
use rmmv_player_utils::ScriptSource;

//third-party shortcuts
use serde::{Deserialize, Serialize};
use url::Url;

//standard shortcuts
use std::path::Path;

//-------------------------------------------------------------------------------------------------------------------

pub const DEFAULT_PROJECT_INDEX: &str = "file:///android_asset/www/index.html";

/// Placeholder document used when none is configured; detection only needs a live script context.
pub const DEFAULT_PLACEHOLDER_PAGE: &str = "<!DOCTYPE html><html><head><meta charset=\"utf-8\"></head><body></body></html>";

//-------------------------------------------------------------------------------------------------------------------

/// Player bootstrap configuration, as shipped with the app.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig
{
    /// URL of the game's `index.html`.
    pub project_index: String,
    /// Name of the bridge object in the script context.
    pub bridge_name: String,
    /// Report call expression evaluated after the detection source.
    pub report_call: String,
    pub query_flags: QueryFlags,
    /// Feature detection routine.
    pub detection_source: ScriptSource,
    /// Placeholder document loaded during negotiation.
    pub default_page: ScriptSource,
    /// Platforms below this level skip negotiation.
    pub min_bridge_level: u32,
}

impl BootstrapConfig
{
    pub fn from_json_str(json: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync + 'static>>
    {
        Ok(serde_json::from_str::<Self>(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error + Send + Sync + 'static>>
    {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Parses [`Self::project_index`].
    pub fn content_base(&self) -> Result<Url, url::ParseError>
    {
        Url::parse(&self.project_index)
    }

    /// Decodes the detection source and pairs it with the report call.
    pub fn probe_request(&self) -> Result<ProbeRequest, ()>
    {
        let detection_source = self.detection_source.decode()?;
        Ok(ProbeRequest::new(detection_source, self.report_call.clone()))
    }

    /// Resolves the config into a [`BootstrapPack`].
    ///
    /// Fails if the project index is not a URL or a payload cannot be decoded.
    pub fn into_pack(self) -> Result<BootstrapPack, ()>
    {
        let base_uri = match self.content_base()
        {
            Ok(base_uri) => base_uri,
            Err(err) =>
            {
                tracing::warn!(project_index = %self.project_index, ?err, "failed parsing project index url");
                return Err(());
            }
        };
        let probe = self.probe_request()?;
        let default_page = self.default_page.decode()?;
        let default_page = if default_page.is_empty() { String::from(DEFAULT_PLACEHOLDER_PAGE) } else { default_page };

        Ok(BootstrapPack{
            base_uri,
            bridge_name: self.bridge_name,
            probe,
            default_page,
            query_flags: self.query_flags,
            min_bridge_level: self.min_bridge_level,
        })
    }
}

impl Default for BootstrapConfig
{
    fn default() -> Self
    {
        Self{
            project_index    : String::from(DEFAULT_PROJECT_INDEX),
            bridge_name      : String::from(DEFAULT_BRIDGE_NAME),
            report_call      : String::from(DEFAULT_REPORT_CALL),
            query_flags      : QueryFlags::default(),
            detection_source : ScriptSource::default(),
            default_page     : ScriptSource::default(),
            min_bridge_level : DEFAULT_MIN_BRIDGE_LEVEL,
        }
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Everything needed to run one negotiation, with payloads decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPack
{
    /// Content URL before any flags are appended.
    pub base_uri: Url,
    pub bridge_name: String,
    pub probe: ProbeRequest,
    /// Placeholder document.
    pub default_page: String,
    pub query_flags: QueryFlags,
    pub min_bridge_level: u32,
}

impl BootstrapPack
{
    /// URL loaded when negotiation is skipped.
    ///
    /// Audio support cannot be verified in that case, so the no-audio flag is always set.
    pub fn default_content_url(&self) -> Url
    {
        append_query(self.base_uri.clone(), &self.query_flags.no_audio)
    }
}

//-------------------------------------------------------------------------------------------------------------------
