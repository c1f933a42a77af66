//local shortcuts

//third-party shortcuts
use base64::Engine;
use serde::{Deserialize, Serialize};

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// An injected script or document payload, as it appears in app configuration.
///
/// Shell resources usually ship the payloads base64-encoded so they survive resource-string escaping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptSource
{
    /// Plain UTF-8 text.
    Text(String),
    /// Standard base64 (padding optional) over UTF-8 text.
    Base64(String),
}

impl ScriptSource
{
    /// Get the payload's text.
    ///
    /// Fails if a base64 payload is malformed or does not decode to UTF-8.
    pub fn decode(&self) -> Result<String, ()>
    {
        match self
        {
            Self::Text(text) => Ok(text.clone()),
            Self::Base64(encoded) =>
            {
                // resource strings are often wrapped, so line breaks are ignored
                let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
                let Ok(bytes) = base64::engine::general_purpose::STANDARD_NO_PAD.decode(compact.trim_end_matches('='))
                else
                {
                    tracing::warn!("failed decoding base64 script payload");
                    return Err(());
                };
                let Ok(text) = String::from_utf8(bytes)
                else
                {
                    tracing::warn!("base64 script payload is not valid utf-8");
                    return Err(());
                };
                Ok(text)
            }
        }
    }
}

impl Default for ScriptSource
{
    fn default() -> Self
    {
        Self::Text(String::default())
    }
}

//-------------------------------------------------------------------------------------------------------------------
