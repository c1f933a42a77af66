//local shortcuts
use crate::BridgeHandle;

//third-party shortcuts
use url::Url;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Host-side embedded web view.
///
/// Every method is called on the view's owning execution context. The operations are fire-and-forget; a view
/// reports load completion by posting [`ViewTask::ContentLoaded`](crate::ViewTask::ContentLoaded) through a
/// [`ViewPoster`](crate::ViewPoster).
pub trait EmbeddedView
{
    /// Expose `bridge` to the script context under [`BridgeHandle::name`].
    fn add_bridge(&mut self, bridge: BridgeHandle);
    /// Remove the bridge object named `name`.
    fn remove_bridge(&mut self, name: &str);
    /// Load an inline HTML document.
    fn load_data(&mut self, document: &str);
    fn load_url(&mut self, url: &Url);
    fn evaluate_script(&mut self, script: &str);
}

impl<V: EmbeddedView + ?Sized> EmbeddedView for Box<V>
{
    fn add_bridge(&mut self, bridge: BridgeHandle) { (**self).add_bridge(bridge) }
    fn remove_bridge(&mut self, name: &str) { (**self).remove_bridge(name) }
    fn load_data(&mut self, document: &str) { (**self).load_data(document) }
    fn load_url(&mut self, url: &Url) { (**self).load_url(url) }
    fn evaluate_script(&mut self, script: &str) { (**self).evaluate_script(script) }
}

//-------------------------------------------------------------------------------------------------------------------
