//local shortcuts
use crate::*;
use rmmv_player_utils::MessageReceiver;

//third-party shortcuts
use url::Url;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Record of the real content load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLaunch
{
    pub url: Url,
    /// `false` if negotiation was skipped and the default URL was loaded.
    pub negotiated: bool,
}

//-------------------------------------------------------------------------------------------------------------------

/// The view's owning execution context.
///
/// Owns the view, the task queue feeding it, and at most one [`BridgeController`]. Tasks posted from other threads
/// only run inside [`Self::run_pending`], so the host must call it from the thread that owns the view (e.g. once
/// per frame of its UI loop).
#[derive(Debug)]
pub struct ViewContext<V: EmbeddedView>
{
    view: V,
    controller: Option<BridgeController>,
    poster: ViewPoster,
    tasks: MessageReceiver<ViewTask>,
    content_url: Option<Url>,
    unclaimed_launch: Option<ContentLaunch>,
}

impl<V: EmbeddedView> ViewContext<V>
{
    /// Makes a context; `make_view` receives the poster the view should use to signal load completion.
    pub fn new(make_view: impl FnOnce(ViewPoster) -> V) -> Self
    {
        let (poster, tasks) = new_view_task_queue();
        let view = make_view(poster.clone());
        Self{ view, controller: None, poster, tasks, content_url: None, unclaimed_launch: None }
    }

    /// Starts a negotiation on the view.
    ///
    /// Ignored if content was already loaded or a negotiation exists.
    pub fn negotiate(&mut self, pack: BootstrapPack)
    {
        if self.controller.is_some() || self.content_url.is_some()
        {
            tracing::warn!("ignoring negotiation request, the view is already bootstrapped");
            return;
        }

        let mut controller = BridgeController::new(pack, self.poster.clone());
        controller.begin(&mut self.view);
        self.controller = Some(controller);
    }

    /// Loads the default content URL without negotiating.
    ///
    /// Ignored if content was already loaded or a negotiation exists.
    pub fn load_default(&mut self, pack: &BootstrapPack)
    {
        if self.controller.is_some() || self.content_url.is_some()
        {
            tracing::warn!("ignoring direct load, the view is already bootstrapped");
            return;
        }

        let url = pack.default_content_url();
        self.view.load_url(&url);
        self.record_launch(url, false);
    }

    /// Forwards the view's "content loaded" signal to the negotiation, if any.
    pub fn on_view_ready(&self)
    {
        if let Some(controller) = &self.controller { controller.on_view_ready(); }
    }

    /// Runs every queued task, including tasks queued while running.
    ///
    /// Returns the number of tasks handled.
    pub fn run_pending(&mut self) -> usize
    {
        let mut handled = 0usize;
        while let Some(task) = self.tasks.try_get_next()
        {
            handled += 1;
            let Some(controller) = self.controller.as_mut()
            else
            {
                tracing::debug!(?task, "dropping view task, no negotiation is running");
                continue;
            };
            if let Some(url) = controller.handle_task(&mut self.view, task)
            {
                self.record_launch(url, true);
            }
        }
        handled
    }

    /// Takes the launch record the first time it is available.
    pub fn take_launch(&mut self) -> Option<ContentLaunch>
    {
        self.unclaimed_launch.take()
    }

    pub fn is_negotiating(&self) -> bool
    {
        self.controller.is_some()
    }

    /// Phase of the negotiation, or `None` if negotiation was skipped.
    pub fn phase(&self) -> Option<NegotiationPhase>
    {
        self.controller.as_ref().map(|c| c.phase())
    }

    /// URL of the real content, once loaded.
    pub fn content_url(&self) -> Option<&Url>
    {
        self.content_url.as_ref()
    }

    pub fn poster(&self) -> ViewPoster
    {
        self.poster.clone()
    }

    pub fn view(&self) -> &V
    {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V
    {
        &mut self.view
    }

    fn record_launch(&mut self, url: Url, negotiated: bool)
    {
        tracing::info!(%url, negotiated, "game content launched");
        self.content_url = Some(url.clone());
        self.unclaimed_launch = Some(ContentLaunch{ url, negotiated });
    }
}

//-------------------------------------------------------------------------------------------------------------------
