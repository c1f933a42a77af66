//local shortcuts
use crate::*;

//third-party shortcuts
use url::Url;

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Observable phase of a negotiation.
///
/// Phases only move forward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum NegotiationPhase
{
    /// Constructed, bridge not registered yet.
    Idle,
    /// Bridge registered, waiting for a report.
    Probing,
    /// A report was accepted and the finalize task is queued.
    Reporting,
    /// Bridge removed and content load issued. Terminal.
    Finalized,
}

//-------------------------------------------------------------------------------------------------------------------

#[derive(Debug)]
enum NegotiationState
{
    Idle,
    Probing{ token: BridgeToken },
    Finalized{ content: Url },
}

//-------------------------------------------------------------------------------------------------------------------

/// Drives one capability negotiation on one view.
///
/// All methods except [`Self::on_view_ready`] must be called on the view's owning context. Reports arrive through
/// the [`BridgeHandle`] registered in [`Self::begin`] and are turned into [`ViewTask::Finalize`] tasks; those must
/// be handed back via [`Self::handle_task`].
#[derive(Debug)]
pub struct BridgeController
{
    pack: BootstrapPack,
    poster: ViewPoster,
    state: NegotiationState,
}

impl BridgeController
{
    pub fn new(pack: BootstrapPack, poster: ViewPoster) -> Self
    {
        Self{ pack, poster, state: NegotiationState::Idle }
    }

    pub fn phase(&self) -> NegotiationPhase
    {
        match &self.state
        {
            NegotiationState::Idle                                => NegotiationPhase::Idle,
            NegotiationState::Probing{ token } if token.is_pending() => NegotiationPhase::Probing,
            NegotiationState::Probing{ .. }                       => NegotiationPhase::Reporting,
            NegotiationState::Finalized{ .. }                     => NegotiationPhase::Finalized,
        }
    }

    /// Returns `true` while the bridge object is attached to the view.
    pub fn is_registered(&self) -> bool
    {
        matches!(self.state, NegotiationState::Probing{ .. })
    }

    /// Returns `true` between registration and an accepted report.
    pub fn is_pending(&self) -> bool
    {
        self.phase() == NegotiationPhase::Probing
    }

    /// The content URL, once it has been loaded.
    pub fn content_url(&self) -> Option<&Url>
    {
        match &self.state
        {
            NegotiationState::Finalized{ content } => Some(content),
            _                                      => None,
        }
    }

    /// Registers the bridge and loads the placeholder document.
    ///
    /// Does nothing if the negotiation already started.
    pub fn begin(&mut self, view: &mut dyn EmbeddedView)
    {
        if !matches!(self.state, NegotiationState::Idle)
        {
            tracing::warn!("ignoring begin, negotiation already started");
            return;
        }

        let token = BridgeToken::issue(&self.pack.bridge_name, self.poster.clone());
        tracing::debug!(bridge_id = token.id(), bridge_name = %self.pack.bridge_name, "registering bridge");
        view.add_bridge(token.handle());
        view.load_data(&self.pack.default_page);

        self.state = NegotiationState::Probing{ token };
    }

    /// Schedules the probe script on the owning context.
    ///
    /// Call when the view signals that a document finished loading. Ignored unless the negotiation is waiting for
    /// a report, so the real content's own load signal does not re-run the probe.
    pub fn on_view_ready(&self)
    {
        if self.phase() != NegotiationPhase::Probing
        {
            tracing::debug!(phase = ?self.phase(), "view ready, no probe needed");
            return;
        }

        let script = self.pack.probe.script(&self.pack.bridge_name);
        tracing::debug!("posting probe script");
        let _ = self.poster.post(ViewTask::EvaluateProbe(script));
    }

    /// Runs a task that was posted to the owning context.
    ///
    /// Returns the content URL if this task issued the content load.
    pub fn handle_task(&mut self, view: &mut dyn EmbeddedView, task: ViewTask) -> Option<Url>
    {
        match task
        {
            ViewTask::ContentLoaded =>
            {
                self.on_view_ready();
                None
            }
            ViewTask::EvaluateProbe(script) =>
            {
                if !self.is_registered()
                {
                    tracing::debug!("dropping probe script, the bridge has been removed");
                    return None;
                }
                view.evaluate_script(&script);
                None
            }
            ViewTask::Finalize{ bridge_id, report } => self.finalize(view, bridge_id, report),
        }
    }

    /// Composes the content URL, removes the bridge, and loads the content.
    ///
    /// Rejected unless `bridge_id` names the live bridge.
    fn finalize(&mut self, view: &mut dyn EmbeddedView, bridge_id: u64, report: CapabilityReport) -> Option<Url>
    {
        let token = match std::mem::replace(&mut self.state, NegotiationState::Idle)
        {
            NegotiationState::Probing{ token } if token.id() == bridge_id => token,
            other =>
            {
                self.state = other;
                tracing::warn!(bridge_id, "rejecting finalize, no live bridge matches");
                return None;
            }
        };

        let content = report.apply(self.pack.base_uri.clone(), &self.pack.query_flags);
        token.revoke(view);
        view.load_url(&content);
        tracing::debug!(%content, "content load issued");

        self.state = NegotiationState::Finalized{ content: content.clone() };
        Some(content)
    }
}

//-------------------------------------------------------------------------------------------------------------------
