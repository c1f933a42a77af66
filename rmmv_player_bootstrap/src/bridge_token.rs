//local shortcuts
use crate::{CapabilityReport, EmbeddedView, ViewPoster, ViewTask};

//third-party shortcuts

//standard shortcuts
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

//-------------------------------------------------------------------------------------------------------------------

static NEXT_BRIDGE_ID: AtomicU64 = AtomicU64::new(0);

//-------------------------------------------------------------------------------------------------------------------

#[derive(Debug)]
struct BridgeShared
{
    id: u64,
    name: String,
    /// True from registration until a report is accepted or the bridge is revoked.
    pending: AtomicBool,
    poster: ViewPoster,
}

//-------------------------------------------------------------------------------------------------------------------

/// The script-facing bridge object.
///
/// Handles are registered with an [`EmbeddedView`], which calls [`BridgeHandle::report`] from whatever thread
/// its script engine runs on. Only the first report is accepted; it is forwarded to the owning context as a
/// [`ViewTask::Finalize`].
#[derive(Debug, Clone)]
pub struct BridgeHandle
{
    shared: Arc<BridgeShared>,
}

impl BridgeHandle
{
    /// Name the bridge is exposed under in the embedded script context.
    pub fn name(&self) -> &str
    {
        &self.shared.name
    }

    pub fn id(&self) -> u64
    {
        self.shared.id
    }

    /// Returns `true` if the bridge will still accept a report.
    pub fn is_pending(&self) -> bool
    {
        self.shared.pending.load(Ordering::Acquire)
    }

    /// Report entry point, arguments in the order `(webgl, webaudio, show_fps)`.
    ///
    /// Returns `true` if this call was the accepted report. Duplicate and late reports are ignored.
    pub fn report(&self, webgl: bool, webaudio: bool, show_fps: bool) -> bool
    {
        if self.shared.pending.compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire).is_err()
        {
            tracing::debug!(bridge_id = self.shared.id, "ignoring capability report, bridge is not pending");
            return false;
        }

        let report = CapabilityReport::new(webgl, webaudio, show_fps);
        tracing::debug!(bridge_id = self.shared.id, ?report, "capability report accepted");

        // a closed context means nothing will ever load; that stall is accepted
        let _ = self.shared.poster.post(ViewTask::Finalize{ bridge_id: self.shared.id, report });
        true
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// Proof that a bridge is live on a view.
///
/// Issued when the bridge is registered and consumed by [`BridgeToken::revoke`]. Not cloneable.
#[derive(Debug)]
pub struct BridgeToken
{
    handle: BridgeHandle,
}

impl BridgeToken
{
    pub(crate) fn issue(name: &str, poster: ViewPoster) -> Self
    {
        let shared = BridgeShared{
            id: NEXT_BRIDGE_ID.fetch_add(1, Ordering::Relaxed),
            name: name.to_string(),
            pending: AtomicBool::new(true),
            poster,
        };
        Self{ handle: BridgeHandle{ shared: Arc::new(shared) } }
    }

    pub fn id(&self) -> u64
    {
        self.handle.id()
    }

    pub fn is_pending(&self) -> bool
    {
        self.handle.is_pending()
    }

    /// Get a script-facing handle for the bridge.
    pub fn handle(&self) -> BridgeHandle
    {
        self.handle.clone()
    }

    /// Shuts the bridge and removes it from the view.
    ///
    /// Handles that are still held elsewhere will reject every further report.
    pub(crate) fn revoke(self, view: &mut dyn EmbeddedView)
    {
        self.handle.shared.pending.store(false, Ordering::Release);
        view.remove_bridge(self.handle.name());
        tracing::debug!(bridge_id = self.handle.id(), "bridge revoked");
    }
}

//-------------------------------------------------------------------------------------------------------------------
