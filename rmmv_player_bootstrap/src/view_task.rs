//local shortcuts
use crate::CapabilityReport;
use rmmv_player_utils::{MessageReceiver, MessageSender, new_message_channel};

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Work that must run on the view's owning execution context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewTask
{
    /// The view finished loading a document.
    ContentLoaded,
    /// Evaluate the probe script.
    EvaluateProbe(String),
    /// Compose the content URL from a report and load it.
    Finalize{ bridge_id: u64, report: CapabilityReport },
}

//-------------------------------------------------------------------------------------------------------------------

/// Posts [`ViewTask`]s to the owning execution context from any thread.
#[derive(Debug, Clone)]
pub struct ViewPoster
{
    sender: MessageSender<ViewTask>,
}

impl ViewPoster
{
    /// Post a task.
    ///
    /// Returns `Err` if the owning context is gone. The task is dropped in that case.
    pub fn post(&self, task: ViewTask) -> Result<(), ()>
    {
        if self.sender.send(task).is_err()
        {
            tracing::warn!("failed posting view task, the owning context has shut down");
            return Err(());
        }
        Ok(())
    }

    /// Signal that the view finished loading a document.
    pub fn content_loaded(&self) -> Result<(), ()>
    {
        self.post(ViewTask::ContentLoaded)
    }
}

//-------------------------------------------------------------------------------------------------------------------

pub(crate) fn new_view_task_queue() -> (ViewPoster, MessageReceiver<ViewTask>)
{
    let (sender, receiver) = new_message_channel::<ViewTask>();
    (ViewPoster{ sender }, receiver)
}

//-------------------------------------------------------------------------------------------------------------------
