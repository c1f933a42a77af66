//local shortcuts
use rmmv_player_bootstrap::*;

//third-party shortcuts
use bevy::prelude::*;
use url::Url;

//standard shortcuts
use std::sync::Arc;

//-------------------------------------------------------------------------------------------------------------------

/// Event emitted once when the real game content load is issued.
#[derive(Event, Debug, Clone, PartialEq, Eq)]
pub struct ContentLaunched
{
    pub url: Url,
    /// `false` if the platform could not host the bridge and the default URL was loaded.
    pub negotiated: bool,
}

//-------------------------------------------------------------------------------------------------------------------

/// Non-send resource holding the view and its owning context.
///
/// Views are usually bound to the main thread, so this is never inserted as a regular resource.
pub struct BootstrapHost<V: EmbeddedView + 'static>
{
    context: ViewContext<V>,
}

impl<V: EmbeddedView + 'static> BootstrapHost<V>
{
    pub fn context(&self) -> &ViewContext<V>
    {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut ViewContext<V>
    {
        &mut self.context
    }
}

//-------------------------------------------------------------------------------------------------------------------

/// System set in `PreUpdate` that drains the view's task queue.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct BootstrapSet;

//-------------------------------------------------------------------------------------------------------------------

fn pump_view_tasks<V: EmbeddedView + 'static>(
    mut host     : NonSendMut<BootstrapHost<V>>,
    mut launched : EventWriter<ContentLaunched>,
){
    let handled = host.context.run_pending();
    if handled > 0 { tracing::trace!(handled, "ran view tasks"); }

    let Some(launch) = host.context.take_launch() else { return; };
    launched.write(ContentLaunched{ url: launch.url, negotiated: launch.negotiated });
}

//-------------------------------------------------------------------------------------------------------------------

/// Bootstraps an embedded view when the app is built.
///
/// The view is made on the main thread, [`launch`] runs immediately, and the view's tasks are drained every
/// `PreUpdate`. Read [`ContentLaunched`] to learn which URL was loaded.
pub struct BootstrapPlugin<V: EmbeddedView + 'static>
{
    pack: BootstrapPack,
    level: PlatformLevel,
    make_view: Arc<dyn Fn(ViewPoster) -> V + Send + Sync + 'static>,
}

impl<V: EmbeddedView + 'static> BootstrapPlugin<V>
{
    pub fn new<F>(pack: BootstrapPack, level: PlatformLevel, make_view: F) -> Self
    where
        F: Fn(ViewPoster) -> V + Send + Sync + 'static
    {
        Self{ pack, level, make_view: Arc::new(make_view) }
    }
}

impl<V: EmbeddedView + 'static> Plugin for BootstrapPlugin<V>
{
    fn build(&self, app: &mut App)
    {
        let make_view = self.make_view.clone();
        let context = launch(self.pack.clone(), self.level, move |poster| (make_view)(poster));

        app.add_event::<ContentLaunched>()
            .insert_non_send_resource(BootstrapHost{ context })
            .add_systems(PreUpdate, pump_view_tasks::<V>.in_set(BootstrapSet));
    }
}

//-------------------------------------------------------------------------------------------------------------------
