//local shortcuts
use crate::*;

//third-party shortcuts

//standard shortcuts


//-------------------------------------------------------------------------------------------------------------------

/// Bootstraps a new view.
///
/// If `level` supports bridge objects a negotiation is started; otherwise the default content URL (with the
/// no-audio flag) is loaded immediately and no bridge is ever registered.
pub fn launch<V: EmbeddedView>(
    pack       : BootstrapPack,
    level      : PlatformLevel,
    make_view  : impl FnOnce(ViewPoster) -> V,
) -> ViewContext<V>
{
    let mut context = ViewContext::new(make_view);

    if !level.supports_bridge(pack.min_bridge_level)
    {
        tracing::info!(level = level.0, min_level = pack.min_bridge_level, "platform cannot host a bridge, skipping negotiation");
        context.load_default(&pack);
        return context;
    }

    context.negotiate(pack);
    context
}

//-------------------------------------------------------------------------------------------------------------------
