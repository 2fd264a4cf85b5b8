use blog_composer::Navigator;
use tracing::warn;

/// Переход через `window.location`; роутера в приложении нет.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, route: &str) {
        let Some(window) = web_sys::window() else {
            warn!(%route, "window is not available, cannot navigate");
            return;
        };

        if let Err(err) = window.location().set_href(route) {
            warn!(%route, ?err, "navigation failed");
        }
    }
}
