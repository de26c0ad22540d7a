//! Timers that work in the browser and during SSR.

use std::time::Duration;

use waitlist_core::animation::Viewport;

/// Redraw interval for the particle layers.
pub const FRAME: Duration = Duration::from_millis(50);

pub async fn sleep(duration: Duration) {
    #[cfg(feature = "web")]
    gloo_timers::future::sleep(duration).await;

    #[cfg(all(feature = "server", not(feature = "web")))]
    tokio::time::sleep(duration).await;

    // No timer backend: animations hold their first frame.
    #[cfg(not(any(feature = "web", feature = "server")))]
    {
        let _ = duration;
        std::future::pending::<()>().await;
    }
}

/// Current window size, or the default during SSR.
pub fn viewport() -> Viewport {
    #[cfg(feature = "web")]
    {
        let size = web_sys::window().and_then(|window| {
            let width = window.inner_width().ok()?.as_f64()?;
            let height = window.inner_height().ok()?.as_f64()?;
            Some(Viewport::new(width, height))
        });
        if let Some(size) = size {
            return size;
        }
    }

    Viewport::default()
}
