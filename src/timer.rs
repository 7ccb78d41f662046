use futures::channel::oneshot;
use leptos::set_timeout;
use std::time::Duration;

/// Resolve after `duration` on the browser event loop.
pub async fn sleep(duration: Duration) {
    let (tx, rx) = oneshot::channel::<()>();
    set_timeout(
        move || {
            let _ = tx.send(());
        },
        duration,
    );
    // A dropped sender means the timer never fired; treat it as elapsed.
    let _ = rx.await;
}
