use leptos::*;
use std::time::Duration;

/// Bottom-center, dark, 3.5 s toasts that can be closed by click or drag.
pub const DEFAULT_AUTO_CLOSE: Duration = Duration::from_millis(3500);

/// Fraction of the toast width a drag must cover to dismiss it.
pub const DRAG_DISMISS_FRACTION: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast--success",
            ToastKind::Error => "toast--error",
        }
    }
}

/// Container placement; the site only ever shows toasts bottom-center.
pub const CONTAINER_CLASS: &str = "toast-container toast-container--bottom-center";

/// Dark theme class applied to every toast.
pub const THEME_CLASS: &str = "toast--dark";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastOptions {
    pub auto_close: Duration,
    pub close_on_click: bool,
    pub pause_on_hover: bool,
    pub draggable: bool,
    pub show_progress: bool,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            auto_close: DEFAULT_AUTO_CLOSE,
            close_on_click: true,
            pause_on_hover: true,
            draggable: true,
            show_progress: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Returns false if the toast was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Remaining-time bookkeeping for a pausable auto-close timer.
///
/// Times are milliseconds from any monotonic-enough clock (`js_sys::Date::now`
/// in the browser).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoDismiss {
    remaining_ms: f64,
    running_since: Option<f64>,
}

impl AutoDismiss {
    pub fn new(total: Duration) -> Self {
        Self {
            remaining_ms: total.as_secs_f64() * 1000.0,
            running_since: None,
        }
    }

    /// Start (or restart) the countdown. Returns the delay to schedule.
    pub fn resume(&mut self, now_ms: f64) -> Duration {
        self.running_since = Some(now_ms);
        Duration::from_secs_f64(self.remaining_ms / 1000.0)
    }

    /// Stop the countdown, keeping whatever time is left.
    pub fn pause(&mut self, now_ms: f64) {
        if let Some(since) = self.running_since.take() {
            self.remaining_ms = (self.remaining_ms - (now_ms - since).max(0.0)).max(0.0);
        }
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    pub fn remaining_ms(&self) -> f64 {
        self.remaining_ms
    }
}

/// Horizontal swipe-to-dismiss tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragDismiss {
    start_x: Option<f64>,
    offset: f64,
}

impl DragDismiss {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
        self.offset = 0.0;
    }

    pub fn move_to(&mut self, x: f64) {
        if let Some(start) = self.start_x {
            self.offset = x - start;
        }
    }

    /// End the drag. True when the toast travelled far enough to be dismissed;
    /// otherwise it snaps back.
    pub fn release(&mut self, toast_width: f64) -> bool {
        let dragged = self.start_x.take().is_some();
        let dismiss = dragged && toast_width > 0.0 && self.offset.abs() >= toast_width * DRAG_DISMISS_FRACTION;
        self.offset = 0.0;
        dismiss
    }

    /// Abandon the drag without dismissing, e.g. on `pointercancel`.
    pub fn cancel(&mut self) {
        self.start_x = None;
        self.offset = 0.0;
    }

    pub fn is_dragging(&self) -> bool {
        self.start_x.is_some()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }
}

/// Something that can surface a transient message to the user.
pub trait Notify {
    fn notify(&self, message: &str, kind: ToastKind);
}

/// Signal-backed toast store owned by the view that renders its container.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    options: ToastOptions,
}

impl Toaster {
    pub fn new(options: ToastOptions) -> Self {
        Self {
            queue: create_rw_signal(ToastQueue::default()),
            options,
        }
    }

    pub fn options(&self) -> ToastOptions {
        self.options
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    pub fn error(&self, message: &str) {
        self.notify(message, ToastKind::Error);
    }
}

impl Notify for Toaster {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.queue.try_update(|q| q.push(message, kind));
    }
}
