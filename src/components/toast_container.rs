use crate::toast::{AutoDismiss, DragDismiss, Toast, Toaster, CONTAINER_CLASS, THEME_CLASS};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;

/// Movement (px) after which a pointer release is a drag, not a click.
const CLICK_SLOP_PX: f64 = 5.0;

#[component]
pub fn ToastContainer(toaster: Toaster) -> impl IntoView {
    view! {
        <div class=CONTAINER_CLASS aria-live="polite">
            <For
                each=move || toaster.toasts()
                key=|toast| toast.id
                children=move |toast| view! { <ToastItem toast=toast toaster=toaster/> }
            />
        </div>
    }
}

#[component]
fn ToastItem(toast: Toast, toaster: Toaster) -> impl IntoView {
    let options = toaster.options();
    let id = toast.id;
    let node = create_node_ref::<html::Div>();

    let timer = store_value(AutoDismiss::new(options.auto_close));
    let pending = store_value(None::<TimeoutHandle>);
    let (paused, set_paused) = create_signal(false);
    let drag = create_rw_signal(DragDismiss::default());
    let swallow_click = store_value(false);

    let schedule = move || {
        let Some(delay) = timer.try_update_value(|t| t.resume(js_sys::Date::now())) else {
            return;
        };
        match set_timeout_with_handle(move || toaster.dismiss(id), delay) {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(_) => {
                log::warn!("could not schedule toast auto-close");
                toaster.dismiss(id);
            }
        }
    };
    let cancel = move || {
        if let Some(handle) = pending.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    };

    schedule();
    on_cleanup(cancel);

    let on_enter = move |_: ev::MouseEvent| {
        if options.pause_on_hover {
            cancel();
            timer.update_value(|t| t.pause(js_sys::Date::now()));
            set_paused.set(true);
        }
    };
    let on_leave = move |_: ev::MouseEvent| {
        if options.pause_on_hover && paused.get_untracked() {
            set_paused.set(false);
            schedule();
        }
    };

    let on_pointer_down = move |ev: ev::PointerEvent| {
        if !options.draggable {
            return;
        }
        // Keep receiving pointerup even when the pointer leaves the toast.
        if let Some(el) = node.get_untracked() {
            if el.set_pointer_capture(ev.pointer_id()).is_err() {
                log::debug!("pointer capture unavailable for toast drag");
            }
        }
        drag.update(|d| d.begin(ev.client_x() as f64));
    };
    let on_pointer_move = move |ev: ev::PointerEvent| {
        if drag.with_untracked(DragDismiss::is_dragging) {
            drag.update(|d| d.move_to(ev.client_x() as f64));
        }
    };
    let on_pointer_up = move |_: ev::PointerEvent| {
        if !drag.with_untracked(DragDismiss::is_dragging) {
            return;
        }
        swallow_click.set_value(drag.with_untracked(|d| d.offset().abs() > CLICK_SLOP_PX));
        let width = node
            .get_untracked()
            .map(|el| el.offset_width() as f64)
            .unwrap_or(0.0);
        if drag.try_update(|d| d.release(width)).unwrap_or(false) {
            toaster.dismiss(id);
        }
    };
    let on_pointer_cancel = move |_: ev::PointerEvent| {
        drag.try_update(DragDismiss::cancel);
    };
    let on_click = move |_: ev::MouseEvent| {
        let swallowed = swallow_click.try_update_value(std::mem::take).unwrap_or(false);
        if options.close_on_click && !swallowed {
            toaster.dismiss(id);
        }
    };

    let drag_style = move || {
        let offset = drag.with(DragDismiss::offset);
        if offset == 0.0 {
            String::new()
        } else {
            format!("transform: translateX({offset}px);")
        }
    };

    view! {
        <div
            node_ref=node
            class=format!("toast {} {}", THEME_CLASS, toast.kind.class())
            role="alert"
            style=drag_style
            on:mouseenter=on_enter
            on:mouseleave=on_leave
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointercancel=on_pointer_cancel
            on:click=on_click
        >
            <div class="toast-body">{toast.message}</div>
            <button class="toast-close" aria-label="close" on:click=move |_| toaster.dismiss(id)>
                "\u{2715}"
            </button>
            {options.show_progress.then(|| view! {
                <div
                    class="toast-progress"
                    class:toast-progress-paused=paused
                    style=format!("animation-duration: {}ms;", options.auto_close.as_millis())
                ></div>
            })}
        </div>
    }
}
