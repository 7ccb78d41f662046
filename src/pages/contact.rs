use crate::animation::{use_letter_phase, CONTACT_ANIMATION_DELAY};
use crate::components::{AnimatedLetters, ClipLoader, MapEmbed, PageLoader, ToastContainer, CAMPUS};
use crate::config::SiteConfig;
use crate::contact::{
    ContactError, ContactUi, FormSubmission, LiveContactFlow, SubmissionStatus,
};
use crate::timer::sleep;
use crate::toast::{Notify, ToastKind, ToastOptions, Toaster};
use async_trait::async_trait;
use leptos::*;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Controlled values of the four form inputs.
#[derive(Clone, Copy)]
struct ContactFields {
    name: RwSignal<String>,
    email: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
}

impl ContactFields {
    fn new() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            subject: create_rw_signal(String::new()),
            message: create_rw_signal(String::new()),
        }
    }

    fn snapshot(&self) -> FormSubmission {
        FormSubmission {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            subject: self.subject.get_untracked(),
            message: self.message.get_untracked(),
        }
    }

    fn clear(&self) {
        for field in [self.name, self.email, self.subject, self.message] {
            field.try_set(String::new());
        }
    }
}

/// The contact page as seen by the submission flow.
struct PageUi {
    fields: ContactFields,
    status: RwSignal<SubmissionStatus>,
    toaster: Toaster,
    alive: Rc<Cell<bool>>,
}

impl Notify for PageUi {
    fn notify(&self, message: &str, kind: ToastKind) {
        self.toaster.notify(message, kind);
    }
}

#[async_trait(?Send)]
impl ContactUi for PageUi {
    fn status(&self) -> SubmissionStatus {
        self.status.try_get_untracked().unwrap_or_default()
    }

    fn set_status(&self, status: SubmissionStatus) {
        self.status.try_set(status);
    }

    fn clear_form(&self) {
        self.fields.clear();
    }

    fn is_live(&self) -> bool {
        self.alive.get()
    }

    async fn pause(&self, duration: Duration) {
        sleep(duration).await;
    }
}

#[component]
pub fn ContactPage() -> impl IntoView {
    let phase = use_letter_phase(CONTACT_ANIMATION_DELAY);
    let toaster = Toaster::new(ToastOptions::default());
    let fields = ContactFields::new();
    let status = create_rw_signal(SubmissionStatus::Idle);
    let busy = create_memo(move |_| status.with(SubmissionStatus::is_busy));

    // Pending requests may resolve after the page is gone; the flow checks this.
    let alive = Rc::new(Cell::new(true));
    on_cleanup({
        let alive = Rc::clone(&alive);
        move || alive.set(false)
    });

    let flow = use_context::<SiteConfig>().map(|config| Rc::new(LiveContactFlow::from_config(&config)));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(flow) = flow.clone() else {
            log::error!("contact form submitted but the site has no relay configuration");
            toaster.error(&ContactError::DeliveryRejected.user_message());
            return;
        };
        let ui = PageUi {
            fields,
            status,
            toaster,
            alive: Rc::clone(&alive),
        };
        let submission = fields.snapshot();
        spawn_local(async move {
            let outcome = flow.submit(&ui, submission).await;
            log::debug!("contact submission finished: {:?}", outcome);
        });
    };

    view! {
        <div class="container contact-page">
            <div class="text-zone">
                <h1>
                    <AnimatedLetters phase=phase text="Contact Me" offset=15/>
                </h1>
                <p>
                    "I\u{2019}m open to new opportunities and collaborations! If you\u{2019}re looking "
                    "for someone who can bring fresh ideas and deliver impactful results, "
                    "let\u{2019}s get in touch!"
                </p>

                <div class="contact-form">
                    <form on:submit=on_submit>
                        <ul>
                            <li class="half">
                                <input
                                    placeholder="Name"
                                    type="text"
                                    name="name"
                                    required=true
                                    prop:value=move || fields.name.get()
                                    on:input=move |ev| fields.name.set(event_target_value(&ev))
                                />
                            </li>
                            <li class="half">
                                <input
                                    placeholder="Email"
                                    type="email"
                                    name="email"
                                    required=true
                                    prop:value=move || fields.email.get()
                                    on:input=move |ev| fields.email.set(event_target_value(&ev))
                                />
                            </li>
                            <li>
                                <input
                                    placeholder="Subject"
                                    type="text"
                                    name="subject"
                                    required=true
                                    prop:value=move || fields.subject.get()
                                    on:input=move |ev| fields.subject.set(event_target_value(&ev))
                                />
                            </li>
                            <li>
                                <textarea
                                    placeholder="Message"
                                    name="message"
                                    required=true
                                    prop:value=move || fields.message.get()
                                    on:input=move |ev| fields.message.set(event_target_value(&ev))
                                ></textarea>
                            </li>
                            <li>
                                <button type="submit" class="flat-button" disabled=move || busy.get()>
                                    {move || {
                                        if busy.get() {
                                            view! { <ClipLoader color="#fff" size=20/> }.into_view()
                                        } else {
                                            "SEND".into_view()
                                        }
                                    }}
                                </button>
                            </li>
                        </ul>
                        <ToastContainer toaster=toaster/>
                    </form>
                </div>
            </div>
            <MapEmbed location=CAMPUS/>
        </div>
        <PageLoader/>
    }
}
