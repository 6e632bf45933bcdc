use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModalEvent {
    Open,
    /// Close button.
    Close,
    Key(String),
    /// Click that landed on the backdrop rather than the content.
    Backdrop,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Opened,
    Closed,
    Unchanged,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrivacyModalState {
    pub open: bool,
}

impl PrivacyModalState {
    pub fn handle(&mut self, event: ModalEvent) -> Transition {
        let next = match event {
            ModalEvent::Open => true,
            ModalEvent::Close => false,
            ModalEvent::Key(key) if key == "Escape" => false,
            ModalEvent::Key(_) => self.open,
            ModalEvent::Backdrop => false,
        };

        match (self.open, next) {
            (false, true) => {
                self.open = true;
                Transition::Opened
            }
            (true, false) => {
                self.open = false;
                Transition::Closed
            }
            _ => Transition::Unchanged,
        }
    }
}

/// Stops the page behind the modal from scrolling.
pub trait ScrollLock {
    fn lock(&self);
    fn unlock(&self);
}

/// Toggles `overflow: hidden` on `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn set_overflow(value: &str) {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        if let Err(e) = body.style().set_property("overflow", value) {
            log::warn!("Failed to set body overflow: {:?}", e);
        }
    }
}

impl ScrollLock for BodyScrollLock {
    fn lock(&self) {
        Self::set_overflow("hidden");
    }

    fn unlock(&self) {
        Self::set_overflow("");
    }
}

pub fn sync_scroll_lock(transition: Transition, lock: &impl ScrollLock) {
    match transition {
        Transition::Opened => lock.lock(),
        Transition::Closed => lock.unlock(),
        Transition::Unchanged => {}
    }
}

/// Owns the modal flag and keeps body scrolling in step with it.
#[derive(Clone, PartialEq)]
pub struct PrivacyModalHandle {
    state: UseStateHandle<PrivacyModalState>,
}

impl PrivacyModalHandle {
    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn send(&self, event: ModalEvent) {
        let mut next = *self.state;
        let transition = next.handle(event);
        sync_scroll_lock(transition, &BodyScrollLock);
        if transition != Transition::Unchanged {
            self.state.set(next);
        }
    }

    pub fn callback<E: 'static>(&self, event: ModalEvent) -> Callback<E> {
        let handle = self.clone();
        Callback::from(move |_: E| handle.send(event.clone()))
    }
}

#[hook]
pub fn use_privacy_modal() -> PrivacyModalHandle {
    let state = use_state(PrivacyModalState::default);
    PrivacyModalHandle { state }
}

#[derive(Properties, PartialEq)]
pub struct PrivacyModalProps {
    pub modal: PrivacyModalHandle,
}

#[function_component]
pub fn PrivacyModal(props: &PrivacyModalProps) -> Html {
    let modal = props.modal.clone();

    // Escape closes, but only listens while open
    {
        let open = modal.is_open();
        let modal = modal.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let destructor: Box<dyn FnOnce()> = match web_sys::window().and_then(|w| w.document()) {
                    Some(document) if *open => {
                        let on_key = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            modal.send(ModalEvent::Key(e.key()));
                        });
                        if let Err(e) = document
                            .add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())
                        {
                            log::warn!("Failed to attach keydown listener: {:?}", e);
                        }
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                on_key.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            open,
        );
    }

    let on_backdrop = {
        let modal = modal.clone();
        Callback::from(move |e: MouseEvent| {
            // clicks bubbling up from the content are not backdrop clicks
            if e.target() == e.current_target() {
                modal.send(ModalEvent::Backdrop);
            }
        })
    };

    html! {
        <div class={classes!("modal", modal.is_open().then_some("show"))} onclick={on_backdrop}>
            <style>{MODAL_CSS}</style>
            <div class="modal-content" role="dialog" aria-modal="true" aria-labelledby="privacy-title">
                <div class="modal-header">
                    <h2 class="modal-title" id="privacy-title">{"Privacy Policy"}</h2>
                    <button class="close-button" aria-label="Close" onclick={modal.callback(ModalEvent::Close)}>
                        {"×"}
                    </button>
                </div>
                <div class="modal-body">
                    <PrivacyPolicy />
                </div>
            </div>
        </div>
    }
}

#[function_component]
fn PrivacyPolicy() -> Html {
    html! {
        <>
            <p><strong>{"Last Updated: January 2025"}</strong></p>
            <p>{"LOREO (\"we,\" \"our,\" or \"us\") is committed to protecting the privacy of children and their families. This Privacy Policy explains how we collect, use, and safeguard information when you use our personalized bedtime storytelling application."}</p>

            <h3>{"1. Information We Collect"}</h3>
            <p>{"We collect minimal information necessary to provide our services:"}</p>
            <ul>
                <li><strong>{"Account Information: "}</strong>{"Parent's name and email address for account creation and communication"}</li>
                <li><strong>{"Child Information: "}</strong>{"Child's first name and age (no last names or identifying details)"}</li>
                <li><strong>{"Voice Data: "}</strong>{"Voice recordings provided by parents for story narration"}</li>
                <li><strong>{"Story Preferences: "}</strong>{"Themes, characters, and settings selected for personalization"}</li>
            </ul>

            <h3>{"2. How We Use Information"}</h3>
            <p>{"We use collected information solely to:"}</p>
            <ul>
                <li>{"Create personalized bedtime stories for your child"}</li>
                <li>{"Generate voice narration using parent-provided recordings"}</li>
                <li>{"Save story preferences and favorites"}</li>
                <li>{"Send important updates about the service"}</li>
                <li>{"Improve our storytelling algorithms and user experience"}</li>
            </ul>

            <h3>{"3. Data Protection for Children"}</h3>
            <p>{"We take children's privacy seriously:"}</p>
            <ul>
                <li>{"We comply with COPPA (Children's Online Privacy Protection Act) requirements"}</li>
                <li>{"We never collect more information than necessary"}</li>
                <li>{"Children cannot share personal information publicly"}</li>
                <li>{"Voice recordings are encrypted and used only for story narration"}</li>
                <li>{"We never sell or share children's information with third parties"}</li>
            </ul>

            <h3>{"4. Data Storage and Security"}</h3>
            <ul>
                <li>{"All data is encrypted in transit and at rest"}</li>
                <li>{"Voice recordings are processed securely and deleted after 90 days unless saved by parents"}</li>
                <li>{"We use industry-standard security measures to protect against unauthorized access"}</li>
                <li>{"Data is stored on secure servers with regular security audits"}</li>
            </ul>

            <h3>{"5. Parental Controls"}</h3>
            <p>{"Parents have full control over their family's data:"}</p>
            <ul>
                <li>{"Access and review all collected information"}</li>
                <li>{"Update or correct any information"}</li>
                <li>{"Delete voice recordings at any time"}</li>
                <li>{"Request complete account deletion"}</li>
                <li>{"Control story sharing and saving preferences"}</li>
            </ul>

            <h3>{"6. Third-Party Services"}</h3>
            <p>{"We use limited third-party services:"}</p>
            <ul>
                <li>{"Cloud hosting for secure data storage"}</li>
                <li>{"Payment processing (parent information only)"}</li>
                <li>{"Analytics (anonymized and aggregated data only)"}</li>
            </ul>
            <p>{"These services are carefully vetted and comply with our privacy standards."}</p>

            <h3>{"7. Data Retention"}</h3>
            <ul>
                <li>{"Account information is retained while your account is active"}</li>
                <li>{"Voice recordings are auto-deleted after 90 days unless saved"}</li>
                <li>{"Stories are kept in your library unless manually deleted"}</li>
                <li>{"Upon account deletion, all data is permanently removed within 30 days"}</li>
            </ul>

            <h3>{"8. Your Rights"}</h3>
            <p>{"You have the right to:"}</p>
            <ul>
                <li>{"Access your personal information"}</li>
                <li>{"Request corrections to inaccurate data"}</li>
                <li>{"Delete your account and all associated data"}</li>
                <li>{"Opt-out of non-essential communications"}</li>
                <li>{"Export your stories and preferences"}</li>
            </ul>

            <h3>{"9. Contact Us"}</h3>
            <p>{"If you have questions or concerns about this Privacy Policy or our practices, please contact us at:"}</p>
            <p>
                {"Email: hello@loreo.app"}<br/>
                {"Address: LOREO Privacy Team"}<br/>
                {"[Address will be provided when available]"}
            </p>

            <h3>{"10. Changes to This Policy"}</h3>
            <p>{"We may update this Privacy Policy to reflect changes in our practices or for legal reasons. We will notify you of any material changes via email and within the app."}</p>

            <p><strong>{"By using LOREO, you agree to the terms outlined in this Privacy Policy."}</strong></p>
        </>
    }
}

const MODAL_CSS: &str = r#"
    .modal {
        display: none;
        position: fixed;
        inset: 0;
        z-index: 100;
        background: rgba(5, 3, 20, 0.75);
        backdrop-filter: blur(6px);
        align-items: center;
        justify-content: center;
        padding: 1.5rem;
    }
    .modal.show {
        display: flex;
    }
    .modal-content {
        max-width: 720px;
        width: 100%;
        max-height: 85vh;
        overflow-y: auto;
        border-radius: 20px;
        background: #1a1535;
        color: #e8e4ff;
        padding: 2rem;
    }
    .modal-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 1rem;
    }
    .close-button {
        background: none;
        border: none;
        color: #e8e4ff;
        font-size: 2rem;
        cursor: pointer;
        line-height: 1;
    }
    .modal-body h3 {
        margin-top: 1.5rem;
        color: #c3a6ff;
    }
    .modal-body ul {
        padding-left: 1.2rem;
    }
"#;
