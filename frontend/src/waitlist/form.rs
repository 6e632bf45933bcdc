use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::orchestrator::BrowserOrchestrator;
use super::state::{Waitlist, WaitlistAction};
use super::validation::Field;

const WAITLIST_CSS: &str = r#"
    .waitlist {
        padding: 6rem 1.5rem;
        position: relative;
        z-index: 1;
    }
    .waitlist-card {
        max-width: 520px;
        margin: 0 auto;
        padding: 3rem 2.5rem;
        border-radius: 24px;
        background: rgba(255, 255, 255, 0.06);
        border: 1px solid rgba(255, 255, 255, 0.12);
        backdrop-filter: blur(12px);
        text-align: center;
    }
    .waitlist-title {
        font-size: 2rem;
        margin-bottom: 0.5rem;
    }
    .waitlist-subtitle {
        color: #c9c3e6;
        margin-bottom: 2rem;
    }
    .form-group {
        margin-bottom: 1.25rem;
        text-align: left;
    }
    .form-group input {
        width: 100%;
        padding: 1rem 1.25rem;
        border-radius: 14px;
        border: 1px solid rgba(255, 255, 255, 0.2);
        background: rgba(10, 8, 30, 0.6);
        color: #fff;
        font-size: 1rem;
    }
    .form-group input.error {
        border-color: #ff7a90;
    }
    .error-message {
        color: #ff7a90;
        font-size: 0.85rem;
        margin-top: 0.4rem;
    }
    .success-message {
        margin-top: 1.5rem;
        padding: 1rem;
        border-radius: 14px;
        background: rgba(126, 227, 176, 0.15);
        color: #7ee3b0;
    }
"#;

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

fn on_edit(waitlist: &UseReducerHandle<Waitlist>, field: Field) -> Callback<InputEvent> {
    let waitlist = waitlist.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        waitlist.dispatch(WaitlistAction::Edit(field, input.value()));
    })
}

#[function_component]
pub fn WaitlistSection() -> Html {
    let waitlist = use_reducer(Waitlist::default);
    let orchestrator = use_state(BrowserOrchestrator::for_browser);

    let onsubmit = {
        let waitlist = waitlist.clone();
        let orchestrator = orchestrator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let dispatch = {
                let waitlist = waitlist.clone();
                Callback::from(move |action: WaitlistAction| waitlist.dispatch(action))
            };
            if let Err(errors) = orchestrator.submit(&waitlist.form, dispatch) {
                log::debug!("Waitlist form rejected: {:?}", errors);
            }
        })
    };

    html! {
        <section class="waitlist" id="waitlist">
            <style>{WAITLIST_CSS}</style>
            <div class="container">
                <div class="waitlist-card">
                    <div class="waitlist-content">
                        <h2 class="waitlist-title">{"Be First to Experience Magic"}</h2>
                        <p class="waitlist-subtitle">{"Join our waitlist for early access"}</p>
                        <form {onsubmit}>
                            <div class="form-group">
                                <input
                                    type="text"
                                    name="fullName"
                                    value={waitlist.form.full_name.clone()}
                                    oninput={on_edit(&waitlist, Field::FullName)}
                                    placeholder="Name"
                                    required=true
                                    class={classes!(waitlist.errors.name.then_some("error"))}
                                />
                                <div class="error-message" style={display(waitlist.errors.name)}>
                                    {"Please enter your name"}
                                </div>
                            </div>
                            <div class="form-group">
                                <input
                                    type="email"
                                    name="email"
                                    value={waitlist.form.email.clone()}
                                    oninput={on_edit(&waitlist, Field::Email)}
                                    placeholder="Email"
                                    required=true
                                    class={classes!(waitlist.errors.email.then_some("error"))}
                                />
                                <div class="error-message" style={display(waitlist.errors.email)}>
                                    {"Please enter a valid email address"}
                                </div>
                            </div>
                            <button type="submit" class="btn-primary" style="width: 100%;">
                                <span class="btn-text">{"Reserve my Story"}</span>
                            </button>
                        </form>
                        <div class="success-message" style={display(waitlist.banner_visible())}>
                            {"🎉 You're on the list! We'll contact you soon."}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_toggles_block_and_none() {
        assert_eq!(display(true), "display: block;");
        assert_eq!(display(false), "display: none;");
    }
}
