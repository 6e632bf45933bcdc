use yew::prelude::*;

use crate::components::privacy_modal::{use_privacy_modal, ModalEvent, PrivacyModal};
use crate::effects::anchor::smooth_scroll;
use crate::effects::scroll::use_hero_fade;
use crate::effects::stars::StarField;
use crate::waitlist::WaitlistSection;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const FEATURES: [Feature; 4] = [
    Feature {
        icon: "✨",
        title: "Personalization",
        description: "Every story adapts to your child's world.",
    },
    Feature {
        icon: "🎤",
        title: "Voice Narration",
        description: "Bring stories to life with voices of their loved ones.",
    },
    Feature {
        icon: "🌟",
        title: "Variety",
        description: "Countless themes, toys, and genres to choose from.",
    },
    Feature {
        icon: "💝",
        title: "Emotional Bond",
        description: "Every bedtime turns into a magical moment.",
    },
];

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();
    let hero_fade = use_hero_fade(hero_ref.clone());
    let privacy = use_privacy_modal();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let open_privacy = {
        let privacy = privacy.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            privacy.send(ModalEvent::Open);
        })
    };

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <StarField />

            <section class="hero" ref={hero_ref}>
                <div class="container">
                    <div class="hero-content" style={hero_fade.style()}>
                        <h1 class="logo">{"LOREO"}</h1>
                        <p class="tagline">{"Stories that feel alive, every night."}</p>
                        <p class="subheading">{"Personalized bedtime stories, narrated in your voice."}</p>
                        <a href="#waitlist" class="btn-primary" onclick={smooth_scroll("#waitlist")}>
                            <span class="btn-text">{"Reserve my Story"}</span>
                        </a>
                    </div>
                </div>
            </section>

            <section class="features">
                <div class="container">
                    <h2 class="section-title">{"Magic in Every Story"}</h2>
                    <div class="features-grid">
                        { for FEATURES.iter().map(|feature| html! {
                            <div class="feature-card">
                                <div class="feature-icon">{feature.icon}</div>
                                <h3 class="feature-title">{feature.title}</h3>
                                <p class="feature-description">{feature.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <WaitlistSection />

            <footer>
                <div class="container">
                    <div class="footer-content">
                        <div class="footer-links">
                            <a href="#privacy" aria-label="Privacy Policy" onclick={open_privacy}>{"Privacy Policy"}</a>
                        </div>
                        <a href="mailto:hello@loreo.app" class="footer-email">{"hello@loreo.app"}</a>
                        <p class="footer-text">{"Made with ❤️ • © 2025 LOREO"}</p>
                    </div>
                </div>
            </footer>

            <PrivacyModal modal={privacy} />
        </div>
    }
}

const LANDING_CSS: &str = r#"
    * {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        font-family: "Nunito", "Segoe UI", sans-serif;
        background: linear-gradient(180deg, #0b0820 0%, #1a1240 50%, #0b0820 100%);
        color: #f4f1ff;
        min-height: 100vh;
    }
    .landing-page {
        position: relative;
        overflow-x: hidden;
    }
    .container {
        max-width: 1100px;
        margin: 0 auto;
        padding: 0 1.5rem;
        position: relative;
        z-index: 1;
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        text-align: center;
    }
    .hero-content {
        will-change: opacity, transform;
    }
    .logo {
        font-size: clamp(3rem, 10vw, 6rem);
        letter-spacing: 0.3em;
        margin: 0 0 1rem;
        background: linear-gradient(45deg, #fff, #c3a6ff);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
    }
    .tagline {
        font-size: 1.6rem;
        margin: 0 0 0.5rem;
    }
    .subheading {
        color: #c9c3e6;
        margin: 0 0 2.5rem;
    }
    .btn-primary {
        display: inline-block;
        padding: 1rem 2.5rem;
        border: none;
        border-radius: 999px;
        background: linear-gradient(135deg, #8e6bff, #ff8ec7);
        color: #fff;
        font-size: 1.05rem;
        font-weight: 700;
        text-decoration: none;
        cursor: pointer;
        transition: transform 0.2s ease, box-shadow 0.2s ease;
    }
    .btn-primary:hover {
        transform: translateY(-2px);
        box-shadow: 0 10px 30px rgba(142, 107, 255, 0.4);
    }
    .features {
        padding: 6rem 0;
    }
    .section-title {
        text-align: center;
        font-size: 2.2rem;
        margin-bottom: 3rem;
    }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1.5rem;
    }
    .feature-card {
        padding: 2rem 1.5rem;
        border-radius: 20px;
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        text-align: center;
    }
    .feature-icon {
        font-size: 2.5rem;
        margin-bottom: 1rem;
    }
    .feature-description {
        color: #c9c3e6;
    }
    footer {
        padding: 3rem 0;
        text-align: center;
        color: #a9a3c6;
    }
    .footer-content a {
        color: #c3a6ff;
        text-decoration: none;
    }
    .footer-email {
        display: inline-block;
        margin: 1rem 0;
    }
    @media (max-width: 768px) {
        .tagline {
            font-size: 1.3rem;
        }
        .features {
            padding: 4rem 0;
        }
    }
"#;
