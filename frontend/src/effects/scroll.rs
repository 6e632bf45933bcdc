use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};
use yew::prelude::*;

const FADE_START: f64 = 0.2;
const FADE_END: f64 = 0.8;
const SCALE_PER_PX: f64 = 0.0001;
const MAX_SCALE: f64 = 1.1;

/// Opacity and scale applied to the hero content while scrolling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroFade {
    pub opacity: f64,
    pub scale: f64,
}

impl Default for HeroFade {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
        }
    }
}

impl HeroFade {
    pub fn style(&self) -> String {
        format!("opacity: {}; transform: scale({});", self.opacity, self.scale)
    }
}

/// Fades out between 20% and 80% of the hero height and grows slightly,
/// capped at 1.1x.
pub fn hero_fade(scrolled: f64, hero_height: f64) -> HeroFade {
    let fade_start = hero_height * FADE_START;
    let fade_end = hero_height * FADE_END;
    let span = fade_end - fade_start;

    let opacity = if scrolled <= fade_start {
        1.0
    } else if span <= 0.0 {
        0.0
    } else {
        (1.0 - (scrolled - fade_start) / span).max(0.0)
    };

    HeroFade {
        opacity,
        scale: (1.0 + scrolled * SCALE_PER_PX).min(MAX_SCALE),
    }
}

pub fn prefers_reduced_motion(window: &Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

fn measure(window: &Window, hero: &NodeRef) -> Option<HeroFade> {
    let hero = hero.cast::<HtmlElement>()?;
    let scrolled = window.scroll_y().ok()?;
    Some(hero_fade(scrolled, f64::from(hero.offset_height())))
}

/// Tracks the hero fade for the element behind `hero`. Recomputed at most
/// once per animation frame; stays at the default when the user asks for
/// reduced motion.
#[hook]
pub fn use_hero_fade(hero: NodeRef) -> HeroFade {
    let fade = use_state(HeroFade::default);

    {
        let fade = fade.clone();
        use_effect_with_deps(
            move |hero: &NodeRef| {
                let hero = hero.clone();
                let destructor: Box<dyn FnOnce()> = match web_sys::window() {
                    Some(window) if !prefers_reduced_motion(&window) => {
                        let ticking = Rc::new(Cell::new(false));
                        let on_scroll = Closure::<dyn Fn()>::new(move || {
                            if ticking.replace(true) {
                                return;
                            }
                            let ticking = ticking.clone();
                            let fade = fade.clone();
                            let hero = hero.clone();
                            let frame = Closure::once_into_js(move || {
                                ticking.set(false);
                                if let Some(window) = web_sys::window() {
                                    if let Some(next) = measure(&window, &hero) {
                                        fade.set(next);
                                    }
                                }
                            });
                            if let Some(window) = web_sys::window() {
                                if let Err(e) = window.request_animation_frame(frame.unchecked_ref()) {
                                    log::warn!("requestAnimationFrame failed: {:?}", e);
                                }
                            }
                        });

                        if let Err(e) = window.add_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        ) {
                            log::warn!("Failed to attach scroll listener: {:?}", e);
                        }

                        Box::new(move || {
                            if let Some(window) = web_sys::window() {
                                let _ = window.remove_event_listener_with_callback(
                                    "scroll",
                                    on_scroll.as_ref().unchecked_ref(),
                                );
                            }
                        })
                    }
                    _ => Box::new(|| ()),
                };
                move || destructor()
            },
            hero,
        );
    }

    *fade
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn fully_visible_until_fade_start() {
        assert_eq!(hero_fade(0.0, 1000.0), HeroFade::default());
        let at_start = hero_fade(200.0, 1000.0);
        assert!(close(at_start.opacity, 1.0));
        assert!(close(at_start.scale, 1.02));
    }

    #[test]
    fn fades_linearly_to_zero_at_fade_end() {
        let midway = hero_fade(500.0, 1000.0);
        assert!(close(midway.opacity, 0.5));
        assert!(close(midway.scale, 1.05));

        let at_end = hero_fade(800.0, 1000.0);
        assert!(close(at_end.opacity, 0.0));
    }

    #[test]
    fn clamps_past_the_hero() {
        let far = hero_fade(5000.0, 1000.0);
        assert_eq!(far.opacity, 0.0);
        assert_eq!(far.scale, MAX_SCALE);
    }

    #[test]
    fn zero_height_hero_hides_on_any_scroll() {
        assert_eq!(hero_fade(0.0, 0.0).opacity, 1.0);
        assert_eq!(hero_fade(1.0, 0.0).opacity, 0.0);
    }

    #[test]
    fn style_renders_both_properties() {
        let fade = HeroFade {
            opacity: 0.5,
            scale: 1.05,
        };
        assert_eq!(fade.style(), "opacity: 0.5; transform: scale(1.05);");
    }
}
