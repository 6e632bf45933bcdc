use rand::Rng;
use yew::prelude::*;

use crate::config::STAR_COUNT;

const STAR_CSS: &str = r#"
    .background-animation {
        position: fixed;
        inset: 0;
        overflow: hidden;
        pointer-events: none;
        z-index: 0;
    }
    .star {
        position: absolute;
        border-radius: 50%;
        background: radial-gradient(circle, #fff 0%, rgba(200, 180, 255, 0.4) 60%, transparent 100%);
        opacity: 0;
        animation-name: drift;
        animation-timing-function: ease-in-out;
        animation-iteration-count: infinite;
    }
    @keyframes drift {
        0% { transform: translateY(0); opacity: 0; }
        20% { opacity: 0.9; }
        80% { opacity: 0.6; }
        100% { transform: translateY(-120px); opacity: 0; }
    }
    @media (prefers-reduced-motion: reduce) {
        .star { animation: none; opacity: 0.5; }
    }
"#;

/// One decorative background star.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub size_px: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

impl Star {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(2.0..6.0),
            left_pct: rng.gen_range(0.0..100.0),
            top_pct: rng.gen_range(0.0..100.0),
            delay_s: rng.gen_range(0.0..20.0),
            duration_s: rng.gen_range(20.0..30.0),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; left: {}%; top: {}%; animation-delay: {}s; animation-duration: {}s;",
            self.left_pct,
            self.top_pct,
            self.delay_s,
            self.duration_s,
            size = self.size_px,
        )
    }
}

pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Star> {
    (0..count).map(|_| Star::random(rng)).collect()
}

#[function_component]
pub fn StarField() -> Html {
    // generated once per mount, never re-rolled on re-render
    let stars = use_state(|| generate_stars(&mut rand::thread_rng(), STAR_COUNT));

    html! {
        <div class="background-animation" aria-hidden="true">
            <style>{STAR_CSS}</style>
            { for stars.iter().map(|star| html! { <div class="star" style={star.style()}></div> }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stars_stay_within_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let stars = generate_stars(&mut rng, 500);
        assert_eq!(stars.len(), 500);
        for star in &stars {
            assert!((2.0..6.0).contains(&star.size_px));
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((0.0..100.0).contains(&star.top_pct));
            assert!((0.0..20.0).contains(&star.delay_s));
            assert!((20.0..30.0).contains(&star.duration_s));
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let first = generate_stars(&mut StdRng::seed_from_u64(42), STAR_COUNT);
        let second = generate_stars(&mut StdRng::seed_from_u64(42), STAR_COUNT);
        assert_eq!(first, second);
        assert_eq!(first.len(), 15);
    }

    #[test]
    fn style_sets_square_size_and_timing() {
        let star = Star {
            size_px: 3.5,
            left_pct: 10.0,
            top_pct: 20.0,
            delay_s: 1.5,
            duration_s: 25.0,
        };
        assert_eq!(
            star.style(),
            "width: 3.5px; height: 3.5px; left: 10%; top: 20%; animation-delay: 1.5s; animation-duration: 25s;"
        );
    }
}
