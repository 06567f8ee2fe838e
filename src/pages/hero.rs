use yew::prelude::*;

use crate::components::scroll::scroll_to_anchor;
use crate::config;

const FLOATING_HEARTS: usize = 6;

/// Drift path of one background heart, all as CSS values.
#[derive(Clone, Debug, PartialEq)]
pub struct HeartDrift {
    pub start_x: u32,
    pub end_x: u32,
    pub scale: f32,
    pub duration_s: u32,
    pub delay_s: u32,
}

// Spread out without a random source so the layout is stable between renders.
pub fn heart_drift(index: usize) -> HeartDrift {
    let seed = (index as u32).wrapping_mul(2_654_435_761).rotate_left(7);
    HeartDrift {
        start_x: seed % 100,
        end_x: (seed / 100) % 100,
        scale: 0.5 + ((seed / 10_000) % 50) as f32 / 100.0,
        duration_s: 15 + (seed / 7) % 10,
        delay_s: index as u32 * 2,
    }
}

impl HeartDrift {
    pub fn style(&self) -> String {
        format!(
            "--start-x: {}%; --end-x: {}%; --scale: {:.2}; animation-duration: {}s; animation-delay: {}s;",
            self.start_x, self.end_x, self.scale, self.duration_s, self.delay_s
        )
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let explore = Callback::from(|_: MouseEvent| scroll_to_anchor(config::JOURNEY_ANCHOR));
    let background = config::asset_url("hero-couple.jpg");

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-background::after {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to bottom, rgba(255, 248, 245, 0.3), rgba(255, 248, 245, 0.5), var(--background));
                    }
                    .floating-heart {
                        position: absolute;
                        left: var(--start-x);
                        top: 100%;
                        color: rgba(225, 130, 150, 0.3);
                        font-size: 2rem;
                        transform: scale(var(--scale));
                        animation: heartDrift linear infinite;
                        pointer-events: none;
                    }
                    @keyframes heartDrift {
                        from { top: 100%; left: var(--start-x); }
                        to { top: -20%; left: var(--end-x); }
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        text-align: center;
                        padding: 0 1rem;
                        max-width: 56rem;
                        animation: heroRise 0.8s ease-out both;
                    }
                    @keyframes heroRise {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-pulse {
                        display: inline-block;
                        color: var(--rose);
                        font-size: 1.5rem;
                        margin-bottom: 1.5rem;
                        animation: heartBeat 1.5s infinite;
                    }
                    @keyframes heartBeat {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.1); }
                    }
                    .hero-title {
                        font-family: var(--font-serif);
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 300;
                        margin-bottom: 1rem;
                    }
                    .hero-title span {
                        display: block;
                    }
                    .hero-subtitle {
                        font-size: 1.25rem;
                        max-width: 42rem;
                        margin: 0 auto 2rem;
                    }
                    .hero-couple {
                        font-family: var(--font-serif);
                        font-style: italic;
                        font-size: 1.75rem;
                        margin-bottom: 3rem;
                    }
                    .hero-explore {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.5rem;
                        margin: 0 auto;
                        border: none;
                        background: none;
                        color: var(--muted);
                        cursor: pointer;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        font-size: 0.875rem;
                    }
                    .hero-explore:hover {
                        color: var(--rose);
                    }
                    .hero-chevron {
                        animation: chevronBob 1.5s infinite;
                    }
                    @keyframes chevronBob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(8px); }
                    }
                "#}
            </style>
            <div class="hero-background">
                <img src={background} alt="Our love story" />
            </div>
            { for (0..FLOATING_HEARTS).map(|i| html! {
                <div key={i} class="floating-heart" style={heart_drift(i).style()}>{"♥"}</div>
            }) }
            <div class="hero-content">
                <div class="hero-pulse">{"♥"}</div>
                <h1 class="hero-title">
                    <span>{"Our Love"}</span>
                    <span class="text-romantic">{"Story"}</span>
                </h1>
                <p class="hero-subtitle">
                    {"A journey of two hearts becoming one, filled with beautiful moments, endless laughter, and unconditional love."}
                </p>
                <div class="hero-couple">
                    {"You "}<span class="text-rose">{"♥"}</span>{" & Me"}
                </div>
                <button class="hero-explore" onclick={explore}>
                    <span>{"Explore Our Journey"}</span>
                    <span class="hero-chevron">{"⌄"}</span>
                </button>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drift_values_stay_in_range() {
        for i in 0..FLOATING_HEARTS {
            let drift = heart_drift(i);
            assert!(drift.start_x < 100 && drift.end_x < 100);
            assert!((0.5..1.0).contains(&drift.scale));
            assert!((15..25).contains(&drift.duration_s));
            assert_eq!(drift.delay_s, i as u32 * 2);
        }
    }

    #[test]
    fn drift_is_stable_between_renders() {
        assert_eq!(heart_drift(4), heart_drift(4));
        assert!(heart_drift(1).style().contains("animation-delay: 2s;"));
    }
}
