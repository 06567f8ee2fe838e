use yew::prelude::*;

use crate::components::reveal::{stagger_delay, Reveal};
use crate::gallery::visibility::RootMargin;
use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventIcon {
    Heart,
    Calendar,
    Location,
    Star,
}

impl EventIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            EventIcon::Heart => "♥",
            EventIcon::Calendar => "📅",
            EventIcon::Location => "📍",
            EventIcon::Star => "★",
        }
    }
}

pub struct TimelineEvent {
    pub date: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: EventIcon,
}

pub const EVENTS: &[TimelineEvent] = &[
    TimelineEvent {
        date: "The Beginning",
        title: "When We First Met",
        description: "That magical moment when our eyes met and everything changed. Little did we know, this was the start of something beautiful.",
        icon: EventIcon::Heart,
    },
    TimelineEvent {
        date: "First Date",
        title: "Coffee & Conversations",
        description: "Hours felt like minutes as we talked about everything and nothing. The world around us faded away.",
        icon: EventIcon::Calendar,
    },
    TimelineEvent {
        date: "Adventures",
        title: "Exploring Together",
        description: "From spontaneous road trips to quiet evenings at home, every moment with you became an adventure worth remembering.",
        icon: EventIcon::Location,
    },
    TimelineEvent {
        date: "Forever",
        title: "Building Our Future",
        description: "Every day with you is a gift. Here's to countless more memories, laughter, and love that grows stronger with time.",
        icon: EventIcon::Star,
    },
];

/// Even events sit on the left, odd ones on the right.
pub fn side_class(index: usize) -> &'static str {
    if index % 2 == 0 {
        "timeline-item from-left"
    } else {
        "timeline-item from-right"
    }
}

#[function_component(Journey)]
pub fn journey() -> Html {
    html! {
        <section id={config::JOURNEY_ANCHOR} class="journey">
            <style>
                {r#"
                    .journey {
                        padding: 6rem 1rem;
                        background: linear-gradient(180deg, var(--background), #fdeef0);
                    }
                    .journey-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .timeline {
                        position: relative;
                    }
                    .timeline-line {
                        position: absolute;
                        left: 2rem;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: linear-gradient(to bottom, var(--rose), var(--gold), var(--rose));
                    }
                    .timeline-item {
                        position: relative;
                        display: flex;
                        align-items: center;
                        margin-bottom: 3rem;
                    }
                    .timeline-item.reveal.from-left { transform: translateX(-50px); }
                    .timeline-item.reveal.from-right { transform: translateX(50px); }
                    .timeline-item.revealed { transform: translateX(0); }
                    .timeline-card {
                        margin-left: 5rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: linear-gradient(135deg, #fff, #fff7f5);
                        box-shadow: 0 10px 30px rgba(225, 130, 150, 0.15);
                        transition: box-shadow 0.3s;
                    }
                    .timeline-card:hover {
                        box-shadow: 0 10px 30px rgba(212, 175, 55, 0.25);
                    }
                    .timeline-date {
                        font-size: 0.75rem;
                        text-transform: uppercase;
                        letter-spacing: 0.2em;
                        color: var(--rose);
                    }
                    .timeline-card h3 {
                        font-family: var(--font-serif);
                        font-size: 1.5rem;
                        margin: 0.5rem 0;
                    }
                    .timeline-card p {
                        font-size: 0.875rem;
                        line-height: 1.6;
                        color: var(--muted);
                    }
                    .timeline-icon {
                        position: absolute;
                        left: 2rem;
                        transform: translateX(-50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        background: linear-gradient(135deg, var(--rose), var(--gold));
                        transition: transform 0.3s;
                    }
                    .timeline-icon:hover {
                        transform: translateX(-50%) scale(1.2);
                    }
                    @media (min-width: 768px) {
                        .timeline-line, .timeline-icon { left: 50%; }
                        .timeline-card { margin-left: 0; width: 50%; }
                        .from-left .timeline-card { padding-right: 3rem; text-align: right; }
                        .from-right { flex-direction: row-reverse; }
                        .from-right .timeline-card { padding-left: 3rem; }
                    }
                "#}
            </style>
            <div class="journey-inner">
                <Reveal class="section-header">
                    <h2 class="section-title">{"Our "}<span class="text-romantic">{"Journey"}</span></h2>
                    <p class="section-subtitle">{"Every love story is beautiful, but ours is my favorite"}</p>
                </Reveal>
                <div class="timeline">
                    <div class="timeline-line"></div>
                    { for EVENTS.iter().enumerate().map(|(i, event)| html! {
                        <Reveal key={i} class={side_class(i)} delay_ms={stagger_delay(i)} margin={RootMargin(-100)}>
                            <div class="timeline-card">
                                <span class="timeline-date">{ event.date }</span>
                                <h3>{ event.title }</h3>
                                <p>{ event.description }</p>
                            </div>
                            <div class="timeline-icon">{ event.icon.glyph() }</div>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}
