use yew::prelude::*;

use crate::components::reveal::{Reveal, REVEAL_MARGIN};

pub struct LoveQuote {
    pub text: &'static str,
    pub author: &'static str,
}

pub const QUOTES: &[LoveQuote] = &[
    LoveQuote {
        text: "In all the world, there is no heart for me like yours. In all the world, there is no love for you like mine.",
        author: "Maya Angelou",
    },
    LoveQuote {
        text: "I love you not only for what you are, but for what I am when I am with you.",
        author: "Roy Croft",
    },
    LoveQuote {
        text: "The best thing to hold onto in life is each other.",
        author: "Audrey Hepburn",
    },
];

#[function_component(Quotes)]
pub fn quotes() -> Html {
    html! {
        <section class="quotes">
            <style>
                {r#"
                    .quotes {
                        position: relative;
                        overflow: hidden;
                        padding: 6rem 1rem;
                        background: linear-gradient(135deg, #fdeef0, #fff7ea);
                    }
                    .quotes-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                    }
                    .quotes-deco {
                        position: absolute;
                        font-size: 8rem;
                        opacity: 0.1;
                    }
                    .quotes-deco.top { top: 2.5rem; left: 2.5rem; color: var(--rose); }
                    .quotes-deco.bottom { bottom: 2.5rem; right: 2.5rem; color: var(--gold); font-size: 10rem; }
                    .quote-card {
                        margin-bottom: 2rem;
                        padding: 2.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.8);
                        backdrop-filter: blur(4px);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
                        transition: box-shadow 0.3s;
                    }
                    .quote-card:hover {
                        box-shadow: 0 10px 30px rgba(225, 130, 150, 0.2);
                    }
                    .quote-mark {
                        font-size: 2.5rem;
                        color: rgba(225, 130, 150, 0.3);
                    }
                    .quote-card blockquote {
                        font-family: var(--font-serif);
                        font-style: italic;
                        font-size: 1.5rem;
                        line-height: 1.6;
                        margin: 0 0 1rem;
                    }
                    .quote-author {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }
                    .quote-author::before {
                        content: '';
                        width: 2rem;
                        height: 1px;
                        background: linear-gradient(to right, var(--rose), var(--gold));
                    }
                    .quote-author cite {
                        font-style: normal;
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                "#}
            </style>
            <div class="quotes-deco top">{"♥"}</div>
            <div class="quotes-deco bottom">{"♥"}</div>
            <div class="quotes-inner">
                <Reveal class="section-header">
                    <h2 class="section-title">{"Words of "}<span class="text-romantic">{"Love"}</span></h2>
                    <p class="section-subtitle">{"Beautiful words that speak to the heart"}</p>
                </Reveal>
                { for QUOTES.iter().enumerate().map(|(i, quote)| html! {
                    <Reveal key={i} class="quote-card" delay_ms={i as u32 * 200} margin={REVEAL_MARGIN}>
                        <div class="quote-mark">{"“"}</div>
                        <blockquote>{ format!("\"{}\"", quote.text) }</blockquote>
                        <div class="quote-author"><cite>{ quote.author }</cite></div>
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
