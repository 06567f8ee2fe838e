use yew::prelude::*;

use crate::config;
use crate::gallery::grid::PhotoGallery;
use crate::pages::footer::Footer;
use crate::pages::hero::Hero;
use crate::pages::journey::Journey;
use crate::pages::quotes::Quotes;

#[function_component(Index)]
pub fn index() -> Html {
    html! {
        <div class="page">
            <style>
                {r#"
                    :root {
                        --background: #fff8f5;
                        --foreground: #3a2e33;
                        --muted: #7a6d72;
                        --rose: #e18296;
                        --gold: #d4af37;
                        --font-serif: "Playfair Display", Georgia, serif;
                        --font-sans: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
                    }
                    html {
                        scroll-behavior: smooth;
                    }
                    body {
                        margin: 0;
                        background: var(--background);
                        color: var(--foreground);
                        font-family: var(--font-sans);
                    }
                    .page {
                        min-height: 100vh;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 4rem;
                    }
                    .section-title {
                        font-family: var(--font-serif);
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 400;
                        margin: 0 0 1rem;
                    }
                    .section-subtitle {
                        max-width: 36rem;
                        margin: 0 auto;
                        color: var(--muted);
                    }
                    .text-romantic {
                        background: linear-gradient(135deg, var(--rose), var(--gold));
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .text-rose {
                        color: var(--rose);
                    }
                    .reveal {
                        opacity: 0;
                        transform: translateY(20px);
                        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
                    }
                    .reveal.revealed {
                        opacity: 1;
                        transform: none;
                    }
                "#}
            </style>
            <Hero />
            <Journey />
            <div id={config::GALLERY_ANCHOR}>
                <PhotoGallery />
            </div>
            <div id={config::QUOTES_ANCHOR}>
                <Quotes />
            </div>
            <Footer />
        </div>
    }
}
