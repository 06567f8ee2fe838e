use chrono::Datelike;
use yew::prelude::*;

use crate::components::reveal::Reveal;

pub fn copyright_line(year: i32) -> String {
    format!("© {} Our Love Story", year)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 4rem 1rem;
                        text-align: center;
                        background: #fff;
                    }
                    .footer-heart {
                        font-size: 2rem;
                        color: var(--rose);
                        margin-bottom: 1.5rem;
                        animation: heartBeat 1.5s infinite;
                    }
                    .site-footer h3 {
                        font-family: var(--font-serif);
                        font-size: 2.25rem;
                        margin-bottom: 1rem;
                    }
                    .footer-note {
                        max-width: 28rem;
                        margin: 0 auto 2rem;
                        color: var(--muted);
                    }
                    .footer-made {
                        font-size: 0.875rem;
                        color: var(--muted);
                    }
                    .footer-copyright {
                        margin-top: 1rem;
                        font-size: 0.75rem;
                        color: rgba(120, 110, 115, 0.6);
                    }
                "#}
            </style>
            <Reveal>
                <div class="footer-heart">{"♥"}</div>
                <h3>{"Forever "}<span class="text-romantic">{"Yours"}</span></h3>
                <p class="footer-note">
                    {"Thank you for being my person. Here's to many more chapters in our beautiful story."}
                </p>
                <div class="footer-made">
                    {"Made with "}<span class="text-rose">{"♥"}</span>{" for you"}
                </div>
                <p class="footer-copyright">{ copyright_line(year) }</p>
            </Reveal>
        </footer>
    }
}
