use yew::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod gallery {
    pub mod photos;
    pub mod lazy_state;
    pub mod visibility;
    pub mod preload;
    pub mod selection;
    pub mod lazy_image;
    pub mod lightbox;
    pub mod grid;
}
mod components {
    pub mod reveal;
    pub mod scroll;
}
mod pages {
    pub mod index;
    pub mod hero;
    pub mod journey;
    pub mod quotes;
    pub mod footer;
}
#[cfg(test)]
mod html_testing;

use components::scroll::{anchor_href, scroll_to_anchor};
use pages::index::Index;

const NAV_LINKS: &[(&str, &str)] = &[
    ("Our Journey", config::JOURNEY_ANCHOR),
    ("Memories", config::GALLERY_ANCHOR),
    ("Love Notes", config::QUOTES_ANCHOR),
];

/// Whether the nav bar switches to its solid style at this scroll offset.
fn nav_scrolled(scroll_top: f64) -> bool {
    scroll_top > config::NAV_SCROLL_THRESHOLD_PX
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let scroll_callback = window.as_ref().map(|window| {
                let window = window.clone();
                Closure::wrap(Box::new(move || {
                    let scroll_top = window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(nav_scrolled(scroll_top));
                }) as Box<dyn FnMut()>)
            });

            if let (Some(window), Some(callback)) = (&window, &scroll_callback) {
                if let Err(e) = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                    warn!("Could not watch page scroll: {:?}", e);
                }
            }

            move || {
                if let (Some(window), Some(callback)) = (window, scroll_callback) {
                    if let Err(e) = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                        warn!("Could not stop watching page scroll: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 40;
                        transition: background 0.3s, box-shadow 0.3s;
                    }
                    .top-nav.scrolled {
                        background: rgba(255, 248, 245, 0.9);
                        backdrop-filter: blur(8px);
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.05);
                    }
                    .nav-content {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: var(--font-serif);
                        font-size: 1.5rem;
                        color: var(--rose);
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: var(--foreground);
                        text-decoration: none;
                        font-size: 0.875rem;
                        letter-spacing: 0.05em;
                    }
                    .nav-link:hover {
                        color: var(--rose);
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        border: none;
                        background: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: var(--foreground);
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1rem;
                            background: var(--background);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#" class="nav-logo">{"♥ Us"}</a>
                <button class="burger-menu" aria-label="Menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for NAV_LINKS.iter().map(|(label, anchor)| {
                        let menu_open = menu_open.clone();
                        let onclick = Callback::from(move |e: MouseEvent| {
                            e.prevent_default();
                            menu_open.set(false);
                            scroll_to_anchor(anchor);
                        });
                        html! {
                            <a key={*anchor} href={anchor_href(anchor)} class="nav-link" onclick={onclick}>
                                { *label }
                            </a>
                        }
                    }) }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Index />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting love story page");
    yew::Renderer::<App>::new().render();
}
