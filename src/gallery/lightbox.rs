use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{KeyboardEvent, Window};
use yew::prelude::*;

use super::photos::Photo;
use super::selection::LightboxClick;

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub photo: Option<Photo>,
    pub on_close: Callback<()>,
}

/// Forwards only the clicks that should close the lightbox.
pub fn click_router(on_close: Callback<()>) -> Callback<LightboxClick> {
    Callback::from(move |click: LightboxClick| {
        if click.dismisses() {
            on_close.emit(());
        }
    })
}

pub fn render_lightbox(photo: Option<&Photo>, on_click: &Callback<LightboxClick>) -> Html {
    let Some(photo) = photo else {
        return html! {};
    };

    let on_backdrop = on_click.reform(|_: MouseEvent| LightboxClick::Backdrop);
    let on_content = {
        let on_click = on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(LightboxClick::Content);
        })
    };
    let on_close = {
        let on_click = on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(LightboxClick::CloseControl);
        })
    };

    html! {
        <div class="lightbox-backdrop" onclick={on_backdrop}>
            <div class="lightbox-content" onclick={on_content}>
                <img class="lightbox-image" src={photo.url()} alt={photo.label} />
                <div class="lightbox-caption">
                    <p>{ photo.caption }</p>
                </div>
                <button class="lightbox-close" aria-label="Close" onclick={on_close}>
                    { "✕" }
                </button>
            </div>
        </div>
    }
}

fn closes_on(key: &str) -> bool {
    key == "Escape"
}

/// Window `keydown` listener, removed again on drop.
struct EscapeListener {
    window: Window,
    callback: Closure<dyn FnMut(KeyboardEvent)>,
}

impl EscapeListener {
    fn register(on_close: Callback<()>) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if closes_on(&e.key()) {
                on_close.emit(());
            }
        }) as Box<dyn FnMut(KeyboardEvent)>);

        if let Err(e) = window.add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref()) {
            warn!("Could not listen for Escape: {:?}", e);
            return None;
        }
        Some(Self { window, callback })
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("keydown", self.callback.as_ref().unchecked_ref())
        {
            warn!("Could not stop listening for Escape: {:?}", e);
        }
    }
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        let on_close = props.on_close.clone();
        use_effect_with_deps(
            move |open: &bool| {
                let listener = if *open { EscapeListener::register(on_close) } else { None };
                move || drop(listener)
            },
            props.photo.is_some(),
        );
    }

    render_lightbox(props.photo.as_ref(), &click_router(props.on_close.clone()))
}
