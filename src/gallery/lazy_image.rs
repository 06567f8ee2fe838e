use log::debug;
use web_sys::{Element, Event};
use yew::prelude::*;

use super::lazy_state::{LazyAction, LazyLoadState};
use super::visibility::{watch, BrowserVisibility, RootMargin, Subscription, VisibilitySource};

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub src: String,
    pub alt: AttrValue,
    #[prop_or_default]
    pub root_margin: RootMargin,
    #[prop_or_default]
    pub on_load: Option<Callback<()>>,
}

/// Subscribes a tile to visibility and turns the first sighting into
/// [`LazyAction::Intersected`].
pub fn watch_tile<S: VisibilitySource>(
    source: &S,
    target: Option<&S::Target>,
    margin: RootMargin,
    dispatch: Callback<LazyAction>,
) -> Option<Subscription> {
    watch(source, target, margin, dispatch.reform(|_| LazyAction::Intersected))
}

/// Marks the tile loaded, then tells the owner.
pub fn load_handler(dispatch: Callback<LazyAction>, on_load: Option<Callback<()>>) -> Callback<()> {
    Callback::from(move |_| {
        dispatch.emit(LazyAction::Loaded);
        if let Some(on_load) = &on_load {
            on_load.emit(());
        }
    })
}

/// Placeholder plus, once the tile has been near the viewport, the image.
pub fn lazy_frame(state: LazyLoadState, props: &LazyImageProps, container: NodeRef, on_load: Callback<()>) -> Html {
    let onload = on_load.reform(|_: Event| ());
    let onerror = {
        let src = props.src.clone();
        Callback::from(move |_: Event| debug!("Image {} failed to load, keeping placeholder", src))
    };

    html! {
        <div ref={container} class="lazy-frame">
            <div class={state.placeholder_class()}></div>
            if state.renders_image() {
                <img
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    loading="lazy"
                    decoding="async"
                    class={state.image_class()}
                    onload={onload}
                    onerror={onerror}
                />
            }
        </div>
    }
}

#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let container = use_node_ref();
    let state = use_reducer(LazyLoadState::default);

    let dispatch = {
        let dispatcher = state.dispatcher();
        Callback::from(move |action: LazyAction| dispatcher.dispatch(action))
    };

    {
        let container = container.clone();
        let dispatch = dispatch.clone();
        let margin = props.root_margin;
        use_effect_with_deps(
            move |_| {
                let element = container.cast::<Element>();
                let subscription = watch_tile(&BrowserVisibility::detect(), element.as_ref(), margin, dispatch);
                move || {
                    if subscription.as_ref().map_or(false, Subscription::is_active) {
                        debug!("Tile unmounted before it became visible");
                    }
                    drop(subscription)
                }
            },
            (),
        );
    }

    lazy_frame(*state, props, container, load_handler(dispatch, props.on_load.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::Reducible;
    use crate::gallery::visibility::testing::ManualVisibility;
    use crate::html_testing::{attribute_values, count_tags};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn props() -> LazyImageProps {
        LazyImageProps {
            src: "/assets/memory-1.jpg".to_string(),
            alt: AttrValue::from("Beach walk"),
            root_margin: RootMargin::default(),
            on_load: None,
        }
    }

    fn tile() -> (Rc<RefCell<Rc<LazyLoadState>>>, Callback<LazyAction>) {
        let state = Rc::new(RefCell::new(Rc::new(LazyLoadState::default())));
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            })
        };
        (state, dispatch)
    }

    #[test]
    fn no_image_element_before_intersection() {
        let html = lazy_frame(LazyLoadState::default(), &props(), NodeRef::default(), Callback::noop());
        assert_eq!(count_tags(&html, "img"), 0);
        assert_eq!(count_tags(&html, "div"), 2);
    }

    #[test]
    fn image_element_after_intersection() {
        let state = LazyLoadState::default().mark_intersecting();
        let html = lazy_frame(state, &props(), NodeRef::default(), Callback::noop());
        assert_eq!(count_tags(&html, "img"), 1);
    }

    #[test]
    fn image_class_follows_load_state_only() {
        let visible = LazyLoadState::default().mark_intersecting();
        let html = lazy_frame(visible, &props(), NodeRef::default(), Callback::noop());
        assert_eq!(attribute_values(&html, "img", "class"), vec!["lazy-image".to_string()]);

        let html = lazy_frame(visible.mark_loaded(), &props(), NodeRef::default(), Callback::noop());
        assert_eq!(attribute_values(&html, "img", "class"), vec!["lazy-image loaded".to_string()]);
    }

    #[test]
    fn tile_subscribes_with_its_margin_and_flips_once() {
        let source = ManualVisibility::default();
        let (state, dispatch) = tile();
        let _subscription = watch_tile(&source, Some(&7), RootMargin(250), dispatch);

        assert_eq!(source.margin_for(7), Some(RootMargin(250)));
        assert!(!state.borrow().is_intersecting);

        assert_eq!(source.intersect(7), 1);
        assert!(state.borrow().is_intersecting);
        assert_eq!(source.intersect(7), 0);
        assert!(state.borrow().is_intersecting);
    }

    #[test]
    fn load_marks_state_and_notifies_owner() {
        let (state, dispatch) = tile();
        let notified = Rc::new(Cell::new(0));
        let on_load = {
            let notified = notified.clone();
            Callback::from(move |_| notified.set(notified.get() + 1))
        };

        dispatch.emit(LazyAction::Intersected);
        load_handler(dispatch, Some(on_load)).emit(());

        assert!(state.borrow().is_loaded);
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn unmount_before_load_leaves_nothing_armed() {
        let source = ManualVisibility::default();
        let (state, dispatch) = tile();
        let subscription = watch_tile(&source, Some(&1), RootMargin::default(), dispatch);

        drop(subscription);

        assert_eq!(source.armed(), 0);
        assert_eq!(source.teardowns(), 1);
        assert_eq!(source.intersect(1), 0);
        assert_eq!(**state.borrow(), LazyLoadState::default());
    }
}
