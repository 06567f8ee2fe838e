use log::info;
use std::rc::Rc;
use yew::prelude::*;

use super::lazy_image::LazyImage;
use super::lightbox::Lightbox;
use super::photos::{self, Photo, PhotoId};
use super::preload::{AssetFetcher, ImageFetcher, PreloadOnce};
use super::selection::{SelectionAction, SelectionState};
use crate::components::reveal::{reveal_classes, reveal_style, stagger_delay, use_reveal, Reveal, REVEAL_MARGIN};

const GALLERY_CSS: &str = r#"
    .gallery-section {
        padding: 6rem 1rem;
        background: var(--background);
    }
    .gallery-inner {
        max-width: 72rem;
        margin: 0 auto;
    }
    .gallery-header {
        text-align: center;
        margin-bottom: 4rem;
    }
    .gallery-grid {
        display: grid;
        grid-template-columns: repeat(2, 1fr);
        gap: 1rem;
    }
    @media (min-width: 768px) {
        .gallery-grid {
            grid-template-columns: repeat(3, 1fr);
            gap: 1.5rem;
        }
    }
    .gallery-tile {
        position: relative;
        aspect-ratio: 1 / 1;
        border-radius: 0.5rem;
        overflow: hidden;
        cursor: pointer;
        transform: translateZ(0);
        backface-visibility: hidden;
    }
    .gallery-tile.reveal {
        transform: scale(0.9);
    }
    .gallery-tile.revealed {
        transform: scale(1);
    }
    .gallery-tile.revealed:hover {
        transform: scale(1.02);
    }
    .lazy-frame {
        position: relative;
        width: 100%;
        height: 100%;
    }
    .lazy-placeholder {
        position: absolute;
        inset: 0;
        background: linear-gradient(135deg, rgba(225, 130, 150, 0.2), rgba(245, 200, 200, 0.2));
        opacity: 1;
        transition: opacity 0.5s;
    }
    .lazy-placeholder.faded {
        opacity: 0;
    }
    .lazy-image {
        width: 100%;
        height: 100%;
        object-fit: cover;
        opacity: 0;
        transition: opacity 0.5s, transform 0.5s ease-out;
        content-visibility: auto;
    }
    .lazy-image.loaded {
        opacity: 1;
    }
    .gallery-tile:hover .lazy-image,
    .gallery-tile:focus .lazy-image {
        transform: scale(1.1);
    }
    .tile-shade {
        position: absolute;
        inset: 0;
        background: linear-gradient(to top, rgba(40, 30, 35, 0.7), transparent);
        opacity: 0;
        transition: opacity 0.3s;
    }
    .tile-caption {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        padding: 1rem;
        color: #fff;
        font-family: var(--font-serif);
        font-size: 1.125rem;
        transform: translateY(100%);
        transition: transform 0.3s;
    }
    .tile-heart {
        position: absolute;
        top: 0.75rem;
        right: 0.75rem;
        color: var(--rose);
        font-size: 1.5rem;
        opacity: 0;
        transition: opacity 0.3s;
    }
    .gallery-tile:hover .tile-shade,
    .gallery-tile:focus .tile-shade,
    .gallery-tile:hover .tile-heart,
    .gallery-tile:focus .tile-heart {
        opacity: 1;
    }
    .gallery-tile:hover .tile-caption,
    .gallery-tile:focus .tile-caption {
        transform: translateY(0);
    }
    .lightbox-backdrop {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        background: rgba(40, 30, 35, 0.9);
        backdrop-filter: blur(4px);
        animation: lightboxFade 0.3s ease-out;
    }
    .lightbox-content {
        position: relative;
        width: 100%;
        max-width: 56rem;
        max-height: 90vh;
        animation: lightboxPop 0.3s ease-out;
    }
    .lightbox-image {
        width: 100%;
        height: 100%;
        max-height: 90vh;
        object-fit: contain;
        border-radius: 0.5rem;
        box-shadow: 0 20px 50px rgba(225, 130, 150, 0.3);
    }
    .lightbox-caption {
        position: absolute;
        bottom: 0;
        left: 0;
        right: 0;
        padding: 1.5rem;
        text-align: center;
        color: #fff;
        font-family: var(--font-serif);
        font-size: 1.5rem;
        background: linear-gradient(to top, rgba(40, 30, 35, 0.8), transparent);
        border-radius: 0 0 0.5rem 0.5rem;
    }
    .lightbox-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        width: 2.5rem;
        height: 2.5rem;
        border: none;
        border-radius: 50%;
        color: #fff;
        background: rgba(255, 255, 255, 0.2);
        cursor: pointer;
        transition: background 0.2s;
    }
    .lightbox-close:hover {
        background: rgba(255, 255, 255, 0.4);
    }
    @keyframes lightboxFade {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes lightboxPop {
        from { opacity: 0; transform: scale(0.9); }
        to { opacity: 1; transform: scale(1); }
    }
"#;

/// Enter and Space activate a focused tile.
pub fn activates(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Splits one selection dispatcher into the select callback tiles get and
/// the clear callback the lightbox gets.
pub fn selection_callbacks(dispatch: Callback<SelectionAction>) -> (Callback<PhotoId>, Callback<()>) {
    let on_select = dispatch.reform(SelectionAction::Select);
    let on_clear = dispatch.reform(|_| SelectionAction::Clear);
    (on_select, on_clear)
}

pub fn tile_markup(id: PhotoId, photo: &Photo, revealed: bool, on_select: &Callback<PhotoId>, node: NodeRef) -> Html {
    let onclick = on_select.reform(move |_: MouseEvent| id);
    let onkeydown = {
        let on_select = on_select.clone();
        Callback::from(move |e: KeyboardEvent| {
            if activates(&e.key()) {
                e.prevent_default();
                on_select.emit(id);
            }
        })
    };

    html! {
        <div
            ref={node}
            class={reveal_classes(revealed, classes!("gallery-tile"))}
            style={reveal_style(stagger_delay(id.index()))}
            role="button"
            tabindex="0"
            aria-label={photo.label}
            onclick={onclick}
            onkeydown={onkeydown}
        >
            <LazyImage src={photo.url()} alt={photo.label} />
            <div class="tile-shade"></div>
            <div class="tile-caption">
                <p>{ photo.caption }</p>
            </div>
            <span class="tile-heart">{ "♥" }</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryTileProps {
    pub id: PhotoId,
    pub photo: Photo,
    pub on_select: Callback<PhotoId>,
}

#[function_component(GalleryTile)]
pub fn gallery_tile(props: &GalleryTileProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), REVEAL_MARGIN);
    tile_markup(props.id, &props.photo, revealed, &props.on_select, node)
}

/// One tile per stored photo, in store order.
pub fn gallery_grid(on_select: &Callback<PhotoId>) -> Html {
    html! {
        <div class="gallery-grid">
            { for photos::enumerate().map(|(id, photo)| html! {
                <GalleryTile key={id.index()} id={id} photo={photo.clone()} on_select={on_select.clone()} />
            }) }
        </div>
    }
}

/// Mount-time work of the gallery: the one preload pass over the store.
/// Returns how many fetches it issued.
pub fn gallery_mounted<F: AssetFetcher>(preload: &PreloadOnce<F>) -> usize {
    info!("Photo gallery mounted with {} photos", photos::all().len());
    preload.run(photos::all())
}

#[function_component(PhotoGallery)]
pub fn photo_gallery() -> Html {
    let selection = use_reducer(SelectionState::default);
    let preload = use_memo(|_| PreloadOnce::new(ImageFetcher), ());

    {
        let preload = Rc::clone(&preload);
        use_effect_with_deps(
            move |_| {
                wasm_bindgen_futures::spawn_local(async move {
                    gallery_mounted(&preload);
                });
                || ()
            },
            (),
        );
    }

    let dispatch = {
        let selection = selection.clone();
        Callback::from(move |action: SelectionAction| selection.dispatch(action))
    };
    let (on_select, on_clear) = selection_callbacks(dispatch);

    html! {
        <section class={classes!("gallery-section", selection.is_open().then(|| "lightbox-open"))}>
            <style>{ GALLERY_CSS }</style>
            <div class="gallery-inner">
                <Reveal class="gallery-header">
                    <h2 class="section-title">
                        {"Cherished "}<span class="text-romantic">{"Moments"}</span>
                    </h2>
                    <p class="section-subtitle">
                        {"Every picture tells a story, every moment a memory to treasure"}
                    </p>
                </Reveal>
                { gallery_grid(&on_select) }
            </div>
            <Lightbox photo={selection.selected_photo().cloned()} on_close={on_clear} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::lazy_image::{lazy_frame, watch_tile, LazyImageProps};
    use crate::gallery::lazy_state::LazyLoadState;
    use crate::gallery::lightbox::{click_router, render_lightbox};
    use crate::gallery::preload::testing::RecordingFetcher;
    use crate::gallery::selection::LightboxClick;
    use crate::gallery::visibility::testing::ManualVisibility;
    use crate::gallery::visibility::RootMargin;
    use crate::html_testing::{count_components, count_tags, texts};
    use std::cell::RefCell;
    use yew::Reducible;

    fn reducer<T: Reducible + Default + 'static>() -> (Rc<RefCell<Rc<T>>>, Callback<T::Action>) {
        let state = Rc::new(RefCell::new(Rc::new(T::default())));
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action| {
                let current = state.borrow().clone();
                *state.borrow_mut() = current.reduce(action);
            })
        };
        (state, dispatch)
    }

    fn frame_for(photo: &Photo, state: LazyLoadState) -> Html {
        let props = LazyImageProps {
            src: photo.url(),
            alt: AttrValue::from(photo.label),
            root_margin: RootMargin::default(),
            on_load: None,
        };
        lazy_frame(state, &props, NodeRef::default(), Callback::noop())
    }

    #[test]
    fn grid_has_one_tile_per_photo() {
        let html = gallery_grid(&Callback::noop());
        assert_eq!(count_components(&html), photos::all().len());
    }

    #[test]
    fn tiles_show_their_caption_in_store_order() {
        let captions: Vec<String> = photos::enumerate()
            .flat_map(|(id, photo)| texts(&tile_markup(id, photo, true, &Callback::noop(), NodeRef::default())))
            .filter(|text| text != "♥")
            .collect();
        let expected: Vec<String> = photos::all().iter().map(|p| p.caption.to_string()).collect();
        assert_eq!(captions, expected);
    }

    #[test]
    fn tile_images_are_lazy_components() {
        let (id, photo) = photos::enumerate().next().expect("store is not empty");
        let html = tile_markup(id, photo, false, &Callback::noop(), NodeRef::default());
        assert_eq!(count_tags(&html, "img"), 0);
        assert_eq!(count_components(&html), 1);
    }

    #[test]
    fn space_and_enter_activate_tiles() {
        assert!(activates("Enter"));
        assert!(activates(" "));
        assert!(!activates("Tab"));
    }

    #[test]
    fn selection_callbacks_drive_reducer() {
        let (selection, dispatch) = reducer::<SelectionState>();
        let (on_select, on_clear) = selection_callbacks(dispatch);
        let ids: Vec<PhotoId> = photos::enumerate().map(|(id, _)| id).collect();

        on_clear.emit(());
        assert!(!selection.borrow().is_open());

        on_select.emit(ids[0]);
        on_select.emit(ids[5]);
        assert_eq!(selection.borrow().selected(), Some(ids[5]));

        on_clear.emit(());
        assert_eq!(selection.borrow().selected(), None);
    }

    #[test]
    fn visible_tile_click_opens_lightbox_with_its_caption() {
        let source = ManualVisibility::default();
        let preload = PreloadOnce::new(RecordingFetcher::default());

        let tiles: Vec<_> = photos::enumerate()
            .map(|(id, _)| {
                let (state, dispatch) = reducer::<LazyLoadState>();
                let subscription = watch_tile(&source, Some(&id.index()), RootMargin::default(), dispatch);
                (state, subscription)
            })
            .collect();
        assert_eq!(gallery_mounted(&preload), 6);
        assert_eq!(source.subscriptions(), 6);

        assert_eq!(source.intersect(2), 1);
        for (index, ((state, _), photo)) in tiles.iter().zip(photos::all()).enumerate() {
            let images = count_tags(&frame_for(photo, **state.borrow()), "img");
            assert_eq!(images, usize::from(index == 2), "tile {}", index);
        }

        let (selection, dispatch) = reducer::<SelectionState>();
        let (on_select, on_clear) = selection_callbacks(dispatch);
        let (tile_two, _) = photos::enumerate().nth(2).expect("six photos");
        on_select.emit(tile_two);

        let selected = selection.borrow().selected_photo();
        assert_eq!(selected, Some(&photos::all()[2]));

        let router = click_router(on_clear);
        let html = render_lightbox(selected, &router);
        let caption = photos::all()[2].caption;
        assert_eq!(texts(&html).iter().filter(|t| t.as_str() == caption).count(), 1);

        router.emit(LightboxClick::Content);
        assert!(selection.borrow().is_open());
        router.emit(LightboxClick::Backdrop);
        assert!(!selection.borrow().is_open());
        assert!(render_lightbox(selection.borrow().selected_photo(), &router) == html! {});

        assert_eq!(preload.fetcher().urls.borrow().len(), 6);
    }

    #[test]
    fn preload_count_ignores_tile_visibility() {
        let source = ManualVisibility::default();
        let preload = PreloadOnce::new(RecordingFetcher::default());
        let _subscriptions: Vec<_> = photos::enumerate()
            .map(|(id, _)| {
                let (_, dispatch) = reducer::<LazyLoadState>();
                watch_tile(&source, Some(&id.index()), RootMargin::default(), dispatch)
            })
            .collect();

        for index in 0..photos::all().len() {
            source.intersect(index);
        }
        gallery_mounted(&preload);

        assert_eq!(preload.fetcher().urls.borrow().len(), photos::all().len());
    }

    #[test]
    fn remounting_gallery_preloads_only_once() {
        let preload = PreloadOnce::new(RecordingFetcher::default());

        assert_eq!(gallery_mounted(&preload), photos::all().len());
        assert_eq!(gallery_mounted(&preload), 0);

        let urls = preload.fetcher().urls.borrow();
        let expected: Vec<String> = photos::all().iter().map(Photo::url).collect();
        assert_eq!(*urls, expected);
    }
}
