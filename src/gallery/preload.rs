use log::{debug, info};
use std::cell::Cell;
use web_sys::HtmlImageElement;

use super::photos::Photo;

/// Something that can start fetching an asset without rendering it.
pub trait AssetFetcher {
    fn fetch(&self, url: &str);
}

/// Warms the browser cache through detached `<img>` handles.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageFetcher;

impl AssetFetcher for ImageFetcher {
    fn fetch(&self, url: &str) {
        match HtmlImageElement::new() {
            Ok(image) => image.set_src(url),
            Err(e) => debug!("Could not create preload image for {}: {:?}", url, e),
        }
    }
}

/// Issues one fetch per photo. Nothing is awaited or retried.
pub fn preload_all<F: AssetFetcher>(photos: &[Photo], fetcher: &F) -> usize {
    for photo in photos {
        fetcher.fetch(&photo.url());
    }
    photos.len()
}

/// One gallery's preload pass. Later runs are no-ops, so a remount of the
/// effect cannot fetch the store twice.
pub struct PreloadOnce<F> {
    fetcher: F,
    started: Cell<bool>,
}

impl<F: AssetFetcher> PreloadOnce<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            started: Cell::new(false),
        }
    }

    /// Returns how many fetches this call issued.
    pub fn run(&self, photos: &[Photo]) -> usize {
        if self.started.replace(true) {
            debug!("Gallery preload already ran");
            return 0;
        }
        let issued = preload_all(photos, &self.fetcher);
        info!("Preloading {} gallery images", issued);
        issued
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingFetcher;
    use super::*;
    use crate::gallery::photos;

    #[test]
    fn fetches_every_photo_once_in_order() {
        let fetcher = RecordingFetcher::default();
        let issued = preload_all(photos::all(), &fetcher);

        let urls = fetcher.urls.borrow();
        assert_eq!(issued, 6);
        assert_eq!(urls.len(), 6);
        for (url, photo) in urls.iter().zip(photos::all()) {
            assert_eq!(url, &photo.url());
        }
    }

    #[test]
    fn preload_once_fetches_the_store_a_single_time() {
        let preload = PreloadOnce::new(RecordingFetcher::default());

        assert_eq!(preload.run(photos::all()), 6);
        assert_eq!(preload.run(photos::all()), 0);
        assert_eq!(preload.fetcher().urls.borrow().len(), 6);
    }

    #[test]
    fn empty_store_fetches_nothing() {
        let fetcher = RecordingFetcher::default();
        assert_eq!(preload_all(&[], &fetcher), 0);
        assert!(fetcher.urls.borrow().is_empty());
    }
}
