use crate::config;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Photo {
    pub source: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
}

impl Photo {
    pub fn url(&self) -> String {
        config::asset_url(self.source)
    }
}

/// Position of a photo in the store. Only handed out by [`enumerate`], so a
/// `PhotoId` always points at an existing photo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhotoId(usize);

impl PhotoId {
    pub fn index(self) -> usize {
        self.0
    }

    pub fn photo(self) -> &'static Photo {
        assert!(self.0 < PHOTOS.len(), "photo id {} outside the store", self.0);
        &PHOTOS[self.0]
    }
}

const PHOTOS: &[Photo] = &[
    Photo { source: "memory-1.jpg", label: "Beach walk", caption: "Walking hand in hand" },
    Photo { source: "memory-2.jpg", label: "Coffee date", caption: "Our cozy cafe moments" },
    Photo { source: "memory-3.jpg", label: "Dancing", caption: "Dancing under the stars" },
    Photo { source: "memory-4.jpg", label: "Garden picnic", caption: "Spring blossoms together" },
    Photo { source: "memory-5.jpg", label: "Mountain sunset", caption: "Adventures we share" },
    Photo { source: "memory-6.jpg", label: "Cooking together", caption: "Cooking up love" },
];

pub fn all() -> &'static [Photo] {
    PHOTOS
}

pub fn enumerate() -> impl Iterator<Item = (PhotoId, &'static Photo)> {
    PHOTOS.iter().enumerate().map(|(i, photo)| (PhotoId(i), photo))
}
