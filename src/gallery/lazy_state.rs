use std::rc::Rc;
use yew::Reducible;

/// Per-tile loading flags. Both only ever move from `false` to `true`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LazyLoadState {
    pub is_intersecting: bool,
    pub is_loaded: bool,
}

impl LazyLoadState {
    pub fn mark_intersecting(self) -> Self {
        Self {
            is_intersecting: true,
            ..self
        }
    }

    /// A load event can only come from a rendered image, so it is ignored
    /// while the tile has not intersected yet.
    pub fn mark_loaded(self) -> Self {
        if !self.is_intersecting {
            return self;
        }
        Self {
            is_loaded: true,
            ..self
        }
    }

    pub fn renders_image(&self) -> bool {
        self.is_intersecting
    }

    pub fn placeholder_class(&self) -> &'static str {
        if self.is_loaded {
            "lazy-placeholder faded"
        } else {
            "lazy-placeholder"
        }
    }

    pub fn image_class(&self) -> &'static str {
        if self.is_loaded {
            "lazy-image loaded"
        } else {
            "lazy-image"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LazyAction {
    Intersected,
    Loaded,
}

impl Reducible for LazyLoadState {
    type Action = LazyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            LazyAction::Intersected => self.mark_intersecting(),
            LazyAction::Loaded => self.mark_loaded(),
        };
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}
