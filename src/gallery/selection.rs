use log::debug;
use std::rc::Rc;
use yew::Reducible;

use super::photos::{Photo, PhotoId};

/// Which photo the lightbox shows, if any. Only the gallery grid holds one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<PhotoId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    Select(PhotoId),
    Clear,
}

impl SelectionState {
    pub fn select(self, id: PhotoId) -> Self {
        Self { selected: Some(id) }
    }

    pub fn clear(self) -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<PhotoId> {
        self.selected
    }

    pub fn selected_photo(&self) -> Option<&'static Photo> {
        self.selected.map(PhotoId::photo)
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }
}

impl Reducible for SelectionState {
    type Action = SelectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            SelectionAction::Select(id) => self.select(id),
            SelectionAction::Clear => self.clear(),
        };
        if next == *self {
            return self;
        }
        debug!("Gallery selection {:?} -> {:?}", self.selected(), next.selected());
        Rc::new(next)
    }
}

/// Where a click inside the open lightbox landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxClick {
    Backdrop,
    Content,
    CloseControl,
}

impl LightboxClick {
    pub fn dismisses(self) -> bool {
        !matches!(self, LightboxClick::Content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::photos;

    fn ids() -> Vec<PhotoId> {
        photos::enumerate().map(|(id, _)| id).collect()
    }

    fn apply(state: Rc<SelectionState>, actions: &[SelectionAction]) -> Rc<SelectionState> {
        actions.iter().fold(state, |state, action| state.reduce(*action))
    }

    #[test]
    fn starts_closed() {
        let state = SelectionState::default();
        assert!(!state.is_open());
        assert_eq!(state.selected_photo(), None);
    }

    #[test]
    fn last_select_wins() {
        let ids = ids();
        let state = apply(
            Rc::new(SelectionState::default()),
            &[SelectionAction::Select(ids[1]), SelectionAction::Select(ids[4])],
        );
        assert_eq!(state.selected(), Some(ids[4]));
        assert_eq!(state.selected_photo(), Some(&photos::all()[4]));
    }

    #[test]
    fn clear_without_select_is_noop() {
        let state = Rc::new(SelectionState::default());
        let cleared = state.clone().reduce(SelectionAction::Clear);
        assert!(Rc::ptr_eq(&state, &cleared));
    }

    #[test]
    fn reselecting_same_photo_keeps_state() {
        let ids = ids();
        let open = Rc::new(SelectionState::default()).reduce(SelectionAction::Select(ids[0]));
        let again = open.clone().reduce(SelectionAction::Select(ids[0]));
        assert!(Rc::ptr_eq(&open, &again));
    }

    #[test]
    fn select_then_clear_closes() {
        let ids = ids();
        let state = apply(
            Rc::new(SelectionState::default()),
            &[SelectionAction::Select(ids[2]), SelectionAction::Clear],
        );
        assert!(!state.is_open());
    }

    #[test]
    fn only_clicks_outside_the_photo_dismiss() {
        assert!(LightboxClick::Backdrop.dismisses());
        assert!(LightboxClick::CloseControl.dismisses());
        assert!(!LightboxClick::Content.dismisses());
    }
}
