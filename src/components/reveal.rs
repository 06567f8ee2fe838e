use yew::prelude::*;

use crate::config;
use crate::gallery::visibility::{watch_node, RootMargin};

/// Entrance sections start slightly inside the viewport.
pub const REVEAL_MARGIN: RootMargin = RootMargin(-50);

/// `true` from the first time `node` scrolls into view.
#[hook]
pub fn use_reveal(node: NodeRef, margin: RootMargin) -> bool {
    let revealed = use_state(|| false);

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = watch_node(&node, margin, Callback::from(move |_| revealed.set(true)));
                move || drop(subscription)
            },
            (),
        );
    }

    *revealed
}

pub fn stagger_delay(index: usize) -> u32 {
    index as u32 * config::REVEAL_STAGGER_MS
}

pub fn reveal_style(delay_ms: u32) -> Option<String> {
    (delay_ms > 0).then(|| format!("transition-delay: {}ms;", delay_ms))
}

pub fn reveal_classes(revealed: bool, extra: Classes) -> Classes {
    classes!("reveal", revealed.then(|| "revealed"), extra)
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or(REVEAL_MARGIN)]
    pub margin: RootMargin,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), props.margin);

    html! {
        <div
            ref={node}
            class={reveal_classes(revealed, props.class.clone())}
            style={reveal_style(props.delay_ms)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_grows_by_step() {
        assert_eq!(stagger_delay(0), 0);
        assert_eq!(stagger_delay(3), 3 * config::REVEAL_STAGGER_MS);
    }

    #[test]
    fn no_delay_means_no_style() {
        assert_eq!(reveal_style(0), None);
        assert_eq!(reveal_style(200).as_deref(), Some("transition-delay: 200ms;"));
    }

    #[test]
    fn revealed_class_added_once_visible() {
        let hidden = reveal_classes(false, classes!("tile"));
        let shown = reveal_classes(true, classes!("tile"));
        assert!(!hidden.contains("revealed"));
        assert!(shown.contains("revealed"));
        assert!(shown.contains("tile"));
    }
}
