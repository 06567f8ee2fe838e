//! Walks virtual DOM trees produced by plain render functions.
//! Components nested inside are opaque and skipped.

use yew::virtual_dom::VNode;
use yew::Html;

pub fn texts(html: &Html) -> Vec<String> {
    let mut out = Vec::new();
    walk(html, &mut |node| {
        if let VNode::VText(text) = node {
            out.push(text.text.to_string());
        }
    });
    out
}

pub fn count_tags(html: &Html, name: &str) -> usize {
    let mut count = 0;
    walk(html, &mut |node| {
        if let VNode::VTag(tag) = node {
            if tag.tag() == name {
                count += 1;
            }
        }
    });
    count
}

/// Values of `attribute` on every `name` tag, in tree order.
pub fn attribute_values(html: &Html, name: &str, attribute: &str) -> Vec<String> {
    let mut out = Vec::new();
    walk(html, &mut |node| {
        if let VNode::VTag(tag) = node {
            if tag.tag() == name {
                out.extend(
                    tag.attributes
                        .iter()
                        .filter(|(key, _)| *key == attribute)
                        .map(|(_, value)| value.to_string()),
                );
            }
        }
    });
    out
}

pub fn count_components(html: &Html) -> usize {
    let mut count = 0;
    walk(html, &mut |node| {
        if let VNode::VComp(_) = node {
            count += 1;
        }
    });
    count
}

fn walk(node: &VNode, visit: &mut dyn FnMut(&VNode)) {
    visit(node);
    match node {
        VNode::VTag(tag) => {
            for child in tag.children().iter() {
                walk(child, visit);
            }
        }
        VNode::VList(list) => {
            for child in list.iter() {
                walk(child, visit);
            }
        }
        _ => {}
    }
}
