use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Whether the pointer is currently over `node`.
#[hook]
pub fn use_hover_flag(node: NodeRef) -> bool {
    let hovered = use_state_eq(|| false);

    {
        let hovered = hovered.clone();
        use_event(node.clone(), "mouseenter", move |_: Event| hovered.set(true));
    }
    {
        let hovered = hovered.clone();
        use_event(node, "mouseleave", move |_: Event| hovered.set(false));
    }

    *hovered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[function_component(HoverReadout)]
    fn hover_readout() -> Html {
        let node = use_node_ref();
        let hovered = use_hover_flag(node.clone());
        html! { <div ref={node} data-hovered={hovered.to_string()} /> }
    }

    #[test]
    fn starts_unhovered() {
        let html = render::<HoverReadout>(());
        assert!(html.contains(r#"data-hovered="false""#));
    }
}
