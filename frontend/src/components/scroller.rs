use yew::prelude::*;

use crate::components::hover::use_hover_flag;

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollerItem {
    pub src: &'static str,
    pub alt: &'static str,
    pub caption: &'static str,
}

/// The strip is the item list twice over; the CSS animation shifts it by
/// half its width, so the second copy takes the first one's place.
pub fn looped<T>(items: &[T]) -> impl Iterator<Item = (usize, &T)> + '_ {
    items.iter().chain(items.iter()).enumerate()
}

fn play_state(hovered: bool) -> &'static str {
    if hovered {
        "paused"
    } else {
        "running"
    }
}

#[derive(Properties, PartialEq)]
pub struct ScrollerProps {
    pub items: Vec<ScrollerItem>,
    #[prop_or(20)]
    pub duration_secs: u32,
}

#[function_component(Scroller)]
pub fn scroller(props: &ScrollerProps) -> Html {
    let node = use_node_ref();
    let hovered = use_hover_flag(node.clone());

    let style = format!(
        "animation-duration: {}s; animation-play-state: {};",
        props.duration_secs,
        play_state(hovered)
    );

    html! {
        <div class="scroller-container">
            <style>
                {r#"
                    .scroller-container { overflow: hidden; }
                    .scroller { display: flex; width: max-content; animation: scroll linear infinite; }
                    .scroller-item { margin: 0 1rem; }
                    .scroller-item img { width: 16rem; height: 16rem; object-fit: cover; border-radius: 0.5rem; }
                    .scroller-item p { text-align: center; margin-top: 0.5rem; color: #fff; }
                    @keyframes scroll {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
            <div ref={node} class="scroller" style={style}>
                { for looped(&props.items).map(|(i, item)| html! {
                    <div class="scroller-item" key={i} aria-hidden={(i >= props.items.len()).to_string()}>
                        <img src={item.src} alt={item.alt} />
                        <p>{ item.caption }</p>
                    </div>
                }) }
            </div>
        </div>
    }
}
