use log::{debug, info};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Event, HtmlVideoElement};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::hover::use_hover_flag;

#[derive(Clone, Debug, PartialEq)]
pub struct VideoSource {
    pub mp4: &'static str,
    pub webm: &'static str,
    pub fallback: &'static str,
    pub alt: &'static str,
}

#[derive(Properties, PartialEq)]
pub struct ProjectVideoProps {
    pub source: VideoSource,
}

/// Starts playback. A refused autoplay swaps in the still image until a
/// later attempt succeeds.
fn try_play(node: &NodeRef, fallback: UseStateHandle<bool>) {
    let Some(video) = node.cast::<HtmlVideoElement>() else {
        return;
    };
    video.set_muted(true);
    match video.play() {
        Ok(promise) => spawn_local(async move {
            match JsFuture::from(promise).await {
                Ok(_) => fallback.set(false),
                Err(e) => {
                    info!("Autoplay failed: {:?}", e);
                    fallback.set(true);
                }
            }
        }),
        Err(e) => {
            info!("Autoplay failed: {:?}", e);
            fallback.set(true);
        }
    }
}

/// Muted looping clip that pauses while the pointer is over it.
#[function_component(ProjectVideo)]
pub fn project_video(props: &ProjectVideoProps) -> Html {
    let node = use_node_ref();
    let hovered = use_hover_flag(node.clone());
    let fallback = use_state_eq(|| false);

    {
        let node = node.clone();
        let fallback = fallback.clone();
        use_effect_with_deps(
            move |hovered| {
                if *hovered {
                    if let Some(video) = node.cast::<HtmlVideoElement>() {
                        if let Err(e) = video.pause() {
                            debug!("Pause failed: {:?}", e);
                        }
                    }
                } else {
                    try_play(&node, fallback);
                }
                || ()
            },
            hovered,
        );
    }

    // Browsers that block autoplay allow it after the first gesture.
    let retry = {
        let node = node.clone();
        let fallback = fallback.clone();
        move |_: Event| try_play(&node, fallback.clone())
    };
    use_event_with_window("click", retry.clone());
    use_event_with_window("touchstart", retry);

    let source = &props.source;
    let video_style = if *fallback { "display: none;" } else { "" };
    html! {
        <>
            <video
                ref={node}
                class="project-media"
                style={video_style}
                playsinline={true}
                muted={true}
                loop={true}
            >
                <source src={source.mp4} type="video/mp4" />
                <source src={source.webm} type="video/webm" />
            </video>
            if *fallback {
                <img class="project-media" src={source.fallback} alt={source.alt} />
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    #[test]
    fn video_shown_before_any_playback_attempt() {
        let html = render::<ProjectVideo>(ProjectVideoProps {
            source: VideoSource {
                mp4: "/fifa1.mp4",
                webm: "/fifa1.webm",
                fallback: "/fifa1-fallback.jpg",
                alt: "Fifa1 Fallback",
            },
        });

        assert!(html.contains("<video"));
        assert!(html.contains(r#"src="/fifa1.mp4""#));
        assert!(html.contains(r#"src="/fifa1.webm""#));
        assert!(!html.contains("/fifa1-fallback.jpg"));
    }
}
