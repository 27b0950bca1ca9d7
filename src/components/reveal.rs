use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::DEFAULT_REVEAL_MARGIN;
use crate::hooks::viewport::use_in_view_once;
use crate::motion::reveal::Entrance;

const DEFAULT_DURATION_MS: u32 = 500;
// One frame, so the hidden state is painted before the transition starts.
const MOUNT_SETTLE_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct RevealOnViewProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Entrance::FadeUp { distance_px: 30 })]
    pub entrance: Entrance,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or(DEFAULT_REVEAL_MARGIN)]
    pub root_margin: &'static str,
}

/// Plays its entrance once, the first time it scrolls into view.
#[function_component(RevealOnView)]
pub fn reveal_on_view(props: &RevealOnViewProps) -> Html {
    let node = use_node_ref();
    let shown = use_in_view_once(node.clone(), props.root_margin);
    let style = props.entrance.style(shown, props.delay_ms, props.duration_ms);

    html! {
        <div ref={node} class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealWithProps {
    pub shown: bool,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Entrance::FadeUp { distance_px: 20 })]
    pub entrance: Entrance,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: u32,
}

/// Entrance driven by a parent's trigger, for groups that reveal together.
#[function_component(RevealWith)]
pub fn reveal_with(props: &RevealWithProps) -> Html {
    let style = props.entrance.style(props.shown, props.delay_ms, props.duration_ms);

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealOnMountProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(Entrance::FadeUp { distance_px: 30 })]
    pub entrance: Entrance,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(DEFAULT_DURATION_MS)]
    pub duration_ms: u32,
}

/// Plays its entrance once, right after it is first rendered.
#[function_component(RevealOnMount)]
pub fn reveal_on_mount(props: &RevealOnMountProps) -> Html {
    let shown = use_state(|| false);

    {
        let setter = shown.setter();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(MOUNT_SETTLE_MS, move || setter.set(true));
                move || drop(timeout)
            },
            (),
        );
    }

    let style = props.entrance.style(*shown, props.delay_ms, props.duration_ms);

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}
