use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconKind {
    ArrowRight,
    ChevronRight,
    Zap,
    Globe,
    BarChart,
    Play,
    Layers,
    Layout,
    MessageSquare,
    Linkedin,
    Instagram,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
}

// Line icons on a 24x24 grid, stroked with the current text color.
fn paths(kind: IconKind) -> Html {
    match kind {
        IconKind::ArrowRight => html! {
            <>
                <path d="M5 12h14" />
                <path d="m12 5 7 7-7 7" />
            </>
        },
        IconKind::ChevronRight => html! { <path d="m9 18 6-6-6-6" /> },
        IconKind::Zap => html! { <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" /> },
        IconKind::Globe => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" />
                <path d="M2 12h20" />
            </>
        },
        IconKind::BarChart => html! {
            <>
                <path d="M3 3v18h18" />
                <path d="M18 17V9" />
                <path d="M13 17V5" />
                <path d="M8 17v-3" />
            </>
        },
        IconKind::Play => html! { <polygon points="6 3 20 12 6 21 6 3" /> },
        IconKind::Layers => html! {
            <>
                <path d="m12.83 2.18a2 2 0 0 0-1.66 0L2.6 6.08a1 1 0 0 0 0 1.83l8.58 3.91a2 2 0 0 0 1.66 0l8.58-3.9a1 1 0 0 0 0-1.83Z" />
                <path d="m22 17.65-9.17 4.16a2 2 0 0 1-1.66 0L2 17.65" />
                <path d="m22 12.65-9.17 4.16a2 2 0 0 1-1.66 0L2 12.65" />
            </>
        },
        IconKind::Layout => html! {
            <>
                <rect width="18" height="18" x="3" y="3" rx="2" />
                <path d="M3 9h18" />
                <path d="M9 21V9" />
            </>
        },
        IconKind::MessageSquare => html! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        },
        IconKind::Linkedin => html! {
            <>
                <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" />
                <rect width="4" height="12" x="2" y="9" />
                <circle cx="4" cy="4" r="2" />
            </>
        },
        IconKind::Instagram => html! {
            <>
                <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
            </>
        },
    }
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
        >
            { paths(props.kind) }
        </svg>
    }
}
