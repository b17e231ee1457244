use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Target,
    Zap,
    TrendingUp,
    Star,
    ArrowRight,
    ChevronLeft,
    ChevronRight,
    Check,
    MousePointer,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub kind: IconKind,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(false)]
    pub filled: bool,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let shape = match props.kind {
        IconKind::Target => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <circle cx="12" cy="12" r="6" />
                <circle cx="12" cy="12" r="2" />
            </>
        },
        IconKind::Zap => html! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        },
        IconKind::TrendingUp => html! {
            <>
                <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
                <polyline points="16 7 22 7 22 13" />
            </>
        },
        IconKind::Star => html! {
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        },
        IconKind::ArrowRight => html! {
            <>
                <line x1="5" y1="12" x2="19" y2="12" />
                <polyline points="12 5 19 12 12 19" />
            </>
        },
        IconKind::ChevronLeft => html! {
            <polyline points="15 18 9 12 15 6" />
        },
        IconKind::ChevronRight => html! {
            <polyline points="9 18 15 12 9 6" />
        },
        IconKind::Check => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="M9 12l2 2 4-4" />
            </>
        },
        IconKind::MousePointer => html! {
            <path d="M3 3l7.07 16.97 2.51-7.39 7.39-2.51L3 3z" />
        },
    };

    let fill = if props.filled { "currentColor" } else { "none" };

    html! {
        <svg
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill={fill}
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shape }
        </svg>
    }
}
