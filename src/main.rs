use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod carousel;
mod config;
mod content;
mod scroll;
mod components {
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod icon;
    pub mod results;
    pub mod sticky_cta;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use components::icon::{Icon, IconKind};
use pages::landing::Landing;
use scroll::use_scroll_flag;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

const NAV_SCROLL_THRESHOLD: f64 = 20.0;

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scrolled = use_scroll_flag(NAV_SCROLL_THRESHOLD);
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Collapse the menu without swallowing the anchor navigation
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", scrolled.then(|| "scrolled"))}>
            <div class="nav-content glass">
                <a href="#top" class="nav-logo">
                    <div class="logo-mark">
                        <Icon kind={IconKind::TrendingUp} class="logo-icon" />
                    </div>
                    <span class="logo-text">{"Convertic"}</span>
                </a>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={menu_class}>
                    <a href="#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="#results" class="nav-link" onclick={close_menu.clone()}>{"Results"}</a>
                    <a href="#testimonials" class="nav-link" onclick={close_menu}>{"Testimonials"}</a>
                    <a href={config::booking_url()} class="nav-cta">{"Get Started"}</a>
                </div>
            </div>

            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        padding: 1.5rem;
                        transition: padding 0.3s ease;
                    }

                    .top-nav.scrolled {
                        padding: 1rem 1.5rem;
                    }

                    .nav-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        border-radius: 1rem;
                        padding: 0.75rem 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        transition: box-shadow 0.3s ease;
                    }

                    .top-nav.scrolled .nav-content {
                        box-shadow: 0 25px 50px rgba(139, 92, 246, 0.1);
                    }

                    .nav-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                    }

                    .logo-mark {
                        width: 2rem;
                        height: 2rem;
                        background: linear-gradient(135deg, #8b5cf6, #06b6d4);
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .logo-icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #fff;
                    }

                    .logo-text {
                        font-family: "Space Grotesk", "Inter", sans-serif;
                        font-weight: 700;
                        font-size: 1.25rem;
                        letter-spacing: -0.02em;
                    }

                    .nav-links {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }

                    .nav-link {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: rgba(255, 255, 255, 0.7);
                        transition: color 0.2s ease;
                    }

                    .nav-link:hover {
                        color: #fff;
                    }

                    .nav-cta {
                        background: #fff;
                        color: #000;
                        padding: 0.5rem 1.25rem;
                        border-radius: 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 600;
                        transition: all 0.2s ease;
                    }

                    .nav-cta:hover {
                        background: #f5f3ff;
                    }

                    .nav-cta:active {
                        transform: scale(0.95);
                    }

                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: transparent;
                        padding: 0.5rem;
                    }

                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                        border-radius: 2px;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }

                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 100%;
                            left: 1.5rem;
                            right: 1.5rem;
                            flex-direction: column;
                            gap: 1.25rem;
                            padding: 1.5rem;
                            border-radius: 1rem;
                            background: rgba(8, 8, 13, 0.95);
                            border: 1px solid rgba(255, 255, 255, 0.08);
                        }

                        .nav-links.mobile-menu-open {
                            display: flex;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
