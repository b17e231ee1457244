use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::config;
use crate::scroll::use_scroll_flag;

const CTA_SCROLL_THRESHOLD: f64 = 1000.0;

#[function_component(StickyCta)]
pub fn sticky_cta() -> Html {
    let visible = use_scroll_flag(CTA_SCROLL_THRESHOLD);

    html! {
        <>
            {
                if visible {
                    html! {
                        <div class="sticky-cta">
                            <div class="sticky-cta-inner glass">
                                <div class="sticky-cta-left">
                                    <div class="sticky-cta-icon">
                                        <Icon kind={IconKind::MousePointer} class="pointer-icon" />
                                    </div>
                                    <div class="sticky-cta-copy">
                                        <div class="sticky-cta-title">{"Ready to scale?"}</div>
                                        <div class="sticky-cta-sub">{"Book a free strategy call"}</div>
                                    </div>
                                </div>
                                <a href={config::booking_url()} class="sticky-cta-button">
                                    {"Let's Talk"}
                                </a>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <style>
                {r#"
                    .sticky-cta {
                        position: fixed;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        z-index: 50;
                        width: 100%;
                        max-width: 28rem;
                        padding: 0 1.5rem;
                        animation: cta-rise 0.4s ease;
                    }

                    @keyframes cta-rise {
                        from { transform: translate(-50%, 100px); opacity: 0; }
                        to { transform: translate(-50%, 0); opacity: 1; }
                    }

                    .sticky-cta-inner {
                        padding: 1rem;
                        border-radius: 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        box-shadow: 0 25px 60px rgba(139, 92, 246, 0.2);
                    }

                    .sticky-cta-left {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                    }

                    .sticky-cta-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        background: #8b5cf6;
                        border-radius: 0.75rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .pointer-icon {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #fff;
                    }

                    .sticky-cta-title {
                        font-size: 0.875rem;
                        font-weight: 700;
                    }

                    .sticky-cta-sub {
                        font-size: 0.625rem;
                        color: rgba(255, 255, 255, 0.5);
                    }

                    .sticky-cta-button {
                        background: #fff;
                        color: #000;
                        padding: 0.625rem 1.5rem;
                        border-radius: 0.75rem;
                        font-weight: 700;
                        font-size: 0.875rem;
                        transition: all 0.2s ease;
                    }

                    .sticky-cta-button:hover {
                        background: #f5f3ff;
                    }

                    .sticky-cta-button:active {
                        transform: scale(0.95);
                    }

                    @media (max-width: 640px) {
                        .sticky-cta-copy {
                            display: none;
                        }
                    }
                "#}
            </style>
        </>
    }
}
