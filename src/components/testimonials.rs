use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::carousel::Carousel;
use crate::components::icon::{Icon, IconKind};
use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let carousel = {
        let items = props.testimonials.clone();
        use_state(move || {
            let built = Carousel::new(items);
            if let Err(err) = &built {
                warn!("testimonial carousel disabled: {err}");
            }
            built
        })
    };

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Ok(mut c) = (*carousel).clone() {
                c.previous();
                carousel.set(Ok(c));
            }
        })
    };

    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Ok(mut c) = (*carousel).clone() {
                c.next();
                carousel.set(Ok(c));
            }
        })
    };

    let on_select = {
        let carousel = carousel.clone();
        Callback::from(move |index: usize| {
            if let Ok(mut c) = (*carousel).clone() {
                match c.select(index) {
                    Ok(()) => carousel.set(Ok(c)),
                    Err(err) => warn!("ignoring indicator click: {err}"),
                }
            }
        })
    };

    let Ok(state) = &*carousel else {
        return html! { <section id="testimonials" class="testimonials-section"></section> };
    };

    // One snapshot feeds every displayed field of the active card.
    let active = state.active();
    let current = state.current();

    html! {
        <section id="testimonials" class="testimonials-section">
            <div class="section-inner narrow">
                <div class="section-header">
                    <span class="section-eyebrow">{"Social Proof"}</span>
                    <h2>{"Trusted by industry leaders"}</h2>
                </div>

                <div class="carousel glass">
                    <div class="carousel-card" key={active.to_string()}>
                        <div class="star-row">
                            {
                                (0..5).map(|i| html! {
                                    <Icon key={i.to_string()} kind={IconKind::Star} class="star" filled={true} />
                                }).collect::<Html>()
                            }
                        </div>
                        <p class="quote">{ format!("\u{201c}{}\u{201d}", current.content) }</p>
                        <div class="author">
                            <img
                                src={current.avatar_url}
                                alt={current.name}
                                class="avatar"
                                referrerpolicy="no-referrer"
                            />
                            <div class="author-meta">
                                <div class="author-name">{ current.name }</div>
                                <div class="author-role">{ current.role }</div>
                            </div>
                        </div>
                    </div>

                    <div class="carousel-controls">
                        <button class="carousel-arrow glass" onclick={on_previous} aria-label="Previous testimonial">
                            <Icon kind={IconKind::ChevronLeft} class="arrow-icon" />
                        </button>
                        <div class="indicator-row">
                            {
                                (0..state.len()).map(|i| {
                                    let on_select = on_select.clone();
                                    let onclick = Callback::from(move |e: MouseEvent| {
                                        e.prevent_default();
                                        on_select.emit(i);
                                    });
                                    html! {
                                        <button
                                            key={i.to_string()}
                                            class={classes!("indicator", (active == i).then(|| "active"))}
                                            onclick={onclick}
                                            aria-label={format!("Show testimonial {}", i + 1)}
                                        />
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                        <button class="carousel-arrow glass" onclick={on_next} aria-label="Next testimonial">
                            <Icon kind={IconKind::ChevronRight} class="arrow-icon" />
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .testimonials-section {
                        padding: 8rem 1.5rem;
                        background: rgba(255, 255, 255, 0.02);
                    }

                    .section-eyebrow {
                        color: #a78bfa;
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                    }

                    .carousel {
                        position: relative;
                        padding: 4rem 2rem 6rem;
                        border-radius: 2.5rem;
                        overflow: hidden;
                    }

                    .carousel-card {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                        animation: card-in 0.4s ease;
                    }

                    @keyframes card-in {
                        from { opacity: 0; transform: translateX(20px); }
                        to { opacity: 1; transform: translateX(0); }
                    }

                    .star-row {
                        display: flex;
                        gap: 0.25rem;
                        margin-bottom: 2rem;
                    }

                    .star {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #a78bfa;
                    }

                    .quote {
                        font-size: clamp(1.5rem, 3vw, 1.875rem);
                        font-weight: 500;
                        font-style: italic;
                        line-height: 1.6;
                        margin-bottom: 3rem;
                    }

                    .author {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .avatar {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 50%;
                        border: 2px solid rgba(255, 255, 255, 0.1);
                    }

                    .author-meta {
                        text-align: left;
                    }

                    .author-name {
                        font-weight: 700;
                        font-size: 1.125rem;
                    }

                    .author-role {
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.875rem;
                    }

                    .carousel-controls {
                        position: absolute;
                        bottom: 2rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                    }

                    .carousel-arrow {
                        padding: 0.5rem;
                        border-radius: 50%;
                        background: transparent;
                        color: #fff;
                        display: flex;
                        transition: background 0.2s ease;
                    }

                    .carousel-arrow:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .arrow-icon {
                        width: 1.5rem;
                        height: 1.5rem;
                    }

                    .indicator-row {
                        display: flex;
                        gap: 0.5rem;
                    }

                    .indicator {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.2);
                        padding: 0;
                        transition: all 0.3s ease;
                    }

                    .indicator.active {
                        width: 1.5rem;
                        background: #8b5cf6;
                    }
                "#}
            </style>
        </section>
    }
}
