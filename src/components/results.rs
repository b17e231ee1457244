use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::content::Stat;

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub points: Vec<&'static str>,
    pub stats: Vec<Stat>,
}

#[function_component(Results)]
pub fn results(props: &ResultsProps) -> Html {
    html! {
        <section id="results" class="results-section">
            <div class="section-inner">
                <div class="results-panel glass">
                    <div class="results-glow"></div>
                    <div class="results-grid">
                        <div>
                            <h2>{"Websites that pay for themselves"}</h2>
                            <div class="results-points">
                                {
                                    props.points.iter().enumerate().map(|(i, point)| {
                                        html! {
                                            <div key={i.to_string()} class="results-point">
                                                <div class="point-check">
                                                    <Icon kind={IconKind::Check} class="point-check-icon" />
                                                </div>
                                                <span>{ *point }</span>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        </div>

                        <div class="stats-grid">
                            {
                                props.stats.iter().enumerate().map(|(i, stat)| {
                                    let offset = if i % 2 == 1 { "offset" } else { "" };
                                    html! {
                                        <div key={i.to_string()} class={classes!("stat-tile", "glass", offset)}>
                                            <div class={classes!("stat-value", stat.color_class)}>{ stat.value }</div>
                                            <div class="stat-label">{ stat.label }</div>
                                        </div>
                                    }
                                }).collect::<Html>()
                            }
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .results-section {
                        padding: 8rem 1.5rem;
                        position: relative;
                        overflow: hidden;
                    }

                    .results-panel {
                        border-radius: 3rem;
                        padding: clamp(3rem, 8vw, 6rem);
                        position: relative;
                        overflow: hidden;
                    }

                    .results-glow {
                        position: absolute;
                        top: 0;
                        right: 0;
                        width: 50%;
                        height: 100%;
                        background: linear-gradient(to left, rgba(139, 92, 246, 0.1), transparent);
                    }

                    .results-grid {
                        position: relative;
                        z-index: 1;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }

                    @media (max-width: 900px) {
                        .results-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .results-grid h2 {
                        font-family: "Space Grotesk", "Inter", sans-serif;
                        font-size: clamp(2.5rem, 5vw, 3.75rem);
                        font-weight: 700;
                        line-height: 1.15;
                        margin-bottom: 2rem;
                    }

                    .results-points {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }

                    .results-point {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        font-size: 1.125rem;
                        color: rgba(255, 255, 255, 0.7);
                    }

                    .point-check {
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 50%;
                        background: rgba(139, 92, 246, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        flex-shrink: 0;
                    }

                    .point-check-icon {
                        width: 1rem;
                        height: 1rem;
                        color: #a78bfa;
                    }

                    .stats-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }

                    .stat-tile {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        text-align: center;
                    }

                    .stat-tile.offset {
                        margin-top: 2rem;
                    }

                    .stat-value {
                        font-size: 2.25rem;
                        font-weight: 700;
                        margin-bottom: 0.5rem;
                    }

                    .stat-label {
                        font-size: 0.875rem;
                        color: rgba(255, 255, 255, 0.4);
                        text-transform: uppercase;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                    }
                "#}
            </style>
        </section>
    }
}
