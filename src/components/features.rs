use yew::prelude::*;

use crate::components::icon::Icon;
use crate::content::Feature;

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub features: Vec<Feature>,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Built for performance"}</h2>
                    <p>{"We combine world-class design with conversion psychology to deliver results that move the needle."}</p>
                </div>

                <div class="features-grid">
                    {
                        props.features.iter().enumerate().map(|(i, feature)| {
                            html! {
                                <div key={i.to_string()} class="feature-card glass">
                                    <div class="feature-icon-wrap">
                                        <Icon
                                            kind={feature.icon}
                                            class={classes!("feature-icon", feature.color_class)}
                                        />
                                    </div>
                                    <h3>{ feature.title }</h3>
                                    <p>{ feature.description }</p>
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>

            <style>
                {r#"
                    .features-section {
                        padding: 8rem 1.5rem;
                        position: relative;
                    }

                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }

                    @media (max-width: 900px) {
                        .features-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .feature-card {
                        padding: 2rem;
                        border-radius: 1.5rem;
                        transition: transform 0.3s ease;
                    }

                    .feature-card:hover {
                        transform: translateY(-8px);
                    }

                    .feature-icon-wrap {
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 1rem;
                        background: rgba(255, 255, 255, 0.05);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                        transition: transform 0.3s ease;
                    }

                    .feature-card:hover .feature-icon-wrap {
                        transform: scale(1.1);
                    }

                    .feature-icon {
                        width: 1.75rem;
                        height: 1.75rem;
                    }

                    .feature-card h3 {
                        font-size: 1.25rem;
                        font-weight: 700;
                        margin-bottom: 1rem;
                    }

                    .feature-card p {
                        color: rgba(255, 255, 255, 0.5);
                        line-height: 1.6;
                    }
                "#}
            </style>
        </section>
    }
}
