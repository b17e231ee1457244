use yew::prelude::*;

use crate::components::features::FeatureGrid;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::results::Results;
use crate::components::sticky_cta::StickyCta;
use crate::components::testimonials::Testimonials;
use crate::config;
use crate::content;

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="landing-page" id="top">
            <Hero />
            <FeatureGrid features={content::FEATURES.to_vec()} />
            <Results
                points={content::RESULT_POINTS.to_vec()}
                stats={content::STATS.to_vec()}
            />
            <Testimonials testimonials={content::TESTIMONIALS.to_vec()} />

            <section id="contact" class="final-cta">
                <div class="section-inner narrow">
                    <h2>{"Ready to turn viewers into buyers?"}</h2>
                    <p>{"Join 50+ high-growth companies scaling with Convertic."}</p>
                    <a href={config::booking_url()} class="final-cta-button">
                        {"Book Your Free Audit"}
                    </a>
                </div>
            </section>

            <Footer />
            <StickyCta />

            <style>
                {r#"
                    .glass {
                        background: rgba(255, 255, 255, 0.03);
                        border: 1px solid rgba(255, 255, 255, 0.08);
                        backdrop-filter: blur(12px);
                        -webkit-backdrop-filter: blur(12px);
                    }

                    .section-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                    }

                    .section-inner.narrow {
                        max-width: 64rem;
                    }

                    .section-header {
                        text-align: center;
                        margin-bottom: 5rem;
                    }

                    .section-header h2 {
                        font-family: "Space Grotesk", "Inter", sans-serif;
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        margin: 1rem 0 1.5rem;
                    }

                    .section-header p {
                        color: rgba(255, 255, 255, 0.6);
                        max-width: 42rem;
                        margin: 0 auto;
                        font-size: 1.125rem;
                        line-height: 1.6;
                    }

                    .accent-violet { color: #a78bfa; }
                    .accent-cyan { color: #22d3ee; }
                    .accent-emerald { color: #34d399; }

                    .final-cta {
                        padding: 8rem 1.5rem;
                        text-align: center;
                    }

                    .final-cta h2 {
                        font-family: "Space Grotesk", "Inter", sans-serif;
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        margin-bottom: 2rem;
                    }

                    .final-cta p {
                        font-size: 1.25rem;
                        color: rgba(255, 255, 255, 0.5);
                        margin-bottom: 3rem;
                    }

                    .final-cta-button {
                        display: inline-block;
                        padding: 1.5rem 3rem;
                        background: #fff;
                        color: #000;
                        border-radius: 1rem;
                        font-weight: 700;
                        font-size: 1.25rem;
                        box-shadow: 0 25px 80px rgba(255, 255, 255, 0.1);
                        transition: all 0.2s ease;
                    }

                    .final-cta-button:hover {
                        background: #f5f3ff;
                    }

                    .final-cta-button:active {
                        transform: scale(0.95);
                    }
                "#}
            </style>
        </div>
    }
}
