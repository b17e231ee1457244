use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};
use crate::config;

// Metric shown on the floating card, cycled by the stage loop below.
const FLOATING_METRICS: [(&str, &str); 3] = [
    ("Conversion Rate", "+124%"),
    ("Bounce Rate", "-40%"),
    ("Leads Generated", "10k+"),
];

const METRIC_HOLD_MS: u32 = 3500;

#[function_component(Hero)]
pub fn hero() -> Html {
    let stage = use_state(|| 0usize);

    {
        let stage_clone = stage.clone();
        let stage_setter = stage.setter();
        use_effect(move || {
            let next_stage = (*stage_clone + 1) % FLOATING_METRICS.len();
            let timeout = Timeout::new(METRIC_HOLD_MS, move || {
                stage_setter.set(next_stage);
            });
            timeout.forget();

            || ()
        });
    }

    let (metric_label, metric_value) = FLOATING_METRICS[*stage];

    let glow_lines = (0..12)
        .map(|i| {
            let duration = 3.0 + (i % 5) as f64 * 0.45;
            let delay = i as f64 * 0.2;
            let left = 10 + i * 8;
            let rotate = (i as i32 - 6) * 2;
            html! {
                <div
                    key={i.to_string()}
                    class="glow-line"
                    style={format!(
                        "left: {left}%; transform: rotate({rotate}deg); animation-duration: {duration}s; animation-delay: {delay}s;"
                    )}
                />
            }
        })
        .collect::<Html>();

    html! {
        <section class="hero">
            <div class="hero-backdrop">
                <div class="hero-orb hero-orb-violet"></div>
                <div class="hero-orb hero-orb-cyan"></div>
            </div>

            <div class="glow-lines">
                { glow_lines }
            </div>

            <div class="hero-content">
                <span class="hero-badge">
                    <Icon kind={IconKind::Star} class="badge-star" filled={true} />
                    {"Voted #1 Design Agency for ROI"}
                </span>

                <h1 class="hero-title">
                    {"Turn your viewers into "}<br />
                    <span class="hero-title-gradient">{"loyal buyers"}</span>
                </h1>

                <p class="hero-subtitle">
                    {"We build gorgeous, high-performance websites that don't just look good—they actually convert. Stop losing leads to bad design."}
                </p>

                <div class="hero-cta-group">
                    <a href={config::booking_url()} class="hero-cta primary">
                        {"Start Your Project"}
                        <Icon kind={IconKind::ArrowRight} class="cta-arrow" />
                    </a>
                    <a href="#results" class="hero-cta glass">
                        {"View Our Work"}
                    </a>
                </div>

                <div class="dashboard-wrap">
                    <div class="dashboard glass">
                        <div class="dashboard-chrome">
                            <span class="dot red"></span>
                            <span class="dot yellow"></span>
                            <span class="dot green"></span>
                            <span class="chrome-bar"></span>
                        </div>
                        <div class="dashboard-grid">
                            <div class="dashboard-side">
                                <div class="skeleton tall"></div>
                                <div class="skeleton"></div>
                                <div class="skeleton short"></div>
                            </div>
                            <div class="dashboard-main">
                                <div class="skeleton chart"></div>
                                <div class="dashboard-tiles">
                                    <div class="skeleton tile"></div>
                                    <div class="skeleton tile"></div>
                                </div>
                            </div>
                        </div>
                    </div>

                    <div class="floating-card glass" key={metric_label}>
                        <div class="floating-icon">
                            <Icon kind={IconKind::TrendingUp} class="floating-trend" />
                        </div>
                        <div>
                            <div class="floating-label">{ metric_label }</div>
                            <div class="floating-value">{ metric_value }</div>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        padding: 10rem 1.5rem 6rem;
                        overflow: hidden;
                    }

                    .hero-backdrop {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }

                    .hero-orb {
                        position: absolute;
                        border-radius: 50%;
                    }

                    .hero-orb-violet {
                        top: 25%;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 800px;
                        height: 400px;
                        background: rgba(139, 92, 246, 0.1);
                        filter: blur(120px);
                    }

                    .hero-orb-cyan {
                        bottom: 25%;
                        left: 25%;
                        width: 400px;
                        height: 400px;
                        background: rgba(34, 211, 238, 0.05);
                        filter: blur(100px);
                    }

                    .glow-lines {
                        position: absolute;
                        top: 0;
                        left: 50%;
                        transform: translateX(-50%);
                        width: 100%;
                        height: 100%;
                        pointer-events: none;
                        opacity: 0.3;
                    }

                    .glow-line {
                        position: absolute;
                        top: 0;
                        width: 1px;
                        height: 0;
                        background: linear-gradient(to bottom, rgba(139, 92, 246, 0.8), transparent);
                        animation-name: line-sweep;
                        animation-iteration-count: infinite;
                        animation-timing-function: ease-in-out;
                    }

                    @keyframes line-sweep {
                        0% { height: 0; opacity: 0; }
                        50% { height: 60vh; opacity: 1; }
                        100% { height: 60vh; opacity: 0; }
                    }

                    .hero-content {
                        position: relative;
                        z-index: 1;
                        max-width: 64rem;
                        margin: 0 auto;
                        text-align: center;
                    }

                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        background: rgba(255, 255, 255, 0.05);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #c4b5fd;
                        margin-bottom: 2rem;
                    }

                    .badge-star {
                        width: 0.75rem;
                        height: 0.75rem;
                    }

                    .hero-title {
                        font-family: "Space Grotesk", "Inter", sans-serif;
                        font-size: clamp(3rem, 8vw, 6rem);
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        line-height: 1.1;
                        margin-bottom: 2rem;
                    }

                    .hero-title-gradient {
                        background: linear-gradient(to right, #a78bfa, #22d3ee);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }

                    .hero-subtitle {
                        font-size: 1.25rem;
                        color: rgba(255, 255, 255, 0.6);
                        max-width: 42rem;
                        margin: 0 auto 3rem;
                        line-height: 1.6;
                    }

                    .hero-cta-group {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1rem;
                    }

                    .hero-cta {
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        gap: 0.5rem;
                        padding: 1rem 2rem;
                        border-radius: 1rem;
                        font-weight: 700;
                        font-size: 1.125rem;
                        transition: all 0.2s ease;
                    }

                    .hero-cta.primary {
                        background: #fff;
                        color: #000;
                    }

                    .hero-cta.primary:hover {
                        background: #f5f3ff;
                    }

                    .hero-cta.primary:hover .cta-arrow {
                        transform: translateX(4px);
                    }

                    .cta-arrow {
                        width: 1.25rem;
                        height: 1.25rem;
                        transition: transform 0.2s ease;
                    }

                    .hero-cta.glass:hover {
                        background: rgba(255, 255, 255, 0.1);
                    }

                    .dashboard-wrap {
                        position: relative;
                        margin-top: 6rem;
                    }

                    .dashboard {
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        aspect-ratio: 16 / 9;
                        box-shadow: 0 25px 80px rgba(139, 92, 246, 0.2);
                        overflow: hidden;
                    }

                    .dashboard-chrome {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        margin-bottom: 2rem;
                    }

                    .dot {
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 50%;
                    }

                    .dot.red { background: rgba(239, 68, 68, 0.5); }
                    .dot.yellow { background: rgba(234, 179, 8, 0.5); }
                    .dot.green { background: rgba(34, 197, 94, 0.5); }

                    .chrome-bar {
                        height: 1rem;
                        width: 8rem;
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 9999px;
                    }

                    .dashboard-grid {
                        display: grid;
                        grid-template-columns: 1fr 3fr;
                        gap: 1.5rem;
                    }

                    .dashboard-side,
                    .dashboard-main {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .skeleton {
                        background: rgba(255, 255, 255, 0.05);
                        border-radius: 0.75rem;
                        height: 2rem;
                    }

                    .skeleton.tall { height: 3rem; background: rgba(255, 255, 255, 0.1); }
                    .skeleton.short { width: 66%; }

                    .skeleton.chart {
                        height: 10rem;
                        background: linear-gradient(135deg, rgba(139, 92, 246, 0.2), rgba(34, 211, 238, 0.2));
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        border-radius: 1rem;
                    }

                    .dashboard-tiles {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }

                    .skeleton.tile { height: 6rem; border-radius: 1rem; }

                    .floating-card {
                        position: absolute;
                        top: -3rem;
                        right: 3rem;
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1rem;
                        border-radius: 1rem;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.3);
                        animation: float-bob 4s ease-in-out infinite, fade-in 0.5s ease;
                        text-align: left;
                    }

                    @keyframes float-bob {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-10px); }
                    }

                    @keyframes fade-in {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }

                    .floating-icon {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 50%;
                        background: rgba(16, 185, 129, 0.2);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }

                    .floating-trend {
                        width: 1.25rem;
                        height: 1.25rem;
                        color: #34d399;
                    }

                    .floating-label {
                        font-size: 0.625rem;
                        color: rgba(255, 255, 255, 0.4);
                        text-transform: uppercase;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                    }

                    .floating-value {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }

                    @media (max-width: 768px) {
                        .floating-card {
                            display: none;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
