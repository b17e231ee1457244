use yew::prelude::*;

use crate::components::icon::{Icon, IconKind};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <div class="footer-logo">
                            <div class="logo-mark">
                                <Icon kind={IconKind::TrendingUp} class="logo-icon" />
                            </div>
                            <span class="logo-text">{"Convertic"}</span>
                        </div>
                        <p>{"We help ambitious brands turn their digital presence into a high-converting growth engine."}</p>
                    </div>
                    <div class="footer-col">
                        <h4>{"Agency"}</h4>
                        <ul>
                            <li><a href="#results">{"Our Work"}</a></li>
                            <li><a href="#features">{"Process"}</a></li>
                            <li><a href="#features">{"Services"}</a></li>
                        </ul>
                    </div>
                    <div class="footer-col">
                        <h4>{"Connect"}</h4>
                        <ul>
                            <li><a href="https://twitter.com" target="_blank" rel="noopener noreferrer">{"Twitter"}</a></li>
                            <li><a href="https://linkedin.com" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a></li>
                            <li><a href="https://instagram.com" target="_blank" rel="noopener noreferrer">{"Instagram"}</a></li>
                        </ul>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{"© 2024 Convertic Agency. All rights reserved."}</p>
                    <div class="footer-legal">
                        <a href="#top">{"Privacy Policy"}</a>
                        <a href="#top">{"Terms of Service"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .site-footer {
                        padding: 5rem 1.5rem 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                    }

                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr;
                        gap: 3rem;
                        margin-bottom: 5rem;
                    }

                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }

                    .footer-logo {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        margin-bottom: 1.5rem;
                    }

                    .footer-brand p {
                        color: rgba(255, 255, 255, 0.4);
                        max-width: 24rem;
                        line-height: 1.6;
                    }

                    .footer-col h4 {
                        font-weight: 700;
                        margin-bottom: 1.5rem;
                    }

                    .footer-col ul {
                        list-style: none;
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .footer-col a {
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.875rem;
                        transition: color 0.2s ease;
                    }

                    .footer-col a:hover {
                        color: #fff;
                    }

                    .footer-bottom {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: space-between;
                        gap: 1.5rem;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        font-size: 0.75rem;
                        color: rgba(255, 255, 255, 0.2);
                    }

                    .footer-legal {
                        display: flex;
                        gap: 2rem;
                    }

                    .footer-legal a:hover {
                        color: #fff;
                    }
                "#}
            </style>
        </footer>
    }
}
