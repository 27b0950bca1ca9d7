use yew::prelude::*;

use crate::components::brand::BrandMark;
use crate::config::NAV_SCROLL_THRESHOLD_PX;
use crate::hooks::scroll::use_scroll_flag;

const NAV_LINKS: [(&str, &str); 3] = [
    ("#about", "ABOUT"),
    ("#solutions", "SOLUTIONS"),
    ("#why-us", "WHY US"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let is_scrolled = use_scroll_flag(NAV_SCROLL_THRESHOLD_PX);

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <BrandMark />
                <div class="nav-links">
                    { NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }).collect::<Html>() }
                    <a href="#contact" class="nav-cta emerald-glow">{"PARTNERSHIP"}</a>
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 50;
                    padding: 2rem 0;
                    background: transparent;
                    border-bottom: 1px solid transparent;
                    transition: all 0.5s ease;
                }

                .top-nav.scrolled {
                    padding: 1rem 0;
                    background: rgba(10, 10, 10, 0.8);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2.5rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.025em;
                }

                .nav-link {
                    color: var(--brand-white);
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: var(--brand-emerald-light);
                }

                .nav-cta {
                    padding: 0.5rem 1.5rem;
                    background: var(--brand-emerald);
                    color: #fff;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .nav-cta:hover {
                    background: var(--brand-emerald-light);
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
