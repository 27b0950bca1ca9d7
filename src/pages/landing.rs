use yew::prelude::*;

use crate::components::nav::Nav;
use crate::sections::{
    about::About, contact::Contact, hero::Hero, process::Process, solutions::Solutions,
    why_us::WhyChooseUs,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <Nav />
            <Hero />
            <About />
            <Solutions />
            <WhyChooseUs />
            <Process />
            <Contact />

            <style>
                {r#"
                :root {
                    --brand-black: #0a0a0a;
                    --brand-white: #f5f5f0;
                    --brand-emerald: #059669;
                    --brand-emerald-light: #34d399;
                }

                *, *::before, *::after {
                    box-sizing: border-box;
                    margin: 0;
                }

                html {
                    scroll-behavior: smooth;
                }

                body {
                    background: var(--brand-black);
                    color: var(--brand-white);
                    font-family: "Inter", system-ui, -apple-system, sans-serif;
                    -webkit-font-smoothing: antialiased;
                }

                .landing-page {
                    position: relative;
                    overflow-x: hidden;
                }

                .landing-page ::selection {
                    background: var(--brand-emerald);
                    color: #fff;
                }

                .section-inner {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-heading {
                    text-align: center;
                    margin-bottom: 5rem;
                }

                .section-title {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 700;
                    line-height: 1.15;
                    margin-bottom: 1.5rem;
                }

                .glass-card {
                    background: rgba(255, 255, 255, 0.03);
                    border: 1px solid rgba(255, 255, 255, 0.08);
                    backdrop-filter: blur(12px);
                    -webkit-backdrop-filter: blur(12px);
                    transition: border-color 0.5s ease;
                }

                .glass-card:hover {
                    border-color: rgba(16, 185, 129, 0.3);
                }

                .emerald-glow {
                    box-shadow: 0 0 24px rgba(16, 185, 129, 0.35);
                }
                "#}
            </style>
        </div>
    }
}
