use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::RevealOnMount;
use crate::motion::reveal::Entrance;

const CUE_DELAY_MS: u32 = 1000;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-background">
                <div class="hero-gradient"></div>
                <div class="hero-dots"></div>
                <div class="hero-glow"></div>
            </div>

            <div class="hero-content">
                <RevealOnMount entrance={Entrance::FadeUp { distance_px: 30 }} duration_ms={800}>
                    <span class="hero-tag">{"Next-Gen Monetization"}</span>
                    <h1 class="hero-title">
                        {"Monetization,"}<br />
                        <span class="hero-title-accent">{"Reimagined."}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Seamless publisher monetization solutions designed to maximize revenue performance at scale."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#contact" class="hero-cta emerald-glow">
                            {"Request Partnership"}
                            <Icon kind={IconKind::ArrowRight} class="hero-cta-arrow" />
                        </a>
                        <a href="#solutions" class="hero-secondary">{"Explore Solutions"}</a>
                    </div>
                </RevealOnMount>
            </div>

            <div class="scroll-cue">
                <RevealOnMount
                    class="scroll-cue-inner"
                    entrance={Entrance::Fade}
                    delay_ms={CUE_DELAY_MS}
                    duration_ms={1000}
                >
                    <span>{"Scroll to explore"}</span>
                    <div class="scroll-cue-line"></div>
                </RevealOnMount>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    padding-top: 5rem;
                }

                .hero-background {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(16, 185, 129, 0.1), transparent, var(--brand-black));
                }

                .hero-dots {
                    position: absolute;
                    inset: 0;
                    opacity: 0.2;
                    background-image: radial-gradient(circle at 2px 2px, rgba(255, 255, 255, 0.05) 1px, transparent 0);
                    background-size: 40px 40px;
                }

                .hero-glow {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 800px;
                    height: 800px;
                    border-radius: 9999px;
                    background: rgba(16, 185, 129, 0.2);
                    filter: blur(120px);
                    transform: translate(-50%, -50%);
                    animation: heroPulse 10s linear infinite;
                }

                @keyframes heroPulse {
                    0%, 100% { transform: translate(-50%, -50%) scale(1); opacity: 0.3; }
                    50% { transform: translate(-50%, -50%) scale(1.1); opacity: 0.5; }
                }

                .hero-content {
                    position: relative;
                    z-index: 10;
                    max-width: 64rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    text-align: center;
                }

                .hero-tag {
                    display: inline-block;
                    padding: 0.375rem 1rem;
                    margin-bottom: 1.5rem;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    border: 1px solid rgba(16, 185, 129, 0.3);
                    background: rgba(16, 185, 129, 0.05);
                    border-radius: 9999px;
                    color: var(--brand-emerald-light);
                }

                .hero-title {
                    font-size: clamp(3.75rem, 9vw, 6rem);
                    font-weight: 800;
                    letter-spacing: -0.025em;
                    line-height: 0.95;
                    margin-bottom: 2rem;
                }

                .hero-title-accent {
                    color: transparent;
                    background: linear-gradient(to right, var(--brand-white), var(--brand-white), var(--brand-emerald-light));
                    -webkit-background-clip: text;
                    background-clip: text;
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    color: rgba(245, 245, 240, 0.6);
                    max-width: 42rem;
                    margin: 0 auto 3rem;
                    line-height: 1.6;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                }

                .hero-cta {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 1rem 2rem;
                    background: var(--brand-emerald);
                    color: #fff;
                    font-weight: 700;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero-cta:hover {
                    background: var(--brand-emerald-light);
                }

                .hero-cta-arrow {
                    width: 1rem;
                    height: 1rem;
                    transition: transform 0.2s ease;
                }

                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(4px);
                }

                .hero-secondary {
                    padding: 1rem 2rem;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    color: #fff;
                    font-weight: 700;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: all 0.3s ease;
                }

                .hero-secondary:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .scroll-cue {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    transform: translateX(-50%);
                }

                .scroll-cue-inner {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 0.5rem;
                }

                .scroll-cue span {
                    font-size: 10px;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    opacity: 0.3;
                }

                .scroll-cue-line {
                    width: 1px;
                    height: 3rem;
                    background: linear-gradient(to bottom, var(--brand-emerald), transparent);
                }
                "#}
            </style>
        </section>
    }
}
