use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::RevealWith;
use crate::config::{ABOUT_REVEAL_MARGIN, COMPANY_NAME};
use crate::hooks::viewport::use_in_view_once;
use crate::motion::reveal::Entrance;

const PILLARS: [(IconKind, &str, &str); 3] = [
    (
        IconKind::Zap,
        "Advanced Yield Optimization",
        "AI-driven algorithms that ensure every impression is sold at its maximum value.",
    ),
    (
        IconKind::Globe,
        "Direct & Programmatic Demand",
        "Access to exclusive premium demand partners and global programmatic exchanges.",
    ),
    (
        IconKind::BarChart,
        "Real-Time Performance Analytics",
        "Deep insights into your revenue streams with granular, real-time reporting.",
    ),
];

const PILLAR_STAGGER_MS: u32 = 200;

#[function_component(About)]
pub fn about() -> Html {
    // One trigger for the whole block: the pillars follow the mission text in.
    let mission_ref = use_node_ref();
    let shown = use_in_view_once(mission_ref.clone(), ABOUT_REVEAL_MARGIN);

    let mission_style = Entrance::SlideFromLeft { distance_px: 50 }.style(shown, 0, 800);

    html! {
        <section id="about" class="about">
            <div class="about-grid">
                <div ref={mission_ref} style={mission_style}>
                    <h2 class="section-title">
                        {"Powering Publisher"}<br />{"Revenue Growth"}
                    </h2>
                    <p class="about-copy">
                        {format!("{} is a next-generation publisher monetization platform delivering seamless, high-performance revenue solutions. ", COMPANY_NAME)}
                        {"We empower digital publishers with optimized demand, intelligent yield strategies, and premium ad experiences that drive sustainable growth."}
                    </p>
                    <div class="mission-link">
                        <div class="mission-circle">
                            <Icon kind={IconKind::ArrowRight} class="mission-arrow" />
                        </div>
                        <span>{"Our Mission"}</span>
                    </div>
                </div>

                <div class="pillars">
                    { PILLARS.iter().enumerate().map(|(idx, (icon, title, desc))| html! {
                        <RevealWith
                            shown={shown}
                            class="glass-card pillar"
                            delay_ms={idx as u32 * PILLAR_STAGGER_MS}
                        >
                            <div class="pillar-icon">
                                <Icon kind={*icon} />
                            </div>
                            <div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </div>
                        </RevealWith>
                    }).collect::<Html>() }
                </div>
            </div>

            <style>
                {r#"
                .about {
                    padding: 8rem 0;
                    position: relative;
                    overflow: hidden;
                }

                .about-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 5rem;
                    align-items: center;
                }

                .about-copy {
                    font-size: 1.125rem;
                    color: rgba(245, 245, 240, 0.6);
                    line-height: 1.7;
                    margin-bottom: 2.5rem;
                }

                .mission-link {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    cursor: pointer;
                    font-weight: 700;
                    font-size: 0.875rem;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                }

                .mission-circle {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 1px solid var(--brand-emerald);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.3s ease;
                }

                .mission-arrow {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: var(--brand-emerald);
                }

                .mission-link:hover .mission-circle {
                    background: var(--brand-emerald);
                }

                .mission-link:hover .mission-arrow {
                    color: #fff;
                }

                .pillars {
                    display: grid;
                    gap: 1.5rem;
                }

                .pillar {
                    display: flex;
                    gap: 1.5rem;
                    padding: 2rem;
                    border-radius: 1rem;
                }

                .pillar-icon {
                    flex-shrink: 0;
                    width: 3.5rem;
                    height: 3.5rem;
                    border-radius: 0.75rem;
                    background: rgba(16, 185, 129, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--brand-emerald-light);
                    transition: background 0.2s ease;
                }

                .pillar-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .pillar:hover .pillar-icon {
                    background: rgba(16, 185, 129, 0.2);
                }

                .pillar h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 0.5rem;
                }

                .pillar p {
                    color: rgba(245, 245, 240, 0.5);
                    font-size: 0.875rem;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
