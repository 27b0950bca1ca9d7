use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::components::reveal::RevealOnView;
use crate::motion::reveal::Entrance;

const SOLUTIONS: [(IconKind, &str, &str); 4] = [
    (
        IconKind::Play,
        "In-Stream",
        "High-impact video monetization integrated directly within content for maximum engagement and premium CPMs.",
    ),
    (
        IconKind::Layers,
        "Out-Stream",
        "Scalable video demand beyond traditional players, unlocking incremental revenue opportunities.",
    ),
    (
        IconKind::Layout,
        "Display",
        "Optimized banner monetization with intelligent ad placements and performance-based delivery.",
    ),
    (
        IconKind::MessageSquare,
        "Native",
        "Seamlessly integrated ad formats that match content flow and enhance user experience.",
    ),
];

const CARD_STAGGER_MS: u32 = 100;

#[function_component(Solutions)]
pub fn solutions() -> Html {
    html! {
        <section id="solutions" class="solutions">
            <div class="section-inner">
                <div class="section-heading">
                    <RevealOnView entrance={Entrance::FadeUp { distance_px: 20 }}>
                        <h2 class="section-title">{"Our Monetization Solutions"}</h2>
                    </RevealOnView>
                    <div class="heading-rule"></div>
                </div>

                <div class="solutions-grid">
                    { SOLUTIONS.iter().enumerate().map(|(idx, (icon, title, desc))| html! {
                        <RevealOnView delay_ms={idx as u32 * CARD_STAGGER_MS}>
                            <div class="glass-card solution-card">
                                <div class="solution-glow"></div>
                                <Icon kind={*icon} class="solution-icon" />
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                                <div class="learn-more">
                                    {"Learn More"}
                                    <Icon kind={IconKind::ChevronRight} />
                                </div>
                            </div>
                        </RevealOnView>
                    }).collect::<Html>() }
                </div>
            </div>

            <style>
                {r#"
                .solutions {
                    padding: 8rem 0;
                    background: rgba(255, 255, 255, 0.02);
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                }

                .heading-rule {
                    width: 5rem;
                    height: 4px;
                    background: var(--brand-emerald);
                    margin: 0 auto;
                }

                .solutions-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(15rem, 1fr));
                    gap: 1.5rem;
                }

                .solution-card {
                    position: relative;
                    overflow: hidden;
                    cursor: pointer;
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                    height: 100%;
                    transition: transform 0.3s ease;
                }

                .solution-card:hover {
                    transform: translateY(-10px);
                }

                .solution-glow {
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 8rem;
                    height: 8rem;
                    margin: -4rem -4rem 0 0;
                    background: rgba(16, 185, 129, 0.05);
                    filter: blur(64px);
                    transition: all 0.5s ease;
                }

                .solution-card:hover .solution-glow {
                    background: rgba(16, 185, 129, 0.2);
                }

                .solution-icon {
                    width: 2.5rem;
                    height: 2.5rem;
                    color: var(--brand-emerald-light);
                    margin-bottom: 2rem;
                }

                .solution-card h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .solution-card p {
                    color: rgba(245, 245, 240, 0.5);
                    font-size: 0.875rem;
                    line-height: 1.6;
                    margin-bottom: 2rem;
                }

                .learn-more {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--brand-emerald-light);
                    font-weight: 700;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    opacity: 0;
                    transition: opacity 0.2s ease;
                }

                .learn-more .icon {
                    width: 1rem;
                    height: 1rem;
                }

                .solution-card:hover .learn-more {
                    opacity: 1;
                }
                "#}
            </style>
        </section>
    }
}
