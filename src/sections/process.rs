use yew::prelude::*;

use crate::components::reveal::RevealOnView;
use crate::motion::reveal::Entrance;

const STEPS: [(&str, &str); 3] = [
    ("Integration", "Seamless setup with our lightweight SDK or header bidding wrapper."),
    ("Optimization", "Our AI engine analyzes traffic to find the perfect demand mix."),
    ("Revenue Scaling", "Watch your yields grow with premium demand and direct access."),
];

const STEP_STAGGER_MS: u32 = 200;

fn step_number(idx: usize) -> String {
    format!("{:02}", idx + 1)
}

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section class="process">
            <div class="section-inner">
                <div class="section-heading">
                    <h2 class="section-title">{"How It Works"}</h2>
                    <p class="process-subtitle">{"A simple 3-step flow to elevate your revenue."}</p>
                </div>

                <div class="process-track">
                    <div class="process-line"></div>
                    <div class="process-steps">
                        { STEPS.iter().enumerate().map(|(idx, (title, desc))| html! {
                            <RevealOnView
                                class="process-step"
                                entrance={Entrance::ScaleIn { from_percent: 90 }}
                                delay_ms={idx as u32 * STEP_STAGGER_MS}
                            >
                                <div class="step-number emerald-glow">{step_number(idx)}</div>
                                <h3>{*title}</h3>
                                <p>{*desc}</p>
                            </RevealOnView>
                        }).collect::<Html>() }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .process {
                    padding: 8rem 0;
                    background: rgba(16, 185, 129, 0.05);
                }

                .process-subtitle {
                    color: rgba(245, 245, 240, 0.5);
                }

                .process-track {
                    position: relative;
                }

                .process-line {
                    position: absolute;
                    top: 50%;
                    left: 0;
                    width: 100%;
                    height: 1px;
                    background: rgba(255, 255, 255, 0.1);
                    transform: translateY(-50%);
                    z-index: 0;
                }

                .process-steps {
                    position: relative;
                    z-index: 10;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                    gap: 3rem;
                }

                .process-step {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .step-number {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    background: var(--brand-emerald);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 2rem;
                }

                .process-step h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .process-step p {
                    color: rgba(245, 245, 240, 0.5);
                    font-size: 0.875rem;
                    max-width: 20rem;
                }

                @media (max-width: 1024px) {
                    .process-line {
                        display: none;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_numbers_are_zero_padded() {
        let numbers: Vec<String> = (0..STEPS.len()).map(step_number).collect();
        assert_eq!(numbers, vec!["01", "02", "03"]);
    }
}
