use yew::prelude::*;

use crate::components::counter::Counter;

pub struct Stat {
    pub label: &'static str,
    pub value: u32,
    pub suffix: &'static str,
}

pub const STATS: [Stat; 4] = [
    Stat { label: "Average Revenue Uplift", value: 35, suffix: "%" },
    Stat { label: "Premium Demand Partners", value: 150, suffix: "+" },
    Stat { label: "Header Bidding Infrastructure", value: 10, suffix: "ms" },
    Stat { label: "Dedicated Account Managers", value: 24, suffix: "/7" },
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    html! {
        <section id="why-us" class="why-us">
            <div class="section-inner">
                <div class="section-heading">
                    <h2 class="section-title">
                        {"Built for Performance."}<br />{"Designed for Scale."}
                    </h2>
                </div>

                <div class="stats-grid">
                    { STATS.iter().map(|stat| html! {
                        <div class="stat">
                            <div class="stat-value">
                                <Counter value={stat.value} suffix={stat.suffix} />
                            </div>
                            <p class="stat-label">{stat.label}</p>
                        </div>
                    }).collect::<Html>() }
                </div>
            </div>

            <style>
                {r#"
                .why-us {
                    padding: 8rem 0;
                    position: relative;
                }

                .stats-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                    gap: 3rem;
                }

                .stat {
                    text-align: center;
                }

                .stat-value {
                    font-size: clamp(3rem, 6vw, 3.75rem);
                    font-weight: 800;
                    color: var(--brand-emerald-light);
                    margin-bottom: 1rem;
                    font-variant-numeric: tabular-nums;
                }

                .stat-label {
                    color: rgba(245, 245, 240, 0.4);
                    font-weight: 500;
                    letter-spacing: 0.025em;
                    text-transform: uppercase;
                    font-size: 0.75rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::count_up::{format_count, CountUp, CounterTiming};

    #[test]
    fn test_stats_settle_on_their_labels() {
        let settled: Vec<String> = STATS
            .iter()
            .map(|stat| {
                let mut run = CountUp::new(stat.value, CounterTiming::default());
                while run.tick().is_some() {}
                format_count(run.current(), stat.suffix)
            })
            .collect();

        assert_eq!(settled, vec!["35%", "150+", "10ms", "24/7"]);
    }
}
