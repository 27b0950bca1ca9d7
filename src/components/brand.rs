use yew::prelude::*;

use crate::config::BRAND_NAME;

#[derive(Properties, PartialEq)]
pub struct BrandMarkProps {
    #[prop_or(false)]
    pub small: bool,
}

/// Emerald square with a rotated outline diamond, followed by the wordmark.
#[function_component(BrandMark)]
pub fn brand_mark(props: &BrandMarkProps) -> Html {
    html! {
        <div class={classes!("brand", props.small.then(|| "brand-small"))}>
            <div class="brand-square">
                <div class="brand-diamond"></div>
            </div>
            <span>{BRAND_NAME}</span>
            <style>
                {r#"
                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 800;
                    letter-spacing: -0.05em;
                }

                .brand-square {
                    width: 2rem;
                    height: 2rem;
                    background: var(--brand-emerald);
                    border-radius: 2px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .brand-diamond {
                    width: 1rem;
                    height: 1rem;
                    border: 2px solid var(--brand-white);
                    transform: rotate(45deg);
                }

                .brand-small {
                    font-size: 0.875rem;
                    color: rgba(245, 245, 240, 0.5);
                }

                .brand-small .brand-square {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .brand-small .brand-diamond {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-width: 1px;
                }
                "#}
            </style>
        </div>
    }
}
