use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::components::brand::BrandMark;
use crate::config::COMPANY_NAME;

fn copyright_line(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, COMPANY_NAME)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <BrandMark small={true} />
            <p>{copyright_line(year)}</p>
            <div class="legal-links">
                <a href="#">{"Privacy Policy"}</a>
                <a href="#">{"Terms of Service"}</a>
            </div>
            <style>
                {r#"
                .site-footer {
                    margin-top: 8rem;
                    padding-top: 3rem;
                    border-top: 1px solid rgba(255, 255, 255, 0.05);
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: space-between;
                    align-items: center;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: rgba(245, 245, 240, 0.3);
                }

                .legal-links {
                    display: flex;
                    gap: 2rem;
                }

                .legal-links a {
                    color: inherit;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .legal-links a:hover {
                    color: var(--brand-white);
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(2026),
            "© 2026 The Concept Advertising. All rights reserved."
        );
    }
}
