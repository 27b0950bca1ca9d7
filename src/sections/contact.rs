use log::info;
use yew::prelude::*;

use crate::components::icons::{Icon, IconKind};
use crate::config::{COMPANY_NAME, OFFICE_LOCATION};
use crate::sections::footer::Footer;

struct Field {
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
}

const FIELD_ROWS: [[Field; 2]; 2] = [
    [
        Field { label: "Full Name", input_type: "text", placeholder: "John Doe" },
        Field { label: "Work Email", input_type: "email", placeholder: "john@company.com" },
    ],
    [
        Field { label: "Mobile Number", input_type: "tel", placeholder: "+971 ..." },
        Field { label: "Company Name", input_type: "text", placeholder: "Company Ltd." },
    ],
];

fn field(field: &Field) -> Html {
    html! {
        <div class="form-field">
            <label>{field.label}</label>
            <input type={field.input_type} class="form-input" placeholder={field.placeholder} />
        </div>
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    // Inquiries are not sent anywhere; just keep the page from reloading.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("Inquiry form submitted; no delivery is configured");
    });

    html! {
        <section id="contact" class="contact">
            <div class="section-inner">
                <div class="contact-grid">
                    <div>
                        <h2 class="contact-title">
                            {"Let’s Elevate Your"}<br />{"Monetization Strategy"}
                        </h2>
                        <p class="contact-copy">
                            {"Ready to maximize your publisher revenue? Our team of experts is here to help you design a custom monetization strategy."}
                        </p>

                        <div class="contact-details">
                            <div>
                                <h4 class="contact-label">{"Office"}</h4>
                                <p class="contact-office">{COMPANY_NAME}<br />{OFFICE_LOCATION}</p>
                            </div>
                            <div class="social-links">
                                <a href="#" class="social-link" aria-label="LinkedIn">
                                    <Icon kind={IconKind::Linkedin} />
                                </a>
                                <a href="#" class="social-link" aria-label="Instagram">
                                    <Icon kind={IconKind::Instagram} />
                                </a>
                            </div>
                        </div>
                    </div>

                    <div class="glass-card contact-card">
                        <form class="inquiry-form" {onsubmit}>
                            { FIELD_ROWS.iter().map(|row| html! {
                                <div class="form-row">
                                    { row.iter().map(field).collect::<Html>() }
                                </div>
                            }).collect::<Html>() }
                            <div class="form-field">
                                <label>{"Message (Optional)"}</label>
                                <textarea rows="4" class="form-input" placeholder="Tell us about your traffic..." />
                            </div>
                            <button type="submit" class="form-submit emerald-glow">{"Submit Inquiry"}</button>
                        </form>
                    </div>
                </div>

                <Footer />
            </div>

            <style>
                {r#"
                .contact {
                    padding: 8rem 0;
                    background: var(--brand-black);
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                    gap: 5rem;
                }

                .contact-title {
                    font-size: 3rem;
                    font-weight: 700;
                    line-height: 1.2;
                    margin-bottom: 2rem;
                }

                .contact-copy {
                    color: rgba(245, 245, 240, 0.5);
                    max-width: 28rem;
                    margin-bottom: 3rem;
                }

                .contact-details {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                }

                .contact-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: var(--brand-emerald-light);
                    margin-bottom: 0.5rem;
                }

                .contact-office {
                    font-size: 1.125rem;
                }

                .social-links {
                    display: flex;
                    gap: 1rem;
                }

                .social-link {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: var(--brand-white);
                    transition: background 0.2s ease;
                }

                .social-link:hover {
                    background: rgba(255, 255, 255, 0.05);
                }

                .social-link .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .contact-card {
                    padding: 2.5rem;
                    border-radius: 1.5rem;
                }

                .inquiry-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .form-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(12rem, 1fr));
                    gap: 1.5rem;
                }

                .form-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }

                .form-field label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    opacity: 0.5;
                }

                .form-input {
                    width: 100%;
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                    color: var(--brand-white);
                    font: inherit;
                    transition: border-color 0.2s ease;
                }

                .form-input:focus {
                    outline: none;
                    border-color: var(--brand-emerald);
                }

                .form-submit {
                    width: 100%;
                    padding: 1rem 0;
                    background: var(--brand-emerald);
                    color: #fff;
                    font-weight: 700;
                    border: none;
                    border-radius: 0.75rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .form-submit:hover {
                    background: var(--brand-emerald-light);
                }
                "#}
            </style>
        </section>
    }
}
