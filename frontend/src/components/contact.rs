use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::config;
use crate::content::Brand;

pub const ACKNOWLEDGMENT: &str = "Form submitted (demo). We\u{2019}ll connect this to email later.";

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub brand: Brand,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let brand = &props.brand;
    let acknowledgment = use_state(|| None::<String>);
    // Holding the timeout keeps it armed; replacing or dropping it cancels.
    let dismiss_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let onsubmit = {
        let acknowledgment = acknowledgment.clone();
        let dismiss_timer = dismiss_timer.clone();
        Callback::from(move |e: SubmitEvent| {
            // Nothing leaves the page; the browser has already checked the required fields.
            e.prevent_default();
            debug!("Contact form submitted");
            acknowledgment.set(Some(ACKNOWLEDGMENT.to_string()));

            let acknowledgment = acknowledgment.clone();
            let timeout = Timeout::new(config::ACK_DISMISS_MS, move || {
                acknowledgment.set(None);
            });
            *dismiss_timer.borrow_mut() = Some(timeout);
        })
    };

    let dismiss = {
        let acknowledgment = acknowledgment.clone();
        let dismiss_timer = dismiss_timer.clone();
        Callback::from(move |_: MouseEvent| {
            dismiss_timer.borrow_mut().take();
            acknowledgment.set(None);
        })
    };

    html! {
        <section id="contact" class="page-section">
            <div class="section-wrap">
                <h2 class="section-title">{"Contact"}</h2>

                <div class="contact__grid">
                    <form class="card contact__form" onsubmit={onsubmit}>
                        {
                            if let Some(message) = (*acknowledgment).as_ref() {
                                html! {
                                    <div class="contact__ack" role="status" onclick={dismiss}>
                                        {message}
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        <input class="field" name="name" placeholder="Your name" required={true} />
                        <input
                            class="field"
                            name="email"
                            type="email"
                            placeholder="Email address"
                            required={true}
                        />
                        <textarea
                            class="field contact__message"
                            name="message"
                            rows="5"
                            placeholder="Your message"
                            required={true}
                        />
                        <button type="submit" class="btn btn--gold contact__submit">
                            <span>{"Send message"}</span>
                        </button>
                    </form>

                    <div class="card contact__details">
                        <p class="muted">
                            <strong>{"Email:"}</strong>{" "}{&brand.email}
                        </p>
                        <p class="muted">
                            <strong>{"Location:"}</strong>{" "}{&brand.location}
                        </p>
                        <p class="muted">
                            <strong>{"Instagram:"}</strong>{" "}{&brand.instagram}
                        </p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact__grid {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 16px;
                    margin-top: 26px;
                }
                .field {
                    width: 100%;
                    margin-top: 12px;
                    padding: 12px;
                    border-radius: 12px;
                    border: 1px solid var(--border-soft);
                    background: rgba(255,255,255,0.06);
                    color: var(--text-primary);
                    outline: none;
                    box-sizing: border-box;
                }
                .contact__form .field:first-of-type {
                    margin-top: 6px;
                }
                .contact__message {
                    resize: vertical;
                }
                .contact__submit {
                    margin-top: 14px;
                    width: 100%;
                }
                .contact__ack {
                    padding: 10px 12px;
                    border-radius: 12px;
                    border: 1px solid rgba(194,164,109,0.4);
                    background: rgba(194,164,109,0.12);
                    color: var(--text-primary);
                    font-size: 14px;
                    cursor: pointer;
                }
                .contact__details p:first-child {
                    margin-top: 0;
                }
                .contact__details p:last-child {
                    margin-bottom: 0;
                }
                .contact__details strong {
                    color: var(--text-primary);
                }
                @media (max-width: 768px) {
                    .contact__grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}
