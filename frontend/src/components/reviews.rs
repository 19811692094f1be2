use yew::prelude::*;

use crate::content::Testimonial;

#[derive(Properties, PartialEq)]
pub struct ReviewsProps {
    pub testimonials: Vec<Testimonial>,
}

#[function_component(Reviews)]
pub fn reviews(props: &ReviewsProps) -> Html {
    html! {
        <section id="reviews" class="page-section">
            <div class="section-wrap">
                <h2 class="section-title">{"Reviews"}</h2>

                <div class="card-grid">
                    { for props.testimonials.iter().enumerate().map(|(i, t)| html! {
                        <div key={i} class="card">
                            <p class="muted review__quote">{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                            <p class="review__author">{format!("\u{2014} {}", t.author)}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .review__quote {
                    margin-top: 0;
                }
                .review__author {
                    font-size: 13px;
                    margin-bottom: 0;
                }
                "#}
            </style>
        </section>
    }
}
