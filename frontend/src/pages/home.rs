use log::info;
use yew::prelude::*;

use crate::components::{
    contact::Contact, footer::Footer, hero::Hero, products::ProductGallery, reviews::Reviews,
};
use crate::content::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: SiteContent,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let SiteContent {
        brand,
        hero_image,
        hero_pills,
        products,
        testimonials,
    } = &props.content;

    {
        use_effect_with_deps(
            move |_| {
                info!("Rendering Home page");
                || ()
            },
            (), // Log once on mount, not on every parallax re-render
        );
    }

    html! {
        <>
            <Hero brand={brand.clone()} image={hero_image.clone()} pills={hero_pills.clone()} />

            <section id="about" class="page-section">
                <div class="section-wrap">
                    <h2 class="about__title">{format!("About {}", brand.name)}</h2>
                    <p class="muted about__body">{&brand.about}</p>
                </div>
                <style>
                    {r#"
                    .about__title {
                        margin: 0 0 10px;
                    }
                    .about__body {
                        max-width: 820px;
                        margin: 0;
                    }
                    "#}
                </style>
            </section>

            <ProductGallery products={products.clone()} />
            <Reviews testimonials={testimonials.clone()} />
            <Contact brand={brand.clone()} />
            <Footer brand_name={brand.name.clone()} />
        </>
    }
}
