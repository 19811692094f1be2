use yew::prelude::*;

use crate::content::Brand;
use crate::parallax::use_parallax;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub brand: Brand,
    pub image: String,
    pub pills: Vec<String>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps { brand, image, pills } = props;
    let visual_ref = use_node_ref();
    let parallax = use_parallax(visual_ref.clone());

    html! {
        <section class="hero">
            <div class="section-wrap hero__grid">
                <div class="hero__text">
                    <h1>{&brand.name}</h1>
                    <p class="hero__tagline">{&brand.tagline}</p>

                    <div class="hero__ctas">
                        <a href="#products" class="btn btn--gold">
                            <span>{&brand.cta_primary}</span>
                        </a>
                        <a href="#contact" class="btn btn--glass">
                            <span>{&brand.cta_secondary}</span>
                        </a>
                    </div>

                    <p class="hero__social">
                        {"New drops & offers on Instagram: "}
                        <span class="hero__handle">{&brand.instagram}</span>
                    </p>
                </div>

                <div
                    ref={visual_ref}
                    class="glassCard parallaxWrap hero__visual"
                    style={parallax.applied().to_css()}
                >
                    <div class="glassInner hero__frame">
                        <img
                            src={image.clone()}
                            alt={format!("{} home diffuser", brand.name)}
                            class="hero__image"
                        />
                        <div aria-hidden="true" class="hero__shade"></div>
                        <div aria-hidden="true" class="hero__glow"></div>
                        <div aria-hidden="true" class="hero__edge"></div>
                    </div>

                    <div class="hero__pills">
                        { for pills.iter().map(|pill| html! {
                            <div key={pill.clone()} class="pill">{pill}</div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    padding: 78px 0 54px;
                    background:
                        radial-gradient(900px 520px at 25% 10%, rgba(194,164,109,0.08), rgba(0,0,0,0) 60%),
                        radial-gradient(900px 520px at 75% 20%, rgba(194,164,109,0.06), rgba(0,0,0,0) 60%),
                        linear-gradient(180deg, rgba(15,15,16,1), rgba(15,15,16,1));
                }
                .hero__grid {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 28px;
                    align-items: center;
                }
                .hero__text h1 {
                    font-size: 54px;
                    margin: 0 0 12px;
                    line-height: 1.05;
                }
                .hero__tagline {
                    font-size: 18px;
                    max-width: 560px;
                    color: var(--text-secondary);
                    line-height: 1.75;
                    margin: 0;
                }
                .hero__ctas {
                    display: flex;
                    gap: 12px;
                    margin-top: 26px;
                    flex-wrap: wrap;
                }
                .hero__social {
                    margin-top: 14px;
                    color: var(--text-secondary);
                    font-size: 13px;
                }
                .hero__handle {
                    color: var(--text-primary);
                    font-weight: 600;
                }
                .hero__visual {
                    padding: 14px;
                }
                .hero__frame {
                    position: relative;
                    width: 100%;
                    height: 420px;
                }
                .hero__image {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    object-position: center 55%;
                    filter: saturate(0.9) contrast(1.05) brightness(0.95);
                    transform: scale(1.08);
                }
                .hero__shade, .hero__glow, .hero__edge {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .hero__shade {
                    background: linear-gradient(180deg, rgba(15,15,16,0.10), rgba(15,15,16,0.55));
                }
                .hero__glow {
                    background: radial-gradient(520px 240px at 70% 20%, rgba(194,164,109,0.18), rgba(0,0,0,0));
                    mix-blend-mode: screen;
                    opacity: 0.75;
                }
                .hero__edge {
                    border-radius: 18px;
                    box-shadow: inset 0 0 0 1px rgba(255,255,255,0.04);
                }
                .hero__pills {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 10px;
                    margin-top: 14px;
                }
                @media (max-width: 768px) {
                    .hero__grid {
                        grid-template-columns: 1fr;
                    }
                    .hero__text h1 {
                        font-size: 40px;
                    }
                }
                "#}
            </style>
        </section>
    }
}
