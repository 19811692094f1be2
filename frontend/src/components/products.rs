use yew::prelude::*;

use crate::content::Product;

#[derive(Properties, PartialEq)]
pub struct ProductGalleryProps {
    pub products: Vec<Product>,
}

#[function_component(ProductGallery)]
pub fn product_gallery(props: &ProductGalleryProps) -> Html {
    html! {
        <section id="products" class="page-section">
            <div class="section-wrap">
                <h2 class="section-title">{"Products"}</h2>

                <div class="card-grid">
                    { for props.products.iter().map(|product| html! {
                        <div key={product.title.clone()} class="card product-card">
                            <div class="product-card__media">
                                <img src={product.image.clone()} alt={product.title.clone()} />
                                <div aria-hidden="true" class="product-card__shade"></div>
                                <div aria-hidden="true" class="product-card__glow"></div>
                            </div>
                            <h3>{&product.title}</h3>
                            <p class="muted">{&product.description}</p>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .product-card {
                    padding: 16px;
                }
                .product-card h3 {
                    margin-top: 0;
                }
                .product-card p {
                    margin-bottom: 0;
                }
                .product-card__media {
                    position: relative;
                    height: 190px;
                    border-radius: 16px;
                    overflow: hidden;
                    border: 1px solid var(--border-soft);
                    background: rgba(255,255,255,0.02);
                    margin-bottom: 14px;
                }
                .product-card__media img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: saturate(0.9) contrast(1.05) brightness(0.88);
                    transform: scale(1.04);
                }
                .product-card__shade, .product-card__glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .product-card__shade {
                    background: linear-gradient(180deg, rgba(15,15,16,0.12), rgba(15,15,16,0.72));
                }
                .product-card__glow {
                    background: radial-gradient(420px 180px at 30% 20%, rgba(194,164,109,0.16), rgba(0,0,0,0));
                    mix-blend-mode: screen;
                    opacity: 0.65;
                }
                "#}
            </style>
        </section>
    }
}
