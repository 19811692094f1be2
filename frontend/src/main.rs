use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod parallax;
mod components {
    pub mod contact;
    pub mod footer;
    pub mod hero;
    pub mod products;
    pub mod reviews;
}
mod pages {
    pub mod home;
}

use content::SiteContent;
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub brand_name: String,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="top-nav">
            <div class="section-wrap nav-content">
                <a href="#top" class="nav-logo">{&props.brand_name}</a>

                <nav class="nav-links">
                    <a class="nav-link" href="#about">{"About"}</a>
                    <a class="nav-link" href="#products">{"Products"}</a>
                    <a class="nav-link" href="#reviews">{"Reviews"}</a>
                    <a class="nav-link" href="#contact">{"Contact"}</a>
                </nav>
            </div>
        </header>
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| SiteContent::load(), ());

    match &*content {
        Ok(content) => html! {
            <div class="site">
                // Anchor for the brand link
                <div id="top" />
                <Header brand_name={content.brand.name.clone()} />
                <Home content={content.clone()} />
            </div>
        },
        Err(e) => {
            error!("Failed to load site content: {}", e);
            html! {
                <div class="site site--fallback">
                    <div class="section-wrap">
                        <h1>{"Hauz of Dabs"}</h1>
                        <p class="muted">{"This page is temporarily unavailable. Please check back soon."}</p>
                    </div>
                </div>
            }
        }
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
