use chrono::{Datelike, Local};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub brand_name: String,
}

pub fn copyright(year: i32) -> String {
    format!("\u{a9} {}", year)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="section-wrap site-footer__row">
                <div>{&props.brand_name}</div>
                <div>{copyright(year)}</div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 26px 0;
                    border-top: 1px solid var(--border-soft);
                }
                .site-footer__row {
                    display: flex;
                    justify-content: space-between;
                    gap: 16px;
                    flex-wrap: wrap;
                    font-size: 13px;
                    color: var(--text-secondary);
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
    fn copyright_uses_given_year() {
        assert_eq!(copyright(2026), "\u{a9} 2026");
    }

    #[test]
    fn local_clock_year_is_plausible() {
        let year = Local::now().year();
        assert!(year >= 2024, "clock reported {year}");
        assert!(copyright(year).ends_with(&year.to_string()));
    }
}
