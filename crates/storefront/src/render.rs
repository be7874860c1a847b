//! Static HTML rendering of a resolved view.
//!
//! Produces one self-contained document per selection. The language picker
//! links between the per-locale files written by [`write_site`].

use std::path::{Path, PathBuf};

use mellylue_core::Reducer;
use mellylue_i18n::Locale;

use crate::contact::{FieldKind, Link};
use crate::selection::SelectionAction;
use crate::storefront::Storefront;
use crate::view::ViewModel;

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// File name of the page for `locale`.
pub fn page_file_name(locale: Locale) -> String {
    format!("index.{}.html", locale.code())
}

fn link(class: &str, link: &Link) -> String {
    let target = if link.external {
        r#" target="_blank" rel="noreferrer""#
    } else {
        ""
    };
    format!(
        r#"<a class="{class}" href="{}"{target}>{}</a>"#,
        escape(&link.href),
        escape(&link.label)
    )
}

fn section(out: &mut String, id: &str, title: &str, body: &str) {
    out.push_str(&format!(
        "<section id=\"{id}\">\n<h2>{}</h2>\n{body}</section>\n",
        escape(title)
    ));
}

/// Render a complete HTML document for `view`.
pub fn render_page(view: &ViewModel) -> String {
    let text = view.text;
    let mut out = String::with_capacity(16 * 1024);

    out.push_str(&format!(
        "<!doctype html>\n<html lang=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n",
        view.selection.locale.code(),
        escape(text.brand)
    ));

    // Top bar: brand, language and currency pickers.
    out.push_str(&format!(
        "<header class=\"topbar\">\n<div class=\"brand\">{}</div>\n",
        escape(text.brand)
    ));
    out.push_str(&format!(
        "<nav class=\"languages\" aria-label=\"{}\">",
        escape(text.lang_label)
    ));
    for option in &view.locales {
        let current = if option.selected { r#" aria-current="page""# } else { "" };
        out.push_str(&format!(
            r#"<a href="{}" hreflang="{}"{current}>{}</a>"#,
            page_file_name(option.locale),
            option.locale.code(),
            escape(option.label)
        ));
    }
    out.push_str("</nav>\n");
    out.push_str(&format!(
        "<span class=\"currency\">{}: {}</span>\n</header>\n",
        escape(text.currency_label),
        view.selection.currency.code()
    ));

    // Hero.
    out.push_str(&format!(
        "<section id=\"hero\">\n<h1>{}</h1>\n<p>{}</p>\n<p class=\"note\">{}</p>\n<div class=\"cta\">{}{}{}</div>\n<span class=\"badge\">{}</span>\n</section>\n",
        escape(text.tagline),
        escape(text.subtag),
        escape(text.hero_note),
        link("primary", &view.hero.primary),
        link("secondary", &view.hero.whatsapp),
        link("secondary", &view.hero.phone),
        escape(view.hero_badge),
    ));

    // Products with the category menu.
    let mut body = format!(
        "<nav class=\"categories\" aria-label=\"{}\"><ul>",
        escape(text.categories_label)
    );
    for option in &view.categories {
        let class = if option.active { " class=\"active\"" } else { "" };
        body.push_str(&format!(
            "<li{class} data-category=\"{}\">{}</li>",
            option.filter.key(),
            escape(option.label)
        ));
    }
    body.push_str("</ul></nav>\n<div class=\"grid\">\n");
    if view.products.is_empty() {
        body.push_str(&format!("<p class=\"empty\">{}</p>\n", escape(text.no_products)));
    }
    for card in &view.products {
        body.push_str(&format!("<article class=\"product\" data-id=\"{}\">", escape(&card.id)));
        body.push_str("<div class=\"badges\">");
        for badge in &card.badges {
            body.push_str(&format!(
                "<span class=\"badge {}\">{}</span>",
                badge.key,
                escape(badge.label)
            ));
        }
        body.push_str("</div>");
        body.push_str(&format!(
            "<h3>{}</h3><p>{}</p><div class=\"price\">{} <span>{}</span></div>\
             <a href=\"#contact\">WhatsApp · Instagram · Email</a></article>\n",
            escape(&card.name),
            escape(&card.description),
            escape(&card.price),
            escape(card.price_from)
        ));
    }
    body.push_str("</div>\n");
    section(&mut out, "products", text.section_products, &body);

    // Why us.
    let mut body = String::from("<ul>");
    for bullet in &text.why_bullets {
        body.push_str(&format!("<li>{}</li>", escape(bullet)));
    }
    body.push_str("</ul>\n");
    section(&mut out, "why", text.section_why, &body);

    // Stores.
    let mut body = String::new();
    for store in &view.stores {
        body.push_str(&format!(
            "<div class=\"store\"><h3>{}</h3><p>{}</p><p>{}</p>{}</div>\n",
            escape(store.name),
            escape(store.address),
            escape(&store.hours),
            link(
                "map",
                &Link {
                    label: "Google Maps".to_string(),
                    href: store.map_url.to_string(),
                    external: true,
                }
            )
        ));
    }
    section(&mut out, "stores", text.section_stores, &body);

    // Contact.
    let form = &view.form;
    let mut body = format!(
        "<form action=\"{}\" method=\"{}\" enctype=\"{}\">\n<h3>{}</h3>\n",
        escape(&form.action),
        form.method,
        form.enctype,
        escape(&form.title)
    );
    for field in &form.fields {
        let required = if field.required { " required" } else { "" };
        body.push_str(&format!("<label for=\"{0}\">{1}</label>", field.name, escape(&field.label)));
        body.push_str(&match field.kind {
            FieldKind::Text => format!("<input id=\"{0}\" name=\"{0}\"{required}>", field.name),
            FieldKind::Email => {
                format!("<input id=\"{0}\" type=\"email\" name=\"{0}\"{required}>", field.name)
            }
            FieldKind::TextArea => {
                format!("<textarea id=\"{0}\" name=\"{0}\"{required}></textarea>", field.name)
            }
        });
        body.push('\n');
    }
    body.push_str(&format!(
        "<button type=\"submit\">{}</button>\n</form>\n<div class=\"channels\">",
        escape(&form.submit_label)
    ));
    for channel in &view.contact_links {
        body.push_str(&link("channel", channel));
    }
    body.push_str("</div>\n");
    section(&mut out, "contact", text.contact, &body);

    out.push_str(&format!(
        "<footer><span>{}</span> <a href=\"#\">{}</a> <a href=\"#\">{}</a></footer>\n</body>\n</html>\n",
        escape(&view.footer),
        escape(text.privacy),
        escape(text.terms)
    ));
    out
}

/// Render every locale for the storefront's initial selection into `out_dir`.
///
/// Writes `index.<locale>.html` per locale plus `index.html` for the initial
/// locale. Returns the written paths.
pub fn write_site(storefront: &Storefront, out_dir: &Path, year: i32) -> std::io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)?;
    let initial = storefront.initial_selection();
    let mut written = Vec::with_capacity(Locale::ALL.len() + 1);

    for locale in Locale::ALL {
        let selection = initial.reduce(&SelectionAction::SetLocale(locale));
        let html = render_page(&storefront.view(&selection, year));
        let path = out_dir.join(page_file_name(locale));
        std::fs::write(&path, &html)?;
        tracing::info!(path = %path.display(), locale = %locale, "rendered page");
        written.push(path);

        if locale == initial.locale {
            let index = out_dir.join("index.html");
            std::fs::write(&index, &html)?;
            written.push(index);
        }
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mellylue_catalog::{Catalog, Category, CategoryFilter};
    use mellylue_pricing::{Currency, RateTable};

    use crate::contact::ContactInfo;
    use crate::selection::Selection;

    fn page(selection: Selection) -> String {
        render_page(&ViewModel::resolve(
            &selection,
            &Catalog::sample(),
            &RateTable::default(),
            &ContactInfo::default(),
            2026,
        ))
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn one_card_per_visible_product() {
        let html = page(Selection::default());
        assert_eq!(html.matches("<article class=\"product\"").count(), 4);

        let html = page(Selection::new(Locale::En, Currency::Cve, Category::Toner.into()));
        assert_eq!(html.matches("<article class=\"product\"").count(), 2);
        assert!(html.contains("COSRX AHA/BHA Toner"));
        assert!(!html.contains("Abib Gummy Sheet Mask"));
    }

    #[test]
    fn hero_shows_product_line_badge_in_every_locale() {
        for locale in Locale::ALL {
            let html = page(Selection::new(locale, Currency::Cve, CategoryFilter::All));
            let hero = &html[html.find("<section id=\"hero\">").unwrap()..];
            let hero = &hero[..hero.find("</section>").unwrap()];
            assert!(
                hero.contains("<span class=\"badge\">ERIS\u{2011}ready · Clean · Cruelty\u{2011}free</span>"),
                "{locale}"
            );
        }
    }

    #[test]
    fn empty_category_shows_message() {
        let html = page(Selection::new(Locale::En, Currency::Cve, Category::Serum.into()));
        assert!(html.contains("No products in this category yet."));
    }

    #[test]
    fn descriptions_are_escaped() {
        let html = page(Selection::new(Locale::En, Currency::Cve, CategoryFilter::All));
        assert!(html.contains("Gentle exfoliation &amp; sebum care"));
        assert!(html.contains("<html lang=\"en\">"));
    }

    #[test]
    fn contact_form_hands_off_to_mail_client() {
        let html = page(Selection::default());
        assert!(html.contains(r#"<form action="mailto:contact@kbeauty.cv" method="post" enctype="text/plain">"#));
        assert!(html.contains(r#"<input id="email" type="email" name="email" required>"#));
        assert!(html.contains(r#"<textarea id="message" name="message"></textarea>"#));
        assert!(html.contains(r#"href="https://wa.me/2380000000" target="_blank""#));
    }
}
