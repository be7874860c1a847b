use mellylue_catalog::{Category, CategoryFilter};
use mellylue_core::Reducer;
use mellylue_i18n::Locale;
use mellylue_pricing::Currency;
use mellylue_storefront::{
    MenuState, SelectionAction, Storefront, StorefrontConfig, render_page, write_site,
};

fn storefront() -> Storefront {
    Storefront::new(&StorefrontConfig::default()).expect("default storefront is valid")
}

#[test]
fn visitor_session_end_to_end() {
    let sf = storefront();
    let mut selection = sf.initial_selection();

    // Lands on the Portuguese page, prices in CVE.
    let view = sf.view(&selection, 2026);
    assert_eq!(view.text.section_products, "Produtos em destaque");
    assert_eq!(view.products.len(), 4);

    // Switches to English and USD.
    selection.apply_all(&[
        SelectionAction::SetLocale(Locale::En),
        SelectionAction::SetCurrency(Currency::Usd),
    ]);
    let view = sf.view(&selection, 2026);
    assert_eq!(view.products[0].price, "$40.32");
    assert_eq!(view.products[0].price_from, "from");

    // Opens the category popover: nothing is filtered yet.
    selection.apply(&SelectionAction::OpenMenu);
    assert_eq!(selection.menu, MenuState::Open);
    assert_eq!(sf.view(&selection, 2026).products.len(), 4);

    // Picks toners: popover closes, grid shows the two toners.
    selection.apply(&SelectionAction::SelectCategory(Category::Toner.into()));
    assert_eq!(selection.menu, MenuState::Closed);
    let view = sf.view(&selection, 2026);
    let ids: Vec<_> = view.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["roundlab-dokdo-toner", "cosrx-aha-bha"]);

    // Switches to Korean: same products, same currency, Korean text.
    selection.apply(&SelectionAction::SetLocale(Locale::Ko));
    let korean = sf.view(&selection, 2026);
    let korean_ids: Vec<_> = korean.products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(korean_ids, ids);
    assert_eq!(korean.selection.currency, Currency::Usd);
    assert_eq!(korean.selection.active_category, CategoryFilter::Only(Category::Toner));
    assert_eq!(korean.text.section_products, "추천 제품");
    assert_eq!(korean.products[1].price, "$22.08");
}

#[test]
fn rendered_page_reflects_selection() {
    let sf = storefront();
    let selection = sf
        .initial_selection()
        .reduce(&SelectionAction::SetCurrency(Currency::Krw));
    let html = render_page(&sf.view(&selection, 2026));
    assert!(html.contains("<html lang=\"pt\">"));
    assert!(html.contains("56\u{a0}700,00\u{a0}₩"));
    assert!(html.contains("© 2026 Mellylue"));
}

#[test]
fn writes_one_page_per_locale_plus_index() {
    let dir = tempfile::tempdir().unwrap();
    let written = write_site(&storefront(), dir.path(), 2026).unwrap();
    assert_eq!(written.len(), 4);

    for locale in Locale::ALL {
        let path = dir.path().join(format!("index.{}.html", locale.code()));
        let html = std::fs::read_to_string(&path).unwrap();
        assert!(html.contains(&format!("<html lang=\"{}\">", locale.code())));
    }

    let index = std::fs::read_to_string(dir.path().join("index.html")).unwrap();
    let pt = std::fs::read_to_string(dir.path().join("index.pt.html")).unwrap();
    assert_eq!(index, pt);
}

#[test]
fn config_file_drives_initial_selection() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mellylue.json");
    std::fs::write(
        &path,
        r#"{"default_locale": "ko", "default_currency": "KRW", "default_category": "mask"}"#,
    )
    .unwrap();

    let config = StorefrontConfig::load(&path).unwrap();
    let sf = Storefront::new(&config).unwrap();
    let view = sf.view(&sf.initial_selection(), 2026);
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].name, "Abib Gummy Sheet Mask");
    assert_eq!(view.products[0].price, "₩8,100.00");
    assert_eq!(view.products[0].badges[0].label, "신상");
}
