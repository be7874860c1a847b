//! Single-page storefront component.
//!
//! All state lives in one `Selection` signal; every input dispatches a
//! `SelectionAction` and the view model is re-derived through a memo.

use chrono::Datelike;
use leptos::*;

use mellylue_core::Reducer;
use mellylue_i18n::Locale;
use mellylue_pricing::Currency;

use crate::config::StorefrontConfig;
use crate::contact::{FieldKind, Link};
use crate::selection::{Selection, SelectionAction};
use crate::storefront::Storefront;
use crate::view::ViewModel;

fn external_link(link: Link, class: &'static str) -> impl IntoView {
    let target = link.external.then_some("_blank");
    let rel = link.external.then_some("noreferrer");
    view! { <a class=class href=link.href target=target rel=rel>{link.label}</a> }
}

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let storefront = match Storefront::new(&StorefrontConfig::default()) {
        Ok(storefront) => storefront,
        Err(e) => {
            tracing::error!(error = %e, "storefront data failed validation");
            return view! { <p class="error">{e.to_string()}</p> }.into_view();
        }
    };
    let year = chrono::Utc::now().year();
    let selection = create_rw_signal(storefront.initial_selection());
    let storefront = store_value(storefront);

    let dispatch = move |action: SelectionAction| selection.update(|s| s.apply(&action));
    let model = create_memo(move |_| {
        storefront.with_value(|sf| sf.view(&selection.get(), year))
    });

    view! {
        <div class="min-h-screen">
            <TopBar model=model dispatch=dispatch/>
            <Hero model=model/>
            <Products model=model dispatch=dispatch selection=selection/>
            <WhyUs model=model/>
            <Stores model=model/>
            <Contact model=model/>
            <footer>
                <span>{move || model.with(|m| m.footer.clone())}</span>
                <a href="#">{move || model.with(|m| m.text.privacy)}</a>
                <a href="#">{move || model.with(|m| m.text.terms)}</a>
            </footer>
        </div>
    }
    .into_view()
}

#[component]
fn TopBar<F>(model: Memo<ViewModel>, dispatch: F) -> impl IntoView
where
    F: Fn(SelectionAction) + Copy + 'static,
{
    view! {
        <header class="topbar">
            <div class="brand">{move || model.with(|m| m.text.brand)}</div>
            <label>{move || model.with(|m| m.text.lang_label)}</label>
            <select
                prop:value=move || model.with(|m| m.selection.locale.code())
                on:change=move |ev| {
                    if let Ok(locale) = event_target_value(&ev).parse::<Locale>() {
                        dispatch(SelectionAction::SetLocale(locale));
                    }
                }
            >
                {Locale::ALL
                    .into_iter()
                    .map(|l| view! { <option value=l.code()>{l.native_name()}</option> })
                    .collect_view()}
            </select>
            <label>{move || model.with(|m| m.text.currency_label)}</label>
            <select
                prop:value=move || model.with(|m| m.selection.currency.code())
                on:change=move |ev| {
                    if let Ok(currency) = event_target_value(&ev).parse::<Currency>() {
                        dispatch(SelectionAction::SetCurrency(currency));
                    }
                }
            >
                {Currency::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                    .collect_view()}
            </select>
        </header>
    }
}

#[component]
fn Hero(model: Memo<ViewModel>) -> impl IntoView {
    view! {
        <section id="hero">
            <h1>{move || model.with(|m| m.text.tagline)}</h1>
            <p>{move || model.with(|m| m.text.subtag)}</p>
            <p class="note">{move || model.with(|m| m.text.hero_note)}</p>
            {move || {
                model.with(|m| {
                    view! {
                        <div class="cta">
                            {external_link(m.hero.primary.clone(), "primary")}
                            {external_link(m.hero.whatsapp.clone(), "secondary")}
                            {external_link(m.hero.phone.clone(), "secondary")}
                        </div>
                    }
                })
            }}
            <span class="badge">{move || model.with(|m| m.hero_badge)}</span>
        </section>
    }
}

#[component]
fn Products<F>(model: Memo<ViewModel>, dispatch: F, selection: RwSignal<Selection>) -> impl IntoView
where
    F: Fn(SelectionAction) + Copy + 'static,
{
    let menu_open = create_memo(move |_| selection.with(|s| s.menu.is_open()));

    view! {
        <section id="products">
            <h2>{move || model.with(|m| m.text.section_products)}</h2>
            <div class="category-menu">
                <button
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| dispatch(SelectionAction::ToggleMenu)
                >
                    {move || model.with(|m| format!("{}: {}", m.text.categories_label, m.active_category_label))}
                </button>
                <Show when=move || menu_open.get()>
                    <ul class="popover">
                        {move || {
                            model.with(|m| {
                                m.categories
                                    .iter()
                                    .map(|option| {
                                        let filter = option.filter;
                                        view! {
                                            <li class:active=option.active>
                                                <button on:click=move |_| dispatch(SelectionAction::SelectCategory(filter))>
                                                    {option.label}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </ul>
                </Show>
            </div>
            <div class="grid">
                {move || {
                    model.with(|m| {
                        if m.products.is_empty() {
                            return view! { <p class="empty">{m.text.no_products}</p> }.into_view();
                        }
                        m.products
                            .iter()
                            .map(|card| {
                                view! {
                                    <article class="product">
                                        <div class="badges">
                                            {card
                                                .badges
                                                .iter()
                                                .map(|b| view! { <span class="badge">{b.label}</span> })
                                                .collect_view()}
                                        </div>
                                        <h3>{card.name.clone()}</h3>
                                        <p>{card.description.clone()}</p>
                                        <div class="price">
                                            {card.price.clone()} " " <span>{card.price_from}</span>
                                        </div>
                                        <a href="#contact">"WhatsApp · Instagram · Email"</a>
                                    </article>
                                }
                            })
                            .collect_view()
                    })
                }}
            </div>
        </section>
    }
}

#[component]
fn WhyUs(model: Memo<ViewModel>) -> impl IntoView {
    view! {
        <section id="why">
            <h2>{move || model.with(|m| m.text.section_why)}</h2>
            <ul>
                {move || {
                    model.with(|m| {
                        m.text.why_bullets.iter().map(|b| view! { <li>{*b}</li> }).collect_view()
                    })
                }}
            </ul>
        </section>
    }
}

#[component]
fn Stores(model: Memo<ViewModel>) -> impl IntoView {
    view! {
        <section id="stores">
            <h2>{move || model.with(|m| m.text.section_stores)}</h2>
            {move || {
                model.with(|m| {
                    m.stores
                        .iter()
                        .map(|s| {
                            view! {
                                <div class="store">
                                    <h3>{s.name}</h3>
                                    <p>{s.address}</p>
                                    <p>{s.hours.clone()}</p>
                                    <a href=s.map_url target="_blank" rel="noreferrer">"Google Maps"</a>
                                </div>
                            }
                        })
                        .collect_view()
                })
            }}
        </section>
    }
}

#[component]
fn Contact(model: Memo<ViewModel>) -> impl IntoView {
    view! {
        <section id="contact">
            <h2>{move || model.with(|m| m.text.contact)}</h2>
            {move || {
                model.with(|m| {
                    let form = m.form.clone();
                    view! {
                        <form action=form.action method=form.method enctype=form.enctype>
                            <h3>{form.title}</h3>
                            {form
                                .fields
                                .into_iter()
                                .map(|field| {
                                    let input = match field.kind {
                                        FieldKind::Text => view! {
                                            <input name=field.name required=field.required/>
                                        }
                                        .into_view(),
                                        FieldKind::Email => view! {
                                            <input type="email" name=field.name required=field.required/>
                                        }
                                        .into_view(),
                                        FieldKind::TextArea => view! {
                                            <textarea name=field.name required=field.required></textarea>
                                        }
                                        .into_view(),
                                    };
                                    view! { <label>{field.label}</label> {input} }
                                })
                                .collect_view()}
                            <button type="submit">{form.submit_label}</button>
                        </form>
                        <div class="channels">
                            {m.contact_links
                                .iter()
                                .cloned()
                                .map(|l| external_link(l, "channel"))
                                .collect_view()}
                        </div>
                    }
                })
            }}
        </section>
    }
}
