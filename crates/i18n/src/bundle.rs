//! Statically authored UI dictionaries.
//!
//! Each locale has one [`LocaleBundle`]. Because the bundle is a struct, a
//! missing key is a compile error; [`check_key_parity`] additionally guards
//! against empty entries and uneven list lengths.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;

use mellylue_core::{DomainError, DomainResult};

use crate::locale::Locale;

/// Labels for product badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeLabels {
    pub bestseller: &'static str,
    pub new: &'static str,
    pub clean: &'static str,
}

/// Labels for catalog categories, including the synthetic `all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLabels {
    pub all: &'static str,
    pub cleanser: &'static str,
    pub toner: &'static str,
    pub serum: &'static str,
    pub cream: &'static str,
    pub sunscreen: &'static str,
    pub mask: &'static str,
}

/// Complete set of translated UI strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocaleBundle {
    pub brand: &'static str,
    pub tagline: &'static str,
    pub subtag: &'static str,
    pub shop_now: &'static str,
    pub hero_note: &'static str,
    pub badges: BadgeLabels,
    pub section_products: &'static str,
    pub categories_label: &'static str,
    pub categories: CategoryLabels,
    pub no_products: &'static str,
    pub section_why: &'static str,
    pub why_bullets: [&'static str; 4],
    pub section_stores: &'static str,
    pub mindelo: &'static str,
    pub praia: &'static str,
    pub hours: &'static str,
    pub contact: &'static str,
    pub form_title: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub message: &'static str,
    pub send: &'static str,
    /// Contains a `{year}` placeholder; see [`LocaleBundle::footer_text`].
    pub footer: &'static str,
    pub privacy: &'static str,
    pub terms: &'static str,
    pub price_from: &'static str,
    pub currency_label: &'static str,
    pub lang_label: &'static str,
}

impl LocaleBundle {
    pub fn footer_text(&self, year: i32) -> String {
        self.footer.replace("{year}", &year.to_string())
    }
}

static KO: LocaleBundle = LocaleBundle {
    brand: "Mellylue — K‑Beauty Cabo Verde",
    tagline: "카보베르데에서 만나는 정품 K‑뷰티",
    subtag: "ERIS 기준을 준수한 공식 수입·유통. 피부 타입별로 정확히 추천하고, 합리적인 가격으로 제공합니다.",
    shop_now: "지금 문의하기",
    hero_note: "Mindelo/Praia 픽업 · 섬간 배송 · WhatsApp 상담 (포르투갈어/한국어/영어)",
    badges: BadgeLabels {
        bestseller: "베스트",
        new: "신상",
        clean: "클린",
    },
    section_products: "추천 제품",
    categories_label: "카테고리",
    categories: CategoryLabels {
        all: "전체",
        cleanser: "클렌저",
        toner: "토너",
        serum: "세럼",
        cream: "크림",
        sunscreen: "선크림",
        mask: "마스크",
    },
    no_products: "이 카테고리에는 아직 제품이 없습니다.",
    section_why: "왜 우리여야 하나요?",
    why_bullets: [
        "정품 보장 — 제조사/총판과 직계약, 위조품 Zero",
        "ERIS 등록 지원 — 성분·라벨·문서 패키지 준비",
        "합리적 가격 — CVE 기준 투명한 가격정책",
        "애프터케어 — 피부 반응/교환 문의 신속 처리",
    ],
    section_stores: "매장/픽업",
    mindelo: "민델루 (Mindelo)",
    praia: "프라이아 (Praia)",
    hours: "영업시간",
    contact: "연락하기",
    form_title: "도매/입점/협업 문의",
    name: "이름",
    email: "이메일",
    message: "메시지",
    send: "메일 보내기",
    footer: "© {year} Mellylue — K‑Beauty Cabo Verde. All rights reserved.",
    privacy: "개인정보 처리방침",
    terms: "이용약관",
    price_from: "부터",
    currency_label: "통화",
    lang_label: "언어",
};

static PT: LocaleBundle = LocaleBundle {
    brand: "Mellylue — K‑Beauty Cabo Verde",
    tagline: "Beleza coreana autêntica em Cabo Verde",
    subtag: "Importação e distribuição oficiais em conformidade com a ERIS. Recomendação precisa por tipo de pele, a preços justos.",
    shop_now: "Falar no WhatsApp",
    hero_note: "Pickup em Mindelo/Praia · Entrega inter‑ilhas · Suporte em PT/KO/EN",
    badges: BadgeLabels {
        bestseller: "Mais vendido",
        new: "Novidade",
        clean: "Clean",
    },
    section_products: "Produtos em destaque",
    categories_label: "Categorias",
    categories: CategoryLabels {
        all: "Todos",
        cleanser: "Limpeza",
        toner: "Tónicos",
        serum: "Séruns",
        cream: "Cremes",
        sunscreen: "Protetor solar",
        mask: "Máscaras",
    },
    no_products: "Ainda não há produtos nesta categoria.",
    section_why: "Porquê nós?",
    why_bullets: [
        "Autenticidade — contratos diretos, zero falsificações",
        "Conformidade ERIS — dossiês de ingredientes/rotulagem",
        "Preço justo — política transparente em CVE",
        "Pós‑venda — resposta rápida a trocas e reações",
    ],
    section_stores: "Lojas/Pontos de recolha",
    mindelo: "Mindelo",
    praia: "Praia",
    hours: "Horário",
    contact: "Contactos",
    form_title: "Atacado/Parcerias/Colaboração",
    name: "Nome",
    email: "Email",
    message: "Mensagem",
    send: "Enviar email",
    footer: "© {year} Mellylue — K‑Beauty Cabo Verde. Todos os direitos reservados.",
    privacy: "Política de Privacidade",
    terms: "Termos",
    price_from: "desde",
    currency_label: "Moeda",
    lang_label: "Idioma",
};

static EN: LocaleBundle = LocaleBundle {
    brand: "Mellylue — K‑Beauty Cabo Verde",
    tagline: "Authentic K‑Beauty in Cabo Verde",
    subtag: "Official importing & distribution compliant with ERIS. Skin‑type matched picks at fair prices.",
    shop_now: "Chat on WhatsApp",
    hero_note: "Mindelo/Praia pickup · Inter‑island delivery · Support in PT/KO/EN",
    badges: BadgeLabels {
        bestseller: "Bestseller",
        new: "New",
        clean: "Clean",
    },
    section_products: "Featured Products",
    categories_label: "Categories",
    categories: CategoryLabels {
        all: "All",
        cleanser: "Cleansers",
        toner: "Toners",
        serum: "Serums",
        cream: "Creams",
        sunscreen: "Sunscreen",
        mask: "Masks",
    },
    no_products: "No products in this category yet.",
    section_why: "Why us?",
    why_bullets: [
        "Genuine — direct with brands/distributors, zero fakes",
        "ERIS compliance — complete docs & labelling",
        "Fair pricing — transparent CVE pricing",
        "Aftercare — fast exchanges & skin reaction help",
    ],
    section_stores: "Stores/Pickup",
    mindelo: "Mindelo",
    praia: "Praia",
    hours: "Hours",
    contact: "Contact",
    form_title: "Wholesale/Stockist/Collab",
    name: "Name",
    email: "Email",
    message: "Message",
    send: "Send email",
    footer: "© {year} Mellylue — K‑Beauty Cabo Verde. All rights reserved.",
    privacy: "Privacy Policy",
    terms: "Terms",
    price_from: "from",
    currency_label: "Currency",
    lang_label: "Language",
};

/// The bundle for `locale`. Pure lookup, no fallback needed: every locale
/// has a complete bundle.
pub fn bundle(locale: Locale) -> &'static LocaleBundle {
    match locale {
        Locale::Ko => &KO,
        Locale::Pt => &PT,
        Locale::En => &EN,
    }
}

/// Flattened key paths of a bundle (`badges.new`, `why_bullets.2`, ...).
pub fn bundle_keys(bundle: &LocaleBundle) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    // Serializing a struct of strings cannot fail.
    if let Ok(value) = serde_json::to_value(bundle) {
        collect_keys(&value, String::new(), &mut keys);
    }
    keys
}

fn collect_keys(value: &Value, prefix: String, out: &mut BTreeSet<String>) {
    let join = |k: &str| {
        if prefix.is_empty() {
            k.to_string()
        } else {
            format!("{prefix}.{k}")
        }
    };
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                collect_keys(v, join(k), out);
            }
        }
        Value::Array(items) => {
            for (i, v) in items.iter().enumerate() {
                collect_keys(v, join(&i.to_string()), out);
            }
        }
        _ => {
            out.insert(prefix);
        }
    }
}

fn empty_keys(bundle: &LocaleBundle) -> Vec<String> {
    let Ok(value) = serde_json::to_value(bundle) else {
        return Vec::new();
    };
    let mut keys = BTreeSet::new();
    collect_keys(&value, String::new(), &mut keys);
    keys.into_iter()
        .filter(|k| {
            value
                .pointer(&format!("/{}", k.replace('.', "/")))
                .and_then(Value::as_str)
                .is_some_and(|s| s.trim().is_empty())
        })
        .collect()
}

/// Verify every bundle has exactly the keys of the `en` bundle and no empty
/// entries. Run once at startup.
pub fn check_key_parity() -> DomainResult<()> {
    let reference = bundle_keys(bundle(Locale::FALLBACK));
    for locale in Locale::ALL {
        let b = bundle(locale);
        let keys = bundle_keys(b);
        if let Some(missing) = reference.difference(&keys).next() {
            return Err(DomainError::invariant(format!(
                "bundle '{locale}' is missing key '{missing}'"
            )));
        }
        if let Some(extra) = keys.difference(&reference).next() {
            return Err(DomainError::invariant(format!(
                "bundle '{locale}' has key '{extra}' not present in 'en'"
            )));
        }
        if let Some(empty) = empty_keys(b).first() {
            return Err(DomainError::invariant(format!(
                "bundle '{locale}' has empty key '{empty}'"
            )));
        }
    }
    tracing::debug!(keys = reference.len(), "locale bundles complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_bundle_has_every_english_key() {
        let en = bundle_keys(bundle(Locale::En));
        assert!(en.contains("badges.bestseller"));
        assert!(en.contains("why_bullets.3"));
        assert!(en.contains("categories.sunscreen"));
        for locale in Locale::ALL {
            let keys = bundle_keys(bundle(locale));
            let missing: Vec<_> = en.difference(&keys).collect();
            assert!(missing.is_empty(), "{locale} missing {missing:?}");
        }
    }

    #[test]
    fn key_parity_check_passes() {
        check_key_parity().unwrap();
    }

    #[test]
    fn bundle_lookup_matches_locale() {
        assert_eq!(bundle(Locale::Pt).lang_label, "Idioma");
        assert_eq!(bundle(Locale::En).lang_label, "Language");
        assert_eq!(bundle(Locale::Ko).lang_label, "언어");
        assert_eq!(bundle(Locale::default()).section_why, "Porquê nós?");
    }

    #[test]
    fn footer_renders_year() {
        let text = bundle(Locale::Pt).footer_text(2026);
        assert_eq!(
            text,
            "© 2026 Mellylue — K‑Beauty Cabo Verde. Todos os direitos reservados."
        );
        assert!(!text.contains("{year}"));
    }

    #[test]
    fn empty_entries_are_detected() {
        let mut broken = bundle(Locale::En).clone();
        broken.badges.new = " ";
        assert_eq!(empty_keys(&broken), vec!["badges.new".to_string()]);
        assert!(empty_keys(bundle(Locale::Ko)).is_empty());
    }
}
