//! Contact channels, pickup stores and the mail-client contact form.
//!
//! None of these are serviced by the storefront: the form hands off to the
//! visitor's mail client and every link opens an external collaborator.

use serde::{Deserialize, Serialize};

use mellylue_i18n::LocaleBundle;

/// Fixed contact channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactInfo {
    pub mailbox: String,
    /// International number without `+`, as `wa.me` expects it.
    pub whatsapp: String,
    pub whatsapp_display: String,
    /// E.164 number for the dialer.
    pub phone: String,
    pub phone_display: String,
    pub instagram_url: String,
}

impl Default for ContactInfo {
    fn default() -> Self {
        Self {
            mailbox: "contact@kbeauty.cv".to_string(),
            whatsapp: "2380000000".to_string(),
            whatsapp_display: "+238 000 0000".to_string(),
            phone: "+2389000000".to_string(),
            phone_display: "+238 900 0000".to_string(),
            instagram_url: "#".to_string(),
        }
    }
}

impl ContactInfo {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.mailbox)
    }

    pub fn whatsapp_url(&self) -> String {
        format!("https://wa.me/{}", self.whatsapp)
    }

    pub fn tel_url(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

/// An outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// Opens in a new tab.
    pub external: bool,
}

impl Link {
    fn new(label: impl Into<String>, href: impl Into<String>, external: bool) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            external,
        }
    }
}

impl ContactInfo {
    /// The contact column, in display order.
    pub fn links(&self) -> Vec<Link> {
        vec![
            Link::new(
                format!("WhatsApp: {}", self.whatsapp_display),
                self.whatsapp_url(),
                true,
            ),
            Link::new(format!("Email: {}", self.mailbox), self.mailto(), false),
            Link::new(format!("Tel: {}", self.phone_display), self.tel_url(), false),
            Link::new("Instagram", self.instagram_url.clone(), true),
        ]
    }
}

/// Pickup location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreLocation {
    Mindelo,
    Praia,
}

/// A pickup store. Addresses and hours are not translated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Store {
    pub location: StoreLocation,
    pub address: &'static str,
    pub hours: &'static str,
    pub map_url: &'static str,
}

impl Store {
    pub fn label<'a>(&self, bundle: &'a LocaleBundle) -> &'a str {
        match self.location {
            StoreLocation::Mindelo => bundle.mindelo,
            StoreLocation::Praia => bundle.praia,
        }
    }
}

pub static STORES: [Store; 2] = [
    Store {
        location: StoreLocation::Mindelo,
        address: "Centro — Próximo do Centro Cultural do Mindelo",
        hours: "10:00–19:00 (Mon–Sat)",
        map_url: "#",
    },
    Store {
        location: StoreLocation::Praia,
        address: "Plateau — perto de Quebra Canela / Palmarejo",
        hours: "10:00–19:00 (Mon–Sat)",
        map_url: "#",
    },
];

/// Input kind of a contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: &'static str,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
}

/// The wholesale/collaboration form. Submission is a `mailto:` hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub title: String,
    pub action: String,
    pub method: &'static str,
    pub enctype: &'static str,
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

impl ContactForm {
    pub fn new(contact: &ContactInfo, bundle: &LocaleBundle) -> Self {
        Self {
            title: bundle.form_title.to_string(),
            action: contact.mailto(),
            method: "post",
            enctype: "text/plain",
            fields: vec![
                FormField {
                    name: "name",
                    label: bundle.name.to_string(),
                    kind: FieldKind::Text,
                    required: true,
                },
                FormField {
                    name: "email",
                    label: bundle.email.to_string(),
                    kind: FieldKind::Email,
                    required: true,
                },
                FormField {
                    name: "message",
                    label: bundle.message.to_string(),
                    kind: FieldKind::TextArea,
                    required: false,
                },
            ],
            submit_label: bundle.send.to_string(),
        }
    }
}
