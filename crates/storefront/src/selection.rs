//! Transient UI selection state and its transitions.

use serde::{Deserialize, Serialize};

use mellylue_catalog::CategoryFilter;
use mellylue_core::{Reducer, ValueObject};
use mellylue_i18n::Locale;
use mellylue_pricing::Currency;

/// Category popover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        *self == MenuState::Open
    }

    pub fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }
}

/// Everything the visitor has picked this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    pub locale: Locale,
    pub currency: Currency,
    pub active_category: CategoryFilter,
    pub menu: MenuState,
}

impl ValueObject for Selection {}

impl Selection {
    pub fn new(locale: Locale, currency: Currency, active_category: CategoryFilter) -> Self {
        Self {
            locale,
            currency,
            active_category,
            menu: MenuState::Closed,
        }
    }
}

/// A discrete user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum SelectionAction {
    SetLocale(Locale),
    SetCurrency(Currency),
    ToggleMenu,
    OpenMenu,
    CloseMenu,
    /// Pick a category from the popover: sets the filter and closes the menu.
    SelectCategory(CategoryFilter),
}

impl Reducer for Selection {
    type Action = SelectionAction;

    fn apply(&mut self, action: &SelectionAction) {
        match *action {
            SelectionAction::SetLocale(locale) => self.locale = locale,
            SelectionAction::SetCurrency(currency) => self.currency = currency,
            SelectionAction::ToggleMenu => self.menu = self.menu.toggled(),
            SelectionAction::OpenMenu => self.menu = MenuState::Open,
            SelectionAction::CloseMenu => self.menu = MenuState::Closed,
            SelectionAction::SelectCategory(filter) => {
                self.active_category = filter;
                self.menu = MenuState::Closed;
            }
        }
        tracing::trace!(?action, selection = ?self, "selection updated");
    }
}
