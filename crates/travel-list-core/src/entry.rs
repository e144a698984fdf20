//! Entry Form Draft
//!
//! Local input state of the add-item form. The UI binds DOM events to this
//! type; `submit` only hands out input the store will accept.

use crate::error::{ValidationError, ValidationResult};

/// Select value used for the free-form quantity option
pub const CUSTOM_OPTION: &str = "custom";

/// Which quantity option is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChoice {
    Preset(u32),
    Custom,
}

impl QuantityChoice {
    /// Value of the `<option>` this choice corresponds to
    pub fn option_value(&self) -> String {
        match self {
            QuantityChoice::Preset(n) => n.to_string(),
            QuantityChoice::Custom => CUSTOM_OPTION.to_string(),
        }
    }
}

/// Validated add-item input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub description: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    presets: Vec<u32>,
    description: String,
    choice: QuantityChoice,
    custom_quantity: String,
}

impl EntryDraft {
    /// Empty draft with the first preset selected. Presets should be
    /// non-empty; 1 is used otherwise.
    pub fn new(presets: &[u32]) -> Self {
        let presets: Vec<u32> = presets.iter().copied().filter(|n| *n > 0).collect();
        let presets = if presets.is_empty() { vec![1] } else { presets };
        Self {
            choice: QuantityChoice::Preset(presets[0]),
            presets,
            description: String::new(),
            custom_quantity: String::new(),
        }
    }

    pub fn presets(&self) -> &[u32] {
        &self.presets
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn choice(&self) -> QuantityChoice {
        self.choice
    }

    pub fn custom_quantity(&self) -> &str {
        &self.custom_quantity
    }

    pub fn is_custom(&self) -> bool {
        self.choice == QuantityChoice::Custom
    }

    pub fn set_description(&mut self, text: impl Into<String>) {
        self.description = text.into();
    }

    /// Apply a quantity `<select>` value. Choosing custom clears the custom
    /// field; unknown values are ignored.
    pub fn select_quantity(&mut self, value: &str) {
        if value == CUSTOM_OPTION {
            self.choice = QuantityChoice::Custom;
            self.custom_quantity.clear();
            return;
        }
        match value.parse::<u32>() {
            Ok(n) if self.presets.contains(&n) => self.choice = QuantityChoice::Preset(n),
            _ => tracing::debug!(value, "ignoring unknown quantity option"),
        }
    }

    pub fn set_custom_quantity(&mut self, text: impl Into<String>) {
        self.custom_quantity = text.into();
    }

    /// Quantity the current choice resolves to
    pub fn quantity(&self) -> ValidationResult<u32> {
        match self.choice {
            QuantityChoice::Preset(n) => Ok(n),
            QuantityChoice::Custom => parse_quantity(&self.custom_quantity),
        }
    }

    pub fn validate(&self) -> ValidationResult<NewItem> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(NewItem {
            description: description.to_string(),
            quantity: self.quantity()?,
        })
    }

    /// Validate and, on success, reset the draft for the next entry.
    /// On failure the draft is left as typed.
    pub fn submit(&mut self) -> ValidationResult<NewItem> {
        let item = self.validate()?;
        self.reset();
        Ok(item)
    }

    pub fn reset(&mut self) {
        self.description.clear();
        self.custom_quantity.clear();
        self.choice = QuantityChoice::Preset(self.presets[0]);
    }
}

/// Parse a custom quantity: a whole number >= 1
pub fn parse_quantity(text: &str) -> ValidationResult<u32> {
    let text = text.trim();
    match text.parse::<i64>() {
        Ok(n) if n <= 0 => Err(ValidationError::NonPositiveQuantity),
        Ok(n) => u32::try_from(n).map_err(|_| ValidationError::InvalidQuantity(text.to_string())),
        Err(_) => Err(ValidationError::InvalidQuantity(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EntryDraft {
        EntryDraft::new(&[1, 2, 3])
    }

    #[test]
    fn test_defaults_to_first_preset() {
        let d = draft();
        assert_eq!(d.choice(), QuantityChoice::Preset(1));
        assert_eq!(d.quantity(), Ok(1));
        assert!(!d.is_custom());
    }

    #[test]
    fn test_empty_presets_fall_back_to_one() {
        let d = EntryDraft::new(&[0]);
        assert_eq!(d.presets(), &[1]);
    }

    #[test]
    fn test_submit_resets_draft() {
        let mut d = draft();
        d.set_description("Socks");
        d.select_quantity("2");

        let item = d.submit().expect("valid draft");
        assert_eq!(item, NewItem { description: "Socks".into(), quantity: 2 });
        assert_eq!(d, draft());
    }

    #[test]
    fn test_empty_description_blocks_submit() {
        let mut d = draft();
        d.set_description("   ");
        d.select_quantity("3");

        assert_eq!(d.submit(), Err(ValidationError::EmptyDescription));
        // Input is kept for correction
        assert_eq!(d.choice(), QuantityChoice::Preset(3));
    }

    #[test]
    fn test_custom_quantity() {
        let mut d = draft();
        d.set_description("Hat");
        d.select_quantity(CUSTOM_OPTION);
        assert!(d.is_custom());
        assert_eq!(d.custom_quantity(), "");

        d.set_custom_quantity("12");
        assert_eq!(d.validate().map(|i| i.quantity), Ok(12));
    }

    #[test]
    fn test_custom_quantity_rejections() {
        assert_eq!(parse_quantity(""), Err(ValidationError::InvalidQuantity(String::new())));
        assert_eq!(parse_quantity("0"), Err(ValidationError::NonPositiveQuantity));
        assert_eq!(parse_quantity("-4"), Err(ValidationError::NonPositiveQuantity));
        assert_eq!(parse_quantity("2.5"), Err(ValidationError::InvalidQuantity("2.5".into())));
        assert_eq!(parse_quantity("abc"), Err(ValidationError::InvalidQuantity("abc".into())));
        assert_eq!(parse_quantity(" 7 "), Ok(7));
    }

    #[test]
    fn test_unknown_option_is_ignored() {
        let mut d = draft();
        d.select_quantity("9");
        assert_eq!(d.choice(), QuantityChoice::Preset(1));
    }
}
