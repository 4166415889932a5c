//! # msteams-card
//!
//! Typed wire model for Office 365 connector MessageCards, the JSON
//! documents accepted by Microsoft Teams incoming webhooks.
//!
//! A card is built incrementally and serialized to the fixed schema the
//! webhook validates:
//!
//! - [`MessageCard`] — the root document (title, text, summary, theme color)
//! - [`Section`] — sub-regions holding facts, images and OpenUri actions
//! - [`PotentialAction`] — OpenUri, HttpPost, ActionCard, InvokeAddInCommand
//! - [`Input`] — text, date and multichoice inputs shown by an ActionCard
//!
//! ## Quick Start
//!
//! ```rust
//! use msteams_card::{ActionCardAction, HttpPostAction, MessageCard, TextInput};
//!
//! let mut card = MessageCard::new("Deploy finished", "Release 1.4 is live", "Deploy");
//! card.set_theme_color("2DC72D");
//!
//! let section = card.add_section("Details", "All checks passed", true);
//! section.add_fact("Version", "1.4.0");
//!
//! card.add_potential_action(
//!     ActionCardAction::new("Comment")
//!         .input(TextInput::new("comment", "Add a comment").multiline())
//!         .action(HttpPostAction::new("Save", "https://example.com/comment").with_body("{}")),
//! );
//!
//! let json = card.to_json().unwrap();
//! assert!(json.starts_with(r#"{"@type":"MessageCard""#));
//! ```

pub mod action;
pub mod card;
pub mod error;
pub mod input;
pub mod section;

// Re-export primary types
pub use action::{
    ActionCardAction, ActionType, BodyContentType, Header, HttpPostAction,
    InvokeAddInCommandAction, NestedAction, OpenUriAction, OsType, PotentialAction,
    SectionAction, UriTarget,
};
pub use card::{CardType, MessageCard, SchemaContext, MESSAGE_CARD_TYPE, SCHEMA_CONTEXT};
pub use error::{CardError, CardResult};
pub use input::{
    Choice, ChoiceStyle, DateInput, Input, InputType, MultichoiceInput, TextInput,
};
pub use section::{Fact, Image, Section};

/// JSON Schema describing the MessageCard wire format.
pub fn message_card_schema() -> schemars::schema::RootSchema {
    schemars::schema_for!(MessageCard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_describes_wire_keys() {
        let schema = serde_json::to_value(message_card_schema()).unwrap();
        let properties = &schema["properties"];

        assert!(properties.get("@type").is_some());
        assert!(properties.get("@context").is_some());
        assert!(properties.get("potentialAction").is_some());
        assert!(properties.get("themeColor").is_some());
    }
}
