//! MessageCard — the root document posted to a connector webhook.

use std::fmt;

use schemars::JsonSchema;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::action::{OpenUriAction, PotentialAction, UriTarget};
use crate::error::CardResult;
use crate::section::Section;

/// Value of the card's `@type` key.
pub const MESSAGE_CARD_TYPE: &str = "MessageCard";

/// Value of the card's `@context` key.
pub const SCHEMA_CONTEXT: &str = "http://schema.org/extensions";

/// The `@type` tag of a card. Always serializes to [`MESSAGE_CARD_TYPE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardType;

/// The `@context` tag of a card. Always serializes to [`SCHEMA_CONTEXT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaContext;

/// Accepts exactly one string value.
struct ConstantVisitor(&'static str);

impl Visitor<'_> for ConstantVisitor {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "the string {:?}", self.0)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<(), E> {
        if value == self.0 {
            Ok(())
        } else {
            Err(E::invalid_value(de::Unexpected::Str(value), &self))
        }
    }
}

impl Serialize for CardType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(MESSAGE_CARD_TYPE)
    }
}

impl<'de> Deserialize<'de> for CardType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ConstantVisitor(MESSAGE_CARD_TYPE))?;
        Ok(CardType)
    }
}

impl Serialize for SchemaContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(SCHEMA_CONTEXT)
    }
}

impl<'de> Deserialize<'de> for SchemaContext {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(ConstantVisitor(SCHEMA_CONTEXT))?;
        Ok(SchemaContext)
    }
}

/// A connector MessageCard.
///
/// Fields are public and can be set directly; the methods below mirror the
/// incremental builder calls callers typically make. Only `summary` is
/// required by the receiver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageCard {
    #[serde(rename = "@type", default)]
    #[schemars(with = "String")]
    pub card_type: CardType,

    #[serde(rename = "@context", default)]
    #[schemars(with = "String")]
    pub context: SchemaContext,

    /// Rendered prominently at the very top of the card.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Rendered in a normal font below the title.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Shown in list views (e.g. Outlook) to describe the card at a glance.
    #[serde(default)]
    pub summary: String,

    /// Identifier for locating logs of an actionable card.
    #[serde(default)]
    pub correlation_id: i64,

    /// Email addresses expected to invoke the card's actions.
    #[serde(default)]
    pub expected_actors: Vec<String>,

    /// Provider id; required for actionable email, ignored by connectors.
    #[serde(default)]
    pub originator: String,

    /// Brand color as a hex string, e.g. `0076D7`.
    #[serde(default)]
    pub theme_color: String,

    /// Email only: hide the HTML body of the message.
    #[serde(default)]
    pub hide_original_body: bool,

    #[serde(default)]
    pub sections: Vec<Section>,

    #[serde(default, rename = "potentialAction")]
    pub potential_actions: Vec<PotentialAction>,
}

impl MessageCard {
    /// Create a card with the given title, text and summary.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    /// Decode a card from its JSON wire form.
    pub fn from_json(json: &str) -> CardResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a card from YAML using the same keys as the JSON wire form.
    pub fn from_yaml(yaml: &str) -> CardResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Encode the card to its JSON wire form.
    pub fn to_json(&self) -> CardResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> CardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }

    /// Set the theme color. An empty string keeps the current color.
    pub fn set_theme_color(&mut self, hex: impl Into<String>) {
        let hex = hex.into();
        if !hex.is_empty() {
            self.theme_color = hex;
        }
    }

    pub fn hide_body(&mut self) {
        self.hide_original_body = true;
    }

    pub fn unhide_body(&mut self) {
        self.hide_original_body = false;
    }

    pub fn set_correlation_id(&mut self, correlation_id: i64) {
        self.correlation_id = correlation_id;
    }

    pub fn set_originator(&mut self, originator: impl Into<String>) {
        self.originator = originator.into();
    }

    pub fn add_expected_actor(&mut self, address: impl Into<String>) {
        self.expected_actors.push(address.into());
    }

    /// Append a section and return it for further mutation.
    pub fn add_section(
        &mut self,
        title: impl Into<String>,
        text: impl Into<String>,
        markdown: bool,
    ) -> &mut Section {
        self.sections.push(Section::new(title, text, markdown));
        let last = self.sections.len() - 1;
        &mut self.sections[last]
    }

    /// Append an action to the card's `potentialAction` list.
    pub fn add_potential_action(&mut self, action: impl Into<PotentialAction>) {
        self.potential_actions.push(action.into());
    }

    /// Append an OpenUri action with the given targets.
    pub fn create_open_uri_action(&mut self, name: impl Into<String>, targets: Vec<UriTarget>) {
        self.add_potential_action(OpenUriAction::new(name, targets));
    }
}
