//! Inputs — data-entry controls shown by an ActionCard action.
//!
//! Every input carries an `id` that HttpPost actions can reference in
//! their target URL or body with `{{id.value}}` substitution.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The `@type` tag of an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum InputType {
    TextInput,
    DateInput,
    MultichoiceInput,
}

impl std::fmt::Display for InputType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputType::TextInput => write!(f, "TextInput"),
            InputType::DateInput => write!(f, "DateInput"),
            InputType::MultichoiceInput => write!(f, "MultichoiceInput"),
        }
    }
}

/// An input attached to an ActionCard action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "@type")]
pub enum Input {
    TextInput(TextInput),
    DateInput(DateInput),
    MultichoiceInput(MultichoiceInput),
}

impl Input {
    /// The `@type` tag this input serializes with.
    pub fn input_type(&self) -> InputType {
        match self {
            Input::TextInput(_) => InputType::TextInput,
            Input::DateInput(_) => InputType::DateInput,
            Input::MultichoiceInput(_) => InputType::MultichoiceInput,
        }
    }

    /// The input's id.
    pub fn id(&self) -> &str {
        match self {
            Input::TextInput(i) => &i.id,
            Input::DateInput(i) => &i.id,
            Input::MultichoiceInput(i) => &i.id,
        }
    }
}

impl From<TextInput> for Input {
    fn from(input: TextInput) -> Self {
        Input::TextInput(input)
    }
}

impl From<DateInput> for Input {
    fn from(input: DateInput) -> Self {
        Input::DateInput(input)
    }
}

impl From<MultichoiceInput> for Input {
    fn from(input: MultichoiceInput) -> Self {
        Input::MultichoiceInput(input)
    }
}

/// A free-text input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TextInput {
    /// Uniquely identifies the input for value substitution.
    pub id: String,

    /// Whether a value must be entered before an action can use it.
    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub title: String,

    /// Initial value.
    #[serde(default)]
    pub value: String,

    /// Accept multiple lines of text.
    #[serde(default)]
    pub is_multiline: bool,

    /// Maximum number of characters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
}

impl TextInput {
    /// Create a required single-line text input.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            is_required: true,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Allow the input to be left empty.
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn multiline(mut self) -> Self {
        self.is_multiline = true;
        self
    }

    pub fn with_max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// A date (and optionally time) picker.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DateInput {
    pub id: String,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub value: String,

    /// Allow selecting a time in addition to the date.
    #[serde(default)]
    pub include_time: bool,
}

impl DateInput {
    /// Create an optional date input.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_time(mut self) -> Self {
        self.include_time = true;
        self
    }
}

/// How a single-select multichoice input is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ChoiceStyle {
    /// Compact rendering, typically a dropdown.
    #[default]
    Normal,
    /// Show every choice on screen, typically as radio buttons.
    Expanded,
}

/// One selectable value of a multichoice input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Choice {
    pub display: String,
    pub value: String,
}

impl Choice {
    pub fn new(display: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display: display.into(),
            value: value.into(),
        }
    }
}

/// A list of choices, rendered as a dropdown, radio buttons or checkboxes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MultichoiceInput {
    pub id: String,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub title: String,

    /// Initial value; must equal the value of one of the choices.
    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub choices: Vec<Choice>,

    /// Render choices as checkboxes and allow several to be selected.
    #[serde(default)]
    pub is_multi_select: bool,

    /// Only honoured when `is_multi_select` is false.
    #[serde(default)]
    pub style: ChoiceStyle,
}

impl MultichoiceInput {
    /// Create an optional single-select input with no choices.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Append a choice.
    pub fn choice(mut self, display: impl Into<String>, value: impl Into<String>) -> Self {
        self.choices.push(Choice::new(display, value));
        self
    }

    pub fn multi_select(mut self) -> Self {
        self.is_multi_select = true;
        self
    }

    pub fn with_style(mut self, style: ChoiceStyle) -> Self {
        self.style = style;
        self
    }
}
