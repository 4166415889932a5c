//! Actions — interactive operations a recipient can trigger from a card.
//!
//! Four action kinds exist, each serialized as a JSON object tagged with
//! `@type`:
//!
//! - `OpenUri` opens a link in a browser or app.
//! - `HttpPost` calls an external web service.
//! - `ActionCard` shows additional inputs together with OpenUri / HttpPost
//!   actions that consume them.
//! - `InvokeAddInCommand` opens an Outlook add-in task pane.
//!
//! An ActionCard cannot contain another ActionCard, so its nested actions
//! use the narrower [`NestedAction`] union. Sections only accept OpenUri
//! actions and use [`SectionAction`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::input::Input;

/// The `@type` tag of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ActionType {
    OpenUri,
    HttpPost,
    ActionCard,
    InvokeAddInCommand,
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionType::OpenUri => write!(f, "OpenUri"),
            ActionType::HttpPost => write!(f, "HttpPost"),
            ActionType::ActionCard => write!(f, "ActionCard"),
            ActionType::InvokeAddInCommand => write!(f, "InvokeAddInCommand"),
        }
    }
}

// ── Action unions ────────────────────────────────────────────

/// An action attached to the card's `potentialAction` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "@type")]
pub enum PotentialAction {
    OpenUri(OpenUriAction),
    HttpPost(HttpPostAction),
    ActionCard(ActionCardAction),
    InvokeAddInCommand(InvokeAddInCommandAction),
}

impl PotentialAction {
    /// The `@type` tag this action serializes with.
    pub fn action_type(&self) -> ActionType {
        match self {
            PotentialAction::OpenUri(_) => ActionType::OpenUri,
            PotentialAction::HttpPost(_) => ActionType::HttpPost,
            PotentialAction::ActionCard(_) => ActionType::ActionCard,
            PotentialAction::InvokeAddInCommand(_) => ActionType::InvokeAddInCommand,
        }
    }

    /// The text displayed on screen for the action.
    pub fn name(&self) -> &str {
        match self {
            PotentialAction::OpenUri(a) => &a.name,
            PotentialAction::HttpPost(a) => &a.name,
            PotentialAction::ActionCard(a) => &a.name,
            PotentialAction::InvokeAddInCommand(a) => &a.name,
        }
    }
}

impl From<OpenUriAction> for PotentialAction {
    fn from(action: OpenUriAction) -> Self {
        PotentialAction::OpenUri(action)
    }
}

impl From<HttpPostAction> for PotentialAction {
    fn from(action: HttpPostAction) -> Self {
        PotentialAction::HttpPost(action)
    }
}

impl From<ActionCardAction> for PotentialAction {
    fn from(action: ActionCardAction) -> Self {
        PotentialAction::ActionCard(action)
    }
}

impl From<InvokeAddInCommandAction> for PotentialAction {
    fn from(action: InvokeAddInCommandAction) -> Self {
        PotentialAction::InvokeAddInCommand(action)
    }
}

impl From<NestedAction> for PotentialAction {
    fn from(action: NestedAction) -> Self {
        match action {
            NestedAction::OpenUri(a) => PotentialAction::OpenUri(a),
            NestedAction::HttpPost(a) => PotentialAction::HttpPost(a),
        }
    }
}

/// An action nested inside an ActionCard: OpenUri or HttpPost only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "@type")]
pub enum NestedAction {
    OpenUri(OpenUriAction),
    HttpPost(HttpPostAction),
}

impl NestedAction {
    pub fn action_type(&self) -> ActionType {
        match self {
            NestedAction::OpenUri(_) => ActionType::OpenUri,
            NestedAction::HttpPost(_) => ActionType::HttpPost,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            NestedAction::OpenUri(a) => &a.name,
            NestedAction::HttpPost(a) => &a.name,
        }
    }
}

impl From<OpenUriAction> for NestedAction {
    fn from(action: OpenUriAction) -> Self {
        NestedAction::OpenUri(action)
    }
}

impl From<HttpPostAction> for NestedAction {
    fn from(action: HttpPostAction) -> Self {
        NestedAction::HttpPost(action)
    }
}

/// An action attached to a section: OpenUri only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "@type")]
pub enum SectionAction {
    OpenUri(OpenUriAction),
}

impl SectionAction {
    pub fn name(&self) -> &str {
        match self {
            SectionAction::OpenUri(a) => &a.name,
        }
    }
}

impl From<OpenUriAction> for SectionAction {
    fn from(action: OpenUriAction) -> Self {
        SectionAction::OpenUri(action)
    }
}

// ── OpenUri ──────────────────────────────────────────────────

/// Operating system a URI target applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum OsType {
    /// Usually opens the URI in a web browser regardless of the actual OS.
    #[default]
    #[serde(rename = "default")]
    Default,
    #[serde(rename = "windows")]
    Windows,
    #[serde(rename = "iOS")]
    Ios,
    #[serde(rename = "android")]
    Android,
}

/// A URI to open on a given operating system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UriTarget {
    pub os: OsType,
    pub uri: String,
}

impl UriTarget {
    pub fn new(os: OsType, uri: impl Into<String>) -> Self {
        Self { os, uri: uri.into() }
    }

    /// A target for the `default` operating system.
    pub fn any(uri: impl Into<String>) -> Self {
        Self::new(OsType::Default, uri)
    }
}

/// Opens a URI in a separate browser or app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OpenUriAction {
    pub name: String,

    #[serde(default)]
    pub targets: Vec<UriTarget>,
}

impl OpenUriAction {
    pub fn new(name: impl Into<String>, targets: Vec<UriTarget>) -> Self {
        Self {
            name: name.into(),
            targets,
        }
    }

    /// An action with a single `default` target.
    pub fn link(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self::new(name, vec![UriTarget::any(uri)])
    }

    /// Append a target.
    pub fn target(mut self, os: OsType, uri: impl Into<String>) -> Self {
        self.targets.push(UriTarget::new(os, uri));
        self
    }
}

// ── HttpPost ─────────────────────────────────────────────────

/// MIME type of an HttpPost body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum BodyContentType {
    #[default]
    #[serde(rename = "application/json")]
    Json,
    #[serde(rename = "application/x-www-form-urlencoded")]
    FormUrlEncoded,
}

impl BodyContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            BodyContentType::Json => "application/json",
            BodyContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

impl std::fmt::Display for BodyContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP header emitted with an HttpPost request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Makes a call to an external web service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HttpPostAction {
    pub name: String,

    /// URL endpoint of the service that implements the action.
    pub target: String,

    #[serde(default)]
    pub headers: Vec<Header>,

    /// Body of the POST request, sent verbatim.
    #[serde(default)]
    pub body: String,

    /// Omitted when unset; the receiver then assumes `application/json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_content_type: Option<BodyContentType>,
}

impl HttpPostAction {
    pub fn new(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            target: target.into(),
            headers: Vec::new(),
            body: String::new(),
            body_content_type: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Append a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    pub fn with_body_content_type(mut self, content_type: BodyContentType) -> Self {
        self.body_content_type = Some(content_type);
        self
    }

    /// The content type the receiver will use for the body.
    pub fn effective_body_content_type(&self) -> BodyContentType {
        self.body_content_type.unwrap_or_default()
    }
}

// ── ActionCard ───────────────────────────────────────────────

/// Presents additional UI with inputs and the actions that consume them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ActionCardAction {
    pub name: String,

    #[serde(default)]
    pub inputs: Vec<Input>,

    #[serde(default)]
    pub actions: Vec<NestedAction>,
}

impl ActionCardAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            inputs: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Append an input.
    pub fn input(mut self, input: impl Into<Input>) -> Self {
        self.inputs.push(input.into());
        self
    }

    /// Append a nested OpenUri or HttpPost action.
    pub fn action(mut self, action: impl Into<NestedAction>) -> Self {
        self.actions.push(action.into());
        self
    }
}

// ── InvokeAddInCommand ───────────────────────────────────────

/// Opens an Outlook add-in task pane, prompting to install it if needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvokeAddInCommandAction {
    pub name: String,

    /// Id element of the add-in's manifest.
    pub add_in_id: Uuid,

    /// Id of the button control that opens the task pane.
    pub desktop_command_id: String,

    /// Arbitrary JSON handed to the add-in when the action runs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initialization_context: Option<serde_json::Value>,
}

impl InvokeAddInCommandAction {
    pub fn new(
        name: impl Into<String>,
        add_in_id: Uuid,
        desktop_command_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            add_in_id,
            desktop_command_id: desktop_command_id.into(),
            initialization_context: None,
        }
    }

    pub fn with_initialization_context(mut self, context: serde_json::Value) -> Self {
        self.initialization_context = Some(context);
        self
    }
}
