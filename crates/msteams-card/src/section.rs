//! Section — a visually distinct sub-region of a card.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::action::{OpenUriAction, SectionAction};

/// A name/value pair displayed in a section's fact table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Fact {
    pub name: String,
    pub value: String,
}

impl Fact {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// An image URL with a short description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Image {
    #[serde(rename = "image")]
    pub url: String,

    #[serde(default)]
    pub title: String,
}

impl Image {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// A section of a MessageCard.
///
/// The four activity fields form a logical group rendered alongside the
/// activity image, but each can be set on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Visually separate this section from the previous card elements.
    #[serde(default)]
    pub start_group: bool,

    #[serde(default)]
    pub activity_image: String,

    /// Serialized as `activitytitle` (lowercase `t`).
    #[serde(default, rename = "activitytitle")]
    pub activity_title: String,

    #[serde(default)]
    pub activity_subtitle: String,

    #[serde(default)]
    pub activity_text: String,

    #[serde(default)]
    pub hero_image: Image,

    #[serde(default)]
    pub text: String,

    #[serde(default)]
    pub facts: Vec<Fact>,

    /// Photo gallery.
    #[serde(default)]
    pub images: Vec<Image>,

    #[serde(default, rename = "potentialAction")]
    pub potential_actions: Vec<SectionAction>,

    #[serde(default)]
    pub markdown: bool,
}

impl Section {
    pub fn new(title: impl Into<String>, text: impl Into<String>, markdown: bool) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            markdown,
            ..Default::default()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn enable_start_group(&mut self) {
        self.start_group = true;
    }

    pub fn set_activity_image(&mut self, image_url: impl Into<String>) {
        self.activity_image = image_url.into();
    }

    pub fn set_activity_title(&mut self, activity_title: impl Into<String>) {
        self.activity_title = activity_title.into();
    }

    pub fn set_activity_subtitle(&mut self, activity_subtitle: impl Into<String>) {
        self.activity_subtitle = activity_subtitle.into();
    }

    pub fn set_activity_text(&mut self, activity_text: impl Into<String>) {
        self.activity_text = activity_text.into();
    }

    pub fn set_hero_image(&mut self, image_url: impl Into<String>, title: impl Into<String>) {
        self.hero_image = Image::new(image_url, title);
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn add_fact(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.facts.push(Fact::new(name, value));
    }

    pub fn add_image(&mut self, image_url: impl Into<String>, title: impl Into<String>) {
        self.images.push(Image::new(image_url, title));
    }

    pub fn add_action(&mut self, action: OpenUriAction) {
        self.potential_actions.push(action.into());
    }

    pub fn enable_markdown(&mut self) {
        self.markdown = true;
    }

    pub fn disable_markdown(&mut self) {
        self.markdown = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_empty_section_shape() {
        let value = serde_json::to_value(Section::default()).unwrap();
        assert_eq!(
            value,
            json!({
                "startGroup": false,
                "activityImage": "",
                "activitytitle": "",
                "activitySubtitle": "",
                "activityText": "",
                "heroImage": {"image": "", "title": ""},
                "text": "",
                "facts": [],
                "images": [],
                "potentialAction": [],
                "markdown": false
            })
        );
    }

    #[test]
    fn test_section_setters() {
        let mut section = Section::new("Build", "Pipeline finished", true);
        section.enable_start_group();
        section.set_activity_image("https://img/avatar.png");
        section.set_activity_title("CI");
        section.set_activity_subtitle("main");
        section.set_activity_text("green");
        section.set_hero_image("https://img/hero.png", "Hero");
        section.add_fact("Duration", "3m");
        section.add_fact("Commit", "abc123");
        section.add_image("https://img/1.png", "one");
        section.add_action(OpenUriAction::link("Logs", "https://ci/logs"));
        section.disable_markdown();

        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["title"], "Build");
        assert_eq!(value["startGroup"], true);
        assert_eq!(value["activitytitle"], "CI");
        assert!(value.get("activityTitle").is_none());
        assert_eq!(value["heroImage"], json!({"image": "https://img/hero.png", "title": "Hero"}));
        assert_eq!(
            value["facts"],
            json!([
                {"name": "Duration", "value": "3m"},
                {"name": "Commit", "value": "abc123"}
            ])
        );
        assert_eq!(value["images"][0]["image"], "https://img/1.png");
        assert_eq!(value["potentialAction"][0]["@type"], "OpenUri");
        assert_eq!(value["markdown"], false);
    }

    #[test]
    fn test_markdown_toggle() {
        let mut section = Section::default();
        section.enable_markdown();
        assert!(section.markdown);
        section.disable_markdown();
        assert!(!section.markdown);
    }
}
