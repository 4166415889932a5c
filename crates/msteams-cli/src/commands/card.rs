//! Card flags shared by `msteams send` and `msteams preview`.

use anyhow::bail;
use clap::Args;
use msteams_card::{MessageCard, OpenUriAction};

#[derive(Args, Debug)]
pub struct CardArgs {
    /// Card title.
    #[arg(long, short, default_value = "")]
    pub title: String,

    /// Card text.
    #[arg(long, default_value = "")]
    pub text: String,

    /// Summary shown in notification lists (defaults to the title).
    #[arg(long, short)]
    pub summary: Option<String>,

    /// Theme color as hex, e.g. 2DC72D.
    #[arg(long, short = 'c', default_value = "")]
    pub theme_color: String,

    /// Add a section as TITLE=TEXT (repeatable).
    #[arg(long = "section", value_parser = parse_pair)]
    pub sections: Vec<(String, String)>,

    /// Add a fact as NAME=VALUE to the last section (repeatable).
    #[arg(long = "fact", value_parser = parse_pair)]
    pub facts: Vec<(String, String)>,

    /// Add an OpenUri action as NAME=URI (repeatable).
    #[arg(long = "open-uri", value_parser = parse_pair)]
    pub open_uris: Vec<(String, String)>,

    /// Render section text as markdown.
    #[arg(long)]
    pub markdown: bool,

    /// Hide the original message body (email only).
    #[arg(long)]
    pub hide_body: bool,
}

impl CardArgs {
    /// Assemble the card described by the flags.
    pub fn build(&self) -> anyhow::Result<MessageCard> {
        let summary = self
            .summary
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| self.title.clone());
        if summary.is_empty() && self.text.is_empty() {
            bail!("a card needs at least a --title, --summary or --text");
        }

        let mut card = MessageCard::new(&self.title, &self.text, summary);
        card.set_theme_color(&self.theme_color);
        if self.hide_body {
            card.hide_body();
        }

        for (title, text) in &self.sections {
            card.add_section(title, text, self.markdown);
        }
        if !self.facts.is_empty() {
            if card.sections.is_empty() {
                card.add_section("", "", self.markdown);
            }
            let last = card.sections.len() - 1;
            for (name, value) in &self.facts {
                card.sections[last].add_fact(name, value);
            }
        }

        for (name, uri) in &self.open_uris {
            card.add_potential_action(OpenUriAction::link(name, uri));
        }

        Ok(card)
    }
}

/// Parse `KEY=VALUE`, splitting on the first `=`.
fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        card: CardArgs,
    }

    fn parse(args: &[&str]) -> CardArgs {
        let mut argv = vec!["msteams"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap().card
    }

    #[test]
    fn test_build_full_card() {
        let args = parse(&[
            "--title", "Deploy",
            "--text", "Release is live",
            "--theme-color", "2DC72D",
            "--section", "Details=All green",
            "--fact", "Version=1.4.0",
            "--fact", "Region=eu-west",
            "--open-uri", "Dashboard=https://example.com/d?a=b",
            "--markdown",
        ]);
        let card = args.build().unwrap();

        assert_eq!(card.summary, "Deploy");
        assert_eq!(card.theme_color, "2DC72D");
        assert_eq!(card.sections.len(), 1);
        assert!(card.sections[0].markdown);
        assert_eq!(card.sections[0].facts.len(), 2);
        assert_eq!(card.potential_actions[0].name(), "Dashboard");

        let value = serde_json::to_value(&card).unwrap();
        assert_eq!(
            value["potentialAction"][0]["targets"][0]["uri"],
            "https://example.com/d?a=b"
        );
    }

    #[test]
    fn test_facts_without_section_create_one() {
        let card = parse(&["--summary", "s", "--fact", "a=b"]).build().unwrap();
        assert_eq!(card.sections.len(), 1);
        assert_eq!(card.sections[0].title, "");
        assert_eq!(card.sections[0].facts[0].value, "b");
    }

    #[test]
    fn test_empty_card_is_rejected() {
        assert!(parse(&[]).build().is_err());
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("url=https://x?a=1").unwrap(),
            ("url".to_string(), "https://x?a=1".to_string())
        );
        assert!(parse_pair("novalue").is_err());
    }
}
