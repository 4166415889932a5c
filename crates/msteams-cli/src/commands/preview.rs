//! `msteams preview` / `msteams schema` — inspect cards without sending.

use super::card::CardArgs;

pub fn preview(args: &CardArgs) -> anyhow::Result<()> {
    let card = args.build()?;
    println!("{}", card.to_json_pretty()?);
    Ok(())
}

pub fn schema() -> anyhow::Result<()> {
    let schema = msteams_card::message_card_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
