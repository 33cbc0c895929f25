use anyhow::Result;
use chrono::NaiveDate;
use diary_core::{NoteStore, display_date};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(store: &NoteStore, date: NaiveDate) -> Result<()> {
    let entry = store.entry(date)?;

    if entry.is_empty() {
        println!(
            "{}",
            format!("No entry for {} yet.", display_date(date)).dimmed()
        );
        return Ok(());
    }

    println!("{}", entry.render());
    println!();
    println!("{}", entry.content.trim_end());

    Ok(())
}
