use anyhow::Result;
use diary_core::Diary;
use diary_core::diary_config::DiaryConfig;
use owo_colors::OwoColorize;

pub fn run(diary: &Diary) -> Result<()> {
    let config_path = DiaryConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:   {}", config_path.display());
    println!("  Entries:  {}", diary.data_path().display());
    if diary.display_path() != diary.data_path() {
        println!("            {}", diary.display_path().display().dimmed());
    }

    Ok(())
}
