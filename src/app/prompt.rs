use super::session::Session;
use super::status::describe_decision;
use anyhow::Result;
use dialoguer::{Confirm, MultiSelect, Select};
use ncw_consent::consent::{ConsentCategory, Visibility};
use ncw_consent::surfaces::{Banner, BannerAction, ConsentSurfaces};
use ncw_consent::ui::style as ui;

const EDITOR_ACTIONS: [&str; 4] = ["Save choices", "Accept all", "Reject all", "Close"];

/// Present whichever surface the store asks for until the visitor is done.
pub fn run(session: &mut Session) -> Result<()> {
    loop {
        match ConsentSurfaces::active(session.store.state()) {
            Visibility::Banner => show_banner(session)?,
            Visibility::Editor => show_editor(session)?,
            Visibility::None => {
                println!();
                println!(
                    "  {} {}",
                    ui::accent("◆"),
                    describe_decision(session.store.state())
                );
                let reopen = Confirm::new()
                    .with_prompt("  Change your cookie preferences?")
                    .default(false)
                    .interact()?;
                if !reopen {
                    return Ok(());
                }
                session.store.show_preferences_panel();
            }
        }
        let action = session.settle();
        tracing::debug!(?action, "analytics after prompt step");
    }
}

fn show_banner(session: &mut Session) -> Result<()> {
    println!();
    println!("  {} {}", ui::accent("◆"), ui::header(Banner::TITLE));
    println!("  {}", ui::dim(Banner::MESSAGE));
    println!();

    let labels: Vec<_> = BannerAction::ALL.iter().map(|a| a.label()).collect();
    let choice = Select::new()
        .with_prompt("  Your choice")
        .items(&labels)
        .default(0)
        .interact()?;
    let action = BannerAction::ALL[choice];
    let state = Banner::handle(&mut session.store, action);

    if action == BannerAction::Dismiss && !state.has_consented {
        println!(
            "  {}",
            ui::dim("Nothing saved. You will be asked again next time.")
        );
    }
    Ok(())
}

fn show_editor(session: &mut Session) -> Result<()> {
    let editor = &mut session.surfaces.editor;
    println!();
    println!("  {} {}", ui::accent("◆"), ui::header("Cookie preferences"));
    for row in editor.rows() {
        let lock = if row.locked { " (always on)" } else { "" };
        println!(
            "  {} {}{}",
            ui::toggle(row.enabled),
            ui::header(row.info.name),
            ui::dim(lock)
        );
        println!("      {}", ui::dim(row.info.description));
    }
    println!();

    let labels: Vec<_> = ConsentCategory::OPTIONAL
        .iter()
        .map(|category| category.as_str())
        .collect();
    let defaults: Vec<_> = ConsentCategory::OPTIONAL
        .iter()
        .map(|category| editor.draft().get(*category))
        .collect();
    let picked = MultiSelect::new()
        .with_prompt("  Allowed categories (space to toggle)")
        .items(&labels)
        .defaults(&defaults)
        .interact()?;
    for (index, category) in ConsentCategory::OPTIONAL.iter().enumerate() {
        editor.set(*category, picked.contains(&index));
    }

    let choice = Select::new()
        .with_prompt("  Then")
        .items(&EDITOR_ACTIONS)
        .default(0)
        .interact()?;
    let store = &mut session.store;
    match choice {
        0 => editor.save(store),
        1 => editor.accept_all(store),
        2 => editor.reject_all(store),
        _ => editor.close(store),
    };
    Ok(())
}
