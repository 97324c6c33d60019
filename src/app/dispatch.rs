use crate::{Cli, Commands};
use anyhow::Result;
use ncw_consent::Config;
use ncw_consent::consent::{ConsentCategory, ConsentPreferences, catalog};
use ncw_consent::features::{Theme, ThemePersistence};
use ncw_consent::ui::style as ui;
use std::process::ExitCode;

use super::prompt;
use super::session::Session;
use super::status::{describe_analytics, describe_decision, render_status, render_status_json};

pub fn dispatch(cli: Cli, config: &Config) -> Result<ExitCode> {
    let mut session = Session::open(config);

    match cli.command {
        Commands::Status { json } => {
            if json {
                println!("{}", render_status_json(&session)?);
            } else {
                println!("{}", render_status(&session, config));
            }
        }

        Commands::Accept => {
            session.store.accept_all();
            report_decision(&mut session);
        }

        Commands::Reject => {
            session.store.reject_all();
            report_decision(&mut session);
        }

        Commands::Save {
            analytics,
            marketing,
            preferences,
        } => {
            let draft = ConsentPreferences::from_entries([
                (ConsentCategory::Analytics, analytics),
                (ConsentCategory::Marketing, marketing),
                (ConsentCategory::Preferences, preferences),
            ]);
            session.store.save_custom_preferences(draft);
            report_decision(&mut session);
        }

        Commands::Check { category } => {
            let category: ConsentCategory = category.parse()?;
            let enabled = session.store.is_category_enabled(category);
            let verdict = if enabled {
                ui::success("enabled")
            } else {
                ui::warning("disabled")
            };
            println!("{category} {verdict}");
            if !enabled {
                return Ok(ExitCode::FAILURE);
            }
        }

        Commands::Categories => {
            for info in catalog() {
                let required = if info.required {
                    ui::dim(" (required)")
                } else {
                    String::new()
                };
                println!(
                    "  {} {}{required}",
                    ui::accent("◆"),
                    ui::header(info.name)
                );
                println!("    {}", ui::dim(info.description));
                println!("    {}", ui::dim(info.examples.join(", ")));
            }
        }

        Commands::Reset => {
            session.store.reset_consent();
            session.settle();
            println!(
                "  {} Stored consent removed. The banner will show on the next visit.",
                ui::success("✓")
            );
        }

        Commands::Prompt => {
            prompt::run(&mut session)?;
            report_decision(&mut session);
        }

        Commands::Theme { theme } => match theme {
            None => {
                let current = session.theme.current(&session.store);
                println!(
                    "{}",
                    current.map_or_else(|| ui::dim("(system default)"), |t| t.to_string())
                );
            }
            Some(raw) => {
                let theme: Theme = raw.parse()?;
                let outcome = session.theme.set(&session.store, theme);
                match outcome {
                    ThemePersistence::Persisted => {
                        println!("  {} Theme set to {}", ui::success("✓"), ui::value(theme));
                    }
                    ThemePersistence::SessionOnly => println!(
                        "  {} Theme set to {} for this session only {}",
                        ui::warning("!"),
                        ui::value(theme),
                        ui::dim("(preferences cookies are not allowed)")
                    ),
                }
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn report_decision(session: &mut Session) {
    let action = session.settle();
    println!(
        "  {} {}",
        ui::success("✓"),
        describe_decision(session.store.state())
    );
    println!("  Analytics   {}", describe_analytics(action, session));
}
