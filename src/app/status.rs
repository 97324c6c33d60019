use super::session::Session;
use anyhow::Result;
use ncw_consent::Config;
use ncw_consent::consent::{ConsentState, Visibility, catalog, format_timestamp};
use ncw_consent::features::AnalyticsAction;
use ncw_consent::ui::style as ui;
use serde_json::json;

pub fn render_status(session: &Session, config: &Config) -> String {
    let state = session.store.state();
    let mut lines = vec![
        format!("◆ {}", ui::header("Consent status")),
        String::new(),
        format!("Version     {}", env!("CARGO_PKG_VERSION")),
        format!("Config      {}", config.config_path.display()),
        format!(
            "Storage     {} (key {})",
            config.storage.backend,
            ui::value(session.store.storage_key())
        ),
        String::new(),
        format!("  Decision    {}", describe_decision(state)),
        format!("  Surface     {}", describe_surface(state.visibility)),
        String::new(),
        format!("  {}", ui::header("Categories")),
    ];

    for info in catalog() {
        let enabled = state.is_category_enabled(info.category);
        let suffix = if info.required {
            ui::dim(" (required)")
        } else {
            String::new()
        };
        lines.push(format!(
            "   {:<12} {}{suffix}",
            info.id(),
            ui::toggle(enabled)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "  Analytics   {}",
        describe_analytics(session.last_analytics_action, session)
    ));
    lines.push(format!(
        "  Theme       {}",
        session
            .theme
            .current(&session.store)
            .map_or_else(|| ui::dim("(system default)"), |theme| theme.to_string())
    ));

    lines.join("\n")
}

pub fn render_status_json(session: &Session) -> Result<String> {
    let state = session.store.state();
    let value = json!({
        "storageKey": session.store.storage_key(),
        "state": state,
        "status": session.store.consent_status(),
        "analyticsLoaded": session.analytics.is_loaded(),
        "theme": session.theme.current(&session.store).map(|t| t.to_string()),
    });
    Ok(serde_json::to_string_pretty(&value)?)
}

pub fn describe_decision(state: &ConsentState) -> String {
    match (state.has_consented, state.consent_timestamp) {
        (true, Some(at)) => {
            let granted: Vec<_> = state
                .preferences
                .granted()
                .map(|category| category.as_str())
                .collect();
            format!(
                "{} on {} ({})",
                ui::success("recorded"),
                format_timestamp(at),
                granted.join(", ")
            )
        }
        (true, None) => ui::success("recorded"),
        (false, _) => ui::warning("undecided"),
    }
}

fn describe_surface(visibility: Visibility) -> String {
    match visibility {
        Visibility::None => ui::dim("none"),
        Visibility::Banner => ui::accent("banner"),
        Visibility::Editor => ui::accent("preferences editor"),
    }
}

pub fn describe_analytics(action: AnalyticsAction, session: &Session) -> String {
    match (action, session.analytics.active_script()) {
        (AnalyticsAction::Blocked(reason), _) => ui::dim(format!("blocked ({reason})")),
        (AnalyticsAction::Unloaded, _) => ui::warning("unloaded"),
        (_, Some(script)) => format!(
            "{} {} (ad_storage {})",
            ui::success("loaded"),
            ui::value(&script.measurement_id),
            script.ad_storage
        ),
        (_, None) => ui::dim("not loaded"),
    }
}
