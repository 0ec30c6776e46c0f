//! Language and connectivity settings.

use anyhow::Result;
use dialoguer::Select;
use relief_core::Locale;

use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    ctx.print_header("Settings");

    let (locale, connectivity) = {
        let store = ctx.store.read();
        (store.locale(), store.connectivity())
    };
    let toggle = if connectivity.is_offline() {
        "🌐 Go back online"
    } else {
        "📴 Go offline"
    };
    let actions = [
        format!("🗣  Language ({})", locale.native_name()),
        toggle.to_string(),
        "⬅️  Back".to_string(),
    ];

    let action = Select::with_theme(&ctx.theme())
        .with_prompt("Settings")
        .items(&actions)
        .default(0)
        .interact()?;

    match action {
        0 => {
            let names: Vec<&str> = Locale::ALL.iter().map(Locale::native_name).collect();
            let current = Locale::ALL.iter().position(|l| *l == locale).unwrap_or(0);
            let picked = Select::with_theme(&ctx.theme())
                .with_prompt("Language")
                .items(&names)
                .default(current)
                .interact()?;
            let chosen = Locale::ALL[picked];
            ctx.store.write().set_locale(chosen);
            tracing::info!(locale = %chosen, "interface language changed");
        }
        1 => {
            if ctx.manual_connectivity {
                ctx.simulate_connectivity(connectivity.toggled());
            } else {
                ctx.print_warning(
                    "Connectivity follows the network probe; start with --no-probe to toggle it by hand.",
                );
            }
        }
        _ => {}
    }
    Ok(())
}
