//! Interactive menu and the prompts shared by the form commands.

pub mod dashboard;
pub mod report;
pub mod settings;
pub mod support;
pub mod volunteer;

use anyhow::Result;
use colored::Colorize;
use console::Term;
use dialoguer::{Input, MultiSelect, Select};
use relief_core::ValidationErrors;

use crate::context::AppContext;

pub fn run(mut ctx: AppContext) -> Result<()> {
    let term = Term::stdout();
    print_banner(&term)?;

    loop {
        ctx.flush_notifications();
        println!();
        ctx.print_offline_banner();

        let options = [
            "🆘 Report a case",
            "📋 Dashboard",
            "🤝 Volunteers",
            "🏠 Long-term support",
            "⚙️  Settings",
            "🛑 Exit",
        ];

        let selection = Select::with_theme(&ctx.theme())
            .with_prompt("What would you like to do?")
            .items(&options)
            .default(0)
            .interact_on(&term)?;

        match selection {
            0 => report::run(&ctx)?,
            1 => dashboard::run(&mut ctx)?,
            2 => volunteer::run(&mut ctx)?,
            3 => support::run(&mut ctx)?,
            4 => settings::run(&ctx)?,
            5 => {
                println!("{}", "👋 Stay safe.".bright_blue());
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn print_banner(term: &Term) -> Result<()> {
    term.clear_screen()?;
    println!("{}", "╔════════════════════════════════════════╗".bright_cyan());
    println!("{}", "║        Relief Coordination Desk        ║".bright_cyan());
    println!("{}", "╚════════════════════════════════════════╝".bright_cyan());
    Ok(())
}

/// Free-text prompt pre-filled with the previous answer.
pub(crate) fn text(ctx: &AppContext, prompt: &str, previous: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ctx.theme())
        .with_prompt(prompt)
        .with_initial_text(previous)
        .allow_empty(true)
        .interact_text()?)
}

/// Pick from `(value, label)` options and optionally add comma-separated
/// free-form tags. Returns values, not labels.
pub(crate) fn tags(
    ctx: &AppContext,
    prompt: &str,
    options: &[(&str, &str)],
    previous: &[String],
) -> Result<Vec<String>> {
    let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
    let defaults: Vec<bool> = options
        .iter()
        .map(|(value, _)| previous.iter().any(|p| p == value))
        .collect();
    let picked = MultiSelect::with_theme(&ctx.theme())
        .with_prompt(format!("{prompt} (space to toggle, enter to confirm)"))
        .items(&labels)
        .defaults(&defaults)
        .interact()?;

    let mut chosen: Vec<String> = picked
        .into_iter()
        .map(|i| options[i].0.to_string())
        .collect();
    let previous_extra: Vec<&str> = previous
        .iter()
        .map(String::as_str)
        .filter(|p| !options.iter().any(|(value, _)| value == p))
        .collect();
    let extra = text(ctx, "Other (comma separated, optional)", &previous_extra.join(", "))?;
    chosen.extend(extra.split(',').map(str::to_string));
    Ok(chosen)
}

pub(crate) fn print_validation(ctx: &AppContext, errors: &ValidationErrors) {
    ctx.print_warning("Please fix the following:");
    for error in errors.errors() {
        println!("  {} {}", "•".yellow(), error.message);
    }
}
