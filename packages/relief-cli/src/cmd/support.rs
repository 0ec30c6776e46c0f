//! Long-term support pool: offers and requests.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use relief_core::domains::support::{SupportCategory, SupportEntry, SupportForm, SupportKind};

use super::{print_validation, text};
use crate::context::AppContext;
use crate::render::support_line;

pub fn run(ctx: &mut AppContext) -> Result<()> {
    loop {
        ctx.flush_notifications();
        ctx.print_header("Long-term Support");
        ctx.print_info("Housing, medical care, education and livelihoods after the emergency.");

        let actions = [
            "📚 Support pool",
            "🎁 Offer support",
            "🙏 Request support",
            "🗑  Remove an entry",
            "⬅️  Back",
        ];
        let action = Select::with_theme(&ctx.theme())
            .with_prompt("Long-term support")
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => pool(ctx),
            1 => submit(ctx, SupportKind::Offer)?,
            2 => submit(ctx, SupportKind::Request)?,
            3 => remove(ctx)?,
            _ => return Ok(()),
        }
    }
}

fn pool(ctx: &AppContext) {
    let store = ctx.store.read();
    if store.support_entries().is_empty() {
        println!("  {}", "No offers or requests yet.".dimmed());
        return;
    }
    for entry in store.support_entries() {
        println!("  {}", support_line(entry));
        println!("    {}", entry.description.dimmed());
    }
}

fn submit(ctx: &AppContext, kind: SupportKind) -> Result<()> {
    let description_prompt = match kind {
        SupportKind::Offer => "What can you offer?",
        SupportKind::Request => "What do you need?",
    };
    let labels: Vec<&str> = SupportCategory::ALL.iter().map(SupportCategory::as_str).collect();

    let mut form = SupportForm::default();
    loop {
        let current = SupportCategory::ALL
            .iter()
            .position(|c| *c == form.category)
            .unwrap_or(0);
        let category = SupportCategory::ALL[Select::with_theme(&ctx.theme())
            .with_prompt("Category")
            .items(&labels)
            .default(current)
            .interact()?];

        form = SupportForm {
            category,
            name: text(ctx, "Name or organization", &form.name)?,
            contact: text(ctx, "Contact number", &form.contact)?,
            location: text(ctx, "Location", &form.location)?,
            description: text(ctx, description_prompt, &form.description)?,
        };

        match form.clone().validate(kind) {
            Ok(payload) => {
                ctx.submit(|| ctx.store.write().add_support(payload));
                return Ok(());
            }
            Err(errors) => {
                print_validation(ctx, &errors);
                if !ctx.confirm("Edit and try again?", true)? {
                    return Ok(());
                }
            }
        }
    }
}

fn remove(ctx: &AppContext) -> Result<()> {
    let entries: Vec<SupportEntry> = ctx.store.read().support_entries().to_vec();
    if entries.is_empty() {
        ctx.print_warning("No entries to remove.");
        return Ok(());
    }

    let mut items: Vec<String> = entries.iter().map(support_line).collect();
    items.push("Cancel".to_string());
    let picked = Select::with_theme(&ctx.theme())
        .with_prompt("Remove which entry?")
        .items(&items)
        .default(0)
        .interact()?;

    if let Some(entry) = entries.get(picked) {
        if ctx.confirm(&format!("Remove the entry from {}?", entry.name), false)? {
            ctx.store.write().delete_support(entry.id);
        }
    }
    Ok(())
}
