//! Volunteer registration and directory.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Select;
use relief_core::domains::volunteers::{Volunteer, VolunteerForm, VolunteerKind, SKILL_OPTIONS};

use super::{print_validation, tags, text};
use crate::context::AppContext;
use crate::render::volunteer_line;

pub fn run(ctx: &mut AppContext) -> Result<()> {
    loop {
        ctx.flush_notifications();
        ctx.print_header("Volunteers");

        let actions = [
            "🙋 Register as an individual",
            "🏢 Register an organization",
            "📇 Volunteer directory",
            "🗑  Remove a volunteer",
            "⬅️  Back",
        ];
        let action = Select::with_theme(&ctx.theme())
            .with_prompt("Volunteers")
            .items(&actions)
            .default(0)
            .interact()?;

        match action {
            0 => register(ctx, VolunteerKind::Individual)?,
            1 => register(ctx, VolunteerKind::Entity)?,
            2 => directory(ctx),
            3 => remove(ctx)?,
            _ => return Ok(()),
        }
    }
}

fn register(ctx: &AppContext, kind: VolunteerKind) -> Result<()> {
    let name_prompt = match kind {
        VolunteerKind::Individual => "Full name",
        VolunteerKind::Entity => "Organization name",
    };
    let skill_options: Vec<(&str, &str)> = SKILL_OPTIONS.iter().map(|s| (*s, *s)).collect();

    let mut form = VolunteerForm::default();
    loop {
        form = VolunteerForm {
            name: text(ctx, name_prompt, &form.name)?,
            contact: text(ctx, "Contact number", &form.contact)?,
            location: text(ctx, "Base location", &form.location)?,
            skills: tags(ctx, "Skills and resources", &skill_options, &form.skills)?,
        };

        match form.clone().validate(kind) {
            Ok(payload) => {
                ctx.submit(|| ctx.store.write().add_volunteer(payload));
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

fn directory(ctx: &AppContext) {
    let store = ctx.store.read();
    if store.volunteers().is_empty() {
        println!("  {}", "No volunteers registered yet.".dimmed());
        return;
    }
    for volunteer in store.volunteers() {
        println!("  {}", volunteer_line(volunteer));
    }
}

fn remove(ctx: &AppContext) -> Result<()> {
    let volunteers: Vec<Volunteer> = ctx.store.read().volunteers().to_vec();
    if volunteers.is_empty() {
        ctx.print_warning("No volunteers to remove.");
        return Ok(());
    }

    let mut items: Vec<String> = volunteers.iter().map(volunteer_line).collect();
    items.push("Cancel".to_string());
    let picked = Select::with_theme(&ctx.theme())
        .with_prompt("Remove which volunteer?")
        .items(&items)
        .default(0)
        .interact()?;

    if let Some(volunteer) = volunteers.get(picked) {
        if ctx.confirm(&format!("Remove {}?", volunteer.name), false)? {
            ctx.store.write().delete_volunteer(volunteer.id);
        }
    }
    Ok(())
}
