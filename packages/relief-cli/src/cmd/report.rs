//! "Report a Case": self or on behalf of someone else.

use std::path::Path;

use anyhow::Result;
use dialoguer::Select;
use relief_core::domains::reports::{ReportForm, ReportKind, Severity, NEED_OPTIONS};

use super::{print_validation, tags, text};
use crate::context::AppContext;

pub fn run(ctx: &AppContext) -> Result<()> {
    ctx.print_header("Report a Case");
    ctx.print_info("Please provide accurate details to help rescue teams reach you faster.");

    let kinds = ["I need help (Self)", "Reporting for someone else"];
    let kind = match Select::with_theme(&ctx.theme())
        .with_prompt("Who is this report for?")
        .items(&kinds)
        .default(0)
        .interact()?
    {
        0 => ReportKind::ForSelf,
        _ => ReportKind::ForRelative,
    };

    let mut form = ReportForm::default();
    loop {
        form = prompt_form(ctx, form)?;

        match form.clone().validate(kind) {
            Ok(payload) => {
                let report = ctx.submit(|| ctx.store.write().add_report(payload));
                ctx.print_info(&format!("Reference: {}", report.id.short()));
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

fn prompt_form(ctx: &AppContext, previous: ReportForm) -> Result<ReportForm> {
    let name = text(ctx, "Full name", &previous.name)?;
    let location = text(ctx, "Location (village, town, landmark)", &previous.location)?;
    let contact = text(ctx, "Contact number", &previous.contact)?;

    let labels: Vec<&str> = Severity::ALL.iter().map(Severity::as_str).collect();
    let current = Severity::ALL
        .iter()
        .position(|s| *s == previous.severity)
        .unwrap_or(0);
    let severity = Severity::ALL[Select::with_theme(&ctx.theme())
        .with_prompt("Severity")
        .items(&labels)
        .default(current)
        .interact()?];

    let needs = tags(ctx, "Immediate needs", NEED_OPTIONS, &previous.needs)?;
    let description = text(ctx, "Describe the situation", &previous.description)?;

    let evidence_input = text(
        ctx,
        "Photo evidence file (optional)",
        previous.evidence.as_deref().unwrap_or(""),
    )?;
    let evidence = evidence_reference(ctx, &evidence_input);

    Ok(ReportForm {
        name,
        location,
        contact,
        severity,
        description,
        needs,
        evidence,
        coordinates: previous.coordinates,
    })
}

/// Keep the path only if it points at a readable file.
fn evidence_reference(ctx: &AppContext, input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    match Path::new(input).canonicalize() {
        Ok(path) if path.is_file() => Some(path.display().to_string()),
        _ => {
            ctx.print_warning(&format!("No file at {input}; evidence skipped."));
            None
        }
    }
}
