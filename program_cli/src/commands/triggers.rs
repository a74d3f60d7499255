//! Trigger-centered commands: listing, describing, reporting, and paging cards.

use program_core::{CardBrowser, KnowledgeBase};
use program_rules::TriggerType;
use serde_json::json;
use std::io::Write;
use tracing::debug;

use crate::error::CliResult;
use crate::output::{write_json, write_lines, OutputFormat};

/// List every trigger with its gloss, in declaration order.
pub fn list(kb: &KnowledgeBase, format: OutputFormat, out: &mut dyn Write) -> CliResult<()> {
    let query = kb.query();

    match format {
        OutputFormat::Json => {
            let entries = TriggerType::ALL
                .iter()
                .map(|&trigger| -> CliResult<serde_json::Value> {
                    let description = query.describe_trigger(trigger)?;
                    Ok(json!({
                        "key": trigger.key(),
                        "label": trigger.label(),
                        "description": description,
                        "patterns": query.patterns_for_trigger(trigger),
                    }))
                })
                .collect::<CliResult<Vec<_>>>()?;
            write_json(out, &entries)
        }
        OutputFormat::Text => {
            for trigger in TriggerType::ALL {
                writeln!(out, "{:<18} {}", trigger.key(), trigger.label())?;
                writeln!(out, "{:<18} {}", "", query.describe_trigger(trigger)?)?;
            }
            Ok(())
        }
    }
}

/// Print the trigger paragraph.
pub fn describe(
    kb: &KnowledgeBase,
    trigger: TriggerType,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let text = kb.query().describe_trigger_and_patterns(trigger)?;

    match format {
        OutputFormat::Json => write_json(out, &json!({ "trigger": trigger, "text": text })),
        OutputFormat::Text => {
            writeln!(out, "{}", text)?;
            Ok(())
        }
    }
}

/// Print the full report for a trigger.
pub fn report(
    kb: &KnowledgeBase,
    trigger: TriggerType,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    debug!(trigger = trigger.key(), "rendering report");
    let report = kb.query().build_report(trigger)?;

    match format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Text => write_lines(out, report.to_lines()),
    }
}

/// Show one page of a trigger's cards. `page` is 1-based and wraps.
pub fn cards(
    kb: &KnowledgeBase,
    trigger: TriggerType,
    page: usize,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let mut browser = CardBrowser::new(kb);
    browser.select(trigger)?;
    browser.go_to(page.saturating_sub(1));

    match format {
        OutputFormat::Json => write_json(
            out,
            &json!({
                "trigger": trigger,
                "page": if browser.is_empty() { 0 } else { browser.position() + 1 },
                "total": browser.len(),
                "can_page": browser.can_page(),
                "card": browser.current(),
            }),
        ),
        OutputFormat::Text => {
            write_lines(out, kb.query().core_need_headlines())?;
            writeln!(out)?;
            writeln!(out, "Trigger: {}", trigger.label())?;
            writeln!(out, "{}", browser.page_label())?;
            writeln!(out)?;
            writeln!(out, "{}", browser.display_text())?;
            Ok(())
        }
    }
}
