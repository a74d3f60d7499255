//! Catalog-centered commands: patterns, core needs, and the escalation rule.

use program_core::{KnowledgeBase, NeedSummary, CORE_NEEDS_HEADING, ESCALATION_HEADING};
use program_rules::{escalation_path, escalation_summary, CoreNeed};
use serde_json::json;
use std::io::Write;

use crate::error::CliResult;
use crate::output::{write_json, write_lines, OutputFormat};

/// List pattern records, optionally only those serving one need, each with
/// the triggers that set it off.
pub fn patterns(
    kb: &KnowledgeBase,
    need: Option<CoreNeed>,
    format: OutputFormat,
    out: &mut dyn Write,
) -> CliResult<()> {
    let query = kb.query();
    let records = match need {
        Some(need) => query.records_by_need(need),
        None => query.all_records().iter().collect(),
    };

    match format {
        OutputFormat::Json => {
            let entries: Vec<_> = records
                .iter()
                .map(|record| {
                    json!({
                        "pattern": record.pattern,
                        "serves_need": record.serves_need,
                        "description": record.description,
                        "healing_note": record.healing_note,
                        "triggers": query.triggers_for_pattern(record.pattern),
                    })
                })
                .collect();
            write_json(out, &entries)
        }
        OutputFormat::Text => {
            if let Some(need) = need {
                writeln!(out, "[{}]", need.label())?;
                writeln!(out, "{}", query.describe_need(need))?;
                writeln!(out)?;
            }
            for record in records {
                let triggers: Vec<_> = query
                    .triggers_for_pattern(record.pattern)
                    .iter()
                    .map(|t| t.label())
                    .collect();
                writeln!(out, "{}", record.summary_block())?;
                if triggers.is_empty() {
                    writeln!(out, "  Shows up when: (no trigger configured)")?;
                } else {
                    writeln!(out, "  Shows up when: {}", triggers.join(", "))?;
                }
                writeln!(out)?;
            }
            Ok(())
        }
    }
}

/// Summarize the three core needs.
pub fn needs(kb: &KnowledgeBase, format: OutputFormat, out: &mut dyn Write) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, &NeedSummary::all()),
        OutputFormat::Text => {
            writeln!(out, "{}", CORE_NEEDS_HEADING)?;
            write_lines(out, kb.query().core_need_summary())
        }
    }
}

/// Show the escalation path for the given supply state, with the general policy.
pub fn escalation(failing: bool, format: OutputFormat, out: &mut dyn Write) -> CliResult<()> {
    let path = escalation_path(failing);

    match format {
        OutputFormat::Json => write_json(
            out,
            &json!({
                "failing": failing,
                "path": path,
                "levels": path.iter().map(|s| s.level().rank()).collect::<Vec<_>>(),
            }),
        ),
        OutputFormat::Text => {
            let names: Vec<_> = path
                .iter()
                .map(|s| format!("{} ({})", s.label(), s.gloss()))
                .collect();
            writeln!(out, "Supply failing: {}", if failing { "yes" } else { "no" })?;
            writeln!(out, "Path: {}", names.join(" → "))?;
            writeln!(out)?;
            writeln!(out, "{}", ESCALATION_HEADING)?;
            write_lines(out, escalation_summary())
        }
    }
}
