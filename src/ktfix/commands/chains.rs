use crate::commands::{CmdMessage, RepairResult};
use crate::model::{Delimiter, DelimiterCount, PatternMatch, RepairEdit, SourceBuffer};
use once_cell::sync::Lazy;
use regex::Regex;

// Matches the trimmed start of a state-update call chain, capturing the
// receiver identifier. The line may carry copy arguments after the `(`.
static TRIGGER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\.update\s*\{\s*it\.copy\(")
        .expect("invalid trigger regex")
});

/// Close unterminated `.update { it.copy(` call chains.
///
/// Scans left to right for trigger lines. For each one, a parenthesis depth
/// counter starts from the trigger line's own open/close balance and
/// accumulates each following line's balance until it returns to zero; that
/// line is the close point. A close line whose trimmed content is exactly `)`
/// is rewritten to `) }` with its own leading whitespace preserved. Any other
/// close-line shape is left byte-identical: only the single well-known shape
/// is auto-fixed, the rest needs manual review.
///
/// Scanning resumes strictly after each resolved close point, so a trigger
/// nested inside an earlier match's body is skipped. A trigger whose group
/// never closes before the end of the buffer produces a warning and no edit.
///
/// When `identifier` is given, only chains on that exact receiver are
/// repaired; `None` matches any identifier.
pub fn run(buffer: &SourceBuffer, identifier: Option<&str>) -> RepairResult {
    let lines = buffer.lines();
    let mut matches = Vec::new();
    let mut edits = Vec::new();
    let mut messages = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let receiver = TRIGGER
            .captures(lines[i].trim())
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str());
        let triggered = match (receiver, identifier) {
            (Some(found), Some(wanted)) => found == wanted,
            (Some(_), None) => true,
            (None, _) => false,
        };
        if !triggered {
            i += 1;
            continue;
        }

        let m = PatternMatch::new(i, &lines[i]);
        matches.push(m);

        let mut depth = DelimiterCount::of_line(&lines[i], Delimiter::Paren).balance();
        if depth <= 0 {
            // The chain already closes on the trigger line itself.
            i += 1;
            continue;
        }

        let mut close = None;
        let mut j = i + 1;
        while j < lines.len() {
            depth += DelimiterCount::of_line(&lines[j], Delimiter::Paren).balance();
            if depth <= 0 {
                close = Some(j);
                break;
            }
            j += 1;
        }

        match close {
            Some(c) => {
                if lines[c].trim() == ")" {
                    let prefix = &lines[c][..lines[c].len() - lines[c].trim_start().len()];
                    edits.push(RepairEdit::RewriteLine {
                        line: c,
                        text: format!("{}) }}", prefix),
                    });
                    messages.push(CmdMessage::success(format!(
                        "line {}: closed update block opened at line {}",
                        c + 1,
                        m.line + 1
                    )));
                }
                i = c + 1;
            }
            None => {
                messages.push(CmdMessage::warning(format!(
                    "line {}: update block never closes",
                    m.line + 1
                )));
                i = lines.len();
            }
        }
    }

    let changed = !edits.is_empty();
    let mut result = RepairResult::unchanged(buffer.apply(&edits));
    result.changed = changed;
    result.matches = matches;
    result.messages = messages;
    if !changed {
        result.add_message(CmdMessage::info(if result.matches.is_empty() {
            "no update blocks found".to_string()
        } else {
            "no changes needed".to_string()
        }));
    }
    result
}
