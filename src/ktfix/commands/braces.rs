use crate::commands::{CmdMessage, RepairResult};
use crate::model::{Delimiter, DelimiterCount, RepairEdit, SourceBuffer};

/// Append missing closing braces at the end of a buffer.
///
/// Counts every `{` and `}` in the buffer. When opens exceed closes, the
/// deficit is repaired blindly: trailing blank lines are stripped, one `}`
/// line is appended per missing brace, and a single trailing blank line is
/// restored. No attempt is made to locate where the imbalance originates.
///
/// A surplus of closing braces is never corrected, only reported as "no
/// missing braces". That can mask a different defect; the report is advisory
/// and a human reviews the result.
pub fn run(buffer: &SourceBuffer) -> RepairResult {
    let count = DelimiterCount::of_buffer(buffer, Delimiter::Brace);
    let deficit = count.deficit();

    if deficit == 0 {
        let mut result = RepairResult::unchanged(buffer.clone());
        result.add_message(CmdMessage::info(format!(
            "no missing braces ({} open, {} close)",
            count.opens, count.closes
        )));
        return result;
    }

    let repaired = buffer.apply(&[RepairEdit::AppendClosers { count: deficit }]);
    let mut result = RepairResult::unchanged(repaired);
    result.changed = true;
    result.add_message(CmdMessage::success(if deficit == 1 {
        "appended 1 closing brace".to_string()
    } else {
        format!("appended {} closing braces", deficit)
    }));
    result
}
