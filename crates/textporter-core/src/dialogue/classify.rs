use crate::model::DialogueLine;

/// Decide whether a raw text line is a dialogue line.
///
/// A dialogue line is `SPEAKER: text`. Parenthesized annotations in the
/// speaker part are dropped, so `"Tom (angrily): I quit!"` yields speaker
/// `"Tom"`. Returns `None` for lines without a colon, or with an empty
/// speaker or empty text. Speaker case is preserved.
pub fn classify(raw_line: &str) -> Option<DialogueLine> {
    let (speaker_part, text_part) = raw_line.trim().split_once(':')?;

    let speaker = strip_annotations(speaker_part);
    let speaker = speaker.trim();
    let text = text_part.trim();

    if speaker.is_empty() || text.is_empty() {
        return None;
    }

    Some(DialogueLine {
        speaker: speaker.to_string(),
        text: text.to_string(),
    })
}

/// Remove `(...)` groups, each ending at the first `)` after its `(`.
/// An unclosed `(` is kept as-is.
fn strip_annotations(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(open) = rest.find('(') {
        match rest[open..].find(')') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out
}
