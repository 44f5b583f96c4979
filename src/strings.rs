// ─── Word wrap ──────────────────────────────────────────────────────────────

/// Greedy word wrap: the first whitespace character at or after `max_len`
/// characters on the current line becomes a newline. Lines may run past
/// `max_len` until the next whitespace; existing characters are never split.
pub fn wrap_after(text: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut line_len = 0usize;
    for ch in text.chars() {
        if ch.is_whitespace() && line_len >= max_len {
            out.push('\n');
            line_len = 0;
        } else {
            out.push(ch);
            line_len += 1;
        }
    }
    out
}

// ─── Scalar ranges ──────────────────────────────────────────────────────────

/// Inclusive range of Unicode scalar values, yielded as `char`s.
/// The surrogate gap (U+D800..U+DFFF) is skipped, so every code point in
/// between comes out as a valid `char`.
pub fn scalar_range(from: char, to: char) -> ScalarRange {
    ScalarRange {
        next: from as u32,
        last: to as u32,
    }
}

pub struct ScalarRange {
    next: u32,
    last: u32,
}

impl Iterator for ScalarRange {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        while self.next <= self.last {
            let cur = self.next;
            self.next += 1;
            if let Some(c) = char::from_u32(cur) {
                return Some(c);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.last + 1).saturating_sub(self.next) as usize;
        // Lower bound 0: part of the span may be the surrogate gap.
        (0, Some(remaining))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
