/// Column width used when none is configured.
pub const DEFAULT_WIDTH: usize = 80;

/// Wrap at [`DEFAULT_WIDTH`] without splitting words.
pub fn wrap_default(text: &str) -> String {
    wrap(text, DEFAULT_WIDTH, false)
}

/// Return `text` wrapped so lines fit in `width` columns.
///
/// Words (whitespace-delimited tokens) are never split unless `hard_wrap` is
/// set and the word alone is wider than `width`; in that case it is cut into
/// `width`-sized chunks, each followed by a newline.
///
/// A line is charged for its words plus the original whitespace between
/// them, which is copied through unchanged. Whitespace containing a line
/// break always starts a new line. Widths are counted in `char`s.
pub fn wrap(text: &str, width: usize, hard_wrap: bool) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / width.max(1));
    // Columns charged to the current line.
    let mut used = 0;
    // Set after a hard split: the cursor sits at the start of a new line even
    // though `used` still counts the final chunk.
    let mut fresh_line = false;

    for (space, word) in segments(text) {
        let space_len = space.chars().count();
        let word_len = word.chars().count();
        let line_break = space.contains(['\n', '\r']);

        if word.is_empty() {
            // trailing whitespace
            if !line_break && !fresh_line && used + space_len <= width {
                out.push_str(space);
            }
            break;
        }

        if !line_break && used + space_len + word_len <= width {
            if !fresh_line {
                out.push_str(space);
            }
            out.push_str(word);
            used += space_len + word_len;
            fresh_line = false;
        } else if hard_wrap && word_len > width {
            if used > 0 && !fresh_line {
                out.push('\n');
            }
            used = split_word(&mut out, word, width.max(1));
            fresh_line = true;
        } else {
            if used > 0 && !fresh_line {
                out.push('\n');
            }
            out.push_str(word);
            used = word_len;
            fresh_line = false;
        }
    }

    out
}

/// Write `word` in chunks of `chunk` chars, each ending in a newline.
/// Returns the length of the last chunk.
fn split_word(out: &mut String, word: &str, chunk: usize) -> usize {
    let mut last = 0;
    let mut in_chunk = 0;
    for c in word.chars() {
        out.push(c);
        in_chunk += 1;
        if in_chunk == chunk {
            out.push('\n');
            last = in_chunk;
            in_chunk = 0;
        }
    }
    if in_chunk > 0 {
        out.push('\n');
        last = in_chunk;
    }
    last
}

/// Split `text` into `(whitespace, word)` pairs. The first whitespace run may
/// be empty, and so may the final word when the text ends in whitespace.
fn segments(text: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let word_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let (space, tail) = rest.split_at(word_start);
        let word_end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, remaining) = tail.split_at(word_end);
        rest = remaining;
        Some((space, word))
    })
}
