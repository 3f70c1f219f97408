use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` so no line is wider than `width` display columns.
///
/// Paragraphs (`\n`-separated) are wrapped independently. A line that already
/// fits is returned untouched, so wrapping wrapped text is a no-op. Words
/// wider than `width` are split; every piece holds at least one character.
/// A `width` of zero disables wrapping.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out: Vec<String> = Vec::new();
    for line in text.split('\n') {
        if line.width() <= width {
            out.push(line.to_string());
        } else {
            wrap_line(line, width, &mut out);
        }
    }
    out.join("\n")
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let mut pieces = split_word(word, width);
            // The last piece may still share a line with the next word.
            let last = pieces.pop().unwrap_or_default();
            out.extend(pieces);
            current_width = last.width();
            current = last;
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            out.push(std::mem::replace(&mut current, word.to_string()));
            current_width = word_width;
        }
    }

    out.push(current);
}

fn split_word(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}
