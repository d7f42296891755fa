use super::TextAlign;

/// Places a single line of `text` into `width` device columns.
///
/// Returns `(column, glyph)` pairs for visible glyphs only; spaces and control characters
/// take up columns but are not emitted, so text never punches holes in what is beneath it.
/// Text wider than `width` is truncated on the right. Justified text that has fewer than
/// two words, or does not fit with single gaps, is laid out left-aligned.
pub fn layout_line(text: &str, width: usize, align: TextAlign) -> Vec<(usize, char)> {
    if width == 0 {
        return Vec::new();
    }

    if align == TextAlign::Justified {
        if let Some(glyphs) = justify(text, width) {
            return glyphs;
        }
    }

    let chars: Vec<char> = text.chars().filter(|c| !c.is_control()).collect();
    let n = chars.len().min(width);
    let start = match align {
        TextAlign::Left | TextAlign::Justified => 0,
        TextAlign::Center => (width - n) / 2,
        TextAlign::Right => width - n,
    };

    chars
        .into_iter()
        .take(n)
        .enumerate()
        .filter(|(_, c)| *c != ' ')
        .map(|(i, c)| (start + i, c))
        .collect()
}

fn justify(text: &str, width: usize) -> Option<Vec<(usize, char)>> {
    let words: Vec<Vec<char>> = text
        .split_whitespace()
        .map(|w| w.chars().filter(|c| !c.is_control()).collect())
        .collect();
    if words.len() < 2 {
        return None;
    }

    let letters: usize = words.iter().map(Vec::len).sum();
    let gaps = words.len() - 1;
    if letters + gaps > width {
        return None;
    }

    let extra = width - letters;
    let (base, remainder) = (extra / gaps, extra % gaps);

    let mut out = Vec::with_capacity(letters);
    let mut col = 0;
    for (i, word) in words.iter().enumerate() {
        for &c in word {
            out.push((col, c));
            col += 1;
        }
        if i < gaps {
            col += base + usize::from(i < remainder);
        }
    }
    Some(out)
}
