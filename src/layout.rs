//! Line indentation and bordered text banners.

/// Prefix every line of `text` with four spaces.
pub fn indented(text: &str) -> String {
    indented_by(text, 4)
}

/// Prefix every line of `text` with `n_spaces` spaces.
///
/// Lines end at `\n`, `\r\n` or a bare `\r`; terminators are preserved.
/// Input ending in a terminator gains no padded empty trailing line.
pub fn indented_by(text: &str, n_spaces: usize) -> String {
    let pad = " ".repeat(n_spaces);
    let mut out = String::with_capacity(text.len() + n_spaces * 4);
    let mut rest = text;
    while !rest.is_empty() {
        let end = match rest.find(['\n', '\r']) {
            // \r\n counts as a single terminator
            Some(i) if rest.as_bytes()[i] == b'\r' && rest.as_bytes().get(i + 1) == Some(&b'\n') => {
                i + 2
            }
            Some(i) => i + 1,
            None => rest.len(),
        };
        let (line, tail) = rest.split_at(end);
        out.push_str(&pad);
        out.push_str(line);
        rest = tail;
    }
    out
}

/// Configuration for a three-line bordered banner.
///
/// Unset corners cascade at render time: `top_right` falls back to
/// `top_left`, `bottom_left` to `top_left`, and `bottom_right` to the
/// resolved `top_right`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    width: usize,
    top: char,
    left: char,
    right: char,
    bottom: char,
    top_left: char,
    top_right: Option<char>,
    bottom_left: Option<char>,
    bottom_right: Option<char>,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            width: 100,
            top: '-',
            left: '|',
            right: '|',
            bottom: '-',
            top_left: '+',
            top_right: None,
            bottom_left: None,
            bottom_right: None,
        }
    }
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn top(mut self, top: char) -> Self {
        self.top = top;
        self
    }

    pub fn left(mut self, left: char) -> Self {
        self.left = left;
        self
    }

    pub fn right(mut self, right: char) -> Self {
        self.right = right;
        self
    }

    pub fn bottom(mut self, bottom: char) -> Self {
        self.bottom = bottom;
        self
    }

    pub fn top_left(mut self, corner: char) -> Self {
        self.top_left = corner;
        self
    }

    pub fn top_right(mut self, corner: char) -> Self {
        self.top_right = Some(corner);
        self
    }

    pub fn bottom_left(mut self, corner: char) -> Self {
        self.bottom_left = Some(corner);
        self
    }

    pub fn bottom_right(mut self, corner: char) -> Self {
        self.bottom_right = Some(corner);
        self
    }

    /// Draw `text` centered inside the configured border.
    ///
    /// Three lines, no trailing newline. Text longer than `width - 2`
    /// overflows the border; there is no wrapping.
    pub fn render(&self, text: &str) -> String {
        let top_right = self.top_right.unwrap_or(self.top_left);
        let bottom_left = self.bottom_left.unwrap_or(self.top_left);
        let bottom_right = self.bottom_right.unwrap_or(top_right);
        let inner = self.width.saturating_sub(2);

        let mut out = String::with_capacity((self.width + 1) * 3);
        out.push(self.top_left);
        out.extend(std::iter::repeat_n(self.top, inner));
        out.push(top_right);
        out.push('\n');
        out.push(self.left);
        out.push_str(&format!("{text:^inner$}"));
        out.push(self.right);
        out.push('\n');
        out.push(bottom_left);
        out.extend(std::iter::repeat_n(self.bottom, inner));
        out.push(bottom_right);
        out
    }
}

/// Render `text` in a default `+-|` banner of the given width.
pub fn simple_banner(text: &str, width: usize) -> String {
    Banner::new().width(width).render(text)
}
