use unicode_width::UnicodeWidthChar;

/// Default distance between tab stops, in display columns.
pub const DEFAULT_TAB_STOP: usize = 4;

/// How the display width of a non-tab code point is decided.
#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WidthPolicy {
    /// Any code point that needs more than one UTF-8 byte is two cells wide.
    #[default]
    Encoding,
    /// East-Asian wide and fullwidth code points are two cells, all else one.
    Unicode,
}

impl WidthPolicy {
    /// Number of terminal cells `ch` occupies (1 or 2).
    pub fn cells(self, ch: char) -> usize {
        match self {
            Self::Encoding => {
                if ch.len_utf8() > 1 {
                    2
                } else {
                    1
                }
            }
            // Zero-width marks still take a cell: the layout holds one char per cell.
            Self::Unicode => ch.width().unwrap_or(1).clamp(1, 2),
        }
    }
}

/// Settings that affect how a row is laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    tab_stop: usize,
    width: WidthPolicy,
}

impl RenderOptions {
    /// Create options with the given tab stop and width policy.
    ///
    /// A tab stop of zero is treated as one.
    pub fn new(tab_stop: usize, width: WidthPolicy) -> Self {
        Self {
            tab_stop: tab_stop.max(1),
            width,
        }
    }

    pub const fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    pub const fn width(&self) -> WidthPolicy {
        self.width
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP, WidthPolicy::default())
    }
}

/// The display form of a row: one `char` per terminal cell, plus the
/// display column at which every text index starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    cells: Vec<char>,
    columns: Vec<usize>,
}

impl RowLayout {
    fn compute(text: &[char], options: RenderOptions) -> Self {
        let mut cells = Vec::with_capacity(text.len());
        let mut columns = Vec::with_capacity(text.len() + 1);

        for &ch in text {
            columns.push(cells.len());
            if ch == '\t' {
                cells.push(' ');
                while cells.len() % options.tab_stop != 0 {
                    cells.push(' ');
                }
            } else if options.width.cells(ch) == 2 {
                // Padding cell keeps every later column one cell per slot.
                cells.push(ch);
                cells.push(' ');
            } else {
                cells.push(ch);
            }
        }
        columns.push(cells.len());

        Self { cells, columns }
    }

    /// Rendered cells, tabs expanded and wide glyphs padded.
    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    /// Display column for each text index; has `text.len() + 1` entries.
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Display column of text index `idx`, or `None` past the end of the row.
    pub fn column_of(&self, idx: usize) -> Option<usize> {
        self.columns.get(idx).copied()
    }

    /// Total display width of the row.
    pub fn width(&self) -> usize {
        self.cells.len()
    }
}

/// One line of text and its lazily computed layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    text: Vec<char>,
    /// `None` while stale; filled on the next call to [`Row::layout`].
    layout: Option<RowLayout>,
}

impl Row {
    /// Create a row from its code points. The layout starts stale.
    pub const fn new(text: Vec<char>) -> Self {
        Self { text, layout: None }
    }

    pub fn text(&self) -> &[char] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the layout must be recomputed before it can be read.
    pub const fn is_stale(&self) -> bool {
        self.layout.is_none()
    }

    /// Return the row layout, recomputing it first if the text changed.
    pub fn layout(&mut self, options: RenderOptions) -> &RowLayout {
        let text = &self.text;
        self.layout.get_or_insert_with(|| {
            tracing::trace!(len = text.len(), "recompute row layout");
            RowLayout::compute(text, options)
        })
    }

    /// Insert `ch` before text index `col`. Out-of-range indices are ignored.
    pub fn insert_char(&mut self, col: usize, ch: char) {
        if col <= self.text.len() {
            self.text.insert(col, ch);
            self.invalidate();
        }
    }

    /// Remove the code point just before text index `col`.
    ///
    /// `col == 0` (or past the end) removes the last code point instead.
    /// An empty row is left untouched.
    pub fn delete_before(&mut self, col: usize) {
        if self.text.is_empty() {
            return;
        }
        if (1..=self.text.len()).contains(&col) {
            self.text.remove(col - 1);
        } else {
            self.text.pop();
        }
        self.invalidate();
    }

    /// Split the row at `col`, keeping the left part and returning the right.
    ///
    /// `col` is clamped to the row length.
    pub fn split_off(&mut self, col: usize) -> Self {
        let col = col.min(self.text.len());
        let right = self.text.split_off(col);
        self.invalidate();
        Self::new(right)
    }

    /// Append the text of `other` to the end of this row.
    pub fn append(&mut self, other: Self) {
        self.text.extend(other.text);
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.layout = None;
    }
}

impl From<&str> for Row {
    fn from(s: &str) -> Self {
        Self::new(s.chars().collect())
    }
}
