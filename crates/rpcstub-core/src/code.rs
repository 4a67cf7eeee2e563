//! Indented source text builder used by the emitter.

const INDENT: &str = "  ";

/// Accumulates lines of generated code at the current indentation level
#[derive(Debug, Default)]
pub struct CodeBuilder {
    out: String,
    level: usize,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indentation
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.level {
                self.out.push_str(INDENT);
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
        self
    }

    /// Write `open`, the indented body produced by `body`, then `close`
    pub fn block(
        &mut self,
        open: impl AsRef<str>,
        close: impl AsRef<str>,
        body: impl FnOnce(&mut Self),
    ) -> &mut Self {
        self.line(open);
        self.level += 1;
        body(self);
        self.level -= 1;
        self.line(close)
    }

    pub fn build(self) -> String {
        self.out
    }
}
