use kstring::KString;

use crate::context::RenderContext;
use crate::escape::html_escape_into;
use crate::slot::SlotRef;

/// A piece of a compiled template.
#[derive(Debug, Clone)]
pub enum Segment {
    Literal(KString),
    Slot(SlotRef),
}

/// Output buffer for rendering. In template-capture mode, slots are
/// recorded as segments instead of being resolved against a context.
pub struct HtmlOut {
    buf: String,
    segments: Option<Vec<Segment>>,
}

impl Default for HtmlOut {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOut {
    pub fn new() -> Self {
        HtmlOut { buf: String::new(), segments: None }
    }

    pub fn with_capacity(cap: usize) -> Self {
        HtmlOut { buf: String::with_capacity(cap), segments: None }
    }

    pub(crate) fn for_template() -> Self {
        HtmlOut { buf: String::new(), segments: Some(Vec::new()) }
    }

    pub fn is_capturing(&self) -> bool {
        self.segments.is_some()
    }

    /// Append serialized HTML unchanged.
    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn push_escaped(&mut self, s: &str) {
        html_escape_into(s, &mut self.buf);
    }

    /// Resolve `slot` against `ctx`, or record it when capturing.
    pub fn print_slot(&mut self, slot: &SlotRef, ctx: &RenderContext) -> anyhow::Result<()> {
        if let Some(segments) = &mut self.segments {
            if !self.buf.is_empty() {
                let lit = std::mem::take(&mut self.buf);
                segments.push(Segment::Literal(KString::from_string(lit)));
            }
            segments.push(Segment::Slot(slot.clone()));
            Ok(())
        } else {
            ctx.print_slot(slot, self)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// The HTML accumulated so far. When capturing, only the text
    /// since the last slot.
    pub fn into_string(self) -> String {
        self.buf
    }

    pub(crate) fn into_segments(self) -> Vec<Segment> {
        let HtmlOut { buf, segments } = self;
        let mut segments = segments.unwrap_or_default();
        if !buf.is_empty() {
            segments.push(Segment::Literal(KString::from_string(buf)));
        }
        segments
    }
}
