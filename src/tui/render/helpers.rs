use ratatui::style::Style;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.content.width()).sum()
}

/// Pad `spans` with `style` out to `width` columns
pub(super) fn pad_to_width(spans: &mut Vec<Span<'_>>, width: usize, style: Style) {
    let used = spans_width(spans);
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), style));
    }
}

/// Push `hint` right-aligned after `spans` if it fits in `width`
pub(super) fn push_right_hint(spans: &mut Vec<Span<'_>>, hint: &str, width: usize, style: Style) {
    let used = spans_width(spans);
    let hint_width = hint.width();
    if used + hint_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - hint_width),
            Style::default().bg(style.bg.unwrap_or_default()),
        ));
        spans.push(Span::styled(hint.to_string(), style));
    }
}
