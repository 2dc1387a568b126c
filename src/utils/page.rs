//! The page-number strip under a paginated table: at most `max_visible`
//! numbered slots around the current page, with the first/last page and an
//! ellipsis marker pulled in when the window does not reach the edges.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// Compute the markers to draw for `current` of `total` pages. An empty
/// collection (total 0) draws nothing; a single page draws no strip either,
/// since there is nowhere to navigate.
pub fn page_markers(current: usize, total: usize, max_visible: usize) -> Vec<PageMarker> {
    if total <= 1 || max_visible == 0 {
        return Vec::new();
    }

    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total);
    if end - start + 1 < max_visible {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let mut markers = Vec::new();
    if start > 1 {
        markers.push(PageMarker::Page(1));
        if start > 2 {
            markers.push(PageMarker::Ellipsis);
        }
    }
    for page in start..=end {
        markers.push(PageMarker::Page(page));
    }
    if end < total {
        if end < total - 1 {
            markers.push(PageMarker::Ellipsis);
        }
        markers.push(PageMarker::Page(total));
    }
    markers
}

/// Render the strip the way the history screen shows it, with the current
/// page bracketed: `1 … 4 [5] 6 … 12`.
pub fn render_strip(current: usize, total: usize, max_visible: usize) -> String {
    page_markers(current, total, max_visible)
        .into_iter()
        .map(|marker| match marker {
            PageMarker::Page(p) if p == current => format!("[{}]", p),
            PageMarker::Page(p) => p.to_string(),
            PageMarker::Ellipsis => "…".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
