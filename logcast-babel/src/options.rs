//! Render options shared by all serializers.

/// Presentation behavior for the renderers. Parsers never look at this.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Apply severity-based coloring to the level cell (Markdown, HTML).
    /// The JSON serializer reuses this flag to pick the relaxed escaper,
    /// a quirk inherited from the original options layout.
    pub use_color: bool,
    /// Embed the stylesheet in HTML output.
    pub include_styles: bool,
    /// Prepend the HTML summary banner (total / error / warn / info counts).
    pub enable_summary: bool,
    /// Fold long message/exception cells behind a disclosure widget in HTML.
    pub fold_long_messages: bool,
    /// Character threshold above which folding kicks in, measured on the
    /// escaped text.
    pub fold_message_length: usize,
    /// Property key for HTML group-header rows. Grouping is adjacent-run
    /// only; unsorted input repeats groups.
    pub group_by_property: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            use_color: false,
            include_styles: true,
            enable_summary: true,
            fold_long_messages: true,
            fold_message_length: 100,
            group_by_property: None,
        }
    }
}
