//! Column Definition
//!
//! Defines table columns with their headers and cell renderers.

use gpui::{AnyElement, SharedString};

type CellRenderer<R> = Box<dyn Fn(&R) -> AnyElement + Send + Sync>;
type HeaderRenderer = Box<dyn Fn() -> AnyElement + Send + Sync>;

/// Column header content
pub enum ColumnHeader {
    /// Plain text label
    Label(SharedString),
    /// Custom header element
    Custom(HeaderRenderer),
}

impl ColumnHeader {
    /// Text label, if the header is a plain label
    pub fn label(&self) -> Option<&SharedString> {
        match self {
            ColumnHeader::Label(label) => Some(label),
            ColumnHeader::Custom(_) => None,
        }
    }
}

/// Column definition for the DataTable
pub struct Column<R> {
    /// Column identifier, unique within a table
    pub id: SharedString,
    /// Column header
    pub header: ColumnHeader,
    /// Column width (in pixels, or flexible)
    pub width: ColumnWidth,
    /// Cell renderer function
    pub render: CellRenderer<R>,
}

/// Column width specification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Fixed width in pixels
    Fixed(f32),
    /// Flexible width with optional min/max
    Flex { min: Option<f32>, max: Option<f32> },
    /// Percentage of available space
    Percent(f32),
}

impl Default for ColumnWidth {
    fn default() -> Self {
        ColumnWidth::Flex { min: None, max: None }
    }
}

impl<R: 'static> Column<R> {
    /// Create a new column with a text header
    pub fn new(
        id: impl Into<SharedString>,
        label: impl Into<SharedString>,
        render: impl Fn(&R) -> AnyElement + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            header: ColumnHeader::Label(label.into()),
            width: ColumnWidth::default(),
            render: Box::new(render),
        }
    }

    /// Replace the header with a custom element
    pub fn header_with(mut self, header: impl Fn() -> AnyElement + Send + Sync + 'static) -> Self {
        self.header = ColumnHeader::Custom(Box::new(header));
        self
    }

    /// Set fixed width
    pub fn fixed_width(mut self, width: f32) -> Self {
        self.width = ColumnWidth::Fixed(width);
        self
    }

    /// Set flexible width with optional constraints
    pub fn flex_width(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.width = ColumnWidth::Flex { min, max };
        self
    }

    /// Set percentage width
    pub fn percent_width(mut self, percent: f32) -> Self {
        self.width = ColumnWidth::Percent(percent);
        self
    }

    /// Render a cell
    pub fn render_cell(&self, row: &R) -> AnyElement {
        (self.render)(row)
    }
}

/// First column id that appears more than once
pub fn find_duplicate_id<R>(columns: &[Column<R>]) -> Option<SharedString> {
    columns.iter().enumerate().find_map(|(i, col)| {
        columns[..i]
            .iter()
            .any(|earlier| earlier.id == col.id)
            .then(|| col.id.clone())
    })
}
