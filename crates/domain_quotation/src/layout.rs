//! Layout fragments
//!
//! A renderer-independent description of the quotation: paragraphs, tables,
//! rules and spacers measured in PostScript points (1/72 inch). Nothing here
//! knows about fonts or pages; the renderer decides where lines wrap and
//! where pages break.

use std::sync::Arc;

/// Points per inch
pub const INCH: f32 = 72.0;

/// RGB colour with components in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Font size, line height, weight, colour and alignment of a paragraph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub leading: f32,
    pub weight: FontWeight,
    pub color: Color,
    pub align: Align,
}

impl TextStyle {
    pub const fn new(size: f32, leading: f32) -> Self {
        Self {
            size,
            leading,
            weight: FontWeight::Regular,
            color: Color::BLACK,
            align: Align::Left,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    pub const fn colored(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub const fn aligned(mut self, align: Align) -> Self {
        self.align = align;
        self
    }
}

/// A run of text in one style. `\n` forces a line break.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: TextStyle,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// PNG image scaled into a fixed box
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub png: Arc<[u8]>,
    pub width: f32,
    pub height: f32,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    Empty,
    Text(Vec<Paragraph>),
    Image(ImageBlock),
}

/// One table cell, optionally spanning several columns
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub content: CellContent,
    pub col_span: usize,
    pub background: Option<Color>,
}

impl Cell {
    pub fn empty() -> Self {
        Self {
            content: CellContent::Empty,
            col_span: 1,
            background: None,
        }
    }

    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Self::paragraphs(vec![Paragraph::new(text, style)])
    }

    pub fn paragraphs(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            content: CellContent::Text(paragraphs),
            col_span: 1,
            background: None,
        }
    }

    pub fn image(image: ImageBlock) -> Self {
        Self {
            content: CellContent::Image(image),
            col_span: 1,
            background: None,
        }
    }

    pub fn spanning(mut self, columns: usize) -> Self {
        self.col_span = columns.max(1);
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Text of every paragraph joined by newlines; empty for images
    pub fn plain_text(&self) -> String {
        match &self.content {
            CellContent::Text(paragraphs) => paragraphs
                .iter()
                .map(|p| p.text.as_str())
                .collect::<Vec<_>>()
                .join("\n"),
            CellContent::Empty | CellContent::Image(_) => String::new(),
        }
    }

    /// Style of the first paragraph, if any
    pub fn first_style(&self) -> Option<&TextStyle> {
        match &self.content {
            CellContent::Text(paragraphs) => paragraphs.first().map(|p| &p.style),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub background: Option<Color>,
    /// Whether grid lines are drawn around this row's cells
    pub ruled: bool,
    pub min_height: f32,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            background: None,
            ruled: true,
            min_height: 0.0,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn unruled(mut self) -> Self {
        self.ruled = false;
        self
    }

    pub fn with_min_height(mut self, height: f32) -> Self {
        self.min_height = height;
        self
    }

    /// Number of grid columns the row covers
    pub fn span(&self) -> usize {
        self.cells.iter().map(|c| c.col_span).sum()
    }

    pub fn texts(&self) -> Vec<String> {
        self.cells.iter().map(Cell::plain_text).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLines {
    pub width: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

impl Padding {
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
        }
    }

    pub const fn new(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        Self { top, bottom, left, right }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(3.0, 3.0, 6.0, 6.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub column_widths: Vec<f32>,
    pub rows: Vec<Row>,
    /// Leading rows repeated at the top of every page the table spans
    pub header_rows: usize,
    pub grid: Option<GridLines>,
    pub padding: Padding,
    /// Horizontal placement of the whole table within the frame
    pub align: Align,
}

impl Table {
    pub fn new(column_widths: Vec<f32>) -> Self {
        Self {
            column_widths,
            rows: Vec::new(),
            header_rows: 0,
            grid: None,
            padding: Padding::default(),
            align: Align::Center,
        }
    }

    pub fn with_rows(mut self, rows: Vec<Row>) -> Self {
        self.rows = rows;
        self
    }

    pub fn with_header_rows(mut self, count: usize) -> Self {
        self.header_rows = count;
        self
    }

    pub fn with_grid(mut self, width: f32, color: Color) -> Self {
        self.grid = Some(GridLines { width, color });
        self
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    pub fn total_width(&self) -> f32 {
        self.column_widths.iter().sum()
    }

    /// Every row covers exactly the table's columns
    pub fn is_well_formed(&self) -> bool {
        !self.column_widths.is_empty()
            && self.header_rows <= self.rows.len()
            && self.rows.iter().all(|row| row.span() == self.column_count())
    }

    pub fn row_texts(&self, index: usize) -> Vec<String> {
        self.rows.get(index).map(Row::texts).unwrap_or_default()
    }

    /// First cell text of every row
    pub fn row_labels(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.cells.first().map(Cell::plain_text).unwrap_or_default())
            .collect()
    }
}

/// Horizontal line across the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub width: f32,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
    Rule(Rule),
    Spacer(f32),
}

impl Block {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }
}

/// The sections of a quotation, in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Header,
    Title,
    Scope,
    VehicleDetails,
    Comparison,
    Excess,
    ValueAdditions,
    Disclaimer,
    PreparedBy,
}

/// The blocks produced by one section builder
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

impl Fragment {
    pub fn new(kind: SectionKind, blocks: Vec<Block>) -> Self {
        Self { kind, blocks }
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(Block::as_table)
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(Block::as_paragraph)
    }
}

/// Page size and margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_right: f32,
}

impl PageGeometry {
    /// A4 portrait with uniform margins
    pub fn a4(margin: f32) -> Self {
        Self {
            width: 595.28,
            height: 841.89,
            margin_top: margin,
            margin_bottom: margin,
            margin_left: margin,
            margin_right: margin,
        }
    }

    pub fn frame_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn frame_height(&self) -> f32 {
        self.height - self.margin_top - self.margin_bottom
    }
}

/// A composed quotation ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteDocument {
    pub title: String,
    pub page: PageGeometry,
    pub sections: Vec<Fragment>,
}

impl QuoteDocument {
    /// All blocks in document order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.sections.iter().flat_map(|section| section.blocks.iter())
    }

    pub fn section(&self, kind: SectionKind) -> Option<&Fragment> {
        self.sections.iter().find(|section| section.kind == kind)
    }

    pub fn section_kinds(&self) -> Vec<SectionKind> {
        self.sections.iter().map(|section| section.kind).collect()
    }
}
