//! printpdf-backed typesetter
//!
//! Blocks are laid out top to bottom inside the page frame. Positions are
//! tracked in points from the top edge of the page and converted to
//! printpdf's bottom-left millimetre coordinates only when drawing.

use std::io::Cursor;

use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{
    BuiltinFont, Color as PdfColor, Image, ImageTransform, IndirectFontRef, Line, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Point, Polygon, Rgb,
};
use tracing::{debug, warn};

use domain_quotation::{
    Align, Block, Cell, CellContent, Color, DocumentRenderer, FontWeight, ImageBlock,
    Padding, PageGeometry, Paragraph, QuotationError, QuoteDocument, Row, Rule, Table,
    TextStyle,
};

use crate::error::RenderError;
use crate::metrics::{sanitize, text_width, wrap};

const MM_PER_POINT: f32 = 25.4 / 72.0;

/// Share of the font size below the baseline
const DESCENT: f32 = 0.21;

/// Rounding slack when comparing summed line heights against free space
const FIT_TOLERANCE: f32 = 0.01;

fn mm(points: f32) -> Mm {
    Mm(points * MM_PER_POINT)
}

fn pdf_color(color: Color) -> PdfColor {
    PdfColor::Rgb(Rgb::new(color.r, color.g, color.b, None))
}

fn aligned_x(left: f32, available: f32, used: f32, align: Align) -> f32 {
    match align {
        Align::Left => left,
        Align::Center => left + (available - used) / 2.0,
        Align::Right => left + available - used,
    }
}

/// Page count and header repetitions of one rendering pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub pages: usize,
    /// Header rows redrawn after a table crossed a page break
    pub repeated_header_rows: usize,
    /// Rows taller than a page, continued on the next one
    pub split_rows: usize,
}

/// Rendered bytes plus layout statistics
#[derive(Debug, Clone)]
pub struct RenderOutput {
    pub bytes: Vec<u8>,
    pub stats: RenderStats,
}

/// Renders quotations to PDF with the built-in Helvetica fonts
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders `document` and reports how it was paginated
    pub fn render_with_stats(&self, document: &QuoteDocument) -> Result<RenderOutput, RenderError> {
        if document.sections.iter().all(|section| section.blocks.is_empty()) {
            return Err(RenderError::EmptyDocument);
        }

        let geometry = document.page;
        let (doc, page, layer) = PdfDocument::new(
            document.title.clone(),
            mm(geometry.width),
            mm(geometry.height),
            "Page 1",
        );

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| RenderError::Font(format!("{:?}", e)))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| RenderError::Font(format!("{:?}", e)))?,
        };
        let layer = doc.get_page(page).get_layer(layer);

        let stats = {
            let mut canvas = Canvas::new(&doc, geometry, fonts, layer);
            for block in document.blocks() {
                canvas.block(block);
            }
            canvas.stats
        };

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| RenderError::Pdf(format!("{:?}", e)))?;

        debug!(
            title = %document.title,
            pages = stats.pages,
            size = bytes.len(),
            "Rendered PDF"
        );

        Ok(RenderOutput { bytes, stats })
    }
}

impl DocumentRenderer for PdfRenderer {
    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn render(&self, document: &QuoteDocument) -> Result<Vec<u8>, QuotationError> {
        Ok(self.render_with_stats(document)?.bytes)
    }
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl Fonts {
    fn get(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// One wrapped line of a text cell
#[derive(Debug, Clone)]
struct SetLine {
    text: String,
    style: TextStyle,
}

#[derive(Debug, Clone)]
enum MeasuredContent<'a> {
    Empty,
    Lines(Vec<SetLine>),
    Image(&'a ImageBlock),
}

impl MeasuredContent<'_> {
    fn height(&self) -> f32 {
        match self {
            MeasuredContent::Empty => 0.0,
            MeasuredContent::Lines(lines) => lines.iter().map(|line| line.style.leading).sum(),
            MeasuredContent::Image(image) => image.height,
        }
    }
}

#[derive(Debug, Clone)]
struct MeasuredCell<'a> {
    cell: &'a Cell,
    x: f32,
    width: f32,
    content: MeasuredContent<'a>,
}

impl<'a> MeasuredCell<'a> {
    fn with_content(&self, content: MeasuredContent<'a>) -> Self {
        Self {
            content,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone)]
struct MeasuredRow<'a> {
    row: &'a Row,
    cells: Vec<MeasuredCell<'a>>,
    height: f32,
}

impl<'a> MeasuredRow<'a> {
    /// Sizes the row to its tallest non-empty cell
    fn new(row: &'a Row, cells: Vec<MeasuredCell<'a>>, padding: Padding) -> Self {
        let tallest = cells
            .iter()
            .filter(|cell| !matches!(cell.content, MeasuredContent::Empty))
            .map(|cell| cell.content.height() + padding.top + padding.bottom)
            .fold(0.0_f32, f32::max);

        Self {
            row,
            height: tallest.max(row.min_height),
            cells,
        }
    }

    /// Splits the row at `available` points
    ///
    /// Every text cell keeps as many lines as fit, and at least one. Images
    /// stay in the first part. Returns the remainder only when some cell
    /// still has lines left to draw.
    fn split(&self, available: f32, padding: Padding) -> (Self, Option<Self>) {
        let budget = available - padding.top - padding.bottom;
        let mut head = Vec::with_capacity(self.cells.len());
        let mut rest = Vec::with_capacity(self.cells.len());
        let mut carried = false;

        for cell in &self.cells {
            match &cell.content {
                MeasuredContent::Lines(lines) => {
                    let mut used = 0.0;
                    let mut fit = 0;
                    for line in lines {
                        if fit > 0 && used + line.style.leading > budget {
                            break;
                        }
                        used += line.style.leading;
                        fit += 1;
                    }
                    let (drawn, left_over) = lines.split_at(fit);
                    head.push(cell.with_content(MeasuredContent::Lines(drawn.to_vec())));
                    rest.push(if left_over.is_empty() {
                        cell.with_content(MeasuredContent::Empty)
                    } else {
                        carried = true;
                        cell.with_content(MeasuredContent::Lines(left_over.to_vec()))
                    });
                }
                _ => {
                    head.push(cell.clone());
                    rest.push(cell.with_content(MeasuredContent::Empty));
                }
            }
        }

        let head = MeasuredRow::new(self.row, head, padding);
        let rest = carried.then(|| MeasuredRow::new(self.row, rest, padding));
        (head, rest)
    }
}

struct Canvas<'a> {
    doc: &'a PdfDocumentReference,
    geometry: PageGeometry,
    fonts: Fonts,
    layer: PdfLayerReference,
    /// Distance of the next free line from the top edge
    cursor: f32,
    stats: RenderStats,
}

impl<'a> Canvas<'a> {
    fn new(
        doc: &'a PdfDocumentReference,
        geometry: PageGeometry,
        fonts: Fonts,
        layer: PdfLayerReference,
    ) -> Self {
        Self {
            doc,
            geometry,
            fonts,
            layer,
            cursor: geometry.margin_top,
            stats: RenderStats {
                pages: 1,
                ..RenderStats::default()
            },
        }
    }

    fn bottom(&self) -> f32 {
        self.geometry.height - self.geometry.margin_bottom
    }

    fn remaining(&self) -> f32 {
        self.bottom() - self.cursor
    }

    fn at_page_top(&self) -> bool {
        self.cursor <= self.geometry.margin_top + f32::EPSILON
    }

    fn new_page(&mut self) {
        self.stats.pages += 1;
        let (page, layer) = self.doc.add_page(
            mm(self.geometry.width),
            mm(self.geometry.height),
            format!("Page {}", self.stats.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.cursor = self.geometry.margin_top;
    }

    /// Starts a new page unless `height` fits or the page is still empty
    fn ensure(&mut self, height: f32) {
        if height > self.remaining() && !self.at_page_top() {
            self.new_page();
        }
    }

    fn point(&self, x: f32, y: f32) -> (Point, bool) {
        (Point::new(mm(x), mm(self.geometry.height - y)), false)
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(paragraph) => self.paragraph(paragraph),
            Block::Table(table) => self.table(table),
            Block::Rule(rule) => self.rule(rule),
            Block::Spacer(height) => {
                if self.cursor + height > self.bottom() {
                    self.new_page();
                } else {
                    self.cursor += height;
                }
            }
        }
    }

    fn paragraph(&mut self, paragraph: &Paragraph) {
        let left = self.geometry.margin_left;
        let width = self.geometry.frame_width();
        let style = paragraph.style;

        for line in wrap(&sanitize(&paragraph.text), width, style.size, style.weight) {
            self.ensure(style.leading);
            let used = text_width(&line, style.size, style.weight);
            let x = aligned_x(left, width, used, style.align);
            let top = self.cursor;
            self.text(&line, x, top, &style);
            self.cursor += style.leading;
        }
    }

    fn rule(&mut self, rule: &Rule) {
        self.ensure(rule.thickness);
        let x = aligned_x(
            self.geometry.margin_left,
            self.geometry.frame_width(),
            rule.width,
            Align::Center,
        );
        let y = self.cursor + rule.thickness / 2.0;

        self.layer.set_outline_color(pdf_color(rule.color));
        self.layer.set_outline_thickness(rule.thickness);
        self.layer.add_line(Line {
            points: vec![self.point(x, y), self.point(x + rule.width, y)],
            is_closed: false,
        });
        self.cursor += rule.thickness;
    }

    fn table(&mut self, table: &Table) {
        let left = aligned_x(
            self.geometry.margin_left,
            self.geometry.frame_width(),
            table.total_width(),
            table.align,
        );
        let rows = measure_table(table, left);
        let header_rows = table.header_rows.min(rows.len());

        for (index, row) in rows.iter().enumerate() {
            let headers = if index >= header_rows { &rows[..header_rows] } else { &[][..] };
            let mut pending = row.clone();
            let mut fresh = self.at_page_top();

            loop {
                if pending.height <= self.remaining() {
                    self.row(table, left, &pending);
                    break;
                }

                let (head, rest) = pending.split(self.remaining(), table.padding);
                let starts_here = head.height <= self.remaining() + FIT_TOLERANCE
                    && pending.height > self.table_room(headers);
                if !fresh && !starts_here {
                    self.continue_table(table, left, headers);
                    fresh = true;
                    continue;
                }

                self.row(table, left, &head);
                match rest {
                    Some(rest) => {
                        self.stats.split_rows += 1;
                        self.continue_table(table, left, headers);
                        fresh = true;
                        pending = rest;
                    }
                    None => break,
                }
            }
        }
    }

    /// Height left for body rows on a new page below `headers`
    fn table_room(&self, headers: &[MeasuredRow<'_>]) -> f32 {
        let repeated: f32 = headers.iter().map(|header| header.height).sum();
        self.bottom() - self.geometry.margin_top - repeated
    }

    /// Starts a new page and redraws `headers` at its top
    fn continue_table(&mut self, table: &Table, left: f32, headers: &[MeasuredRow<'_>]) {
        self.new_page();
        for header in headers {
            self.row(table, left, header);
            self.stats.repeated_header_rows += 1;
        }
    }

    fn row(&mut self, table: &Table, left: f32, row: &MeasuredRow<'_>) {
        let top = self.cursor;
        let padding = table.padding;

        if let Some(background) = row.row.background {
            self.fill_rect(left, top, table.total_width(), row.height, background);
        }
        for cell in &row.cells {
            if let Some(background) = cell.cell.background {
                self.fill_rect(cell.x, top, cell.width, row.height, background);
            }
        }

        for cell in &row.cells {
            let inner_left = cell.x + padding.left;
            let inner_width = (cell.width - padding.left - padding.right).max(0.0);
            let mut y = top + padding.top;

            match &cell.content {
                MeasuredContent::Empty => {}
                MeasuredContent::Lines(lines) => {
                    for line in lines {
                        let style = line.style;
                        let used = text_width(&line.text, style.size, style.weight);
                        let x = aligned_x(inner_left, inner_width, used, style.align);
                        self.text(&line.text, x, y, &style);
                        y += style.leading;
                    }
                }
                MeasuredContent::Image(image) => {
                    let x = aligned_x(inner_left, inner_width, image.width, image.align);
                    self.image(image, x, y);
                }
            }
        }

        if let Some(grid) = table.grid {
            if row.row.ruled {
                for cell in &row.cells {
                    self.stroke_rect(cell.x, top, cell.width, row.height, grid.width, grid.color);
                }
            }
        }

        self.cursor += row.height;
    }

    /// Draws one line of text whose line box starts `top` points below the page top
    fn text(&self, line: &str, x: f32, top: f32, style: &TextStyle) {
        if line.is_empty() {
            return;
        }
        let baseline = top + (style.leading + style.size) / 2.0 - style.size * DESCENT;
        self.layer.set_fill_color(pdf_color(style.color));
        self.layer.use_text(
            line,
            style.size,
            mm(x),
            mm(self.geometry.height - baseline),
            self.fonts.get(style.weight),
        );
    }

    fn image(&self, block: &ImageBlock, x: f32, top: f32) {
        let decoder = match PngDecoder::new(Cursor::new(block.png.as_ref())) {
            Ok(decoder) => decoder,
            Err(err) => {
                warn!(error = %err, "Skipping undecodable logo");
                return;
            }
        };
        let image = match Image::try_from(decoder) {
            Ok(image) => image,
            Err(err) => {
                warn!(error = %err, "Skipping undecodable logo");
                return;
            }
        };

        let pixels_wide = image.image.width.0 as f32;
        let pixels_high = image.image.height.0 as f32;
        if pixels_wide <= 0.0 || pixels_high <= 0.0 {
            warn!("Skipping empty logo");
            return;
        }

        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(mm(x)),
                translate_y: Some(mm(self.geometry.height - top - block.height)),
                scale_x: Some(block.width / pixels_wide),
                scale_y: Some(block.height / pixels_high),
                dpi: Some(72.0),
                ..Default::default()
            },
        );
    }

    fn rect_ring(&self, x: f32, top: f32, width: f32, height: f32) -> Vec<(Point, bool)> {
        vec![
            self.point(x, top),
            self.point(x + width, top),
            self.point(x + width, top + height),
            self.point(x, top + height),
        ]
    }

    fn fill_rect(&self, x: f32, top: f32, width: f32, height: f32, color: Color) {
        self.layer.set_fill_color(pdf_color(color));
        self.layer.add_polygon(Polygon {
            rings: vec![self.rect_ring(x, top, width, height)],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn stroke_rect(&self, x: f32, top: f32, width: f32, height: f32, thickness: f32, color: Color) {
        self.layer.set_outline_color(pdf_color(color));
        self.layer.set_outline_thickness(thickness);
        self.layer.add_line(Line {
            points: self.rect_ring(x, top, width, height),
            is_closed: true,
        });
    }
}

/// Wraps every cell and sizes every row of `table`
fn measure_table(table: &Table, left: f32) -> Vec<MeasuredRow<'_>> {
    let padding = table.padding;
    let mut offsets = Vec::with_capacity(table.column_widths.len() + 1);
    let mut x = left;
    offsets.push(x);
    for width in &table.column_widths {
        x += width;
        offsets.push(x);
    }
    let last = offsets.len() - 1;

    table
        .rows
        .iter()
        .map(|row| {
            let mut column = 0;
            let cells: Vec<MeasuredCell<'_>> = row
                .cells
                .iter()
                .map(|cell| {
                    let start = column.min(last);
                    let end = (column + cell.col_span).min(last);
                    column += cell.col_span;

                    let width = offsets[end] - offsets[start];
                    let inner = (width - padding.left - padding.right).max(1.0);
                    let content = match &cell.content {
                        CellContent::Empty => MeasuredContent::Empty,
                        CellContent::Image(image) => MeasuredContent::Image(image),
                        CellContent::Text(paragraphs) => MeasuredContent::Lines(
                            paragraphs
                                .iter()
                                .flat_map(|p| {
                                    wrap(&sanitize(&p.text), inner, p.style.size, p.style.weight)
                                        .into_iter()
                                        .map(|text| SetLine { text, style: p.style })
                                })
                                .collect(),
                        ),
                    };

                    MeasuredCell {
                        cell,
                        x: offsets[start],
                        width,
                        content,
                    }
                })
                .collect();

            MeasuredRow::new(row, cells, padding)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_quotation::{Fragment, SectionKind};

    fn document(blocks: Vec<Block>) -> QuoteDocument {
        QuoteDocument {
            title: "Test".to_string(),
            page: PageGeometry::a4(25.0),
            sections: vec![Fragment::new(SectionKind::Disclaimer, blocks)],
        }
    }

    fn line_count(cell: &MeasuredCell<'_>) -> usize {
        match &cell.content {
            MeasuredContent::Lines(lines) => lines.len(),
            _ => 0,
        }
    }

    fn tall_table(words: usize) -> Table {
        let style = TextStyle::new(8.0, 10.0);
        let text = vec!["excess"; words].join(" ");
        Table::new(vec![100.0, 100.0])
            .with_rows(vec![
                Row::new(vec![Cell::text("BENEFIT", style), Cell::text("CIC", style)]),
                Row::new(vec![Cell::text("Own Damage", style), Cell::text(text, style)]),
            ])
            .with_header_rows(1)
            .with_grid(0.5, Color::BLACK)
    }

    #[test]
    fn test_measure_spans_cover_table_width() {
        let table = Table::new(vec![100.0, 50.0, 50.0]).with_rows(vec![
            Row::new(vec![
                Cell::text("Insured Full Names", TextStyle::new(8.0, 10.0)),
                Cell::text("Jane", TextStyle::new(8.0, 10.0)).spanning(2),
            ]),
        ]);
        let rows = measure_table(&table, 10.0);
        assert_eq!(rows[0].cells[1].x, 110.0);
        assert_eq!(rows[0].cells[1].width, 100.0);
    }

    #[test]
    fn test_row_height_is_tallest_cell() {
        let style = TextStyle::new(8.0, 10.0);
        let table = Table::new(vec![60.0, 200.0]).with_rows(vec![Row::new(vec![
            Cell::text("a b c d e f g h i j k l m n o p", style),
            Cell::text("short", style),
        ])]);
        let rows = measure_table(&table, 0.0);
        let wrapped = line_count(&rows[0].cells[0]) as f32;
        assert!(wrapped > 1.0);
        assert_eq!(rows[0].height, wrapped * 10.0 + 6.0);
    }

    #[test]
    fn test_empty_row_uses_min_height() {
        let table = Table::new(vec![100.0])
            .with_rows(vec![Row::new(vec![Cell::empty()]).with_min_height(10.0)]);
        assert_eq!(measure_table(&table, 0.0)[0].height, 10.0);
    }

    #[test]
    fn test_split_keeps_every_line() {
        let table = tall_table(600);
        let rows = measure_table(&table, 0.0);
        let row = &rows[1];
        let total = line_count(&row.cells[1]);

        let (head, rest) = row.split(200.0, table.padding);
        let rest = rest.unwrap();
        assert!(head.height <= 200.0);
        assert_eq!(line_count(&head.cells[0]), 1);
        assert_eq!(line_count(&head.cells[1]) + line_count(&rest.cells[1]), total);
        assert!(matches!(rest.cells[0].content, MeasuredContent::Empty));
    }

    #[test]
    fn test_split_of_short_row_has_no_remainder() {
        let table = tall_table(3);
        let rows = measure_table(&table, 0.0);
        let (head, rest) = rows[1].split(200.0, table.padding);
        assert!(rest.is_none());
        assert_eq!(head.height, rows[1].height);
    }

    #[test]
    fn test_row_taller_than_page_continues() {
        let output = PdfRenderer::new()
            .render_with_stats(&document(vec![Block::Table(tall_table(3_000))]))
            .unwrap();
        assert!(output.stats.pages >= 2);
        assert_eq!(output.stats.split_rows, output.stats.pages - 1);
        assert_eq!(output.stats.repeated_header_rows, output.stats.pages - 1);
    }

    #[test]
    fn test_empty_document_rejected() {
        let result = PdfRenderer::new().render_with_stats(&document(Vec::new()));
        assert!(matches!(result, Err(RenderError::EmptyDocument)));
    }

    #[test]
    fn test_single_page() {
        let output = PdfRenderer::new()
            .render_with_stats(&document(vec![Block::Paragraph(Paragraph::new(
                "Quotation",
                TextStyle::new(14.0, 17.0),
            ))]))
            .unwrap();
        assert!(output.bytes.starts_with(b"%PDF"));
        assert_eq!(output.stats.pages, 1);
    }

    #[test]
    fn test_long_text_paginates() {
        let blocks = (0..200)
            .map(|i| Block::Paragraph(Paragraph::new(format!("Line {}", i), TextStyle::new(8.0, 10.0))))
            .collect();
        let output = PdfRenderer::new().render_with_stats(&document(blocks)).unwrap();
        assert!(output.stats.pages >= 3);
    }

    #[test]
    fn test_header_rows_repeat_across_pages() {
        let style = TextStyle::new(7.0, 8.5);
        let mut rows = vec![Row::new(vec![Cell::text("BENEFIT", style), Cell::text("CIC", style)])];
        rows.extend((0..150).map(|i| {
            Row::new(vec![Cell::text(format!("Row {}", i), style), Cell::text("Kes. 1", style)])
        }));
        let table = Table::new(vec![108.0, 432.0])
            .with_rows(rows)
            .with_header_rows(1)
            .with_grid(0.5, Color::BLACK);

        let output = PdfRenderer::new()
            .render_with_stats(&document(vec![Block::Table(table)]))
            .unwrap();
        assert!(output.stats.pages >= 2);
        assert_eq!(output.stats.repeated_header_rows, output.stats.pages - 1);
    }

    #[test]
    fn test_bad_logo_is_skipped() {
        let table = Table::new(vec![252.0, 252.0]).with_rows(vec![Row::new(vec![
            Cell::text("Broker", TextStyle::new(8.0, 10.0)),
            Cell::image(ImageBlock {
                png: vec![1u8, 2, 3, 4].into(),
                width: 144.0,
                height: 50.4,
                align: Align::Right,
            }),
        ])]);
        let output = PdfRenderer::new()
            .render_with_stats(&document(vec![Block::Table(table)]))
            .unwrap();
        assert!(output.bytes.starts_with(b"%PDF"));
    }
}
