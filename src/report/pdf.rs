use anyhow::{Context, Result};
use printpdf::path::{PaintMode, WindingOrder};
use printpdf::{BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rect, Rgb};

use crate::marks::types::ReportSummary;
use super::{table_rows, TABLE_HEADER};

// US letter
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;

const MARGIN_LEFT: f32 = 20.0;
const TABLE_TOP: f32 = 250.0;
const ROW_HEIGHT: f32 = 12.0;
const COLUMN_WIDTHS: [f32; 4] = [50.0, 45.0, 45.0, 35.0];

const HEADER_FONT_SIZE: f32 = 14.0;
const BODY_FONT_SIZE: f32 = 12.0;

// Rough advance width of Helvetica at 1pt, in mm, for centering text
// without font metrics.
const APPROX_CHAR_WIDTH: f32 = 0.18;

/// Render the report as PDF bytes: grid-bordered table with a grey bold
/// header row and a shaded totals row, matching the on-screen table
/// cell for cell. The caller decides where (and whether) to write it.
pub fn render_pdf(summary: &ReportSummary) -> Result<Vec<u8>> {
    let data = table_rows(summary);

    let (doc, page, layer) =
        PdfDocument::new("Marks Report", Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "report");
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("Failed to load Helvetica")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("Failed to load Helvetica-Bold")?;

    let row_count = data.len() + 1; // header + data rows

    // Backgrounds first, then grid, then text.
    fill_row(&layer, 0, Rgb::new(0.5, 0.5, 0.5, None));
    fill_row(&layer, row_count - 1, Rgb::new(0.96, 0.96, 0.86, None));
    draw_grid(&layer, row_count);

    layer.set_fill_color(Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None)));
    draw_row(&layer, 0, &TABLE_HEADER.map(String::from), &bold, HEADER_FONT_SIZE);

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    for (i, row) in data.iter().enumerate() {
        draw_row(&layer, i + 1, row, &regular, BODY_FONT_SIZE);
    }

    doc.save_to_bytes().context("Failed to serialize PDF")
}

fn row_top(index: usize) -> f32 {
    TABLE_TOP - index as f32 * ROW_HEIGHT
}

fn table_right() -> f32 {
    MARGIN_LEFT + COLUMN_WIDTHS.iter().sum::<f32>()
}

fn fill_row(layer: &PdfLayerReference, index: usize, color: Rgb) {
    layer.set_fill_color(Color::Rgb(color));
    let rect = Rect::new(
        Mm(MARGIN_LEFT),
        Mm(row_top(index) - ROW_HEIGHT),
        Mm(table_right()),
        Mm(row_top(index)),
    )
    .with_mode(PaintMode::Fill)
    .with_winding(WindingOrder::NonZero);
    layer.add_rect(rect);
}

fn draw_grid(layer: &PdfLayerReference, row_count: usize) {
    layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.set_outline_thickness(1.0);

    let bottom = row_top(row_count);
    for i in 0..=row_count {
        let y = row_top(i);
        stroke_line(layer, MARGIN_LEFT, y, table_right(), y);
    }

    let mut x = MARGIN_LEFT;
    stroke_line(layer, x, TABLE_TOP, x, bottom);
    for width in COLUMN_WIDTHS {
        x += width;
        stroke_line(layer, x, TABLE_TOP, x, bottom);
    }
}

fn stroke_line(layer: &PdfLayerReference, x1: f32, y1: f32, x2: f32, y2: f32) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x1), Mm(y1)), false),
            (Point::new(Mm(x2), Mm(y2)), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

fn draw_row(
    layer: &PdfLayerReference,
    index: usize,
    cells: &[String; 4],
    font: &IndirectFontRef,
    font_size: f32,
) {
    let baseline = row_top(index) - ROW_HEIGHT + 4.0;

    let mut x = MARGIN_LEFT;
    for (cell, width) in cells.iter().zip(COLUMN_WIDTHS) {
        // Builtin fonts are WinAnsi-encoded; the arrow in converted
        // rows has no code point there.
        let text = cell.replace('→', "->");
        let text_width = text.chars().count() as f32 * APPROX_CHAR_WIDTH * font_size;
        let text_x = x + (width - text_width).max(0.0) / 2.0;
        layer.use_text(text, font_size, Mm(text_x), Mm(baseline), font);
        x += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::{aggregate, Subject, SubjectScore};

    fn summary() -> ReportSummary {
        let scores: Vec<SubjectScore> = Subject::ALL
            .iter()
            .map(|&subject| SubjectScore { subject, marks: 50.0, maximum: 100.0 })
            .collect();
        aggregate(&scores, &[])
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = render_pdf(&summary()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_render_embeds_builtin_fonts() {
        let bytes = render_pdf(&summary()).unwrap();
        let haystack = String::from_utf8_lossy(&bytes);
        assert!(haystack.contains("Helvetica"));
    }
}
