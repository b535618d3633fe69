//! Page layout for a quotation.
//!
//! [`layout_quotation`] turns a request into a flat display list in
//! millimetres (PDF orientation: origin bottom-left, y grows upwards). It is
//! pure, so the geometry can be checked without producing a PDF. The
//! [`pdf`](crate::pdf) backend replays the list in order.

use jiff::civil::Date;
use quotation_core::models::quotation::QuotationRequest;

use crate::config::RenderConfig;
use crate::metrics::text_width_mm;
use crate::styles::Rgb;

/// A4 portrait.
pub const PAGE_WIDTH: f32 = 210.0;
pub const PAGE_HEIGHT: f32 = 297.0;

const CM: f32 = 10.0;

pub const LEFT_MARGIN: f32 = 2.0 * CM;
pub const RIGHT_MARGIN: f32 = 2.0 * CM;

pub const TABLE_X: f32 = LEFT_MARGIN;
pub const TABLE_WIDTH: f32 = 17.0 * CM;
pub const ROW_HEIGHT: f32 = 0.8 * CM;
/// First column holds the vehicle label, the rest hold short figures.
pub const COLUMN_RATIOS: [f32; 4] = [0.40, 0.25, 0.20, 0.15];
pub const CELL_INSET: f32 = 0.2 * CM;
pub const HEADER_BASELINE_DROP: f32 = 0.65 * CM;
/// Data text sits this far above the row's bottom border.
pub const CELL_BASELINE_RISE: f32 = 0.3 * CM;
pub const BORDER_WIDTH_PT: f32 = 1.0;

const RECIPIENT_LINE_GAP: f32 = 0.7 * CM;
const NOTE_LINE_GAP: f32 = 0.6 * CM;
const FOOTER_LINE_GAP: f32 = 0.6 * CM;

/// A box on the page, anchored at its bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub const LETTERHEAD: Frame = Frame {
        x: 1.0 * CM,
        y: PAGE_HEIGHT - 6.0 * CM,
        width: 18.0 * CM,
        height: 5.0 * CM,
    };

    pub const STAMP: Frame = Frame {
        x: PAGE_WIDTH - 7.0 * CM,
        y: 1.5 * CM,
        width: 5.0 * CM,
        height: 4.0 * CM,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAsset {
    Letterhead,
    Stamp,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Image {
        asset: ImageAsset,
        frame: Frame,
    },
    /// `x`/`y` is the left end of the baseline; alignment is already resolved.
    Text {
        text: String,
        x: f32,
        y: f32,
        size: f32,
        color: Rgb,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        color: Rgb,
    },
    /// Stroked outline, never filled.
    Rect {
        frame: Frame,
        color: Rgb,
    },
}

/// The ordered drawing operations for the single page of a quotation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub ops: Vec<DrawOp>,
    pub table: TableGeometry,
}

impl PageLayout {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn lines(&self) -> impl Iterator<Item = ((f32, f32), (f32, f32))> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, .. } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &Frame> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Rect { frame, .. } => Some(frame),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = (ImageAsset, &Frame)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Image { asset, frame } => Some((*asset, frame)),
            _ => None,
        })
    }
}

/// Split `total` into column widths by `ratios`.
pub fn column_widths(total: f32, ratios: &[f32; 4]) -> [f32; 4] {
    ratios.map(|r| total * r)
}

/// Table placement derived from its top edge and data row count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableGeometry {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub row_height: f32,
    pub column_widths: [f32; 4],
    /// Left edge of each column.
    pub column_x: [f32; 4],
    pub data_rows: usize,
}

impl TableGeometry {
    pub fn new(top: f32, data_rows: usize) -> Self {
        let column_widths = column_widths(TABLE_WIDTH, &COLUMN_RATIOS);
        let mut column_x = [TABLE_X; 4];
        for i in 1..column_x.len() {
            column_x[i] = column_x[i - 1] + column_widths[i - 1];
        }

        Self {
            x: TABLE_X,
            top,
            width: TABLE_WIDTH,
            row_height: ROW_HEIGHT,
            column_widths,
            column_x,
            data_rows,
        }
    }

    /// Header row plus data rows.
    pub fn total_rows(&self) -> usize {
        1 + self.data_rows
    }

    pub fn height(&self) -> f32 {
        self.total_rows() as f32 * self.row_height
    }

    pub fn bottom(&self) -> f32 {
        self.top - self.height()
    }

    pub fn outline(&self) -> Frame {
        Frame {
            x: self.x,
            y: self.bottom(),
            width: self.width,
            height: self.height(),
        }
    }

    /// y of every border between two rows, top to bottom.
    pub fn row_dividers(&self) -> impl Iterator<Item = f32> + '_ {
        (1..self.total_rows()).map(|i| self.top - i as f32 * self.row_height)
    }

    /// x of every border between two columns, left to right.
    pub fn column_dividers(&self) -> impl Iterator<Item = f32> + '_ {
        self.column_x[1..].iter().copied()
    }

    pub fn header_baseline(&self) -> f32 {
        self.top - HEADER_BASELINE_DROP
    }

    /// Baseline of data row `index` (0-based, header excluded).
    pub fn row_baseline(&self, index: usize) -> f32 {
        let row_bottom = self.top - (index + 2) as f32 * self.row_height;
        row_bottom + CELL_BASELINE_RISE
    }

    pub fn cell_x(&self, column: usize) -> f32 {
        self.column_x[column] + CELL_INSET
    }
}

/// Lay out the quotation page for `request`, dated `date`.
pub fn layout_quotation(request: &QuotationRequest, config: &RenderConfig, date: Date) -> PageLayout {
    let theme = &config.theme;
    let fonts = &config.fonts;
    let text = &config.text;
    let mut ops = Vec::new();

    ops.push(DrawOp::Image {
        asset: ImageAsset::Letterhead,
        frame: Frame::LETTERHEAD,
    });

    let date_line = format!("{}{}", text.date_label, date.strftime("%d-%m-%Y"));
    let date_width = text_width_mm(&date_line, fonts.date);
    ops.push(DrawOp::Text {
        x: PAGE_WIDTH - RIGHT_MARGIN - date_width,
        y: PAGE_HEIGHT - 6.5 * CM,
        size: fonts.date,
        color: theme.table_border,
        text: date_line,
    });

    let mut y = PAGE_HEIGHT - 7.5 * CM;

    let title_width = text_width_mm(&text.title, fonts.title);
    ops.push(DrawOp::Text {
        text: text.title.clone(),
        x: PAGE_WIDTH / 2.0 - title_width / 2.0,
        y,
        size: fonts.title,
        color: theme.title,
    });
    y -= 2.0 * CM;

    let recipient = [
        text.recipient_prefix.as_str(),
        request.recipient_company.as_str(),
        request.recipient_location.as_str(),
    ];
    for (i, line) in recipient.into_iter().enumerate() {
        if i > 0 {
            y -= RECIPIENT_LINE_GAP;
        }
        ops.push(DrawOp::Text {
            text: line.to_string(),
            x: LEFT_MARGIN,
            y,
            size: fonts.body,
            color: theme.normal_text,
        });
    }
    y -= 1.5 * CM;

    let table = TableGeometry::new(y, request.rows.len());
    push_table(&mut ops, &table, request, config);
    y = table.bottom() - 1.0 * CM;

    for note in &request.notes {
        ops.push(DrawOp::Text {
            text: format!("{}{note}", text.bullet),
            x: LEFT_MARGIN,
            y,
            size: fonts.body,
            color: theme.notes_text,
        });
        y -= NOTE_LINE_GAP;
    }

    y -= 1.0 * CM;
    for (i, line) in text.footer_lines.iter().enumerate() {
        if i > 0 {
            y -= FOOTER_LINE_GAP;
        }
        ops.push(DrawOp::Text {
            text: line.clone(),
            x: LEFT_MARGIN,
            y,
            size: fonts.body,
            color: theme.footer_text,
        });
    }

    ops.push(DrawOp::Image {
        asset: ImageAsset::Stamp,
        frame: Frame::STAMP,
    });

    PageLayout {
        ops,
        table,
    }
}

/// Borders go down before any text so cell text is never painted over.
fn push_table(ops: &mut Vec<DrawOp>, table: &TableGeometry, request: &QuotationRequest, config: &RenderConfig) {
    let theme = &config.theme;
    let border = theme.table_border;

    ops.push(DrawOp::Rect {
        frame: table.outline(),
        color: border,
    });
    for y in table.row_dividers() {
        ops.push(DrawOp::Line {
            from: (table.x, y),
            to: (table.x + table.width, y),
            color: border,
        });
    }
    for x in table.column_dividers() {
        ops.push(DrawOp::Line {
            from: (x, table.top),
            to: (x, table.bottom()),
            color: border,
        });
    }

    let header_y = table.header_baseline();
    for (column, header) in request.column_headers.iter().enumerate() {
        ops.push(DrawOp::Text {
            text: header.to_string(),
            x: table.cell_x(column),
            y: header_y,
            size: config.fonts.table_header,
            color: theme.header_text,
        });
    }

    // Every cell uses the price colour, the vehicle label included.
    for (index, row) in request.rows.iter().enumerate() {
        let row_y = table.row_baseline(index);
        for (column, cell) in row.cells().into_iter().enumerate() {
            ops.push(DrawOp::Text {
                text: cell.to_string(),
                x: table.cell_x(column),
                y: row_y,
                size: config.fonts.body,
                color: theme.price_text,
            });
        }
    }
}
