use jiff::civil::date;
use quotation_core::models::quotation::{ColumnHeaders, DEFAULT_HEADERS, QuotationRequest, RowRecord};
use quotation_export::config::RenderConfig;
use quotation_export::layout::{
    column_widths, layout_quotation, DrawOp, Frame, ImageAsset, PageLayout, TableGeometry,
    COLUMN_RATIOS, PAGE_WIDTH, ROW_HEIGHT, TABLE_WIDTH,
};
use quotation_export::styles::Theme;
use quotation_export::{DateSource, Renderer};

const EPS: f32 = 1e-3;

fn row(vehicle: &str, r1: &str, r2: &str, r3: &str) -> RowRecord {
    RowRecord {
        vehicle: vehicle.into(),
        rate1: r1.into(),
        rate2: r2.into(),
        rate3: r3.into(),
    }
}

fn acme(rows: Vec<RowRecord>, notes: &[&str]) -> QuotationRequest {
    QuotationRequest {
        recipient_company: "Acme Corp".into(),
        recipient_location: "Pune".into(),
        column_headers: ColumnHeaders::from_submitted(["car", "8 hrs", "hrs", "km"]),
        rows,
        notes: notes.iter().map(|n| n.to_string()).collect(),
    }
}

fn render_layout(request: &QuotationRequest) -> PageLayout {
    layout_quotation(request, &RenderConfig::with_asset_dir("static"), date(2026, 3, 9))
}

fn text_op<'a>(layout: &'a PageLayout, needle: &str) -> (&'a str, f32, f32) {
    layout
        .ops
        .iter()
        .find_map(|op| match op {
            DrawOp::Text { text, x, y, .. } if text == needle => Some((text.as_str(), *x, *y)),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no text op {needle:?}"))
}

#[test]
fn column_widths_for_standard_table() {
    let widths = column_widths(TABLE_WIDTH, &COLUMN_RATIOS);
    for (got, want) in widths.iter().zip([68.0, 42.5, 34.0, 25.5]) {
        assert!((got - want).abs() < EPS, "{got} != {want}");
    }
    assert!((widths.iter().sum::<f32>() - TABLE_WIDTH).abs() < EPS);
}

#[test]
fn column_edges_are_running_sums() {
    let table = TableGeometry::new(173.0, 0);
    let want = [20.0, 88.0, 130.5, 164.5];
    for (got, want) in table.column_x.iter().zip(want) {
        assert!((got - want).abs() < EPS);
    }
}

#[test]
fn table_height_and_dividers_follow_row_count() {
    for data_rows in [0usize, 1, 2, 7] {
        let rows = (0..data_rows).map(|i| row(&format!("V{i}"), "1", "2", "3")).collect();
        let layout = render_layout(&acme(rows, &[]));
        let table = layout.table;

        assert!((table.height() - (1 + data_rows) as f32 * ROW_HEIGHT).abs() < EPS);

        let rects: Vec<&Frame> = layout.rects().collect();
        assert_eq!(rects.len(), 1);
        assert!((rects[0].height - table.height()).abs() < EPS);
        assert!((rects[0].y - table.bottom()).abs() < EPS);

        let (horizontal, vertical): (Vec<_>, Vec<_>) =
            layout.lines().partition(|(from, to)| (from.1 - to.1).abs() < EPS);
        // Dividers plus the outline's bottom edge: one boundary under each row.
        assert_eq!(horizontal.len(), data_rows);
        assert_eq!(horizontal.len() + 1, table.total_rows());
        assert_eq!(vertical.len(), 3);
        for (from, to) in vertical {
            assert!((from.1 - table.top).abs() < EPS);
            assert!((to.1 - table.bottom()).abs() < EPS);
        }
    }
}

#[test]
fn borders_are_drawn_before_any_table_text() {
    let layout = render_layout(&acme(vec![row("Sedan", "2500", "200", "15")], &[]));
    let last_border = layout
        .ops
        .iter()
        .rposition(|op| matches!(op, DrawOp::Line { .. } | DrawOp::Rect { .. }))
        .unwrap();
    let first_header = layout
        .ops
        .iter()
        .position(|op| matches!(op, DrawOp::Text { text, .. } if text == "CAR"))
        .unwrap();
    assert!(last_border < first_header);
}

#[test]
fn submitted_headers_are_rendered() {
    let layout = render_layout(&acme(vec![], &[]));
    let table = layout.table;
    for (column, header) in ["CAR", "8 HRS", "HRS", "KM"].into_iter().enumerate() {
        let (_, x, y) = text_op(&layout, header);
        assert!((x - table.cell_x(column)).abs() < EPS);
        assert!((y - (table.top - 6.5)).abs() < EPS);
    }
}

#[test]
fn fallback_headers_are_rendered_verbatim() {
    let mut request = acme(vec![], &[]);
    request.column_headers = ColumnHeaders::from_submitted(["only", "two"]);
    let layout = render_layout(&request);
    for header in DEFAULT_HEADERS {
        text_op(&layout, header);
    }
    assert!(!layout.texts().any(|t| t == "ONLY"));
}

#[test]
fn acme_scenario_has_three_table_rows_and_one_bullet() {
    let request = acme(
        vec![row("Sedan", "2500", "200", "15"), row("SUV", "3500", "250", "18")],
        &["Toll and parking extra"],
    );
    let layout = render_layout(&request);
    let table = layout.table;

    assert_eq!(table.total_rows(), 3);
    let bullets: Vec<&str> = layout.texts().filter(|t| t.starts_with('\u{2022}')).collect();
    assert_eq!(bullets, ["\u{2022} Toll and parking extra"]);
    assert_eq!(layout.images().count(), 2);
}

#[test]
fn data_rows_sit_on_their_row_lines() {
    let request = acme(
        vec![row("Sedan", "2500", "200", "15"), row("SUV", "3500", "250", "18")],
        &[],
    );
    let layout = render_layout(&request);
    let table = layout.table;

    let (_, _, sedan_y) = text_op(&layout, "Sedan");
    let (_, x, suv_y) = text_op(&layout, "SUV");
    assert!((sedan_y - (table.top - 16.0 + 3.0)).abs() < EPS);
    assert!((suv_y - (table.top - 24.0 + 3.0)).abs() < EPS);
    assert!((x - 22.0).abs() < EPS);

    let (_, rate_x, _) = text_op(&layout, "3500");
    assert!((rate_x - (88.0 + 2.0)).abs() < EPS);
}

#[test]
fn every_cell_uses_price_colour() {
    let request = acme(vec![row("Sedan", "2500", "200", "15")], &[]);
    let layout = render_layout(&request);
    let price = Theme::default().price_text;

    for cell in ["Sedan", "2500", "200", "15"] {
        let color = layout
            .ops
            .iter()
            .find_map(|op| match op {
                DrawOp::Text { text, color, .. } if text == cell => Some(*color),
                _ => None,
            })
            .unwrap();
        assert_eq!(color, price);
    }
}

#[test]
fn notes_advance_downwards_in_order() {
    let layout = render_layout(&acme(vec![], &["first", "second", "third"]));
    let ys: Vec<f32> = ["first", "second", "third"]
        .iter()
        .map(|n| text_op(&layout, &format!("\u{2022} {n}")).2)
        .collect();
    assert!((ys[0] - ys[1] - 6.0).abs() < EPS);
    assert!((ys[1] - ys[2] - 6.0).abs() < EPS);

    let table = layout.table;
    assert!((ys[0] - (table.bottom() - 10.0)).abs() < EPS);
}

#[test]
fn footer_follows_last_note() {
    let layout = render_layout(&acme(vec![], &["only note"]));
    let (_, _, note_y) = text_op(&layout, "\u{2022} only note");
    let (_, _, gst_y) = text_op(&layout, "JAGTAP TRAVELS GST NO - 27AKGPJ1825N1ZX");
    let (_, _, ifsc_y) = text_op(&layout, "IFS CODE - UTIB0002985");
    assert!((note_y - 6.0 - 10.0 - gst_y).abs() < EPS);
    assert!((gst_y - 18.0 - ifsc_y).abs() < EPS);
}

#[test]
fn fixed_header_block_positions() {
    let layout = render_layout(&acme(vec![], &[]));

    let (_, date_x, date_y) = text_op(&layout, "Date : 09-03-2026");
    assert!((date_y - 232.0).abs() < EPS);
    assert!(date_x > PAGE_WIDTH / 2.0 && date_x < 190.0);

    let (title, title_x, title_y) = text_op(&layout, "Quotation For Employee Transport Service");
    assert!((title_y - 222.0).abs() < EPS);
    let width = quotation_export::metrics::text_width_mm(title, 14.0);
    assert!((title_x + width / 2.0 - PAGE_WIDTH / 2.0).abs() < EPS);

    assert!((text_op(&layout, "TO,").2 - 202.0).abs() < EPS);
    assert!((text_op(&layout, "Acme Corp").2 - 195.0).abs() < EPS);
    assert!((text_op(&layout, "Pune").2 - 188.0).abs() < EPS);
    assert!((layout.table.top - 173.0).abs() < EPS);

    let images: Vec<_> = layout.images().collect();
    assert_eq!(images[0], (ImageAsset::Letterhead, &Frame::LETTERHEAD));
    assert_eq!(images[1], (ImageAsset::Stamp, &Frame::STAMP));
}

#[test]
fn same_request_lays_out_identically_with_fixed_date() {
    let request = acme(vec![row("Sedan", "2500", "200", "15")], &["note"]);
    let renderer = Renderer::new(RenderConfig::with_asset_dir("static"))
        .with_date_source(DateSource::Fixed(date(2026, 1, 2)));

    assert_eq!(renderer.layout(&request), renderer.layout(&request));
}

#[test]
fn long_cells_are_not_truncated() {
    let long = "Luxury Air-Conditioned Volvo Multi-Axle Coach 49 Seater";
    let layout = render_layout(&acme(vec![row(long, "1", "2", "3")], &[]));
    text_op(&layout, long);
}
