use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use jiff::civil::Date;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream};
use quotation_core::models::quotation::QuotationRequest;

use crate::assets::{ColorSpace, EmbeddedImage, ImageData};
use crate::config::RenderConfig;
use crate::error::ExportError;
use crate::layout::{
    layout_quotation, DrawOp, Frame, ImageAsset, PageLayout, BORDER_WIDTH_PT, PAGE_HEIGHT,
    PAGE_WIDTH,
};
use crate::metrics::encode_win_ansi;
use crate::styles::Rgb;

const PT_PER_MM: f32 = 72.0 / 25.4;

const FONT_NAME: &str = "F1";

/// Where the printed date comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSource {
    /// The local calendar date at render time.
    Today,
    Fixed(Date),
}

/// Renders quotations into single-page PDF files.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RenderConfig,
    dates: DateSource,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            dates: DateSource::Today,
        }
    }

    pub fn with_date_source(mut self, dates: DateSource) -> Self {
        self.dates = dates;
        self
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn date(&self) -> Date {
        match self.dates {
            DateSource::Today => jiff::Zoned::now().date(),
            DateSource::Fixed(date) => date,
        }
    }

    pub fn layout(&self, request: &QuotationRequest) -> PageLayout {
        layout_quotation(request, &self.config, self.date())
    }

    /// Render `request` to a PDF at `destination`.
    ///
    /// Both images are decoded before the destination is created, so a
    /// missing asset leaves no file behind. A failure while writing may
    /// leave a truncated file.
    pub fn render(&self, request: &QuotationRequest, destination: &Path) -> Result<(), ExportError> {
        let layout = self.layout(request);
        let letterhead = EmbeddedImage::load(&self.config.assets.letterhead)?;
        let stamp = EmbeddedImage::load(&self.config.assets.stamp)?;

        tracing::info!(
            path = %destination.display(),
            rows = request.rows.len(),
            notes = request.notes.len(),
            "rendering quotation"
        );

        let mut doc = build_document(&layout, &self.config.text.title, &letterhead, &stamp)?;
        doc.compress();

        let mut writer = BufWriter::new(File::create(destination)?);
        doc.save_to(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

fn build_document(
    layout: &PageLayout,
    title: &str,
    letterhead: &EmbeddedImage,
    stamp: &EmbeddedImage,
) -> Result<Document, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let letterhead_id = add_image(&mut doc, letterhead);
    let stamp_id = add_image(&mut doc, stamp);

    let content = Content {
        operations: page_operations(layout),
    };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), pt(PAGE_WIDTH).into(), pt(PAGE_HEIGHT).into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! { FONT_NAME => font_id },
            "XObject" => dictionary! {
                image_name(ImageAsset::Letterhead) => letterhead_id,
                image_name(ImageAsset::Stamp) => stamp_id,
            },
        },
    });
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::Reference(page_id)],
            "Count" => 1,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(encode_win_ansi(title)),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

/// Add `image` as an image XObject, with its alpha plane as an indirect
/// `SMask` when it has one.
fn add_image(doc: &mut Document, image: &EmbeddedImage) -> ObjectId {
    let mut dict = dictionary! {
        "Type" => "XObject",
        "Subtype" => "Image",
        "Width" => i64::from(image.width),
        "Height" => i64::from(image.height),
        "ColorSpace" => image.color_space.pdf_name(),
        "BitsPerComponent" => 8,
    };

    if let Some(alpha) = &image.alpha {
        let mask_id = doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(image.width),
                "Height" => i64::from(image.height),
                "ColorSpace" => ColorSpace::Gray.pdf_name(),
                "BitsPerComponent" => 8,
            },
            alpha.clone(),
        ));
        dict.set("SMask", mask_id);
    }

    let stream = match &image.data {
        ImageData::Jpeg(bytes) => {
            dict.set("Filter", "DCTDecode");
            Stream::new(dict, bytes.clone()).with_compression(false)
        }
        ImageData::Samples(samples) => Stream::new(dict, samples.clone()),
    };
    doc.add_object(stream)
}

fn image_name(asset: ImageAsset) -> &'static str {
    match asset {
        ImageAsset::Letterhead => "Im1",
        ImageAsset::Stamp => "Im2",
    }
}

/// Content stream operators for `layout`, in page points.
fn page_operations(layout: &PageLayout) -> Vec<Operation> {
    let mut ops = vec![Operation::new("w", vec![BORDER_WIDTH_PT.into()])];

    for op in &layout.ops {
        match op {
            DrawOp::Image { asset, frame } => image_ops(&mut ops, *asset, frame),
            DrawOp::Text {
                text,
                x,
                y,
                size,
                color,
            } => {
                ops.push(Operation::new("BT", vec![]));
                ops.push(Operation::new("Tf", vec![FONT_NAME.into(), (*size).into()]));
                ops.push(Operation::new("rg", color_operands(*color)));
                ops.push(Operation::new("Td", vec![pt(*x).into(), pt(*y).into()]));
                ops.push(Operation::new(
                    "Tj",
                    vec![Object::string_literal(encode_win_ansi(text))],
                ));
                ops.push(Operation::new("ET", vec![]));
            }
            DrawOp::Line { from, to, color } => {
                ops.push(Operation::new("RG", color_operands(*color)));
                ops.push(Operation::new("m", vec![pt(from.0).into(), pt(from.1).into()]));
                ops.push(Operation::new("l", vec![pt(to.0).into(), pt(to.1).into()]));
                ops.push(Operation::new("S", vec![]));
            }
            DrawOp::Rect { frame, color } => {
                ops.push(Operation::new("RG", color_operands(*color)));
                ops.push(Operation::new(
                    "re",
                    vec![
                        pt(frame.x).into(),
                        pt(frame.y).into(),
                        pt(frame.width).into(),
                        pt(frame.height).into(),
                    ],
                ));
                ops.push(Operation::new("S", vec![]));
            }
        }
    }
    ops
}

/// Stretch the image to fill `frame`, ignoring its aspect ratio.
fn image_ops(ops: &mut Vec<Operation>, asset: ImageAsset, frame: &Frame) {
    ops.push(Operation::new("q", vec![]));
    ops.push(Operation::new(
        "cm",
        vec![
            pt(frame.width).into(),
            0.into(),
            0.into(),
            pt(frame.height).into(),
            pt(frame.x).into(),
            pt(frame.y).into(),
        ],
    ));
    ops.push(Operation::new("Do", vec![image_name(asset).into()]));
    ops.push(Operation::new("Q", vec![]));
}

fn color_operands(color: Rgb) -> Vec<Object> {
    let (r, g, b) = color.to_unit();
    vec![r.into(), g.into(), b.into()]
}

fn pt(mm: f32) -> f32 {
    mm * PT_PER_MM
}
