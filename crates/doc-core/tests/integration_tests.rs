//! Integration tests for doc-core
//!
//! These tests build documents through the public builder API only.

use doc_core::{
    units, Alignment, DocError, Document, DocumentBuilder, HeaderFooterType, PictureFormat,
    Region, RunContent, RunStyle, TabAlignment, TabStop,
};
use pretty_assertions::assert_eq;
use std::io::Cursor;

/// Create a small PNG image for testing
fn create_test_png(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([255, 0, 0, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}

/// Create a small JPEG image for testing
fn create_test_jpeg(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([0, 0, 255]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Jpeg)
        .unwrap();
    bytes
}

#[test]
fn test_embed_png_in_header() {
    let mut doc = Document::new();
    let header = doc.create_header(HeaderFooterType::Default);
    let paragraph = doc.create_paragraph(header);
    doc.set_alignment(paragraph, Alignment::Right);
    let run = doc.create_run(paragraph);

    doc.add_picture(
        run,
        create_test_png(20, 5),
        PictureFormat::Png,
        units::cm_to_emu(3.53),
        units::cm_to_emu(0.9),
    )
    .unwrap();

    let header = doc.header(HeaderFooterType::Default).unwrap();
    let pictures: Vec<_> = header.pictures().collect();
    assert_eq!(pictures.len(), 1);
    assert_eq!(pictures[0].format, PictureFormat::Png);
    assert_eq!(pictures[0].pixels.width, 20);
    assert_eq!(pictures[0].pixels.height, 5);
    assert_eq!(pictures[0].width, 1_270_800);
    assert_eq!(pictures[0].height, 324_000);
    assert_eq!(header.paragraphs[0].alignment, Some(Alignment::Right));
}

#[test]
fn test_embed_jpeg() {
    let mut doc = Document::new();
    let paragraph = doc.create_paragraph(Region::Body);
    let run = doc.create_run(paragraph);

    doc.add_picture(run, create_test_jpeg(8, 8), PictureFormat::Jpeg, 100, 100)
        .unwrap();

    assert_eq!(doc.run(run).pictures().count(), 1);
}

#[test]
fn test_embed_corrupt_picture_fails() {
    let mut doc = Document::new();
    let paragraph = doc.create_paragraph(Region::Body);
    let run = doc.create_run(paragraph);

    let mut data = create_test_png(4, 4);
    data.truncate(16);

    let result = doc.add_picture(run, data, PictureFormat::Png, 100, 100);
    assert!(matches!(result, Err(DocError::ImageError(_))));
}

#[test]
fn test_footer_line_layout() {
    let mut doc = Document::new();
    let footer = doc.create_footer(HeaderFooterType::Default);
    doc.create_paragraph(footer);

    let line = doc.create_paragraph(footer);
    doc.add_tab_stop(line, TabStop::new(4500, TabAlignment::Center));
    doc.add_tab_stop(line, TabStop::new(9000, TabAlignment::Center));
    doc.set_spacing_after(line, 0);
    let run = doc.create_run(line);
    doc.append_text(run, "Left");
    doc.add_tab(run);
    doc.append_text(run, "Middle");
    doc.add_tab(run);
    doc.append_text(run, "Right");

    let footer = doc.footer(HeaderFooterType::Default).unwrap();
    assert_eq!(footer.paragraphs.len(), 2);
    assert!(footer.paragraphs[0].is_empty());
    assert_eq!(footer.paragraphs[1].text(), "Left\tMiddle\tRight");
    assert_eq!(footer.paragraphs[1].tab_stops.len(), 2);
}

#[test]
fn test_document_serializes_to_json() {
    let mut doc = Document::new();
    let paragraph = doc.create_paragraph(Region::Body);
    let run = doc.create_run(paragraph);
    doc.append_text(run, "Title");
    doc.add_break(run);
    doc.set_run_style(
        run,
        RunStyle {
            font_family: "Arial".to_string(),
            font_size: 14,
            color: "000".to_string(),
            bold: true,
            italic: false,
        },
    );

    let json: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
    assert_eq!(json["body"][0]["runs"][0]["contents"][0]["type"], "text");
    assert_eq!(json["body"][0]["runs"][0]["contents"][0]["value"], "Title");
    assert_eq!(json["body"][0]["runs"][0]["contents"][1]["type"], "break");
    assert_eq!(json["body"][0]["runs"][0]["style"]["font_size"], 14);
}

#[test]
fn test_identical_builds_compare_equal() {
    let build = || {
        let mut doc = Document::new();
        let p = doc.create_paragraph(Region::Body);
        let run = doc.create_run(p);
        doc.append_text(run, "same");
        doc.add_break(run);
        doc
    };

    assert_eq!(build(), build());
    assert!(matches!(
        build().body[0].runs[0].contents[1],
        RunContent::Break
    ));
}

#[test]
fn test_json_keeps_picture_bytes() {
    let logo = create_test_png(12, 4);

    let mut doc = Document::new();
    let header = doc.create_header(HeaderFooterType::Default);
    let paragraph = doc.create_paragraph(header);
    let run = doc.create_run(paragraph);
    doc.add_picture(run, logo.clone(), PictureFormat::Png, 100, 40)
        .unwrap();

    let json = doc.to_json().unwrap();
    let restored: Document = serde_json::from_str(&json).unwrap();

    let picture = restored
        .header(HeaderFooterType::Default)
        .unwrap()
        .pictures()
        .next()
        .unwrap();
    assert_eq!(picture.data, logo);
    assert_eq!(restored, doc);
}
