// ABOUTME: PPTX generation module for the md-slides application
// ABOUTME: Renders parsed slide records into a PowerPoint package

use crate::config::Config;
use crate::errors::{Result, SlidesError};
use crate::model::{ContentItem, InlineSpan, SlideRecord, TextStyle};
use crate::template::{self, NS_A, NS_P, NS_R};
use crate::utils;
use log::{debug, info, warn};
use quick_xml::escape::escape;
use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{Seek, Write};
use std::path::{Path, PathBuf};
use zip::{write::FileOptions, ZipWriter};

/// Fixed picture size (4in x 3in) in EMU
pub const IMAGE_WIDTH: i64 = 3657600;
pub const IMAGE_HEIGHT: i64 = 2743200;

/// Deepest paragraph level PowerPoint accepts
const MAX_PARAGRAPH_LEVEL: usize = 8;

const CODE_TYPEFACE: &str = "Courier New";

/// An image embedded under `ppt/media/`
struct MediaFile {
    name: String,
    data: Vec<u8>,
}

/// Relationships of a single slide part
struct SlideRels {
    entries: Vec<Relationship>,
}

struct Relationship {
    id: String,
    rel_type: &'static str,
    target: String,
    external: bool,
}

impl SlideRels {
    fn new() -> Self {
        let mut rels = Self {
            entries: Vec::new(),
        };
        rels.add(
            template::REL_SLIDE_LAYOUT,
            "../slideLayouts/slideLayout1.xml",
            false,
        );
        rels
    }

    /// Add a relationship, reusing an existing one with the same target
    fn add(&mut self, rel_type: &'static str, target: &str, external: bool) -> String {
        if let Some(existing) = self
            .entries
            .iter()
            .find(|r| r.rel_type == rel_type && r.target == target)
        {
            return existing.id.clone();
        }
        let id = format!("rId{}", self.entries.len() + 1);
        self.entries.push(Relationship {
            id: id.clone(),
            rel_type,
            target: target.to_string(),
            external,
        });
        id
    }

    fn to_xml(&self) -> String {
        let mut xml = String::from(template::XML_HEADER);
        xml.push_str(
            "\n<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n",
        );
        for rel in &self.entries {
            let mode = if rel.external {
                r#" TargetMode="External""#
            } else {
                ""
            };
            xml.push_str(&format!(
                "    <Relationship Id=\"{}\" Type=\"{}\" Target=\"{}\"{}/>\n",
                rel.id,
                rel.rel_type,
                escape(&rel.target),
                mode
            ));
        }
        xml.push_str("</Relationships>");
        xml
    }
}

/// A rendered slide part with its relationships
struct SlidePart {
    xml: String,
    rels: String,
}

/// Images shared across the whole deck, keyed by resolved source path
struct MediaStore {
    files: Vec<MediaFile>,
    by_path: HashMap<PathBuf, String>,
}

impl MediaStore {
    fn new() -> Self {
        Self {
            files: Vec::new(),
            by_path: HashMap::new(),
        }
    }

    /// Load an image into the store, returning its media file name.
    ///
    /// Unreadable and unrecognized images are skipped with a warning.
    fn load(&mut self, path: &Path) -> Option<String> {
        if let Some(name) = self.by_path.get(path) {
            return Some(name.clone());
        }

        let data = match fs::read(path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to read image file {:?}: {}", path, e);
                return None;
            }
        };

        let extension = match image_extension(&data) {
            Ok(ext) => ext,
            Err(e) => {
                warn!("Skipping image {:?}: {}", path, e);
                return None;
            }
        };

        let name = format!("image{}.{}", self.files.len() + 1, extension);
        info!("Adding image to PPTX: ppt/media/{}", name);
        self.by_path.insert(path.to_path_buf(), name.clone());
        self.files.push(MediaFile {
            name: name.clone(),
            data,
        });
        Some(name)
    }
}

/// File extension for a supported image, sniffed from its bytes
pub fn image_extension(data: &[u8]) -> Result<&'static str> {
    let format = image::guess_format(data)?;
    match format {
        image::ImageFormat::Png => Ok("png"),
        image::ImageFormat::Jpeg => Ok("jpeg"),
        image::ImageFormat::Gif => Ok("gif"),
        image::ImageFormat::Bmp => Ok("bmp"),
        image::ImageFormat::Tiff => Ok("tiff"),
        other => Err(SlidesError::ImageError(format!(
            "unsupported image format: {:?}",
            other
        ))),
    }
}

/// Slide dimensions in EMU for an aspect ratio
pub fn slide_dimensions(aspect_ratio: &str) -> (i64, i64) {
    match aspect_ratio {
        "4:3" => (9144000, template::SLIDE_HEIGHT),
        "16:9" => (12192000, template::SLIDE_HEIGHT),
        _ => {
            warn!(
                "Unsupported aspect ratio: {}. Using 4:3 instead.",
                aspect_ratio
            );
            (9144000, template::SLIDE_HEIGHT)
        }
    }
}

/// Generate a PPTX presentation file from parsed slides.
///
/// Relative image paths are resolved against `base_dir`.
pub fn generate_pptx(
    slides: &[SlideRecord],
    output_file: &Path,
    config: &Config,
    base_dir: &Path,
) -> Result<()> {
    info!("Generating PPTX with {} slides", slides.len());

    utils::ensure_parent_directory_exists(output_file)?;

    let file = fs::File::create(output_file).map_err(SlidesError::FileReadError)?;
    write_pptx(slides, file, config, base_dir)?;

    info!("PPTX file created at {:?}", output_file);
    Ok(())
}

/// Write a PPTX package for the slides into any seekable writer
pub fn write_pptx<W: Write + Seek>(
    slides: &[SlideRecord],
    writer: W,
    config: &Config,
    base_dir: &Path,
) -> Result<()> {
    let (cx, cy) = slide_dimensions(&config.aspect_ratio);

    // Render slides first so the media set is known before packaging
    let mut media = MediaStore::new();
    let mut parts = Vec::with_capacity(slides.len());
    for (i, slide) in slides.iter().enumerate() {
        debug!("Rendering slide {}: {:?}", i + 1, slide.title);
        parts.push(render_slide(slide, config, base_dir, cx, &mut media)?);
    }

    let mut zip = ZipWriter::new(writer);

    info!("Creating PPTX structure: [Content_Types].xml");
    write_part(&mut zip, "[Content_Types].xml", &content_types(slides.len()))?;

    info!("Creating PPTX structure: _rels/.rels");
    write_part(&mut zip, "_rels/.rels", template::ROOT_RELS)?;

    info!("Creating PPTX structure: docProps");
    write_part(&mut zip, "docProps/app.xml", &app_xml(slides.len()))?;
    let title = slides
        .first()
        .map(|s| s.title.as_str())
        .filter(|t| !t.is_empty())
        .unwrap_or("Presentation");
    write_part(&mut zip, "docProps/core.xml", &core_xml(title))?;

    info!("Creating PPTX structure: ppt/presentation.xml");
    write_part(
        &mut zip,
        "ppt/_rels/presentation.xml.rels",
        &presentation_rels(slides.len()),
    )?;
    write_part(
        &mut zip,
        "ppt/presentation.xml",
        &presentation_xml(slides.len(), cx, cy, &config.aspect_ratio),
    )?;
    write_part(&mut zip, "ppt/presProps.xml", template::PRES_PROPS)?;
    write_part(&mut zip, "ppt/viewProps.xml", template::VIEW_PROPS)?;
    write_part(&mut zip, "ppt/tableStyles.xml", template::TABLE_STYLES)?;

    info!("Creating PPTX structure: theme, master and layout");
    write_part(&mut zip, "ppt/theme/theme1.xml", template::THEME)?;
    write_part(
        &mut zip,
        "ppt/slideMasters/slideMaster1.xml",
        &template::slide_master(cx),
    )?;
    write_part(
        &mut zip,
        "ppt/slideMasters/_rels/slideMaster1.xml.rels",
        template::SLIDE_MASTER_RELS,
    )?;
    write_part(
        &mut zip,
        "ppt/slideLayouts/slideLayout1.xml",
        template::SLIDE_LAYOUT,
    )?;
    write_part(
        &mut zip,
        "ppt/slideLayouts/_rels/slideLayout1.xml.rels",
        template::SLIDE_LAYOUT_RELS,
    )?;

    for (i, part) in parts.iter().enumerate() {
        let slide_num = i + 1;
        info!("Creating slide XML: ppt/slides/slide{}.xml", slide_num);
        write_part(
            &mut zip,
            &format!("ppt/slides/slide{}.xml", slide_num),
            &part.xml,
        )?;
        write_part(
            &mut zip,
            &format!("ppt/slides/_rels/slide{}.xml.rels", slide_num),
            &part.rels,
        )?;
    }

    for file in &media.files {
        zip.start_file(format!("ppt/media/{}", file.name), FileOptions::default())?;
        zip.write_all(&file.data)?;
    }

    info!("Finalizing PPTX file");
    zip.finish()?;
    Ok(())
}

fn write_part<W: Write + Seek>(zip: &mut ZipWriter<W>, name: &str, content: &str) -> Result<()> {
    zip.start_file(name, FileOptions::default())?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn content_types(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
    <Default Extension="xml" ContentType="application/xml"/>
    <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
    <Default Extension="jpeg" ContentType="image/jpeg"/>
    <Default Extension="png" ContentType="image/png"/>
    <Default Extension="gif" ContentType="image/gif"/>
    <Default Extension="bmp" ContentType="image/bmp"/>
    <Default Extension="tiff" ContentType="image/tiff"/>
    <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
    <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
    <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
    <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
    <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
    <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
    <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
    <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
    <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
{slides}
</Types>"#,
        slides = (1..=slide_count)
            .map(|n| format!(r#"    <Override PartName="/ppt/slides/slide{}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#, n))
            .collect::<Vec<String>>()
            .join("\n")
    )
}

fn app_xml(slide_count: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
    <Application>md-slides</Application>
    <Slides>{}</Slides>
</Properties>"#,
        slide_count
    )
}

fn core_xml(title: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <dc:title>{}</dc:title>
    <dc:creator>md-slides</dc:creator>
    <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
    <cp:revision>1</cp:revision>
</cp:coreProperties>"#,
        xml_text(title),
        chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ")
    )
}

/// Relationship id of the first slide in `presentation.xml.rels`
const FIRST_SLIDE_REL: usize = 6;

fn presentation_rels(slide_count: usize) -> String {
    let mut rels = String::from(template::XML_HEADER);
    rels.push_str(
        "\n<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n",
    );
    let fixed = [
        (template::REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml"),
        (template::REL_THEME, "theme/theme1.xml"),
        (template::REL_PRES_PROPS, "presProps.xml"),
        (template::REL_VIEW_PROPS, "viewProps.xml"),
        (template::REL_TABLE_STYLES, "tableStyles.xml"),
    ];
    for (i, (rel_type, target)) in fixed.iter().enumerate() {
        rels.push_str(&format!(
            "    <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"{}\"/>\n",
            i + 1,
            rel_type,
            target
        ));
    }
    for i in 0..slide_count {
        rels.push_str(&format!(
            "    <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{}.xml\"/>\n",
            FIRST_SLIDE_REL + i,
            template::REL_SLIDE,
            i + 1
        ));
    }
    rels.push_str("</Relationships>");
    rels
}

fn presentation_xml(slide_count: usize, cx: i64, cy: i64, aspect_ratio: &str) -> String {
    let slide_ids = if slide_count == 0 {
        String::new()
    } else {
        format!(
            "    <p:sldIdLst>\n{}\n    </p:sldIdLst>\n",
            (0..slide_count)
                .map(|i| format!(
                    r#"        <p:sldId id="{}" r:id="rId{}"/>"#,
                    256 + i,
                    FIRST_SLIDE_REL + i
                ))
                .collect::<Vec<String>>()
                .join("\n")
        )
    };
    let size_type = if aspect_ratio == "16:9" {
        ""
    } else {
        r#" type="screen4x3""#
    };

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{ns_a}" xmlns:r="{ns_r}" xmlns:p="{ns_p}" saveSubsetFonts="1">
    <p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>
{slide_ids}    <p:sldSz cx="{cx}" cy="{cy}"{size_type}/>
    <p:notesSz cx="6858000" cy="9144000"/>
</p:presentation>"#,
        ns_a = NS_A,
        ns_r = NS_R,
        ns_p = NS_P,
        slide_ids = slide_ids,
        cx = cx,
        cy = cy,
        size_type = size_type,
    )
}

fn render_slide(
    slide: &SlideRecord,
    config: &Config,
    base_dir: &Path,
    slide_width: i64,
    media: &mut MediaStore,
) -> Result<SlidePart> {
    let mut rels = SlideRels::new();
    let mut body = String::new();
    let mut pictures = Vec::new();

    for item in &slide.content {
        render_paragraph(item, config, &mut rels, &mut body)?;

        for span in &item.spans {
            if let InlineSpan::Image { alt, path } = span {
                let resolved = resolve_image_path(base_dir, path);
                if let Some(name) = media.load(&resolved) {
                    let rel_id = rels.add(template::REL_IMAGE, &format!("../media/{}", name), false);
                    pictures.push((rel_id, alt.clone()));
                }
            }
        }
    }

    if body.is_empty() {
        body.push_str(r#"<a:p><a:endParaRPr lang="en-US" dirty="0"/></a:p>"#);
    }

    let mut xml = String::with_capacity(2048 + body.len());
    xml.push_str(template::XML_HEADER);
    write!(
        xml,
        r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
        NS_A, NS_R, NS_P
    )?;
    xml.push_str("<p:cSld><p:spTree>");
    xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
    xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

    // Title placeholder
    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="Title 1"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph type="title"/></p:nvPr></p:nvSpPr>"#);
    xml.push_str("<p:spPr/><p:txBody><a:bodyPr/><a:lstStyle/><a:p>");
    if !slide.title.is_empty() {
        write!(
            xml,
            r#"<a:r><a:rPr lang="en-US" dirty="0"/><a:t>{}</a:t></a:r>"#,
            xml_text(&slide.title)
        )?;
    }
    xml.push_str("</a:p></p:txBody></p:sp>");

    // Content placeholder
    xml.push_str(r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="Content Placeholder 2"/>"#);
    xml.push_str(r#"<p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr><p:nvPr><p:ph idx="1"/></p:nvPr></p:nvSpPr>"#);
    xml.push_str("<p:spPr/><p:txBody><a:bodyPr><a:normAutofit/></a:bodyPr><a:lstStyle/>");
    xml.push_str(&body);
    xml.push_str("</p:txBody></p:sp>");

    // Pictures sit at a fixed spot in the lower right corner
    let x = slide_width - IMAGE_WIDTH - template::MARGIN;
    let y = template::SLIDE_HEIGHT - IMAGE_HEIGHT - template::MARGIN;
    for (i, (rel_id, alt)) in pictures.iter().enumerate() {
        let shape_id = 4 + i;
        write!(
            xml,
            r#"<p:pic><p:nvPicPr><p:cNvPr id="{id}" name="Picture {id}" descr="{descr}"/><p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr><p:nvPr/></p:nvPicPr><p:blipFill><a:blip r:embed="{rel}"/><a:stretch><a:fillRect/></a:stretch></p:blipFill><p:spPr><a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr></p:pic>"#,
            id = shape_id,
            descr = xml_text(alt),
            rel = rel_id,
            x = x,
            y = y,
            cx = IMAGE_WIDTH,
            cy = IMAGE_HEIGHT,
        )?;
    }

    xml.push_str("</p:spTree></p:cSld>");
    xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr></p:sld>");

    Ok(SlidePart {
        xml,
        rels: rels.to_xml(),
    })
}

/// Append one `<a:p>` for a content item. Image-only items produce no paragraph.
fn render_paragraph(
    item: &ContentItem,
    config: &Config,
    rels: &mut SlideRels,
    xml: &mut String,
) -> Result<()> {
    let has_text = item
        .spans
        .iter()
        .any(|s| !matches!(s, InlineSpan::Image { .. }));
    if !has_text && !item.spans.is_empty() {
        return Ok(());
    }

    let size = config.font_size(item.level) * 100;
    let force_bold = config.is_bold(item.level);

    write!(
        xml,
        r#"<a:p><a:pPr lvl="{}"/>"#,
        item.level.min(MAX_PARAGRAPH_LEVEL)
    )?;

    for span in &item.spans {
        match span {
            InlineSpan::Text { text, style } => {
                render_run(xml, text, *style, size, force_bold, None)?;
            }
            InlineSpan::Link { text, url, style } => {
                let rel_id = rels.add(template::REL_HYPERLINK, url, true);
                render_run(xml, text, *style, size, force_bold, Some(&rel_id))?;
            }
            InlineSpan::Image { .. } => {}
        }
    }

    write!(xml, r#"<a:endParaRPr lang="en-US" sz="{}" dirty="0"/></a:p>"#, size)?;
    Ok(())
}

fn render_run(
    xml: &mut String,
    text: &str,
    style: TextStyle,
    size: u32,
    force_bold: bool,
    link: Option<&str>,
) -> Result<()> {
    write!(xml, r#"<a:r><a:rPr lang="en-US" sz="{}""#, size)?;
    if style.bold || force_bold {
        xml.push_str(r#" b="1""#);
    }
    if style.italic {
        xml.push_str(r#" i="1""#);
    }
    if style.underline {
        xml.push_str(r#" u="sng""#);
    }
    if style.strike {
        xml.push_str(r#" strike="sngStrike""#);
    }
    xml.push_str(r#" dirty="0">"#);
    if style.code {
        write!(xml, r#"<a:latin typeface="{}"/>"#, CODE_TYPEFACE)?;
    }
    if let Some(rel_id) = link {
        write!(xml, r#"<a:hlinkClick r:id="{}"/>"#, rel_id)?;
    }
    xml.push_str("</a:rPr>");
    write!(xml, "<a:t>{}</a:t></a:r>", xml_text(text))?;
    Ok(())
}

fn resolve_image_path(base_dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}

/// Escape text for XML, dropping control characters XML 1.0 cannot carry
fn xml_text(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|&c| c == '\t' || c == '\n' || !c.is_control())
        .collect();
    escape(&cleaned).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_dimensions() {
        assert_eq!(slide_dimensions("4:3"), (9144000, 6858000));
        assert_eq!(slide_dimensions("16:9"), (12192000, 6858000));
        assert_eq!(slide_dimensions("21:9"), (9144000, 6858000));
    }

    #[test]
    fn test_slide_rels_deduplicate() {
        let mut rels = SlideRels::new();
        let a = rels.add(template::REL_HYPERLINK, "https://a.example", true);
        let b = rels.add(template::REL_HYPERLINK, "https://b.example", true);
        let again = rels.add(template::REL_HYPERLINK, "https://a.example", true);
        assert_eq!(a, "rId2");
        assert_eq!(b, "rId3");
        assert_eq!(again, a);

        let xml = rels.to_xml();
        assert!(xml.contains(r#"Target="../slideLayouts/slideLayout1.xml""#));
        assert!(xml.contains(r#"Target="https://a.example" TargetMode="External""#));
    }

    #[test]
    fn test_xml_text_escapes_and_strips_controls() {
        assert_eq!(xml_text("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
        assert_eq!(xml_text("bell\u{7}"), "bell");
    }

    #[test]
    fn test_image_extension_rejects_garbage() {
        assert!(image_extension(b"definitely not an image").is_err());
        assert_eq!(image_extension(b"\x89PNG\r\n\x1a\n0000").ok(), Some("png"));
    }

    #[test]
    fn test_presentation_xml_lists_slides() {
        let xml = presentation_xml(2, 9144000, 6858000, "4:3");
        assert!(xml.contains(r#"<p:sldId id="256" r:id="rId6"/>"#));
        assert!(xml.contains(r#"<p:sldId id="257" r:id="rId7"/>"#));
        assert!(xml.contains(r#"type="screen4x3""#));

        let empty = presentation_xml(0, 12192000, 6858000, "16:9");
        assert!(!empty.contains("sldIdLst"));
        assert!(!empty.contains("screen4x3"));
    }
}
