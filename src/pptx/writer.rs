//! Deck assembly: Presentation in, PPTX bytes out.
//!
//! The writer emits a self-contained package: one theme, one slide master,
//! two layouts (title, title-and-content), a title slide built from the
//! presentation title and the current date, then one content slide per slide
//! record. Input is borrowed immutably and nothing is retained after
//! [`DeckWriter::render`] returns.

use std::borrow::Cow;
use std::io::{Cursor, Seek, Write};

use quick_xml::escape::escape;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::models::{Presentation, SlideContent};
use crate::pptx::error::Result;
use crate::pptx::style::DeckStyle;
use crate::pptx::{
    NS_DRAWING, NS_PRESENTATION, NS_RELATIONSHIPS, REL_TYPE_SLIDE_LAYOUT, REL_TYPE_SLIDE_MASTER,
    REL_TYPE_THEME, SLIDE_HEIGHT_EMU, SLIDE_WIDTH_EMU,
};

/// Renders [`Presentation`] values into PPTX packages using one fixed style.
#[derive(Debug, Clone, Default)]
pub struct DeckWriter {
    style: DeckStyle,
}

/// Slide 1 is always the title slide; content slides follow in input order.
const TITLE_SLIDE_OFFSET: usize = 1;

impl DeckWriter {
    pub fn new(style: DeckStyle) -> Self {
        DeckWriter { style }
    }

    /// Render the deck as an in-memory byte buffer.
    ///
    /// A presentation with zero slide records still produces a valid deck
    /// containing only the title slide.
    pub fn render(&self, presentation: &Presentation) -> Result<Vec<u8>> {
        let slide_total = presentation.slides.len() + TITLE_SLIDE_OFFSET;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        write_part(&mut zip, options, "[Content_Types].xml", &content_types(slide_total))?;
        write_part(&mut zip, options, "_rels/.rels", &root_rels())?;
        write_part(&mut zip, options, "docProps/app.xml", &app_xml(slide_total))?;
        write_part(&mut zip, options, "docProps/core.xml", &core_xml(&presentation.title))?;
        write_part(&mut zip, options, "ppt/presentation.xml", &presentation_xml(slide_total))?;
        write_part(
            &mut zip,
            options,
            "ppt/_rels/presentation.xml.rels",
            &presentation_rels(slide_total),
        )?;
        write_part(&mut zip, options, "ppt/presProps.xml", &pres_props())?;
        write_part(&mut zip, options, "ppt/viewProps.xml", &view_props())?;
        write_part(&mut zip, options, "ppt/tableStyles.xml", &table_styles())?;
        write_part(&mut zip, options, "ppt/theme/theme1.xml", &theme_xml())?;
        write_part(&mut zip, options, "ppt/slideMasters/slideMaster1.xml", &slide_master_xml())?;
        write_part(
            &mut zip,
            options,
            "ppt/slideMasters/_rels/slideMaster1.xml.rels",
            &slide_master_rels(),
        )?;
        write_part(&mut zip, options, "ppt/slideLayouts/slideLayout1.xml", &title_layout_xml())?;
        write_part(&mut zip, options, "ppt/slideLayouts/slideLayout2.xml", &content_layout_xml())?;
        for layout in 1..=2 {
            write_part(
                &mut zip,
                options,
                &format!("ppt/slideLayouts/_rels/slideLayout{layout}.xml.rels"),
                &layout_rels(),
            )?;
        }

        // Title slide, then the content slides in sequence order.
        write_part(&mut zip, options, "ppt/slides/slide1.xml", &self.title_slide_xml(&presentation.title))?;
        write_part(&mut zip, options, "ppt/slides/_rels/slide1.xml.rels", &slide_rels(1))?;
        for (i, slide) in presentation.slides.iter().enumerate() {
            let num = i + TITLE_SLIDE_OFFSET + 1;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/slide{num}.xml"),
                &self.content_slide_xml(slide),
            )?;
            write_part(
                &mut zip,
                options,
                &format!("ppt/slides/_rels/slide{num}.xml.rels"),
                &slide_rels(2),
            )?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Title slide: deck title in the title color, "Created: <date>" subtitle
    /// in the subtitle color.
    fn title_slide_xml(&self, title: &str) -> String {
        let date = chrono::Local::now().format("%Y-%m-%d");
        let title_run = self.run(title, self.style.title_color.hex(), None, false);
        let subtitle_run = self.run(
            &format!("Created: {date}"),
            self.style.subtitle_color.hex(),
            None,
            false,
        );

        let shapes = format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Title 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="ctrTitle"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p>
{title_run}          </a:p>
        </p:txBody>
      </p:sp>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Subtitle 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="subTitle" idx="1"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p>
{subtitle_run}          </a:p>
        </p:txBody>
      </p:sp>
"#
        );

        slide_xml(&shapes)
    }

    /// One content slide: heading from `slide_name`, then an optional bold
    /// header block, an optional description paragraph, and one bullet per
    /// key point. A record with no body content renders heading-only.
    fn content_slide_xml(&self, slide: &SlideContent) -> String {
        let heading_run = self.run(&slide.slide_name, self.style.title_color.hex(), None, false);
        let mut shapes = format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Title 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="title"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p>
{heading_run}          </a:p>
        </p:txBody>
      </p:sp>
"#
        );

        let body = self.body_paragraphs(slide);
        if !body.is_empty() {
            shapes.push_str(&format!(
                r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Content Placeholder 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph idx="1"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
{body}        </p:txBody>
      </p:sp>
"#
            ));
        }

        slide_xml(&shapes)
    }

    /// Body paragraphs for one slide record. Empty when every optional field
    /// is absent, in which case the content placeholder is omitted entirely.
    fn body_paragraphs(&self, slide: &SlideContent) -> String {
        let mut paragraphs = String::new();

        if let Some(header) = non_empty(slide.header.as_deref()) {
            let run = self.run(
                header,
                self.style.subtitle_color.hex(),
                Some(self.style.header_size),
                true,
            );
            paragraphs.push_str(&format!(
                "          <a:p>\n            <a:pPr><a:buNone/></a:pPr>\n{run}          </a:p>\n"
            ));
        }

        if let Some(description) = non_empty(slide.description.as_deref()) {
            let run = self.run(
                description,
                self.style.description_color.hex(),
                Some(self.style.description_size),
                false,
            );
            // spcPts is in hundredths of a point.
            let space_after = self.style.description_space_after * 100;
            paragraphs.push_str(&format!(
                "          <a:p>\n            <a:pPr><a:spcAft><a:spcPts val=\"{space_after}\"/></a:spcAft><a:buNone/></a:pPr>\n{run}          </a:p>\n"
            ));
        }

        for point in &slide.key_points {
            let run = self.run(
                point,
                self.style.key_point_color.hex(),
                Some(self.style.key_point_size),
                false,
            );
            paragraphs.push_str(&format!(
                "          <a:p>\n            <a:pPr lvl=\"0\"><a:buChar char=\"\u{2022}\"/></a:pPr>\n{run}          </a:p>\n"
            ));
        }

        paragraphs
    }

    /// A single text run. `size` is in points; omitted for placeholder-sized
    /// text (titles inherit from the layout).
    fn run(&self, text: &str, color_hex: String, size: Option<u32>, bold: bool) -> String {
        let mut rpr = format!("lang=\"{}\"", self.style.locale);
        if let Some(size) = size {
            // rPr sz is in hundredths of a point.
            rpr.push_str(&format!(" sz=\"{}\"", size * 100));
        }
        if bold {
            rpr.push_str(" b=\"1\"");
        }

        format!(
            "            <a:r>\n              <a:rPr {rpr}><a:solidFill><a:srgbClr val=\"{color_hex}\"/></a:solidFill></a:rPr>\n              <a:t>{}</a:t>\n            </a:r>\n",
            escape_xml(text)
        )
    }
}

fn write_part<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    options: SimpleFileOptions,
    path: &str,
    content: &str,
) -> Result<()> {
    zip.start_file(path, options)?;
    zip.write_all(content.as_bytes())?;
    Ok(())
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    escape(s)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Shared slide envelope around a shape tree.
fn slide_xml(shapes: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{shapes}    </p:spTree>
  </p:cSld>
</p:sld>"#
    )
}

fn content_types(slide_total: usize) -> String {
    let mut content = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
  <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
  <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout2.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#,
    );

    for i in 1..=slide_total {
        content.push_str(&format!(
            "  <Override PartName=\"/ppt/slides/slide{i}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n"
        ));
    }

    content.push_str("</Types>");
    content
}

fn root_rels() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{NS_RELATIONSHIPS}/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="{NS_RELATIONSHIPS}/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

fn app_xml(slide_total: usize) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>prompt2deck</Application>
  <PresentationFormat>On-screen Show (4:3)</PresentationFormat>
  <Slides>{slide_total}</Slides>
  <Notes>0</Notes>
  <HiddenSlides>0</HiddenSlides>
  <ScaleCrop>false</ScaleCrop>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>1.0</AppVersion>
</Properties>"#
    )
}

fn core_xml(title: &str) -> String {
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:creator>prompt2deck</dc:creator>
  <cp:lastModifiedBy>prompt2deck</cp:lastModifiedBy>
  <dcterms:created xsi:type="dcterms:W3CDTF">{now}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{now}</dcterms:modified>
</cp:coreProperties>"#,
        escape_xml(title)
    )
}

fn presentation_xml(slide_total: usize) -> String {
    let mut slide_refs = String::new();
    for i in 1..=slide_total {
        // rId1=slideMaster, rId2=presProps, rId3=theme, rId4+=slides
        slide_refs.push_str(&format!(
            "    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n",
            255 + i,
            i + 3
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{slide_refs}  </p:sldIdLst>
  <p:sldSz cx="{SLIDE_WIDTH_EMU}" cy="{SLIDE_HEIGHT_EMU}"/>
  <p:notesSz cx="{SLIDE_HEIGHT_EMU}" cy="{SLIDE_WIDTH_EMU}"/>
</p:presentation>"#
    )
}

fn presentation_rels(slide_total: usize) -> String {
    let mut rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="{NS_RELATIONSHIPS}/presProps" Target="presProps.xml"/>
  <Relationship Id="rId3" Type="{REL_TYPE_THEME}" Target="theme/theme1.xml"/>
"#
    );

    for i in 1..=slide_total {
        rels.push_str(&format!(
            "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{i}.xml\"/>\n",
            i + 3,
            crate::pptx::REL_TYPE_SLIDE
        ));
    }

    rels.push_str("</Relationships>");
    rels
}

fn pres_props() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:presentationPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:extLst/>
</p:presentationPr>"#
    )
}

fn view_props() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:viewPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
  <p:slideViewPr>
    <p:cSldViewPr>
      <p:cViewPr>
        <p:scale>
          <a:sx n="100" d="100"/>
          <a:sy n="100" d="100"/>
        </p:scale>
        <p:origin x="0" y="0"/>
      </p:cViewPr>
    </p:cSldViewPr>
  </p:slideViewPr>
</p:viewPr>"#
    )
}

fn table_styles() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:tblStyleLst xmlns:a="{NS_DRAWING}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
    )
}

fn theme_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="{NS_DRAWING}" name="prompt2deck">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Office">
      <a:majorFont>
        <a:latin typeface="Calibri Light"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="Calibri"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="Office">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#
    )
}

fn slide_master_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
    <p:sldLayoutId id="2147483650" r:id="rId2"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#
    )
}

fn slide_master_rels() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout2.xml"/>
  <Relationship Id="rId3" Type="{REL_TYPE_THEME}" Target="../theme/theme1.xml"/>
</Relationships>"#
    )
}

fn title_layout_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" type="title" preserve="1">
  <p:cSld name="Title Slide">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Title 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="ctrTitle"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="685800" y="2130425"/>
            <a:ext cx="7772400" cy="1470025"/>
          </a:xfrm>
        </p:spPr>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p><a:endParaRPr lang="en-US"/></a:p>
        </p:txBody>
      </p:sp>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Subtitle 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="subTitle" idx="1"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="1371600" y="3886200"/>
            <a:ext cx="6400800" cy="1752600"/>
          </a:xfrm>
        </p:spPr>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p><a:endParaRPr lang="en-US"/></a:p>
        </p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    )
}

fn content_layout_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sldLayout xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" type="obj" preserve="1">
  <p:cSld name="Title and Content">
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Title 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="title"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="457200" y="274638"/>
            <a:ext cx="8229600" cy="1143000"/>
          </a:xfrm>
        </p:spPr>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p><a:endParaRPr lang="en-US"/></a:p>
        </p:txBody>
      </p:sp>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Content Placeholder 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph idx="1"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm>
            <a:off x="457200" y="1600200"/>
            <a:ext cx="8229600" cy="4525963"/>
          </a:xfrm>
        </p:spPr>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p><a:endParaRPr lang="en-US"/></a:p>
        </p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    )
}

fn layout_rels() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
    )
}

fn slide_rels(layout: u32) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout{layout}.xml"/>
</Relationships>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use zip::ZipArchive;

    fn slide(name: &str) -> SlideContent {
        SlideContent {
            slide_number: 1,
            slide_name: name.to_string(),
            header: None,
            description: None,
            key_points: Vec::new(),
        }
    }

    #[test]
    fn empty_presentation_renders_title_slide_only() {
        let writer = DeckWriter::default();
        let deck = Presentation::new("Solo", Vec::new());

        let bytes = writer.render(&deck).expect("render");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip");

        assert!(archive.by_name("ppt/slides/slide1.xml").is_ok());
        assert!(archive.by_name("ppt/slides/slide2.xml").is_err());
    }

    #[test]
    fn slide_parts_follow_input_order() {
        let writer = DeckWriter::default();
        let deck = Presentation::new(
            "Ordered",
            vec![slide("First"), slide("Second"), slide("Third")],
        );

        let bytes = writer.render(&deck).expect("render");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip");

        for (num, name) in [(2, "First"), (3, "Second"), (4, "Third")] {
            let mut part = String::new();
            std::io::Read::read_to_string(
                &mut archive
                    .by_name(&format!("ppt/slides/slide{num}.xml"))
                    .expect("slide part"),
                &mut part,
            )
            .expect("read");
            assert!(part.contains(&format!("<a:t>{name}</a:t>")));
        }
    }

    #[test]
    fn title_text_is_escaped() {
        let writer = DeckWriter::default();
        let deck = Presentation::new("Q&A <Session>", Vec::new());

        let bytes = writer.render(&deck).expect("render");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip");

        let mut part = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("ppt/slides/slide1.xml").expect("slide"),
            &mut part,
        )
        .expect("read");
        assert!(part.contains("Q&amp;A &lt;Session&gt;"));
        assert!(!part.contains("<Session>"));
    }

    #[test]
    fn heading_only_slide_has_no_content_placeholder() {
        let writer = DeckWriter::default();
        let deck = Presentation::new("Deck", vec![slide("Bare")]);

        let bytes = writer.render(&deck).expect("render");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip");

        let mut part = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("ppt/slides/slide2.xml").expect("slide"),
            &mut part,
        )
        .expect("read");
        assert!(part.contains("<a:t>Bare</a:t>"));
        assert!(!part.contains("<p:ph idx=\"1\"/>"));
    }

    #[test]
    fn content_types_list_every_slide() {
        let writer = DeckWriter::default();
        let deck = Presentation::new("Deck", vec![slide("A"), slide("B")]);

        let bytes = writer.render(&deck).expect("render");
        let mut archive = ZipArchive::new(Cursor::new(bytes)).expect("zip");

        let mut part = String::new();
        std::io::Read::read_to_string(
            &mut archive.by_name("[Content_Types].xml").expect("part"),
            &mut part,
        )
        .expect("read");
        assert!(part.contains("/ppt/slides/slide3.xml"));
        assert!(!part.contains("/ppt/slides/slide4.xml"));
    }
}
