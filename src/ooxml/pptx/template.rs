//! Presentation template parts.
//!
//! The fixed parts every generated deck carries: one slide master with a
//! single blank layout, a notes master, the Office theme, and the small
//! property parts. Slides themselves are generated by the writer.

use crate::common::xml::escape_xml;

const NS_A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

/// Namespace declarations shared by every PresentationML root element.
macro_rules! pml_ns {
    () => {
        concat!(
            r#" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#,
            r#" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships""#,
            r#" xmlns:p="http://schemas.openxmlformats.org/presentationml/2006/main""#
        )
    };
}

/// Empty shape tree with the mandatory group properties.
macro_rules! empty_sp_tree {
    () => {
        concat!(
            "<p:spTree>",
            r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#,
            r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/>"#,
            r#"<a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#,
            "</p:spTree>"
        )
    };
}

macro_rules! clr_map {
    () => {
        concat!(
            r#"<p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" "#,
            r#"accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" "#,
            r#"accent6="accent6" hlink="hlink" folHlink="folHlink"/>"#
        )
    };
}

macro_rules! level1_rpr {
    ($size:literal, $font:literal) => {
        concat!(
            r#"<a:defRPr sz=""#,
            $size,
            r#"" kern="1200"><a:solidFill><a:schemeClr val="tx1"/></a:solidFill>"#,
            r#"<a:latin typeface="+"#,
            $font,
            r#"-lt"/><a:ea typeface="+"#,
            $font,
            r#"-ea"/><a:cs typeface="+"#,
            $font,
            r#"-cs"/></a:defRPr>"#
        )
    };
}

const SLIDE_MASTER_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "<p:sldMaster",
    pml_ns!(),
    ">",
    r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
    empty_sp_tree!(),
    "</p:cSld>",
    clr_map!(),
    r#"<p:sldLayoutIdLst><p:sldLayoutId id="2147483649" r:id="rId1"/></p:sldLayoutIdLst>"#,
    "<p:txStyles>",
    r#"<p:titleStyle><a:lvl1pPr algn="l">"#,
    level1_rpr!("4400", "mj"),
    "</a:lvl1pPr></p:titleStyle>",
    r#"<p:bodyStyle><a:lvl1pPr marL="0" indent="0" algn="l"><a:buNone/>"#,
    level1_rpr!("1800", "mn"),
    "</a:lvl1pPr></p:bodyStyle>",
    r#"<p:otherStyle><a:defPPr><a:defRPr lang="en-US"/></a:defPPr><a:lvl1pPr marL="0" algn="l">"#,
    level1_rpr!("1800", "mn"),
    "</a:lvl1pPr></p:otherStyle>",
    "</p:txStyles>",
    "</p:sldMaster>"
);

const BLANK_LAYOUT_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "<p:sldLayout",
    pml_ns!(),
    r#" type="blank" preserve="1">"#,
    r#"<p:cSld name="Blank">"#,
    empty_sp_tree!(),
    "</p:cSld>",
    "<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>",
    "</p:sldLayout>"
);

const NOTES_MASTER_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "<p:notesMaster",
    pml_ns!(),
    ">",
    r#"<p:cSld><p:bg><p:bgRef idx="1001"><a:schemeClr val="bg1"/></p:bgRef></p:bg>"#,
    empty_sp_tree!(),
    "</p:cSld>",
    clr_map!(),
    r#"<p:notesStyle><a:lvl1pPr marL="0" algn="l">"#,
    level1_rpr!("1200", "mn"),
    "</a:lvl1pPr></p:notesStyle>",
    "</p:notesMaster>"
);

macro_rules! srgb_slot {
    ($slot:literal, $hex:literal) => {
        concat!("<a:", $slot, r#"><a:srgbClr val=""#, $hex, r#""/></a:"#, $slot, ">")
    };
}

macro_rules! ph_solid_fill {
    () => {
        r#"<a:solidFill><a:schemeClr val="phClr"/></a:solidFill>"#
    };
}

const THEME_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">"#,
    "<a:themeElements>",
    r#"<a:clrScheme name="Office">"#,
    r#"<a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>"#,
    r#"<a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>"#,
    srgb_slot!("dk2", "1F497D"),
    srgb_slot!("lt2", "EEECE1"),
    srgb_slot!("accent1", "4F81BD"),
    srgb_slot!("accent2", "C0504D"),
    srgb_slot!("accent3", "9BBB59"),
    srgb_slot!("accent4", "8064A2"),
    srgb_slot!("accent5", "4BACC6"),
    srgb_slot!("accent6", "F79646"),
    srgb_slot!("hlink", "0000FF"),
    srgb_slot!("folHlink", "800080"),
    "</a:clrScheme>",
    r#"<a:fontScheme name="Office">"#,
    r#"<a:majorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:majorFont>"#,
    r#"<a:minorFont><a:latin typeface="Calibri"/><a:ea typeface=""/><a:cs typeface=""/></a:minorFont>"#,
    "</a:fontScheme>",
    r#"<a:fmtScheme name="Office">"#,
    "<a:fillStyleLst>",
    ph_solid_fill!(),
    ph_solid_fill!(),
    ph_solid_fill!(),
    "</a:fillStyleLst>",
    "<a:lnStyleLst>",
    r#"<a:ln w="9525">"#,
    ph_solid_fill!(),
    "</a:ln>",
    r#"<a:ln w="25400">"#,
    ph_solid_fill!(),
    "</a:ln>",
    r#"<a:ln w="38100">"#,
    ph_solid_fill!(),
    "</a:ln>",
    "</a:lnStyleLst>",
    "<a:effectStyleLst>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "<a:effectStyle><a:effectLst/></a:effectStyle>",
    "</a:effectStyleLst>",
    "<a:bgFillStyleLst>",
    ph_solid_fill!(),
    ph_solid_fill!(),
    ph_solid_fill!(),
    "</a:bgFillStyleLst>",
    "</a:fmtScheme>",
    "</a:themeElements>",
    "<a:objectDefaults/><a:extraClrSchemeLst/>",
    "</a:theme>"
);

const PRES_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "<p:presentationPr",
    pml_ns!(),
    "/>"
);

const VIEW_PROPS_XML: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "<p:viewPr",
    pml_ns!(),
    ">",
    r#"<p:normalViewPr><p:restoredLeft sz="15620"/><p:restoredTop sz="94660"/></p:normalViewPr>"#,
    r#"<p:gridSpacing cx="76200" cy="76200"/>"#,
    "</p:viewPr>"
);

/// Default table style id referenced by every generated table.
pub const DEFAULT_TABLE_STYLE_ID: &str = "{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}";

/// Generate the slide master; its only layout is related as `rId1`, its theme as `rId2`.
pub fn default_slide_master_xml() -> &'static str {
    SLIDE_MASTER_XML
}

/// Generate the blank slide layout every slide uses.
pub fn blank_slide_layout_xml() -> &'static str {
    BLANK_LAYOUT_XML
}

/// Generate notes master XML
pub fn default_notes_master_xml() -> &'static str {
    NOTES_MASTER_XML
}

/// Generate the Office theme shared by the slide and notes masters.
pub fn default_theme_xml() -> &'static str {
    THEME_XML
}

pub fn default_table_styles_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><a:tblStyleLst xmlns:a="{}" def="{}"/>"#,
        NS_A, DEFAULT_TABLE_STYLE_ID
    )
}

pub fn default_view_props_xml() -> &'static str {
    VIEW_PROPS_XML
}

pub fn default_pres_props_xml() -> &'static str {
    PRES_PROPS_XML
}

/// Core properties without creation or modification timestamps.
pub fn core_props_xml(title: &str, creator: &str) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            "<dc:title>{}</dc:title><dc:creator>{}</dc:creator><cp:revision>1</cp:revision>",
            "</cp:coreProperties>"
        ),
        escape_xml(title),
        escape_xml(creator)
    )
}

/// Extended (application) properties with slide and notes counts.
pub fn app_props_xml(slides: usize, notes: usize) -> String {
    format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" "#,
            r#"xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">"#,
            "<Application>{}</Application><Slides>{}</Slides><Notes>{}</Notes>",
            "</Properties>"
        ),
        env!("CARGO_PKG_NAME"),
        slides,
        notes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_master_references_layout() {
        let xml = default_slide_master_xml();
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"<p:sldLayoutId id="2147483649" r:id="rId1"/>"#));
        assert!(xml.ends_with("</p:sldMaster>"));
    }

    #[test]
    fn test_theme_is_complete() {
        let xml = default_theme_xml();
        assert_eq!(xml.matches("<a:effectStyle>").count(), 3);
        assert!(xml.contains("<a:accent6>"));
        assert!(xml.contains("<a:folHlink>"));
    }

    #[test]
    fn test_core_props_escape_and_no_timestamp() {
        let xml = core_props_xml("Alpha & Beta", "Group 7");
        assert!(xml.contains("<dc:title>Alpha &amp; Beta</dc:title>"));
        assert!(!xml.contains("dcterms:created"));
    }

    #[test]
    fn test_app_props_counts() {
        let xml = app_props_xml(20, 20);
        assert!(xml.contains("<Slides>20</Slides>"));
        assert!(xml.contains("<Notes>20</Notes>"));
    }
}
