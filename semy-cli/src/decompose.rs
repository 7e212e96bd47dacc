//! # Decomposition Output
//!
//! Renders the fields of a parsed version as structured text. JSON goes
//! through `serde_json` and XML through `quick_xml`, both indented by four
//! spaces. Empty identifier lists are written as an open/close pair on one
//! line (`<preRelease></preRelease>`), not as a self-closing tag.

use crate::CliError;
use clap::ValueEnum;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use semy::SemVer;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

const INDENT: usize = 4;

/// Output format of the `decompose` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Xml,
}

/// The fields of one version, in output order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Decomposition<'a> {
    pub raw: &'a str,
    pub major: i32,
    pub minor: i32,
    pub patch: i32,
    pub pre_release: Vec<&'a str>,
    pub build_metadata: Vec<&'a str>,
}

impl<'a> Decomposition<'a> {
    /// Collects the fields of `version`, which was parsed from `raw`.
    pub fn new(raw: &'a str, version: &'a SemVer) -> Self {
        Self {
            raw,
            major: version.major(),
            minor: version.minor(),
            patch: version.patch(),
            pre_release: version.pre_release_identifiers().map(|id| id.as_str()).collect(),
            build_metadata: version.build_identifiers().collect(),
        }
    }

    pub fn write(&self, format: Format, out: &mut impl Write) -> Result<(), CliError> {
        match format {
            Format::Json => self.write_json(out),
            Format::Xml => self.write_xml(out),
        }
    }

    fn write_json(&self, out: &mut impl Write) -> Result<(), CliError> {
        let indent = [b' '; INDENT];
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut *out, formatter);
        self.serialize(&mut ser)?;
        writeln!(out)?;
        Ok(())
    }

    fn write_xml(&self, out: &mut impl Write) -> Result<(), CliError> {
        let mut xml = Writer::new_with_indent(&mut *out, b' ', INDENT);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        xml.write_event(Event::Start(BytesStart::new("semver")))?;
        write_xml_text(&mut xml, "raw", self.raw)?;
        write_xml_text(&mut xml, "major", &self.major.to_string())?;
        write_xml_text(&mut xml, "minor", &self.minor.to_string())?;
        write_xml_text(&mut xml, "patch", &self.patch.to_string())?;
        write_xml_list(&mut xml, "preRelease", &self.pre_release)?;
        write_xml_list(&mut xml, "buildMetadata", &self.build_metadata)?;
        xml.write_event(Event::End(BytesEnd::new("semver")))?;
        writeln!(out)?;
        Ok(())
    }
}

fn write_xml_text<W: Write>(xml: &mut Writer<W>, tag: &str, text: &str) -> Result<(), CliError> {
    xml.create_element(tag).write_text_content(BytesText::new(text))?;
    Ok(())
}

fn write_xml_list<W: Write>(
    xml: &mut Writer<W>,
    tag: &str,
    ids: &[&str],
) -> Result<(), CliError> {
    if ids.is_empty() {
        return write_xml_text(xml, tag, "");
    }
    xml.write_event(Event::Start(BytesStart::new(tag)))?;
    for id in ids {
        write_xml_text(xml, "identifier", id)?;
    }
    xml.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}
