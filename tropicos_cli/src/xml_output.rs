use anyhow::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::io::Cursor;

/// Singularize array field names for XML child elements.
fn singular(field: &str) -> &str {
    match field {
        "TypeSpecimens" => "TypeSpecimen",
        _ => field,
    }
}

/// Recursively write a serde_json::Value as XML elements.
fn write_value<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    value: &serde_json::Value,
) -> Result<(), quick_xml::Error> {
    match value {
        serde_json::Value::Null => {
            // Absent fields are omitted
        }
        serde_json::Value::Bool(b) => {
            write_text(writer, tag, if *b { "true" } else { "false" })?;
        }
        serde_json::Value::Number(n) => {
            write_text(writer, tag, &n.to_string())?;
        }
        serde_json::Value::String(s) => {
            write_text(writer, tag, s)?;
        }
        serde_json::Value::Array(arr) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            let child_tag = singular(tag);
            for item in arr {
                write_value(writer, child_tag, item)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
        serde_json::Value::Object(map) => {
            writer.write_event(Event::Start(BytesStart::new(tag)))?;
            for (key, val) in map {
                write_value(writer, key, val)?;
            }
            writer.write_event(Event::End(BytesEnd::new(tag)))?;
        }
    }
    Ok(())
}

fn write_text<W: std::io::Write>(
    writer: &mut Writer<W>,
    tag: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(tag)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

/// Serialize a slice of Serialize items into an XML string.
pub fn items_to_xml<T: Serialize>(root_tag: &str, item_tag: &str, items: &[T]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    if items.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(root_tag)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(root_tag)))?;
        for item in items {
            let val = serde_json::to_value(item)?;
            write_value(&mut writer, item_tag, &val)?;
        }
        writer.write_event(Event::End(BytesEnd::new(root_tag)))?;
    }

    let buf = writer.into_inner().into_inner();
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tropicos_api::types::{NameSummary, Specimen, Synonym};

    fn load<T: serde::de::DeserializeOwned>(json_str: &str) -> T {
        serde_json::from_str(json_str).unwrap()
    }

    #[test]
    fn test_xml_wellformed_declaration() {
        let specimens: Vec<Specimen> =
            load(include_str!("../../tropicos_api/tests/fixtures/specimens.json"));
        let xml = items_to_xml("Specimens", "Specimen", &specimens).unwrap();
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains("<Specimens>"));
        assert!(xml.contains("<SpecimenId>3344556</SpecimenId>"));
        assert!(xml.contains("<Latitude>38.6167</Latitude>"));
        assert!(xml.trim_end().ends_with("</Specimens>"));
    }

    #[test]
    fn test_xml_omits_absent_fields() {
        let specimens: Vec<Specimen> =
            load(include_str!("../../tropicos_api/tests/fixtures/specimens.json"));
        let xml = items_to_xml("Specimens", "Specimen", &specimens[1..]).unwrap();
        assert!(!xml.contains("<Latitude>"));
        assert!(xml.contains("<Institution>NY</Institution>"));
    }

    #[test]
    fn test_xml_nested_records() {
        let synonyms: Vec<Synonym> =
            load(include_str!("../../tropicos_api/tests/fixtures/synonyms.json"));
        let xml = items_to_xml("Synonyms", "Synonym", &synonyms).unwrap();
        assert!(xml.contains("<SynonymName>"));
        assert!(xml.contains("<AcceptedName>"));
        assert!(xml.contains("<ReferenceId>1001</ReferenceId>"));
    }

    #[test]
    fn test_xml_singularizes_type_specimens() {
        let summary: NameSummary =
            load(include_str!("../../tropicos_api/tests/fixtures/summary.json"));
        let xml = items_to_xml("Names", "Name", std::slice::from_ref(&summary)).unwrap();
        assert!(xml.contains("<TypeSpecimens>"));
        assert!(xml.contains("<TypeSpecimen>"));
        assert!(xml.contains("<KindOfTypeAbbrev>LT</KindOfTypeAbbrev>"));
    }

    #[test]
    fn test_xml_escapes_text() {
        let summary = NameSummary {
            copyright: Some("Missouri Botanical Garden & partners".to_string()),
            ..NameSummary::default()
        };
        let xml = items_to_xml("Names", "Name", &[summary]).unwrap();
        assert!(xml.contains("Missouri Botanical Garden &amp; partners"));
    }

    #[test]
    fn test_xml_empty_root() {
        let empty: Vec<Specimen> = Vec::new();
        let xml = items_to_xml("Specimens", "Specimen", &empty).unwrap();
        assert!(xml.contains("<Specimens/>"));
    }
}
