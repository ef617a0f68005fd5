//! Pattern catalogs.
//!
//! Two on-disk forms, picked by file extension:
//!
//! XML (streamed with quick-xml, every child element is a numeric setting):
//!
//! ```xml
//! <patterns>
//!   <pattern name="dots1" type="dot">
//!     <spacing>20</spacing>
//!     <size>10</size>
//!   </pattern>
//! </patterns>
//! ```
//!
//! YAML:
//!
//! ```yaml
//! - name: dots1
//!   type: dot
//!   settings: { spacing: 20, size: 10 }
//! ```

use std::collections::{BTreeMap, HashSet};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::patterns::{PatternType, Tiling};

/// One named pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternSpec {
    /// Unique name, the selection key
    pub name: String,
    /// Type tag as written in the catalog
    #[serde(rename = "type")]
    pub type_tag: String,
    /// Raw settings, including keys the type ignores
    pub settings: BTreeMap<String, f64>,
    /// Validated geometry; `None` when the type tag is not recognized
    #[serde(skip)]
    pub tiling: Option<Tiling>,
}

/// All patterns, in catalog order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PatternCatalog {
    specs: Vec<PatternSpec>,
}

#[derive(Debug, Deserialize)]
struct RawPattern {
    name: String,
    #[serde(rename = "type")]
    type_tag: String,
    #[serde(default)]
    settings: BTreeMap<String, f64>,
}

impl PatternSpec {
    /// Validate a raw entry.
    ///
    /// A known type with bad settings is an error. An unknown type tag is
    /// kept (with `tiling: None`) so the catalog still loads; rendering it
    /// only clears the background.
    pub fn from_parts(
        name: impl Into<String>,
        type_tag: impl Into<String>,
        settings: BTreeMap<String, f64>,
    ) -> Result<Self> {
        let name = name.into();
        let type_tag = type_tag.into();

        if name.trim().is_empty() {
            return Err(Error::InvalidSetting {
                pattern: name,
                setting: "name".to_string(),
                value: String::new(),
            });
        }

        let tiling = match PatternType::from_name(&type_tag) {
            Some(ty) => Some(Tiling::from_settings(&name, ty, &settings)?),
            None => {
                let err = Error::UnknownPatternType { name: name.clone(), tag: type_tag.clone() };
                log::warn!("{}", err);
                None
            }
        };

        Ok(Self { name, type_tag, settings, tiling })
    }

    /// The recognized type, if any.
    pub fn pattern_type(&self) -> Option<PatternType> {
        self.tiling.map(|t| t.pattern_type())
    }
}

impl PatternCatalog {
    /// Build a catalog, rejecting duplicate names.
    pub fn new(specs: Vec<PatternSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &specs {
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::DuplicatePattern(spec.name.clone()));
            }
        }
        Ok(Self { specs })
    }

    pub fn get(&self, name: &str) -> Option<&PatternSpec> {
        self.specs.iter().find(|p| p.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.specs.iter().position(|p| p.name == name)
    }

    pub fn specs(&self) -> &[PatternSpec] {
        &self.specs
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.specs.iter().map(|p| p.name.as_str())
    }

    pub fn first(&self) -> Option<&PatternSpec> {
        self.specs.first()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Parse a YAML pattern list.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let raw: Vec<RawPattern> = serde_yaml::from_str(content)?;
        let specs = raw
            .into_iter()
            .map(|r| PatternSpec::from_parts(r.name, r.type_tag, r.settings))
            .collect::<Result<Vec<_>>>()?;
        Self::new(specs)
    }

    /// Parse an XML pattern catalog.
    pub fn from_xml(content: &str) -> Result<Self> {
        XmlPatternReader::default().read(content)
    }
}

/// A `<pattern>` element being assembled.
struct PendingPattern {
    name: String,
    type_tag: String,
    settings: BTreeMap<String, f64>,
}

/// Streaming reader for the XML catalog form.
#[derive(Default)]
struct XmlPatternReader {
    specs: Vec<PatternSpec>,
    current: Option<PendingPattern>,
    /// Setting element we are inside, and whether it had text yet
    setting: Option<(String, bool)>,
}

impl XmlPatternReader {
    fn read(mut self, content: &str) -> Result<PatternCatalog> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);

        loop {
            let position = reader.buffer_position();

            match reader.read_event() {
                Ok(Event::Start(ref e)) => self.start(e, false, position)?,
                Ok(Event::Empty(ref e)) => self.start(e, true, position)?,
                Ok(Event::Text(ref t)) => {
                    let text = t.unescape().map_err(|e| Error::Xml { position, message: e.to_string() })?;
                    self.text(&text)?;
                }
                Ok(Event::End(ref e)) => {
                    let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                    self.end(&name)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::Xml {
                        position: reader.error_position(),
                        message: e.to_string(),
                    });
                }
                _ => {}
            }
        }

        if self.current.is_some() {
            return Err(Error::Xml {
                position: reader.buffer_position(),
                message: "unterminated <pattern> element".to_string(),
            });
        }

        PatternCatalog::new(self.specs)
    }

    /// Open an element that began at byte `position`.
    ///
    /// Malformed markup is an [`Error::Xml`]; bad settings keep their own
    /// variants.
    fn start(&mut self, e: &BytesStart<'_>, is_empty: bool, position: u64) -> Result<()> {
        let xml_err = |message: String| Error::Xml { position, message };
        let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();

        if tag == "pattern" {
            if self.current.is_some() {
                return Err(xml_err("nested <pattern> element".to_string()));
            }
            let name = attribute(e, "name")
                .map_err(xml_err)?
                .ok_or_else(|| xml_err("<pattern> without a name attribute".to_string()))?;
            let type_tag = attribute(e, "type")
                .map_err(xml_err)?
                .ok_or_else(|| xml_err(format!("pattern '{}' has no type attribute", name)))?;
            self.current = Some(PendingPattern { name, type_tag, settings: BTreeMap::new() });
            if is_empty {
                self.finish_pattern()?;
            }
            return Ok(());
        }

        if let Some(pattern) = &self.current {
            if is_empty {
                // <spacing/> carries no number
                return Err(Error::InvalidSetting {
                    pattern: pattern.name.clone(),
                    setting: tag,
                    value: String::new(),
                });
            }
            self.setting = Some((tag, false));
        }
        // Anything outside a <pattern> (the root, comments, wrappers) is ignored.
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        let (Some(pattern), Some((key, seen))) = (self.current.as_mut(), self.setting.as_mut()) else {
            return Ok(());
        };

        let value: f64 = text.trim().parse().map_err(|_| Error::InvalidSetting {
            pattern: pattern.name.clone(),
            setting: key.clone(),
            value: text.to_string(),
        })?;
        pattern.settings.insert(key.clone(), value);
        *seen = true;
        Ok(())
    }

    fn end(&mut self, tag: &str) -> Result<()> {
        if tag == "pattern" {
            return self.finish_pattern();
        }

        if let Some((key, seen)) = self.setting.take() {
            if !seen {
                let pattern = self.current.as_ref().map(|p| p.name.clone()).unwrap_or_default();
                return Err(Error::InvalidSetting { pattern, setting: key, value: String::new() });
            }
        }
        Ok(())
    }

    fn finish_pattern(&mut self) -> Result<()> {
        if let Some(p) = self.current.take() {
            self.specs.push(PatternSpec::from_parts(p.name, p.type_tag, p.settings)?);
        }
        Ok(())
    }
}

/// Unescaped value of attribute `key`, if present.
fn attribute(e: &BytesStart<'_>, key: &str) -> std::result::Result<Option<String>, String> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| err.to_string())?;
        if attr.key.as_ref() == key.as_bytes() {
            let value = attr.unescape_value().map_err(|err| err.to_string())?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<patterns>
  <!-- polka dots -->
  <pattern name="dots1" type="dot">
    <spacing>20</spacing>
    <size>10</size>
  </pattern>
  <pattern name="stripe45" type="stripe">
    <spacing>8</spacing>
    <angle>45</angle>
    <lineWidth>2</lineWidth>
  </pattern>
  <pattern name="check12" type="check">
    <spacing>12</spacing>
  </pattern>
</patterns>"#;

    #[test]
    fn parses_xml_catalog_in_order() {
        let cat = PatternCatalog::from_xml(XML).unwrap();
        let names: Vec<_> = cat.names().collect();
        assert_eq!(names, vec!["dots1", "stripe45", "check12"]);

        let dots = cat.get("dots1").unwrap();
        assert_eq!(dots.tiling, Some(Tiling::Dot { spacing: 20.0, size: 10.0 }));

        let stripe = cat.get("stripe45").unwrap();
        assert_eq!(stripe.settings.get("lineWidth"), Some(&2.0));
        assert_eq!(stripe.tiling.unwrap().line_width(), 2.0);
    }

    #[test]
    fn unknown_type_loads_without_tiling() {
        let xml = r#"<patterns><pattern name="odd" type="spiral"><spacing>5</spacing></pattern></patterns>"#;
        let cat = PatternCatalog::from_xml(xml).unwrap();
        let odd = cat.get("odd").unwrap();
        assert_eq!(odd.type_tag, "spiral");
        assert!(odd.tiling.is_none());
        assert!(odd.pattern_type().is_none());
    }

    #[test]
    fn missing_spacing_fails_fast() {
        let xml = r#"<patterns><pattern name="nospace" type="grid"><size>4</size></pattern></patterns>"#;
        let err = PatternCatalog::from_xml(xml).unwrap_err();
        assert!(matches!(err, Error::MissingSetting { setting: "spacing", .. }), "{err}");
    }

    #[test]
    fn non_numeric_setting_fails_fast() {
        let xml = r#"<patterns><pattern name="p" type="dot"><spacing>wide</spacing></pattern></patterns>"#;
        let err = PatternCatalog::from_xml(xml).unwrap_err();
        assert!(matches!(err, Error::InvalidSetting { ref setting, .. } if setting == "spacing"));
    }

    #[test]
    fn empty_setting_element_fails() {
        let xml = r#"<patterns><pattern name="p" type="dot"><spacing></spacing></pattern></patterns>"#;
        assert!(matches!(PatternCatalog::from_xml(xml), Err(Error::InvalidSetting { .. })));
        let xml = r#"<patterns><pattern name="p" type="dot"><spacing/></pattern></patterns>"#;
        match PatternCatalog::from_xml(xml) {
            Err(Error::InvalidSetting { pattern, setting, value }) => {
                assert_eq!((pattern.as_str(), setting.as_str(), value.as_str()), ("p", "spacing", ""));
            }
            other => panic!("expected InvalidSetting, got {:?}", other),
        }
    }

    #[test]
    fn self_closing_pattern_keeps_setting_errors_typed() {
        let xml = r#"<patterns><pattern name="p" type="grid"/></patterns>"#;
        assert!(matches!(
            PatternCatalog::from_xml(xml),
            Err(Error::MissingSetting { setting: "spacing", .. })
        ));
    }

    #[test]
    fn nested_pattern_is_xml_error_with_position() {
        let xml = r#"<patterns><pattern name="a" type="dot"><pattern name="b" type="dot"/></pattern></patterns>"#;
        match PatternCatalog::from_xml(xml) {
            Err(Error::Xml { position, message }) => {
                assert_eq!(position, xml.find(r#"<pattern name="b""#).unwrap() as u64);
                assert!(message.contains("nested"), "{message}");
            }
            other => panic!("expected Xml error, got {:?}", other),
        }
    }

    #[test]
    fn missing_name_attribute_is_xml_error() {
        let xml = r#"<patterns><pattern type="dot"><spacing>4</spacing></pattern></patterns>"#;
        assert!(matches!(PatternCatalog::from_xml(xml), Err(Error::Xml { .. })));
    }

    #[test]
    fn malformed_xml_is_reported() {
        let xml = r#"<patterns><pattern name="p" type="dot"><spacing>4</size></pattern></patterns>"#;
        assert!(matches!(PatternCatalog::from_xml(xml), Err(Error::Xml { .. })));
    }

    #[test]
    fn duplicate_names_rejected() {
        let xml = r#"<patterns>
            <pattern name="a" type="dot"><spacing>4</spacing></pattern>
            <pattern name="a" type="grid"><spacing>4</spacing></pattern>
        </patterns>"#;
        assert!(matches!(PatternCatalog::from_xml(xml), Err(Error::DuplicatePattern(_))));
    }

    #[test]
    fn parses_yaml_catalog() {
        let yaml = r#"
- name: dots1
  type: dot
  settings: { spacing: 20, size: 10 }
- name: vlines
  type: vertical
  settings:
    spacing: 12
"#;
        let cat = PatternCatalog::from_yaml(yaml).unwrap();
        assert_eq!(cat.len(), 2);
        assert_eq!(
            cat.get("vlines").unwrap().tiling,
            Some(Tiling::Vertical { spacing: 12.0, line_width: 1.0 })
        );
    }

    #[test]
    fn yaml_and_xml_agree() {
        let yaml = r#"
- { name: dots1, type: dot, settings: { spacing: 20, size: 10 } }
- { name: stripe45, type: stripe, settings: { spacing: 8, angle: 45, lineWidth: 2 } }
- { name: check12, type: check, settings: { spacing: 12 } }
"#;
        assert_eq!(PatternCatalog::from_yaml(yaml).unwrap(), PatternCatalog::from_xml(XML).unwrap());
    }
}
