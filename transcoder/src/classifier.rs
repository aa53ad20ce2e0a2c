use regex::Regex;
use lazy_static::lazy_static;
use proto_outline_schema::FieldOption;
use crate::types::ClassifiedLine;

lazy_static! {
    static ref MESSAGE_OPEN: Regex = Regex::new(r"\bmessage[ \t]+([_0-9a-zA-Z]+)").unwrap();
    static ref ENUM_OPEN:    Regex = Regex::new(r"\benum[ \t]+([_0-9a-zA-Z]+)").unwrap();
    static ref FIELD_DECL:   Regex = Regex::new(
        r"(required|optional|repeated)?[ \t]+([._0-9a-zA-Z]+)[ \t]+([_0-9a-zA-Z]+)[ \t]*=[ \t]*[0-9]+"
    ).unwrap();
}

/// Classify one raw source line.
///
/// Patterns are tried in order: message open, enum open, field declaration,
/// then a `}` anywhere on the line. The first match wins and anything else
/// is `Irrelevant`.
pub fn classify(line: &str) -> ClassifiedLine {
    let line = line.trim_end_matches(['\n', '\r']);

    if let Some(caps) = MESSAGE_OPEN.captures(line) {
        return ClassifiedLine::MessageOpen { name: caps[1].to_string() };
    }

    if let Some(caps) = ENUM_OPEN.captures(line) {
        return ClassifiedLine::EnumOpen { name: caps[1].to_string() };
    }

    if let Some(caps) = FIELD_DECL.captures(line) {
        let option = caps
            .get(1)
            .and_then(|m| FieldOption::parse(m.as_str()))
            .unwrap_or_default();
        return ClassifiedLine::FieldDecl {
            option,
            field_type: caps[2].to_string(),
            name:       caps[3].to_string(),
        };
    }

    if line.contains('}') {
        return ClassifiedLine::BlockClose;
    }

    ClassifiedLine::Irrelevant
}
