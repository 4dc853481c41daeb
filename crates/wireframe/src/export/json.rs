//! JSON output for laid-out documents.

use log::debug;

use wireframe_core::semantic::Document;

use super::{Error, Exporter};

/// Writes documents back as pretty printed JSON.
///
/// Field order and unknown fields survive, so the output differs from the
/// input only in recomputed geometry.
#[derive(Debug, Default, Clone, Copy)]
pub struct Json;

impl Exporter for Json {
    fn export_document(&self, document: &Document) -> Result<String, Error> {
        let output = serde_json::to_string_pretty(document).map_err(Error::Json)?;
        debug!(bytes = output.len(); "JSON document rendered");
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use wireframe_core::semantic::{Shape, ShapeList};

    use super::*;

    #[test]
    fn test_bare_array_stays_an_array() {
        let document = Document::Shapes(vec![Shape::new("card", "A")]);
        let output = Json.export_document(&document).unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["type"], "card");
        assert_eq!(value[0]["label"], "A");
    }

    #[test]
    fn test_shape_list_keeps_extra_fields() {
        let document: Document =
            serde_json::from_str(r#"{"shapes": [], "requestId": "abc"}"#).unwrap();
        assert!(matches!(document, Document::ShapeList(_)));

        let output = Json.export_document(&document).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["requestId"], "abc");
        assert_eq!(value["shapes"], serde_json::json!([]));

        let empty = Document::ShapeList(ShapeList::new(Vec::new()));
        assert!(Json.export_document(&empty).unwrap().contains("\"shapes\""));
    }

    #[test]
    fn test_output_is_pretty_printed() {
        let document = Document::Shapes(vec![Shape::new("text", "Hi")]);
        let output = Json.export_document(&document).unwrap();
        assert!(output.contains('\n'));
    }
}
