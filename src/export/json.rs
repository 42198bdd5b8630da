use super::ExportError;
use crate::models::Script;

/// Pretty-printed JSON with the same field names as the generation endpoint.
pub fn render(script: &Script) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(script)?)
}

pub fn parse(content: &str) -> Result<Script, ExportError> {
    Ok(serde_json::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::ScriptGenerator;
    use crate::models::GenerationRequest;

    #[test]
    fn test_json_export_parses_back() {
        let request = GenerationRequest::new("um farol assombrado", "terror", "medio");
        let script = ScriptGenerator::default().generate(&request);

        let exported = render(&script).unwrap();
        assert!(exported.contains("\n  \"titulo\": "));

        assert_eq!(parse(&exported).unwrap(), script);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse("{not json"), Err(ExportError::Json(_))));
    }
}
