use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceFile, SourceMap, sync::Lrc};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

use super::source::SourceText;

pub struct ParsedSource {
    pub module: Module,
    pub source_map: SourceMap,
    pub file: Lrc<SourceFile>,
    pub source: String,
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("module", &self.module)
            .field("file", &self.file)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

impl ParsedSource {
    /// Byte-offset view over this file's text.
    pub fn text(&self) -> SourceText<'_> {
        SourceText::new(&self.file, &self.source)
    }
}

/// Parse a TypeScript/TSX source string into an AST.
pub fn parse_ts_source(code: String, file_path: &str) -> Result<ParsedSource> {
    let source_map = SourceMap::default();
    let file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*file), None);
    let module = parser
        .parse_module()
        .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))?;
    // The parser recovers from some syntax errors; a file it only
    // half-understood is not safe to rewrite.
    let errors = parser.take_errors();
    if !errors.is_empty() {
        return Err(anyhow!("Failed to parse {}: {:?}", file_path, errors));
    }
    Ok(ParsedSource {
        module,
        source_map,
        file,
        source: code,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_typescript_with_tsx() {
        let parsed = parse_ts_source(
            "class Device {}\nconst el = <div>{dev}</div>;\n".to_string(),
            "app.tsx",
        )
        .unwrap();
        assert_eq!(parsed.module.body.len(), 2);
    }

    #[test]
    fn reports_parse_failures() {
        let result = parse_ts_source("const = ;".to_string(), "broken.ts");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("broken.ts"));
    }
}
