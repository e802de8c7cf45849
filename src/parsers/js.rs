use anyhow::{Result, anyhow};
use swc_common::{FileName, SourceMap};
use swc_ecma_ast::Program;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// Parse JS/TS source code into an AST.
///
/// All scannable dialects (plain JS, TS, JSX, TSX, modules, legacy scripts,
/// legacy decorators) go through the one TypeScript syntax with `tsx`
/// enabled. A parse failure means the caller skips the file; it must never
/// abort a project-wide scan.
pub fn parse_source(code: String, file_path: &str) -> Result<Program> {
    let source_map = SourceMap::default();
    let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        decorators: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);
    parser
        .parse_program()
        .map_err(|e| anyhow!("Failed to parse {}: {:?}", file_path, e))
}
