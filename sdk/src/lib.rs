//! proto-outline
//!
//! Driver-side support for the outline transcoder.
//!
//! - `transcode_stream` / `transcode_file` for line-by-line processing of readers and files
//! - `output_path_for` for the `<file name>.parse` naming rule
//! - `outline_to_json` for a JSON view of the token stream
//! - Re-exports of the transcoder and schema types

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use proto_outline_transcoder::utils::{describe_blocks, quote};
use tracing::{debug, warn};

pub use proto_outline_transcoder::{
    classify, transcode, ClassifiedLine, ClosePolicy, OpenBlock, Outline, OutlineError,
    ParserState, TranscodeOptions,
};
pub use proto_outline_transcoder::options::parse_indent_char;
pub use proto_outline_schema::{BlockKind, FieldOption, IndentStyle, OutputToken};

/// Extension appended to the input file name to form the output file name.
pub const OUTPUT_EXTENSION: &str = "parse";

/// Counters from one streaming run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Summary {
    pub lines:    usize,
    pub tokens:   usize,
    pub unclosed: Vec<OpenBlock>,
}

/// Read `reader` line by line and write one rendered token per line to `writer`.
///
/// A final line without a trailing newline is still processed. Blocks left
/// open at the end are logged as a warning, or fail the run in strict mode.
pub fn transcode_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    options: &TranscodeOptions,
) -> Result<Summary, OutlineError> {
    let mut state  = ParserState::new(*options);
    let mut tokens = 0;

    let mut buf    = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        // Invalid UTF-8 is replaced, not rejected
        let line = String::from_utf8_lossy(&buf);
        if let Some(token) = state.process_line(&line)? {
            writeln!(writer, "{}", token.render(&options.indent))?;
            tokens += 1;
        }
    }
    writer.flush()?;

    let lines    = state.lines_processed();
    let unclosed = state.finish()?;
    if !unclosed.is_empty() {
        warn!(blocks = %describe_blocks(&unclosed), "unterminated blocks at end of input");
    }
    debug!(lines, tokens, "read over");

    Ok(Summary { lines, tokens, unclosed })
}

/// The output path for `input`: its file name plus `.parse`, relative to the
/// current directory. `protos/foo.proto` becomes `foo.proto.parse`.
pub fn output_path_for(input: &Path) -> Result<PathBuf, OutlineError> {
    let name = input
        .file_name()
        .ok_or_else(|| OutlineError::InvalidPath(quote(&input.to_string_lossy())))?;

    let mut out = name.to_os_string();
    out.push(".");
    out.push(OUTPUT_EXTENSION);
    Ok(PathBuf::from(out))
}

/// Transcode the file at `input` into the file at `output`.
pub fn transcode_file(
    input: &Path,
    output: &Path,
    options: &TranscodeOptions,
) -> Result<Summary, OutlineError> {
    debug!(input = %input.display(), output = %output.display(), "parse file begin");
    let reader = BufReader::new(File::open(input)?);

    // Render into memory first so a failed run leaves no partial output behind
    let mut rendered = Vec::new();
    let summary = transcode_stream(reader, &mut rendered, options)?;
    fs::write(output, rendered)?;
    Ok(summary)
}

/// Read a schema file as text. Bytes that are not valid UTF-8 are replaced
/// rather than rejected.
pub fn read_schema(input: &Path) -> Result<String, OutlineError> {
    let bytes = fs::read(input)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Transcode `text` and pretty-print the resulting `Outline` as JSON.
pub fn outline_to_json(text: &str, options: &TranscodeOptions) -> Result<String, OutlineError> {
    let outline = transcode(text, options)?;
    serde_json::to_string_pretty(&outline).map_err(|e| OutlineError::Json(e.to_string()))
}

pub mod error {
    pub use proto_outline_transcoder::error::OutlineError;
}

pub mod schema {
    pub use proto_outline_schema::{BlockKind, FieldOption, IndentStyle, OutputToken};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_transcode_stream() {
        let input = "message Foo {\n  optional int32 bar = 1;\n}";
        let mut out = Vec::new();
        let summary = transcode_stream(Cursor::new(input), &mut out, &TranscodeOptions::default()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "message-Foo\n\tfield-optional-int32-bar\nmsgend\n");
        assert_eq!(summary.lines, 3);
        assert_eq!(summary.tokens, 3);
        assert!(summary.unclosed.is_empty());
    }

    #[test]
    fn test_transcode_stream_reports_unclosed() {
        let mut out = Vec::new();
        let summary = transcode_stream(Cursor::new("message A {\n"), &mut out, &TranscodeOptions::default()).unwrap();
        assert_eq!(summary.unclosed.len(), 1);
        assert_eq!(summary.unclosed[0].name, "A");
    }

    #[test]
    fn test_transcode_stream_unbalanced_close() {
        let mut out = Vec::new();
        let err = transcode_stream(Cursor::new("}\n"), &mut out, &TranscodeOptions::default()).unwrap_err();
        assert!(matches!(err, OutlineError::UnbalancedClose { line: 1 }), "got {:?}", err);
    }

    #[test]
    fn test_transcode_stream_tolerates_invalid_utf8() {
        let input: &[u8] = b"message Foo {\n  // caf\xE9\n  optional int32 bar = 1;\n}\n";
        let mut out = Vec::new();
        let summary = transcode_stream(input, &mut out, &TranscodeOptions::default()).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "message-Foo\n\tfield-optional-int32-bar\nmsgend\n");
        assert_eq!(summary.lines, 4);
    }

    #[test]
    fn test_transcode_stream_keeps_crlf_lines() {
        let input: &[u8] = b"enum E {\r\n  A = 0;\r\n}";
        let mut out = Vec::new();
        let summary = transcode_stream(input, &mut out, &TranscodeOptions::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "enum-E\n");
        assert_eq!(summary.lines, 3);
        assert!(summary.unclosed.is_empty());
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("proto-outline-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_transcode_file_writes_output() {
        let dir    = scratch_dir("ok");
        let input  = dir.join("a.proto");
        let output = dir.join("a.proto.parse");
        fs::write(&input, "message A {\n  repeated string tags = 1;\n}\n").unwrap();

        let summary = transcode_file(&input, &output, &TranscodeOptions::default()).unwrap();
        assert_eq!(summary.tokens, 3);
        assert_eq!(fs::read_to_string(&output).unwrap(), "message-A\n\tfield-repeated-string-tags\nmsgend\n");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_transcode_file_leaves_no_output_on_unbalanced_close() {
        let dir    = scratch_dir("unbalanced");
        let input  = dir.join("a.proto");
        let output = dir.join("a.proto.parse");
        fs::write(&input, "message A {\n}\n}\n").unwrap();

        let err = transcode_file(&input, &output, &TranscodeOptions::default()).unwrap_err();
        assert!(matches!(err, OutlineError::UnbalancedClose { line: 3 }), "got {:?}", err);
        assert!(!output.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_transcode_file_leaves_no_output_when_strict_fails() {
        let dir    = scratch_dir("strict");
        let input  = dir.join("b.proto");
        let output = dir.join("b.proto.parse");
        fs::write(&input, "message B {\n").unwrap();

        let options = TranscodeOptions::default().with_strict(true);
        let err = transcode_file(&input, &output, &options).unwrap_err();
        assert!(matches!(err, OutlineError::UnterminatedBlocks { .. }), "got {:?}", err);
        assert!(!output.exists());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_schema_replaces_invalid_utf8() {
        let dir   = scratch_dir("lossy");
        let input = dir.join("c.proto");
        fs::write(&input, b"// caf\xE9\nenum C {\n}\n").unwrap();

        let text = read_schema(&input).unwrap();
        assert!(text.starts_with("// caf\u{FFFD}\n"));
        let json = outline_to_json(&text, &TranscodeOptions::default()).unwrap();
        assert!(json.contains("\"name\": \"C\""));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(output_path_for(Path::new("protos/foo.proto")).unwrap(), PathBuf::from("foo.proto.parse"));
        assert_eq!(output_path_for(Path::new("x.proto")).unwrap(), PathBuf::from("x.proto.parse"));
        assert!(matches!(output_path_for(Path::new("/")), Err(OutlineError::InvalidPath(_))));
        assert!(matches!(output_path_for(Path::new("..")), Err(OutlineError::InvalidPath(_))));
    }

    #[test]
    fn test_outline_to_json() {
        let json = outline_to_json("enum Color {\n}\n", &TranscodeOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tokens"][0]["token"], "enum_open");
        assert_eq!(value["tokens"][0]["name"], "Color");
        assert_eq!(value["tokens"][0]["depth"], 0);
        assert_eq!(value["unclosed"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_outline_to_json_field_option() {
        let json = outline_to_json("message M {\n  bytes b = 1;\n}\n", &TranscodeOptions::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tokens"][1]["option"], "optional");
        assert_eq!(value["tokens"][1]["field_type"], "bytes");
        assert_eq!(value["tokens"][2]["token"], "message_end");
    }
}
