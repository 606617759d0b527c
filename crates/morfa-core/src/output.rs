use std::io;

use morfa_config::output::{OutputConfig, OutputEncoding};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};

/// Indented JSON, as printed for successful runs
pub fn write_pretty<W, T>(writer: W, value: &T, config: &OutputConfig) -> serde_json::Result<()>
where
    W: io::Write,
    T: Serialize + ?Sized,
{
    let indent = " ".repeat(config.indent);
    let formatter = Encoded::new(PrettyFormatter::with_indent(indent.as_bytes()), config.encoding);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}

/// Single-line JSON with `": "` and `", "` separators, as printed for errors
pub fn write_line<W, T>(writer: W, value: &T, encoding: OutputEncoding) -> serde_json::Result<()>
where
    W: io::Write,
    T: Serialize + ?Sized,
{
    let formatter = Encoded::new(SpacedFormatter, encoding);
    let mut serializer = Serializer::with_formatter(writer, formatter);
    value.serialize(&mut serializer)
}

pub fn to_pretty_string<T>(value: &T, config: &OutputConfig) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    write_pretty(&mut buf, value, config)?;
    into_string(buf)
}

pub fn to_line_string<T>(value: &T, encoding: OutputEncoding) -> serde_json::Result<String>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    write_line(&mut buf, value, encoding)?;
    into_string(buf)
}

fn into_string(buf: Vec<u8>) -> serde_json::Result<String> {
    String::from_utf8(buf).map_err(serde::ser::Error::custom)
}

/// Compact output with a space after every separator
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Wraps a layout formatter and applies the configured text encoding
pub struct Encoded<F> {
    inner: F,
    encoding: OutputEncoding,
}

impl<F: Formatter> Encoded<F> {
    pub fn new(inner: F, encoding: OutputEncoding) -> Self {
        Self { inner, encoding }
    }
}

impl<F: Formatter> Formatter for Encoded<F> {
    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn end_object_key<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_key(writer)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.inner.end_object_value(writer)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        match self.encoding {
            OutputEncoding::Utf8 => self.inner.write_string_fragment(writer, fragment),
            OutputEncoding::Ascii => {
                let mut units = [0u16; 2];
                for c in fragment.chars() {
                    if c.is_ascii() {
                        writer.write_all(&[c as u8])?;
                    } else {
                        for unit in c.encode_utf16(&mut units) {
                            write!(writer, "\\u{unit:04x}")?;
                        }
                    }
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;
    use crate::report::ErrorReport;

    #[test]
    fn test_error_line_format() {
        let text = to_line_string(&ErrorReport::new("No input"), OutputEncoding::Utf8).unwrap();
        assert_eq!(text, r#"{"error": "No input"}"#);

        let text =
            to_line_string(&ErrorReport::new("Invalid JSON input"), OutputEncoding::Ascii).unwrap();
        assert_eq!(text, r#"{"error": "Invalid JSON input"}"#);
    }

    #[test]
    fn test_line_format_lists() {
        let text = to_line_string(&json!([1, [2, 3], {}]), OutputEncoding::Utf8).unwrap();
        assert_eq!(text, "[1, [2, 3], {}]");
    }

    #[test]
    fn test_pretty_keeps_cyrillic() {
        let value = json!({"word": "кіт", "cases": {"gent": "кота", "voct": null}});
        let text = to_pretty_string(&value, &OutputConfig::default()).unwrap();

        assert!(text.contains("\"кіт\""));
        assert!(!text.contains("\\u"));
        assert!(text.contains("\n  \"word\": \"кіт\""));
        assert!(text.contains("\"voct\": null"));
    }

    #[test]
    fn test_ascii_escapes_non_ascii() {
        let config = OutputConfig {
            encoding: OutputEncoding::Ascii,
            ..OutputConfig::default()
        };
        let text = to_pretty_string(&json!(["кіт", "a\"b", "😀"]), &config).unwrap();

        assert!(text.is_ascii());
        assert!(text.contains(r#""\u043a\u0456\u0442""#));
        assert!(text.contains(r#""a\"b""#));
        assert!(text.contains(r#""\ud83d\ude00""#));
    }

    #[test]
    fn test_output_parses_back() {
        let value = json!({
            "original": "старший сержант",
            "parts": [{"word": "старший", "score": 0.5, "cases": {"nomn": "старший"}}, "xyz"],
        });
        for encoding in [OutputEncoding::Utf8, OutputEncoding::Ascii] {
            let config = OutputConfig {
                encoding,
                indent: 4,
                ..OutputConfig::default()
            };
            let text = to_pretty_string(&value, &config).unwrap();
            let parsed: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, value);

            let text = to_line_string(&value, encoding).unwrap();
            let parsed: Value = serde_json::from_str(&text).unwrap();
            assert_eq!(parsed, value);
        }
    }

    #[test]
    fn test_empty_containers() {
        let text = to_pretty_string(&json!({"parts": []}), &OutputConfig::default()).unwrap();
        assert_eq!(text, "{\n  \"parts\": []\n}");
    }
}
