use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Report;

/// Structured output, written either as plain text or as JSON lines.
pub(crate) struct Output<O> {
    out: O,
    kind: OutputKind,
}

pub(crate) enum OutputKind {
    Json,
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    pub(crate) fn info(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Info, m)
    }

    pub(crate) fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    pub(crate) fn report(&mut self, report: &Report) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => self.json(&Line {
                ty: LineType::Report,
                data: report,
            }),
            OutputKind::Normal => writeln!(self.out, "{report}"),
        }
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        match &self.kind {
            OutputKind::Json => self.json(&Line {
                ty: LineType::Message,
                data: Message { kind, output: m },
            }),
            OutputKind::Normal => writeln!(self.out, "{kind}: {m}"),
        }
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Report,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Info,
    Error,
}

impl MessageKind {
    fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Error => "error",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

struct Message<T> {
    kind: MessageKind,
    output: T,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &Rendered(&self.output))?;
        map.end()
    }
}

/// Serialize any displayable value as a string.
struct Rendered<T>(T);

impl<T> Serialize for Rendered<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::cli::Report;

    use super::{Output, OutputKind};

    #[test]
    fn test_normal_lines() {
        let mut buf = Vec::new();
        let mut o = Output::new(&mut buf, OutputKind::Normal);

        o.info(format_args!("starting up")).unwrap();
        o.error("boom").unwrap();

        assert_eq!(buf, b"info: starting up\nerror: boom\n");
    }

    #[test]
    fn test_json_message() {
        let mut buf = Vec::new();
        let mut o = Output::new(&mut buf, OutputKind::Json);

        o.info(format_args!("hello")).unwrap();

        assert_eq!(
            buf,
            br#"{"type":"message","data":{"kind":"info","output":"hello"}}
"#
        );
    }

    #[test]
    fn test_json_report() {
        let mut buf = Vec::new();
        let mut o = Output::new(&mut buf, OutputKind::Json);

        o.report(&Report::default()).unwrap();

        let line: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(line["type"], "report");
        assert_eq!(line["data"]["count"], 0);
    }
}
