//! Closed-set template renderer.
//!
//! Templates use the Go `text/template` action syntax, restricted to what a
//! scaffold needs:
//!
//! - `{{ .Name }}`, `{{ .Org }}`, `{{ .GoVersion }}` interpolate a variable
//! - `{{/* ... */}}` is a comment
//! - `{{ "..." }}` and ``{{ `...` }}`` emit a literal, which is how a template
//!   writes a literal `{{`
//! - `{{- ` and ` -}}` trim the whitespace before / after the action
//!
//! Anything else inside `{{ }}` is a [`SyntaxError`]. Unknown variables are
//! rejected while parsing, so a template that parses always renders.

use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::error::{Result, ScaffoldError};
use crate::template_variables::{RenderContext, Variable};

/// Files whose name ends with this suffix are rendered, everything else is copied.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Error, Debug, PartialEq, Eq)]
#[error("line {line}, column {column}: {kind}")]
pub struct SyntaxError {
    pub line: usize,
    pub column: usize,
    pub kind: SyntaxErrorKind,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SyntaxErrorKind {
    #[error("unclosed action")]
    UnclosedAction,
    #[error("missing value for action")]
    EmptyAction,
    #[error("unknown variable `.{0}` (available: .Name, .Org, .GoVersion)")]
    UnknownVariable(String),
    #[error("unterminated quoted string")]
    UnterminatedString,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unsupported action `{0}`")]
    Unsupported(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Var(Variable),
}

/// A parsed template, ready to be rendered any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(text: &str) -> std::result::Result<Self, SyntaxError> {
        Parser::new(text).parse()
    }

    pub fn render_to<W: Write>(&self, out: &mut W, ctx: &RenderContext) -> io::Result<()> {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.write_all(text.as_bytes())?,
                Segment::Var(var) => out.write_all(ctx.get(*var).as_bytes())?,
            }
        }
        Ok(())
    }

    pub fn render(&self, ctx: &RenderContext) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => text.as_str(),
                Segment::Var(var) => ctx.get(*var),
            })
            .collect()
    }
}

/// Parse and render `text` in one go.
pub fn render_str(text: &str, ctx: &RenderContext) -> std::result::Result<String, SyntaxError> {
    Ok(Template::parse(text)?.render(ctx))
}

/// Render the template at `source` into a new file at `dest`.
///
/// `dest` must not exist yet. The template is parsed before `dest` is created,
/// so a syntax error leaves nothing behind.
pub fn render_template_file(source: &Path, dest: &Path, ctx: &RenderContext) -> Result<()> {
    let text = fs::read_to_string(source).map_err(|source_err| ScaffoldError::TemplateRead {
        path: source.to_path_buf(),
        source: source_err,
    })?;

    let template = Template::parse(&text).map_err(|e| ScaffoldError::TemplateSyntax {
        path: source.to_path_buf(),
        source: e,
    })?;

    let write_err = |e: io::Error| ScaffoldError::RenderWrite {
        path: dest.to_path_buf(),
        source: e,
    };
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(dest)
        .map_err(write_err)?;
    let mut out = BufWriter::new(file);
    template.render_to(&mut out, ctx).map_err(write_err)?;
    out.flush().map_err(write_err)?;
    Ok(())
}

fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n')
}

struct Parser<'a> {
    text: &'a str,
    pos: usize,
    segments: Vec<Segment>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            segments: Vec::new(),
        }
    }

    fn parse(mut self) -> std::result::Result<Template, SyntaxError> {
        let text = self.text;
        let mut trim_leading = false;
        while let Some(found) = text[self.pos..].find(OPEN) {
            let open = self.pos + found;
            let body = open + OPEN.len();
            let trim_before = self.is_trim_marker(body);

            let mut chunk = &text[self.pos..open];
            if trim_leading {
                chunk = chunk.trim_start_matches(is_space);
            }
            if trim_before {
                chunk = chunk.trim_end_matches(is_space);
            }
            self.push_text(chunk);

            self.pos = if trim_before { body + 1 } else { body };
            trim_leading = self.action(open)?;
        }

        let mut tail = &text[self.pos..];
        if trim_leading {
            tail = tail.trim_start_matches(is_space);
        }
        self.push_text(tail);

        Ok(Template {
            segments: self.segments,
        })
    }

    /// `-` directly followed by whitespace, as in `{{- ` or ` -}}`.
    fn is_trim_marker(&self, at: usize) -> bool {
        let mut chars = self.text[at..].chars();
        chars.next() == Some('-') && chars.next().is_some_and(is_space)
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.segments.last_mut() {
            Some(Segment::Text(prev)) => prev.push_str(text),
            _ => self.segments.push(Segment::Text(text.to_string())),
        }
    }

    fn error(&self, open: usize, kind: SyntaxErrorKind) -> SyntaxError {
        let before = &self.text[..open];
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        SyntaxError {
            line: before.matches('\n').count() + 1,
            column: before[line_start..].chars().count() + 1,
            kind,
        }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn skip_space(&mut self) -> usize {
        let rest = self.rest();
        let skipped = rest.len() - rest.trim_start_matches(is_space).len();
        self.pos += skipped;
        skipped
    }

    /// Parse one action whose `{{` starts at `open`. `self.pos` is just past the
    /// opening delimiter (and its trim marker). Returns whether the action ends
    /// with a trim marker.
    fn action(&mut self, open: usize) -> std::result::Result<bool, SyntaxError> {
        self.skip_space();
        let rest = self.rest();

        if rest.is_empty() {
            return Err(self.error(open, SyntaxErrorKind::UnclosedAction));
        } else if rest.starts_with(CLOSE) || rest.starts_with("-}}") {
            return Err(self.error(open, SyntaxErrorKind::EmptyAction));
        } else if rest.starts_with('}') {
            return Err(self.error(open, SyntaxErrorKind::UnclosedAction));
        } else if let Some(comment) = rest.strip_prefix("/*") {
            let end = comment
                .find("*/")
                .ok_or_else(|| self.error(open, SyntaxErrorKind::UnterminatedComment))?;
            self.pos += 2 + end + 2;
        } else if rest.starts_with('"') {
            let literal = self.quoted(open)?;
            self.push_text(&literal);
        } else if let Some(raw) = rest.strip_prefix('`') {
            let end = raw
                .find('`')
                .ok_or_else(|| self.error(open, SyntaxErrorKind::UnterminatedString))?;
            self.push_text(&raw[..end]);
            self.pos += 1 + end + 1;
        } else if let Some(field) = rest.strip_prefix('.') {
            let len = field
                .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                .unwrap_or(field.len());
            let ident = &field[..len];
            if ident.is_empty() {
                return Err(self.error(open, SyntaxErrorKind::Unsupported(".".to_string())));
            }
            let var = ident
                .parse::<Variable>()
                .map_err(|_| self.error(open, SyntaxErrorKind::UnknownVariable(ident.to_string())))?;
            self.segments.push(Segment::Var(var));
            self.pos += 1 + len;
        } else {
            let word = rest
                .split(|c: char| is_space(c) || c == '}')
                .next()
                .unwrap_or(rest);
            return Err(self.error(open, SyntaxErrorKind::Unsupported(word.to_string())));
        }

        let spaced = self.skip_space() > 0;
        let rest = self.rest();
        if spaced && rest.starts_with("-}}") {
            self.pos += 3;
            Ok(true)
        } else if rest.starts_with(CLOSE) {
            self.pos += CLOSE.len();
            Ok(false)
        } else if rest.is_empty() || rest.starts_with('}') {
            // e.g. `{{.Name}`
            Err(self.error(open, SyntaxErrorKind::UnclosedAction))
        } else {
            let word = rest.split(is_space).next().unwrap_or(rest);
            Err(self.error(open, SyntaxErrorKind::Unsupported(word.to_string())))
        }
    }

    /// Interpreted string literal. `self.pos` is on the opening quote.
    fn quoted(&mut self, open: usize) -> std::result::Result<String, SyntaxError> {
        let mut value = String::new();
        let mut chars = self.rest().char_indices().skip(1);
        while let Some((i, c)) = chars.next() {
            match c {
                '"' => {
                    self.pos += i + 1;
                    return Ok(value);
                }
                '\n' => break,
                '\\' => match chars.next() {
                    Some((_, 'n')) => value.push('\n'),
                    Some((_, 't')) => value.push('\t'),
                    Some((_, '"')) => value.push('"'),
                    Some((_, '\\')) => value.push('\\'),
                    Some((_, other)) => {
                        return Err(
                            self.error(open, SyntaxErrorKind::Unsupported(format!("\\{other}")))
                        )
                    }
                    None => break,
                },
                c => value.push(c),
            }
        }
        Err(self.error(open, SyntaxErrorKind::UnterminatedString))
    }
}
