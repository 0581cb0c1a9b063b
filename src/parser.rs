use super::errors::{Result, ZoneError};
use super::record::{Name, RData, RecordClass, RecordType, ResourceRecord};
use super::zone::Zone;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// A domain token: groups of word characters, each optionally dot-terminated
const DOMAIN_PATTERN: &str = r"^(?:\w+\.?)+$";
/// An rdata token: word characters and dots, no embedded whitespace
const RDATA_PATTERN: &str = r"^[\w.]+$";

/// Master file parser for the restricted RFC 1035 grammar.
///
/// Each record is five whitespace-separated fields in fixed order: an
/// optional domain, an optional TTL, the literal class `IN`, one of the
/// types `A`/`CNAME`/`NS`, and the record data. Whitespace between fields
/// is insignificant, newlines included. Indentation decides the domain
/// field: a record starting at the beginning of its line names its domain,
/// an indented record omits it and inherits the domain of the previous
/// record.
///
/// By default the parser is permissive: text that does not match the
/// grammar is skipped without error. [`MasterFileParser::strict`] builds a
/// parser that instead fails on the first unmatched token.
pub struct MasterFileParser {
    domain_re: Regex,
    rdata_re: Regex,
    strict: bool,
}

/// One whitespace-delimited span of the source, tagged with its line and
/// whether whitespace precedes it on that line
struct Token<'a> {
    text: &'a str,
    line: u32,
    indented: bool,
}

/// The five grammar slots of one matched record, before field resolution
struct RecordFields<'a> {
    domain: Option<&'a str>,
    ttl: Option<u32>,
    rtype: RecordType,
    rdata: &'a str,
}

impl MasterFileParser {
    /// Create a permissive parser: unmatched text is treated as noise
    pub fn new() -> Self {
        Self::with_strict(false)
    }

    /// Create a strict parser: unmatched text is a syntax error
    pub fn strict() -> Self {
        Self::with_strict(true)
    }

    fn with_strict(strict: bool) -> Self {
        Self {
            domain_re: Regex::new(DOMAIN_PATTERN).unwrap(),
            rdata_re: Regex::new(RDATA_PATTERN).unwrap(),
            strict,
        }
    }

    /// Parse a master file from disk into `zone`.
    ///
    /// The whole file is read before any parsing happens; if the read
    /// fails, the error is returned and `zone` is left untouched.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P, zone: &mut Zone) -> Result<()> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| ZoneError::Io(format!("{}: {}", path.display(), e)))?;

        debug!("loading master file {}", path.display());
        self.parse(&contents, zone)
    }

    /// Parse master file contents into `zone`.
    ///
    /// A candidate record starts at the first token of a line; its fields
    /// may continue across newlines. Records accumulate under their owner
    /// name in order of appearance. The domain inherited by elided lines is
    /// parse-local state; it starts empty, so a file whose first record
    /// omits its domain produces a record under the empty name (strict mode
    /// rejects this instead).
    pub fn parse(&self, contents: &str, zone: &mut Zone) -> Result<()> {
        let tokens = tokenize(contents);
        let mut last_domain = String::new();
        let mut parsed = 0usize;
        let mut cursor = 0;

        while cursor < tokens.len() {
            let Some((fields, consumed)) = self.bind(&tokens[cursor..]) else {
                // The line does not begin a record; drop it whole
                cursor = self.skip_line(&tokens, cursor)?;
                continue;
            };

            let line = tokens[cursor].line;
            let domain = match fields.domain {
                Some(domain) => domain.to_string(),
                None if self.strict && last_domain.is_empty() => {
                    return Err(ZoneError::MissingDomain { line });
                }
                None => last_domain.clone(),
            };
            let ttl = fields.ttl.unwrap_or(zone.default_ttl());

            match RData::from_text(fields.rtype, fields.rdata) {
                Ok(rdata) => {
                    trace!(
                        "line {}: {} {} IN {} {}",
                        line,
                        domain,
                        ttl,
                        fields.rtype.name(),
                        fields.rdata
                    );
                    zone.add_record(ResourceRecord::new(
                        Name::from(domain.as_str()),
                        fields.rtype,
                        RecordClass::IN,
                        ttl,
                        rdata,
                    ));
                    last_domain = domain;
                    parsed += 1;
                }
                Err(err) => {
                    if self.strict {
                        return Err(err);
                    }
                    debug!(
                        "line {}: dropping {} record for {}: {}",
                        line,
                        fields.rtype.name(),
                        domain,
                        err
                    );
                }
            }

            // Whatever trails the record on its final line is noise; the
            // next candidate starts on a fresh line
            let end_line = tokens[cursor + consumed - 1].line;
            cursor += consumed;
            while cursor < tokens.len() && tokens[cursor].line == end_line {
                let token = &tokens[cursor];
                if self.strict {
                    return Err(ZoneError::Syntax {
                        line: token.line,
                        token: token.text.to_string(),
                    });
                }
                trace!("line {}: ignoring trailing token {:?}", token.line, token.text);
                cursor += 1;
            }
        }

        debug!("parsed {} records", parsed);
        Ok(())
    }

    /// Skip every token on the line the cursor points into, returning the
    /// index of the next line's first token. Strict mode errors instead.
    fn skip_line(&self, tokens: &[Token<'_>], cursor: usize) -> Result<usize> {
        let token = &tokens[cursor];
        if self.strict {
            return Err(ZoneError::Syntax {
                line: token.line,
                token: token.text.to_string(),
            });
        }
        trace!("line {}: ignoring unmatched text starting at {:?}", token.line, token.text);

        let line = token.line;
        let mut next = cursor + 1;
        while next < tokens.len() && tokens[next].line == line {
            next += 1;
        }
        Ok(next)
    }

    /// Try to bind a record starting at the head of `window`.
    ///
    /// The candidate's indentation picks the layouts: at the beginning of a
    /// line the domain is mandatory, on an indented line it cannot appear.
    /// Within that, the TTL-bearing layout is tried first, so at the start
    /// of a line a leading digit run binds as the domain, not the TTL.
    fn bind<'a>(&self, window: &[Token<'a>]) -> Option<(RecordFields<'a>, usize)> {
        let has_domain = !window.first()?.indented;

        [(has_domain, true), (has_domain, false)]
            .into_iter()
            .find_map(|(has_domain, has_ttl)| self.bind_layout(window, has_domain, has_ttl))
    }

    fn bind_layout<'a>(
        &self,
        window: &[Token<'a>],
        has_domain: bool,
        has_ttl: bool,
    ) -> Option<(RecordFields<'a>, usize)> {
        let mut idx = 0;

        let domain = if has_domain {
            let token = window.get(idx)?;
            if !self.domain_re.is_match(token.text) {
                return None;
            }
            idx += 1;
            Some(token.text)
        } else {
            None
        };

        let ttl = if has_ttl {
            let token = window.get(idx)?;
            if !token.text.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            let ttl = token.text.parse().ok()?;
            idx += 1;
            Some(ttl)
        } else {
            None
        };

        RecordClass::from_name(window.get(idx)?.text)?;
        idx += 1;

        let rtype = RecordType::from_name(window.get(idx)?.text)?;
        idx += 1;

        let rdata = window.get(idx)?;
        if !self.rdata_re.is_match(rdata.text) {
            return None;
        }
        idx += 1;

        Some((
            RecordFields {
                domain,
                ttl,
                rtype,
                rdata: rdata.text,
            },
            idx,
        ))
    }
}

impl Default for MasterFileParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Split the source into whitespace-delimited tokens with line numbers.
/// A token is indented unless it sits at the very start of its line.
fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut line = 1u32;
    let mut line_start = 0usize;
    let mut start: Option<(usize, u32, bool)> = None;

    for (i, ch) in input.char_indices() {
        if ch.is_whitespace() {
            if let Some((begin, begin_line, indented)) = start.take() {
                tokens.push(Token {
                    text: &input[begin..i],
                    line: begin_line,
                    indented,
                });
            }
            if ch == '\n' {
                line += 1;
                line_start = i + 1;
            }
        } else if start.is_none() {
            start = Some((i, line, i != line_start));
        }
    }

    if let Some((begin, begin_line, indented)) = start {
        tokens.push(Token {
            text: &input[begin..],
            line: begin_line,
            indented,
        });
    }

    tokens
}
