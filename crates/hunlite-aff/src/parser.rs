// Affix file parser: PFX/SFX blocks, COMPOUNDRULE blocks, REP pairs and
// scalar directives.

use hunlite_core::flag::{FLAG_DIRECTIVE, FlagMode};

use crate::AffError;
use crate::affix::{AffixEntry, AffixRule, RuleKind, RuleTable};
use crate::directives::Directives;
use crate::pattern::Pattern;
use crate::replacement::ReplacementTable;

/// Everything the dictionary builder needs from an affix file.
#[derive(Debug, Clone, Default)]
pub struct AffixData {
    /// Prefix and suffix rules keyed by rule code.
    pub rules: RuleTable,
    /// Scalar directives, including the seeded ones.
    pub directives: Directives,
    /// Encoding used for every rule-code string.
    pub flag_mode: FlagMode,
    /// Compound-rule flag sequences in file order.
    pub compound_rules: Vec<String>,
    /// REP pairs in file order.
    pub replacements: ReplacementTable,
}

/// A non-comment, non-blank, trimmed line with its 1-based line number.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    number: usize,
    text: &'a str,
}

/// Strip comments and blank lines, trimming what remains.
fn content_lines(text: &str) -> Vec<Line<'_>> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| Line {
            number: i + 1,
            text: raw.trim(),
        })
        .filter(|line| !line.text.is_empty() && !line.text.starts_with('#'))
        .collect()
}

/// Return the first argument of `line` if its directive is `name`.
fn directive_value<'a>(line: &Line<'a>, name: &str) -> Option<&'a str> {
    let mut parts = line.text.split_whitespace();
    if parts.next() == Some(name) {
        parts.next()
    } else {
        None
    }
}

fn parse_count(line: &Line<'_>, directive: &str, value: Option<&&str>) -> Result<usize, AffError> {
    let raw = value.copied().unwrap_or_default();
    raw.parse().map_err(|_| AffError::InvalidCount {
        line: line.number,
        directive: directive.to_string(),
        value: raw.to_string(),
    })
}

/// The `count` lines following a block header, clamped to what remains.
fn take_block<'l, 'a>(
    lines: &'l [Line<'a>],
    start: usize,
    count: usize,
    header: &Line<'_>,
) -> &'l [Line<'a>] {
    let start = start.min(lines.len());
    let end = start.saturating_add(count).min(lines.len());
    if end - start < count {
        log::warn!(
            "line {}: block declares {count} entries but only {} follow",
            header.number,
            end - start
        );
    }
    &lines[start..end]
}

/// Parse one `TYPE CODE STRIP ADD[/FLAGS] [CONDITION]` entry line.
fn parse_entry(kind: RuleKind, line: &Line<'_>, mode: FlagMode) -> Option<AffixEntry> {
    let parts: Vec<&str> = line.text.split_whitespace().collect();
    if parts.len() < 4 {
        log::warn!("line {}: affix entry has too few fields: {:?}", line.number, line.text);
        return None;
    }

    let strip = parts[2];
    let (add, continuation) = parts[3].split_once('/').unwrap_or((parts[3], ""));
    let condition = parts.get(4).copied().unwrap_or(".");

    let condition = if condition == "." {
        None
    } else {
        let compiled = match kind {
            RuleKind::Prefix => Pattern::prefix_condition(condition),
            RuleKind::Suffix => Pattern::suffix_condition(condition),
        };
        match compiled {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                log::warn!(
                    "line {}: skipping affix entry with bad condition {condition:?}: {e}",
                    line.number
                );
                return None;
            }
        }
    };

    Some(AffixEntry {
        add: if add == "0" { String::new() } else { add.to_string() },
        strip: (strip != "0").then(|| strip.to_string()),
        condition,
        continuation: mode.decode(continuation),
    })
}

/// Parse affix-file text.
///
/// Directives present in `seed` take precedence over the same directive in
/// the file. The `FLAG` directive is resolved before any rule is read so
/// that continuation classes decode correctly wherever it appears.
///
/// Malformed entry lines are skipped with a warning; a block header whose
/// count is not a number and an unknown `FLAG` encoding are errors.
pub fn parse_affix(text: &str, seed: &Directives) -> Result<AffixData, AffError> {
    let lines = content_lines(text);

    let mut directives = seed.clone();
    if !directives.contains(FLAG_DIRECTIVE) {
        if let Some(value) = lines.iter().find_map(|l| directive_value(l, FLAG_DIRECTIVE)) {
            directives.insert(FLAG_DIRECTIVE, value);
        }
    }
    let flag_mode = directives.flag_mode()?;

    let mut rules = RuleTable::new();
    let mut compound_rules = Vec::new();
    let mut replacements = ReplacementTable::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];
        let mut parts = line.text.split_whitespace();
        let directive = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();

        if let Some(kind) = RuleKind::from_directive(directive) {
            let count = parse_count(&line, directive, args.get(2))?;
            let block = take_block(&lines, i + 1, count, &line);
            let code = args[0];
            let rule = AffixRule {
                kind,
                combineable: args[1] == "Y",
                entries: block
                    .iter()
                    .filter_map(|entry| parse_entry(kind, entry, flag_mode))
                    .collect(),
            };
            if rules.insert(code.to_string(), rule).is_some() {
                log::warn!("line {}: {directive} {code} redefines an earlier rule", line.number);
            }
            i += 1 + block.len();
            continue;
        }

        match directive {
            "COMPOUNDRULE" => {
                let count = parse_count(&line, directive, args.first())?;
                let block = take_block(&lines, i + 1, count, &line);
                for entry in block {
                    match entry.text.split_whitespace().nth(1) {
                        Some(rule) => compound_rules.push(rule.to_string()),
                        None => log::warn!("line {}: empty COMPOUNDRULE entry", entry.number),
                    }
                }
                i += 1 + block.len();
            }
            "REP" => {
                match args.as_slice() {
                    [pattern, replacement] => replacements.push(*pattern, *replacement),
                    // `REP <count>` headers carry no pair.
                    [_] => {}
                    _ => log::warn!("line {}: malformed REP line {:?}", line.number, line.text),
                }
                i += 1;
            }
            _ => {
                if !seed.contains(directive) {
                    directives.insert(directive, args.first().copied().unwrap_or_default());
                }
                i += 1;
            }
        }
    }

    log::debug!(
        "parsed affix data: {} rules, {} compound rules, {} REP pairs, {} directives",
        rules.len(),
        compound_rules.len(),
        replacements.len(),
        directives.len()
    );

    Ok(AffixData {
        rules,
        directives,
        flag_mode,
        compound_rules,
        replacements,
    })
}
