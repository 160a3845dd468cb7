// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend output parsers.
//
// Pure text-to-data functions over PowerShell list output (Windows) and the
// CUPS command-line tools (macOS).  None of these touch a process; the
// enumerator and resolver feed them captured stdout.

use std::sync::LazyLock;

use regex::Regex;

use printbridge_core::types::Printer;

/// Two or more consecutive line breaks separate printer blocks.
static BLOCK_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\r?\n){2,}").expect("valid block separator regex"));

/// `lpstat -p`: `printer <name> is idle.  enabled since ...`
static LPSTAT_PRINTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^printer (\S+) is").expect("valid lpstat -p regex"));

/// `lpstat -d`: `system default destination: <name>`
static LPSTAT_DEFAULT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m):\s*(.+)$").expect("valid lpstat -d regex"));

static PAGE_SIZE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^PageSize\b").expect("valid PageSize regex"));

static MEDIA_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^media\b").expect("valid media regex"));

// -- Windows --------------------------------------------------------------

/// Field labels in PowerShell list output.
const DEVICE_ID_LABEL: &str = "DeviceID";
const NAME_LABEL: &str = "Name";
/// Brace-joined list emitted by the enumeration script.
const ALL_PAPER_NAMES_LABEL: &str = "AllPrinterPaperNames";
/// Raw CIM property, used when the joined list is absent (default query).
const PAPER_NAMES_LABEL: &str = "PrinterPaperNames";

/// One Windows printer block, parsed but not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPrinter {
    pub device_id: Option<String>,
    pub name: Option<String>,
    pub paper_sizes: Vec<String>,
}

impl ParsedPrinter {
    /// Both identifier fields present and non-empty.
    pub fn is_valid(&self) -> bool {
        matches!(&self.device_id, Some(id) if !id.is_empty())
            && matches!(&self.name, Some(name) if !name.is_empty())
    }

    /// Convert into a canonical record; `None` when invalid.
    pub fn into_printer(self) -> Option<Printer> {
        Printer::new(self.device_id?, self.name?, self.paper_sizes)
    }
}

/// Split enumeration stdout into trimmed, non-empty per-printer blocks.
pub fn split_printer_blocks(stdout: &str) -> Vec<&str> {
    BLOCK_SEPARATOR
        .split(stdout)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Parse one `Label : value` block from PowerShell list formatting.
///
/// Indented lines without their own label continue the previous value.
pub fn parse_windows_block(block: &str) -> ParsedPrinter {
    let mut fields: Vec<(&str, String)> = Vec::new();

    for line in block.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match field_line(line) {
            Some((label, value)) => fields.push((label, value.to_owned())),
            None => {
                if let Some((_, value)) = fields.last_mut() {
                    value.push(' ');
                    value.push_str(line.trim());
                }
            }
        }
    }

    let paper_sizes = field(&fields, ALL_PAPER_NAMES_LABEL)
        .or_else(|| field(&fields, PAPER_NAMES_LABEL))
        .map(parse_paper_name_list)
        .unwrap_or_default();

    ParsedPrinter {
        device_id: field(&fields, DEVICE_ID_LABEL).map(str::to_owned),
        name: field(&fields, NAME_LABEL).map(str::to_owned),
        paper_sizes,
    }
}

fn field<'a>(fields: &'a [(&str, String)], label: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|(l, _)| *l == label)
        .map(|(_, v)| v.as_str())
}

/// `Label   : value` with an unindented single-word label.
fn field_line(line: &str) -> Option<(&str, &str)> {
    if line.starts_with(char::is_whitespace) {
        return None;
    }
    let (label, value) = line.split_once(':')?;
    let label = label.trim();
    if label.is_empty() || label.contains(char::is_whitespace) {
        return None;
    }
    Some((label, value.trim()))
}

/// `{Letter, Legal, A4}` → `["Letter", "Legal", "A4"]`.
pub fn parse_paper_name_list(raw: &str) -> Vec<String> {
    let inner = raw.trim();
    let inner = inner.strip_prefix('{').unwrap_or(inner);
    let inner = inner.strip_suffix('}').unwrap_or(inner);
    inner
        .split(", ")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

// -- macOS / CUPS -----------------------------------------------------------

/// Queue names from `lpstat -p`, in listing order.
pub fn parse_lpstat_printers(stdout: &str) -> Vec<String> {
    LPSTAT_PRINTER
        .captures_iter(stdout)
        .map(|caps| caps[1].to_owned())
        .collect()
}

/// Default destination from `lpstat -d`, or `None` when not configured.
pub fn parse_lpstat_default(stdout: &str) -> Option<String> {
    let caps = LPSTAT_DEFAULT.captures(stdout)?;
    let name = caps[1].trim();
    (!name.is_empty()).then(|| name.to_owned())
}

/// Paper sizes from `lpoptions -p <queue> -l`.
///
/// Uses the `PageSize` line, falling back to `media`.  The current-selection
/// marker `*` is stripped and underscores become spaces.
pub fn parse_lpoptions_paper_sizes(stdout: &str) -> Vec<String> {
    let line = stdout
        .lines()
        .find(|l| PAGE_SIZE_LINE.is_match(l))
        .or_else(|| stdout.lines().find(|l| MEDIA_LINE.is_match(l)));

    let Some((_, choices)) = line.and_then(|l| l.split_once(':')) else {
        return Vec::new();
    };

    choices
        .split_whitespace()
        .map(|token| token.strip_prefix('*').unwrap_or(token))
        .filter(|token| !token.is_empty())
        .map(|token| token.replace('_', " "))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOWS_ENUMERATION: &str = "\r\n\r\n\
Status               : \r\n\
Name                 : Microsoft Print to PDF\r\n\
DeviceID             : Microsoft Print to PDF\r\n\
PrinterPaperNames    : {Letter, Tabloid, Legal, Statement...}\r\n\
AllPrinterPaperNames : {Letter, Tabloid, Legal, Statement, Executive, A3, A4}\r\n\
\r\n\r\n\r\n\
Status               : \r\n\
Name                 : \\\\print01\\Floor 2\r\n\
DeviceID             : \\\\print01\\Floor 2\r\n\
PrinterPaperNames    : {}\r\n\
AllPrinterPaperNames : {}\r\n\
\r\n\r\n\
Status               : \r\n\
Name                 : \r\n\
DeviceID             : \r\n\
\r\n\r\n";

    #[test]
    fn splits_blocks_on_blank_lines() {
        let blocks = split_printer_blocks(WINDOWS_ENUMERATION);
        assert_eq!(blocks.len(), 3);
        assert!(blocks[0].starts_with("Status"));
        assert!(blocks[1].contains("print01"));
    }

    #[test]
    fn empty_stdout_has_no_blocks() {
        assert!(split_printer_blocks("").is_empty());
        assert!(split_printer_blocks("\r\n\r\n\r\n").is_empty());
    }

    #[test]
    fn well_formed_block_is_valid() {
        let blocks = split_printer_blocks(WINDOWS_ENUMERATION);
        let parsed = parse_windows_block(blocks[0]);
        assert!(parsed.is_valid());
        assert_eq!(parsed.device_id.as_deref(), Some("Microsoft Print to PDF"));
        assert_eq!(
            parsed.paper_sizes,
            ["Letter", "Tabloid", "Legal", "Statement", "Executive", "A3", "A4"]
        );
    }

    #[test]
    fn network_printer_keeps_backslashes_and_empty_paper_list() {
        let blocks = split_printer_blocks(WINDOWS_ENUMERATION);
        let printer = parse_windows_block(blocks[1])
            .into_printer()
            .expect("valid printer");
        assert_eq!(printer.name(), r"\\print01\Floor 2");
        assert!(printer.paper_sizes().is_empty());
    }

    #[test]
    fn empty_identifiers_are_invalid() {
        let blocks = split_printer_blocks(WINDOWS_ENUMERATION);
        let parsed = parse_windows_block(blocks[2]);
        assert!(!parsed.is_valid());
        assert!(parsed.into_printer().is_none());
    }

    #[test]
    fn missing_identifier_field_is_invalid() {
        let parsed = parse_windows_block("Name : Office\nAllPrinterPaperNames : {A4}");
        assert!(!parsed.is_valid());
        assert_eq!(parsed.name.as_deref(), Some("Office"));
        assert_eq!(parsed.paper_sizes, ["A4"]);

        let parsed = parse_windows_block("DeviceID : Office");
        assert!(!parsed.is_valid());
    }

    #[test]
    fn default_query_falls_back_to_raw_paper_names() {
        let block = "\
Caption                     : Office
DeviceID                    : Office
Name                        : Office
PrinterPaperNames           : {Letter, Legal,
                              A4}
PrinterStatus               : 3";
        let parsed = parse_windows_block(block);
        assert!(parsed.is_valid());
        assert_eq!(parsed.paper_sizes, ["Letter", "Legal", "A4"]);
    }

    #[test]
    fn paper_name_list_strips_braces() {
        assert_eq!(parse_paper_name_list("{A4, A5}"), ["A4", "A5"]);
        assert_eq!(parse_paper_name_list("A4"), ["A4"]);
        assert!(parse_paper_name_list("{}").is_empty());
    }

    #[test]
    fn lpstat_listing_preserves_order() {
        let stdout = "\
printer HP_LaserJet is idle.  enabled since Tue Oct 14 09:12:01 2026
printer Brother_HL is now printing Brother_HL-12.  enabled since Tue Oct 14 09:30:00 2026
\tWaiting for printer to finish.
printer Label_Writer disabled since Mon Oct 13 17:00:00 2026 -
";
        assert_eq!(parse_lpstat_printers(stdout), ["HP_LaserJet", "Brother_HL"]);
        assert!(parse_lpstat_printers("").is_empty());
    }

    #[test]
    fn lpstat_default_destination() {
        assert_eq!(
            parse_lpstat_default("system default destination: HP_LaserJet\n").as_deref(),
            Some("HP_LaserJet")
        );
        assert_eq!(parse_lpstat_default("no system default destination\n"), None);
        assert_eq!(parse_lpstat_default(""), None);
    }

    #[test]
    fn lpoptions_page_size_line() {
        let stdout = "\
ColorModel/Color Mode: Gray *RGB
PageSize/Media Size: *Letter A4 Legal
Duplex/2-Sided Printing: *None DuplexNoTumble DuplexTumble
";
        assert_eq!(parse_lpoptions_paper_sizes(stdout), ["Letter", "A4", "Legal"]);
    }

    #[test]
    fn lpoptions_normalizes_underscores() {
        let stdout = "PageSize/Page Size: Letter *A4 Env_10 4x6_Borderless\n";
        assert_eq!(
            parse_lpoptions_paper_sizes(stdout),
            ["Letter", "A4", "Env 10", "4x6 Borderless"]
        );
    }

    #[test]
    fn lpoptions_falls_back_to_media() {
        let stdout = "InputSlot/Media Source: *Auto Tray1\nMedia/Media Size: na_letter *iso_a4\n";
        assert_eq!(parse_lpoptions_paper_sizes(stdout), ["na letter", "iso a4"]);
    }

    #[test]
    fn lpoptions_without_size_line_is_empty() {
        assert!(parse_lpoptions_paper_sizes("ColorModel/Color Mode: Gray *RGB\n").is_empty());
        assert!(parse_lpoptions_paper_sizes("").is_empty());
        assert!(parse_lpoptions_paper_sizes("PageSizeCustom/Custom: Yes\n").is_empty());
    }
}
