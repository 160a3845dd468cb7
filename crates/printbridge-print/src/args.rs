// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Backend argument builders.
//
// Turns validated print options into the exact argument vectors for CUPS
// `lp` (macOS) and SumatraPDF (Windows), plus the fixed query invocations
// used for enumeration and default-printer lookup.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

use printbridge_core::config::BackendConfig;
use printbridge_core::options::{OptionKeyword, ValidatedOptions};

use crate::runner::Invocation;

/// Enumerates every printer as a wide `Out-String` block so long paper
/// lists are not truncated.
pub const WINDOWS_ENUMERATION_SCRIPT: &str = r#"Get-CimInstance Win32_Printer -Property DeviceID,Name,PrinterPaperNames | ForEach-Object {
    $printerObject = [PSCustomObject]@{
        Status                      = $_.Status
        Name                        = $_.Name
        DeviceID                    = $_.DeviceID
        PrinterPaperNames           = $_.PrinterPaperNames
        AllPrinterPaperNames  = "{" + ($_.PrinterPaperNames -join ", ") + "}"
    }
    $printerObject | Out-String -Width 32767
}
"#;

pub const WINDOWS_DEFAULT_QUERY: &str =
    "Get-CimInstance Win32_Printer -Property DeviceID,Name,PrinterPaperNames -Filter Default=true";

/// Archive that Electron-style installers pack resources into.
const ASAR_ARCHIVE: &str = "app.asar";
const ASAR_UNPACKED: &str = "app.asar.unpacked";

// -- query invocations --------------------------------------------------

pub fn windows_enumeration(config: &BackendConfig) -> Invocation {
    Invocation::new(&config.powershell)
        .arg("-Command")
        .arg(WINDOWS_ENUMERATION_SCRIPT)
}

pub fn windows_default(config: &BackendConfig) -> Invocation {
    Invocation::new(&config.powershell)
        .arg("-Command")
        .arg(WINDOWS_DEFAULT_QUERY)
}

pub fn lpstat_printers(config: &BackendConfig) -> Invocation {
    Invocation::new(&config.lpstat).arg("-p")
}

pub fn lpstat_default(config: &BackendConfig) -> Invocation {
    Invocation::new(&config.lpstat).arg("-d")
}

pub fn lpoptions_for(config: &BackendConfig, queue: &str) -> Invocation {
    Invocation::new(&config.lpoptions)
        .arg("-p")
        .arg(queue)
        .arg("-l")
}

// -- macOS: lp ------------------------------------------------------------

/// CUPS `-o` options in emission order.
pub fn cups_job_options(options: &ValidatedOptions) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(pages) = &options.pages {
        out.push(format!("page-ranges={pages}"));
    }
    if let Some(subset) = options.subset {
        out.push(format!("page-set={}", subset.as_str()));
    }
    if let Some(orientation) = options.orientation {
        out.push(orientation.as_str().to_owned());
    }
    if options.scale.is_some_and(|s| s.fits_to_page()) {
        out.push("fit-to-page".to_owned());
    }
    match options.monochrome {
        Some(true) => out.push("ColorModel=Gray".to_owned()),
        Some(false) => out.push("ColorModel=RGB".to_owned()),
        None => {}
    }
    if let Some(side) = options.side {
        out.push(format!("sides={}", side.cups_sides_keyword()));
    }
    if let Some(bin) = &options.bin {
        out.push(format!("InputSlot={bin}"));
    }
    if let Some(paper) = &options.paper_size {
        out.push(format!("media={paper}"));
    }

    out
}

/// `lp [-d queue] [-n copies] [-o opt]... <file>`
pub fn lp_invocation(config: &BackendConfig, file: &Path, options: &ValidatedOptions) -> Invocation {
    let mut inv = Invocation::new(&config.lp);

    if let Some(printer) = &options.printer {
        inv.push("-d");
        inv.push(printer);
    }
    if let Some(copies) = options.copies {
        inv.push("-n");
        inv.push(copies.to_string());
    }
    for opt in cups_job_options(options) {
        inv.push("-o");
        inv.push(opt);
    }

    inv.push(file);
    inv
}

// -- Windows: SumatraPDF ----------------------------------------------------

/// Tokens for SumatraPDF's comma-joined `-print-settings` value.
pub fn sumatra_print_settings(options: &ValidatedOptions) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(pages) = &options.pages {
        out.push(pages.clone());
    }
    if let Some(subset) = options.subset {
        out.push(subset.as_str().to_owned());
    }
    if let Some(orientation) = options.orientation {
        out.push(orientation.as_str().to_owned());
    }
    if let Some(scale) = options.scale {
        out.push(scale.as_str().to_owned());
    }
    match options.monochrome {
        Some(true) => out.push("monochrome".to_owned()),
        Some(false) => out.push("color".to_owned()),
        None => {}
    }
    if let Some(side) = options.side {
        out.push(side.as_str().to_owned());
    }
    if let Some(bin) = &options.bin {
        out.push(format!("bin={bin}"));
    }
    if let Some(paper) = &options.paper_size {
        out.push(format!("paper={paper}"));
    }
    if let Some(copies) = options.copies {
        out.push(format!("{copies}x"));
    }

    out
}

/// SumatraPDF command line.
///
/// `-print-dialog` wins over everything else: no target, no `-silent`, no
/// settings. The user picks those in the dialog.
pub fn sumatra_invocation(helper: &Path, file: &Path, options: &ValidatedOptions) -> Invocation {
    let mut inv = Invocation::new(helper);

    if options.print_dialog {
        inv.push("-print-dialog");
        inv.push(file);
        return inv;
    }

    match &options.printer {
        Some(printer) => {
            inv.push("-print-to");
            inv.push(printer);
        }
        None => inv.push("-print-to-default"),
    }
    if options.silent {
        inv.push("-silent");
    }

    let settings = sumatra_print_settings(options);
    if !settings.is_empty() {
        inv.push("-print-settings");
        inv.push(settings.join(","));
    }

    inv.push(file);
    inv
}

/// Resolve the SumatraPDF executable.
///
/// Per-call override first, then the configured path, then the bundled copy
/// next to `exe_dir` (rewritten out of a packed `app.asar` archive).
pub fn sumatra_path(
    config: &BackendConfig,
    options: &ValidatedOptions,
    exe_dir: Option<&Path>,
) -> PathBuf {
    if let Some(path) = options.sumatra_pdf_path.as_deref().or(config.sumatra_pdf.as_deref()) {
        return PathBuf::from(path);
    }
    let bundled = match exe_dir {
        Some(dir) => dir.join(&config.bundled_sumatra_pdf),
        None => PathBuf::from(&config.bundled_sumatra_pdf),
    };
    unpacked_asar_path(&bundled)
}

/// Rewrite an `app.asar` component to `app.asar.unpacked`.
///
/// Executables cannot be spawned from inside the archive, so installers ship
/// them in the sibling unpacked directory.
pub fn unpacked_asar_path(path: &Path) -> PathBuf {
    path.components()
        .map(|c| match c {
            Component::Normal(name) if name == OsStr::new(ASAR_ARCHIVE) => {
                Component::Normal(OsStr::new(ASAR_UNPACKED))
            }
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use printbridge_core::options::PrintOptions;

    fn validated(options: PrintOptions) -> ValidatedOptions {
        options.validate().expect("valid options")
    }

    #[test]
    fn lp_minimal_job() {
        let inv = lp_invocation(
            &BackendConfig::default(),
            Path::new("/tmp/report.pdf"),
            &validated(PrintOptions::default()),
        );
        assert_eq!(inv.program_name(), "lp");
        assert_eq!(inv.args_lossy(), ["/tmp/report.pdf"]);
    }

    #[test]
    fn lp_full_mapping() {
        let options = validated(PrintOptions {
            printer: Some("HP_LaserJet".into()),
            pages: Some("1-3,5".into()),
            subset: Some("odd".into()),
            orientation: Some("landscape".into()),
            scale: Some("shrink".into()),
            monochrome: Some(true),
            side: Some("duplexshort".into()),
            bin: Some("Tray2".into()),
            paper_size: Some("A4".into()),
            copies: Some(2),
            ..Default::default()
        });
        let inv = lp_invocation(&BackendConfig::default(), Path::new("doc.pdf"), &options);
        assert_eq!(
            inv.args_lossy(),
            [
                "-d",
                "HP_LaserJet",
                "-n",
                "2",
                "-o",
                "page-ranges=1-3,5",
                "-o",
                "page-set=odd",
                "-o",
                "landscape",
                "-o",
                "fit-to-page",
                "-o",
                "ColorModel=Gray",
                "-o",
                "sides=two-sided-short-edge",
                "-o",
                "InputSlot=Tray2",
                "-o",
                "media=A4",
                "doc.pdf",
            ]
        );
    }

    #[test]
    fn copies_beyond_u32_still_emitted() {
        let options = validated(PrintOptions {
            copies: Some(5_000_000_000),
            ..Default::default()
        });
        let lp = lp_invocation(&BackendConfig::default(), Path::new("doc.pdf"), &options);
        assert_eq!(lp.args_lossy(), ["-n", "5000000000", "doc.pdf"]);

        let sumatra = sumatra_invocation(Path::new("SumatraPDF.exe"), Path::new("doc.pdf"), &options);
        assert_eq!(
            sumatra.args_lossy(),
            ["-print-to-default", "-silent", "-print-settings", "5000000000x", "doc.pdf"]
        );
    }

    #[test]
    fn cups_duplex_is_long_edge() {
        let options = validated(PrintOptions {
            side: Some("duplex".into()),
            ..Default::default()
        });
        assert_eq!(cups_job_options(&options), ["sides=two-sided-long-edge"]);
    }

    #[test]
    fn cups_noscale_and_colour() {
        let options = validated(PrintOptions {
            scale: Some("noscale".into()),
            monochrome: Some(false),
            ..Default::default()
        });
        assert_eq!(cups_job_options(&options), ["ColorModel=RGB"]);
    }

    #[test]
    fn sumatra_defaults_to_silent_default_printer() {
        let inv = sumatra_invocation(
            Path::new("SumatraPDF.exe"),
            Path::new("doc.pdf"),
            &validated(PrintOptions::default()),
        );
        assert_eq!(inv.args_lossy(), ["-print-to-default", "-silent", "doc.pdf"]);
    }

    #[test]
    fn sumatra_named_printer_with_settings() {
        let options = validated(PrintOptions {
            printer: Some("Office".into()),
            silent: Some(false),
            pages: Some("1-2".into()),
            subset: Some("even".into()),
            orientation: Some("portrait".into()),
            scale: Some("fit".into()),
            monochrome: Some(false),
            side: Some("duplex".into()),
            bin: Some("2".into()),
            paper_size: Some("A4".into()),
            copies: Some(3),
            ..Default::default()
        });
        let inv = sumatra_invocation(Path::new("SumatraPDF.exe"), Path::new("doc.pdf"), &options);
        assert_eq!(
            inv.args_lossy(),
            [
                "-print-to",
                "Office",
                "-print-settings",
                "1-2,even,portrait,fit,color,duplex,bin=2,paper=A4,3x",
                "doc.pdf",
            ]
        );
    }

    #[test]
    fn sumatra_dialog_skips_everything_else() {
        let options = validated(PrintOptions {
            print_dialog: Some(true),
            printer: Some("Office".into()),
            side: Some("duplex".into()),
            copies: Some(2),
            ..Default::default()
        });
        let inv = sumatra_invocation(Path::new("SumatraPDF.exe"), Path::new("doc.pdf"), &options);
        assert_eq!(inv.args_lossy(), ["-print-dialog", "doc.pdf"]);
    }

    #[test]
    fn sumatra_path_prefers_override() {
        let config = BackendConfig {
            sumatra_pdf: Some(r"C:\Tools\SumatraPDF.exe".into()),
            ..Default::default()
        };
        let options = validated(PrintOptions {
            sumatra_pdf_path: Some(r"D:\Sumatra.exe".into()),
            ..Default::default()
        });
        assert_eq!(
            sumatra_path(&config, &options, None),
            PathBuf::from(r"D:\Sumatra.exe")
        );
        assert_eq!(
            sumatra_path(&config, &validated(PrintOptions::default()), None),
            PathBuf::from(r"C:\Tools\SumatraPDF.exe")
        );
    }

    #[test]
    fn bundled_sumatra_leaves_asar_archive() {
        let config = BackendConfig::default();
        let path = sumatra_path(
            &config,
            &validated(PrintOptions::default()),
            Some(Path::new("/opt/app/resources/app.asar/dist")),
        );
        assert_eq!(
            path,
            PathBuf::from("/opt/app/resources/app.asar.unpacked/dist/SumatraPDF-3.4.6-32.exe")
        );
    }

    #[test]
    fn unpacked_path_is_untouched() {
        let path = Path::new("/opt/app/resources/app.asar.unpacked/SumatraPDF.exe");
        assert_eq!(unpacked_asar_path(path), path);
    }
}
