// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Print options as supplied by the host, and their validated form.
//
// `PrintOptions` mirrors what a caller hands over (every field optional,
// enumerated values still raw strings).  `PrintOptions::validate` checks the
// enumerated fields and produces `ValidatedOptions`, which is what the
// backend argument builders consume.

use serde::{Deserialize, Serialize};

use crate::error::{PrintBridgeError, Result};

/// A closed set of keyword values accepted for one print option.
pub trait OptionKeyword: Sized + Copy + 'static {
    /// Option name as it appears in error messages.
    const OPTION: &'static str;
    /// Every accepted keyword, in documentation order.
    const NAMES: &'static [&'static str];
    /// Variants in the same order as [`Self::NAMES`].
    const VARIANTS: &'static [Self];

    fn as_str(self) -> &'static str;

    /// Parse a raw keyword, failing with the list of valid names.
    fn parse(raw: &str) -> Result<Self> {
        Self::NAMES
            .iter()
            .position(|name| *name == raw)
            .map(|idx| Self::VARIANTS[idx])
            .ok_or_else(|| PrintBridgeError::InvalidArgument {
                option: Self::OPTION,
                value: raw.to_owned(),
                valid: Self::NAMES,
            })
    }
}

/// Which pages of the range to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subset {
    Odd,
    Even,
}

impl OptionKeyword for Subset {
    const OPTION: &'static str = "subset";
    const NAMES: &'static [&'static str] = &["odd", "even"];
    const VARIANTS: &'static [Self] = &[Self::Odd, Self::Even];

    fn as_str(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl OptionKeyword for Orientation {
    const OPTION: &'static str = "orientation";
    const NAMES: &'static [&'static str] = &["portrait", "landscape"];
    const VARIANTS: &'static [Self] = &[Self::Portrait, Self::Landscape];

    fn as_str(self) -> &'static str {
        match self {
            Self::Portrait => "portrait",
            Self::Landscape => "landscape",
        }
    }
}

/// Page scaling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    NoScale,
    Shrink,
    Fit,
}

impl Scale {
    /// Whether the page should be fitted to the media.
    pub fn fits_to_page(self) -> bool {
        matches!(self, Self::Shrink | Self::Fit)
    }
}

impl OptionKeyword for Scale {
    const OPTION: &'static str = "scale";
    const NAMES: &'static [&'static str] = &["noscale", "shrink", "fit"];
    const VARIANTS: &'static [Self] = &[Self::NoScale, Self::Shrink, Self::Fit];

    fn as_str(self) -> &'static str {
        match self {
            Self::NoScale => "noscale",
            Self::Shrink => "shrink",
            Self::Fit => "fit",
        }
    }
}

/// Simplex / duplex selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Duplex,
    DuplexShort,
    DuplexLong,
    Simplex,
}

impl Side {
    /// CUPS `sides` keyword.
    pub fn cups_sides_keyword(self) -> &'static str {
        match self {
            Self::Duplex | Self::DuplexLong => "two-sided-long-edge",
            Self::DuplexShort => "two-sided-short-edge",
            Self::Simplex => "one-sided",
        }
    }
}

impl OptionKeyword for Side {
    const OPTION: &'static str = "side";
    const NAMES: &'static [&'static str] = &["duplex", "duplexshort", "duplexlong", "simplex"];
    const VARIANTS: &'static [Self] = &[
        Self::Duplex,
        Self::DuplexShort,
        Self::DuplexLong,
        Self::Simplex,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::Duplex => "duplex",
            Self::DuplexShort => "duplexshort",
            Self::DuplexLong => "duplexlong",
            Self::Simplex => "simplex",
        }
    }
}

/// Print options as received from the host application.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PrintOptions {
    /// Target queue; absent means the system default printer.
    pub printer: Option<String>,
    /// Backend-native page range, passed through unchecked.
    pub pages: Option<String>,
    pub subset: Option<String>,
    pub orientation: Option<String>,
    pub scale: Option<String>,
    /// `None` keeps the backend's default colour mode.
    pub monochrome: Option<bool>,
    pub side: Option<String>,
    /// Backend-native input tray, passed through unchecked.
    pub bin: Option<String>,
    /// Backend-native media name, passed through unchecked.
    pub paper_size: Option<String>,
    /// Windows only. Enabled unless explicitly `false`.
    pub silent: Option<bool>,
    /// Windows only. Shows the helper's interactive dialog.
    pub print_dialog: Option<bool>,
    /// Windows only. Overrides the bundled SumatraPDF location.
    pub sumatra_pdf_path: Option<String>,
    /// Values of zero or below are ignored.
    pub copies: Option<i64>,
}

/// [`PrintOptions`] with enumerated values checked and empty values dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedOptions {
    pub printer: Option<String>,
    pub pages: Option<String>,
    pub subset: Option<Subset>,
    pub orientation: Option<Orientation>,
    pub scale: Option<Scale>,
    pub monochrome: Option<bool>,
    pub side: Option<Side>,
    pub bin: Option<String>,
    pub paper_size: Option<String>,
    pub silent: bool,
    pub print_dialog: bool,
    pub sumatra_pdf_path: Option<String>,
    pub copies: Option<u64>,
}

impl PrintOptions {
    /// Whether the interactive print dialog was requested.
    pub fn wants_print_dialog(&self) -> bool {
        self.print_dialog == Some(true)
    }

    /// Check every enumerated option and normalise the rest.
    ///
    /// Fails on the first value outside its set, in field order.
    pub fn validate(&self) -> Result<ValidatedOptions> {
        Ok(ValidatedOptions {
            printer: non_empty(&self.printer),
            pages: non_empty(&self.pages),
            subset: parse_keyword(&self.subset)?,
            orientation: parse_keyword(&self.orientation)?,
            scale: parse_keyword(&self.scale)?,
            monochrome: self.monochrome,
            side: parse_keyword(&self.side)?,
            bin: non_empty(&self.bin),
            paper_size: non_empty(&self.paper_size),
            silent: self.silent != Some(false),
            print_dialog: self.wants_print_dialog(),
            sumatra_pdf_path: non_empty(&self.sumatra_pdf_path),
            copies: self.copies.filter(|n| *n > 0).map(i64::unsigned_abs),
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_owned)
}

fn parse_keyword<K: OptionKeyword>(value: &Option<String>) -> Result<Option<K>> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(raw) => K::parse(raw).map(Some),
    }
}
