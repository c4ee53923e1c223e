//! Known host applications and their per-host scripting capabilities.

/// A host application, resolved from the application code reported in the
/// host-environment descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostApp {
    /// Illustrator (`ILST`).
    Illustrator,
    /// InDesign (`IDSN`).
    InDesign,
    /// InCopy (`ICLN`).
    InCopy,
    /// Photoshop (`PHXS` / `PHSP`).
    Photoshop,
    /// After Effects (`AEFT`).
    AfterEffects,
    /// Premiere Pro (`PPRO`).
    PremierePro,
    /// Audition (`AUDT`).
    Audition,
    /// Animate (`FLPR`).
    Animate,
    /// Dreamweaver (`DRWV`).
    Dreamweaver,
    /// Bridge (`KBRG`).
    Bridge,
    /// A host this crate has no capability entry for.
    Unknown(String),
}

impl HostApp {
    /// Resolves a host application from the descriptor's application name.
    ///
    /// Matching is case-insensitive and accepts the code anywhere in the
    /// name, so `"IDSN"`, `"idsn"`, and a verbose `"InDesign (IDSN)"` all
    /// resolve to [`HostApp::InDesign`].
    pub fn from_app_name(app_name: &str) -> Self {
        let needle = app_name.to_ascii_lowercase();
        let table = [
            ("ilst", HostApp::Illustrator),
            ("idsn", HostApp::InDesign),
            ("icln", HostApp::InCopy),
            ("phxs", HostApp::Photoshop),
            ("phsp", HostApp::Photoshop),
            ("aeft", HostApp::AfterEffects),
            ("ppro", HostApp::PremierePro),
            ("audt", HostApp::Audition),
            ("flpr", HostApp::Animate),
            ("drwv", HostApp::Dreamweaver),
            ("kbrg", HostApp::Bridge),
        ];

        for (code, app) in table {
            if needle.contains(code) {
                return app;
            }
        }
        HostApp::Unknown(app_name.to_string())
    }

    /// Returns the capability record for this host.
    pub fn capabilities(&self) -> HostCapabilities {
        match self {
            // The InDesign family returns errors when decoding is forced on
            // its eval results, so those hosts get raw strings back.
            HostApp::InDesign | HostApp::InCopy =>
                HostCapabilities { suppress_auto_json_decode: true },
            _ => HostCapabilities { suppress_auto_json_decode: false },
        }
    }
}

/// Per-host scripting capabilities, sourced from a static table keyed by
/// [`HostApp`] rather than inline name matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostCapabilities {
    /// When set, raw eval results are handed back verbatim and never run
    /// through automatic JSON decoding.
    pub suppress_auto_json_decode: bool,
}
