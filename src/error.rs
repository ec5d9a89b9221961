//! Rich diagnostic error types for sigil-forge.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes and help text so users know what went wrong and how
//! to fix it. Nothing in the pipeline performs I/O except configuration loading
//! and export, so most variants describe rejected input.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for sigil-forge.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain through to the user.
#[derive(Debug, Error, Diagnostic)]
pub enum SigilError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Export(#[from] ExportError),
}

// ---------------------------------------------------------------------------
// Input errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum InputError {
    #[error("nothing to forge: the intent contains no letters")]
    #[diagnostic(
        code(sigil::input::empty_intent),
        help(
            "Only alphabetic characters are used. Enter an intent, name, or desire \
             with at least one letter, or pass --allow-empty to emit the bare circles."
        )
    )]
    EmptyIntent,

    #[error("unknown script: \"{name}\"")]
    #[diagnostic(
        code(sigil::input::unknown_script),
        help("Valid scripts are: Hebrew, Arabic, Latin, Egyptian.")
    )]
    UnknownScript { name: String },

    #[error("unknown sigilization method: \"{name}\"")]
    #[diagnostic(
        code(sigil::input::unknown_method),
        help("Valid methods are: Wheel (\"Wheel Method\") and Mantra (\"Graphic Mantra\").")
    )]
    UnknownMethod { name: String },
}

// ---------------------------------------------------------------------------
// Geometry errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GeometryError {
    #[error("unsupported wheel base: \"{name}\"")]
    #[diagnostic(
        code(sigil::geometry::unsupported_base),
        help(
            "The set of bases is fixed: NinePoint (\"9-Point Wheel\") or one of the \
             planetary kameas Saturn, Jupiter, Mars, Sun, Venus, Mercury, Moon."
        )
    )]
    UnsupportedWheelBase { name: String },

    #[error("value {value} has no cell in the {planet} kamea")]
    #[diagnostic(
        code(sigil::geometry::resolution_gap),
        help(
            "Reduced values always lie in 1..=n². Reaching this means the kamea table \
             or the reduction is broken; please file a bug report."
        )
    )]
    ResolutionGap { planet: String, value: u32 },
}

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read sigil config: {path}")]
    #[diagnostic(
        code(sigil::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse sigil config {path}: {message}")]
    #[diagnostic(
        code(sigil::config::parse),
        help("Check the TOML syntax. Unknown keys are rejected; omitted keys use defaults.")
    )]
    Parse { path: String, message: String },

    #[error("invalid sigil config: {message}")]
    #[diagnostic(
        code(sigil::config::invalid),
        help(
            "Radii must be positive and finite with inner_radius < outer_radius, ratios \
             must lie in (0, 1], alphas in [0, 1], marker sizes finite and non-negative, \
             and font sizes positive."
        )
    )]
    Invalid { message: String },
}

// ---------------------------------------------------------------------------
// Export errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ExportError {
    #[error("failed to serialize sigil: {message}")]
    #[diagnostic(
        code(sigil::export::serialize),
        help("This is an internal error; the primitive list should always serialize.")
    )]
    Serialize { message: String },

    #[error("failed to write sigil export: {path}")]
    #[diagnostic(
        code(sigil::export::write),
        help("Ensure the target directory exists and you have write permissions.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for sigil-forge operations.
pub type SigilResult<T> = std::result::Result<T, SigilError>;
