use serde::Serialize;

/// Sentinel source language asking the provider to detect the language itself
pub const AUTO_DETECT: &str = "AUTO";

/// A target language the gateway accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SupportedLanguage {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> SupportedLanguage {
    SupportedLanguage { code, name }
}

pub static SUPPORTED_LANGUAGES: [SupportedLanguage; 26] = [
    lang("EN-US", "English (US)"),
    lang("EN-GB", "English (UK)"),
    lang("DE", "German"),
    lang("FR", "French"),
    lang("ES", "Spanish"),
    lang("IT", "Italian"),
    lang("JA", "Japanese"),
    lang("ZH", "Chinese"),
    lang("PT-PT", "Portuguese (Portugal)"),
    lang("PT-BR", "Portuguese (Brazil)"),
    lang("RU", "Russian"),
    lang("NL", "Dutch"),
    lang("PL", "Polish"),
    lang("TR", "Turkish"),
    lang("SV", "Swedish"),
    lang("DA", "Danish"),
    lang("FI", "Finnish"),
    lang("NO", "Norwegian"),
    lang("CS", "Czech"),
    lang("RO", "Romanian"),
    lang("HU", "Hungarian"),
    lang("BG", "Bulgarian"),
    lang("EL", "Greek"),
    lang("AR", "Arabic"),
    lang("KO", "Korean"),
    lang("ID", "Indonesian"),
];

pub fn supported_languages() -> &'static [SupportedLanguage] {
    &SUPPORTED_LANGUAGES
}

/// Upper-case a target code and return it if it is in the supported table
pub fn normalize_target(code: &str) -> Option<String> {
    let upper = code.to_uppercase();
    SUPPORTED_LANGUAGES
        .iter()
        .any(|l| l.code == upper)
        .then_some(upper)
}

/// Source code to send upstream, or `None` when the provider should auto-detect.
///
/// The provider does not take regional variants for the source side, so
/// `EN-US` becomes `EN` and `pt-br` becomes `PT`.
pub fn normalize_source(code: Option<&str>) -> Option<String> {
    let code = code.map(str::trim).filter(|c| !c.is_empty())?;
    if code.eq_ignore_ascii_case(AUTO_DETECT) {
        return None;
    }
    let upper = code.to_uppercase();
    let base = upper.split('-').next().unwrap_or(&upper);
    Some(base.to_string())
}

/// Comma separated list of codes, in table order
pub fn supported_codes() -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|l| l.code)
        .collect::<Vec<_>>()
        .join(", ")
}
