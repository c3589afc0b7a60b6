//! Language code to display name resolution
//!
//! Accepts ISO 639-1, ISO 639-2 (bibliographic and terminology forms) and
//! BCP 47 tags. Only the primary subtag of a tag is considered.

/// Display name used for absent, undetermined or unrecognised codes
pub const UNKNOWN_LANGUAGE: &str = "Unknown";

/// (ISO 639-1, ISO 639-2/B, ISO 639-2/T, display name)
const LANGUAGES: &[(&str, &str, &str, &str)] = &[
    ("af", "afr", "afr", "Afrikaans"),
    ("am", "amh", "amh", "Amharic"),
    ("ar", "ara", "ara", "Arabic"),
    ("az", "aze", "aze", "Azerbaijani"),
    ("be", "bel", "bel", "Belarusian"),
    ("bg", "bul", "bul", "Bulgarian"),
    ("bn", "ben", "ben", "Bengali"),
    ("bs", "bos", "bos", "Bosnian"),
    ("ca", "cat", "cat", "Catalan"),
    ("cs", "cze", "ces", "Czech"),
    ("cy", "wel", "cym", "Welsh"),
    ("da", "dan", "dan", "Danish"),
    ("de", "ger", "deu", "German"),
    ("el", "gre", "ell", "Greek"),
    ("en", "eng", "eng", "English"),
    ("eo", "epo", "epo", "Esperanto"),
    ("es", "spa", "spa", "Spanish"),
    ("et", "est", "est", "Estonian"),
    ("eu", "baq", "eus", "Basque"),
    ("fa", "per", "fas", "Persian"),
    ("fi", "fin", "fin", "Finnish"),
    ("fil", "fil", "fil", "Filipino"),
    ("fo", "fao", "fao", "Faroese"),
    ("fr", "fre", "fra", "French"),
    ("ga", "gle", "gle", "Irish"),
    ("gd", "gla", "gla", "Scottish Gaelic"),
    ("gl", "glg", "glg", "Galician"),
    ("gu", "guj", "guj", "Gujarati"),
    ("he", "heb", "heb", "Hebrew"),
    ("hi", "hin", "hin", "Hindi"),
    ("hr", "hrv", "hrv", "Croatian"),
    ("hu", "hun", "hun", "Hungarian"),
    ("hy", "arm", "hye", "Armenian"),
    ("id", "ind", "ind", "Indonesian"),
    ("is", "ice", "isl", "Icelandic"),
    ("it", "ita", "ita", "Italian"),
    ("ja", "jpn", "jpn", "Japanese"),
    ("ka", "geo", "kat", "Georgian"),
    ("kk", "kaz", "kaz", "Kazakh"),
    ("km", "khm", "khm", "Khmer"),
    ("kn", "kan", "kan", "Kannada"),
    ("ko", "kor", "kor", "Korean"),
    ("ku", "kur", "kur", "Kurdish"),
    ("la", "lat", "lat", "Latin"),
    ("lb", "ltz", "ltz", "Luxembourgish"),
    ("lo", "lao", "lao", "Lao"),
    ("lt", "lit", "lit", "Lithuanian"),
    ("lv", "lav", "lav", "Latvian"),
    ("mk", "mac", "mkd", "Macedonian"),
    ("ml", "mal", "mal", "Malayalam"),
    ("mn", "mon", "mon", "Mongolian"),
    ("mr", "mar", "mar", "Marathi"),
    ("ms", "may", "msa", "Malay"),
    ("mt", "mlt", "mlt", "Maltese"),
    ("my", "bur", "mya", "Burmese"),
    ("nb", "nob", "nob", "Norwegian bokmål"),
    ("ne", "nep", "nep", "Nepali"),
    ("nl", "dut", "nld", "Dutch"),
    ("nn", "nno", "nno", "Norwegian Nynorsk"),
    ("no", "nor", "nor", "Norwegian"),
    ("pa", "pan", "pan", "Punjabi"),
    ("pl", "pol", "pol", "Polish"),
    ("ps", "pus", "pus", "Pashto"),
    ("pt", "por", "por", "Portuguese"),
    ("ro", "rum", "ron", "Romanian"),
    ("ru", "rus", "rus", "Russian"),
    ("si", "sin", "sin", "Sinhala"),
    ("sk", "slo", "slk", "Slovak"),
    ("sl", "slv", "slv", "Slovenian"),
    ("so", "som", "som", "Somali"),
    ("sq", "alb", "sqi", "Albanian"),
    ("sr", "srp", "srp", "Serbian"),
    ("sv", "swe", "swe", "Swedish"),
    ("sw", "swa", "swa", "Swahili"),
    ("ta", "tam", "tam", "Tamil"),
    ("te", "tel", "tel", "Telugu"),
    ("th", "tha", "tha", "Thai"),
    ("tl", "tgl", "tgl", "Tagalog"),
    ("tr", "tur", "tur", "Turkish"),
    ("uk", "ukr", "ukr", "Ukrainian"),
    ("ur", "urd", "urd", "Urdu"),
    ("uz", "uzb", "uzb", "Uzbek"),
    ("vi", "vie", "vie", "Vietnamese"),
    ("yi", "yid", "yid", "Yiddish"),
    ("yue", "yue", "yue", "Cantonese"),
    ("zh", "chi", "zho", "Chinese"),
    ("zu", "zul", "zul", "Zulu"),
];

/// Resolve a language code to a capitalized English display name.
///
/// Never fails: anything that cannot be resolved yields [`UNKNOWN_LANGUAGE`].
pub fn resolve(code: Option<&str>) -> &'static str {
    let Some(code) = code else {
        return UNKNOWN_LANGUAGE;
    };

    let primary = code
        .trim()
        .split(|c| c == '-' || c == '_')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    if primary.is_empty() {
        return UNKNOWN_LANGUAGE;
    }

    LANGUAGES
        .iter()
        .find(|(alpha2, bibliographic, terminology, _)| {
            primary == *alpha2 || primary == *bibliographic || primary == *terminology
        })
        .map(|(_, _, _, name)| *name)
        .unwrap_or(UNKNOWN_LANGUAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_letter_codes() {
        assert_eq!(resolve(Some("eng")), "English");
        assert_eq!(resolve(Some("jpn")), "Japanese");
        assert_eq!(resolve(Some("ger")), "German");
        assert_eq!(resolve(Some("deu")), "German");
    }

    #[test]
    fn test_two_letter_and_ietf_codes() {
        assert_eq!(resolve(Some("en")), "English");
        assert_eq!(resolve(Some("en-US")), "English");
        assert_eq!(resolve(Some("pt_BR")), "Portuguese");
        assert_eq!(resolve(Some("zh-Hans")), "Chinese");
    }

    #[test]
    fn test_regional_release_languages() {
        assert_eq!(resolve(Some("tgl")), "Tagalog");
        assert_eq!(resolve(Some("ben")), "Bengali");
        assert_eq!(resolve(Some("urd")), "Urdu");
        assert_eq!(resolve(Some("nno")), "Norwegian Nynorsk");
        assert_eq!(resolve(Some("yue")), "Cantonese");
        assert_eq!(resolve(Some("yue-Hant-HK")), "Cantonese");
        assert_eq!(resolve(Some("baq")), "Basque");
        assert_eq!(resolve(Some("cym")), "Welsh");
    }

    #[test]
    fn test_case_and_whitespace_are_ignored() {
        assert_eq!(resolve(Some("ENG")), "English");
        assert_eq!(resolve(Some(" fre ")), "French");
    }

    #[test]
    fn test_unresolvable_codes_fall_back() {
        assert_eq!(resolve(None), UNKNOWN_LANGUAGE);
        assert_eq!(resolve(Some("")), UNKNOWN_LANGUAGE);
        assert_eq!(resolve(Some("und")), UNKNOWN_LANGUAGE);
        assert_eq!(resolve(Some("x!!")), UNKNOWN_LANGUAGE);
        assert_eq!(resolve(Some("-")), UNKNOWN_LANGUAGE);
    }
}
