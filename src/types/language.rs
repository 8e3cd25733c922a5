/// Language code accepted by the Places service for the `language` query
/// parameter. Results are biased toward the selected language; if none is
/// supplied the service picks one based on the request's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Arabic,
    Bengali,
    Bulgarian,
    Catalan,
    Czech,
    Danish,
    German,
    Greek,
    English,
    EnglishGb,
    Spanish,
    Persian,
    Finnish,
    French,
    Hebrew,
    Hindi,
    Croatian,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Dutch,
    Norwegian,
    Polish,
    Portuguese,
    PortugueseBr,
    Romanian,
    Russian,
    Slovak,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
    ChineseSimplified,
    ChineseTraditional,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::Bengali => "bn",
            Language::Bulgarian => "bg",
            Language::Catalan => "ca",
            Language::Czech => "cs",
            Language::Danish => "da",
            Language::German => "de",
            Language::Greek => "el",
            Language::English => "en",
            Language::EnglishGb => "en-GB",
            Language::Spanish => "es",
            Language::Persian => "fa",
            Language::Finnish => "fi",
            Language::French => "fr",
            Language::Hebrew => "he",
            Language::Hindi => "hi",
            Language::Croatian => "hr",
            Language::Hungarian => "hu",
            Language::Indonesian => "id",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Dutch => "nl",
            Language::Norwegian => "no",
            Language::Polish => "pl",
            Language::Portuguese => "pt",
            Language::PortugueseBr => "pt-BR",
            Language::Romanian => "ro",
            Language::Russian => "ru",
            Language::Slovak => "sk",
            Language::Swedish => "sv",
            Language::Thai => "th",
            Language::Turkish => "tr",
            Language::Ukrainian => "uk",
            Language::Vietnamese => "vi",
            Language::ChineseSimplified => "zh-CN",
            Language::ChineseTraditional => "zh-TW",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
