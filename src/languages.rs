use strum_macros::{Display, EnumIter, EnumString};

/// Default alphabet for ciphertexts restricted to basic Latin.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz0123456789 ,.?!:;";

/// Language presets the corpus pipeline ships probability tables for. Each
/// carries the alphabet its corpora are counted over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    Pl,
    Hu,
    Sv,
    It,
    De,
}

impl Language {
    pub fn alphabet(&self) -> &'static str {
        match self {
            Language::Pl => "aąbcćdeęfghijklłmnńoópqrsśtuvwxyzźż0123456789 ,.?!:;",
            Language::Hu => "aábcdeéfghijklmnoóöőpqrstuvwxyz0123456789 ,.?!:;",
            Language::Sv => "aåbcdeéfghijklmnoprstuvwxyzäö0123456789 ,.?!:;",
            Language::It => "abcdefghijklmnopqrstuvwxyz0123456789 ,.?!:;",
            Language::De => "aäbcdefghijklmnoöpqrsßtuüvwxyz0123456789 ,.?!:;",
        }
    }
}
