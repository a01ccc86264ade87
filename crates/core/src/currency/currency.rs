//! Supported currency metadata.
//!
//! The dashboard holds all stored amounts in RON and presents them in one of
//! a fixed set of four currencies. The set is closed: it is not
//! user-extensible and never changes for the lifetime of the process.

/// Currency all stored amounts are canonically held in.
pub const BASE_CURRENCY: &str = "RON";

/// Where the currency symbol sits relative to the formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    /// Directly before the number, no space (`€1.234,50`).
    Prefix,
    /// Directly after the number, no space (`1.235₫`).
    Suffix,
    /// After the number, separated by a space (`1.234,50 lei`).
    SuffixSpaced,
}

/// Immutable display metadata for one supported currency.
#[derive(Debug, Clone, Copy)]
pub struct CurrencyMeta {
    pub code: &'static str,
    pub symbol: &'static str,
    /// BCP 47 tag the separators are taken from.
    pub locale: &'static str,
    pub decimals: u32,
    pub group_separator: char,
    pub decimal_separator: char,
    pub placement: SymbolPlacement,
}

/// The supported currencies, in the order widgets present them.
pub const SUPPORTED_CURRENCIES: [CurrencyMeta; 4] = [
    CurrencyMeta {
        code: "RON",
        symbol: "lei",
        locale: "ro-RO",
        decimals: 2,
        group_separator: '.',
        decimal_separator: ',',
        placement: SymbolPlacement::SuffixSpaced,
    },
    CurrencyMeta {
        code: "EUR",
        symbol: "\u{20ac}",
        locale: "de-DE",
        decimals: 2,
        group_separator: '.',
        decimal_separator: ',',
        placement: SymbolPlacement::Prefix,
    },
    CurrencyMeta {
        code: "USD",
        symbol: "$",
        locale: "en-US",
        decimals: 2,
        group_separator: ',',
        decimal_separator: '.',
        placement: SymbolPlacement::Prefix,
    },
    CurrencyMeta {
        code: "VND",
        symbol: "\u{20ab}",
        locale: "vi-VN",
        decimals: 0,
        group_separator: '.',
        decimal_separator: ',',
        placement: SymbolPlacement::Suffix,
    },
];

/// Returns the metadata for a supported currency code, if any.
pub fn currency_metadata(code: &str) -> Option<&'static CurrencyMeta> {
    SUPPORTED_CURRENCIES.iter().find(|meta| meta.code == code)
}

/// Whether the given code names a supported currency.
pub fn is_supported(code: &str) -> bool {
    currency_metadata(code).is_some()
}

/// The supported codes in presentation order.
pub fn supported_codes() -> [&'static str; 4] {
    [
        SUPPORTED_CURRENCIES[0].code,
        SUPPORTED_CURRENCIES[1].code,
        SUPPORTED_CURRENCIES[2].code,
        SUPPORTED_CURRENCIES[3].code,
    ]
}
