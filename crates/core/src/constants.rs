/// Decimal precision used when formatting an unrecognized currency code.
pub const PLAIN_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for the "1 X = Y RON" rate display string.
pub const RATE_DISPLAY_PRECISION: u32 = 4;
