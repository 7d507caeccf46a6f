//! Lectura tolerante de la entrada de celdas
//!
//! Este módulo interpreta el texto que se escribe en las celdas de la tabla.
//! Las celdas se editan tecla a tecla, así que nunca hay error: un valor
//! ilegible devuelve `None` y el llamador conserva el valor anterior. El
//! texto vacío y un signo menos suelto (primera tecla de un negativo) valen
//! cero.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::vehicle::InputKind;

lazy_static! {
    static ref HEX_PREFIX: Regex = Regex::new(r"^\s*([+-]?)0[xX]([0-9a-fA-F]*)").unwrap();
    static ref INTEGER_PREFIX: Regex = Regex::new(r"^\s*([+-]?\d+)").unwrap();
    static ref DECIMAL_PREFIX: Regex =
        Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").unwrap();
}

fn is_blank_entry(raw: &str) -> bool {
    raw.is_empty() || raw == "-"
}

/// Lee un prefijo `0x` en base 16; sin dígitos tras el prefijo no hay número
fn parse_hex_prefix(sign: &str, digits: &str) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits
        .chars()
        .filter_map(|c| c.to_digit(16))
        .fold(0.0, |acc, d| acc * 16.0 + f64::from(d));
    Some(if sign == "-" { -magnitude } else { magnitude })
}

/// Lee el entero inicial de `raw`, p. ej. `"12abc"` -> 12, `"3.7"` -> 3,
/// `"0x1A"` -> 26
pub fn parse_numeric_input(raw: &str) -> Option<f64> {
    if is_blank_entry(raw) {
        return Some(0.0);
    }

    if let Some(caps) = HEX_PREFIX.captures(raw) {
        return parse_hex_prefix(caps.get(1)?.as_str(), caps.get(2)?.as_str());
    }

    let digits = INTEGER_PREFIX.captures(raw)?.get(1)?.as_str();
    // Prefijos demasiado largos para i64 se leen como float
    digits
        .parse::<i64>()
        .map(|v| v as f64)
        .or_else(|_| digits.parse::<f64>())
        .ok()
}

/// Quita el primer `%` y lee el decimal inicial, p. ej. `"12.5%"` -> 12.5.
/// No hay lectura hexadecimal: `"0x1A"` -> 0.
pub fn parse_percent_input(raw: &str) -> Option<f64> {
    let cleaned = raw.replacen('%', "", 1);
    if is_blank_entry(&cleaned) {
        return Some(0.0);
    }

    let number = DECIMAL_PREFIX.captures(&cleaned)?.get(1)?.as_str();
    number.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Despacha según el tipo de entrada del campo
pub fn parse_input(kind: InputKind, raw: &str) -> Option<f64> {
    match kind {
        InputKind::Numeric => parse_numeric_input(raw),
        InputKind::Percent => parse_percent_input(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_minus_read_as_zero() {
        assert_eq!(parse_numeric_input(""), Some(0.0));
        assert_eq!(parse_numeric_input("-"), Some(0.0));
        assert_eq!(parse_percent_input(""), Some(0.0));
        assert_eq!(parse_percent_input("-"), Some(0.0));
        assert_eq!(parse_percent_input("%"), Some(0.0));
        assert_eq!(parse_percent_input("-%"), Some(0.0));
    }

    #[test]
    fn test_numeric_reads_leading_integer() {
        assert_eq!(parse_numeric_input("28000"), Some(28000.0));
        assert_eq!(parse_numeric_input("-150"), Some(-150.0));
        assert_eq!(parse_numeric_input("  42"), Some(42.0));
        assert_eq!(parse_numeric_input("12abc"), Some(12.0));
        assert_eq!(parse_numeric_input("3.7"), Some(3.0));
    }

    #[test]
    fn test_numeric_reads_hex_prefix() {
        assert_eq!(parse_numeric_input("0x1A"), Some(26.0));
        assert_eq!(parse_numeric_input("-0xff"), Some(-255.0));
        assert_eq!(parse_numeric_input(" 0X10zz"), Some(16.0));
        assert_eq!(parse_numeric_input("0x"), None);
        assert_eq!(parse_numeric_input("0xg"), None);
        assert_eq!(parse_percent_input("0x1A"), Some(0.0));
    }

    #[test]
    fn test_numeric_rejects_text_without_digits() {
        assert_eq!(parse_numeric_input("abc"), None);
        assert_eq!(parse_numeric_input("$100"), None);
        assert_eq!(parse_numeric_input("--5"), None);
        assert_eq!(parse_numeric_input(" "), None);
    }

    #[test]
    fn test_percent_strips_sign_and_reads_decimal() {
        assert_eq!(parse_percent_input("35%"), Some(35.0));
        assert_eq!(parse_percent_input("12.5%"), Some(12.5));
        assert_eq!(parse_percent_input("12.5"), Some(12.5));
        assert_eq!(parse_percent_input(".5%"), Some(0.5));
        assert_eq!(parse_percent_input("-10%"), Some(-10.0));
        assert_eq!(parse_percent_input("40%%"), Some(40.0));
    }

    #[test]
    fn test_percent_rejects_non_numbers() {
        assert_eq!(parse_percent_input("abc%"), None);
        assert_eq!(parse_percent_input("%%"), None);
        assert_eq!(parse_percent_input("."), None);
    }

    #[test]
    fn test_parse_input_dispatches_on_kind() {
        assert_eq!(parse_input(InputKind::Numeric, "7.9"), Some(7.0));
        assert_eq!(parse_input(InputKind::Percent, "7.9%"), Some(7.9));
    }
}
