//! String-to-value converters for loosely typed list columns
//!
//! Every parser here returns `None` for missing input and for input it
//! cannot read. Callers treat `None` as "not provided", so none of these
//! functions may panic or return an error.

use quick_xml::events::Event;
use quick_xml::Reader;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

fn current_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*([-+]?\d*\.?\d+)\s*(?:ua|uA|uAmp)?\s*$").expect("Failed to compile regex")
    })
}

fn length_of_time_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^\s*(\d*\.?\d+)\s*(?:m|min|mins|minute|minutes)?\s*$")
            .expect("Failed to compile regex")
    })
}

fn fiber_length_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^([1-9]\.\d) mm$").expect("Failed to compile regex"))
}

fn titer_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[-+]?\d*\.?\d+[eE][-+]?\d+").expect("Failed to compile regex"))
}

fn concentration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)\s*mg/m[lL]").expect("Failed to compile regex"))
}

/// Parses an exact decimal from its string representation
///
/// Accepts plain (`"0.25"`) and scientific (`"2.5e-1"`) notation with
/// surrounding whitespace.
pub fn parse_decimal(value: Option<&str>) -> Option<Decimal> {
    let s = value?.trim();
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// Parses an exact decimal from a float via its shortest string form
pub fn decimal_from_f64(value: Option<f64>) -> Option<Decimal> {
    let f = value?;
    if !f.is_finite() {
        return None;
    }
    parse_decimal(Some(&f.to_string()))
}

/// Parses a current such as `"5 uA"` or `"-2.5uAmp"`
pub fn parse_current(text: Option<&str>) -> Option<Decimal> {
    let caps = current_regex().captures(text?)?;
    parse_decimal(caps.get(1).map(|m| m.as_str()))
}

/// Parses a duration in minutes such as `"10 min"` or `"5 minutes"`
pub fn parse_length_of_time(text: Option<&str>) -> Option<Decimal> {
    let caps = length_of_time_regex().captures(text?)?;
    parse_decimal(caps.get(1).map(|m| m.as_str()))
}

/// Parses a fiber length option such as `"3.5 mm"`
pub fn parse_fiber_length_mm(text: Option<&str>) -> Option<Decimal> {
    let caps = fiber_length_regex().captures(text?)?;
    parse_decimal(caps.get(1).map(|m| m.as_str()))
}

/// Returns whether `text` contains a titer in scientific notation
///
/// The number must not run on into another `.`, so `"1e12.5"` is rejected.
pub fn is_titer(text: &str) -> bool {
    titer_regex()
        .find_iter(text)
        .any(|m| !matches!(text[m.end()..].chars().next(), Some(c) if c == '.' || c.is_ascii_digit()))
}

/// Returns whether `text` contains a concentration in mg/mL
pub fn is_concentration(text: &str) -> bool {
    concentration_regex().is_match(text)
}

/// Parses a titer as a whole number of genome copies
///
/// `"2.3e12"` becomes `2300000000000`; fractional parts are truncated.
pub fn parse_titer(text: Option<&str>) -> Option<i64> {
    let f: f64 = text?.trim().parse().ok()?;
    if !f.is_finite() || f >= i64::MAX as f64 || f < i64::MIN as f64 {
        return None;
    }
    Some(f.trunc() as i64)
}

/// Parses a bare concentration number through its float form
pub fn parse_concentration(text: Option<&str>) -> Option<Decimal> {
    let f: f64 = text?.trim().parse().ok()?;
    decimal_from_f64(Some(f))
}

/// Extracts the numeric part of a `"N mg/mL"` concentration
pub fn concentration_value(text: &str) -> Option<&str> {
    concentration_regex()
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Returns the `href` of the first anchor in an HTML fragment
///
/// The fragment must be a single well-formed root element, optionally
/// surrounded by whitespace. Parser errors, unclosed elements, stray end
/// tags, a second root or loose text all yield `None`, even if an anchor was
/// already seen. Only the first `<a>` counts: when it has no `href` the
/// result is `None` whatever follows.
pub fn parse_html_href(html: Option<&str>) -> Option<String> {
    let mut reader = Reader::from_str(html?);
    let mut depth: usize = 0;
    let mut roots: usize = 0;
    let mut anchor: Option<Option<String>> = None;

    loop {
        let (element, opens) = match reader.read_event() {
            Ok(Event::Start(e)) => (e, true),
            Ok(Event::Empty(e)) => (e, false),
            Ok(Event::End(_)) => {
                depth = depth.checked_sub(1)?;
                continue;
            }
            Ok(Event::Text(text)) => {
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return None;
                }
                continue;
            }
            Ok(Event::GeneralRef(_)) | Ok(Event::CData(_)) if depth == 0 => return None,
            Ok(Event::Eof) => break,
            Ok(_) => continue,
            Err(_) => return None,
        };

        if depth == 0 {
            roots += 1;
            if roots > 1 {
                return None;
            }
        }
        if opens {
            depth += 1;
        }

        if anchor.is_none() && element.name().as_ref().eq_ignore_ascii_case(b"a") {
            let href = match element.try_get_attribute("href").ok()? {
                Some(attr) => {
                    let raw = std::str::from_utf8(&attr.value).ok()?;
                    Some(quick_xml::escape::unescape(raw).ok()?.into_owned())
                }
                None => None,
            };
            anchor = Some(href);
        }
    }

    if depth != 0 {
        return None;
    }
    anchor.flatten()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal(Some("0.25")), Some(dec("0.25")));
        assert_eq!(parse_decimal(Some(" -3.1 ")), Some(dec("-3.1")));
        assert_eq!(parse_decimal(Some("2.5e-1")), Some(dec("0.25")));
        assert_eq!(parse_decimal(Some("abc")), None);
        assert_eq!(parse_decimal(Some("")), None);
        assert_eq!(parse_decimal(None), None);
    }

    #[test]
    fn test_parse_decimal_is_stable_on_its_own_output() {
        let first = parse_decimal(Some("0.25")).unwrap();
        let again = parse_decimal(Some(&first.to_string()));
        assert_eq!(again, Some(first));
    }

    #[test]
    fn test_decimal_from_f64() {
        assert_eq!(decimal_from_f64(Some(0.1)), Some(dec("0.1")));
        assert_eq!(decimal_from_f64(Some(f64::NAN)), None);
        assert_eq!(decimal_from_f64(None), None);
    }

    #[rstest]
    #[case("5", Some("5"))]
    #[case("5 uA", Some("5"))]
    #[case("-2.5uAmp", Some("-2.5"))]
    #[case(" 3ua ", Some("3"))]
    #[case("5 mA", None)]
    #[case("five", None)]
    fn test_parse_current(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_current(Some(text)), expected.map(dec));
    }

    #[rstest]
    #[case("10", Some("10"))]
    #[case("10 min", Some("10"))]
    #[case("7.5 mins", Some("7.5"))]
    #[case("1 minute", Some("1"))]
    #[case("3 minutes", Some("3"))]
    #[case("5m", Some("5"))]
    #[case("5 hours", None)]
    fn test_parse_length_of_time(#[case] text: &str, #[case] expected: Option<&str>) {
        assert_eq!(parse_length_of_time(Some(text)), expected.map(dec));
    }

    #[test]
    fn test_parse_fiber_length_mm() {
        assert_eq!(parse_fiber_length_mm(Some("3.5 mm")), Some(dec("3.5")));
        assert_eq!(parse_fiber_length_mm(Some("0.5 mm")), None);
        assert_eq!(parse_fiber_length_mm(Some("3.5mm")), None);
        assert_eq!(parse_fiber_length_mm(Some("3.5")), None);
        assert_eq!(parse_fiber_length_mm(None), None);
    }

    #[test]
    fn test_is_titer() {
        assert!(is_titer("2.3e12"));
        assert!(is_titer("titer 1E+13 gc/mL"));
        assert!(!is_titer("1e12.5"));
        assert!(!is_titer("1000"));
        assert!(!is_titer("1 mg/mL"));
    }

    #[test]
    fn test_is_concentration() {
        assert!(is_concentration("1 mg/mL"));
        assert!(is_concentration("0.5mg/ml"));
        assert!(!is_concentration("1 ug/mL"));
        assert!(!is_concentration("2.3e12"));
    }

    #[test]
    fn test_parse_titer() {
        assert_eq!(parse_titer(Some("2.3e12")), Some(2_300_000_000_000));
        assert_eq!(parse_titer(Some("1000.9")), Some(1000));
        assert_eq!(parse_titer(Some("nan")), None);
        assert_eq!(parse_titer(Some("1e400")), None);
        assert_eq!(parse_titer(Some("x")), None);
        assert_eq!(parse_titer(None), None);
    }

    #[test]
    fn test_parse_concentration() {
        assert_eq!(parse_concentration(Some("1.5")), Some(dec("1.5")));
        assert_eq!(parse_concentration(Some("1.5 mg/mL")), None);
        assert_eq!(concentration_value("1.5 mg/mL"), Some("1.5"));
        assert_eq!(concentration_value("n/a"), None);
    }

    #[test]
    fn test_parse_html_href() {
        assert_eq!(
            parse_html_href(Some(r#"<a href="https://x/y">t</a>"#)),
            Some("https://x/y".to_string())
        );
        assert_eq!(
            parse_html_href(Some(r#"<div><p>see</p><a href="https://a?b=1&amp;c=2">t</a></div>"#)),
            Some("https://a?b=1&c=2".to_string())
        );
        assert_eq!(parse_html_href(Some("<div>no link</div>")), None);
        assert_eq!(parse_html_href(None), None);
    }

    #[test]
    fn test_parse_html_href_malformed() {
        assert_eq!(parse_html_href(Some(r#"<a href="https://x/y">t</b>"#)), None);
        assert_eq!(parse_html_href(Some(r#"<a href="https://x/y">t</a></div>"#)), None);
        // Unclosed elements at end of input
        assert_eq!(parse_html_href(Some("<p><a href='q'>t</a>")), None);
        assert_eq!(parse_html_href(Some(r#"<br><a href="z">t</a>"#)), None);
        assert_eq!(parse_html_href(Some(r#"<div><a href="z">t</a>"#)), None);
        // Two top-level roots
        assert_eq!(parse_html_href(Some(r#"<a>t</a><a href="y">u</a>"#)), None);
        assert_eq!(parse_html_href(Some(r#"<a href="x">t</a><p>u</p>"#)), None);
        // Loose text outside the root
        assert_eq!(parse_html_href(Some(r#"see <a href="x">t</a>"#)), None);
    }

    #[test]
    fn test_parse_html_href_first_anchor_decides() {
        assert_eq!(
            parse_html_href(Some(r#"<div><a>t</a><a href="y">u</a></div>"#)),
            None
        );
        assert_eq!(
            parse_html_href(Some(r#"<div><a href="x">t</a><a href="y">u</a></div>"#)),
            Some("x".to_string())
        );
        assert_eq!(
            parse_html_href(Some("  <p><a href='q'/></p>\n")),
            Some("q".to_string())
        );
    }
}
