use reqwest::Url;

use crate::core::models::SearchResult;
use crate::global_constants;
use crate::global_constants::LOG_TAG_RESULT_BLOCK;

const MAP_LINK_SCHEMES: [&str; 2] = ["http", "https"];

/// A search result with its numbers already formatted for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultBlock {
    pub name: String,
    pub location: String,
    pub rating: String,
    pub score: String,
    pub map_link: Option<String>,
}

impl ResultBlock {
    pub fn build_from_result(result: &SearchResult) -> Self {
        Self {
            name: result.name.clone(),
            location: result.location.clone(),
            rating: format_fixed(result.avg_rating, 2),
            score: format_fixed(result.top_vsm_score, 4),
            map_link: result.gmaps_link.as_deref().and_then(sanitize_map_link),
        }
    }

    pub fn to_markup(&self) -> String {
        let mut markup = String::from("<div class=\"result-item\">\n");
        markup.push_str(&format!("    <h3>{}</h3>\n", escape_html(&self.name)));
        markup.push_str(&format!(
            "    <p>{}: {}</p>\n",
            global_constants::LABEL_LOCATION,
            escape_html(&self.location)
        ));
        markup.push_str(&format!(
            "    <p>{}: {}</p>\n",
            global_constants::LABEL_RATING,
            self.rating
        ));
        markup.push_str(&format!(
            "    <p>{}: {}</p>\n",
            global_constants::LABEL_SCORE,
            self.score
        ));
        if let Some(link) = &self.map_link {
            markup.push_str(&format!(
                "    <p><a href=\"{}\">{}</a></p>\n",
                escape_html(link),
                global_constants::LABEL_MAP_LINK
            ));
        }
        markup.push_str("    <hr>\n</div>\n");
        markup
    }
}

/// Single-message content that replaces the whole results container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultsNotice {
    NoResults,
    SearchFailed,
}

impl ResultsNotice {
    pub fn message(&self) -> &'static str {
        match self {
            ResultsNotice::NoResults => global_constants::USER_MESSAGE_NO_RESULTS,
            ResultsNotice::SearchFailed => global_constants::USER_MESSAGE_SEARCH_FAILED,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ResultsNotice::SearchFailed)
    }

    pub fn to_markup(&self) -> String {
        if self.is_error() {
            format!("<p style=\"color: red;\">{}</p>\n", self.message())
        } else {
            format!("<p>{}</p>\n", self.message())
        }
    }
}

/// Only absolute http(s) links survive; anything else would reach the
/// browser or the OS opener as-is.
fn sanitize_map_link(raw_link: &str) -> Option<String> {
    let trimmed = raw_link.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if MAP_LINK_SCHEMES.contains(&url.scheme()) => Some(trimmed.to_string()),
        Ok(url) => {
            log::warn!(
                "{} Dropping map link with scheme '{}'",
                LOG_TAG_RESULT_BLOCK,
                url.scheme()
            );
            None
        }
        Err(e) => {
            log::warn!("{} Dropping unparsable map link: {}", LOG_TAG_RESULT_BLOCK, e);
            None
        }
    }
}

/// Fixed-point formatting where exact halfway values round away from zero.
///
/// `format!("{:.N}")` alone rounds exact ties to even (4.125 -> "4.12"); here
/// 4.125 shows as "4.13". Values that only look like ties in decimal (1.005 is
/// stored as 1.00499...) keep their normal rounding.
fn format_fixed(value: f64, fraction_digits: u32) -> String {
    let scaled = value.abs() * 10f64.powi(fraction_digits as i32);
    if scaled.fract() != 0.5 || !is_exact_halfway(value.abs(), fraction_digits, scaled) {
        return format!("{:.*}", fraction_digits as usize, value);
    }

    let rounded = scaled.ceil() as u64;
    let divisor = 10u64.pow(fraction_digits);
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if fraction_digits == 0 {
        return format!("{}{}", sign, rounded);
    }

    format!(
        "{}{}.{:0width$}",
        sign,
        rounded / divisor,
        rounded % divisor,
        width = fraction_digits as usize
    )
}

/// Checks in integer arithmetic that `value * 10^digits` is exactly
/// `scaled`, i.e. the floating-point product did not round onto a half.
fn is_exact_halfway(value: f64, fraction_digits: u32, scaled: f64) -> bool {
    let bits = value.to_bits();
    let biased_exponent = ((bits >> 52) & 0x7ff) as i32;
    let fraction_bits = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased_exponent == 0 {
        (fraction_bits, -1074)
    } else {
        (fraction_bits | (1u64 << 52), biased_exponent - 1075)
    };
    if exponent >= 0 {
        return false;
    }

    // mantissa * 2^exponent * 10^digits * 2 must equal twice_scaled exactly
    let numerator = mantissa as u128 * 10u128.pow(fraction_digits) * 2;
    let shift = exponent.unsigned_abs();
    let twice_scaled = (scaled * 2.0) as u128;
    numerator.trailing_zeros() >= shift && numerator.checked_shr(shift) == Some(twice_scaled)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for character in raw.chars() {
        match character {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_formats_rating_and_score_precision() {
        let block = ResultBlock::build_from_result(&SearchResult::new("Camp A", "Jogja", 4.5, 0.8765));

        assert_eq!(block.rating, "4.50");
        assert_eq!(block.score, "0.8765");
    }

    #[test]
    fn test_build_pads_whole_numbers() {
        let block = ResultBlock::build_from_result(&SearchResult::new("Camp", "Solo", 4.0, 0.0));

        assert_eq!(block.rating, "4.00");
        assert_eq!(block.score, "0.0000");
    }

    #[test]
    fn test_build_rounds_long_fractions() {
        let block =
            ResultBlock::build_from_result(&SearchResult::new("Camp", "Solo", 3.14159, 0.123456));

        assert_eq!(block.rating, "3.14");
        assert_eq!(block.score, "0.1235");
    }

    #[test]
    fn test_exact_ties_round_away_from_zero() {
        let block =
            ResultBlock::build_from_result(&SearchResult::new("Camp", "Kendal", 4.125, 0.03125));

        assert_eq!(block.rating, "4.13");
        assert_eq!(block.score, "0.0313");
    }

    #[test]
    fn test_format_fixed_rounds_exact_halves_up() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(3.625, 2), "3.63");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
        assert_eq!(format_fixed(2.5, 0), "3");
    }

    #[test]
    fn test_format_fixed_keeps_rounding_of_inexact_decimals() {
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(4.135, 2), "4.13");
        assert_eq!(format_fixed(0.8765, 4), "0.8765");
    }

    #[test]
    fn test_markup_lists_fields_in_order() {
        let markup =
            ResultBlock::build_from_result(&SearchResult::new("Camp A", "Jogja", 4.5, 0.8765))
                .to_markup();

        let name_at = markup.find("Camp A").unwrap();
        let location_at = markup.find("Jogja").unwrap();
        let rating_at = markup.find("4.50").unwrap();
        let score_at = markup.find("0.8765").unwrap();

        assert!(name_at < location_at);
        assert!(location_at < rating_at);
        assert!(rating_at < score_at);
        assert!(markup.trim_end().ends_with("<hr>\n</div>"));
    }

    #[test]
    fn test_markup_escapes_backend_strings() {
        let markup = ResultBlock::build_from_result(&SearchResult::new(
            "<script>alert('x')</script>",
            "Jogja & \"Solo\"",
            4.0,
            0.5,
        ))
        .to_markup();

        assert!(!markup.contains("<script>"));
        assert!(markup.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(markup.contains("Jogja &amp; &quot;Solo&quot;"));
    }

    #[test]
    fn test_map_link_rendered_only_when_present() {
        let without_link =
            ResultBlock::build_from_result(&SearchResult::new("Camp", "Solo", 4.0, 0.5));
        let with_link = ResultBlock::build_from_result(
            &SearchResult::new("Camp", "Solo", 4.0, 0.5)
                .with_gmaps_link("https://maps.example/?a=1&b=2"),
        );

        assert!(!without_link.to_markup().contains("<a href"));
        assert!(with_link
            .to_markup()
            .contains("<a href=\"https://maps.example/?a=1&amp;b=2\">"));
    }

    #[test]
    fn test_blank_map_link_is_dropped() {
        let block = ResultBlock::build_from_result(
            &SearchResult::new("Camp", "Solo", 4.0, 0.5).with_gmaps_link("   "),
        );

        assert!(block.map_link.is_none());
    }

    #[test]
    fn test_script_map_link_is_dropped() {
        let block = ResultBlock::build_from_result(
            &SearchResult::new("Camp", "Solo", 4.0, 0.5)
                .with_gmaps_link("javascript:alert(document.cookie)"),
        );

        assert!(block.map_link.is_none());
        assert!(!block.to_markup().contains("<a href"));
    }

    #[test]
    fn test_file_map_link_is_dropped() {
        let block = ResultBlock::build_from_result(
            &SearchResult::new("Camp", "Solo", 4.0, 0.5).with_gmaps_link("file:///etc/passwd"),
        );

        assert!(block.map_link.is_none());
    }

    #[test]
    fn test_relative_map_link_is_dropped() {
        let block = ResultBlock::build_from_result(
            &SearchResult::new("Camp", "Solo", 4.0, 0.5).with_gmaps_link("/maps?q=camp"),
        );

        assert!(block.map_link.is_none());
    }

    #[test]
    fn test_https_map_link_is_kept_trimmed() {
        let block = ResultBlock::build_from_result(
            &SearchResult::new("Camp", "Solo", 4.0, 0.5)
                .with_gmaps_link(" https://www.google.com/maps/search/?api=1&query=Camp "),
        );

        assert_eq!(
            block.map_link.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=Camp")
        );
    }

    #[test]
    fn test_notice_markup() {
        assert_eq!(
            ResultsNotice::NoResults.to_markup(),
            format!("<p>{}</p>\n", global_constants::USER_MESSAGE_NO_RESULTS)
        );
        assert!(ResultsNotice::SearchFailed
            .to_markup()
            .starts_with("<p style=\"color: red;\">"));
    }
}
