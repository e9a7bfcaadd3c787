//! Pixel length scanning over declaration values.
//!
//! Values are tokenized rather than pattern-matched, so `px` inside strings,
//! URLs or identifiers is never mistaken for a length. Lengths nested in
//! functions such as `calc()` are visited.

use cssparser::{ParseError as CssParseError, Parser, ParserInput, Token};

/// Rewrite every pixel length in `value` through `convert`.
///
/// `convert` receives the unsigned magnitude. A sign written before the number
/// stays in front of the replacement, and all other text is copied unchanged.
pub fn replace_px_lengths(value: &str, mut convert: impl FnMut(f64) -> String) -> String {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    let mut out = String::with_capacity(value.len());
    rewrite(&mut parser, &mut out, &mut convert);
    out
}

/// Collect the magnitude of every pixel length in `value`, in order.
pub fn px_lengths(value: &str) -> Vec<f64> {
    let mut lengths = vec![];
    replace_px_lengths(value, |magnitude| {
        lengths.push(magnitude);
        String::new()
    });
    lengths
}

/// Check whether `value` contains at least one pixel length.
pub fn has_px_length(value: &str) -> bool {
    !px_lengths(value).is_empty()
}

fn rewrite<'i, F>(parser: &mut Parser<'i, '_>, out: &mut String, convert: &mut F)
where
    F: FnMut(f64) -> String,
{
    loop {
        let start = parser.position();
        let token = match parser.next_including_whitespace_and_comments() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        let raw = parser.slice_from(start);

        match token {
            Token::Dimension { value, ref unit, .. } if unit.eq_ignore_ascii_case("px") => {
                let (sign, magnitude) = split_sign(raw, value);
                out.push_str(sign);
                out.push_str(&convert(magnitude));
            }
            Token::Function(_)
            | Token::ParenthesisBlock
            | Token::SquareBracketBlock
            | Token::CurlyBracketBlock => {
                out.push_str(raw);
                let inner_end = parser.parse_nested_block(|p| {
                    rewrite(p, out, convert);
                    Ok::<_, CssParseError<'i, ()>>(p.position())
                });
                // Closing bracket, absent when the block runs to end of input.
                if let Ok(end) = inner_end {
                    out.push_str(parser.slice(end..parser.position()));
                }
            }
            _ => out.push_str(raw),
        }
    }
}

/// Split a pixel token's source text into its sign and magnitude.
///
/// The magnitude is re-read from the source text at full precision; the
/// tokenizer's own value is single precision and only used as a fallback for
/// escaped units.
fn split_sign(raw: &str, value: f32) -> (&str, f64) {
    let sign = if raw.starts_with(['-', '+']) { &raw[..1] } else { "" };
    let magnitude = raw
        .len()
        .checked_sub(2)
        .filter(|&end| raw.is_char_boundary(end) && raw[end..].eq_ignore_ascii_case("px"))
        .and_then(|end| raw[..end].parse::<f64>().ok())
        .unwrap_or_else(|| f64::from(value))
        .abs();
    (sign, magnitude)
}
