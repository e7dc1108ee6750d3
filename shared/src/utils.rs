// Formatting helpers shared by the engine and the command line front end.

pub mod brazilian_format {
    use std::str::FromStr;

    // Parses amounts the way the export keeps them: plain decimal text with '.' as
    // the decimal point ("150.00", "-12.5", "1e3"). Anything else is None.
    pub fn parse_amount(s: &str) -> Option<f64> {
        f64::from_str(s.trim()).ok().filter(|v| v.is_finite())
    }

    // Formats with '.' as thousand separator and ',' as decimal separator,
    // e.g. 1234567.891 with 2 decimals -> "1.234.567,89".
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        let formatted = format!("{:.decimals$}", value.abs(), decimals = decimals);
        let (int_part, frac_part) = match formatted.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (formatted.as_str(), None),
        };

        let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }

        let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
        let sign = if value < 0.0 && !is_zero { "-" } else { "" };
        match frac_part {
            Some(frac) => format!("{}{},{}", sign, grouped, frac),
            None => format!("{}{}", sign, grouped),
        }
    }

    pub fn format_currency(value: f64) -> String {
        format!("R$ {}", format_decimal(value, 2))
    }

}
