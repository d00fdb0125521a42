//! Numeric text input with explicit locale formatting.
//!
//! Number parsing and rendering go through a [`NumberFormat`] passed into
//! every call; there is no ambient process-wide locale. Full CLDR data
//! stays with the caller; a format is just the separator pair.

/// Decimal and group separators for one locale,
/// e.g. `('.', Some(','))` for en_US or `(',', Some('.'))` for de_DE.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberFormat {
    pub decimal_separator: char,
    pub group_separator: Option<char>,
}

impl NumberFormat {
    pub const fn new(decimal_separator: char, group_separator: Option<char>) -> Self {
        Self {
            decimal_separator,
            group_separator,
        }
    }

    /// Parse a localized number string into its value and fraction-digit
    /// count. Falls back to the plain machine form (`1234.5`) when the
    /// locale form does not match.
    pub fn parse(&self, raw: &str) -> Option<(f64, usize)> {
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        self.parse_locale(s).or_else(|| parse_machine(s))
    }

    fn parse_locale(&self, s: &str) -> Option<(f64, usize)> {
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_part, frac_part) = match body.split_once(self.decimal_separator) {
            Some((int_part, frac_part)) => (int_part, frac_part),
            None => (body, ""),
        };
        if frac_part.contains(self.decimal_separator)
            || !frac_part.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        let int_digits = self.int_digits(int_part)?;
        if int_digits.is_empty() && frac_part.is_empty() {
            return None;
        }

        let mut rendered = String::with_capacity(int_digits.len() + frac_part.len() + 2);
        if negative {
            rendered.push('-');
        }
        rendered.push_str(if int_digits.is_empty() { "0" } else { &int_digits });
        rendered.push('.');
        rendered.push_str(if frac_part.is_empty() { "0" } else { frac_part });

        let value = rendered.parse::<f64>().ok()?;
        Some((value, frac_part.len()))
    }

    /// Integer-part digits, with the group separator stripped after
    /// checking that groups after the first are exactly three digits.
    fn int_digits(&self, int_part: &str) -> Option<String> {
        let grouped = self
            .group_separator
            .is_some_and(|sep| int_part.contains(sep));
        if !grouped {
            if int_part.chars().all(|c| c.is_ascii_digit()) {
                return Some(int_part.to_string());
            }
            return None;
        }

        let sep = self.group_separator.unwrap();
        let mut digits = String::with_capacity(int_part.len());
        for (index, group) in int_part.split(sep).enumerate() {
            let valid_len = if index == 0 {
                (1..=3).contains(&group.len())
            } else {
                group.len() == 3
            };
            if !valid_len || !group.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            digits.push_str(group);
        }
        Some(digits)
    }

    /// Render a value in this locale's display form, keeping
    /// `fraction_digits` decimal places and re-applying grouping.
    pub fn format(&self, value: f64, fraction_digits: usize) -> String {
        let rendered = format!("{:.*}", fraction_digits, value.abs());
        let (int_part, frac_part) = rendered
            .split_once('.')
            .unwrap_or((rendered.as_str(), ""));

        let mut out = String::with_capacity(rendered.len() + 4);
        if value.is_sign_negative() && value != 0.0 {
            out.push('-');
        }
        match self.group_separator {
            Some(sep) => {
                let digits: Vec<char> = int_part.chars().collect();
                for (index, digit) in digits.iter().enumerate() {
                    if index > 0 && (digits.len() - index) % 3 == 0 {
                        out.push(sep);
                    }
                    out.push(*digit);
                }
            }
            None => out.push_str(int_part),
        }
        if !frac_part.is_empty() {
            out.push(self.decimal_separator);
            out.push_str(frac_part);
        }
        out
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::new('.', Some(','))
    }
}

fn parse_machine(s: &str) -> Option<(f64, usize)> {
    let value = s.parse::<f64>().ok()?;
    let scale = s
        .split_once('.')
        .map(|(_, frac)| frac.chars().take_while(|c| c.is_ascii_digit()).count())
        .unwrap_or(0);
    Some((value, scale))
}

/// Text input validated as a localized number.
///
/// Invalid input is stored as entered, so the user sees what they typed;
/// [`NumericField::validate`] fails for it later.
#[derive(Debug, Clone, Default)]
pub struct NumericField {
    name: String,
    title: String,
    value: String,
}

impl NumericField {
    pub fn new(name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            value: String::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The display form of the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the value, re-rendering numeric input into the locale's display
    /// form. Non-numeric input is stored trimmed and fails validation.
    pub fn set_value(&mut self, raw: &str, format: &NumberFormat) {
        match format.parse(raw) {
            Some((value, scale)) => self.value = format.format(value, scale),
            None => self.value = raw.trim().to_string(),
        }
    }

    /// Whether the current value is a valid number in the given locale
    pub fn is_numeric(&self, format: &NumberFormat) -> bool {
        format.parse(&self.value).is_some()
    }

    /// The numeric value extracted from the localized display string,
    /// or 0 when the value is not numeric
    pub fn data_value(&self, format: &NumberFormat) -> f64 {
        format
            .parse(&self.value)
            .map(|(value, _)| value)
            .unwrap_or(0.0)
    }

    /// An empty value passes unless the field is required; `"0"` counts
    /// as given.
    pub fn validate(&self, format: &NumberFormat, required: bool) -> bool {
        if self.value.is_empty() && !required {
            return true;
        }
        self.is_numeric(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EN_US: NumberFormat = NumberFormat::new('.', Some(','));
    const DE_DE: NumberFormat = NumberFormat::new(',', Some('.'));
    const FI_FI: NumberFormat = NumberFormat::new(',', Some(' '));

    #[test]
    fn en_us_accepts_point_decimal() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("12.00", &EN_US);
        assert!(field.validate(&EN_US, true));
        assert_eq!(field.data_value(&EN_US), 12.0);
    }

    #[test]
    fn en_us_rejects_comma_decimal() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("12,00", &EN_US);
        assert!(!field.validate(&EN_US, true));
    }

    #[test]
    fn zero_counts_as_given() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("0", &EN_US);
        assert!(field.validate(&EN_US, true));
        assert_eq!(field.data_value(&EN_US), 0.0);
    }

    #[test]
    fn empty_fails_when_required() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("", &EN_US);
        assert!(!field.validate(&EN_US, true));
        assert!(field.validate(&EN_US, false));
    }

    #[test]
    fn de_de_comma_decimal() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("12,00", &DE_DE);
        assert!(field.validate(&DE_DE, false));
        assert_eq!(field.value(), "12,00");
        assert_eq!(field.data_value(&DE_DE), 12.0);
    }

    #[test]
    fn de_de_forgives_machine_form() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("12.00", &DE_DE);
        assert!(field.validate(&DE_DE, false));
        // converts decimal point to comma
        assert_eq!(field.value(), "12,00");
        assert_eq!(field.data_value(&DE_DE), 12.0);
    }

    #[test]
    fn fi_fi_space_group_separator() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("21 212,00", &FI_FI);
        assert!(field.validate(&FI_FI, false));
        assert_eq!(field.value(), "21 212,00");
        assert_eq!(field.data_value(&FI_FI), 21212.0);
    }

    #[test]
    fn fi_fi_ungrouped_input_gains_grouping() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("21212,00", &FI_FI);
        assert!(field.validate(&FI_FI, false));
        assert_eq!(field.value(), "21 212,00");
        assert_eq!(field.data_value(&FI_FI), 21212.0);
    }

    #[test]
    fn malformed_grouping_is_rejected() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("12 34,00", &FI_FI);
        assert!(!field.validate(&FI_FI, false));
        assert_eq!(field.data_value(&FI_FI), 0.0);
    }

    #[test]
    fn non_numeric_input_is_stored_as_entered() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value(" abc ", &EN_US);
        assert_eq!(field.value(), "abc");
        assert!(!field.is_numeric(&EN_US));
    }

    #[test]
    fn negative_values_round_trip() {
        let mut field = NumericField::new("Number", "Number");
        field.set_value("-1.234,5", &DE_DE);
        assert!(field.validate(&DE_DE, false));
        assert_eq!(field.value(), "-1.234,5");
        assert_eq!(field.data_value(&DE_DE), -1234.5);
    }

    #[test]
    fn format_groups_from_the_right() {
        assert_eq!(EN_US.format(1234567.0, 2), "1,234,567.00");
        assert_eq!(FI_FI.format(21212.0, 2), "21 212,00");
        assert_eq!(DE_DE.format(12.0, 0), "12");
    }
}
