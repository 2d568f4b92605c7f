//! Разбор и форматирование чисел для полей формы
//!
//! Поля формы хранят сырой текст ввода. Разбор всегда «мягкий»: всё, что не
//! удалось распознать как число, считается нулём.

/// Разбирает текст поля в число
///
/// Запятые (разделители тысяч) удаляются, ведущие пробелы пропускаются,
/// берётся самый длинный числовой префикс: `"12abc"` → `12`,
/// `"1,200.5"` → `1200.5`, `""` → `0`.
pub fn parse_number(raw: &str) -> f64 {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let s = cleaned.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // Экспонента учитывается только если за ней есть цифры
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Форматирует число с разделителем тысяч (запятая) и не более чем тремя
/// знаками после точки, без хвостовых нулей
///
/// ```
/// use contracts::shared::number::format_grouped;
/// assert_eq!(format_grouped(1234567.0), "1,234,567");
/// assert_eq!(format_grouped(1234.5), "1,234.5");
/// ```
pub fn format_grouped(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let formatted = format!("{:.3}", value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, d.trim_end_matches('0')),
        None => (formatted.as_str(), ""),
    };

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    if !decimal_part.is_empty() {
        result.push('.');
        result.push_str(decimal_part);
    }

    if value < 0.0 && result != "0" {
        format!("-{}", result)
    } else {
        result
    }
}

/// Фиксированное количество знаков после точки
///
/// Ноль (в том числе `-0.0`) печатается без знака, малые отрицательные
/// значения сохраняют минус: `-0.04` → `"-0.0"`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", decimals, value)
}

/// Процент с одним знаком: `72.3%`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_fixed(value, 1))
}

/// Значение для записи обратно в поле ввода: `3000`, `12.5`
pub fn format_plain(value: f64) -> String {
    format!("{}", value)
}
