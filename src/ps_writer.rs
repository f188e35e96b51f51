use std::error::Error;

/// format a coordinate the way every drawing command prints numbers
///
/// shortest round-trip text, integral values print without fraction: 1.0 -> "1"
pub fn format_number(v: f64) -> String {
    if v == 0.0 {
        // -0 prints as 0
        return "0".to_string();
    }
    format!("{}", v)
}

/// check text for a DSC comment value, must be printable ASCII on one line
pub fn dsc_text(s: &str) -> Result<String, Box<dyn Error>> {
    if !s.is_ascii() {
        return Err(Box::new(ps_err!(Text, format!("{:?} is not ascii", s))));
    }
    if s.chars().any(|c| c.is_ascii_control()) {
        return Err(Box::new(ps_err!(
            Text,
            format!("{:?} contains control characters", s)
        )));
    }
    Ok(s.to_string())
}

/// `%%Key: value` line, without line ending
pub fn dsc_comment(key: &str, value: &str) -> String {
    format!("%%{}: {}", key, value)
}
