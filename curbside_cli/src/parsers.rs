use jiff::SpanRelativeTo;

/// Accepts "30s", "5m", ISO durations ("PT1H30M") and bare second counts.
pub fn parse_duration(input: &str) -> Result<jiff::SignedDuration, String> {
    if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        return Ok(duration);
    }

    if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        return Ok(duration);
    }

    if let Ok(seconds) = input.parse::<i64>() {
        return Ok(jiff::SignedDuration::from_secs(seconds.abs()));
    }

    Err(String::from("Invalid duration"))
}

#[cfg(test)]
mod tests {
    use super::parse_duration;

    #[test]
    fn test_parse_duration_formats() {
        assert_eq!(
            parse_duration("30s").unwrap(),
            jiff::SignedDuration::from_secs(30)
        );
        assert_eq!(
            parse_duration("2").unwrap(),
            jiff::SignedDuration::from_secs(2)
        );
        assert_eq!(
            parse_duration("PT1M30S").unwrap(),
            jiff::SignedDuration::from_secs(90)
        );
        assert!(parse_duration("soon").is_err());
    }
}
