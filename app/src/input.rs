use memoir_core::Section;

pub fn parse_section(raw: &str) -> Result<Section, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "timeline" => Ok(Section::Timeline),
        "quote" => Ok(Section::Quote),
        "map" => Ok(Section::Map),
        "charts" => Ok(Section::Charts),
        other => Err(format!(
            "unknown section: {other} (use timeline/quote/map/charts)"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_sections_case_insensitively() {
        assert_eq!(parse_section("timeline").unwrap(), Section::Timeline);
        assert_eq!(parse_section(" Charts ").unwrap(), Section::Charts);
        assert_eq!(parse_section("MAP").unwrap(), Section::Map);
    }

    #[test]
    fn rejects_unknown_sections() {
        assert!(parse_section("biography").is_err());
    }
}
