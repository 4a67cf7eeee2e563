//! String transformation utilities for code generation

/// Convert a string to snake_case
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_is_lowercase = false;

    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            // Add underscore before uppercase letter if:
            // - Not at the start
            // - Previous character was lowercase
            if i > 0 && prev_is_lowercase {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
            prev_is_lowercase = false;
        } else if ch.is_alphanumeric() {
            result.push(ch);
            prev_is_lowercase = ch.is_lowercase();
        } else if ch == '-' || ch == '_' || ch == ' ' {
            if !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            prev_is_lowercase = false;
        }
    }

    result.trim_matches('_').to_string()
}

/// Include guard macro for a generated header, e.g. `REQUEST_TO_SDL_H_`
pub fn header_guard(class_name: &str) -> String {
    format!("{}_H_", to_snake_case(class_name).to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("RequestToSDL"), "request_to_sdl");
        assert_eq!(to_snake_case("requestToHmi"), "request_to_hmi");
        assert_eq!(to_snake_case("request-to-sdl"), "request_to_sdl");
        assert_eq!(to_snake_case("request_to_sdl"), "request_to_sdl");
        assert_eq!(to_snake_case("HMIProxy"), "hmiproxy");
        assert_eq!(to_snake_case("Qt HMI Proxy"), "qt_hmi_proxy");
        assert_eq!(to_snake_case("__"), "");
    }

    #[test]
    fn test_header_guard() {
        assert_eq!(header_guard("RequestToSDL"), "REQUEST_TO_SDL_H_");
    }
}
