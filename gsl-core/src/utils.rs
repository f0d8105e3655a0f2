//! Shared utility functions for code generation.

/// Convert a string to snake_case (e.g., "moveForward" -> "move_forward")
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    let mut prev_lower = false;
    for c in s.chars() {
        if c.is_uppercase() && prev_lower {
            result.push('_');
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        result.extend(c.to_lowercase());
    }
    result.replace('-', "_")
}

/// Convert a string to SCREAMING_SNAKE_CASE (e.g., "move_forward" -> "MOVE_FORWARD")
pub fn to_screaming_snake_case(s: &str) -> String {
    to_snake_case(s).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("moveMotor"), "move_motor");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("read_analog"), "read_analog");
        assert_eq!(to_snake_case("HTTP"), "http");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_to_screaming_snake_case() {
        assert_eq!(to_screaming_snake_case("move_forward"), "MOVE_FORWARD");
        assert_eq!(
            to_screaming_snake_case("hedgehog_read_analog"),
            "HEDGEHOG_READ_ANALOG"
        );
        assert_eq!(to_screaming_snake_case("getAnalog"), "GET_ANALOG");
    }
}
