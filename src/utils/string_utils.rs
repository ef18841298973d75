//! # 문자열 유틸리티
//!
//! 도시명의 대소문자 무시 비교를 위한 정규식 이스케이프 헬퍼입니다.

/// 정규식 메타 문자를 이스케이프합니다.
///
/// 사용자 입력(도시명)을 MongoDB `$regex` 필터에 넣기 전에 호출하여
/// 입력이 패턴으로 해석되는 것을 방지합니다.
pub fn escape_regex(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '.' | '*' | '+' | '?' | '^' | '$' | '(' | ')' | '[' | ']' | '{' | '}' | '|' | '\\' | '/' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}

/// 대소문자를 무시하는 완전 일치 정규식 패턴을 생성합니다.
///
/// 도시명 비교에 사용되는 앵커된 패턴을 반환합니다.
/// 부분 일치가 아닌 전체 문자열 일치만 허용합니다.
pub fn exact_match_pattern(value: &str) -> String {
    format!("^{}$", escape_regex(value.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_regex_passes_plain_text() {
        assert_eq!(escape_regex("Delhi"), "Delhi");
        assert_eq!(escape_regex("New Delhi"), "New Delhi");
    }

    #[test]
    fn test_escape_regex_escapes_meta_characters() {
        assert_eq!(escape_regex("a.b"), "a\\.b");
        assert_eq!(escape_regex("x*"), "x\\*");
        assert_eq!(escape_regex("(city)"), "\\(city\\)");
        assert_eq!(escape_regex("a|b"), "a\\|b");
        assert_eq!(escape_regex("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_exact_match_pattern_is_anchored_and_trimmed() {
        assert_eq!(exact_match_pattern("Delhi"), "^Delhi$");
        assert_eq!(exact_match_pattern("  Delhi  "), "^Delhi$");
        assert_eq!(exact_match_pattern("St. Louis"), "^St\\. Louis$");
    }
}
