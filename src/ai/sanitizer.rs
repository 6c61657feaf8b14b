/// shell 코드 블록 여는 마커
const FENCE_OPEN: &str = "```bash";
/// 코드 블록 닫는 마커
const FENCE_CLOSE: &str = "```";

/// 권한 상승 프리픽스
pub const PRIVILEGE_PREFIX: &str = "sudo ";

/// AI 응답에서 마크다운 코드 블록 흔적을 제거하여 실행 가능한 명령어만 남김
///
/// 여는 마커(```` ```bash ````)를 모두 지운 뒤 남은 ```` ``` ````를 모두 지우고 trim 합니다.
/// 어떤 입력이든 실패하지 않습니다.
///
/// # Examples
/// ```
/// use nlcmd::ai::sanitizer::strip_artifacts;
///
/// assert_eq!(strip_artifacts("```bash\nls -la\n```"), "ls -la");
/// assert_eq!(strip_artifacts("```bash```"), "");
/// ```
pub fn strip_artifacts(raw: &str) -> String {
    raw.replace(FENCE_OPEN, "")
        .replace(FENCE_CLOSE, "")
        .trim()
        .to_string()
}

/// 명령어 앞에 `sudo `를 붙임
pub fn add_privilege_prefix(command: &str) -> String {
    format!("{}{}", PRIVILEGE_PREFIX, command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_code_block() {
        let cases = [
            ("```bash\nls -la\n```", "ls -la"),
            ("```bash\necho 'Hello, World!'\n```", "echo 'Hello, World!'"),
            (
                "```bash\napt-get update && apt-get upgrade\n```",
                "apt-get update && apt-get upgrade",
            ),
            ("```bash\n   python3 script.py\n```", "python3 script.py"),
        ];

        for (input, expected) in cases {
            assert_eq!(strip_artifacts(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_clean_command() {
        assert_eq!(strip_artifacts("ls -la"), "ls -la");
        assert_eq!(strip_artifacts("  \tdf -h\n"), "df -h");
        assert_eq!(strip_artifacts(""), "");
    }

    #[test]
    fn test_unterminated_fence() {
        assert_eq!(strip_artifacts("```bash\nls -la"), "ls -la");
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(strip_artifacts("```bash```"), "");
        assert_eq!(strip_artifacts("```bash\n```"), "");
    }

    #[test]
    fn test_generic_fence() {
        // 언어 표기가 없는 블록도 닫는 마커 규칙으로 제거됨
        assert_eq!(strip_artifacts("```\ndate\n```"), "date");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "```bash\nls -la\n```",
            "```bash\nls -la",
            "```bash```",
            "  plain  ",
            "``````bash``` x",
            "",
        ];

        for input in inputs {
            let once = strip_artifacts(input);
            assert_eq!(strip_artifacts(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_add_privilege_prefix() {
        assert_eq!(add_privilege_prefix("ls -la"), "sudo ls -la");
        assert_eq!(add_privilege_prefix(""), "sudo ");
    }
}
