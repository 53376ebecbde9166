//! 워크플로우 설정 관리 모듈
//!
//! 활성화 토큰 수명, 이메일 링크의 기준 URL, 플랫폼 관리자 계정 등
//! 협동조합 온보딩 워크플로우에 필요한 설정을 관리합니다.

use std::env;

use chrono::Duration;

use super::Environment;

/// 활성화 토큰 기본 수명 (시간)
pub const DEFAULT_ACTIVATION_TOKEN_TTL_HOURS: i64 = 72;

/// 활성화 토큰 최대 수명 (1년)
pub const MAX_ACTIVATION_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// 이메일 링크 기본 URL
pub const DEFAULT_APP_BASE_URL: &str = "https://coopkonnect.com";

/// 활성화 토큰 및 이메일 링크 설정
pub struct ActivationConfig;

impl ActivationConfig {
    /// 활성화 토큰 수명 (`ACTIVATION_TOKEN_TTL_HOURS`, 기본 72시간)
    ///
    /// 1..=8760 범위를 벗어나거나 숫자가 아닌 값은 무시하고 기본값을 사용합니다.
    pub fn token_ttl_hours() -> i64 {
        Self::parse_ttl_hours(env::var("ACTIVATION_TOKEN_TTL_HOURS").ok().as_deref())
    }

    fn parse_ttl_hours(raw: Option<&str>) -> i64 {
        match raw.map(|v| v.trim().parse::<i64>()) {
            Some(Ok(hours)) if (1..=MAX_ACTIVATION_TOKEN_TTL_HOURS).contains(&hours) => hours,
            Some(_) => {
                log::warn!(
                    "⚠️ ACTIVATION_TOKEN_TTL_HOURS 값이 올바르지 않습니다, 기본값 {}시간 사용",
                    DEFAULT_ACTIVATION_TOKEN_TTL_HOURS
                );
                DEFAULT_ACTIVATION_TOKEN_TTL_HOURS
            }
            None => DEFAULT_ACTIVATION_TOKEN_TTL_HOURS,
        }
    }

    pub fn token_ttl() -> Duration {
        Duration::hours(Self::token_ttl_hours())
    }

    /// 이메일 본문에 들어갈 링크의 기준 URL (`APP_BASE_URL`)
    pub fn base_url() -> String {
        env::var("APP_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_APP_BASE_URL.to_string())
    }

    /// 계정 활성화 페이지 링크
    ///
    /// ```rust,ignore
    /// let url = ActivationConfig::activation_url("abc");
    /// assert_eq!(url, "https://coopkonnect.com/activate-account?token=abc");
    /// ```
    pub fn activation_url(token: &str) -> String {
        format!(
            "{}/activate-account?token={}",
            Self::base_url(),
            urlencoding::encode(token)
        )
    }

    /// 회원 초대 수락 페이지 링크
    pub fn invitation_url(code: &str) -> String {
        format!(
            "{}/member-invitation?code={}",
            Self::base_url(),
            urlencoding::encode(code)
        )
    }
}

/// 플랫폼 관리자 및 초기 데이터 설정
///
/// # Environment Variables
///
/// - `ADMIN_EMAIL`: 관리자 계정이자 신규 신청 알림 수신 주소
/// - `ADMIN_PASSWORD`: 최초 실행 시 생성되는 관리자 비밀번호
/// - `SEED_DEMO_DATA`: 데모 신청서/조합 생성 여부
pub struct PlatformConfig;

impl PlatformConfig {
    pub fn admin_email() -> String {
        env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@coopkonnect.com".to_string())
    }

    pub fn admin_password() -> String {
        match env::var("ADMIN_PASSWORD") {
            Ok(password) if !password.is_empty() => password,
            _ => {
                if Environment::current() == Environment::Production {
                    log::warn!("⚠️ ADMIN_PASSWORD 미설정: 기본 관리자 비밀번호를 사용합니다");
                }
                "admin123".to_string()
            }
        }
    }

    /// 데모 데이터 생성 여부. 기본값은 프로덕션이 아닐 때 true
    pub fn seed_demo_data() -> bool {
        match env::var("SEED_DEMO_DATA") {
            Ok(value) => matches!(value.to_lowercase().as_str(), "true" | "1" | "yes"),
            Err(_) => Environment::current() != Environment::Production,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_ttl_default() {
        if env::var("ACTIVATION_TOKEN_TTL_HOURS").is_err() {
            assert_eq!(ActivationConfig::token_ttl_hours(), 72);
            assert_eq!(ActivationConfig::token_ttl(), Duration::hours(72));
        }
    }

    #[test]
    fn test_activation_ttl_bounds() {
        assert_eq!(ActivationConfig::parse_ttl_hours(None), 72);
        assert_eq!(ActivationConfig::parse_ttl_hours(Some("24")), 24);
        assert_eq!(ActivationConfig::parse_ttl_hours(Some(" 8760 ")), 8760);
        assert_eq!(ActivationConfig::parse_ttl_hours(Some("8761")), 72);
        assert_eq!(ActivationConfig::parse_ttl_hours(Some("100000000000")), 72);
        assert_eq!(ActivationConfig::parse_ttl_hours(Some("0")), 72);
        assert_eq!(ActivationConfig::parse_ttl_hours(Some("-5")), 72);
        assert_eq!(ActivationConfig::parse_ttl_hours(Some("abc")), 72);
    }

    #[test]
    fn test_activation_url_format() {
        if env::var("APP_BASE_URL").is_err() {
            assert_eq!(
                ActivationConfig::activation_url("abc-123_XY"),
                "https://coopkonnect.com/activate-account?token=abc-123_XY"
            );
            assert_eq!(
                ActivationConfig::invitation_url("code"),
                "https://coopkonnect.com/member-invitation?code=code"
            );
        }
    }

    #[test]
    fn test_admin_email_default() {
        if env::var("ADMIN_EMAIL").is_err() {
            assert_eq!(PlatformConfig::admin_email(), "admin@coopkonnect.com");
        }
    }
}
