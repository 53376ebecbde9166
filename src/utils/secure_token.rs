//! 추측 불가능한 토큰 문자열 생성
//!
//! 활성화 토큰과 회원 초대 코드는 OS 난수 생성기에서 얻은 바이트를
//! URL-safe base64 (패딩 없음)로 인코딩해 만듭니다.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::RngCore;
use rand::rngs::OsRng;

/// 활성화 토큰 엔트로피 (바이트)
pub const ACTIVATION_TOKEN_BYTES: usize = 32;

/// 초대 코드 엔트로피 (바이트)
pub const INVITATION_CODE_BYTES: usize = 16;

/// `num_bytes` 바이트의 난수를 URL-safe base64 문자열로 반환합니다.
pub fn generate_secure_token(num_bytes: usize) -> String {
    let mut bytes = vec![0u8; num_bytes];
    OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn generate_activation_token() -> String {
    generate_secure_token(ACTIVATION_TOKEN_BYTES)
}

pub fn generate_invitation_code() -> String {
    generate_secure_token(INVITATION_CODE_BYTES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_activation_token_is_url_safe() {
        let token = generate_activation_token();

        // 32 bytes → 43 chars without padding
        assert_eq!(token.len(), 43);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn test_tokens_are_unique() {
        let tokens: HashSet<String> = (0..100).map(|_| generate_activation_token()).collect();
        assert_eq!(tokens.len(), 100);
    }

    #[test]
    fn test_invitation_code_length() {
        assert_eq!(generate_invitation_code().len(), 22);
    }
}
