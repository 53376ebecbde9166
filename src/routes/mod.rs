//! API 라우트 설정 모듈
//!
//! 기능별 엔드포인트를 `/api/v1` 아래에 등록하고 헬스체크를 제공합니다.
//! 모든 핸들러는 `web::Data<AppContext>`가 앱 데이터로 등록되어 있다고 가정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(context))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::core::context::AppContext;
use crate::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 본문 JSON 파싱 실패도 `{"error": ...}` 형태의 400 응답으로 통일합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    );

    cfg.service(health_check);

    configure_application_routes(cfg);
    configure_activation_routes(cfg);
    configure_society_routes(cfg);
    configure_user_routes(cfg);
    configure_notification_routes(cfg);
}

/// 신청서 라우트
///
/// - `POST /api/v1/applications` - 신청서 제출
/// - `GET /api/v1/applications` - 전체 목록
/// - `GET /api/v1/applications/summary` - 상태별 집계
/// - `GET /api/v1/applications/{id}` - 단건 조회
/// - `POST /api/v1/applications/{id}/approve` - 승인 (조합 생성 + 활성화 토큰 발급)
/// - `POST /api/v1/applications/{id}/reject` - 거절
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/applications/app-1/approve \
///   -H "Content-Type: application/json" \
///   -d '{"reviewedBy":"admin-1"}'
/// ```
fn configure_application_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/applications")
            .service(handlers::applications::submit_application)
            .service(handlers::applications::list_applications)
            // `/{id}`보다 먼저 등록
            .service(handlers::applications::application_summary)
            .service(handlers::applications::get_application)
            .service(handlers::applications::approve_application)
            .service(handlers::applications::reject_application),
    );
}

/// 계정 활성화 라우트
///
/// - `GET /api/v1/activation/{token}` - 토큰 상태 조회
/// - `POST /api/v1/activation` - 계정 활성화
fn configure_activation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activation")
            .service(handlers::activation::activate_account)
            .service(handlers::activation::get_activation_token),
    );
}

/// 조합 라우트 (정지, 소속 사용자, 회원 초대 포함)
fn configure_society_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/societies")
            .service(handlers::societies::list_societies)
            .service(handlers::societies::get_society)
            .service(handlers::societies::suspend_society)
            .service(handlers::societies::list_society_users)
            .service(handlers::societies::invite_member)
            .service(handlers::societies::list_society_invitations),
    );

    cfg.service(
        web::scope("/api/v1/invitations").service(handlers::invitations::list_invitations),
    );
}

/// 사용자 조회 및 로그인 라우트
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_user_by_email),
    );

    cfg.service(web::scope("/api/v1/auth").service(handlers::auth::login));
}

fn configure_notification_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .service(handlers::notifications::list_notifications),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "coopkonnect_backend",
///   "version": "0.1.0",
///   "timestamp": "2024-03-01T09:00:00Z",
///   "storage": "file"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(ctx: web::Data<AppContext>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": ctx.clock.now().to_rfc3339(),
        "storage": ctx.database.backend_name(),
    }))
}
