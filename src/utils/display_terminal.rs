//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동과 초기 데이터 생성 과정에서 사용되는 터미널 출력 함수들을 제공합니다.
//! 박스 형태의 제목, 진행 단계 표시, 완료 상태 등을 시각적으로 표현합니다.

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                 CoopKonnect Seed                 ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Seeding society applications
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 처리된 항목 수와 함께 표시합니다
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

/// 서브 작업의 상태를 표시합니다
///
/// ```text
///    ├─ admin@coopkonnect.com: created
/// ```
pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 초기 데이터 생성 결과 요약을 출력합니다
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║              🎉 COOPKONNECT DATA READY           ║
/// ╚══════════════════════════════════════════════════╝
///    📄 Applications: 2
///    👤 Users: 2
///    🏦 Societies: 1
///    💾 Storage: file
/// ```
pub fn print_final_summary(applications: usize, users: usize, societies: usize, backend: &str) {
    println!();
    print_boxed_title("🎉 COOPKONNECT DATA READY");
    println!("   📄 Applications: {}", applications);
    println!("   👤 Users: {}", users);
    println!("   🏦 Societies: {}", societies);
    println!("   💾 Storage: {}", backend);
    println!();
}
