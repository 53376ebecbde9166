//! 파일 기반 키-값 저장소
//!
//! 데이터 디렉터리 아래에 키마다 `<key>.json` 파일 하나를 둡니다.
//! 쓰기는 임시 파일에 기록한 뒤 이름을 바꾸는 방식이라 중간에 끊겨도
//! 이전 내용이 남습니다.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, warn};
use tokio::fs;

use super::{KeyValueStore, ensure_safe_key};
use crate::errors::{AppResult, ErrorContext};

#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// 디렉터리를 (없으면 생성해서) 저장소로 엽니다.
    pub async fn open(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .storage_context(&format!("데이터 디렉터리 생성 실패 ({})", root.display()))?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        ensure_safe_key(key)?;
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    fn backend_name(&self) -> &'static str {
        "file"
    }

    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).storage_context(&format!("파일 읽기 실패 ({})", path.display())),
        }
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, value)
            .await
            .storage_context(&format!("파일 쓰기 실패 ({})", tmp_path.display()))?;

        if let Err(e) = fs::rename(&tmp_path, &path).await {
            if let Err(cleanup) = fs::remove_file(&tmp_path).await {
                warn!("⚠️ 임시 파일 삭제 실패 ({}): {}", tmp_path.display(), cleanup);
            }
            return Err(e).storage_context(&format!("파일 교체 실패 ({})", path.display()));
        }

        debug!("💾 {} 저장", path.display());
        Ok(())
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).storage_context(&format!("파일 삭제 실패 ({})", path.display())),
        }
    }
}
