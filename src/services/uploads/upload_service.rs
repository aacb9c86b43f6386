//! # 프로필 이미지 업로드 서비스
//!
//! 업로드된 파일을 `UPLOAD_DIR` 아래에 `<unix millis><확장자>` 이름으로 저장합니다.
//! 같은 이름이 이미 있으면 밀리초 값을 1씩 올려 빈 이름을 찾으며,
//! 파일은 `create_new`로 열어 동시 업로드끼리 덮어쓰지 않습니다.
//!
//! 디스크 쓰기는 actix 블로킹 풀(`web::block`)에서 실행됩니다.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use actix_web::web;
use chrono::Utc;
use crate::config::UploadConfig;
use crate::errors::{AppError, AppResult};

/// 업로드 파일이 공개되는 URL 경로
pub const PUBLIC_UPLOAD_PATH: &str = "/public/uploads";

/// 업로드 서비스
#[derive(Debug, Clone)]
pub struct UploadService {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(config: &UploadConfig) -> Self {
        Self {
            dir: config.dir.clone(),
            max_bytes: config.max_bytes,
        }
    }

    /// 저장 디렉터리
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 허용되는 최대 파일 크기 (바이트)
    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// 파일을 저장하고 생성된 파일명을 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 최대 크기 초과
    /// * `AppError::StorageError` - 디스크 쓰기 실패
    pub async fn store(&self, original_name: Option<&str>, bytes: Vec<u8>) -> AppResult<String> {
        if bytes.len() > self.max_bytes {
            return Err(AppError::ValidationError(format!(
                "File exceeds the {} byte limit",
                self.max_bytes
            )));
        }

        let extension = extension_of(original_name);
        let dir = self.dir.clone();
        let size = bytes.len();

        let filename = web::block(move || write_unique(&dir, &extension, &bytes))
            .await
            .map_err(|e| AppError::StorageError(format!("업로드 작업 실행 실패: {}", e)))?
            .map_err(|e| AppError::StorageError(format!("업로드 파일 저장 실패: {}", e)))?;

        log::info!("📁 파일 업로드 완료: {} ({} bytes)", filename, size);
        Ok(filename)
    }

    /// 저장된 파일의 공개 URL
    pub fn public_url(&self, scheme: &str, host: &str, filename: &str) -> String {
        format!("{}://{}{}/{}", scheme, host, PUBLIC_UPLOAD_PATH, filename)
    }
}

/// 원본 파일명의 확장자 (`.png` 형태). 영숫자가 아닌 확장자는 버립니다.
fn extension_of(original_name: Option<&str>) -> String {
    original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default()
}

fn write_unique(dir: &Path, extension: &str, bytes: &[u8]) -> std::io::Result<String> {
    let mut stamp = Utc::now().timestamp_millis();

    loop {
        let filename = format!("{}{}", stamp, extension);
        let path = dir.join(&filename);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                write_or_remove(&path, file, bytes)?;
                return Ok(filename);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => stamp += 1,
            Err(e) => return Err(e),
        }
    }
}

/// 쓰기에 실패하면 일부만 기록된 파일을 지웁니다.
fn write_or_remove<W: Write>(path: &Path, mut file: W, bytes: &[u8]) -> std::io::Result<()> {
    if let Err(e) = file.write_all(bytes).and_then(|_| file.flush()) {
        drop(file);
        if let Err(remove_err) = std::fs::remove_file(path) {
            log::warn!("불완전한 업로드 파일 삭제 실패: {} ({})", path.display(), remove_err);
        }
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn service(dir: &Path, max_bytes: usize) -> UploadService {
        UploadService::new(&UploadConfig {
            dir: dir.to_path_buf(),
            max_bytes,
        })
    }

    #[rstest]
    #[case(Some("avatar.png"), ".png")]
    #[case(Some("photo.final.JPG"), ".JPG")]
    #[case(Some("noext"), "")]
    #[case(Some("weird.p%g"), "")]
    #[case(None, "")]
    fn test_extension_of(#[case] name: Option<&str>, #[case] expected: &str) {
        assert_eq!(extension_of(name), expected);
    }

    #[actix_web::test]
    async fn test_store_writes_bytes_under_stamped_name() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = service(dir.path(), 1024);

        let filename = uploads.store(Some("avatar.png"), b"png-bytes".to_vec()).await.unwrap();

        assert!(filename.ends_with(".png"));
        let stem = filename.trim_end_matches(".png");
        assert!(stem.parse::<i64>().is_ok());
        assert_eq!(std::fs::read(dir.path().join(&filename)).unwrap(), b"png-bytes");
    }

    #[actix_web::test]
    async fn test_colliding_names_are_bumped() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = service(dir.path(), 1024);

        let first = uploads.store(Some("a.png"), b"one".to_vec()).await.unwrap();
        let second = uploads.store(Some("b.png"), b"two".to_vec()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(std::fs::read(dir.path().join(&first)).unwrap(), b"one");
        assert_eq!(std::fs::read(dir.path().join(&second)).unwrap(), b"two");
    }

    #[actix_web::test]
    async fn test_oversized_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let uploads = service(dir.path(), 4);

        let result = uploads.store(Some("a.png"), b"too large".to_vec()).await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_public_url() {
        let uploads = service(Path::new("public/uploads"), 1);
        assert_eq!(
            uploads.public_url("http", "localhost:8080", "1718000000000.png"),
            "http://localhost:8080/public/uploads/1718000000000.png"
        );
    }

    struct BrokenDisk;

    impl Write for BrokenDisk {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(ErrorKind::Other, "disk full"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_failed_write_removes_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("1718000000000.png");
        std::fs::write(&path, b"part").unwrap();

        let result = write_or_remove(&path, BrokenDisk, b"png-bytes");

        assert!(result.is_err());
        assert!(!path.exists());
    }
}
