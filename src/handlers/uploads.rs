//! Profile Image Upload Handler
//!
//! `multipart/form-data`의 `file` 필드 하나를 받아 저장하고 공개 URL을 돌려줍니다.
//! 응답은 `{ success, url }` / `{ success: false, message, error? }` 형태입니다.

use actix_multipart::Multipart;
use actix_web::{post, web, HttpRequest, HttpResponse};
use futures_util::TryStreamExt;
use crate::core::AppContext;
use crate::domain::dto::uploads::UploadResponse;
use crate::errors::AppError;

/// 파일을 담는 multipart 필드 이름
const FILE_FIELD: &str = "file";

/// 업로드된 파일 (원본 파일명, 내용)
struct UploadedFile {
    filename: Option<String>,
    bytes: Vec<u8>,
}

/// 프로필 이미지 업로드
///
/// # Endpoint
/// `POST /api/auth/upload`
#[post("/upload")]
pub async fn upload_image(
    req: HttpRequest,
    context: web::Data<AppContext>,
    mut payload: Multipart,
) -> HttpResponse {
    let file = match read_file_field(&mut payload, context.uploads.max_bytes()).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return HttpResponse::BadRequest().json(UploadResponse::failure("No file uploaded", None));
        }
        Err(e) => return upload_failure(e),
    };

    match context.uploads.store(file.filename.as_deref(), file.bytes).await {
        Ok(filename) => {
            let info = req.connection_info();
            let url = context.uploads.public_url(info.scheme(), info.host(), &filename);
            HttpResponse::Ok().json(UploadResponse::success(url))
        }
        Err(e) => upload_failure(e),
    }
}

fn upload_failure(err: AppError) -> HttpResponse {
    log::warn!("업로드 실패: {}", err);
    HttpResponse::BadRequest().json(UploadResponse::failure(
        "Failed to upload image",
        Some(err.to_string()),
    ))
}

/// `file` 필드를 찾아 읽습니다. 다른 필드는 건너뜁니다.
///
/// 읽는 도중 `max_bytes`를 넘으면 즉시 중단합니다.
async fn read_file_field(payload: &mut Multipart, max_bytes: usize) -> Result<Option<UploadedFile>, AppError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::ValidationError(e.to_string()))?
    {
        if field.name() != Some(FILE_FIELD) {
            while field
                .try_next()
                .await
                .map_err(|e| AppError::ValidationError(e.to_string()))?
                .is_some()
            {}
            continue;
        }

        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .try_next()
            .await
            .map_err(|e| AppError::ValidationError(e.to_string()))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(AppError::ValidationError(format!(
                    "File exceeds the {} byte limit",
                    max_bytes
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        return Ok(Some(UploadedFile { filename, bytes }));
    }

    Ok(None)
}
