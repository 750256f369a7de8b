use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::StreamExt;

use crate::{
    api::metrics,
    config::Config,
    database::{loader, DatasetStore},
    models::{MessageResponse, UploadResponse},
    utils::AppError,
};

/// Nome do campo multipart que carrega o arquivo JSON
pub const UPLOAD_FIELD: &str = "file";

/// Schema for the OpenAPI docs only
#[derive(utoipa::ToSchema)]
#[allow(dead_code)]
pub struct UploadForm {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

/// Reads the bytes of the `file` field, skipping any other field.
async fn read_file_field(
    payload: &mut Multipart,
    limit: usize,
) -> Result<Option<Vec<u8>>, AppError> {
    while let Some(field) = payload.next().await {
        let mut field = field.map_err(|e| AppError::MalformedUpload(e.to_string()))?;
        let wanted = field.name() == Some(UPLOAD_FIELD);

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| AppError::MalformedUpload(e.to_string()))?;
            if !wanted {
                continue;
            }
            if bytes.len() + chunk.len() > limit {
                return Err(AppError::MalformedUpload(format!(
                    "file exceeds {} bytes",
                    limit
                )));
            }
            bytes.extend_from_slice(&chunk);
        }

        if wanted {
            return Ok(Some(bytes));
        }
    }

    Ok(None)
}

/// POST /users - Recebe o JSON de usuários e substitui o dataset em memória
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body(content = UploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Dataset replaced", body = UploadResponse),
        (status = 400, description = "Missing file or invalid JSON", body = MessageResponse),
        (status = 500, description = "Could not persist the file", body = crate::models::ErrorResponse)
    )
)]
pub async fn upload_users(
    mut payload: Multipart,
    store: web::Data<DatasetStore>,
    config: web::Data<Config>,
) -> Result<HttpResponse, AppError> {
    log::info!("📤 POST /users - Receiving dataset upload");

    let bytes = match read_file_field(&mut payload, config.max_upload_bytes).await {
        Ok(Some(bytes)) => bytes,
        Ok(None) => {
            log::warn!("⚠️  POST /users - No '{}' field in request", UPLOAD_FIELD);
            return Ok(HttpResponse::BadRequest().json(MessageResponse {
                message: "File not found.".to_string(),
            }));
        }
        Err(e) => {
            log::warn!("⚠️  POST /users - {}", e);
            return Err(e);
        }
    };

    // Valida antes de tocar no disco ou no snapshot atual
    let users = loader::parse_users(&bytes).map_err(|e| {
        log::warn!("⚠️  POST /users - {}", e);
        e
    })?;

    let count = users.len();
    {
        // Um upload por vez: o arquivo gravado é sempre o snapshot em memória
        let _writer = store.lock_writer().await;
        loader::persist(&config.data_file, &bytes).await.map_err(|e| {
            log::error!("❌ POST /users - {}", e);
            e
        })?;
        store.replace(users);
    }
    metrics::increment_upload_count();

    log::info!("✅ Dataset replaced ({} users)", count);

    Ok(HttpResponse::Ok().json(UploadResponse {
        message: "File received successfully".to_string(),
        users: count,
    }))
}
